use crate::{step::logged_step, AppHandle, BootstrapError, HostDocument};

/// Configuration handed to the UI library when constructing the root component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountConfig<E> {
    pub target: E,
}

/// The UI library, seen as a single capability: build the root component
/// rendering into `config.target`.
///
/// Consumed by [`mount`], so one provider constructs at most one instance.
pub trait RootProvider {
    type Element;
    type Instance;

    fn construct(self, config: MountConfig<Self::Element>) -> Self::Instance;
}

/// A resolved mount location. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTarget<E> {
    id: String,
    element: E,
}

impl<E> MountTarget<E> {
    pub fn new(id: impl Into<String>, element: E) -> Self {
        Self {
            id: id.into(),
            element,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

/// Looks up the single element bearing `target_id`.
pub fn resolve_target<D>(
    document: &D,
    target_id: &str,
) -> Result<MountTarget<D::Element>, BootstrapError>
where
    D: HostDocument,
{
    let mut elements = document.elements_by_id(target_id)?;
    match elements.len() {
        0 => Err(BootstrapError::MountTargetMissing {
            target_id: target_id.to_string(),
        }),
        1 => Ok(MountTarget::new(target_id, elements.remove(0))),
        count => Err(BootstrapError::MountTargetAmbiguous {
            target_id: target_id.to_string(),
            count,
        }),
    }
}

/// Resolves `target_id` and constructs the root component bound to it.
///
/// The provider is only invoked once the target is resolved; on failure no
/// instance is created.
pub fn mount<D, P>(
    document: &D,
    target_id: &str,
    provider: P,
) -> Result<AppHandle<P::Instance, D::Element>, BootstrapError>
where
    D: HostDocument,
    P: RootProvider<Element = D::Element>,
{
    logged_step(&format!("mount(`{target_id}`)"), || {
        let target = resolve_target(document, target_id)?;
        let instance = provider.construct(MountConfig {
            target: target.element().clone(),
        });
        log::info!("Mounted root component to #{}", target_id);
        Ok(AppHandle::new(instance, target))
    })
}
