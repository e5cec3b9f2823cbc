use std::rc::Rc;

use crate::MountTarget;

/// Reference to the mounted root component, handed to host tooling.
///
/// Clones share the same instance. The handle adds no state of its own: it is
/// the instance plus the target it was mounted to.
#[derive(Debug)]
pub struct AppHandle<I, E> {
    instance: Rc<I>,
    target: Rc<MountTarget<E>>,
}

impl<I, E> AppHandle<I, E> {
    pub(crate) fn new(instance: I, target: MountTarget<E>) -> Self {
        Self {
            instance: Rc::new(instance),
            target: Rc::new(target),
        }
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }

    /// The element the root component renders into.
    pub fn target(&self) -> &E {
        self.target.element()
    }

    pub fn target_id(&self) -> &str {
        self.target.id()
    }

    /// Whether both handles reference the same mounted instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.instance, &other.instance)
    }
}

impl<I, E> Clone for AppHandle<I, E> {
    fn clone(&self) -> Self {
        Self {
            instance: Rc::clone(&self.instance),
            target: Rc::clone(&self.target),
        }
    }
}
