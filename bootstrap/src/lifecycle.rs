use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    apply_stylesheets, mount, step::logged_step, AppHandle, BootstrapConfig, BootstrapError,
    HostDocument, RootProvider,
};

static PROCESS_INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Mounting,
    Mounted,
    Failed,
}

impl Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleState::Uninitialized => write!(f, "uninitialized"),
            LifecycleState::Mounting => write!(f, "mounting"),
            LifecycleState::Mounted => write!(f, "mounted"),
            LifecycleState::Failed => write!(f, "failed"),
        }
    }
}

/// One-shot initialization flag.
///
/// [`InitGuard::process`] is shared by the whole process; harnesses can supply
/// their own flag with [`InitGuard::with_flag`].
#[derive(Debug, Clone, Copy)]
pub struct InitGuard {
    flag: &'static AtomicBool,
}

impl InitGuard {
    pub fn process() -> Self {
        Self::with_flag(&PROCESS_INITIALIZED)
    }

    pub const fn with_flag(flag: &'static AtomicBool) -> Self {
        Self { flag }
    }

    pub fn is_claimed(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Claims the flag; fails if it has been claimed before. Never released.
    pub fn claim(&self) -> Result<(), BootstrapError> {
        self.flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| ())
            .map_err(|_| BootstrapError::AlreadyInitialized)
    }
}

/// The bootstrap sequence: stylesheets first, then a single mount.
///
/// `Uninitialized -> Mounting -> Mounted | Failed`; both end states are
/// terminal and any further [`Bootstrap::run`] is rejected.
#[derive(Debug)]
pub struct Bootstrap {
    config: BootstrapConfig,
    guard: InitGuard,
    state: LifecycleState,
}

impl Bootstrap {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            guard: InitGuard::process(),
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn with_guard(mut self, guard: InitGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    fn transition(&mut self, next: LifecycleState) {
        log::debug!("Bootstrap state {} -> {}", self.state, next);
        self.state = next;
    }

    pub fn run<D, P>(
        &mut self,
        document: &D,
        provider: P,
    ) -> Result<AppHandle<P::Instance, D::Element>, BootstrapError>
    where
        D: HostDocument,
        P: RootProvider<Element = D::Element>,
    {
        if self.state != LifecycleState::Uninitialized {
            log::error!("Bootstrap already ran, state is {}", self.state);
            return Err(BootstrapError::AlreadyInitialized);
        }
        self.config.validate()?;
        self.guard.claim()?;

        self.transition(LifecycleState::Mounting);
        let config = &self.config;
        let result = logged_step("bootstrap", || {
            apply_stylesheets(document, &config.stylesheets)?;
            mount(document, &config.target_id, provider)
        });
        match &result {
            Ok(_) => self.transition(LifecycleState::Mounted),
            Err(e) => {
                log::error!("Bootstrap failed: {e}");
                self.transition(LifecycleState::Failed);
            }
        }
        result
    }
}

/// Runs the bootstrap once for this process.
pub fn initialize<D, P>(
    config: BootstrapConfig,
    document: &D,
    provider: P,
) -> Result<AppHandle<P::Instance, D::Element>, BootstrapError>
where
    D: HostDocument,
    P: RootProvider<Element = D::Element>,
{
    Bootstrap::new(config).run(document, provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mount::tests::RecordingProvider, MemoryDocument, StyleLayer, StylesheetResource};

    fn fresh_guard() -> InitGuard {
        InitGuard::with_flag(Box::leak(Box::new(AtomicBool::new(false))))
    }

    fn cygbot_config() -> BootstrapConfig {
        BootstrapConfig::default().with_stylesheets([
            StylesheetResource::bundled("clock.css", StyleLayer::Feature, ".x { color: blue }"),
            StylesheetResource::bundled("style.css", StyleLayer::Application, ".y { margin: 0 }"),
            StylesheetResource::bundled("framework.css", StyleLayer::Framework, ".x { color: red }"),
        ])
    }

    #[test]
    fn test_run_mounts_after_stylesheets() {
        let (document, app) = MemoryDocument::with_target("app");
        let (provider, constructed) = RecordingProvider::new();
        let mut bootstrap = Bootstrap::new(cygbot_config()).with_guard(fresh_guard());
        assert_eq!(bootstrap.state(), LifecycleState::Uninitialized);

        let handle = bootstrap.run(&document, provider).unwrap();

        assert_eq!(bootstrap.state(), LifecycleState::Mounted);
        assert_eq!(handle.target(), &app);
        assert_eq!(constructed.get(), 1);
        let order: Vec<String> = document
            .stylesheets()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(order, vec!["framework.css", "style.css", "clock.css"]);
        assert_eq!(document.computed_style(".x", "color").as_deref(), Some("blue"));
    }

    #[test]
    fn test_run_missing_target_fails() {
        let document = MemoryDocument::new();
        let (provider, constructed) = RecordingProvider::new();
        let mut bootstrap = Bootstrap::new(cygbot_config()).with_guard(fresh_guard());

        let result = bootstrap.run(&document, provider);

        assert_eq!(
            result.err(),
            Some(BootstrapError::MountTargetMissing {
                target_id: "app".to_string()
            })
        );
        assert_eq!(bootstrap.state(), LifecycleState::Failed);
        assert_eq!(constructed.get(), 0);
    }

    #[test]
    fn test_stylesheet_failure_aborts_before_mount() {
        let (document, _) = MemoryDocument::with_target("app");
        document.reject_stylesheet("style.css");
        let (provider, constructed) = RecordingProvider::new();
        let mut bootstrap = Bootstrap::new(cygbot_config()).with_guard(fresh_guard());

        let result = bootstrap.run(&document, provider);

        assert!(matches!(
            result,
            Err(BootstrapError::StylesheetResourceFailure { .. })
        ));
        assert_eq!(bootstrap.state(), LifecycleState::Failed);
        assert_eq!(constructed.get(), 0);
    }

    #[test]
    fn test_second_run_is_rejected() {
        let (document, _) = MemoryDocument::with_target("app");
        let mut bootstrap = Bootstrap::new(cygbot_config()).with_guard(fresh_guard());
        let (first, _) = RecordingProvider::new();
        let (second, constructed) = RecordingProvider::new();

        bootstrap.run(&document, first).unwrap();
        let result = bootstrap.run(&document, second);

        assert_eq!(result.err(), Some(BootstrapError::AlreadyInitialized));
        assert_eq!(bootstrap.state(), LifecycleState::Mounted);
        assert_eq!(constructed.get(), 0);
        assert_eq!(document.stylesheets().len(), 3);
    }

    #[test]
    fn test_run_after_failure_is_rejected() {
        let document = MemoryDocument::new();
        let mut bootstrap = Bootstrap::new(cygbot_config()).with_guard(fresh_guard());
        let (first, _) = RecordingProvider::new();
        let (second, _) = RecordingProvider::new();

        assert!(bootstrap.run(&document, first).is_err());
        document.append_element("div", Some("app"));

        assert_eq!(
            bootstrap.run(&document, second).err(),
            Some(BootstrapError::AlreadyInitialized)
        );
        assert_eq!(bootstrap.state(), LifecycleState::Failed);
    }

    #[test]
    fn test_shared_guard_rejects_second_bootstrap() {
        static FLAG: AtomicBool = AtomicBool::new(false);
        let guard = InitGuard::with_flag(&FLAG);
        let (document, _) = MemoryDocument::with_target("app");
        let (first, _) = RecordingProvider::new();
        let (second, constructed) = RecordingProvider::new();

        assert!(!guard.is_claimed());
        Bootstrap::new(cygbot_config())
            .with_guard(guard)
            .run(&document, first)
            .unwrap();
        assert!(guard.is_claimed());

        let mut other = Bootstrap::new(cygbot_config()).with_guard(guard);
        assert_eq!(
            other.run(&document, second).err(),
            Some(BootstrapError::AlreadyInitialized)
        );
        assert_eq!(other.state(), LifecycleState::Uninitialized);
        assert_eq!(constructed.get(), 0);
    }

    #[test]
    fn test_invalid_target_id_does_not_claim_guard() {
        let guard = fresh_guard();
        let (document, _) = MemoryDocument::with_target("app");
        let (provider, _) = RecordingProvider::new();

        let result = Bootstrap::new(cygbot_config().with_target_id(""))
            .with_guard(guard)
            .run(&document, provider);

        assert_eq!(result.err(), Some(BootstrapError::InvalidTargetId(String::new())));
        assert!(!guard.is_claimed());
    }

    #[test]
    fn test_initialize_uses_process_guard() {
        let (document, app) = MemoryDocument::with_target("app");
        let (first, _) = RecordingProvider::new();
        let (second, constructed) = RecordingProvider::new();

        let handle = initialize(cygbot_config(), &document, first).unwrap();
        assert_eq!(handle.target(), &app);
        assert!(InitGuard::process().is_claimed());

        assert_eq!(
            initialize(cygbot_config(), &document, second).err(),
            Some(BootstrapError::AlreadyInitialized)
        );
        assert_eq!(constructed.get(), 0);
    }
}
