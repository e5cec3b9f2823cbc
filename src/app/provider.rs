use bootstrap::{MountConfig, RootProvider};
use leptos::{mount::mount_to, prelude::*};
use web_sys::HtmlElement;

/// The mounted Leptos root. Its reactive owner lives until the page is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootInstance {
    component: &'static str,
}

impl RootInstance {
    pub fn component(&self) -> &'static str {
        self.component
    }
}

/// Builds the root view with Leptos into the resolved target element.
pub struct LeptosRoot<F> {
    component: &'static str,
    view: F,
}

impl<F> LeptosRoot<F> {
    pub fn new(component: &'static str, view: F) -> Self {
        Self { component, view }
    }
}

impl<F, N> RootProvider for LeptosRoot<F>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    type Element = HtmlElement;
    type Instance = RootInstance;

    fn construct(self, config: MountConfig<HtmlElement>) -> RootInstance {
        log::debug!("Constructing <{} />", self.component);
        // there is no unmount, keep the reactive system alive like `mount_to_body`
        mount_to(config.target, self.view).forget();
        RootInstance {
            component: self.component,
        }
    }
}
