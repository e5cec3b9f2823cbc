mod app;

use app::{bundled_stylesheets, main::Main, LeptosRoot, WebDocument};
use bootstrap::{initialize, BootstrapConfig};
use leptos::prelude::*;
use shared_constants::LOG_LEVEL;

fn main() {
    let _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();
    let config = BootstrapConfig::default().with_stylesheets(bundled_stylesheets());
    match initialize(
        config,
        &WebDocument::current(),
        LeptosRoot::new("Main", || view! { <Main /> }),
    ) {
        Ok(app) => log::info!("<{} /> running in #{}", app.instance().component(), app.target_id()),
        Err(e) => log::error!("Failed to start: {e}"),
    }
}
