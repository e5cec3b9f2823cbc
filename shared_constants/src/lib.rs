pub const APP_TARGET_ID: &str = "app";

pub const FRAMEWORK_STYLESHEET: &str = "framework.css";
pub const APPLICATION_STYLESHEET: &str = "style.css";
pub const FEATURE_STYLESHEET: &str = "clock.css";

/// Attribute put on every registered `<style>` element, holding the resource name.
pub const STYLESHEET_ATTRIBUTE: &str = "data-stylesheet";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
