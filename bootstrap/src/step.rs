use crate::BootstrapError;

/// Runs one lifecycle step, logging when it starts and how it ended.
pub(crate) fn logged_step<T, F>(name: &str, step: F) -> Result<T, BootstrapError>
where
    F: FnOnce() -> Result<T, BootstrapError>,
{
    log::debug!("-> {name}");
    let result = step();
    match &result {
        Ok(_) => log::debug!("<- {name}"),
        Err(e) => log::warn!("<- {name} failed: {e}"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_step_passes_result_through() {
        assert_eq!(logged_step("ok", || Ok(3)), Ok(3));
        assert_eq!(
            logged_step::<(), _>("fails", || Err(BootstrapError::AlreadyInitialized)),
            Err(BootstrapError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_logged_step_runs_once() {
        let mut runs = 0;
        let _ = logged_step("count", || {
            runs += 1;
            Ok(())
        });
        assert_eq!(runs, 1);
    }
}
