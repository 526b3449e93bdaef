use crate::config;

/// Load settings, falling back to defaults on any problem.
///
/// The problem is returned so it can be logged once logging is set up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    settle(config::Settings::load())
}

fn settle(
    loaded: Result<config::Settings, ::config::ConfigError>,
) -> (config::Settings, Option<String>) {
    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config: {msg}")),
            ),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config: {e}")),
        ),
    }
}
