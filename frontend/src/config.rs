use log::Level;

/// Added on top of the measured answer height so the expanded container
/// fits the paragraph plus its vertical padding.
pub const ANSWER_PADDING_PX: f64 = 50.0;

pub const ASSETS_PATH: &str = "/assets";

pub fn asset(name: &str) -> String {
    format!("{}/{}", ASSETS_PATH, name)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn tracing_level() -> tracing::Level {
    tracing::Level::DEBUG
}

#[cfg(not(debug_assertions))]
pub fn tracing_level() -> tracing::Level {
    tracing::Level::INFO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_rooted_under_assets() {
        assert_eq!(asset("tv.png"), "/assets/tv.png");
    }

    #[test]
    fn log_and_tracing_levels_agree() {
        assert_eq!(log_level().as_str(), tracing_level().as_str());
    }

    #[test]
    fn answer_padding_is_fifty_pixels() {
        assert_eq!(ANSWER_PADDING_PX, 50.0);
    }
}
