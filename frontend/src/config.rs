use log::Level;

pub const HERO_INTERVAL_MS: u32 = 5000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;
/// How long the hero stays paused after an arrow click.
pub const MANUAL_PAUSE_MS: u32 = 3000;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log everything
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Error
}

/// Whether failed images and DOM misses are reported to the console.
#[cfg(debug_assertions)]
pub fn diagnostics_enabled() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn diagnostics_enabled() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn debug_builds_report_diagnostics() {
        assert!(diagnostics_enabled());
        assert_eq!(log_level(), Level::Debug);
    }
}
