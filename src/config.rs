//! Configuration and CLI argument handling

use clap::Parser;

/// Historical session length: the 25:00 the clock has always opened on.
pub const DEFAULT_DURATION_SECONDS: u64 = 25 * 60;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "coin-timer")]
#[command(about = "A coin-operated session countdown timer with a lock-screen overlay")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Session duration in seconds, restored by "Pa Sukli"
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECONDS)]
    pub duration: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> String {
        format!("coin_timer={},eframe=warn,egui=warn", self.log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_historical_duration() {
        let config = Config::try_parse_from(["coin-timer"]).unwrap();
        assert_eq!(config.duration, 1500);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn accepts_duration_and_verbose_flags() {
        let config = Config::try_parse_from(["coin-timer", "--duration", "65", "-v"]).unwrap();
        assert_eq!(config.duration, 65);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_filter(), "coin_timer=debug,eframe=warn,egui=warn");
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(Config::try_parse_from(["coin-timer", "-d", "-5"]).is_err());
    }
}
