//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Orrery LOD tier management")]
pub struct CliArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Maximum number of full-detail bodies per frame.
    #[arg(long)]
    pub max_full3d: Option<usize>,

    /// Tier crossfade duration in seconds (0 = instant).
    #[arg(long)]
    pub transition_time: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of bodies for the demo scene.
    #[arg(long)]
    pub bodies: Option<u32>,

    /// Number of frames for the demo to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Demo scene seed; the same seed reproduces the same flight.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fov) = args.fov {
            self.window.fov_degrees = fov;
        }
        if let Some(cap) = args.max_full3d {
            self.lod.max_full3d = cap;
        }
        if let Some(t) = args.transition_time {
            self.lod.transition_time = t;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            max_full3d: Some(4),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.lod.max_full3d, 4);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "orrery",
            "--width",
            "800",
            "--transition-time",
            "0.5",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.width, Some(800));
        assert_eq!(args.transition_time, Some(0.5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
