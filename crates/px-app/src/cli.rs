use std::path::PathBuf;

use clap::Parser;
use px_core::config::{ConvertConfig, RenderMode, ScaleFactors};
use px_core::error::ConvertError;

/// pixscii — image-to-ASCII converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input image (any format the decoder supports).
    pub image: Option<PathBuf>,

    /// Horizontal shrink factor (columns of source pixels per character).
    #[arg(long)]
    pub width_scale: Option<u32>,

    /// Vertical shrink factor (rows of source pixels per character).
    #[arg(long)]
    pub height_scale: Option<u32>,

    /// Palette characters, darkest to brightest.
    #[arg(long)]
    pub chars: Option<String>,

    /// Render mode: mono (text grid) or color (glyph raster).
    #[arg(long)]
    pub mode: Option<String>,

    /// Output path. Extension rules depend on the mode.
    #[arg(short, long)]
    pub output: Option<String>,

    /// TTF/OTF font for color rendering. Default: first system monospace.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Skip all interactive prompts and apply defaults directly.
    #[arg(long, default_value_t = false)]
    pub defaults: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Fold explicit flags over the default configuration.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` for an unknown `--mode` value.
    pub fn base_config(&self) -> Result<ConvertConfig, ConvertError> {
        let mut config = ConvertConfig::default();
        if let Some(w) = self.width_scale {
            config.scale = ScaleFactors {
                width: w,
                ..config.scale
            };
        }
        if let Some(h) = self.height_scale {
            config.scale = ScaleFactors {
                height: h,
                ..config.scale
            };
        }
        if let Some(ref chars) = self.chars {
            config.charset.clone_from(chars);
        }
        if let Some(ref mode) = self.mode {
            config.mode = RenderMode::parse(mode)?;
        }
        if let Some(ref output) = self.output {
            config.output = Some(output.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "pixscii",
            "photo.png",
            "--width-scale",
            "4",
            "--mode",
            "color",
            "-o",
            "pic",
        ])
        .unwrap();
        let config = cli.base_config().unwrap();
        assert_eq!(config.scale, ScaleFactors { width: 4, height: 10 });
        assert_eq!(config.mode, RenderMode::Color);
        assert_eq!(config.output.as_deref(), Some("pic"));
    }

    #[test]
    fn no_flags_yields_defaults() {
        let cli = Cli::try_parse_from(["pixscii", "photo.png"]).unwrap();
        let config = cli.base_config().unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn bad_mode_is_config_error() {
        let cli = Cli::try_parse_from(["pixscii", "photo.png", "--mode", "sepia"]).unwrap();
        assert!(matches!(
            cli.base_config(),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn explicit_zero_scale_fails_validation() {
        let cli =
            Cli::try_parse_from(["pixscii", "photo.png", "--height-scale", "0"]).unwrap();
        let config = cli.base_config().unwrap();
        assert!(config.validate().is_err());
    }
}
