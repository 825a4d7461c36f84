use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use px_core::config::{ConvertConfig, RenderMode, DEFAULT_SCALE};

/// Collect configuration interactively, using the current values as the
/// presented defaults.
///
/// Leniency policy, kept from the original tool: a non-numeric scale answer
/// is not an error — it silently falls back to the default value. Explicit
/// zeroes still fail later in `ConvertConfig::validate`.
///
/// # Errors
/// Returns an error only if the terminal interaction itself fails.
pub fn fill_interactive(config: &mut ConvertConfig) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    let raw: String = Input::with_theme(&theme)
        .with_prompt("Width scale")
        .default(config.scale.width.to_string())
        .interact_text()?;
    config.scale.width = lenient_scale(&raw);

    let raw: String = Input::with_theme(&theme)
        .with_prompt("Height scale")
        .default(config.scale.height.to_string())
        .interact_text()?;
    config.scale.height = lenient_scale(&raw);

    config.charset = Input::with_theme(&theme)
        .with_prompt("Palette characters (darkest → brightest)")
        .default(config.charset.clone())
        .interact_text()?;

    let modes = ["monochrome", "color"];
    let initial = usize::from(config.mode == RenderMode::Color);
    let picked = Select::with_theme(&theme)
        .with_prompt("Render mode")
        .items(&modes)
        .default(initial)
        .interact()?;
    config.mode = if picked == 1 {
        RenderMode::Color
    } else {
        RenderMode::Monochrome
    };

    let raw: String = Input::with_theme(&theme)
        .with_prompt("Output path (empty for default)")
        .allow_empty(true)
        .default(config.output.clone().unwrap_or_default())
        .interact_text()?;
    config.output = if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    };

    Ok(())
}

/// Parse a scale answer; anything non-numeric falls back to the default.
fn lenient_scale(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(DEFAULT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_scale_accepts_numbers() {
        assert_eq!(lenient_scale("7"), 7);
        assert_eq!(lenient_scale("  12 "), 12);
    }

    #[test]
    fn lenient_scale_falls_back_silently() {
        assert_eq!(lenient_scale("ten"), DEFAULT_SCALE);
        assert_eq!(lenient_scale(""), DEFAULT_SCALE);
        assert_eq!(lenient_scale("-3"), DEFAULT_SCALE);
    }

    #[test]
    fn lenient_scale_keeps_explicit_zero() {
        // Zero parses fine; rejecting it is validate()'s job, not a silent fix.
        assert_eq!(lenient_scale("0"), 0);
    }
}
