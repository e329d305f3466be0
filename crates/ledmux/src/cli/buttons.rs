//! `buttons` subcommand — switch the button backlights on or off.

use std::path::Path;

use super::{LedmuxError, LightState, LightType, Lights, Result, SysfsAttrs};

pub(super) fn cmd_buttons(state: &str, config_path: Option<&Path>) -> Result<()> {
    let on = match state.trim().to_ascii_lowercase().as_str() {
        "on" => true,
        "off" => false,
        other => {
            return Err(LedmuxError::Config(format!(
                "unknown button state \"{other}\" (expected on or off)"
            )));
        }
    };

    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);

    let color = if on { 0xFFFF_FFFF } else { 0 };
    lights.set_light_state(&attrs, LightType::Buttons.id(), &LightState::steady(color))?;

    let paths = lights.button_paths();
    if paths.is_empty() {
        println!("No button backlights found.");
    } else {
        println!(
            "Buttons -> {} ({} path{})",
            if on { "on" } else { "off" },
            paths.len(),
            if paths.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
