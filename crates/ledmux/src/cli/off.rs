//! `off` subcommand — turn one light off, or every indicator and button.

use std::path::Path;

use super::{LedmuxError, LightState, LightType, Lights, Result, SysfsAttrs};

pub(super) fn cmd_off(light: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);

    match light {
        Some(name) => {
            let light = LightType::from_name(name).ok_or_else(|| {
                LedmuxError::Config(format!(
                    "unknown light \"{name}\" (expected backlight, buttons, battery, notifications or attention)"
                ))
            })?;
            lights.set_light_state(&attrs, light.id(), &LightState::OFF)?;
            println!("{light} -> off");
        }
        None => {
            // The display backlight is only touched when named explicitly.
            for descriptor in lights.lights() {
                if descriptor.light_type == LightType::Backlight {
                    continue;
                }
                lights.set_light_state(&attrs, descriptor.id, &LightState::OFF)?;
            }
            println!("All indicator and button lights off.");
        }
    }
    Ok(())
}
