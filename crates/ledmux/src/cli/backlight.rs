//! `backlight` subcommand — set the display backlight brightness.

use std::path::Path;

use super::{LightState, LightType, Lights, Result, SysfsAttrs};

pub(super) fn cmd_backlight(brightness: u8, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);

    // A grey color whose luminance is exactly `brightness`.
    let color = 0xFF00_0000 | u32::from(brightness) * 0x0001_0101;
    lights.set_light_state(&attrs, LightType::Backlight.id(), &LightState::steady(color))?;

    match lights.backlight_path() {
        Some(p) => println!("Backlight -> {brightness} ({})", p.display()),
        None => println!("No backlight found."),
    }
    Ok(())
}
