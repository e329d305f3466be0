//! `set` subcommand — apply a color to one light.

use std::path::Path;

use super::{
    FlashMode, FlashSpec, LedmuxError, LightState, LightType, Lights, Result, SysfsAttrs, led,
};

pub(super) fn cmd_set(
    light: &str,
    color: &str,
    flash: &str,
    on_ms: u32,
    off_ms: u32,
    config_path: Option<&Path>,
) -> Result<()> {
    // Resolve every argument before touching hardware.
    let light = LightType::from_name(light).ok_or_else(|| {
        LedmuxError::Config(format!(
            "unknown light \"{light}\" (expected backlight, buttons, battery, notifications or attention)"
        ))
    })?;
    let mode = match flash.trim().to_ascii_lowercase().as_str() {
        "none" => FlashMode::None,
        "timed" => FlashMode::Timed,
        "hardware" => FlashMode::Hardware,
        other => {
            return Err(LedmuxError::Config(format!(
                "unknown flash mode \"{other}\" (expected none, timed or hardware)"
            )));
        }
    };
    let color = led::parse_color(color)?;
    let state = LightState {
        color,
        flash: FlashSpec {
            mode,
            on_ms,
            off_ms,
        },
    };

    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);
    lights.set_light_state(&attrs, light.id(), &state)?;

    if state.blink_requested() {
        println!(
            "{light} -> {} (flash {on_ms}/{off_ms} ms)",
            led::format_color(color)
        );
    } else {
        println!("{light} -> {}", led::format_color(color));
    }
    Ok(())
}
