//! `status` subcommand — show probed channels, backlight and button paths.

use std::path::Path;

use super::{ChannelJson, Lights, Result, StatusOutput, SysfsAttrs, kv, kv_indent, kv_width};

pub(super) fn cmd_status(json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);

    let channels: Vec<ChannelJson> = lights
        .channels()
        .iter()
        .map(|c| ChannelJson {
            name: c.name().to_string(),
            present: c.exists(&attrs),
            max_brightness: c.max_brightness(),
            breath: c.has_breath(),
        })
        .collect();

    if json {
        let output = StatusOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
            led_root: config.led_root.clone(),
            white_mode: lights.white_mode(),
            channels,
            backlight: lights.backlight_path().map(|p| p.display().to_string()),
            buttons: lights
                .button_paths()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    // Human-readable output
    let w = kv_width(
        &["Version:", "LED root:", "Indicator:", "Backlight:", "Buttons:"],
        &["red:", "green:", "blue:", "white:"],
    );

    kv("Version:", env!("CARGO_PKG_VERSION"), w);
    kv("LED root:", &config.led_root, w);
    kv(
        "Indicator:",
        if lights.white_mode() {
            "white (single channel)"
        } else {
            "rgb"
        },
        w,
    );
    println!();

    println!("Channels:");
    for c in &channels {
        let detail = if c.present {
            let mut s = format!("present, max {}", c.max_brightness);
            if c.breath {
                s.push_str(", breath");
            }
            s
        } else {
            "missing".to_string()
        };
        kv_indent(&format!("{}:", c.name), detail, w);
    }
    println!();

    match lights.backlight_path() {
        Some(p) => kv("Backlight:", p.display(), w),
        None => kv("Backlight:", "(not found)", w),
    }
    let buttons = lights.button_paths();
    if buttons.is_empty() {
        kv("Buttons:", "(not found)", w);
    } else {
        kv(
            "Buttons:",
            format_args!(
                "{} path{}",
                buttons.len(),
                if buttons.len() == 1 { "" } else { "s" }
            ),
            w,
        );
        for p in buttons {
            println!("  {}", p.display());
        }
    }

    Ok(())
}
