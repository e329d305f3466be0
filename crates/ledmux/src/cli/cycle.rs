//! `cycle` subcommand — cycle the indicator through test colors until Ctrl+C.

use std::path::Path;
use std::sync::atomic::Ordering;
use std::time::Duration;

use super::{LightState, LightType, Lights, RUNNING, Result, SysfsAttrs, led};

/// Sleep in short slices so Ctrl+C is picked up quickly.
fn interruptible_sleep(ms: u64) {
    let mut remaining = ms;
    while remaining > 0 && RUNNING.load(Ordering::SeqCst) {
        let step = remaining.min(100);
        std::thread::sleep(Duration::from_millis(step));
        remaining -= step;
    }
}

pub(super) fn cmd_cycle(delay: u64, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);

    let steps: [(&str, LightState); 5] = [
        ("red", LightState::steady(0xFFFF_0000)),
        ("green", LightState::steady(0xFF00_FF00)),
        ("blue", LightState::steady(0xFF00_00FF)),
        ("white", LightState::steady(0xFFFF_FFFF)),
        ("blue, flashing", LightState::timed(0xFF00_00FF, 500, 500)),
    ];

    println!(
        "Cycling the notification light{}... (Ctrl+C to stop)",
        if lights.white_mode() {
            " on the white channel"
        } else {
            ""
        }
    );
    println!();

    let mut i = 0;
    while RUNNING.load(Ordering::SeqCst) {
        let (label, state) = &steps[i % steps.len()];
        lights.set_light_state(&attrs, LightType::Notifications.id(), state)?;
        println!("  notifications -> {label} ({})", led::format_color(state.color));
        interruptible_sleep(delay);
        i += 1;
    }

    println!();
    println!("Restoring dark state...");
    lights.set_light_state(&attrs, LightType::Notifications.id(), &LightState::OFF)?;
    println!("Done.");
    Ok(())
}
