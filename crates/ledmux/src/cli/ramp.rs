//! `ramp` subcommand — synthesize a PWM ramp table, optionally programming a channel.

use std::path::Path;

use super::{
    CHANNEL_NAMES, LedmuxError, Lights, RampOutput, Result, SysfsAttrs, kv, kv_width, led,
};

pub(super) fn cmd_ramp(
    json: bool,
    brightness: u8,
    on_ms: u32,
    off_ms: u32,
    lane: u32,
    apply: Option<&str>,
    config_path: Option<&Path>,
) -> Result<()> {
    // When a channel is named, its position dictates the lane.
    let lane = match apply {
        Some(name) => CHANNEL_NAMES
            .iter()
            .take(3)
            .position(|n| *n == name)
            .ok_or_else(|| {
                LedmuxError::Config(format!(
                    "unknown channel \"{name}\" (expected red, green or blue)"
                ))
            })? as u32,
        None => {
            if lane > 2 {
                return Err(LedmuxError::Config(format!(
                    "lane {lane} is out of range (expected 0, 1 or 2)"
                )));
            }
            lane
        }
    };

    let table = led::synthesize(brightness, on_ms, off_ms, lane);

    if json && apply.is_some() {
        super::warn_json_unsupported("ramp --apply");
    }
    if json && apply.is_none() {
        let output = RampOutput {
            lane,
            start_idx: table.start_idx,
            duty_pcts: table.duty_pcts.clone(),
            pause_lo_ms: table.pause_lo_ms,
            pause_hi_ms: table.pause_hi_ms,
            step_ms: table.step_ms,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    let w = kv_width(
        &[
            "Lane:",
            "Start index:",
            "Duty table:",
            "Pause lo:",
            "Pause hi:",
            "Step:",
        ],
        &[],
    );
    kv("Lane:", lane, w);
    kv("Start index:", table.start_idx, w);
    kv("Duty table:", &table.duty_pcts, w);
    kv("Pause lo:", format_args!("{} ms", table.pause_lo_ms), w);
    kv("Pause hi:", format_args!("{} ms", table.pause_hi_ms), w);
    kv("Step:", format_args!("{} ms", table.step_ms), w);

    if let Some(name) = apply {
        let config = super::load_config(config_path);
        let attrs = SysfsAttrs;
        let lights = Lights::new(&attrs, &config);
        let channel = &lights.channels()[lane as usize];
        if !channel.exists(&attrs) {
            return Err(LedmuxError::Config(format!(
                "channel \"{name}\" is not present under {}",
                config.led_root
            )));
        }
        println!();
        if channel.set_timed_ramp(&attrs, brightness, on_ms, off_ms, lane) {
            println!("Programmed {name} (lane {lane}).");
        } else {
            println!("{name} has native breath control; ramp tables do not apply.");
        }
    }
    Ok(())
}
