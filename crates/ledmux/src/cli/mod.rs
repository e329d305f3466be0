//! CLI subcommands — hardware info, light control, ramp tables.

mod backlight;
mod buttons;
mod config_cmd;
mod cycle;
mod list;
mod off;
mod ramp;
mod set_cmd;
mod status;

use std::path::Path;

use clap::Subcommand;
use serde::Serialize;

pub(super) use crate::RUNNING;
pub(super) use ledmux_lib::LedmuxError;
pub(super) use ledmux_lib::arbiter::CHANNEL_NAMES;
pub(super) use ledmux_lib::config::Config;
pub(super) use ledmux_lib::device::SysfsAttrs;
pub(super) use ledmux_lib::error::Result;
pub(super) use ledmux_lib::led;
pub(super) use ledmux_lib::light::{FlashMode, FlashSpec, LightDescriptor, LightState, LightType};
pub(super) use ledmux_lib::service::Lights;

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{key:<width$}{value}", width = w)
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2)
}

/// Load configuration, preferring `custom` when given.
pub(super) fn load_config(custom: Option<&Path>) -> Config {
    match custom {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ListOutput {
    pub count: usize,
    pub white_mode: bool,
    pub lights: Vec<LightDescriptor>,
}

#[derive(Serialize)]
pub(super) struct StatusOutput {
    pub version: String,
    pub led_root: String,
    pub white_mode: bool,
    pub channels: Vec<ChannelJson>,
    pub backlight: Option<String>,
    pub buttons: Vec<String>,
}

#[derive(Serialize)]
pub(super) struct ChannelJson {
    pub name: String,
    pub present: bool,
    pub max_brightness: u32,
    pub breath: bool,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub valid: bool,
    pub problems: Vec<String>,
}

#[derive(Serialize)]
pub(super) struct RampOutput {
    pub lane: u32,
    pub start_idx: u32,
    pub duty_pcts: String,
    pub pause_lo_ms: u32,
    pub pause_hi_ms: u32,
    pub step_ms: u32,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the lights the device exposes
    List,

    /// Show probed channels, backlight and button paths
    Status,

    /// Apply a color to one light
    Set {
        /// Light name (backlight, buttons, battery, notifications, attention)
        light: String,
        /// Color: a name ("red"), #RRGGBB, or 8-digit AARRGGBB hex
        color: String,
        /// Flash mode: none, timed, or hardware
        #[arg(long, default_value = "none")]
        flash: String,
        /// Milliseconds lit per flash cycle
        #[arg(long, default_value_t = 0)]
        on_ms: u32,
        /// Milliseconds dark per flash cycle
        #[arg(long, default_value_t = 0)]
        off_ms: u32,
    },

    /// Turn one light off, or every indicator and button
    Off {
        /// Light name; omitted = all except the display backlight
        light: Option<String>,
    },

    /// Set the display backlight brightness
    Backlight {
        /// Brightness (0-255, rescaled to the panel's range)
        brightness: u8,
    },

    /// Switch the button backlights on or off
    Buttons {
        /// "on" or "off"
        state: String,
    },

    /// Synthesize a PWM ramp table, optionally programming a channel
    Ramp {
        /// Peak brightness (0-255)
        #[arg(long, default_value_t = 255)]
        brightness: u8,
        /// Milliseconds lit per cycle
        #[arg(long, default_value_t = 500)]
        on_ms: u32,
        /// Milliseconds dark per cycle
        #[arg(long, default_value_t = 2000)]
        off_ms: u32,
        /// Duty table lane (0 = red, 1 = green, 2 = blue)
        #[arg(long, default_value_t = 0)]
        lane: u32,
        /// Write the table to this channel instead of printing only
        #[arg(long, value_name = "CHANNEL")]
        apply: Option<String>,
    },

    /// Show current configuration and file paths
    Config,

    /// Cycle the indicator through test colors until Ctrl+C
    Cycle {
        /// Milliseconds per step
        #[arg(long, default_value_t = 1000)]
        delay: u64,
    },
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Command::List => list::cmd_list(json, config_path),
        Command::Status => status::cmd_status(json, config_path),
        Command::Set {
            light,
            color,
            flash,
            on_ms,
            off_ms,
        } => {
            if json {
                warn_json_unsupported("set");
            }
            set_cmd::cmd_set(&light, &color, &flash, on_ms, off_ms, config_path)
        }
        Command::Off { light } => {
            if json {
                warn_json_unsupported("off");
            }
            off::cmd_off(light.as_deref(), config_path)
        }
        Command::Backlight { brightness } => {
            if json {
                warn_json_unsupported("backlight");
            }
            backlight::cmd_backlight(brightness, config_path)
        }
        Command::Buttons { state } => {
            if json {
                warn_json_unsupported("buttons");
            }
            buttons::cmd_buttons(&state, config_path)
        }
        Command::Ramp {
            brightness,
            on_ms,
            off_ms,
            lane,
            apply,
        } => ramp::cmd_ramp(json, brightness, on_ms, off_ms, lane, apply.as_deref(), config_path),
        Command::Config => config_cmd::cmd_config(json, config_path),
        Command::Cycle { delay } => {
            if json {
                warn_json_unsupported("cycle");
            }
            cycle::cmd_cycle(delay, config_path)
        }
    }
}


#[cfg(test)]
mod json_struct_tests {
    use super::*;

    #[test]
    fn list_output_round_trips() {
        let output = ListOutput {
            count: 1,
            white_mode: false,
            lights: vec![LightDescriptor::new(LightType::Battery)],
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["lights"][0]["id"], 3);
        assert_eq!(parsed["lights"][0]["type"], "battery");
    }

    #[test]
    fn status_output_missing_backlight_is_null() {
        let output = StatusOutput {
            version: "0.2.0".into(),
            led_root: "/sys/class/leds".into(),
            white_mode: true,
            channels: vec![ChannelJson {
                name: "white".into(),
                present: true,
                max_brightness: 255,
                breath: true,
            }],
            backlight: None,
            buttons: vec![],
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["backlight"].is_null());
        assert_eq!(parsed["white_mode"], true);
        assert_eq!(parsed["channels"][0]["name"], "white");
        assert!(parsed["buttons"].as_array().unwrap().is_empty());
    }

    #[test]
    fn config_output_reports_problems() {
        let output = ConfigOutput {
            config_file: None,
            config_file_exists: false,
            settings: Config::default(),
            valid: false,
            problems: vec!["led_root cannot be empty".into()],
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["config_file"].is_null());
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["problems"][0], "led_root cannot be empty");
        assert_eq!(parsed["settings"]["led_root"], "/sys/class/leds");
    }

    #[test]
    fn ramp_output_carries_the_table() {
        let table = led::synthesize(128, 500, 2000, 1);
        let output = RampOutput {
            lane: 1,
            start_idx: table.start_idx,
            duty_pcts: table.duty_pcts.clone(),
            pause_lo_ms: table.pause_lo_ms,
            pause_hi_ms: table.pause_hi_ms,
            step_ms: table.step_ms,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["start_idx"], 17);
        assert_eq!(json["step_ms"], 15);
        assert!(json["duty_pcts"].as_str().unwrap().starts_with("0,"));
    }
}
