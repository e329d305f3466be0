//! `config` subcommand — show current configuration and file paths.

use std::path::Path;

use super::{Config, ConfigOutput, Result, kv, kv_indent, kv_width};

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(custom_path);
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    let config_exists = config_path.as_ref().map(|p| p.exists()).unwrap_or(false);

    let problems: Vec<String> = match config.validate() {
        Ok(()) => vec![],
        Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
    };

    if json {
        let output = ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            valid: problems.is_empty(),
            problems,
            settings: config,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    // Human-readable output
    let w = kv_width(
        &["Config file:", "Validation:"],
        &[
            "led_root:",
            "backlight_paths[0]:",
            "max_backlight_path:",
            "button_paths[0]:",
        ],
    );

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("led_root:", &config.led_root, w);
    for (i, p) in config.backlight_paths.iter().enumerate() {
        kv_indent(&format!("backlight_paths[{i}]:"), p, w);
    }
    let max_label = if config.max_backlight_path.is_empty() {
        "(none, assume 255)".to_string()
    } else {
        config.max_backlight_path.clone()
    };
    kv_indent("max_backlight_path:", max_label, w);
    for (i, p) in config.button_paths.iter().enumerate() {
        kv_indent(&format!("button_paths[{i}]:"), p, w);
    }
    println!();

    if problems.is_empty() {
        kv("Validation:", "ok", w);
    } else {
        kv(
            "Validation:",
            format_args!(
                "{} problem{}",
                problems.len(),
                if problems.len() == 1 { "" } else { "s" }
            ),
            w,
        );
        for p in &problems {
            println!("  - {p}");
        }
    }
    Ok(())
}
