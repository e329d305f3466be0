//! `list` subcommand — list the lights the device exposes.

use std::path::Path;

use super::{ListOutput, Lights, Result, SysfsAttrs};

pub(super) fn cmd_list(json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path);
    let attrs = SysfsAttrs;
    let lights = Lights::new(&attrs, &config);

    if json {
        let output = ListOutput {
            count: lights.lights().len(),
            white_mode: lights.white_mode(),
            lights: lights.lights().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    let registered = lights.lights();
    println!(
        "Registered {} light{}:",
        registered.len(),
        if registered.len() == 1 { "" } else { "s" }
    );
    println!();

    for light in registered {
        println!(
            "  [{}] {:<14}(id {})",
            light.ordinal, light.light_type, light.id
        );
    }

    Ok(())
}
