//! Light service — every light the device exposes, behind one dispatch point.
//!
//! Construction probes the hardware once: backlight and button paths from the
//! config, color channels under the LED root. After that the service is a
//! lookup table; [`Lights::set_light_state`] routes each platform light id to
//! the attribute writes (or arbitration) it needs.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::arbiter::LightArbiter;
use crate::config::Config;
use crate::device::DeviceAttrs;
use crate::error::{LedmuxError, Result};
use crate::led::{self, DEFAULT_MAX_BRIGHTNESS, LedChannel};
use crate::light::{LightDescriptor, LightState, LightType, PrioritySlot};

pub struct Lights {
    arbiter: LightArbiter,
    backlight: Option<PathBuf>,
    max_backlight: Option<PathBuf>,
    buttons: Vec<PathBuf>,
    lights: Vec<LightDescriptor>,
}

impl Lights {
    /// Probe the hardware described by `config` and build the light registry.
    ///
    /// The backlight uses the first writable candidate path; buttons use
    /// every writable candidate. The three indicator lights are always
    /// registered, in battery, notifications, attention order.
    pub fn new(attrs: &impl DeviceAttrs, config: &Config) -> Lights {
        let arbiter = LightArbiter::new(attrs, Path::new(&config.led_root));

        let backlight = config
            .backlight_paths
            .iter()
            .map(PathBuf::from)
            .find(|p| attrs.is_writable(p));
        let max_backlight = if config.max_backlight_path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&config.max_backlight_path))
        };
        let buttons: Vec<PathBuf> = config
            .button_paths
            .iter()
            .map(PathBuf::from)
            .filter(|p| attrs.is_writable(p))
            .collect();

        let mut lights = Vec::new();
        if backlight.is_some() {
            Self::register(&mut lights, LightType::Backlight);
        }
        if !buttons.is_empty() {
            Self::register(&mut lights, LightType::Buttons);
        }
        Self::register(&mut lights, LightType::Battery);
        Self::register(&mut lights, LightType::Notifications);
        Self::register(&mut lights, LightType::Attention);

        info!(
            "registered {} lights, {} indicator",
            lights.len(),
            if arbiter.white_mode() { "white" } else { "rgb" }
        );

        Lights {
            arbiter,
            backlight,
            max_backlight,
            buttons,
            lights,
        }
    }

    fn register(lights: &mut Vec<LightDescriptor>, light_type: LightType) {
        let mut descriptor = LightDescriptor::new(light_type);
        descriptor.ordinal = lights.len() as i32;
        lights.push(descriptor);
    }

    /// The registered lights, in registration order.
    pub fn lights(&self) -> &[LightDescriptor] {
        &self.lights
    }

    /// The backlight brightness file selected at probe time, if any.
    pub fn backlight_path(&self) -> Option<&Path> {
        self.backlight.as_deref()
    }

    /// The button backlight files selected at probe time.
    pub fn button_paths(&self) -> &[PathBuf] {
        &self.buttons
    }

    /// True when the indicator runs on the standalone white channel.
    pub fn white_mode(&self) -> bool {
        self.arbiter.white_mode()
    }

    /// The probed indicator channels, in [`crate::arbiter::CHANNEL_NAMES`] order.
    pub fn channels(&self) -> &[LedChannel] {
        self.arbiter.channels()
    }

    /// Apply `state` to the light with platform id `id`.
    ///
    /// Unknown ids fail with [`LedmuxError::UnsupportedLight`] before any
    /// hardware write. A known light whose hardware was not found at probe
    /// time is accepted and does nothing.
    pub fn set_light_state(
        &self,
        attrs: &impl DeviceAttrs,
        id: i32,
        state: &LightState,
    ) -> Result<()> {
        let light = LightType::from_id(id).ok_or(LedmuxError::UnsupportedLight(id))?;
        match light {
            LightType::Backlight => self.set_backlight(attrs, led::to_brightness(state.color)),
            LightType::Buttons => self.set_buttons(attrs, led::is_lit(state.color)),
            LightType::Battery | LightType::Notifications | LightType::Attention => {
                if let Some(slot) = PrioritySlot::for_light(light) {
                    self.arbiter.update(attrs, slot, *state);
                }
            }
        }
        Ok(())
    }

    /// Write one brightness value to the display backlight, rescaled to the
    /// panel's range when it is not the standard 0..=255.
    fn set_backlight(&self, attrs: &impl DeviceAttrs, brightness: u8) {
        let Some(path) = &self.backlight else {
            return;
        };
        // A missing or zero maximum is unusable; fall back to the default.
        let max = match self.max_backlight.as_ref().map(|p| attrs.read_int(p)) {
            Some(Ok(max)) if max > 0 => max,
            _ => DEFAULT_MAX_BRIGHTNESS,
        };
        let value = if brightness > 0 && max != DEFAULT_MAX_BRIGHTNESS {
            let scaled = (u32::from(brightness) - 1) * (max - 1) / 254 + 1;
            debug!("scaling backlight brightness {brightness} => {scaled} (max {max})");
            scaled
        } else {
            u32::from(brightness)
        };
        if let Err(e) = attrs.write_int(path, value) {
            debug!("backlight write to {} failed: {e}", path.display());
        }
    }

    /// Switch every button backlight on or off.
    fn set_buttons(&self, attrs: &impl DeviceAttrs, lit: bool) {
        for path in &self.buttons {
            if let Err(e) = attrs.write_int(path, u32::from(lit)) {
                debug!("button write to {} failed: {e}", path.display());
            }
        }
    }
}
