//! LED channel programming — brightness, breath/blink, software ramp tables.

use std::path::{Path, PathBuf};

use log::debug;

use crate::device::DeviceAttrs;

use super::ramp;

/// Fallback when `max_brightness` cannot be read at probe time.
pub const DEFAULT_MAX_BRIGHTNESS: u32 = 255;

/// One physical LED channel under `<root>/<name>/`.
///
/// Capability flags are probed once at construction and never change for the
/// process lifetime. Presence (`exists`) stays a live probe so an optional
/// white channel can be detected.
#[derive(Debug, Clone)]
pub struct LedChannel {
    name: String,
    base: PathBuf,
    max_brightness: u32,
    breath: bool,
}

impl LedChannel {
    /// Probe a channel directory: read `max_brightness` (default
    /// [`DEFAULT_MAX_BRIGHTNESS`] on any failure) and test `breath`
    /// writability.
    pub fn probe(attrs: &impl DeviceAttrs, root: &Path, name: &str) -> LedChannel {
        let base = root.join(name);
        let max_brightness = match attrs.read_int(&base.join("max_brightness")) {
            Ok(v) => v,
            Err(e) => {
                debug!("{name}: assuming max_brightness {DEFAULT_MAX_BRIGHTNESS} ({e})");
                DEFAULT_MAX_BRIGHTNESS
            }
        };
        let breath = attrs.is_writable(&base.join("breath"));
        LedChannel {
            name: name.to_string(),
            base,
            max_brightness,
            breath,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_brightness(&self) -> u32 {
        self.max_brightness
    }

    /// True iff the driver exposes a native breath mode.
    pub fn has_breath(&self) -> bool {
        self.breath
    }

    /// Live writability probe of the brightness attribute.
    pub fn exists(&self, attrs: &impl DeviceAttrs) -> bool {
        attrs.is_writable(&self.base.join("brightness"))
    }

    /// Write a rescaled brightness. `value` is on the 0..=255 caller scale;
    /// the device receives `value * max_brightness / 255`.
    pub fn set_brightness(&self, attrs: &impl DeviceAttrs, value: u8) -> bool {
        let scaled = value as u32 * self.max_brightness / 255;
        self.write(attrs, "brightness", scaled)
    }

    /// Start or stop the hardware blink engine. Routes to `breath` when the
    /// driver has it, `blink` otherwise; callers never see which.
    pub fn set_breath(&self, attrs: &impl DeviceAttrs, enable: bool) -> bool {
        let attr = if self.breath { "breath" } else { "blink" };
        self.write(attrs, attr, enable as u32)
    }

    /// Program a software ramp-table blink for the given cadence.
    ///
    /// Only valid on channels without native breath; the two blink engines
    /// are mutually exclusive, so a breath-capable channel refuses with no
    /// writes. The six attribute writes are ordered and short-circuit on the
    /// first failure; writes already issued are not rolled back.
    pub fn set_timed_ramp(
        &self,
        attrs: &impl DeviceAttrs,
        brightness: u8,
        on_ms: u32,
        off_ms: u32,
        lane: u32,
    ) -> bool {
        if self.breath {
            return false;
        }
        let table = ramp::synthesize(brightness, on_ms, off_ms, lane);
        self.write(attrs, "start_idx", table.start_idx)
            && self.write_text(attrs, "duty_pcts", &table.duty_pcts)
            && self.write(attrs, "pause_lo", table.pause_lo_ms)
            && self.write(attrs, "pause_hi", table.pause_hi_ms)
            && self.write(attrs, "ramp_step_ms", table.step_ms)
            && self.write(attrs, "blink", 1)
    }

    fn write(&self, attrs: &impl DeviceAttrs, attr: &str, value: u32) -> bool {
        match attrs.write_int(&self.base.join(attr), value) {
            Ok(()) => true,
            Err(e) => {
                debug!("{}: {e}", self.name);
                false
            }
        }
    }

    fn write_text(&self, attrs: &impl DeviceAttrs, attr: &str, text: &str) -> bool {
        match attrs.write_text(&self.base.join(attr), text) {
            Ok(()) => true,
            Err(e) => {
                debug!("{}: {e}", self.name);
                false
            }
        }
    }
}
