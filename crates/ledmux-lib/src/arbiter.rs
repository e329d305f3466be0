//! Light arbitration — three priority slots multiplexed onto one LED output.
//!
//! Every update replaces one slot's state under a single mutex, rescans the
//! slots in priority order, and reprograms the hardware for the winner. All
//! programming happens synchronously on the calling thread while the lock is
//! held; there is no queueing and no retry.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use log::warn;

use crate::device::DeviceAttrs;
use crate::led::{self, LedChannel};
use crate::light::{LightState, PrioritySlot};

/// Color channel names under the LED class root. The first three indices
/// double as duty-table lanes.
pub const CHANNEL_NAMES: [&str; 4] = ["red", "green", "blue", "white"];

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;
const WHITE: usize = 3;

/// Priority arbiter over the indicator slots.
///
/// Owns the probed color channels and the last written state per slot. The
/// mutex serializes the whole read-modify-write-and-program sequence, so two
/// concurrent updates can never interleave their arbitration decision or
/// their hardware writes.
pub struct LightArbiter {
    leds: [LedChannel; 4],
    white_mode: bool,
    slots: Mutex<[LightState; PrioritySlot::COUNT]>,
}

impl LightArbiter {
    /// Probe the four color channels under `root`. White mode is decided
    /// here, once: when the white channel is present the indicator runs on
    /// it alone, otherwise on red/green/blue.
    pub fn new(attrs: &impl DeviceAttrs, root: &Path) -> LightArbiter {
        let leds = CHANNEL_NAMES.map(|name| LedChannel::probe(attrs, root, name));
        let white_mode = leds[WHITE].exists(attrs);
        LightArbiter {
            leds,
            white_mode,
            slots: Mutex::new([LightState::OFF; PrioritySlot::COUNT]),
        }
    }

    /// True when the indicator drives the standalone white channel.
    pub fn white_mode(&self) -> bool {
        self.white_mode
    }

    /// The probed channels, in [`CHANNEL_NAMES`] order.
    pub fn channels(&self) -> &[LedChannel] {
        &self.leds
    }

    /// Replace one slot's state and reprogram the hardware for the winner:
    /// the first lit slot in priority order, or all-off when nothing is lit.
    pub fn update(&self, attrs: &impl DeviceAttrs, slot: PrioritySlot, state: LightState) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots[slot.index()] = state;
        let active = slots
            .iter()
            .find(|s| led::is_lit(s.color))
            .copied()
            .unwrap_or(LightState::OFF);
        self.program(attrs, &active);
    }

    /// Program the channels for one winning state.
    ///
    /// Blink is attempted through the hardware engine first; if any lit
    /// channel rejects it, every channel is written steady instead. A steady
    /// write failure on one channel does not block the others.
    fn program(&self, attrs: &impl DeviceAttrs, state: &LightState) {
        let rgb = led::split(state.color);

        // Stop any in-progress blink engine before reprogramming.
        if self.white_mode {
            self.leds[WHITE].set_breath(attrs, false);
        } else {
            self.leds[RED].set_breath(attrs, false);
            self.leds[GREEN].set_breath(attrs, false);
            self.leds[BLUE].set_breath(attrs, false);
        }

        if state.blink_requested() {
            let ok = if self.white_mode {
                self.leds[WHITE].set_breath(attrs, true)
            } else {
                let mut ok = true;
                if rgb.red > 0 {
                    ok &= self.leds[RED].set_breath(attrs, true);
                }
                if rgb.green > 0 {
                    ok &= self.leds[GREEN].set_breath(attrs, true);
                }
                if rgb.blue > 0 {
                    ok &= self.leds[BLUE].set_breath(attrs, true);
                }
                ok
            };
            if ok {
                return;
            }
            warn!("hardware blink rejected, falling back to steady brightness");
        }

        if self.white_mode {
            self.leds[WHITE].set_brightness(attrs, led::to_brightness(state.color));
        } else {
            self.leds[RED].set_brightness(attrs, rgb.red);
            self.leds[GREEN].set_brightness(attrs, rgb.green);
            self.leds[BLUE].set_brightness(attrs, rgb.blue);
        }
    }
}
