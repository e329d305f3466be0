//! LED primitives — color decoding, ramp synthesis, channel programming.

mod channel;
mod color;
mod ramp;

pub use channel::{DEFAULT_MAX_BRIGHTNESS, LedChannel};
pub use color::{Rgb, format_color, is_lit, parse_color, split, to_brightness};
pub use ramp::{LANE_LEN, MAX_STEP_MS, RAMP_STEPS, RampTable, synthesize};
