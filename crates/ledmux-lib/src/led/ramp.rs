//! Ramp synthesis — PWM duty tables for the driver's blink engine.
//!
//! The driver exposes a 63-entry duty lookup table whose trailing entries
//! misbehave, so only 51 are used: three 17-entry lanes, one per color
//! channel. Each lane holds a linear ramp in the driver's duty unit, which
//! is twice the 8-bit brightness scale (0..=512). Both quirks are empirical
//! hardware requirements and are kept bit-for-bit.

/// Number of ramp steps per blink edge.
pub const RAMP_STEPS: u32 = 16;

/// Longest per-step duration the driver resolves, in milliseconds.
pub const MAX_STEP_MS: u32 = 15;

/// Entries one lane occupies in the shared duty table.
pub const LANE_LEN: u32 = RAMP_STEPS + 1;

/// Synthesized programming values for one channel's blink cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampTable {
    /// Offset of this channel's lane in the shared duty table.
    pub start_idx: u32,
    /// Comma-joined duty entries, 17 values from 0 to `2 * brightness`.
    pub duty_pcts: String,
    /// Pause at the dark end of the cycle, milliseconds.
    pub pause_lo_ms: u32,
    /// Pause at the bright end of the cycle, milliseconds.
    pub pause_hi_ms: u32,
    /// Duration of each ramp step, milliseconds.
    pub step_ms: u32,
}

/// Compute the duty table and timing for a requested on/off cadence.
///
/// A full-resolution ramp takes `RAMP_STEPS * MAX_STEP_MS` = 240 ms per
/// edge. When that overshoots `on_ms` the step duration is compressed and
/// the pauses absorb nothing; otherwise the pauses make up the remainder of
/// the requested times. Duty entries use truncating integer arithmetic.
pub fn synthesize(brightness: u8, on_ms: u32, off_ms: u32, lane: u32) -> RampTable {
    let duty_pcts = (0..=RAMP_STEPS)
        .map(|i| (i * 512 * brightness as u32 / (255 * RAMP_STEPS)).to_string())
        .collect::<Vec<_>>()
        .join(",");

    let ramp_ms = RAMP_STEPS * MAX_STEP_MS;
    let (step_ms, pause_hi_ms, pause_lo_ms) = if ramp_ms > on_ms {
        (on_ms / RAMP_STEPS, 0, off_ms)
    } else {
        // off_ms may still be shorter than the ramp; clamp instead of wrapping.
        (MAX_STEP_MS, on_ms - ramp_ms, off_ms.saturating_sub(ramp_ms))
    };

    RampTable {
        start_idx: LANE_LEN * lane,
        duty_pcts,
        pause_lo_ms,
        pause_hi_ms,
        step_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duty_entries(table: &RampTable) -> Vec<u32> {
        table
            .duty_pcts
            .split(',')
            .map(|s| s.parse().unwrap())
            .collect()
    }

    // ── full resolution ──

    #[test]
    fn full_resolution_ramp_at_240ms() {
        let t = synthesize(255, 240, 500, 0);
        assert_eq!(
            t.duty_pcts,
            "0,32,64,96,128,160,192,224,256,288,320,352,384,416,448,480,512"
        );
        assert_eq!(t.step_ms, 15);
        assert_eq!(t.pause_hi_ms, 0);
        assert_eq!(t.pause_lo_ms, 260);
        assert_eq!(t.start_idx, 0);
    }

    #[test]
    fn long_on_time_becomes_pause_at_full() {
        let t = synthesize(255, 1000, 1000, 0);
        assert_eq!(t.step_ms, 15);
        assert_eq!(t.pause_hi_ms, 760);
        assert_eq!(t.pause_lo_ms, 760);
    }

    #[test]
    fn short_off_time_clamps_pause_at_zero() {
        let t = synthesize(255, 300, 100, 0);
        assert_eq!(t.step_ms, 15);
        assert_eq!(t.pause_hi_ms, 60);
        assert_eq!(t.pause_lo_ms, 0);
    }

    // ── compressed ──

    #[test]
    fn compressed_ramp_below_240ms() {
        let t = synthesize(255, 100, 500, 0);
        assert_eq!(t.step_ms, 6);
        assert_eq!(t.pause_hi_ms, 0);
        assert_eq!(t.pause_lo_ms, 500);
    }

    #[test]
    fn compression_boundary_is_exclusive() {
        // 240 ms on-time still fits the full-resolution ramp.
        let t = synthesize(255, 240, 240, 0);
        assert_eq!(t.step_ms, 15);
        assert_eq!(t.pause_lo_ms, 0);
        // One millisecond less compresses.
        let t = synthesize(255, 239, 240, 0);
        assert_eq!(t.step_ms, 239 / 16);
        assert_eq!(t.pause_lo_ms, 240);
    }

    #[test]
    fn zero_on_time_yields_zero_step() {
        let t = synthesize(255, 0, 500, 0);
        assert_eq!(t.step_ms, 0);
        assert_eq!(t.pause_lo_ms, 500);
    }

    // ── duty entries ──

    #[test]
    fn duty_always_has_lane_len_entries() {
        for brightness in [0, 1, 128, 255] {
            let t = synthesize(brightness, 240, 240, 0);
            assert_eq!(duty_entries(&t).len() as u32, LANE_LEN);
        }
    }

    #[test]
    fn duty_is_monotonic_from_zero() {
        let t = synthesize(200, 240, 240, 0);
        let entries = duty_entries(&t);
        assert_eq!(entries[0], 0);
        for pair in entries.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn duty_truncates_like_the_driver_expects() {
        // 16 * 512 * 128 / (255 * 16) = 257 in integer arithmetic, not 256.
        let t = synthesize(128, 240, 240, 0);
        let entries = duty_entries(&t);
        assert_eq!(entries[1], 16);
        assert_eq!(entries[8], 128);
        assert_eq!(entries[16], 257);
    }

    #[test]
    fn duty_of_zero_brightness_is_all_zero() {
        let t = synthesize(0, 240, 240, 0);
        assert!(duty_entries(&t).iter().all(|&e| e == 0));
    }

    #[test]
    fn duty_peaks_at_twice_brightness_scale() {
        for brightness in [1u8, 64, 200, 255] {
            let t = synthesize(brightness, 240, 240, 0);
            let entries = duty_entries(&t);
            assert_eq!(entries[16], 512 * brightness as u32 / 255);
        }
    }

    // ── lanes ──

    #[test]
    fn lanes_occupy_disjoint_segments() {
        assert_eq!(synthesize(255, 240, 240, 0).start_idx, 0);
        assert_eq!(synthesize(255, 240, 240, 1).start_idx, 17);
        assert_eq!(synthesize(255, 240, 240, 2).start_idx, 34);
    }

    #[test]
    fn three_lanes_fit_the_usable_table() {
        // Last usable entry is 50; entry 51..63 misbehave on this driver.
        let last_lane = synthesize(255, 240, 240, 2);
        assert!(last_lane.start_idx + LANE_LEN <= 51);
    }
}
