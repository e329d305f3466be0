//! Integration tests: end-to-end light sequences using MockAttrs.
//!
//! These tests drive the full platform surface through `Lights`, verifying
//! that priority arbitration, blink fallback and per-light dispatch produce
//! the right attribute writes in the right order.

use std::path::PathBuf;

use ledmux_lib::LedmuxError;
use ledmux_lib::config::Config;
use ledmux_lib::device::mock::MockAttrs;
use ledmux_lib::light::{LightState, LightType};
use ledmux_lib::service::Lights;

const BACKLIGHT: &str = "/sys/class/leds/lcd-backlight/brightness";
const BUTTON_0: &str = "/sys/class/leds/button-backlight/brightness";

fn led_attr(name: &str, attr: &str) -> PathBuf {
    PathBuf::from("/sys/class/leds").join(name).join(attr)
}

/// Helper: RGB indicator hardware plus backlight and one button.
fn rgb_device() -> MockAttrs {
    let attrs = MockAttrs::new();
    for name in ["red", "green", "blue"] {
        attrs.set_writable(led_attr(name, "brightness"));
        attrs.set_writable(led_attr(name, "blink"));
    }
    attrs.set_writable(BACKLIGHT);
    attrs.set_writable(BUTTON_0);
    attrs
}

/// Helper: single white channel with native breath, nothing else.
fn white_device() -> MockAttrs {
    let attrs = MockAttrs::new();
    attrs.set_writable(led_attr("white", "brightness"));
    attrs.set_writable(led_attr("white", "breath"));
    attrs
}

fn brightness_of(attrs: &MockAttrs, name: &str) -> Option<String> {
    attrs.last_write(&led_attr(name, "brightness"))
}

// ── Test: priority matrix ──

#[test]
fn first_lit_slot_wins_for_every_combination() {
    let battery = 0xFFFF_0000u32; // red
    let attention = 0xFF00_FF00u32; // green
    let notification = 0xFF00_00FFu32; // blue

    for mask in 0u8..8 {
        let note_on = mask & 1 != 0;
        let attn_on = mask & 2 != 0;
        let batt_on = mask & 4 != 0;

        let attrs = rgb_device();
        let svc = Lights::new(&attrs, &Config::default());

        let state = |on: bool, color: u32| {
            if on {
                LightState::steady(color)
            } else {
                LightState::OFF
            }
        };
        svc.set_light_state(&attrs, LightType::Battery.id(), &state(batt_on, battery))
            .unwrap();
        svc.set_light_state(&attrs, LightType::Attention.id(), &state(attn_on, attention))
            .unwrap();
        svc.set_light_state(
            &attrs,
            LightType::Notifications.id(),
            &state(note_on, notification),
        )
        .unwrap();

        let expected = if note_on {
            notification
        } else if attn_on {
            attention
        } else if batt_on {
            battery
        } else {
            0
        };
        let want = |shift: u32| ((expected >> shift) & 0xFF).to_string();
        assert_eq!(
            brightness_of(&attrs, "red"),
            Some(want(16)),
            "mask {mask:03b}: red"
        );
        assert_eq!(
            brightness_of(&attrs, "green"),
            Some(want(8)),
            "mask {mask:03b}: green"
        );
        assert_eq!(
            brightness_of(&attrs, "blue"),
            Some(want(0)),
            "mask {mask:03b}: blue"
        );
    }
}

// ── Test: notification interrupts charging indicator ──

#[test]
fn notification_blink_interrupts_and_releases_battery_color() {
    let attrs = rgb_device();
    let svc = Lights::new(&attrs, &Config::default());

    // 1. Charging: steady red
    svc.set_light_state(
        &attrs,
        LightType::Battery.id(),
        &LightState::steady(0xFFFF_0000),
    )
    .unwrap();
    assert_eq!(brightness_of(&attrs, "red"), Some("255".into()));

    // 2. Notification arrives: blinking blue takes over on the engine
    svc.set_light_state(
        &attrs,
        LightType::Notifications.id(),
        &LightState::timed(0xFF00_00FF, 500, 2000),
    )
    .unwrap();
    assert_eq!(attrs.last_write(&led_attr("blue", "blink")), Some("1".into()));

    // 3. Notification cleared: battery red returns, engine stopped
    svc.set_light_state(&attrs, LightType::Notifications.id(), &LightState::OFF)
        .unwrap();
    assert_eq!(attrs.last_write(&led_attr("blue", "blink")), Some("0".into()));
    assert_eq!(brightness_of(&attrs, "red"), Some("255".into()));
    assert_eq!(brightness_of(&attrs, "blue"), Some("0".into()));
}

// ── Test: reprogram on every update ──

#[test]
fn repeated_identical_updates_reprogram_the_hardware() {
    let attrs = rgb_device();
    let svc = Lights::new(&attrs, &Config::default());
    let state = LightState::steady(0xFFFF_0000);

    svc.set_light_state(&attrs, LightType::Battery.id(), &state)
        .unwrap();
    svc.set_light_state(&attrs, LightType::Battery.id(), &state)
        .unwrap();

    let red = attrs.writes_to(&led_attr("red", "brightness"));
    assert_eq!(red, vec!["255", "255"], "each update programs the channels");
}

#[test]
fn rapid_notification_cycles_end_dark() {
    let attrs = rgb_device();
    let svc = Lights::new(&attrs, &Config::default());

    for cycle in 0..10 {
        svc.set_light_state(
            &attrs,
            LightType::Notifications.id(),
            &LightState::steady(0xFF00_FF00),
        )
        .unwrap();
        assert_eq!(
            brightness_of(&attrs, "green"),
            Some("255".into()),
            "cycle {cycle}: lit"
        );
        svc.set_light_state(&attrs, LightType::Notifications.id(), &LightState::OFF)
            .unwrap();
        assert_eq!(
            brightness_of(&attrs, "green"),
            Some("0".into()),
            "cycle {cycle}: dark"
        );
    }
}

// ── Test: blink fallback ──

#[test]
fn engine_rejection_degrades_to_steady_color() {
    let attrs = rgb_device();
    attrs.fail_write(led_attr("green", "blink"));
    let svc = Lights::new(&attrs, &Config::default());

    // Cyan blink: green rejects the engine, so the whole color goes steady.
    svc.set_light_state(
        &attrs,
        LightType::Notifications.id(),
        &LightState::timed(0xFF00_FFFF, 500, 500),
    )
    .unwrap();
    assert_eq!(brightness_of(&attrs, "green"), Some("255".into()));
    assert_eq!(brightness_of(&attrs, "blue"), Some("255".into()));
    assert_eq!(brightness_of(&attrs, "red"), Some("0".into()));
}

#[test]
fn zero_duration_blink_is_programmed_steady() {
    let attrs = rgb_device();
    let svc = Lights::new(&attrs, &Config::default());

    svc.set_light_state(
        &attrs,
        LightType::Attention.id(),
        &LightState::timed(0xFFFF_0000, 0, 500),
    )
    .unwrap();
    // Engine never enabled, color still shows.
    assert_eq!(attrs.writes_to(&led_attr("red", "blink")), vec!["0"]);
    assert_eq!(brightness_of(&attrs, "red"), Some("255".into()));
}

// ── Test: white channel hardware ──

#[test]
fn white_hardware_runs_the_whole_sequence_on_one_channel() {
    let attrs = white_device();
    let svc = Lights::new(&attrs, &Config::default());
    assert!(svc.white_mode());

    // Steady: luminance of the color
    svc.set_light_state(
        &attrs,
        LightType::Battery.id(),
        &LightState::steady(0xFFFF_FFFF),
    )
    .unwrap();
    assert_eq!(brightness_of(&attrs, "white"), Some("255".into()));

    // Blink: native breath
    svc.set_light_state(
        &attrs,
        LightType::Notifications.id(),
        &LightState::timed(0xFF00_00FF, 500, 500),
    )
    .unwrap();
    assert_eq!(attrs.last_write(&led_attr("white", "breath")), Some("1".into()));

    // All clear: breath stopped, channel dark
    svc.set_light_state(&attrs, LightType::Notifications.id(), &LightState::OFF)
        .unwrap();
    svc.set_light_state(&attrs, LightType::Battery.id(), &LightState::OFF)
        .unwrap();
    assert_eq!(attrs.last_write(&led_attr("white", "breath")), Some("0".into()));
    assert_eq!(brightness_of(&attrs, "white"), Some("0".into()));
}

// ── Test: dispatch isolation ──

#[test]
fn backlight_and_buttons_do_not_disturb_the_indicator() {
    let attrs = rgb_device();
    let svc = Lights::new(&attrs, &Config::default());

    svc.set_light_state(
        &attrs,
        LightType::Battery.id(),
        &LightState::steady(0xFFFF_0000),
    )
    .unwrap();
    let red_before = attrs.writes_to(&led_attr("red", "brightness")).len();

    svc.set_light_state(
        &attrs,
        LightType::Backlight.id(),
        &LightState::steady(0xFF80_8080),
    )
    .unwrap();
    svc.set_light_state(&attrs, LightType::Buttons.id(), &LightState::OFF)
        .unwrap();

    assert_eq!(attrs.last_write(&PathBuf::from(BACKLIGHT)), Some("128".into()));
    assert_eq!(attrs.last_write(&PathBuf::from(BUTTON_0)), Some("0".into()));
    let red_after = attrs.writes_to(&led_attr("red", "brightness")).len();
    assert_eq!(red_before, red_after, "indicator channels untouched");
}

#[test]
fn unsupported_ids_fail_without_touching_hardware() {
    let attrs = rgb_device();
    let svc = Lights::new(&attrs, &Config::default());
    let before = attrs.write_count();

    for id in [-1, 1, 6, 99] {
        let err = svc
            .set_light_state(&attrs, id, &LightState::steady(0xFFFF_FFFF))
            .unwrap_err();
        assert!(
            matches!(err, LedmuxError::UnsupportedLight(got) if got == id),
            "id {id}"
        );
    }
    assert_eq!(attrs.write_count(), before);
}
