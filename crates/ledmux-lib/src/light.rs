//! Light types — wire ids, flash modes, logical states, priority slots.
//!
//! Ids follow the platform numbering callers already speak; they are the wire
//! contract and must not be renumbered. Id 1 (keyboard) and ids above 5 have
//! no hardware on this platform and are rejected as unsupported.

use std::fmt;

use serde::Serialize;

// ── Light types and wire ids ──

/// Logical lights addressable through the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightType {
    Backlight,
    Buttons,
    Battery,
    Notifications,
    Attention,
}

impl LightType {
    pub fn id(self) -> i32 {
        match self {
            LightType::Backlight => 0,
            LightType::Buttons => 2,
            LightType::Battery => 3,
            LightType::Notifications => 4,
            LightType::Attention => 5,
        }
    }

    pub fn from_id(id: i32) -> Option<LightType> {
        match id {
            0 => Some(LightType::Backlight),
            2 => Some(LightType::Buttons),
            3 => Some(LightType::Battery),
            4 => Some(LightType::Notifications),
            5 => Some(LightType::Attention),
            _ => None,
        }
    }

    /// Parse a light name as written on the command line (case-insensitive).
    pub fn from_name(name: &str) -> Option<LightType> {
        let name = name.trim();
        for light in [
            LightType::Backlight,
            LightType::Buttons,
            LightType::Battery,
            LightType::Notifications,
            LightType::Attention,
        ] {
            if name.eq_ignore_ascii_case(light.name()) {
                return Some(light);
            }
        }
        None
    }

    pub fn name(self) -> &'static str {
        match self {
            LightType::Backlight => "backlight",
            LightType::Buttons => "buttons",
            LightType::Battery => "battery",
            LightType::Notifications => "notifications",
            LightType::Attention => "attention",
        }
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Flash requests ──

/// Requested flash behavior for an indicator state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashMode {
    /// Steady on or off, no blinking.
    #[default]
    None,
    /// Blink with explicit on/off durations.
    Timed,
    /// Hardware-defined blink pattern.
    Hardware,
}

/// Flash timing request. Durations are milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlashSpec {
    pub mode: FlashMode,
    pub on_ms: u32,
    pub off_ms: u32,
}

/// One logical light request. Replaced wholesale on every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LightState {
    /// Packed `0xAARRGGBB` color.
    pub color: u32,
    pub flash: FlashSpec,
}

impl LightState {
    /// The all-off state every slot starts in.
    pub const OFF: LightState = LightState {
        color: 0,
        flash: FlashSpec {
            mode: FlashMode::None,
            on_ms: 0,
            off_ms: 0,
        },
    };

    /// Steady color, no flash.
    pub fn steady(color: u32) -> LightState {
        LightState {
            color,
            flash: FlashSpec::default(),
        }
    }

    /// Timed blink with the given cadence.
    pub fn timed(color: u32, on_ms: u32, off_ms: u32) -> LightState {
        LightState {
            color,
            flash: FlashSpec {
                mode: FlashMode::Timed,
                on_ms,
                off_ms,
            },
        }
    }

    /// True iff this state asks the hardware to animate a blink: a blink
    /// mode together with both durations nonzero. Anything else is steady.
    pub fn blink_requested(&self) -> bool {
        matches!(self.flash.mode, FlashMode::Timed | FlashMode::Hardware)
            && self.flash.on_ms > 0
            && self.flash.off_ms > 0
    }
}

// ── Priority slots ──

/// Arbitration slot for one indicator request source.
///
/// The slot array is scanned in [`PrioritySlot::ALL`] order on every update
/// and the first lit slot wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrioritySlot {
    Notification,
    Attention,
    Battery,
}

impl PrioritySlot {
    /// Number of slots (fixed; one per arbitrated request source).
    pub const COUNT: usize = 3;

    /// Scan order, highest priority first.
    pub const ALL: [PrioritySlot; PrioritySlot::COUNT] = [
        PrioritySlot::Notification,
        PrioritySlot::Attention,
        PrioritySlot::Battery,
    ];

    /// Index into the slot array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direct mapping from an arbitrated light type. Backlight and buttons
    /// bypass arbitration and map to `None`.
    pub fn for_light(light: LightType) -> Option<PrioritySlot> {
        match light {
            LightType::Battery => Some(PrioritySlot::Battery),
            LightType::Notifications => Some(PrioritySlot::Notification),
            LightType::Attention => Some(PrioritySlot::Attention),
            LightType::Backlight | LightType::Buttons => None,
        }
    }
}

// ── Descriptors ──

/// One entry in the advertised light list. Computed once at service
/// construction from device probing; static thereafter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LightDescriptor {
    pub id: i32,
    pub ordinal: i32,
    #[serde(rename = "type")]
    pub light_type: LightType,
}

impl LightDescriptor {
    pub fn new(light_type: LightType) -> LightDescriptor {
        LightDescriptor {
            id: light_type.id(),
            ordinal: 0,
            light_type,
        }
    }
}
