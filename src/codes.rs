//! Small value types carried by event payloads.
//!
//! Keys, modifiers and flag sets are thin newtypes over the platform's integer
//! encodings so unknown values survive unchanged. Closed sets with a fixed meaning
//! (mouse buttons, power states, pen axes) are plain enums with a fallible
//! `from_raw`.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Physical key position, independent of layout (USB HID usage numbering).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scancode(pub u32);

impl Scancode {
    pub const UNKNOWN: Scancode = Scancode(0);
    pub const A: Scancode = Scancode(4);
    pub const Z: Scancode = Scancode(29);
    pub const NUM_1: Scancode = Scancode(30);
    pub const NUM_0: Scancode = Scancode(39);
    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const BACKSPACE: Scancode = Scancode(42);
    pub const TAB: Scancode = Scancode(43);
    pub const SPACE: Scancode = Scancode(44);
    pub const F1: Scancode = Scancode(58);
    pub const F12: Scancode = Scancode(69);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);
    pub const LCTRL: Scancode = Scancode(224);
    pub const LSHIFT: Scancode = Scancode(225);
    pub const LALT: Scancode = Scancode(226);
    pub const LGUI: Scancode = Scancode(227);
    pub const RCTRL: Scancode = Scancode(228);
    pub const RSHIFT: Scancode = Scancode(229);
    pub const RALT: Scancode = Scancode(230);
    pub const RGUI: Scancode = Scancode(231);
}

/// Layout-dependent virtual key. Printable keys use their Unicode code point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keycode(pub u32);

impl Keycode {
    pub const UNKNOWN: Keycode = Keycode(0);
    pub const BACKSPACE: Keycode = Keycode(0x08);
    pub const TAB: Keycode = Keycode(0x09);
    pub const RETURN: Keycode = Keycode(0x0D);
    pub const ESCAPE: Keycode = Keycode(0x1B);
    pub const SPACE: Keycode = Keycode(0x20);
    pub const A: Keycode = Keycode(0x61);
    pub const Z: Keycode = Keycode(0x7A);
    pub const DELETE: Keycode = Keycode(0x7F);

    /// Keycode for a printable character.
    pub const fn from_char(c: char) -> Keycode {
        Keycode(c as u32)
    }
}

/// Modifier key state bitset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keymod(pub u16);

impl Keymod {
    pub const NONE: Keymod = Keymod(0x0000);
    pub const LSHIFT: Keymod = Keymod(0x0001);
    pub const RSHIFT: Keymod = Keymod(0x0002);
    pub const LEVEL5: Keymod = Keymod(0x0004);
    pub const LCTRL: Keymod = Keymod(0x0040);
    pub const RCTRL: Keymod = Keymod(0x0080);
    pub const LALT: Keymod = Keymod(0x0100);
    pub const RALT: Keymod = Keymod(0x0200);
    pub const LGUI: Keymod = Keymod(0x0400);
    pub const RGUI: Keymod = Keymod(0x0800);
    pub const NUM: Keymod = Keymod(0x1000);
    pub const CAPS: Keymod = Keymod(0x2000);
    pub const MODE: Keymod = Keymod(0x4000);
    pub const SCROLL: Keymod = Keymod(0x8000);

    pub const SHIFT: Keymod = Keymod(0x0001 | 0x0002);
    pub const CTRL: Keymod = Keymod(0x0040 | 0x0080);
    pub const ALT: Keymod = Keymod(0x0100 | 0x0200);
    pub const GUI: Keymod = Keymod(0x0400 | 0x0800);

    /// All bits of `other` are set.
    #[inline]
    pub const fn contains(self, other: Keymod) -> bool {
        self.0 & other.0 == other.0
    }

    /// Any bit of `other` is set.
    #[inline]
    pub const fn intersects(self, other: Keymod) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Keymod {
    type Output = Keymod;
    fn bitor(self, rhs: Keymod) -> Keymod {
        Keymod(self.0 | rhs.0)
    }
}

impl BitOrAssign for Keymod {
    fn bitor_assign(&mut self, rhs: Keymod) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Keymod {
    type Output = Keymod;
    fn bitand(self, rhs: Keymod) -> Keymod {
        Keymod(self.0 & rhs.0)
    }
}

/// Mouse button identifiers (platform numbering starts at 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left = 1,
    Middle = 2,
    Right = 3,
    X1 = 4,
    X2 = 5,
}

impl MouseButton {
    pub const fn from_raw(raw: u8) -> Option<MouseButton> {
        match raw {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Right),
            4 => Some(MouseButton::X1),
            5 => Some(MouseButton::X2),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Held-buttons bitset reported with mouse motion. Bit `n - 1` is button `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MouseButtonMask(pub u32);

impl MouseButtonMask {
    pub const NONE: MouseButtonMask = MouseButtonMask(0);

    pub const fn of(button: MouseButton) -> MouseButtonMask {
        MouseButtonMask(1 << (button as u32 - 1))
    }

    pub const fn contains(self, button: MouseButton) -> bool {
        self.0 & Self::of(button).0 != 0
    }

    pub const fn with(self, button: MouseButton) -> MouseButtonMask {
        MouseButtonMask(self.0 | Self::of(button).0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseWheelDirection {
    #[default]
    Normal,
    /// The OS reports "natural" scrolling; deltas are inverted.
    Flipped,
}

/// Battery state reported by joysticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    Error,
    #[default]
    Unknown,
    OnBattery,
    NoBattery,
    Charging,
    Charged,
}

impl PowerState {
    /// Platform encoding: `-1` error, `0` unknown, `1..=4` the remaining states.
    pub const fn from_raw(raw: i32) -> PowerState {
        match raw {
            -1 => PowerState::Error,
            1 => PowerState::OnBattery,
            2 => PowerState::NoBattery,
            3 => PowerState::Charging,
            4 => PowerState::Charged,
            _ => PowerState::Unknown,
        }
    }
}

/// Sensor kinds reported by standalone sensors and gamepads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    #[default]
    Invalid,
    Unknown,
    Accel,
    Gyro,
    AccelL,
    GyroL,
    AccelR,
    GyroR,
}

impl SensorType {
    pub const fn from_raw(raw: i32) -> SensorType {
        match raw {
            0 => SensorType::Unknown,
            1 => SensorType::Accel,
            2 => SensorType::Gyro,
            3 => SensorType::AccelL,
            4 => SensorType::GyroL,
            5 => SensorType::AccelR,
            6 => SensorType::GyroR,
            _ => SensorType::Invalid,
        }
    }
}

/// Pen state bitset attached to every pen event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PenInputFlags(pub u32);

impl PenInputFlags {
    pub const NONE: PenInputFlags = PenInputFlags(0);
    pub const DOWN: PenInputFlags = PenInputFlags(1 << 0);
    pub const BUTTON_1: PenInputFlags = PenInputFlags(1 << 1);
    pub const BUTTON_2: PenInputFlags = PenInputFlags(1 << 2);
    pub const BUTTON_3: PenInputFlags = PenInputFlags(1 << 3);
    pub const BUTTON_4: PenInputFlags = PenInputFlags(1 << 4);
    pub const BUTTON_5: PenInputFlags = PenInputFlags(1 << 5);
    pub const ERASER_TIP: PenInputFlags = PenInputFlags(1 << 30);

    pub const fn contains(self, other: PenInputFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PenInputFlags {
    type Output = PenInputFlags;
    fn bitor(self, rhs: PenInputFlags) -> PenInputFlags {
        PenInputFlags(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenAxis {
    /// `0.0..=1.0`
    #[default]
    Pressure,
    /// Degrees, `-90.0..=90.0`
    Xtilt,
    Ytilt,
    Distance,
    /// Degrees, `-180.0..180.0`
    Rotation,
    Slider,
    TangentialPressure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keymod_composites() {
        let m = Keymod::LSHIFT | Keymod::RCTRL;
        assert!(m.intersects(Keymod::SHIFT));
        assert!(!m.contains(Keymod::SHIFT));
        assert!(m.contains(Keymod::LSHIFT));
        assert!(m.intersects(Keymod::CTRL));
        assert!(!m.intersects(Keymod::ALT));
        assert!(Keymod::NONE.is_empty());
    }

    #[test]
    fn mouse_mask_bits_follow_button_numbers() {
        let mask = MouseButtonMask::NONE.with(MouseButton::Left).with(MouseButton::X2);
        assert_eq!(mask.0, 0b1_0001);
        assert!(mask.contains(MouseButton::Left));
        assert!(!mask.contains(MouseButton::Right));
        assert_eq!(MouseButton::from_raw(3), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_raw(0), None);
    }

    #[test]
    fn raw_enum_fallbacks() {
        assert_eq!(PowerState::from_raw(3), PowerState::Charging);
        assert_eq!(PowerState::from_raw(99), PowerState::Unknown);
        assert_eq!(SensorType::from_raw(2), SensorType::Gyro);
        assert_eq!(SensorType::from_raw(-1), SensorType::Invalid);
    }
}
