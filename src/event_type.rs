//! Raw event discriminants and the named [`EventType`] enum.
//!
//! Every platform event carries a `u32` discriminant. Known values are given a
//! name in [`EventType`]; the numeric value of each variant is the platform's own
//! value, so `EventType::KeyDown as u32 == 0x300`.
//!
//! ## Discriminant layout
//! Platform events are grouped in numeric blocks (application `0x100..`, display
//! `0x150..`, window `0x200..`, keyboard `0x300..`, ...). Application-registered
//! events live in the user block [`USER_EVENT_FIRST`]`..=`[`USER_EVENT_LAST`], which
//! is the numerically highest block. Values outside every block are legal inputs
//! to the classifier and map to [`Category::Unknown`](crate::Category::Unknown).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// First discriminant of the application-defined (user) block.
pub const USER_EVENT_FIRST: u32 = 0x8000;

/// Last discriminant the platform can deliver; closes the user block.
pub const USER_EVENT_LAST: u32 = 0xFFFF;

/// Returns `true` when `raw` lies inside the user block.
#[inline]
pub const fn is_user_event(raw: u32) -> bool {
    raw >= USER_EVENT_FIRST && raw <= USER_EVENT_LAST
}

/// Anything that carries a raw event discriminant.
///
/// Implemented for `u32`, [`EventType`], [`Event`](crate::Event) and references
/// to those, so classification helpers accept either a tag or a whole record.
pub trait EventTag {
    fn raw_type(&self) -> u32;
}

impl EventTag for u32 {
    #[inline]
    fn raw_type(&self) -> u32 {
        *self
    }
}

impl EventTag for EventType {
    #[inline]
    fn raw_type(&self) -> u32 {
        self.as_raw()
    }
}

impl<T: EventTag + ?Sized> EventTag for &T {
    #[inline]
    fn raw_type(&self) -> u32 {
        (**self).raw_type()
    }
}

macro_rules! event_types {
    ($( $(#[$meta:meta])* $variant:ident = $value:literal => $name:literal, )+) => {
        /// Known platform event types.
        ///
        /// The variant value is the native discriminant. User events have no named
        /// variant; they are identified by range (see [`is_user_event`]).
        #[repr(u32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum EventType {
            $( $(#[$meta])* $variant = $value, )+
        }

        impl EventType {
            /// Every named event type, in discriminant-block order.
            pub const ALL: &'static [EventType] = &[ $( EventType::$variant, )+ ];

            /// Looks up a raw discriminant. Unknown and user values return `None`.
            pub const fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $( $value => Some(EventType::$variant), )+
                    _ => None,
                }
            }

            /// Lowercase snake_case name, e.g. `"key_down"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( EventType::$variant => $name, )+
                }
            }
        }
    };
}

event_types! {
    // Application
    Quit = 0x100 => "quit",
    Terminating = 0x101 => "terminating",
    LowMemory = 0x102 => "low_memory",
    WillEnterBackground = 0x103 => "will_enter_background",
    DidEnterBackground = 0x104 => "did_enter_background",
    WillEnterForeground = 0x105 => "will_enter_foreground",
    DidEnterForeground = 0x106 => "did_enter_foreground",
    LocaleChanged = 0x107 => "locale_changed",
    SystemThemeChanged = 0x108 => "system_theme_changed",

    // Display
    DisplayOrientation = 0x151 => "display_orientation",
    DisplayAdded = 0x152 => "display_added",
    DisplayRemoved = 0x153 => "display_removed",
    DisplayMoved = 0x154 => "display_moved",
    DisplayDesktopModeChanged = 0x155 => "display_desktop_mode_changed",
    DisplayCurrentModeChanged = 0x156 => "display_current_mode_changed",
    DisplayContentScaleChanged = 0x157 => "display_content_scale_changed",

    // Window
    WindowShown = 0x202 => "window_shown",
    WindowHidden = 0x203 => "window_hidden",
    WindowExposed = 0x204 => "window_exposed",
    WindowMoved = 0x205 => "window_moved",
    WindowResized = 0x206 => "window_resized",
    WindowPixelSizeChanged = 0x207 => "window_pixel_size_changed",
    WindowMetalViewResized = 0x208 => "window_metal_view_resized",
    WindowMinimized = 0x209 => "window_minimized",
    WindowMaximized = 0x20A => "window_maximized",
    WindowRestored = 0x20B => "window_restored",
    WindowMouseEnter = 0x20C => "window_mouse_enter",
    WindowMouseLeave = 0x20D => "window_mouse_leave",
    WindowFocusGained = 0x20E => "window_focus_gained",
    WindowFocusLost = 0x20F => "window_focus_lost",
    WindowCloseRequested = 0x210 => "window_close_requested",
    WindowHitTest = 0x211 => "window_hit_test",
    WindowIccprofChanged = 0x212 => "window_iccprof_changed",
    WindowDisplayChanged = 0x213 => "window_display_changed",
    WindowDisplayScaleChanged = 0x214 => "window_display_scale_changed",
    WindowSafeAreaChanged = 0x215 => "window_safe_area_changed",
    WindowOccluded = 0x216 => "window_occluded",
    WindowEnterFullscreen = 0x217 => "window_enter_fullscreen",
    WindowLeaveFullscreen = 0x218 => "window_leave_fullscreen",
    WindowDestroyed = 0x219 => "window_destroyed",
    WindowHdrStateChanged = 0x21A => "window_hdr_state_changed",

    // Keyboard
    KeyDown = 0x300 => "key_down",
    KeyUp = 0x301 => "key_up",
    TextEditing = 0x302 => "text_editing",
    TextInput = 0x303 => "text_input",
    KeymapChanged = 0x304 => "keymap_changed",
    KeyboardAdded = 0x305 => "keyboard_added",
    KeyboardRemoved = 0x306 => "keyboard_removed",
    TextEditingCandidates = 0x307 => "text_editing_candidates",

    // Mouse
    MouseMotion = 0x400 => "mouse_motion",
    MouseButtonDown = 0x401 => "mouse_button_down",
    MouseButtonUp = 0x402 => "mouse_button_up",
    MouseWheel = 0x403 => "mouse_wheel",
    MouseAdded = 0x404 => "mouse_added",
    MouseRemoved = 0x405 => "mouse_removed",

    // Joystick
    JoystickAxisMotion = 0x600 => "joystick_axis_motion",
    JoystickBallMotion = 0x601 => "joystick_ball_motion",
    JoystickHatMotion = 0x602 => "joystick_hat_motion",
    JoystickButtonDown = 0x603 => "joystick_button_down",
    JoystickButtonUp = 0x604 => "joystick_button_up",
    JoystickAdded = 0x605 => "joystick_added",
    JoystickRemoved = 0x606 => "joystick_removed",
    JoystickBatteryUpdated = 0x607 => "joystick_battery_updated",
    JoystickUpdateComplete = 0x608 => "joystick_update_complete",

    // Gamepad
    GamepadAxisMotion = 0x650 => "gamepad_axis_motion",
    GamepadButtonDown = 0x651 => "gamepad_button_down",
    GamepadButtonUp = 0x652 => "gamepad_button_up",
    GamepadAdded = 0x653 => "gamepad_added",
    GamepadRemoved = 0x654 => "gamepad_removed",
    GamepadRemapped = 0x655 => "gamepad_remapped",
    GamepadTouchpadDown = 0x656 => "gamepad_touchpad_down",
    GamepadTouchpadMotion = 0x657 => "gamepad_touchpad_motion",
    GamepadTouchpadUp = 0x658 => "gamepad_touchpad_up",
    GamepadSensorUpdate = 0x659 => "gamepad_sensor_update",
    GamepadUpdateComplete = 0x65A => "gamepad_update_complete",
    GamepadSteamHandleUpdated = 0x65B => "gamepad_steam_handle_updated",

    // Touch
    FingerDown = 0x700 => "finger_down",
    FingerUp = 0x701 => "finger_up",
    FingerMotion = 0x702 => "finger_motion",

    // Clipboard
    ClipboardUpdate = 0x900 => "clipboard_update",

    // Drag and drop
    DropFile = 0x1000 => "drop_file",
    DropText = 0x1001 => "drop_text",
    DropBegin = 0x1002 => "drop_begin",
    DropComplete = 0x1003 => "drop_complete",
    DropPosition = 0x1004 => "drop_position",

    // Audio devices
    AudioDeviceAdded = 0x1100 => "audio_device_added",
    AudioDeviceRemoved = 0x1101 => "audio_device_removed",
    AudioDeviceFormatChanged = 0x1102 => "audio_device_format_changed",

    // Sensors
    SensorUpdate = 0x1200 => "sensor_update",

    // Pen
    PenProximityIn = 0x1300 => "pen_proximity_in",
    PenProximityOut = 0x1301 => "pen_proximity_out",
    PenDown = 0x1302 => "pen_down",
    PenUp = 0x1303 => "pen_up",
    PenButtonDown = 0x1304 => "pen_button_down",
    PenButtonUp = 0x1305 => "pen_button_up",
    PenMotion = 0x1306 => "pen_motion",
    PenAxis = 0x1307 => "pen_axis",

    // Camera devices
    CameraDeviceAdded = 0x1400 => "camera_device_added",
    CameraDeviceRemoved = 0x1401 => "camera_device_removed",
    CameraDeviceApproved = 0x1402 => "camera_device_approved",
    CameraDeviceDenied = 0x1403 => "camera_device_denied",

    // Render
    RenderTargetsReset = 0x2000 => "render_targets_reset",
    RenderDeviceReset = 0x2001 => "render_device_reset",
    RenderDeviceLost = 0x2002 => "render_device_lost",
}

impl EventType {
    /// Native discriminant.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

impl From<EventType> for u32 {
    fn from(value: EventType) -> Self {
        value.as_raw()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text did not name a known event type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized event type: {input:?}")]
pub struct ParseEventTypeError {
    pub input: String,
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    /// Accepts a case-insensitive snake_case name or a `0x`-prefixed discriminant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseEventTypeError {
            input: s.to_string(),
        };

        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            let raw = u32::from_str_radix(hex, 16).map_err(|_| err())?;
            return EventType::from_raw(raw).ok_or_else(err);
        }

        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip_through_lookup() {
        for &t in EventType::ALL {
            assert_eq!(EventType::from_raw(t.as_raw()), Some(t));
        }
        assert_eq!(EventType::from_raw(0), None);
        assert_eq!(EventType::from_raw(USER_EVENT_FIRST), None);
    }

    #[test]
    fn names_are_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for &t in EventType::ALL {
            assert!(seen.insert(t.name()), "duplicate name {}", t.name());
            assert_eq!(t.to_string().parse::<EventType>(), Ok(t));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_accepts_hex() {
        assert_eq!("KEY_DOWN".parse::<EventType>(), Ok(EventType::KeyDown));
        assert_eq!(" mouse_wheel ".parse::<EventType>(), Ok(EventType::MouseWheel));
        assert_eq!("0x206".parse::<EventType>(), Ok(EventType::WindowResized));
        assert!("0x8000".parse::<EventType>().is_err());
        assert!("not_an_event".parse::<EventType>().is_err());
        assert!("0xzz".parse::<EventType>().is_err());
    }

    #[test]
    fn serde_name_matches_display() {
        for &t in EventType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.name()));
        }
    }

    #[test]
    fn user_block_bounds() {
        assert!(!is_user_event(USER_EVENT_FIRST - 1));
        assert!(is_user_event(USER_EVENT_FIRST));
        assert!(is_user_event(USER_EVENT_LAST));
        assert!(!is_user_event(USER_EVENT_LAST + 1));
    }
}
