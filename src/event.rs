//! Event records and their payloads.
//!
//! An [`Event`] is a timestamp plus exactly one [`EventPayload`]. The platform's
//! type-punned event union becomes a closed Rust enum: each variant owns one payload
//! struct, and the native discriminant is *derived* from that struct instead of being
//! stored next to it. A payload therefore cannot disagree with its tag.
//!
//! ## How payloads encode their tag
//! - Payloads covering several event types carry a small `kind` enum
//!   (e.g. [`WindowEventKind::Resized`] → `window_resized`).
//! - Press/release pairs carry a `down` flag (`down: true` → `key_down`).
//! - Single-type payloads always map to the same tag.
//! - [`UserEvent`] and [`UnknownEvent`] keep the raw value, validated on construction.
//!
//! ## Value conventions
//! - `timestamp` is in platform ticks (nanoseconds since library init).
//! - Window and display payloads keep two generic data words (`data1`, `data2`);
//!   accessors such as [`WindowEvent::width`] reinterpret them per kind.
//! - Mouse and pen coordinates are window-relative floats.

use crate::category::{classify_raw, Category};
use crate::codes::{
    Keycode, Keymod, MouseButton, MouseButtonMask, MouseWheelDirection, PenAxis, PenInputFlags,
    PowerState, Scancode, SensorType,
};
use crate::event_type::{is_user_event, EventTag, EventType};
use serde::{Deserialize, Serialize};

pub type WindowId = u32;
pub type DisplayId = u32;
pub type KeyboardId = u32;
pub type MouseId = u32;
pub type JoystickId = u32;
pub type AudioDeviceId = u32;
pub type CameraId = u32;
pub type SensorId = u32;
pub type TouchId = u64;
pub type FingerId = u64;
pub type PenId = u32;

/// Access to the native discriminant of a payload.
pub trait Payload {
    fn raw_type(&self) -> u32;

    /// Category of the event this payload belongs to.
    fn category(&self) -> Category {
        classify_raw(self.raw_type())
    }
}

macro_rules! event_kind {
    ($(#[$meta:meta])* $name:ident { $( $variant:ident => $ty:ident ),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            pub const fn event_type(self) -> EventType {
                match self {
                    $( $name::$variant => EventType::$ty, )+
                }
            }

            pub const fn from_event_type(t: EventType) -> Option<Self> {
                match t {
                    $( EventType::$ty => Some($name::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

macro_rules! fixed_payload {
    ($( $ty:ident => $event_type:ident ),+ $(,)?) => {
        $(
            impl $ty {
                pub const EVENT_TYPE: EventType = EventType::$event_type;
            }

            impl Payload for $ty {
                #[inline]
                fn raw_type(&self) -> u32 {
                    EventType::$event_type.as_raw()
                }
            }
        )+
    };
}

macro_rules! kind_payload {
    ($( $ty:ident ),+ $(,)?) => {
        $(
            impl Payload for $ty {
                #[inline]
                fn raw_type(&self) -> u32 {
                    self.kind.event_type().as_raw()
                }
            }
        )+
    };
}

macro_rules! pressed_payload {
    ($( $ty:ident => ($down:ident, $up:ident) ),+ $(,)?) => {
        $(
            impl $ty {
                pub const fn event_type(&self) -> EventType {
                    if self.down { EventType::$down } else { EventType::$up }
                }

                #[inline]
                pub const fn is_pressed(&self) -> bool {
                    self.down
                }

                #[inline]
                pub const fn is_released(&self) -> bool {
                    !self.down
                }
            }

            impl Payload for $ty {
                #[inline]
                fn raw_type(&self) -> u32 {
                    self.event_type().as_raw()
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

event_kind! {
    /// Application lifecycle transitions.
    ApplicationEventKind {
        Quit => Quit,
        Terminating => Terminating,
        LowMemory => LowMemory,
        WillEnterBackground => WillEnterBackground,
        DidEnterBackground => DidEnterBackground,
        WillEnterForeground => WillEnterForeground,
        DidEnterForeground => DidEnterForeground,
        LocaleChanged => LocaleChanged,
        SystemThemeChanged => SystemThemeChanged,
    }
}

event_kind! {
    DisplayEventKind {
        Orientation => DisplayOrientation,
        Added => DisplayAdded,
        Removed => DisplayRemoved,
        Moved => DisplayMoved,
        DesktopModeChanged => DisplayDesktopModeChanged,
        CurrentModeChanged => DisplayCurrentModeChanged,
        ContentScaleChanged => DisplayContentScaleChanged,
    }
}

event_kind! {
    WindowEventKind {
        Shown => WindowShown,
        Hidden => WindowHidden,
        Exposed => WindowExposed,
        Moved => WindowMoved,
        Resized => WindowResized,
        PixelSizeChanged => WindowPixelSizeChanged,
        MetalViewResized => WindowMetalViewResized,
        Minimized => WindowMinimized,
        Maximized => WindowMaximized,
        Restored => WindowRestored,
        MouseEnter => WindowMouseEnter,
        MouseLeave => WindowMouseLeave,
        FocusGained => WindowFocusGained,
        FocusLost => WindowFocusLost,
        CloseRequested => WindowCloseRequested,
        HitTest => WindowHitTest,
        IccprofChanged => WindowIccprofChanged,
        DisplayChanged => WindowDisplayChanged,
        DisplayScaleChanged => WindowDisplayScaleChanged,
        SafeAreaChanged => WindowSafeAreaChanged,
        Occluded => WindowOccluded,
        EnterFullscreen => WindowEnterFullscreen,
        LeaveFullscreen => WindowLeaveFullscreen,
        Destroyed => WindowDestroyed,
        HdrStateChanged => WindowHdrStateChanged,
    }
}

event_kind! {
    KeyboardDeviceKind { Added => KeyboardAdded, Removed => KeyboardRemoved }
}

event_kind! {
    MouseDeviceKind { Added => MouseAdded, Removed => MouseRemoved }
}

event_kind! {
    JoystickDeviceKind {
        Added => JoystickAdded,
        Removed => JoystickRemoved,
        UpdateComplete => JoystickUpdateComplete,
    }
}

event_kind! {
    GamepadDeviceKind {
        Added => GamepadAdded,
        Removed => GamepadRemoved,
        Remapped => GamepadRemapped,
        UpdateComplete => GamepadUpdateComplete,
        SteamHandleUpdated => GamepadSteamHandleUpdated,
    }
}

event_kind! {
    TouchpadKind {
        Down => GamepadTouchpadDown,
        Motion => GamepadTouchpadMotion,
        Up => GamepadTouchpadUp,
    }
}

event_kind! {
    AudioDeviceKind {
        Added => AudioDeviceAdded,
        Removed => AudioDeviceRemoved,
        FormatChanged => AudioDeviceFormatChanged,
    }
}

event_kind! {
    CameraDeviceKind {
        Added => CameraDeviceAdded,
        Removed => CameraDeviceRemoved,
        Approved => CameraDeviceApproved,
        Denied => CameraDeviceDenied,
    }
}

event_kind! {
    FingerKind { Down => FingerDown, Up => FingerUp, Motion => FingerMotion }
}

event_kind! {
    PenProximityKind { In => PenProximityIn, Out => PenProximityOut }
}

event_kind! {
    DropKind {
        File => DropFile,
        Text => DropText,
        Begin => DropBegin,
        Complete => DropComplete,
        Position => DropPosition,
    }
}

event_kind! {
    RenderEventKind {
        TargetsReset => RenderTargetsReset,
        DeviceReset => RenderDeviceReset,
        DeviceLost => RenderDeviceLost,
    }
}

// ---------------------------------------------------------------------------
// Application, display, window
// ---------------------------------------------------------------------------

/// Quit request and the other application lifecycle events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ApplicationEvent {
    pub kind: ApplicationEventKind,
}

impl ApplicationEvent {
    pub const fn new(kind: ApplicationEventKind) -> Self {
        Self { kind }
    }

    pub const fn is_quit(&self) -> bool {
        matches!(self.kind, ApplicationEventKind::Quit)
    }

    pub const fn is_terminating(&self) -> bool {
        matches!(self.kind, ApplicationEventKind::Terminating)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayEvent {
    pub kind: DisplayEventKind,
    pub display_id: DisplayId,
    pub data1: i32,
    pub data2: i32,
}

/// Window state change.
///
/// `data1`/`data2` hold the position for `Moved` and the size for `Resized` and
/// `PixelSizeChanged`; other kinds leave them at zero or platform-defined values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowEvent {
    pub kind: WindowEventKind,
    pub window_id: WindowId,
    pub data1: i32,
    pub data2: i32,
}

impl WindowEvent {
    pub const fn new(kind: WindowEventKind, window_id: WindowId, data1: i32, data2: i32) -> Self {
        Self {
            kind,
            window_id,
            data1,
            data2,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.kind == WindowEventKind::Shown
    }
    pub fn is_hidden(&self) -> bool {
        self.kind == WindowEventKind::Hidden
    }
    pub fn is_exposed(&self) -> bool {
        self.kind == WindowEventKind::Exposed
    }
    pub fn is_moved(&self) -> bool {
        self.kind == WindowEventKind::Moved
    }
    pub fn is_resized(&self) -> bool {
        self.kind == WindowEventKind::Resized
    }
    pub fn is_minimized(&self) -> bool {
        self.kind == WindowEventKind::Minimized
    }
    pub fn is_maximized(&self) -> bool {
        self.kind == WindowEventKind::Maximized
    }
    pub fn is_restored(&self) -> bool {
        self.kind == WindowEventKind::Restored
    }
    pub fn is_mouse_entered(&self) -> bool {
        self.kind == WindowEventKind::MouseEnter
    }
    pub fn is_mouse_left(&self) -> bool {
        self.kind == WindowEventKind::MouseLeave
    }
    pub fn is_focus_gained(&self) -> bool {
        self.kind == WindowEventKind::FocusGained
    }
    pub fn is_focus_lost(&self) -> bool {
        self.kind == WindowEventKind::FocusLost
    }
    pub fn is_close_requested(&self) -> bool {
        self.kind == WindowEventKind::CloseRequested
    }

    /// X position (moved events).
    #[inline]
    pub const fn x(&self) -> i32 {
        self.data1
    }

    /// Y position (moved events).
    #[inline]
    pub const fn y(&self) -> i32 {
        self.data2
    }

    /// Width (resize events).
    #[inline]
    pub const fn width(&self) -> i32 {
        self.data1
    }

    /// Height (resize events).
    #[inline]
    pub const fn height(&self) -> i32 {
        self.data2
    }
}

// ---------------------------------------------------------------------------
// Keyboard and text
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct KeyboardDeviceEvent {
    pub kind: KeyboardDeviceKind,
    pub which: KeyboardId,
}

/// Key press or release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KeyboardEvent {
    pub window_id: WindowId,
    pub which: KeyboardId,
    pub key: Keycode,
    pub scancode: Scancode,
    pub modifiers: Keymod,
    /// Platform-specific raw key code.
    pub raw: u16,
    pub down: bool,
    pub repeat: bool,
}

impl KeyboardEvent {
    /// A press (`down = true`) or release of `scancode` with no modifiers.
    pub fn new(scancode: Scancode, key: Keycode, down: bool) -> Self {
        Self {
            key,
            scancode,
            down,
            ..Self::default()
        }
    }

    #[inline]
    pub const fn is_repeat(&self) -> bool {
        self.repeat
    }
}

/// IME composition in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextEditingEvent {
    pub window_id: WindowId,
    pub text: String,
    pub start: i32,
    pub length: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextEditingCandidatesEvent {
    pub window_id: WindowId,
    pub candidates: Vec<String>,
    /// Index into `candidates`, `-1` when nothing is selected.
    pub selected_candidate: i32,
    pub horizontal: bool,
}

impl TextEditingCandidatesEvent {
    pub fn selected(&self) -> Option<&str> {
        usize::try_from(self.selected_candidate)
            .ok()
            .and_then(|i| self.candidates.get(i))
            .map(String::as_str)
    }
}

/// Committed text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextInputEvent {
    pub window_id: WindowId,
    pub text: String,
}

/// The keyboard layout changed. Carries no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KeymapChangedEvent;

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MouseDeviceEvent {
    pub kind: MouseDeviceKind,
    pub which: MouseId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MouseMotionEvent {
    pub window_id: WindowId,
    pub which: MouseId,
    pub state: MouseButtonMask,
    pub x: f32,
    pub y: f32,
    pub xrel: f32,
    pub yrel: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MouseButtonEvent {
    pub window_id: WindowId,
    pub which: MouseId,
    /// Raw button number; see [`MouseButtonEvent::mouse_button`].
    pub button: u8,
    pub down: bool,
    /// 1 for single-click, 2 for double-click, ...
    pub clicks: u8,
    pub x: f32,
    pub y: f32,
}

impl MouseButtonEvent {
    pub const fn mouse_button(&self) -> Option<MouseButton> {
        MouseButton::from_raw(self.button)
    }

    pub const fn is_double_click(&self) -> bool {
        self.clicks == 2
    }
}

/// Wheel scroll. `x`/`y` are the scroll amounts, `mouse_x`/`mouse_y` the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MouseWheelEvent {
    pub window_id: WindowId,
    pub which: MouseId,
    pub x: f32,
    pub y: f32,
    pub direction: MouseWheelDirection,
    pub mouse_x: f32,
    pub mouse_y: f32,
}

// ---------------------------------------------------------------------------
// Joystick
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct JoystickDeviceEvent {
    pub kind: JoystickDeviceKind,
    pub which: JoystickId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JoystickAxisEvent {
    pub which: JoystickId,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JoystickBallEvent {
    pub which: JoystickId,
    pub ball: u8,
    pub xrel: i16,
    pub yrel: i16,
}

/// Hat position bitmask (`0` = centered, `1` up, `2` right, `4` down, `8` left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JoystickHatEvent {
    pub which: JoystickId,
    pub hat: u8,
    pub value: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JoystickButtonEvent {
    pub which: JoystickId,
    pub button: u8,
    pub down: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JoystickBatteryEvent {
    pub which: JoystickId,
    pub state: PowerState,
    /// `0..=100`, or `-1` when unknown.
    pub percent: i32,
}

// ---------------------------------------------------------------------------
// Gamepad
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GamepadDeviceEvent {
    pub kind: GamepadDeviceKind,
    pub which: JoystickId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GamepadAxisEvent {
    pub which: JoystickId,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GamepadButtonEvent {
    pub which: JoystickId,
    pub button: u8,
    pub down: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GamepadTouchpadEvent {
    pub kind: TouchpadKind,
    pub which: JoystickId,
    pub touchpad: i32,
    pub finger: i32,
    /// Normalized `0.0..=1.0`, origin top-left.
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct GamepadSensorEvent {
    pub which: JoystickId,
    pub sensor: SensorType,
    pub data: [f32; 3],
    /// Sensor clock in nanoseconds, `0` when unavailable.
    pub sensor_timestamp: u64,
}

// ---------------------------------------------------------------------------
// Devices: audio, camera, sensor
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AudioDeviceEvent {
    pub kind: AudioDeviceKind,
    pub which: AudioDeviceId,
    pub recording: bool,
}

impl AudioDeviceEvent {
    pub const fn is_playback(&self) -> bool {
        !self.recording
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CameraDeviceEvent {
    pub kind: CameraDeviceKind,
    pub which: CameraId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SensorEvent {
    pub which: SensorId,
    pub data: [f32; 6],
    pub sensor_timestamp: u64,
}

// ---------------------------------------------------------------------------
// Touch and pen
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TouchFingerEvent {
    pub kind: FingerKind,
    pub touch_id: TouchId,
    pub finger_id: FingerId,
    /// Normalized `0.0..=1.0`.
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PenProximityEvent {
    pub kind: PenProximityKind,
    pub window_id: WindowId,
    pub which: PenId,
}

/// Pen tip or eraser touching / leaving the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PenTouchEvent {
    pub window_id: WindowId,
    pub which: PenId,
    pub pen_state: PenInputFlags,
    pub x: f32,
    pub y: f32,
    pub eraser: bool,
    pub down: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PenMotionEvent {
    pub window_id: WindowId,
    pub which: PenId,
    pub pen_state: PenInputFlags,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PenButtonEvent {
    pub window_id: WindowId,
    pub which: PenId,
    pub pen_state: PenInputFlags,
    pub x: f32,
    pub y: f32,
    pub button: u8,
    pub down: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PenAxisEvent {
    pub window_id: WindowId,
    pub which: PenId,
    pub pen_state: PenInputFlags,
    pub x: f32,
    pub y: f32,
    pub axis: PenAxis,
    pub value: f32,
}

// ---------------------------------------------------------------------------
// Drop, clipboard, render
// ---------------------------------------------------------------------------

/// Drag-and-drop progress. `data` holds the file path or text for `File`/`Text`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DropEvent {
    pub kind: DropKind,
    pub window_id: WindowId,
    pub x: f32,
    pub y: f32,
    pub source: String,
    pub data: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClipboardEvent {
    /// The application owns the clipboard contents.
    pub owner: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RenderEvent {
    pub kind: RenderEventKind,
    pub window_id: WindowId,
}

// ---------------------------------------------------------------------------
// User and unknown
// ---------------------------------------------------------------------------

/// Application-defined event with a discriminant in the user block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UserEvent {
    event_type: u32,
    pub window_id: WindowId,
    pub code: i32,
    /// Opaque application words.
    pub data1: u64,
    pub data2: u64,
}

impl UserEvent {
    /// `None` unless `event_type` lies in the user block.
    pub const fn new(event_type: u32) -> Option<Self> {
        if !is_user_event(event_type) {
            return None;
        }
        Some(Self {
            event_type,
            window_id: 0,
            code: 0,
            data1: 0,
            data2: 0,
        })
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    pub fn with_data(mut self, data1: u64, data2: u64) -> Self {
        self.data1 = data1;
        self.data2 = data2;
        self
    }

    #[inline]
    pub const fn event_type(&self) -> u32 {
        self.event_type
    }
}

impl Payload for UserEvent {
    #[inline]
    fn raw_type(&self) -> u32 {
        self.event_type
    }
}

/// A discriminant this crate has no payload for (newer platform releases).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UnknownEvent {
    event_type: u32,
}

impl UnknownEvent {
    /// `None` when `event_type` is a known type or a user event.
    pub const fn new(event_type: u32) -> Option<Self> {
        if EventType::from_raw(event_type).is_some() || is_user_event(event_type) {
            return None;
        }
        Some(Self { event_type })
    }

    #[inline]
    pub const fn event_type(&self) -> u32 {
        self.event_type
    }
}

impl Payload for UnknownEvent {
    #[inline]
    fn raw_type(&self) -> u32 {
        self.event_type
    }
}

fixed_payload! {
    TextEditingEvent => TextEditing,
    TextEditingCandidatesEvent => TextEditingCandidates,
    TextInputEvent => TextInput,
    KeymapChangedEvent => KeymapChanged,
    MouseMotionEvent => MouseMotion,
    MouseWheelEvent => MouseWheel,
    JoystickAxisEvent => JoystickAxisMotion,
    JoystickBallEvent => JoystickBallMotion,
    JoystickHatEvent => JoystickHatMotion,
    JoystickBatteryEvent => JoystickBatteryUpdated,
    GamepadAxisEvent => GamepadAxisMotion,
    GamepadSensorEvent => GamepadSensorUpdate,
    SensorEvent => SensorUpdate,
    PenMotionEvent => PenMotion,
    PenAxisEvent => PenAxis,
    ClipboardEvent => ClipboardUpdate,
}

kind_payload! {
    ApplicationEvent,
    DisplayEvent,
    WindowEvent,
    KeyboardDeviceEvent,
    MouseDeviceEvent,
    JoystickDeviceEvent,
    GamepadDeviceEvent,
    GamepadTouchpadEvent,
    AudioDeviceEvent,
    CameraDeviceEvent,
    TouchFingerEvent,
    PenProximityEvent,
    DropEvent,
    RenderEvent,
}

pressed_payload! {
    KeyboardEvent => (KeyDown, KeyUp),
    MouseButtonEvent => (MouseButtonDown, MouseButtonUp),
    JoystickButtonEvent => (JoystickButtonDown, JoystickButtonUp),
    GamepadButtonEvent => (GamepadButtonDown, GamepadButtonUp),
    PenTouchEvent => (PenDown, PenUp),
    PenButtonEvent => (PenButtonDown, PenButtonUp),
}

// ---------------------------------------------------------------------------
// Payload enum and record
// ---------------------------------------------------------------------------

macro_rules! payload_enum {
    ($( $(#[$meta:meta])* $variant:ident($ty:ident), )+) => {
        /// The closed set of event payloads; exactly one is active per [`Event`].
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum EventPayload {
            $( $(#[$meta])* $variant($ty), )+
        }

        impl Payload for EventPayload {
            fn raw_type(&self) -> u32 {
                match self {
                    $( EventPayload::$variant(e) => e.raw_type(), )+
                }
            }
        }

        $(
            impl From<$ty> for EventPayload {
                #[inline]
                fn from(e: $ty) -> Self {
                    EventPayload::$variant(e)
                }
            }
        )+
    };
}

payload_enum! {
    Application(ApplicationEvent),
    Display(DisplayEvent),
    Window(WindowEvent),
    KeyboardDevice(KeyboardDeviceEvent),
    Keyboard(KeyboardEvent),
    TextEditing(TextEditingEvent),
    TextEditingCandidates(TextEditingCandidatesEvent),
    TextInput(TextInputEvent),
    KeymapChanged(KeymapChangedEvent),
    MouseDevice(MouseDeviceEvent),
    MouseMotion(MouseMotionEvent),
    MouseButton(MouseButtonEvent),
    MouseWheel(MouseWheelEvent),
    JoystickDevice(JoystickDeviceEvent),
    JoystickAxis(JoystickAxisEvent),
    JoystickBall(JoystickBallEvent),
    JoystickHat(JoystickHatEvent),
    JoystickButton(JoystickButtonEvent),
    JoystickBattery(JoystickBatteryEvent),
    GamepadDevice(GamepadDeviceEvent),
    GamepadAxis(GamepadAxisEvent),
    GamepadButton(GamepadButtonEvent),
    GamepadTouchpad(GamepadTouchpadEvent),
    GamepadSensor(GamepadSensorEvent),
    AudioDevice(AudioDeviceEvent),
    CameraDevice(CameraDeviceEvent),
    Sensor(SensorEvent),
    TouchFinger(TouchFingerEvent),
    PenProximity(PenProximityEvent),
    PenTouch(PenTouchEvent),
    PenMotion(PenMotionEvent),
    PenButton(PenButtonEvent),
    PenAxis(PenAxisEvent),
    Drop(DropEvent),
    Clipboard(ClipboardEvent),
    Render(RenderEvent),
    User(UserEvent),
    /// Discriminant outside every known type and the user block.
    Unknown(UnknownEvent),
}

/// One platform event: a timestamp and its payload.
///
/// Immutable once built. The discriminant is derived from the payload, so
/// [`Event::raw_type`], [`Event::category`] and the typed views always agree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    timestamp: u64,
    payload: EventPayload,
}

impl Event {
    pub fn new(timestamp: u64, payload: impl Into<EventPayload>) -> Self {
        Self {
            timestamp,
            payload: payload.into(),
        }
    }

    /// `quit` at `timestamp`.
    pub fn quit(timestamp: u64) -> Self {
        Self::new(timestamp, ApplicationEvent::new(ApplicationEventKind::Quit))
    }

    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    #[inline]
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    pub fn into_payload(self) -> EventPayload {
        self.payload
    }

    /// Native discriminant.
    #[inline]
    pub fn raw_type(&self) -> u32 {
        self.payload.raw_type()
    }

    /// Named type; `None` for user and unknown events.
    pub fn event_type(&self) -> Option<EventType> {
        EventType::from_raw(self.raw_type())
    }

    pub fn category(&self) -> Category {
        classify_raw(self.raw_type())
    }

    pub fn is_input(&self) -> bool {
        self.category().is_input()
    }

    pub fn is_device(&self) -> bool {
        self.category().is_device()
    }

    /// Header fields shared by every event.
    pub fn common(&self) -> CommonEvent {
        CommonEvent {
            timestamp: self.timestamp,
            raw_type: self.raw_type(),
        }
    }
}

/// The part of an event that does not depend on its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CommonEvent {
    pub timestamp: u64,
    pub raw_type: u32,
}

impl CommonEvent {
    pub fn event_type(&self) -> Option<EventType> {
        EventType::from_raw(self.raw_type)
    }

    pub fn category(&self) -> Category {
        classify_raw(self.raw_type)
    }
}

impl EventTag for Event {
    #[inline]
    fn raw_type(&self) -> u32 {
        Event::raw_type(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_back_to_themselves() {
        for &t in EventType::ALL {
            if let Some(k) = WindowEventKind::from_event_type(t) {
                assert_eq!(k.event_type(), t);
            }
            if let Some(k) = GamepadDeviceKind::from_event_type(t) {
                assert_eq!(k.event_type(), t);
            }
            if let Some(k) = DropKind::from_event_type(t) {
                assert_eq!(k.event_type(), t);
            }
        }
        assert_eq!(WindowEventKind::from_event_type(EventType::KeyDown), None);
    }

    #[test]
    fn down_flag_selects_tag() {
        let press = KeyboardEvent::new(Scancode::ESCAPE, Keycode::ESCAPE, true);
        let release = KeyboardEvent { down: false, ..press };
        assert_eq!(press.event_type(), EventType::KeyDown);
        assert_eq!(release.event_type(), EventType::KeyUp);
        assert!(press.is_pressed() && !press.is_released());
        assert!(release.is_released());
    }

    #[test]
    fn window_accessors_reinterpret_data_words() {
        let moved = WindowEvent::new(WindowEventKind::Moved, 3, 10, 20);
        assert!(moved.is_moved());
        assert_eq!((moved.x(), moved.y()), (10, 20));
        let resized = WindowEvent::new(WindowEventKind::Resized, 3, 800, 600);
        assert!(resized.is_resized() && !resized.is_moved());
        assert_eq!((resized.width(), resized.height()), (800, 600));
    }

    #[test]
    fn user_and_unknown_constructors_validate_range() {
        assert!(UserEvent::new(0x8000).is_some());
        assert!(UserEvent::new(0xFFFF).is_some());
        assert!(UserEvent::new(0x7FFF).is_none());
        assert!(UserEvent::new(0x1_0000).is_none());

        assert!(UnknownEvent::new(0xFFFF_FFF0).is_some());
        assert!(UnknownEvent::new(0x109).is_some());
        assert!(UnknownEvent::new(EventType::KeyDown.as_raw()).is_none());
        assert!(UnknownEvent::new(0x8001).is_none());
    }

    #[test]
    fn record_derives_tag_and_category() {
        let ev = Event::new(42, WindowEvent::new(WindowEventKind::Resized, 1, 800, 600));
        assert_eq!(ev.timestamp(), 42);
        assert_eq!(ev.event_type(), Some(EventType::WindowResized));
        assert_eq!(ev.category(), Category::Window);

        let user = Event::new(7, UserEvent::new(0x8003).unwrap().with_code(9));
        assert_eq!(user.raw_type(), 0x8003);
        assert_eq!(user.event_type(), None);
        assert_eq!(user.category(), Category::User);

        let unknown = Event::new(8, UnknownEvent::new(0xFFFF_FFF0).unwrap());
        assert_eq!(unknown.category(), Category::Unknown);
        assert!(!unknown.is_input() && !unknown.is_device());
    }

    #[test]
    fn candidates_selection() {
        let ev = TextEditingCandidatesEvent {
            candidates: vec!["a".into(), "b".into()],
            selected_candidate: 1,
            ..Default::default()
        };
        assert_eq!(ev.selected(), Some("b"));
        let none = TextEditingCandidatesEvent {
            selected_candidate: -1,
            ..ev
        };
        assert_eq!(none.selected(), None);
    }

    #[test]
    fn events_serialize_with_payload_name() {
        let ev = Event::quit(5);
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["timestamp"], 5);
        assert_eq!(json["payload"]["application"]["kind"], "quit");
    }
}
