//! Event categories and the discriminant classifier.
//!
//! [`classify`] maps any raw discriminant onto exactly one [`Category`]. The mapping
//! is kept as an explicit range table ([`CATEGORY_RANGES`]) so the partition can be
//! inspected and tested directly instead of being spread over conditionals.
//!
//! ## Priority
//! The table is scanned top to bottom and the first matching row wins. Application
//! events come first and the user block comes last. Platform blocks are disjoint, so
//! order only matters if a future platform release makes two blocks overlap.
//!
//! Values outside every row classify as [`Category::Unknown`]; no value is rejected.

use crate::event_type::{EventTag, USER_EVENT_FIRST, USER_EVENT_LAST};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical grouping of event types.
///
/// Adding a variant means updating three places together: [`CATEGORY_RANGES`],
/// [`Category::ALL`], and, when the new category is input- or device-like,
/// [`INPUT_CATEGORIES`] / [`DEVICE_CATEGORIES`]. Nothing derives those sets
/// from the variant itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Lifecycle: quit, background/foreground transitions, locale and theme changes.
    Application,
    Window,
    /// Key presses, text input and editing, keymap and keyboard hotplug.
    Keyboard,
    Mouse,
    Joystick,
    /// Standardized controller layer on top of joysticks.
    Gamepad,
    Touch,
    Pen,
    Clipboard,
    Drop,
    /// Audio device hotplug and format changes.
    Audio,
    Sensor,
    Camera,
    /// Monitor hotplug, orientation and mode changes.
    Display,
    Render,
    /// Application-registered events.
    User,
    /// Anything the table does not cover.
    Unknown,
}

/// Categories that describe user input.
pub const INPUT_CATEGORIES: &[Category] = &[
    Category::Keyboard,
    Category::Mouse,
    Category::Joystick,
    Category::Gamepad,
    Category::Touch,
    Category::Pen,
];

/// Categories that describe hardware coming and going or changing configuration.
pub const DEVICE_CATEGORIES: &[Category] = &[Category::Audio, Category::Camera, Category::Display];

/// Inclusive `(low, high, category)` rows, in lookup priority order.
pub const CATEGORY_RANGES: &[(u32, u32, Category)] = &[
    (0x100, 0x108, Category::Application),
    (0x202, 0x21A, Category::Window),
    (0x300, 0x307, Category::Keyboard),
    (0x400, 0x405, Category::Mouse),
    (0x600, 0x608, Category::Joystick),
    (0x650, 0x65B, Category::Gamepad),
    (0x700, 0x702, Category::Touch),
    (0x1300, 0x1307, Category::Pen),
    (0x900, 0x900, Category::Clipboard),
    (0x1000, 0x1004, Category::Drop),
    (0x1100, 0x1102, Category::Audio),
    (0x1200, 0x1200, Category::Sensor),
    (0x1400, 0x1403, Category::Camera),
    (0x151, 0x157, Category::Display),
    (0x2000, 0x2002, Category::Render),
    (USER_EVENT_FIRST, USER_EVENT_LAST, Category::User),
];

impl Category {
    /// Every category, `Unknown` last.
    pub const ALL: &'static [Category] = &[
        Category::Application,
        Category::Window,
        Category::Keyboard,
        Category::Mouse,
        Category::Joystick,
        Category::Gamepad,
        Category::Touch,
        Category::Pen,
        Category::Clipboard,
        Category::Drop,
        Category::Audio,
        Category::Sensor,
        Category::Camera,
        Category::Display,
        Category::Render,
        Category::User,
        Category::Unknown,
    ];

    /// Lowercase name used for logging and configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Application => "application",
            Category::Window => "window",
            Category::Keyboard => "keyboard",
            Category::Mouse => "mouse",
            Category::Joystick => "joystick",
            Category::Gamepad => "gamepad",
            Category::Touch => "touch",
            Category::Pen => "pen",
            Category::Clipboard => "clipboard",
            Category::Drop => "drop",
            Category::Audio => "audio",
            Category::Sensor => "sensor",
            Category::Camera => "camera",
            Category::Display => "display",
            Category::Render => "render",
            Category::User => "user",
            Category::Unknown => "unknown",
        }
    }

    /// Inverse of [`as_str`](Self::as_str), case-insensitive; falls back to `Unknown`.
    pub fn from_name(name: &str) -> Category {
        let name = name.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Category::Unknown)
    }

    #[inline]
    pub fn is_input(self) -> bool {
        is_input_category(self)
    }

    #[inline]
    pub fn is_device(self) -> bool {
        is_device_category(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_name(s))
    }
}

/// Category of a raw discriminant, event type, or event record.
///
/// Pure and total: never fails, holds no state, safe from any thread.
pub fn classify(tag: impl EventTag) -> Category {
    classify_raw(tag.raw_type())
}

/// [`classify`] on a bare discriminant, usable in const contexts.
pub const fn classify_raw(raw: u32) -> Category {
    let mut i = 0;
    while i < CATEGORY_RANGES.len() {
        let (low, high, category) = CATEGORY_RANGES[i];
        if raw >= low && raw <= high {
            return category;
        }
        i += 1;
    }
    Category::Unknown
}

/// Debug/logging name of a category. Same as [`Category::as_str`].
pub const fn category_to_string(category: Category) -> &'static str {
    category.as_str()
}

pub fn is_event_in_category(tag: impl EventTag, category: Category) -> bool {
    classify(tag) == category
}

pub fn is_input_category(category: Category) -> bool {
    INPUT_CATEGORIES.contains(&category)
}

pub fn is_device_category(category: Category) -> bool {
    DEVICE_CATEGORIES.contains(&category)
}

/// `true` for keyboard, mouse, joystick, gamepad, touch and pen events.
pub fn is_input_event(tag: impl EventTag) -> bool {
    is_input_category(classify(tag))
}

/// `true` for audio, camera and display events.
pub fn is_device_event(tag: impl EventTag) -> bool {
    is_device_category(classify(tag))
}
