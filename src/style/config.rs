//! Widget style configuration value

use super::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const RADIUS_RANGE: RangeInclusive<u32> = 0..=24;
pub const WIDTH_RANGE: RangeInclusive<u32> = 300..=500;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 400..=700;

// ============================================================================
// Colors
// ============================================================================

/// `#rrggbb` color, lowercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Accepts `#rgb` or `#rrggbb`; the short form is expanded
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor(raw.to_string());
        let digits = raw.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same color with a two-digit hex alpha suffix (`#rrggbbaa`)
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{alpha:02x}", self.0)
    }

    /// Relative luminance in `0.0..=1.0` (sRGB, unweighted gamma)
    pub fn luminance(&self) -> f64 {
        let channel = |range: std::ops::Range<usize>| {
            self.0
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .map_or(0.0, |v| f64::from(v) / 255.0)
        };
        0.2126 * channel(1..3) + 0.7152 * channel(3..5) + 0.0722 * channel(5..7)
    }
}

impl TryFrom<String> for HexColor {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Enumerated fields
// ============================================================================

/// Implements `FromStr` + `name()` for a style enum. Parsing accepts the
/// display name or the snake_case id, case-insensitively.
macro_rules! named_enum {
    ($ty:ident, $field:literal, { $($variant:ident => ($id:literal, $name:literal)),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = StyleError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let needle = raw.trim();
                $(
                    if needle.eq_ignore_ascii_case($name) || needle.eq_ignore_ascii_case($id) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(StyleError::UnknownValue {
                    field: $field,
                    value: raw.to_string(),
                })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    #[serde(rename = "Open Sans")]
    OpenSans,
    Poppins,
    Montserrat,
}

named_enum!(FontFamily, "font_family", {
    Inter => ("inter", "Inter"),
    Roboto => ("roboto", "Roboto"),
    OpenSans => ("open_sans", "Open Sans"),
    Poppins => ("poppins", "Poppins"),
    Montserrat => ("montserrat", "Montserrat"),
});

impl FontFamily {
    /// CSS `font-family` value with a generic fallback
    pub fn css_stack(self) -> String {
        format!("'{}', system-ui, sans-serif", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChatPosition {
    Left,
    Center,
    #[default]
    Right,
}

named_enum!(ChatPosition, "position", {
    Left => ("left", "Left"),
    Center => ("center", "Center"),
    Right => ("right", "Right"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    #[default]
    Circle,
    Pill,
}

named_enum!(ButtonShape, "button_shape", {
    Circle => ("circle", "Circle"),
    Pill => ("pill", "Pill"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonIcon {
    #[default]
    Chat,
    Message,
    Help,
    Bot,
}

named_enum!(ButtonIcon, "button_icon", {
    Chat => ("chat", "Chat"),
    Message => ("message", "Message"),
    Help => ("help", "Help"),
    Bot => ("bot", "Bot"),
});

// ============================================================================
// StyleConfig
// ============================================================================

/// Visual parameters of the chat widget.
///
/// Immutable in practice: every change produces a new value through
/// [`StyleConfig::with_change`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub primary_color: HexColor,
    pub background_color: HexColor,
    pub text_color: HexColor,
    pub corner_radius: u32,
    pub width: u32,
    pub height: u32,
    pub font_family: FontFamily,
    pub position: ChatPosition,
    pub button_shape: ButtonShape,
    pub button_icon: ButtonIcon,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            primary_color: HexColor("#0284c7".to_string()),
            background_color: HexColor("#ffffff".to_string()),
            text_color: HexColor("#1e293b".to_string()),
            corner_radius: 12,
            width: 380,
            height: 500,
            font_family: FontFamily::Inter,
            position: ChatPosition::Right,
            button_shape: ButtonShape::Circle,
            button_icon: ButtonIcon::Chat,
        }
    }
}

/// A single-field update. Numeric values are expected to be clamped already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleChange {
    PrimaryColor(HexColor),
    BackgroundColor(HexColor),
    TextColor(HexColor),
    CornerRadius(u32),
    Width(u32),
    Height(u32),
    FontFamily(FontFamily),
    Position(ChatPosition),
    ButtonShape(ButtonShape),
    ButtonIcon(ButtonIcon),
}

impl StyleChange {
    /// Field name as used on the wire
    pub fn field(&self) -> &'static str {
        match self {
            StyleChange::PrimaryColor(_) => "primary_color",
            StyleChange::BackgroundColor(_) => "background_color",
            StyleChange::TextColor(_) => "text_color",
            StyleChange::CornerRadius(_) => "corner_radius",
            StyleChange::Width(_) => "width",
            StyleChange::Height(_) => "height",
            StyleChange::FontFamily(_) => "font_family",
            StyleChange::Position(_) => "position",
            StyleChange::ButtonShape(_) => "button_shape",
            StyleChange::ButtonIcon(_) => "button_icon",
        }
    }
}

impl StyleConfig {
    /// New configuration with one field replaced
    #[must_use]
    pub fn with_change(self, change: StyleChange) -> Self {
        match change {
            StyleChange::PrimaryColor(primary_color) => Self {
                primary_color,
                ..self
            },
            StyleChange::BackgroundColor(background_color) => Self {
                background_color,
                ..self
            },
            StyleChange::TextColor(text_color) => Self { text_color, ..self },
            StyleChange::CornerRadius(corner_radius) => Self {
                corner_radius,
                ..self
            },
            StyleChange::Width(width) => Self { width, ..self },
            StyleChange::Height(height) => Self { height, ..self },
            StyleChange::FontFamily(font_family) => Self {
                font_family,
                ..self
            },
            StyleChange::Position(position) => Self { position, ..self },
            StyleChange::ButtonShape(button_shape) => Self {
                button_shape,
                ..self
            },
            StyleChange::ButtonIcon(button_icon) => Self {
                button_icon,
                ..self
            },
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
