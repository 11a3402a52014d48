//! Raw style-field input from the customizer controls
//!
//! Slider values are clamped here, before they reach [`StyleConfig`].
//!
//! [`StyleConfig`]: super::StyleConfig

use super::config::{
    ButtonIcon, ButtonShape, ChatPosition, FontFamily, HexColor, StyleChange, HEIGHT_RANGE,
    RADIUS_RANGE, WIDTH_RANGE,
};
use super::error::StyleError;
use serde::Deserialize;
use serde_json::Value;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The nine editable style fields (colors count individually)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum StyleField {
    PrimaryColor,
    BackgroundColor,
    TextColor,
    CornerRadius,
    Width,
    Height,
    FontFamily,
    Position,
    ButtonShape,
    ButtonIcon,
}

impl StyleField {
    pub const ALL: &'static [StyleField] = &[
        StyleField::PrimaryColor,
        StyleField::BackgroundColor,
        StyleField::TextColor,
        StyleField::CornerRadius,
        StyleField::Width,
        StyleField::Height,
        StyleField::FontFamily,
        StyleField::Position,
        StyleField::ButtonShape,
        StyleField::ButtonIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleField::PrimaryColor => "primary_color",
            StyleField::BackgroundColor => "background_color",
            StyleField::TextColor => "text_color",
            StyleField::CornerRadius => "corner_radius",
            StyleField::Width => "width",
            StyleField::Height => "height",
            StyleField::FontFamily => "font_family",
            StyleField::Position => "position",
            StyleField::ButtonShape => "button_shape",
            StyleField::ButtonIcon => "button_icon",
        }
    }
}

impl FromStr for StyleField {
    type Err = StyleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == raw)
            .ok_or_else(|| StyleError::UnknownField(raw.to_string()))
    }
}

impl TryFrom<String> for StyleField {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A change event from a customizer control: strings for colors and
/// enums, numbers for sliders
#[derive(Debug, Clone, Deserialize)]
pub struct StyleInput {
    pub field: StyleField,
    pub value: Value,
}

impl StyleInput {
    pub fn new(field: StyleField, value: impl Into<Value>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl TryFrom<StyleInput> for StyleChange {
    type Error = StyleError;

    fn try_from(input: StyleInput) -> Result<Self, Self::Error> {
        let field = input.field;
        let value = &input.value;
        Ok(match field {
            StyleField::PrimaryColor => StyleChange::PrimaryColor(color(field, value)?),
            StyleField::BackgroundColor => StyleChange::BackgroundColor(color(field, value)?),
            StyleField::TextColor => StyleChange::TextColor(color(field, value)?),
            StyleField::CornerRadius => {
                StyleChange::CornerRadius(clamped(field, value, &RADIUS_RANGE)?)
            }
            StyleField::Width => StyleChange::Width(clamped(field, value, &WIDTH_RANGE)?),
            StyleField::Height => StyleChange::Height(clamped(field, value, &HEIGHT_RANGE)?),
            StyleField::FontFamily => {
                StyleChange::FontFamily(text(field, value)?.parse::<FontFamily>()?)
            }
            StyleField::Position => {
                StyleChange::Position(text(field, value)?.parse::<ChatPosition>()?)
            }
            StyleField::ButtonShape => {
                StyleChange::ButtonShape(text(field, value)?.parse::<ButtonShape>()?)
            }
            StyleField::ButtonIcon => {
                StyleChange::ButtonIcon(text(field, value)?.parse::<ButtonIcon>()?)
            }
        })
    }
}

fn text(field: StyleField, value: &Value) -> Result<&str, StyleError> {
    value.as_str().ok_or(StyleError::WrongType {
        field: field.name(),
        expected: "string",
    })
}

fn color(field: StyleField, value: &Value) -> Result<HexColor, StyleError> {
    HexColor::parse(text(field, value)?)
}

/// Round to the nearest pixel and clamp into `range`. Numeric strings are
/// accepted since HTML range inputs report their value as text.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped first
fn clamped(
    field: StyleField,
    value: &Value,
    range: &RangeInclusive<u32>,
) -> Result<u32, StyleError> {
    let wrong_type = || StyleError::WrongType {
        field: field.name(),
        expected: "number",
    };
    let raw = match value {
        Value::Number(n) => n.as_f64().ok_or_else(wrong_type)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| wrong_type())?,
        _ => return Err(wrong_type()),
    };
    if raw.is_nan() {
        return Err(wrong_type());
    }
    let clamped = raw
        .round()
        .clamp(f64::from(*range.start()), f64::from(*range.end()));
    Ok(clamped as u32)
}
