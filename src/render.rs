//! Resolve style-derived presentation for the preview
//!
//! Turns a transcript plus a [`StyleConfig`] into records the dashboard can
//! paint without knowing any color rules of its own.

use crate::dialogue::{ChatOption, Message, OptionVariant, Sender, Transcript};
use crate::style::{ButtonIcon, ButtonShape, ChatPosition, StyleConfig};
use serde::Serialize;

const WHITE: &str = "#ffffff";
const TRANSPARENT: &str = "transparent";
/// Primaries brighter than this get dark text on top
const LIGHT_PRIMARY_LUMINANCE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleStyle {
    pub background: String,
    pub color: String,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedOption {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub variant: OptionVariant,
    pub background: String,
    pub border: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    pub sender: Sender,
    pub text: String,
    pub has_chart: bool,
    /// Stroke color of the placeholder chart, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_color: Option<String>,
    pub bubble: BubbleStyle,
    pub options: Vec<RenderedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Launcher {
    pub shape: ButtonShape,
    pub icon: ButtonIcon,
    pub width: u32,
    pub height: u32,
    pub border_radius: String,
    pub background: String,
    pub color: String,
}

/// Everything the style-preview panel needs besides the messages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewPanel {
    pub width: u32,
    pub height: u32,
    pub border_radius: String,
    pub font_family: String,
    pub background: String,
    pub text_color: String,
    pub header_background: String,
    pub header_color: String,
    pub align: Align,
    pub launcher: Launcher,
}

/// Color readable on top of the primary color
fn on_primary(style: &StyleConfig) -> String {
    if style.primary_color.luminance() > LIGHT_PRIMARY_LUMINANCE {
        style.text_color.to_string()
    } else {
        WHITE.to_string()
    }
}

pub fn render_option(option: &ChatOption, style: &StyleConfig) -> RenderedOption {
    let primary = style.primary_color.to_string();
    let (background, border, color) = match option.variant {
        OptionVariant::Secondary => (
            style.primary_color.with_alpha(0x1a),
            TRANSPARENT.to_string(),
            primary,
        ),
        OptionVariant::Outline => (TRANSPARENT.to_string(), primary.clone(), primary),
        OptionVariant::Plain => (
            TRANSPARENT.to_string(),
            TRANSPARENT.to_string(),
            style.text_color.to_string(),
        ),
    };

    RenderedOption {
        id: option.id.clone(),
        label: option.label.clone(),
        icon: option.icon.clone(),
        variant: option.variant,
        background,
        border,
        color,
    }
}

pub fn render_message(message: &Message, style: &StyleConfig) -> RenderedMessage {
    let bubble = match message.sender {
        Sender::User => BubbleStyle {
            background: style.primary_color.to_string(),
            color: on_primary(style),
            align: Align::End,
        },
        Sender::Bot => BubbleStyle {
            background: style.primary_color.with_alpha(0x14),
            color: style.text_color.to_string(),
            align: Align::Start,
        },
    };

    RenderedMessage {
        sender: message.sender,
        text: message.text.clone(),
        has_chart: message.has_chart,
        chart_color: message
            .has_chart
            .then(|| style.primary_color.to_string()),
        bubble,
        options: message
            .options
            .iter()
            .map(|option| render_option(option, style))
            .collect(),
    }
}

pub fn render_transcript(transcript: &Transcript, style: &StyleConfig) -> Vec<RenderedMessage> {
    transcript
        .iter()
        .map(|message| render_message(message, style))
        .collect()
}

pub fn preview_panel(style: &StyleConfig) -> PreviewPanel {
    let launcher = match style.button_shape {
        ButtonShape::Circle => Launcher {
            shape: ButtonShape::Circle,
            icon: style.button_icon,
            width: 56,
            height: 56,
            border_radius: "50%".to_string(),
            background: style.primary_color.to_string(),
            color: on_primary(style),
        },
        ButtonShape::Pill => Launcher {
            shape: ButtonShape::Pill,
            icon: style.button_icon,
            width: 140,
            height: 48,
            border_radius: "9999px".to_string(),
            background: style.primary_color.to_string(),
            color: on_primary(style),
        },
    };

    PreviewPanel {
        width: style.width,
        height: style.height,
        border_radius: format!("{}px", style.corner_radius),
        font_family: style.font_family.css_stack(),
        background: style.background_color.to_string(),
        text_color: style.text_color.to_string(),
        header_background: style.primary_color.to_string(),
        header_color: on_primary(style),
        align: match style.position {
            ChatPosition::Left => Align::Start,
            ChatPosition::Center => Align::Center,
            ChatPosition::Right => Align::End,
        },
        launcher,
    }
}
