//! Chat-widget style configuration
//!
//! Pure data. Persistence is delegated to a [`crate::runtime::StyleStore`].

mod config;
mod error;
mod input;

pub use config::{
    ButtonIcon, ButtonShape, ChatPosition, FontFamily, HexColor, StyleChange, StyleConfig,
    HEIGHT_RANGE, RADIUS_RANGE, WIDTH_RANGE,
};
pub use error::StyleError;
pub use input::{StyleField, StyleInput};
