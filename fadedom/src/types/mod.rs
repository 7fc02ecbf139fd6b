mod color;
mod enums;
mod style;

pub use color::Color;
pub use enums::{Display, Size};
pub use style::{SavedVisual, Style};
