mod color;
mod style;
mod theme;

pub use color::Rgb;
pub use style::TextStyle;
pub use theme::Theme;
