//! Minimal cell-buffer terminal renderer.

mod buffer;
mod cell;
mod style;
mod terminal;
mod text;

pub use buffer::Buffer;
pub use style::{Pen, Rect, Rgb, TextStyle};
pub use terminal::Terminal;
pub use text::{char_width, display_width, truncate_to_width};
