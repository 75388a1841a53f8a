//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `color` - Color mode and environment detection
//! - `width` - Alignment column computation
//! - `render` - `TreeFormatter`, writes the listing through termcolor

mod color;
mod config;
mod render;
mod width;

pub use color::{ColorMode, color_choice, should_use_color};
pub use config::OutputConfig;
pub use render::TreeFormatter;
pub use width::{max_width, padding, path_column};
