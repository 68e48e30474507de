//! HTTP request handlers organized by functionality

pub mod colors;
pub mod system;

// Re-export commonly used handlers
pub use colors::{
    color_scheme_handler, get_color_handler, list_colors_handler,
    random_color_handler, save_color_handler,
};
pub use system::{health_handler, ping_handler, route_not_found};
