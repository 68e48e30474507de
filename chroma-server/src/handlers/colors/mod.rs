//! Color endpoints: random colors, schemes and the saved-color list.

mod handle_random;
mod handle_saved;
mod handle_scheme;

pub use handle_random::random_color_handler;
pub use handle_saved::{
    SaveColorRequest, get_color_handler, list_colors_handler,
    save_color_handler,
};
pub use handle_scheme::{SchemeQuery, color_scheme_handler, parse_count};
