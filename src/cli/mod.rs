mod commands;
mod handlers;

pub use commands::{Cli, SAMPLE_INPUT};
pub use handlers::{handle_make_title, render_titles, resolve_date};
