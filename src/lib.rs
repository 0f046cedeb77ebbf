pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod title;

pub use config::{Charset, TitleConfig};
pub use error::{MakeTitleError, Result};
pub use title::{make_title, make_title_on, slugify, Title};
