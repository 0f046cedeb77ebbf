//! Date-prefixed title slugs.
//!
//! A title is built in two halves:
//! 1. the slug: lowercase, turn every non-alphanumeric character into a
//!    space, split on whitespace, join the tokens with `-`
//! 2. the date stamp: a calendar date formatted as `YYYY-MM-DD`
//!
//! and rendered as `<date>-<slug>`. An input with no alphanumeric characters
//! yields an empty slug, so the rendered title ends with a bare `-`.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::config::{Charset, TitleConfig};

/// Format used for the date stamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A generated title: the date it is stamped with and its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub date: NaiveDate,
    pub slug: String,
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", date_stamp(self.date), self.slug)
    }
}

/// Convert free-form text into hyphen-joined lowercase tokens.
///
/// The input is lowercased first, so a character whose lowercase form
/// expands (`'İ'` becomes `"i\u{307}"`) is classified piece by piece.
pub fn slugify(input: &str, charset: Charset) -> String {
    let spaced: String = input
        .to_lowercase()
        .chars()
        .map(|c| if charset.is_alphanumeric(c) { c } else { ' ' })
        .collect();

    let tokens: Vec<&str> = spaced.split_whitespace().collect();
    debug!(input, tokens = tokens.len(), "slugified input");

    tokens.join("-")
}

/// Format a date as `YYYY-MM-DD`.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date stamp.
pub fn parse_date_stamp(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Today's date according to the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build a title for an explicit date.
pub fn make_title_on(input: &str, date: NaiveDate, config: &TitleConfig) -> Title {
    Title {
        date,
        slug: slugify(input, config.charset),
    }
}

/// Build a title stamped with today's date, using the default configuration.
///
/// ```
/// let title = make_title::make_title("Python Formatting in VS Code");
/// assert!(title.ends_with("-python-formatting-in-vs-code"));
/// ```
pub fn make_title(input: &str) -> String {
    make_title_on(input, today(), &TitleConfig::default()).to_string()
}
