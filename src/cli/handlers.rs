use std::io::{self, Read, Write};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use super::commands::SAMPLE_INPUT;
use crate::config::TitleConfig;
use crate::error::{MakeTitleError, Result};
use crate::title::{make_title_on, parse_date_stamp, today, Title};

/// JSON form of a title: its fields plus the rendered string.
#[derive(Serialize)]
struct TitleRecord<'a> {
    #[serde(flatten)]
    title: &'a Title,
    #[serde(rename = "title")]
    rendered: String,
}

/// Use the `--date` override if given, otherwise today's local date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(value) => parse_date_stamp(value).ok_or_else(|| MakeTitleError::InvalidDate {
            value: value.to_string(),
        }),
        None => Ok(today()),
    }
}

/// Render one output line per input.
pub fn render_titles<S: AsRef<str>>(
    inputs: &[S],
    date: NaiveDate,
    config: &TitleConfig,
    json: bool,
) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| {
            let title = make_title_on(input.as_ref(), date, config);
            if json {
                let record = TitleRecord {
                    title: &title,
                    rendered: title.to_string(),
                };
                Ok(serde_json::to_string(&record)?)
            } else {
                Ok(title.to_string())
            }
        })
        .collect()
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| MakeTitleError::InvalidInput(format!("stdin is not valid UTF-8: {}", e)))?;
    if text.is_empty() {
        // empty input is still one (empty) title
        return Ok(vec![String::new()]);
    }
    Ok(text.lines().map(str::to_string).collect())
}

pub fn handle_make_title(
    words: Vec<String>,
    stdin: bool,
    date: Option<String>,
    ascii: bool,
    json: bool,
) -> Result<()> {
    let date = resolve_date(date.as_deref())?;
    let config = if ascii {
        TitleConfig::ascii()
    } else {
        TitleConfig::default()
    };
    trace!(?config, %date, "title settings");

    let inputs = if stdin {
        read_stdin_lines()?
    } else if words.is_empty() {
        vec![SAMPLE_INPUT.to_string()]
    } else {
        vec![words.join(" ")]
    };
    debug!(count = inputs.len(), "rendering titles");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in render_titles(&inputs, date, &config, json)? {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_resolve_date_override() {
        assert_eq!(resolve_date(Some("2024-03-07")).unwrap(), date());
    }

    #[test]
    fn test_resolve_date_invalid() {
        let err = resolve_date(Some("03/07/2024")).unwrap_err();
        assert!(matches!(err, MakeTitleError::InvalidDate { ref value } if value == "03/07/2024"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let before = today();
        let resolved = resolve_date(None).unwrap();
        assert!(resolved >= before && resolved <= today());
    }

    #[test]
    fn test_render_plain() {
        let lines = render_titles(
            &["Python Formatting in VS Code", "", "a,,,,b"],
            date(),
            &TitleConfig::default(),
            false,
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![
                "2024-03-07-python-formatting-in-vs-code",
                "2024-03-07-",
                "2024-03-07-a-b",
            ]
        );
    }

    #[test]
    fn test_render_json() {
        let lines = render_titles(&["Test123 ABC!"], date(), &TitleConfig::default(), true).unwrap();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["date"], "2024-03-07");
        assert_eq!(value["slug"], "test123-abc");
        assert_eq!(value["title"], "2024-03-07-test123-abc");
    }

    #[test]
    fn test_render_ascii() {
        let lines = render_titles(&["Café au lait"], date(), &TitleConfig::ascii(), false).unwrap();
        assert_eq!(lines, vec!["2024-03-07-caf-au-lait"]);
    }
}
