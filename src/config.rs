use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Which characters count as alphanumeric when building a slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Letters and numbers from any script, by general category (`L*` and `N*`).
    /// Combining marks (`Mn`, `Mc`, `Me`) are separators.
    #[default]
    Unicode,
    /// Only `[a-z0-9]` survive; everything else becomes a separator.
    Ascii,
}

impl Charset {
    pub fn is_alphanumeric(self, c: char) -> bool {
        match self {
            Charset::Unicode => is_letter_or_number(c),
            Charset::Ascii => c.is_ascii_alphanumeric(),
        }
    }
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Configuration for title generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Alphanumeric classification used by the slugifier
    #[serde(default)]
    pub charset: Charset,
}

impl TitleConfig {
    /// Restrict slugs to ASCII letters and digits.
    pub fn ascii() -> Self {
        Self {
            charset: Charset::Ascii,
        }
    }
}
