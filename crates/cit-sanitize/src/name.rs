//! Author name quality classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Names that stand in for a missing author.
static PLACEHOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(anon(imo|ymous|ymus)?|et\.? ?al|s\.? ?n|n\.? ?d|sem autor|sin autor)\b")
        .expect("Invalid placeholder-name regex")
});

/// How well-formed an author name is. Lower levels are better formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameQuality {
    /// `Surname, Given Names` with at least one spelled-out given name.
    FullName = 1,
    /// `Surname, Initials`.
    Initials = 2,
    /// A single component with no surname/given-name split.
    SingleComponent = 3,
}

impl NameQuality {
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for NameQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Classify an author display name (`"Surname, Given Names"`).
///
/// Returns `None` for names that carry no usable person name: empty text,
/// digits, characters outside a personal name, placeholders such as
/// `"Anon"` or `"et al"`, and names with more than one comma.
pub fn author_name_quality(name: &str) -> Option<NameQuality> {
    let name = name.trim();
    if name.is_empty() || PLACEHOLDER_NAME.is_match(name) {
        return None;
    }
    if !name.chars().any(char::is_alphabetic) || !name.chars().all(is_name_char) {
        return None;
    }

    let Some((surname, given_names)) = name.split_once(',') else {
        return Some(NameQuality::SingleComponent);
    };
    if given_names.contains(',') {
        return None;
    }
    let surname = surname.trim();
    let given_names = given_names.trim();
    if surname.is_empty() || given_names.is_empty() {
        return Some(NameQuality::SingleComponent);
    }

    let tokens: Vec<&str> = given_names
        .split(|c: char| c.is_whitespace() || c == '.' || c == '-')
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.iter().all(|token| is_initial(token)) {
        Some(NameQuality::Initials)
    } else {
        Some(NameQuality::FullName)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || matches!(c, ',' | '.' | '-' | '\'' | '’')
}

/// `"J"`, `"JC"`, `"JCM"`: one to three capitals with no lowercase.
fn is_initial(token: &str) -> bool {
    let count = token.chars().count();
    count == 1 || (count <= 3 && token.chars().all(char::is_uppercase))
}
