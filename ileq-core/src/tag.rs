use std::{fmt, str::FromStr};

use thiserror::Error;

/// The semantic reading of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Tag {
    /// Disjunctive: uncertainty about a single true value.
    Epistemic,
    /// Conjunctive: a real set of admissible values, or a tolerance.
    Ontic,
}

impl Tag {
    pub const ALL: [Tag; 2] = [Tag::Epistemic, Tag::Ontic];

    /// Returns the short name of the tag.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tag::Epistemic => "Epistemic",
            Tag::Ontic => "Ontic",
        }
    }

    /// Returns the label shown next to input selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tag::Epistemic => "Epistemic (disjunctive)",
            Tag::Ontic => "Ontic (conjunctive)",
        }
    }

    /// Returns a one-line description of what the tag means.
    #[must_use]
    pub fn help(self) -> &'static str {
        match self {
            Tag::Epistemic => "Uncertainty about a single unknown value.",
            Tag::Ontic => "A real set of values, or a constraint every value must meet.",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a [`Tag`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interval tag `{0}`, expected `epistemic` or `ontic`")]
pub struct ParseTagError(String);

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "epistemic" | "e" | "disjunctive" => Ok(Tag::Epistemic),
            "ontic" | "o" | "conjunctive" => Ok(Tag::Ontic),
            _ => Err(ParseTagError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Tag {
    type Error = ParseTagError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("epistemic".parse(), Ok(Tag::Epistemic));
        assert_eq!(" Ontic ".parse(), Ok(Tag::Ontic));
        assert_eq!("E".parse(), Ok(Tag::Epistemic));
        assert_eq!("conjunctive".parse(), Ok(Tag::Ontic));
    }

    #[test]
    fn converts_owned_strings() {
        assert_eq!(Tag::try_from("Disjunctive".to_owned()), Ok(Tag::Epistemic));
        assert!(Tag::try_from("maybe".to_owned()).is_err());
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "fuzzy".parse::<Tag>().unwrap_err();
        assert!(err.to_string().contains("fuzzy"));
    }
}
