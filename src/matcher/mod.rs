//! Name matching strategies
//!
//! Search matches queries against entity names. How a query becomes a
//! pattern is a single substitutable choice: the historical behavior
//! treats the query as a raw, unescaped regex (metacharacters and all),
//! which `Raw` preserves. `Escaped` and `Substring` are the safer
//! alternatives for deployments that want them.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a query string is interpreted when matching names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Query is a raw regex pattern, case-insensitive (default)
    #[default]
    Raw,
    /// Query is regex-escaped before compiling, case-insensitive
    Escaped,
    /// Plain case-insensitive substring containment
    Substring,
}

/// Error compiling a query into a pattern
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// A compiled, case-insensitive name pattern
#[derive(Debug, Clone)]
pub enum NamePattern {
    Regex(regex::Regex),
    Substring(String),
}

impl NamePattern {
    /// Compile a query under the given mode
    pub fn compile(query: &str, mode: MatchMode) -> Result<Self, MatchError> {
        match mode {
            MatchMode::Raw => Ok(Self::Regex(
                RegexBuilder::new(query).case_insensitive(true).build()?,
            )),
            MatchMode::Escaped => Ok(Self::Regex(
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(true)
                    .build()?,
            )),
            MatchMode::Substring => Ok(Self::Substring(query.to_lowercase())),
        }
    }

    /// Test a name against the pattern
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(name),
            Self::Substring(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_is_case_insensitive() {
        let p = NamePattern::compile("engineering", MatchMode::Raw).unwrap();
        assert!(p.is_match("College of ENGINEERING"));
    }

    #[test]
    fn test_raw_matches_arabic_substring() {
        let p = NamePattern::compile("هندسة", MatchMode::Raw).unwrap();
        assert!(p.is_match("كلية الهندسة"));
    }

    #[test]
    fn test_raw_keeps_metacharacters_live() {
        // "c.t" as a raw pattern matches "cat"
        let p = NamePattern::compile("c.t", MatchMode::Raw).unwrap();
        assert!(p.is_match("cat"));
    }

    #[test]
    fn test_escaped_neutralizes_metacharacters() {
        let p = NamePattern::compile("c.t", MatchMode::Escaped).unwrap();
        assert!(!p.is_match("cat"));
        assert!(p.is_match("c.t sciences"));
    }

    #[test]
    fn test_substring_mode() {
        let p = NamePattern::compile("MED", MatchMode::Substring).unwrap();
        assert!(p.is_match("School of Medicine"));
        assert!(!p.is_match("Engineering"));
    }

    #[test]
    fn test_raw_rejects_invalid_pattern() {
        assert!(NamePattern::compile("(unclosed", MatchMode::Raw).is_err());
        // the same input is fine once escaped
        assert!(NamePattern::compile("(unclosed", MatchMode::Escaped).is_ok());
    }
}
