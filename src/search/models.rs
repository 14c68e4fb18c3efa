//! Search filter types

/// Which catalog categories a search covers
///
/// Parsing is deliberately permissive: anything that is not one of the
/// three entity names selects everything, the same as `all` or an absent
/// filter. Unrecognized values are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    All,
    University,
    College,
    Major,
}

impl SearchType {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("university") => Self::University,
            Some("college") => Self::College,
            Some("major") => Self::Major,
            _ => Self::All,
        }
    }

    pub fn includes_universities(self) -> bool {
        matches!(self, Self::All | Self::University)
    }

    pub fn includes_colleges(self) -> bool {
        matches!(self, Self::All | Self::College)
    }

    pub fn includes_majors(self) -> bool {
        matches!(self, Self::All | Self::Major)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(SearchType::parse(Some("university")), SearchType::University);
        assert_eq!(SearchType::parse(Some("college")), SearchType::College);
        assert_eq!(SearchType::parse(Some("major")), SearchType::Major);
        assert_eq!(SearchType::parse(Some("all")), SearchType::All);
        assert_eq!(SearchType::parse(None), SearchType::All);
    }

    #[test]
    fn test_unknown_values_select_everything() {
        let t = SearchType::parse(Some("faculty"));
        assert_eq!(t, SearchType::All);
        assert!(t.includes_universities() && t.includes_colleges() && t.includes_majors());
    }

    #[test]
    fn test_single_category_gating() {
        let t = SearchType::parse(Some("college"));
        assert!(!t.includes_universities());
        assert!(t.includes_colleges());
        assert!(!t.includes_majors());
    }
}
