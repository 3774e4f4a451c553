//! Five-line badge profile

use heapless::String;

/// Maximum bytes kept per profile field
pub const MAX_FIELD_LEN: usize = 48;

/// Largest profile document that will be read
pub const MAX_PROFILE_BYTES: usize = 512;

/// Number of detail lines under the title
pub const DETAIL_LINES: usize = 3;

/// Document written when no profile is stored
pub const DEFAULT_PROFILE: &str = "My Company\nH. Muster\n-Watching bird\n-Sleeping\n-Eating";

/// One profile line
pub type Field = String<MAX_FIELD_LEN>;

/// Badge owner details
///
/// Lines in order: company, name, then up to three details. Missing
/// lines are empty, extra lines are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeProfile {
    pub company: Field,
    pub name: Field,
    pub details: [Field; DETAIL_LINES],
}

impl BadgeProfile {
    /// Parse a profile document
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().map(to_field);
        let mut next = || lines.next().unwrap_or_default();

        Self {
            company: next(),
            name: next(),
            details: [next(), next(), next()],
        }
    }

    /// The built-in profile
    pub fn default_profile() -> Self {
        Self::parse(DEFAULT_PROFILE)
    }
}

/// Copy a line into a field, dropping a trailing carriage return and
/// any characters that do not fit
pub(crate) fn to_field(line: &str) -> Field {
    let mut field = Field::new();
    for ch in line.trim_end_matches('\r').chars() {
        if field.push(ch).is_err() {
            break;
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default() {
        let profile = BadgeProfile::default_profile();
        assert_eq!(profile.company.as_str(), "My Company");
        assert_eq!(profile.name.as_str(), "H. Muster");
        assert_eq!(profile.details[0].as_str(), "-Watching bird");
        assert_eq!(profile.details[1].as_str(), "-Sleeping");
        assert_eq!(profile.details[2].as_str(), "-Eating");
    }

    #[test]
    fn test_short_document() {
        let profile = BadgeProfile::parse("Acme\r\nJane Doe\r\n");
        assert_eq!(profile.company.as_str(), "Acme");
        assert_eq!(profile.name.as_str(), "Jane Doe");
        assert!(profile.details.iter().all(|d| d.is_empty()));
    }

    #[test]
    fn test_extra_lines_ignored() {
        let profile = BadgeProfile::parse("a\nb\nc\nd\ne\nf\ng");
        assert_eq!(profile.details[2].as_str(), "e");
    }

    #[test]
    fn test_long_line_cut_at_char_boundary() {
        let long = "é".repeat(40);
        let field = to_field(&long);
        assert_eq!(field.len(), MAX_FIELD_LEN);
        assert!(field.chars().all(|c| c == 'é'));
    }
}
