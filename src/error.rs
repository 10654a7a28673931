use crate::case;
use crate::matcher::NameRole;
use thiserror::Error;

/// Errors surfaced by the formatting entry points. All are detected
/// synchronously; none are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The locale or country identifier has no known lexical-order mapping.
    #[error("no lexical name order is known for \"{0}\"")]
    UnsupportedLocale(String),

    /// Declared words that strict reconciliation could not find in the
    /// supplied full name.
    #[error("missing {} name components: {}", .role.label(), quoted(.role, .words))]
    MissingNameComponents { role: NameRole, words: Vec<String> },

    /// A declared first or last name tokenized to zero words.
    #[error("{0}")]
    InvalidArgument(&'static str),
}

// Missing words are displayed cased the way they would have been rendered.
fn quoted(role: &NameRole, words: &[String]) -> String {
    let mut result = String::new();

    for word in words {
        if !result.is_empty() {
            result.push_str(", ");
        }
        result.push('"');
        match role {
            NameRole::First => result.push_str(&case::capitalize_word(word)),
            NameRole::Last => result.push_str(&case::uppercase_word(word)),
        }
        result.push('"');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_components_display_cased_per_role() {
        let error = NameError::MissingNameComponents {
            role: NameRole::First,
            words: vec!["minh".to_string(), "maria".to_string()],
        };
        assert_eq!(
            "missing first name components: \"Minh\", \"Maria\"",
            error.to_string()
        );

        let error = NameError::MissingNameComponents {
            role: NameRole::Last,
            words: vec!["ly".to_string()],
        };
        assert_eq!("missing last name components: \"LY\"", error.to_string());
    }

    #[test]
    fn unsupported_locale_cites_the_identifier() {
        let error = NameError::UnsupportedLocale("XX".to_string());
        assert_eq!("no lexical name order is known for \"XX\"", error.to_string());
    }
}
