//! A library for formatting and reconciling personal names across lexical
//! naming conventions.
//!
//! Cultures disagree about where the family name goes: Western order puts
//! the given name(s) first ("Aline Maria CAUNE LY"), Eastern order puts the
//! family name first ("NGUYEN Thi Thanh Truc"). Given the structurally-known
//! first and last name of a person, plus optionally a free-form full name
//! that may list the same words in any order, case, or accentuation, this
//! crate works out which words belong to which component, checks that every
//! declared word is actually present, and re-renders the name with the last
//! name upper-cased, every other word title-cased, and the original
//! diacritics intact.
//!
//! Word comparison is case- and diacritic-insensitive ("Nguyễn" matches
//! "nguyen"); rendering is not, so the full name's accents survive.
//!
//! # Examples
//!
//! ```
//! use prosoponym::{format_full_name, LexicalOrder};
//!
//! let formatted = format_full_name("aline maria", "caune ly", LexicalOrder::Western, None, true);
//! assert_eq!("Aline Maria CAUNE LY", formatted.unwrap());
//!
//! let order = LexicalOrder::for_locale_or_country("VN").unwrap();
//! let formatted = format_full_name("truc", "nguyen", order, Some("nguyen thi thanh truc"), true);
//! assert_eq!("NGUYEN Thi Thanh Truc", formatted.unwrap());
//! ```
//!
//! In strict mode, declared words missing from the full name are an error:
//!
//! ```
//! use prosoponym::{format_full_name, LexicalOrder, NameError, NameRole};
//!
//! let error = format_full_name(
//!     "Aline Minh Anh Maria",
//!     "CAUNE LY",
//!     LexicalOrder::Western,
//!     Some("Aline CAUNE LY"),
//!     true,
//! )
//! .unwrap_err();
//!
//! assert!(matches!(
//!     error,
//!     NameError::MissingNameComponents { role: NameRole::First, .. }
//! ));
//! ```

mod case;
mod cleanse;
mod error;
mod format;
mod matcher;
mod order;
mod reconcile;
mod segment;
mod transliterate;

use reconcile::DeclaredName;

pub use crate::cleanse::cleanse_name;
pub use crate::error::NameError;
pub use crate::matcher::NameRole;
pub use crate::order::LexicalOrder;

/// Format a first name (given name): each word title-cased.
///
/// The input is cleansed first, so punctuation becomes word breaks and
/// whitespace runs collapse.
///
/// ```
/// assert_eq!("Aline Maria", prosoponym::format_first_name("aline maria").unwrap());
/// ```
pub fn format_first_name(first_name: &str) -> Result<String, NameError> {
    let cleansed = cleanse_name(first_name);
    let tokens = segment::tokenize(&cleansed);
    if tokens.is_empty() {
        return Err(NameError::InvalidArgument("a first name must be provided"));
    }

    Ok(join(tokens.iter().map(|t| case::capitalize_word(t.surface))))
}

/// Format a last name (family name): each word upper-cased.
///
/// ```
/// assert_eq!("CAUNE LY", prosoponym::format_last_name("caune ly").unwrap());
/// ```
pub fn format_last_name(last_name: &str) -> Result<String, NameError> {
    let cleansed = cleanse_name(last_name);
    let tokens = segment::tokenize(&cleansed);
    if tokens.is_empty() {
        return Err(NameError::InvalidArgument("a last name must be provided"));
    }

    Ok(join(tokens.iter().map(|t| case::uppercase_word(t.surface))))
}

/// Format a person's full name according to a lexical naming convention.
///
/// Without `full_name`, the declared components are rendered in the order
/// `order` dictates; this path cannot fail for non-empty inputs. With a
/// `full_name`, its words are reconciled against the declared components:
/// the last name must appear as one unbroken run, the first-name words may
/// appear anywhere else, and leftover words are carried along as middle
/// names. In strict mode a declared word absent from the full name yields
/// [`NameError::MissingNameComponents`]; with `strict` set to `false` it is
/// dropped and a best-effort string is always produced.
///
/// An empty or all-punctuation `full_name` is treated as absent.
pub fn format_full_name(
    first_name: &str,
    last_name: &str,
    order: LexicalOrder,
    full_name: Option<&str>,
    strict: bool,
) -> Result<String, NameError> {
    // The cleansed inputs must all outlive the tokens reconciliation
    // borrows from them, declared and full-name tokens alike.
    let first = cleanse_name(first_name);
    let last = cleanse_name(last_name);
    let full = full_name.map(cleanse_name);

    let declared = DeclaredName::new(segment::tokenize(&first), segment::tokenize(&last))?;
    let full_tokens = full.as_ref().map(|name| segment::tokenize(name));
    let full_tokens = full_tokens
        .as_ref()
        .map(|tokens| tokens.as_slice())
        .filter(|tokens| !tokens.is_empty());

    let parts = reconcile::reconcile(&declared, order, full_tokens, strict)?;
    Ok(format::render(&parts))
}

/// Whether a first name is already formatted the way
/// [`format_first_name`] would format it.
pub fn is_first_name_well_formatted(first_name: &str) -> bool {
    format_first_name(first_name)
        .map(|formatted| formatted == first_name)
        .unwrap_or(false)
}

/// Whether a last name is already formatted the way
/// [`format_last_name`] would format it.
pub fn is_last_name_well_formatted(last_name: &str) -> bool {
    format_last_name(last_name)
        .map(|formatted| formatted == last_name)
        .unwrap_or(false)
}

/// Whether a full name is already formatted the way
/// [`format_full_name`] would format it from the given components.
pub fn is_full_name_well_formatted(
    first_name: &str,
    last_name: &str,
    full_name: &str,
    order: LexicalOrder,
    strict: bool,
) -> bool {
    format_full_name(first_name, last_name, order, Some(full_name), strict)
        .map(|formatted| formatted == full_name)
        .unwrap_or(false)
}

fn join(words: impl Iterator<Item = String>) -> String {
    let mut result = String::new();
    for word in words {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(&word);
    }
    result
}
