use crate::error::NameError;

/// The order in which a culture writes the components of a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum LexicalOrder {
    /// The given name comes first, the family name last. Usual in most
    /// European countries and in cultures predominantly influenced by
    /// Western Europe.
    Western,
    /// The family name comes first, the given name last. Used primarily in
    /// East and Southeast Asia, parts of India and Africa, and by
    /// Hungarians in Central Europe.
    Eastern,
}

static COUNTRY_LEXICAL_ORDERS: phf::Map<&'static str, LexicalOrder> =
    include!(concat!(env!("OUT_DIR"), "/country_lexical_orders.rs"));

impl LexicalOrder {
    /// Look up the conventional order for an ISO 3166 alpha-2 country code,
    /// or for a locale tag carrying one as its region subtag ("VN",
    /// "vi-VN", "fr_FR"). Lookup is case-insensitive; identifiers without
    /// a known mapping are an error.
    pub fn for_locale_or_country(identifier: &str) -> Result<LexicalOrder, NameError> {
        let region = identifier
            .rsplit(|c| c == '-' || c == '_')
            .next()
            .unwrap_or(identifier);

        let bytes = region.as_bytes();
        if bytes.len() == 2 && bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            let key = [
                bytes[0].to_ascii_uppercase(),
                bytes[1].to_ascii_uppercase(),
            ];
            let key = std::str::from_utf8(&key).unwrap();
            if let Some(&order) = COUNTRY_LEXICAL_ORDERS.get(key) {
                return Ok(order);
            }
        }

        Err(NameError::UnsupportedLocale(identifier.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_codes_resolve() {
        assert_eq!(
            LexicalOrder::Western,
            LexicalOrder::for_locale_or_country("FR").unwrap()
        );
        assert_eq!(
            LexicalOrder::Eastern,
            LexicalOrder::for_locale_or_country("VN").unwrap()
        );
        assert_eq!(
            LexicalOrder::Eastern,
            LexicalOrder::for_locale_or_country("jp").unwrap()
        );
    }

    #[test]
    fn locale_tags_resolve_by_region() {
        assert_eq!(
            LexicalOrder::Eastern,
            LexicalOrder::for_locale_or_country("vi-VN").unwrap()
        );
        assert_eq!(
            LexicalOrder::Western,
            LexicalOrder::for_locale_or_country("fr_FR").unwrap()
        );
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        for identifier in ["XX", "", "France", "fr-XX"] {
            match LexicalOrder::for_locale_or_country(identifier) {
                Err(NameError::UnsupportedLocale(cited)) => assert_eq!(identifier, cited),
                other => panic!("expected UnsupportedLocale for {:?}, got {:?}", identifier, other),
            }
        }
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn orders_serialize_lowercase() {
        assert_eq!(
            "\"eastern\"",
            serde_json::to_string(&LexicalOrder::Eastern).unwrap()
        );
        assert_eq!(
            "\"western\"",
            serde_json::to_string(&LexicalOrder::Western).unwrap()
        );
    }
}
