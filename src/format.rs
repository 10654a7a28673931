use crate::case;
use crate::matcher::NameRole;
use crate::segment::Token;

/// Render role-tagged tokens as a single string: last-name words fully
/// upper-cased, everything else title-cased, joined by single spaces.
/// Casing operates on the surface forms, so diacritics survive rendering.
pub fn render(parts: &[(NameRole, &Token)]) -> String {
    let capacity = parts.iter().map(|(_, t)| t.surface.len() + 1).sum();
    let mut result = String::with_capacity(capacity);

    for &(role, token) in parts {
        if !result.is_empty() {
            result.push(' ');
        }
        match role {
            NameRole::Last => result.push_str(&case::uppercase_word(token.surface)),
            NameRole::First => result.push_str(&case::capitalize_word(token.surface)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::tokenize;

    #[test]
    fn renders_by_role() {
        let tokens = tokenize("aline maria caune ly");
        let parts = vec![
            (NameRole::First, &tokens[0]),
            (NameRole::First, &tokens[1]),
            (NameRole::Last, &tokens[2]),
            (NameRole::Last, &tokens[3]),
        ];
        assert_eq!("Aline Maria CAUNE LY", render(&parts));
    }

    #[test]
    fn preserves_diacritics() {
        let tokens = tokenize("nguyễn trúc");
        let parts = vec![(NameRole::Last, &tokens[0]), (NameRole::First, &tokens[1])];
        assert_eq!("NGUYỄN Trúc", render(&parts));
    }

    #[test]
    fn empty_parts_render_empty() {
        assert_eq!("", render(&[]));
    }
}
