use std::borrow::Cow;

// Characters treated as word separators rather than as part of a name.
#[inline]
fn is_stripped_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '\\'
            | '/'
            | '#'
            | '!'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | ';'
            | ':'
            | '{'
            | '}'
            | '='
            | '-'
            | '_'
            | '`'
            | '~'
            | '('
            | ')'
            | '<'
            | '>'
            | '"'
            | '\''
    )
}

#[inline]
fn already_clean(name: &str) -> bool {
    let mut prev_space = true;

    for c in name.chars() {
        if is_stripped_punctuation(c) {
            return false;
        }
        if c.is_whitespace() {
            if c != ' ' || prev_space {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }

    name.is_empty() || !prev_space
}

#[inline(never)]
fn do_cleanse(name: &str) -> String {
    let mut result = String::with_capacity(name.len());

    let separated = name
        .chars()
        .map(|c| if is_stripped_punctuation(c) { ' ' } else { c })
        .collect::<String>();

    for word in separated.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }

    result
}

/// Normalize a name by replacing punctuation with spaces and collapsing
/// whitespace runs, borrowing when the input is already clean.
pub fn cleanse_name(name: &str) -> Cow<str> {
    if already_clean(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(do_cleanse(name))
    }
}
