use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

use prosoponym::{format_full_name, LexicalOrder, NameError};

fn none_if_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn order_for(field: &str) -> LexicalOrder {
    match field {
        "western" => LexicalOrder::Western,
        "eastern" => LexicalOrder::Eastern,
        other => LexicalOrder::for_locale_or_country(other)
            .unwrap_or_else(|e| panic!("bad locale field {:?}: {}", other, e)),
    }
}

#[test]
fn formatting() {
    let f = File::open("tests/formatted-names.txt").ok().unwrap();
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line = line.ok().unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        let first = parts[0];
        let last = parts[1];
        let order = order_for(parts[2]);
        let full = none_if_empty(parts[3]);
        let strict = match parts[4] {
            "strict" => true,
            "lenient" => false,
            other => panic!("[{}] bad mode {:?}", line, other),
        };
        let expected = parts[5];

        let result = format_full_name(first, last, order, full, strict);
        assert!(
            result.is_ok(),
            "[{}] Failed to format: {}",
            line,
            result.unwrap_err()
        );

        let formatted = result.unwrap();
        assert!(
            formatted == expected,
            "[{}] Expected {:?}, got {:?}",
            line,
            expected,
            formatted
        );
    }
}

#[test]
fn missing_components() {
    let f = File::open("tests/missing-components.txt").ok().unwrap();
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line = line.ok().unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        let first = parts[0];
        let last = parts[1];
        let order = order_for(parts[2]);
        let full = none_if_empty(parts[3]);
        let cited = parts[4];

        let result = format_full_name(first, last, order, full, true);
        assert!(
            result.is_err(),
            "[{}] Expected an error, got {:?}",
            line,
            result.unwrap()
        );

        let error = result.unwrap_err();
        assert!(
            matches!(error, NameError::MissingNameComponents { .. }),
            "[{}] Expected missing components, got {:?}",
            line,
            error
        );
        assert!(
            error.to_string().contains(cited),
            "[{}] Expected {} to be cited, got: {}",
            line,
            cited,
            error
        );
    }
}

#[test]
fn lenient_mode_never_reports_missing_components() {
    let f = File::open("tests/missing-components.txt").ok().unwrap();
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line = line.ok().unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        let result = format_full_name(
            parts[0],
            parts[1],
            order_for(parts[2]),
            none_if_empty(parts[3]),
            false,
        );

        assert!(
            result.is_ok(),
            "[{}] Lenient formatting failed: {}",
            line,
            result.unwrap_err()
        );
        assert!(
            !result.unwrap().is_empty(),
            "[{}] Lenient formatting produced nothing",
            line
        );
    }
}
