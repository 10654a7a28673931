#![no_main]
use libfuzzer_sys::fuzz_target;
use prosoponym::{format_full_name, LexicalOrder};

fuzz_target!(|data: &str| {
    let mut fields = data.splitn(3, '|');
    let first = fields.next().unwrap_or("");
    let last = fields.next().unwrap_or("");
    let full = fields.next();

    let _ = format_full_name(first, last, LexicalOrder::Western, full, true);
    let _ = format_full_name(first, last, LexicalOrder::Eastern, full, false);
});
