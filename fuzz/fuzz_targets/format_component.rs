#![no_main]
use libfuzzer_sys::fuzz_target;
use prosoponym::{format_first_name, format_last_name};

fuzz_target!(|data: &str| {
    let _ = format_first_name(data);
    let _ = format_last_name(data);
});
