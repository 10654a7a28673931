use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

use prosoponym::{format_first_name, format_full_name, format_last_name, LexicalOrder, NameError};

const USAGE: &str = "
Usage:
    prosoponym first <name>
    prosoponym last <name>
    prosoponym full [--lenient] <first> <last> <locale> [<full name>]
    prosoponym full [--lenient] -

With the `first` and `last` commands, prosoponym formats a single name
component (title-cased or upper-cased respectively), exiting with status 0
on success and 1 on failure.

With the `full` command, prosoponym formats a complete name according to
the lexical order of the given locale or ISO country code. If '-' is the
argument, it expects newline-separated records on stdin, each of the form
'first|last|locale|full name' (the full name may be empty), and prints one
JSON object per line. Otherwise it formats its arguments, printing the
result as JSON and exiting with status 0 if formatting succeeds, 1 if not.

Passing --lenient drops declared words missing from the full name instead
of failing.
";

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let strict = !args.iter().any(|arg| arg == "--lenient");
    args.retain(|arg| arg != "--lenient");

    if args.len() == 3 && (args[1] == "first" || args[1] == "last") {
        component_mode(&args[1], &args[2]);
    } else if args.len() >= 3 && args[1] == "full" {
        full_mode(&args[2..], strict);
    } else {
        writeln!(&mut std::io::stderr(), "{}", USAGE).ok();
        process::exit(64);
    }
}

fn component_mode(which: &str, name: &str) {
    let result = if which == "first" {
        format_first_name(name)
    } else {
        format_last_name(name)
    };

    match result {
        Ok(formatted) => println!("{}", formatted),
        Err(error) => {
            writeln!(&mut std::io::stderr(), "{}", error).ok();
            process::exit(1);
        }
    }
}

fn full_mode(args: &[String], strict: bool) {
    if args[0] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };

            if writeln!(&mut io::stdout(), "{}", format_record(&line, strict)).is_err() {
                break;
            }
        }
    } else if args.len() == 3 || args.len() == 4 {
        let order = match LexicalOrder::for_locale_or_country(&args[2]) {
            Ok(order) => order,
            Err(error) => {
                writeln!(&mut std::io::stderr(), "{}", error).ok();
                process::exit(1);
            }
        };

        match format_full_name(&args[0], &args[1], order, args.get(3).map(String::as_str), strict)
        {
            Ok(formatted) => {
                println!("{}", serde_json::json!({ "full_name": formatted }));
            }
            Err(error) => {
                writeln!(&mut std::io::stderr(), "{}", error).ok();
                process::exit(1);
            }
        }
    } else {
        writeln!(&mut std::io::stderr(), "{}", USAGE).ok();
        process::exit(64);
    }
}

fn format_record(line: &str, strict: bool) -> serde_json::Value {
    let mut fields = line.splitn(4, '|');
    let first = fields.next().unwrap_or("");
    let last = fields.next().unwrap_or("");
    let locale = fields.next().unwrap_or("");
    let full = fields.next().filter(|f| !f.is_empty());

    let order = match LexicalOrder::for_locale_or_country(locale) {
        Ok(order) => order,
        Err(error) => return serde_json::json!({ "error": error.to_string() }),
    };

    match format_full_name(first, last, order, full, strict) {
        Ok(formatted) => serde_json::json!({ "full_name": formatted, "order": order }),
        Err(error) => {
            let mut output = serde_json::json!({ "error": error.to_string() });
            if let NameError::MissingNameComponents { role, words } = &error {
                output["role"] = serde_json::json!(role);
                output["missing"] = serde_json::json!(words);
            }
            output
        }
    }
}
