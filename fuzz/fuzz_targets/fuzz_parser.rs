#![no_main]

use libfuzzer_sys::fuzz_target;

use iguk::{format_program, parse_source, ParseError};

fuzz_target!(|data: &str| {
    match parse_source(data) {
        Ok(program) => {
            assert!(!program.is_empty());
            let formatted = format_program(&program);
            assert_eq!(parse_source(&formatted), Ok(program));
        }
        Err(ParseError::EmptyProgram) => {
            assert!(data.lines().all(|l| {
                let l = l.trim();
                l.is_empty() || l.starts_with("//")
            }));
        }
        Err(ParseError::UnrecognizedInput { line, column, .. }) => {
            assert!(line >= 1 && column >= 1);
        }
    }
});
