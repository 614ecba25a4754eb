//! Runs every program in the programs directory and checks its output.

use std::{env, error::Error, path::PathBuf};

use iguk::{format_program, parse_source, settings::Settings, test_utils::test_execute};

fn find_programs() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR")?.into();
    path.push("tests");
    path.push("programs");

    let mut results = vec![];
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some("iguk") = path.extension().and_then(|x| x.to_str()) {
            results.push(path);
        }
    }
    Ok(results)
}

fn run_program(
    program_file: &PathBuf,
    input: Option<PathBuf>,
    expected_output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let src = std::fs::read_to_string(program_file)?;
    let out = std::fs::read(expected_output)?;
    let input = match input {
        Some(f) => std::fs::read(f)?,
        None => vec![],
    };
    let program = parse_source(&src)?;

    let exec1 = test_execute(&program, &Settings::default(), &mut input.as_slice());
    assert_eq!(exec1.result, Some(Ok(())));
    assert_eq!(exec1.output, out);
    assert_eq!(exec1.pc, program.len());

    // Comments are gone after formatting, behaviour must not change
    let formatted = format_program(&program);
    let reparsed = parse_source(&formatted)?;
    assert_eq!(reparsed, program);
    let exec2 = test_execute(&reparsed, &Settings::default(), &mut input.as_slice());
    assert_eq!(exec1, exec2);

    Ok(())
}

#[test]
fn test_programs() {
    let programs = find_programs().unwrap();
    assert!(!programs.is_empty());
    for program in programs {
        let in_file = program.with_extension("in");
        let in_file = if in_file.exists() {
            Some(in_file)
        } else {
            None
        };
        let out_file = program.with_extension("out");
        match run_program(&program, in_file, out_file) {
            Ok(_) => (),
            Err(err) => panic!("{err:?} {program:?}"),
        }
    }
}
