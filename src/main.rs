use std::{
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;

use clap::{Parser, ValueEnum};
use iguk::{
    execute, format_program, parse_source,
    settings::{OutputEncoding, PointerPolicy, Settings, DEFAULT_TAPE_SIZE},
    ExecuteCallbackResult, ExecutionError, ParseError, RunState,
};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parsing error: {0}")]
    ParserError(#[from] ParseError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Interpret the program
    Interpret,
    /// Print the instruction stream, one instruction per line
    Tokens,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input iGuk source file
    input_file: PathBuf,

    /// Select program mode
    #[arg(short, long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Number of tape cells
    #[arg(short, long, default_value_t = DEFAULT_TAPE_SIZE)]
    tape_size: usize,

    /// What to do when a cell outside the tape is accessed
    #[arg(short, long, value_enum, default_value_t = PointerPolicy::Error)]
    pointer_policy: PointerPolicy,

    /// How cells are written by the output instruction
    #[arg(long, value_enum, default_value_t = OutputEncoding::Utf8)]
    output_encoding: OutputEncoding,

    /// Abort after executing this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Enable debug output for the tokeniser
    #[arg(long, default_value_t = false)]
    debug_parse: bool,

    /// Trace every executed instruction
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let mut file = std::fs::File::open(args.input_file)?;
    let mut source = String::new();
    file.read_to_string(&mut source)?;

    let program = parse_source(&source)?;

    if args.debug_parse {
        dbg!("--- INSTRUCTIONS ---");
        dbg!(&program);
    }

    match args.mode.unwrap_or(Mode::Interpret) {
        Mode::Interpret => {
            let settings = Settings {
                tape_size: args.tape_size,
                pointer_policy: args.pointer_policy,
                output_encoding: args.output_encoding,
            };
            let trace = args.trace;
            let max_steps = args.max_steps;
            let mut steps: u64 = 0;
            let mut state = RunState::from_settings(&program, &settings);
            execute(
                &mut state,
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
                &mut |data, _, tp| {
                    if trace {
                        dbg!((data.pc, tp, data.instruction));
                    }
                    steps += 1;
                    match max_steps {
                        Some(limit) if steps > limit => ExecuteCallbackResult::Abort,
                        _ => ExecuteCallbackResult::Continue,
                    }
                },
            )?;
        }
        Mode::Tokens => {
            print!("{}", format_program(&program));
        }
    }

    Ok(())
}
