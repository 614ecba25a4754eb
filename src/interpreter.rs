use std::io::BufRead;
use std::io::Write;

use thiserror::Error;

use crate::ast::Instruction;
use crate::semantics::*;
use crate::settings::{OutputEncoding, Settings};
use crate::tape::{Tape, VecTape};
use crate::TapeAddr;
use crate::TapeAddrError;

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Tape pointer error.
    #[error("Tape pointer error: {0}")]
    TapeError(#[from] TapeAddrError),
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Aborted by callback
    #[error("Callback aborted execution")]
    Aborted,
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            (Self::TapeError(l0), Self::TapeError(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Data sent to execution callback, before the instruction runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecuteCallbackData<'src> {
    /// Program counter of the instruction
    pub pc: usize,
    pub instruction: Instruction<'src>,
}

/// Reply type for callback
pub enum ExecuteCallbackResult {
    /// Continue execution
    Continue,
    /// Abort execution
    Abort,
}

/// State of a single run: program, tape, tape pointer and program counter.
#[derive(Debug, Clone)]
pub struct RunState<'p, 'src, TapeT: Tape = VecTape> {
    program: &'p [Instruction<'src>],
    tape: TapeT,
    tape_ptr: TapeAddr,
    pc: usize,
    output_encoding: OutputEncoding,
}

impl<'p, 'src> RunState<'p, 'src, VecTape> {
    /// Create a run with a fresh tape as described by `settings`.
    pub fn from_settings(program: &'p [Instruction<'src>], settings: &Settings) -> Self {
        RunState::new(
            program,
            VecTape::new(settings.tape_size, settings.pointer_policy),
        )
        .with_output_encoding(settings.output_encoding)
    }
}

impl<'p, 'src, TapeT: Tape> RunState<'p, 'src, TapeT> {
    pub fn new(program: &'p [Instruction<'src>], tape: TapeT) -> Self {
        Self {
            program,
            tape,
            tape_ptr: 0.into(),
            pc: 0,
            output_encoding: OutputEncoding::default(),
        }
    }

    pub fn with_output_encoding(mut self, output_encoding: OutputEncoding) -> Self {
        self.output_encoding = output_encoding;
        self
    }

    pub fn program(&self) -> &'p [Instruction<'src>] {
        self.program
    }

    pub fn tape(&self) -> &TapeT {
        &self.tape
    }

    pub fn tape_ptr(&self) -> TapeAddr {
        self.tape_ptr
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Instruction at the program counter, `None` once the program is done.
    pub fn current(&self) -> Option<Instruction<'src>> {
        self.program.get(self.pc).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Move on to the next instruction.
    pub fn advance(&mut self) {
        self.pc += 1;
    }

    /// Apply the instruction at the program counter.
    ///
    /// Only the loop instructions touch the program counter, advancing past
    /// the instruction is up to the caller. Nothing happens once the program
    /// is finished.
    pub fn dispatch(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<(), ExecutionError> {
        let Some(instr) = self.current() else {
            return Ok(());
        };
        match instr {
            Instruction::IncrementValue(text) | Instruction::DecrementValue(text) => {
                self.tape
                    .try_modify(self.tape_ptr, value_delta(text).into())?;
            }
            Instruction::IncrementPointer => self.tape_ptr = increase_pointer(self.tape_ptr),
            Instruction::DecrementPointer => self.tape_ptr = decrease_pointer(self.tape_ptr),
            Instruction::StartLoop => {
                if is_zero_cell(&self.tape, self.tape_ptr)? {
                    self.pc = scan_forward(self.program, self.pc);
                }
            }
            Instruction::EndLoop => {
                if !is_zero_cell(&self.tape, self.tape_ptr)? {
                    self.pc = scan_backward(self.program, self.pc);
                }
            }
            Instruction::Input => {
                // A prompt written without a newline must be visible first.
                output.flush()?;
                let line = read_line(input)?;
                self.tape.try_set(self.tape_ptr, input_value(&line))?;
            }
            Instruction::Output => {
                let mut buf = [0; 4];
                let value = self.tape.try_get(self.tape_ptr)?;
                output.write_all(encode_output(value, self.output_encoding, &mut buf))?;
            }
        }
        Ok(())
    }
}

/// Read one line without its terminator. End of input reads as an empty line.
///
/// Invalid UTF-8 is replaced rather than rejected.
fn read_line(input: &mut impl BufRead) -> Result<String, std::io::Error> {
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Run a program to completion
///
/// Instructions are executed one program counter position at a time until
/// the counter moves past the last instruction.
pub fn execute<'p, 'src, TapeT: Tape, F>(
    state: &mut RunState<'p, 'src, TapeT>,
    input: &mut impl BufRead,
    output: &mut impl Write,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData<'src>, &TapeT, &TapeAddr) -> ExecuteCallbackResult,
{
    while let Some(instruction) = state.current() {
        let data = ExecuteCallbackData {
            pc: state.pc,
            instruction,
        };
        match callback(data, &state.tape, &state.tape_ptr) {
            ExecuteCallbackResult::Continue => (),
            ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
        }
        state.dispatch(input, output)?;
        state.advance();
    }
    output.flush()?;
    Ok(())
}
