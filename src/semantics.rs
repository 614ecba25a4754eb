//! Effects of the individual instructions.
//!
//! Everything here is a pure function, the interpreter applies the results
//! to the run state.

use crate::{
    ast::{Instruction, DECREMENT_ONE, INCREMENT_ONE, MUTATE_VALUE_START},
    settings::OutputEncoding,
    tape::Tape,
    CellValue, TapeAddr, TapeAddrError,
};

/// Signed magnitude of a compound value mutation token.
///
/// The two character prefix is skipped (characters, not bytes). After that
/// every `우` counts +1, every `구` counts -1 and anything else (the
/// terminal marker) counts nothing. The prefix itself contains a `구`, which
/// is why it must be stripped first.
pub fn value_delta(token: &str) -> i64 {
    token
        .chars()
        .skip(MUTATE_VALUE_START.chars().count())
        .map(|c| match c {
            INCREMENT_ONE => 1,
            DECREMENT_ONE => -1,
            _ => 0,
        })
        .sum()
}

pub fn increase_pointer(pointer: TapeAddr) -> TapeAddr {
    pointer + 1.into()
}

pub fn decrease_pointer(pointer: TapeAddr) -> TapeAddr {
    pointer - 1.into()
}

/// Is the cell under the pointer zero?
pub fn is_zero_cell(tape: &impl Tape, pointer: TapeAddr) -> Result<bool, TapeAddrError> {
    Ok(tape.try_get(pointer)?.is_zero())
}

/// Index of the first loop end at or after `current`.
///
/// This does not track nesting: the first loop end wins, even if it closes
/// an inner loop. Without any loop end the last index is returned.
pub fn scan_forward(program: &[Instruction], current: usize) -> usize {
    program
        .iter()
        .enumerate()
        .skip(current)
        .find(|(_, instr)| instr.is_loop_end())
        .map_or(program.len().saturating_sub(1), |(idx, _)| idx)
}

/// Index of the first loop start at or before `current`, scanning backwards.
///
/// Like [`scan_forward`] this ignores nesting. Without any loop start 0 is
/// returned.
pub fn scan_backward(program: &[Instruction], current: usize) -> usize {
    let end = current.saturating_add(1).min(program.len());
    program[..end]
        .iter()
        .rposition(|instr| instr.is_loop_start())
        .unwrap_or(0)
}

/// Cell value for a line of input.
///
/// Only the first UTF-16 code unit counts (for characters outside the basic
/// plane that is the high surrogate). It is reduced modulo 256, an empty
/// line gives 0. `line` must not include the line terminator.
pub fn input_value(line: &str) -> CellValue {
    match line.encode_utf16().next() {
        Some(unit) => CellValue::from(i64::from(unit)),
        None => 0.into(),
    }
}

/// Encode a cell for output into `buf`, returning the bytes to write.
pub fn encode_output(value: CellValue, encoding: OutputEncoding, buf: &mut [u8; 4]) -> &[u8] {
    let byte = u8::from(value);
    match encoding {
        OutputEncoding::Utf8 => char::from(byte).encode_utf8(buf).as_bytes(),
        OutputEncoding::Byte => {
            buf[0] = byte;
            &buf[..1]
        }
    }
}
