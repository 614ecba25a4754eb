//! Types and functions for the instruction stream.

use std::fmt::{Display, Write};

/// Start of both compound value mutation tokens (`이구`).
pub const MUTATE_VALUE_START: &str = "이구";
/// Operator glyph adding one to a cell.
pub const INCREMENT_ONE: char = '우';
/// Operator glyph subtracting one from a cell.
pub const DECREMENT_ONE: char = '구';

pub const INCREMENT_POINTER: &str = "고수?";
pub const DECREMENT_POINTER: &str = "하-";
pub const START_LOOP: &str = "신";
pub const END_LOOP: &str = "킹갓 충무공 제너럴";
pub const INPUT_VALUE: &str = "이국 왤캐 고수임?";
pub const OUTPUT_VALUE: &str = "이국이 처럼 살고싶다.";

/// A single instruction of a program.
///
/// The compound value instructions keep the token text they were lexed
/// from, the magnitude is decoded from it when the instruction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction<'src> {
    /// `이구우…욱`: add the number of `우` to the current cell
    IncrementValue(&'src str),
    /// `이구구…국`: subtract the number of `구` from the current cell
    DecrementValue(&'src str),
    /// `고수?`
    IncrementPointer,
    /// `하-`
    DecrementPointer,
    /// `신`: skip forward if the current cell is zero
    StartLoop,
    /// `킹갓 충무공 제너럴`: jump back if the current cell is non-zero
    EndLoop,
    /// `이국 왤캐 고수임?`: read a line, store its first character
    Input,
    /// `이국이 처럼 살고싶다.`: write the current cell as a character
    Output,
}

impl Instruction<'_> {
    pub fn is_loop_start(&self) -> bool {
        matches!(self, Self::StartLoop)
    }

    pub fn is_loop_end(&self) -> bool {
        matches!(self, Self::EndLoop)
    }
}

impl Display for Instruction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncrementValue(text) | Self::DecrementValue(text) => f.write_str(text),
            Self::IncrementPointer => f.write_str(INCREMENT_POINTER),
            Self::DecrementPointer => f.write_str(DECREMENT_POINTER),
            Self::StartLoop => f.write_str(START_LOOP),
            Self::EndLoop => f.write_str(END_LOOP),
            Self::Input => f.write_str(INPUT_VALUE),
            Self::Output => f.write_str(OUTPUT_VALUE),
        }
    }
}

/// Render a program back to source, one instruction per line.
///
/// Comments are gone at this point, everything else parses back to the
/// same instruction stream.
pub fn format_program(program: &[Instruction]) -> String {
    let mut result = String::new();
    for instr in program {
        // Writing to a String cannot fail
        let _ = writeln!(result, "{instr}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{format_program, Instruction};

    #[test]
    fn test_display() {
        assert_eq!(Instruction::IncrementValue("이구우욱").to_string(), "이구우욱");
        assert_eq!(Instruction::EndLoop.to_string(), "킹갓 충무공 제너럴");
        assert_eq!(
            format_program(&[Instruction::StartLoop, Instruction::Output]),
            "신\n이국이 처럼 살고싶다.\n"
        );
        assert_eq!(format_program(&[]), "");
    }

    #[test]
    fn test_classification() {
        assert!(Instruction::StartLoop.is_loop_start());
        assert!(!Instruction::StartLoop.is_loop_end());
        assert!(Instruction::EndLoop.is_loop_end());
        assert!(!Instruction::DecrementValue("이구구국").is_loop_start());
    }
}
