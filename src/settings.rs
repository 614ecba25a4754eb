//! Settings defining how a program is run

use clap::ValueEnum;

/// Number of tape cells when nothing else is requested.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// What to do when a cell is accessed through an out of range pointer.
///
/// Moving the pointer is never checked, only reading or writing the cell
/// it points at.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, ValueEnum)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PointerPolicy {
    /// Abort execution with a tape error
    #[default]
    Error,
    /// Wrap around to the other end of the tape
    Wrap,
}

/// How the output instruction turns a cell into bytes
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, ValueEnum)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum OutputEncoding {
    /// Write the character with the cell value as code point, UTF-8 encoded
    #[default]
    Utf8,
    /// Write the cell value as a single raw byte
    Byte,
}

/// Run time configuration, fixed when a run starts
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Settings {
    /// Number of cells on the tape
    pub tape_size: usize,
    pub pointer_policy: PointerPolicy,
    pub output_encoding: OutputEncoding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            pointer_policy: PointerPolicy::default(),
            output_encoding: OutputEncoding::default(),
        }
    }
}
