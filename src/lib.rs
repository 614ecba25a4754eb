//! # iguk - An interpreter for the iGuk esoteric language
//!
//! iGuk is a Brainfuck relative where every instruction is a Korean phrase
//! instead of a single symbol.
//!
//! **NOTE! This is a command line program first. The library API is not
//! stable.**

// Re-export some symbols.
pub use ast::format_program;
pub use ast::Instruction;
pub use interpreter::execute;
pub use interpreter::ExecuteCallbackData;
pub use interpreter::ExecuteCallbackResult;
pub use interpreter::ExecutionError;
pub use interpreter::RunState;
pub use parser::parse_source;
pub use parser::ParseError;
pub use types::CellValue;
pub use types::TapeAddr;
pub use types::TapeAddrError;

pub mod ast;
mod interpreter;
mod parser;
pub mod semantics;
pub mod settings;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
