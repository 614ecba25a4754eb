use logos::Logos;
use thiserror::Error;

use crate::ast::Instruction;

/// Tokens in source file
///
/// This is kept private so the [`Logos`] implementation doesn't leak.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Token<'src> {
    #[regex("이구우+욱", |lex| lex.slice())]
    IncrementValue(&'src str),
    #[regex("이구구+국", |lex| lex.slice())]
    DecrementValue(&'src str),
    #[token("고수?")]
    IncrementPointer,
    #[token("하-")]
    DecrementPointer,
    #[token("신")]
    StartLoop,
    #[token("킹갓 충무공 제너럴")]
    EndLoop,
    #[token("이국 왤캐 고수임?")]
    Input,
    #[token("이국이 처럼 살고싶다.")]
    Output,
    /// Runs to end of line, the line break itself is whitespace
    #[regex("//[^\n]*")]
    Comment,
}

/// Errors during parsing
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Source text that is not part of any token.
    #[error("Unrecognised input {text:?} at line {line}, column {column}")]
    UnrecognizedInput {
        /// 1-based line number
        line: usize,
        /// 1-based column, counted in characters
        column: usize,
        text: String,
    },
    /// Nothing but comments and whitespace.
    #[error("Program contains no instructions")]
    EmptyProgram,
}

/// Compute 1-based line and column (in characters) of a byte offset.
fn location(source_code: &str, offset: usize) -> (usize, usize) {
    let before = &source_code[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Parses source code, producing a stream of tokens (comments included).
fn lexer(source_code: &str) -> impl Iterator<Item = Result<Token<'_>, ParseError>> + '_ {
    let mut lex = Token::lexer(source_code);
    std::iter::from_fn(move || {
        let token = lex.next()?;
        Some(token.map_err(|_| {
            let span = lex.span();
            let (line, column) = location(source_code, span.start);
            ParseError::UnrecognizedInput {
                line,
                column,
                text: lex.slice().to_owned(),
            }
        }))
    })
}

impl<'src> Token<'src> {
    /// Convert to an instruction, `None` for comments.
    fn instruction(self) -> Option<Instruction<'src>> {
        match self {
            Token::IncrementValue(text) => Some(Instruction::IncrementValue(text)),
            Token::DecrementValue(text) => Some(Instruction::DecrementValue(text)),
            Token::IncrementPointer => Some(Instruction::IncrementPointer),
            Token::DecrementPointer => Some(Instruction::DecrementPointer),
            Token::StartLoop => Some(Instruction::StartLoop),
            Token::EndLoop => Some(Instruction::EndLoop),
            Token::Input => Some(Instruction::Input),
            Token::Output => Some(Instruction::Output),
            Token::Comment => None,
        }
    }
}

/// Parse source code into a program
///
/// The whole source is tokenised before anything is returned, a single
/// unrecognised character rejects the program.
pub fn parse_source(source_code: &str) -> Result<Vec<Instruction<'_>>, ParseError> {
    let mut program = vec![];
    for token in lexer(source_code) {
        if let Some(instr) = token?.instruction() {
            program.push(instr);
        }
    }
    if program.is_empty() {
        return Err(ParseError::EmptyProgram);
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::{parse_source, ParseError};
    use crate::ast::{format_program, Instruction};

    #[test]
    fn simple_parse() {
        assert_eq!(
            parse_source("이구우욱 고수? 하- 신 킹갓 충무공 제너럴 이국 왤캐 고수임? 이국이 처럼 살고싶다. 이구구국"),
            Ok(vec![
                Instruction::IncrementValue("이구우욱"),
                Instruction::IncrementPointer,
                Instruction::DecrementPointer,
                Instruction::StartLoop,
                Instruction::EndLoop,
                Instruction::Input,
                Instruction::Output,
                Instruction::DecrementValue("이구구국"),
            ])
        );
        // No whitespace needed between tokens
        assert_eq!(
            parse_source("이구우우우욱신하-"),
            Ok(vec![
                Instruction::IncrementValue("이구우우우욱"),
                Instruction::StartLoop,
                Instruction::DecrementPointer,
            ])
        );
    }

    #[test]
    fn comments_are_dropped() {
        let src = "// 주석\n이구우욱 // 이구구국\n//마지막";
        assert_eq!(parse_source(src), Ok(vec![Instruction::IncrementValue("이구우욱")]));
    }

    #[test]
    fn unrecognised_input() {
        assert_eq!(
            parse_source("이구우욱\n  신 x"),
            Err(ParseError::UnrecognizedInput {
                line: 2,
                column: 5,
                text: "x".into()
            })
        );
        // Mixed operator glyphs don't form a token
        assert!(matches!(
            parse_source("이구우구욱"),
            Err(ParseError::UnrecognizedInput { line: 1, column: 1, .. })
        ));
        // Prefix without any operator glyph
        assert!(matches!(
            parse_source("이구욱"),
            Err(ParseError::UnrecognizedInput { .. })
        ));
    }

    #[test]
    fn output_needs_trailing_full_stop() {
        assert!(matches!(
            parse_source("이국이 처럼 살고싶다!"),
            Err(ParseError::UnrecognizedInput { line: 1, column: 1, .. })
        ));
        assert!(matches!(
            parse_source("신\n이국이 처럼 살고싶다?"),
            Err(ParseError::UnrecognizedInput { line: 2, column: 1, .. })
        ));
        assert_eq!(parse_source("이국이 처럼 살고싶다."), Ok(vec![Instruction::Output]));
    }

    #[test]
    fn empty_program() {
        assert_eq!(parse_source(""), Err(ParseError::EmptyProgram));
        assert_eq!(parse_source("  \n\t"), Err(ParseError::EmptyProgram));
        assert_eq!(parse_source("// 아무것도 없음\n"), Err(ParseError::EmptyProgram));
    }

    #[test]
    fn format_round_trip() {
        let src = "신 이구우우욱 고수? // 설명\n이구구구구국 하-\n킹갓 충무공 제너럴 이국이 처럼 살고싶다.";
        let program = parse_source(src).unwrap();
        let formatted = format_program(&program);
        assert_eq!(parse_source(&formatted), Ok(program));
    }
}
