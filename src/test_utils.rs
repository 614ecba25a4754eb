use std::io::BufRead;

use crate::{
    ast::Instruction, settings::Settings, tape::VecTape, ExecuteCallbackResult, ExecutionError,
    RunState, TapeAddr,
};

/// Instructions executed before a test run is aborted.
pub const STEP_LIMIT: usize = 500000;

#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: VecTape,
    pub tape_ptr: TapeAddr,
    pub pc: usize,
    pub output: Vec<u8>,
}

pub fn test_execute(
    program: &[Instruction],
    settings: &Settings,
    input: &mut impl BufRead,
) -> ExecutionState {
    let mut instr_count = 0;
    let mut state = RunState::from_settings(program, settings);
    let mut output = Vec::new();
    let result = crate::execute(&mut state, input, &mut output, &mut |_, _, _| {
        instr_count += 1;
        if instr_count > STEP_LIMIT {
            ExecuteCallbackResult::Abort
        } else {
            ExecuteCallbackResult::Continue
        }
    });

    ExecutionState {
        result: Some(result),
        tape: state.tape().clone(),
        tape_ptr: state.tape_ptr(),
        pc: state.pc(),
        output,
    }
}
