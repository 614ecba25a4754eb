#![no_main]

use iguk::execute;
use iguk::parse_source;
use iguk::settings::Settings;
use iguk::ExecuteCallbackResult;
use iguk::ExecutionError;
use iguk::RunState;
use iguk_fuzz::FuzzInputSrc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzInputSrc| {
    let Ok(program) = parse_source(&data.code) else {
        return;
    };
    let settings = Settings {
        // Keep allocations reasonable
        tape_size: data.settings.tape_size % 65536,
        ..data.settings
    };
    let mut input = data.input.as_slice();

    let mut instr_count = 0;
    let mut state = RunState::from_settings(&program, &settings);
    let mut output: Vec<u8> = Vec::new();
    let exec_result = execute(&mut state, &mut input, &mut output, &mut |cb_data, _, _| {
        assert_eq!(Some(cb_data.instruction), program.get(cb_data.pc).copied());
        instr_count += 1;
        if instr_count > 500 {
            ExecuteCallbackResult::Abort
        } else {
            ExecuteCallbackResult::Continue
        }
    });
    match exec_result {
        Ok(_) => assert!(state.is_finished()),
        Err(err) => match err {
            ExecutionError::TapeError(_) => (),
            ExecutionError::IoError(_) => (),
            ExecutionError::Aborted => (),
        },
    }
});
