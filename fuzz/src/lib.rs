//! Fuzzing helper types

use iguk::settings::Settings;

/// Source code together with what to feed the input instruction.
#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputSrc {
    pub code: String,
    pub input: Vec<u8>,
    pub settings: Settings,
}
