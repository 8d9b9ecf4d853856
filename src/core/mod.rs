//! Core analysis pipeline and DSP utilities

pub mod analysis;
pub mod analyzer;
pub mod decoder;
pub mod dsp;

pub use analyzer::{analyze_file, analyze_to_record};
pub use decoder::{decode_audio, AudioData};
