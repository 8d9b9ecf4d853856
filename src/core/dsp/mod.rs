//! Digital signal processing utilities

pub mod savgol;
pub mod stats;
pub mod stft;

pub use savgol::savgol_smooth;
pub use stft::{Spectrogram, Stft};
