#![no_std]
//! Fixed-size spectrum analysis for microcontroller audio.
//!
//! I2S bytes -> samples -> zero-filled block -> Hann window -> radix-2 FFT -> magnitudes

extern crate alloc;

mod error;
mod fft;
mod i2s;
mod source;
mod spectrum;
mod window;

pub use error::DspError;
pub use fft::{bit_reverse_permute, fft_in_place, ifft_in_place};
pub use i2s::{decode_left_slot, BlockAssembler, I2S_FRAME_BYTES, I2S_SLOT_BYTES};
pub use source::{fill_block, zero_fill_tail, SampleSource, ToneSource};
pub use spectrum::{bin_frequency, FrameProcessor, Spectrum};
pub use window::HannWindow;
