use alloc::vec::Vec;
use core::f32::consts::PI;

use libm::cosf;

use crate::error::{ensure_len, DspError};
use crate::spectrum::Spectrum;

/// Precomputed Hann window.
///
/// The coefficients are computed once at construction and never change, so
/// the per-frame path only multiplies.
pub struct HannWindow {
    coefficients: Vec<f32>,
}

impl HannWindow {
    /// Builds `w[i] = 0.5 * (1 - cos(2πi / (size - 1)))` for `i in 0..size`.
    ///
    /// A single-point window is `[1.0]`.
    pub fn new(size: usize) -> Self {
        let coefficients = if size == 1 {
            alloc::vec![1.0]
        } else {
            let denominator = (size - 1) as f32;
            (0..size)
                .map(|i| 0.5 * (1.0 - cosf(2.0 * PI * i as f32 / denominator)))
                .collect()
        };
        Self { coefficients }
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Writes the windowed block into `spectrum`.
    ///
    /// Every sample is arithmetically shifted right by `shift` bits before it
    /// is converted and weighted, which keeps 32-bit microphone words well
    /// inside the range the transform handles without loss. The imaginary
    /// half is zeroed.
    pub fn apply(
        &self,
        samples: &[i32],
        shift: u32,
        spectrum: &mut Spectrum,
    ) -> Result<(), DspError> {
        if shift >= i32::BITS {
            return Err(DspError::ShiftTooLarge(shift));
        }
        ensure_len(self.len(), samples.len())?;
        ensure_len(self.len(), spectrum.len())?;

        let (re, im) = spectrum.parts_mut();
        for ((out, &sample), &weight) in re.iter_mut().zip(samples).zip(&self.coefficients) {
            *out = (sample >> shift) as f32 * weight;
        }
        im.fill(0.0);
        Ok(())
    }
}
