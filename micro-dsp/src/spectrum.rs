use alloc::{vec, vec::Vec};

use libm::sqrtf;

use crate::error::{ensure_len, DspError};
use crate::fft::fft_in_place;
use crate::window::HannWindow;

/// Real and imaginary halves of a transform buffer.
///
/// Holds the windowed signal before [`Spectrum::transform`] and the complex
/// bins afterwards.
pub struct Spectrum {
    re: Vec<f32>,
    im: Vec<f32>,
}

impl Spectrum {
    pub fn new(size: usize) -> Self {
        Self {
            re: vec![0.0; size],
            im: vec![0.0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn re(&self) -> &[f32] {
        &self.re
    }

    pub fn im(&self) -> &[f32] {
        &self.im
    }

    pub fn parts_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.re, &mut self.im)
    }

    /// Runs the forward FFT over the buffer in place.
    pub fn transform(&mut self) -> Result<(), DspError> {
        fft_in_place(&mut self.re, &mut self.im)
    }

    /// Euclidean norm of bin `k`.
    pub fn magnitude(&self, k: usize) -> f32 {
        let (re, im) = (self.re[k], self.im[k]);
        sqrtf(re * re + im * im)
    }

    /// Fills `magnitudes` with the norms of the first `N/2` bins, the ones
    /// that carry independent information for a real input.
    pub fn compute_magnitudes(&self, magnitudes: &mut [f32]) -> Result<(), DspError> {
        ensure_len(self.len() / 2, magnitudes.len())?;
        for (k, out) in magnitudes.iter_mut().enumerate() {
            *out = self.magnitude(k);
        }
        Ok(())
    }
}

/// Center frequency of bin `bin` for a transform of `size` points.
pub fn bin_frequency(bin: usize, size: usize, sample_rate_hz: f32) -> f32 {
    bin as f32 * sample_rate_hz / size as f32
}

/// Owns the per-frame DSP buffers: window, transform buffer and magnitudes.
///
/// All buffers are allocated once in [`FrameProcessor::new`] and reused for
/// every frame.
pub struct FrameProcessor {
    window: HannWindow,
    spectrum: Spectrum,
    magnitudes: Vec<f32>,
    shift: u32,
}

impl FrameProcessor {
    /// Fails with [`DspError::NotPowerOfTwo`] unless `size` is a power of two
    /// and with [`DspError::ShiftTooLarge`] unless `shift` is below 32.
    pub fn new(size: usize, shift: u32) -> Result<Self, DspError> {
        if !size.is_power_of_two() {
            return Err(DspError::NotPowerOfTwo(size));
        }
        if shift >= i32::BITS {
            return Err(DspError::ShiftTooLarge(shift));
        }
        Ok(Self {
            window: HannWindow::new(size),
            spectrum: Spectrum::new(size),
            magnitudes: vec![0.0; size / 2],
            shift,
        })
    }

    /// Window, transform and take magnitudes of one block of samples.
    pub fn process(&mut self, samples: &[i32]) -> Result<&[f32], DspError> {
        // Step 1: Shift and apply Hann window
        self.window.apply(samples, self.shift, &mut self.spectrum)?;

        // Step 2: Compute FFT
        self.spectrum.transform()?;

        // Step 3: Compute magnitude spectrum
        self.spectrum.compute_magnitudes(&mut self.magnitudes)?;

        Ok(&self.magnitudes)
    }
}
