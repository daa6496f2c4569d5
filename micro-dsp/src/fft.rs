//! In-place iterative radix-2 decimation-in-time FFT.
//!
//! The real and imaginary parts live in two parallel slices so the windowing
//! stage can write straight into them without packing complex values.

use core::f32::consts::PI;

use libm::{cosf, sinf};

use crate::error::{ensure_len, DspError};

/// Validates the radix-2 preconditions shared by the forward and inverse
/// transforms.
fn check_buffers(re: &[f32], im: &[f32]) -> Result<usize, DspError> {
    let n = re.len();
    ensure_len(n, im.len())?;
    if !n.is_power_of_two() {
        return Err(DspError::NotPowerOfTwo(n));
    }
    Ok(n)
}

/// Reorders both slices so element `i` lands at the bit-reversed index of `i`.
///
/// The reversed index is carried along incrementally instead of being
/// recomputed per element. Each pair is swapped once, when `i < j`.
/// Both slices must have the same power-of-two length.
pub fn bit_reverse_permute(re: &mut [f32], im: &mut [f32]) {
    let n = re.len();
    let mut j = 0usize;
    for i in 0..n {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        let mut m = n >> 1;
        while m >= 1 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

/// Forward FFT over `re`/`im` in place.
///
/// Both slices must have the same length and that length must be a power of
/// two; anything else is rejected rather than truncated. A length of one is
/// the identity transform.
pub fn fft_in_place(re: &mut [f32], im: &mut [f32]) -> Result<(), DspError> {
    let n = check_buffers(re, im)?;

    bit_reverse_permute(re, im);

    let mut m = 2;
    while m <= n {
        let half = m >> 1;
        let theta = -2.0 * PI / m as f32;
        // Per-stage rotation step. The twiddle is advanced by complex
        // multiplication so trig is evaluated once per stage.
        let (step_re, step_im) = (cosf(theta), sinf(theta));

        for group in (0..n).step_by(m) {
            let mut w_re = 1.0f32;
            let mut w_im = 0.0f32;
            for k in 0..half {
                let top = group + k;
                let bottom = top + half;

                let t_re = w_re * re[bottom] - w_im * im[bottom];
                let t_im = w_re * im[bottom] + w_im * re[bottom];

                re[bottom] = re[top] - t_re;
                im[bottom] = im[top] - t_im;
                re[top] += t_re;
                im[top] += t_im;

                let prev_re = w_re;
                w_re = prev_re * step_re - w_im * step_im;
                w_im = prev_re * step_im + w_im * step_re;
            }
        }
        m <<= 1;
    }

    Ok(())
}

/// Inverse FFT in place: conjugate, run the forward transform, conjugate
/// again and scale by `1/N`.
pub fn ifft_in_place(re: &mut [f32], im: &mut [f32]) -> Result<(), DspError> {
    let n = check_buffers(re, im)?;

    im.iter_mut().for_each(|v| *v = -*v);
    fft_in_place(re, im)?;

    let scale = 1.0 / n as f32;
    for (r, i) in re.iter_mut().zip(im.iter_mut()) {
        *r *= scale;
        *i = -*i * scale;
    }
    Ok(())
}
