use core::fmt;

/// Errors raised by the transform and windowing stages when buffer
/// lengths break the radix-2 preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum DspError {
    /// Two buffers that must be the same length are not.
    LengthMismatch { expected: usize, actual: usize },
    /// The transform length is zero or not a power of two.
    NotPowerOfTwo(usize),
    /// A sample downscale of this many bits would shift a 32-bit word out
    /// entirely.
    ShiftTooLarge(u32),
}

impl fmt::Display for DspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DspError::LengthMismatch { expected, actual } => {
                write!(f, "buffer length mismatch: expected {}, got {}", expected, actual)
            }
            DspError::NotPowerOfTwo(len) => {
                write!(f, "transform length {} is not a power of two", len)
            }
            DspError::ShiftTooLarge(shift) => {
                write!(f, "cannot shift a 32-bit sample right by {} bits", shift)
            }
        }
    }
}

/// Checks that `actual` equals `expected`.
pub(crate) fn ensure_len(expected: usize, actual: usize) -> Result<(), DspError> {
    if expected != actual {
        return Err(DspError::LengthMismatch { expected, actual });
    }
    Ok(())
}
