use core::convert::Infallible;
use core::f32::consts::PI;

#[cfg(feature = "logging")]
use defmt::warn;
use libm::sinf;

/// A blocking producer of signed 32-bit mono samples.
pub trait SampleSource {
    type Error;

    /// Reads up to `block.len()` samples into the front of `block` and
    /// returns how many were written. May block for at most one frame period.
    fn read(&mut self, block: &mut [i32]) -> Result<usize, Self::Error>;
}

/// Zeroes everything in `block` from index `count` onwards.
pub fn zero_fill_tail(block: &mut [i32], count: usize) {
    let start = count.min(block.len());
    block[start..].fill(0);
}

/// Reads one block from `source`, zero-filling whatever the source did not
/// deliver. Returns the number of real samples.
///
/// A short read is not an error: it only lowers the spectral accuracy of this
/// one frame. A failed read yields a block of silence and is not retried.
pub fn fill_block<S: SampleSource>(source: &mut S, block: &mut [i32]) -> usize {
    match source.read(block) {
        Ok(count) => {
            let count = count.min(block.len());
            zero_fill_tail(block, count);
            count
        }
        Err(_) => {
            #[cfg(feature = "logging")]
            warn!("Sample source read failed, substituting silence");
            block.fill(0);
            0
        }
    }
}

/// Synthetic sine microphone for headless runs.
///
/// The phase carries over between reads so consecutive blocks form one
/// continuous tone.
pub struct ToneSource {
    frequency_hz: f32,
    amplitude: f32,
    sample_rate_hz: f32,
    phase: f32,
    read_limit: Option<usize>,
}

impl ToneSource {
    pub fn new(frequency_hz: f32, amplitude: i32, sample_rate_hz: f32) -> Self {
        Self {
            frequency_hz,
            amplitude: amplitude as f32,
            sample_rate_hz,
            phase: 0.0,
            read_limit: None,
        }
    }

    /// Caps every read at `limit` samples to emulate a starved DMA queue.
    pub fn with_read_limit(mut self, limit: usize) -> Self {
        self.read_limit = Some(limit);
        self
    }

    pub fn frequency_hz(&self) -> f32 {
        self.frequency_hz
    }

    pub fn set_frequency_hz(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz;
    }
}

impl SampleSource for ToneSource {
    type Error = Infallible;

    fn read(&mut self, block: &mut [i32]) -> Result<usize, Self::Error> {
        let count = self.read_limit.map_or(block.len(), |limit| limit.min(block.len()));
        let step = 2.0 * PI * self.frequency_hz / self.sample_rate_hz;
        for sample in &mut block[..count] {
            *sample = (self.amplitude * sinf(self.phase)) as i32;
            self.phase += step;
            if self.phase >= 2.0 * PI {
                self.phase -= 2.0 * PI;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl SampleSource for Failing {
        type Error = ();

        fn read(&mut self, block: &mut [i32]) -> Result<usize, ()> {
            block[0] = 42;
            Err(())
        }
    }

    struct Overreporting;

    impl SampleSource for Overreporting {
        type Error = ();

        fn read(&mut self, block: &mut [i32]) -> Result<usize, ()> {
            block.fill(5);
            Ok(block.len() + 10)
        }
    }

    #[test]
    fn test_zero_fill_tail() {
        let mut block = [7i32; 6];
        zero_fill_tail(&mut block, 4);
        assert_eq!(block, [7, 7, 7, 7, 0, 0]);
        zero_fill_tail(&mut block, 99);
        assert_eq!(block, [7, 7, 7, 7, 0, 0]);
    }

    #[test]
    fn test_short_read_is_zero_filled() {
        let mut source = ToneSource::new(1_000.0, 1 << 20, 44_100.0).with_read_limit(3);
        let mut block = [i32::MAX; 8];
        let count = fill_block(&mut source, &mut block);
        assert_eq!(count, 3);
        assert!(block[3..].iter().all(|&s| s == 0));
        assert_ne!(block[1], 0);
    }

    #[test]
    fn test_failed_read_is_silence() {
        let mut block = [9i32; 4];
        assert_eq!(fill_block(&mut Failing, &mut block), 0);
        assert_eq!(block, [0; 4]);
    }

    #[test]
    fn test_count_is_capped_to_block() {
        let mut block = [0i32; 4];
        assert_eq!(fill_block(&mut Overreporting, &mut block), 4);
        assert_eq!(block, [5; 4]);
    }

    #[test]
    fn test_tone_is_continuous_across_reads() {
        let mut joined = ToneSource::new(440.0, 1 << 24, 8_000.0);
        let mut split = ToneSource::new(440.0, 1 << 24, 8_000.0);

        let mut whole = [0i32; 16];
        joined.read(&mut whole).unwrap();

        let mut first = [0i32; 8];
        let mut second = [0i32; 8];
        split.read(&mut first).unwrap();
        split.read(&mut second).unwrap();

        assert_eq!(&whole[..8], &first);
        assert_eq!(&whole[8..], &second);
    }
}
