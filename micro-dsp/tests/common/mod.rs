#![allow(dead_code)]

use std::f32::consts::PI;

pub const FFT_SIZE: usize = 256;
pub const SAMPLE_RATE_HZ: f32 = 44_100.0;

/// A block of `len` samples of a sine at `frequency_hz`.
pub fn sine_block(len: usize, frequency_hz: f32, amplitude: f32) -> Vec<i32> {
    (0..len)
        .map(|i| (amplitude * (2.0 * PI * frequency_hz * i as f32 / SAMPLE_RATE_HZ).sin()) as i32)
        .collect()
}

pub fn magnitude(re: f32, im: f32) -> f32 {
    (re * re + im * im).sqrt()
}

pub fn magnitudes(re: &[f32], im: &[f32]) -> Vec<f32> {
    re.iter().zip(im).map(|(&r, &i)| magnitude(r, i)).collect()
}

/// Index of the largest value.
pub fn argmax(values: &[f32]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}

/// Bytes one ESP32 DMA descriptor holds; not a multiple of a stereo frame.
pub const DMA_DESCRIPTOR_BYTES: usize = 4092;

/// Raw stereo I2S stream with `left = first_left + i` and a silent right
/// slot, as a mono microphone with L/R tied low produces it.
pub fn stereo_stream(frames: usize, first_left: i32) -> Vec<u8> {
    (0..frames)
        .flat_map(|i| {
            let mut frame = [0u8; 8];
            frame[..4].copy_from_slice(&(first_left + i as i32).to_le_bytes());
            frame
        })
        .collect()
}

/// Circular DMA receive emulation: bytes only become available one whole
/// descriptor at a time, and a pop returns at most what is available.
pub struct DescriptorStream {
    data: Vec<u8>,
    read: usize,
    available: usize,
}

impl DescriptorStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            read: 0,
            available: 0,
        }
    }

    pub fn pop(&mut self, buf: &mut [u8]) -> usize {
        if self.available == 0 {
            self.available = DMA_DESCRIPTOR_BYTES.min(self.data.len() - self.read);
        }
        let count = buf.len().min(self.available);
        buf[..count].copy_from_slice(&self.data[self.read..self.read + count]);
        self.read += count;
        self.available -= count;
        count
    }
}
