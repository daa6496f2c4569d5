/// Bytes in one 32-bit I2S slot.
pub const I2S_SLOT_BYTES: usize = 4;
/// Bytes in one stereo I2S frame (left slot, then right slot).
pub const I2S_FRAME_BYTES: usize = 2 * I2S_SLOT_BYTES;

fn left_slot(frame: &[u8]) -> i32 {
    i32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]])
}

/// Decodes little-endian 32-bit stereo I2S frames into `out`, keeping only
/// the left slot where a mono microphone with L/R tied low transmits.
///
/// Returns the number of samples written. A trailing partial frame is
/// dropped; use [`BlockAssembler`] when `raw` is an arbitrary slice of a
/// continuous stream.
pub fn decode_left_slot(raw: &[u8], out: &mut [i32]) -> usize {
    let mut written = 0;
    for (frame, sample) in raw.chunks_exact(I2S_FRAME_BYTES).zip(out.iter_mut()) {
        *sample = left_slot(frame);
        written += 1;
    }
    written
}

/// Builds sample blocks out of a raw stereo I2S byte stream that arrives in
/// chunks of any length.
///
/// DMA descriptors do not end on frame boundaries, so a chunk may stop in
/// the middle of a frame. The unfinished frame is kept and completed by the
/// next chunk, which keeps every later frame on the left slot. The carried
/// bytes also survive [`BlockAssembler::finish`], since they belong to the
/// first sample of the next block.
#[derive(Debug, Default)]
pub struct BlockAssembler {
    pending: [u8; I2S_FRAME_BYTES],
    pending_len: usize,
    filled: usize,
}

impl BlockAssembler {
    pub const fn new() -> Self {
        Self {
            pending: [0; I2S_FRAME_BYTES],
            pending_len: 0,
            filled: 0,
        }
    }

    /// Samples written into the current block so far.
    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self, block: &[i32]) -> bool {
        self.filled >= block.len()
    }

    /// Raw bytes that complete `block` exactly, counting the carried
    /// partial frame.
    pub fn bytes_wanted(&self, block: &[i32]) -> usize {
        (block.len().saturating_sub(self.filled) * I2S_FRAME_BYTES).saturating_sub(self.pending_len)
    }

    /// Decodes as much of `raw` as fits into `block` and returns the number
    /// of bytes consumed. Bytes are only left unconsumed once the block is
    /// full.
    pub fn push(&mut self, raw: &[u8], block: &mut [i32]) -> usize {
        if self.is_full(block) {
            return 0;
        }
        let mut rest = raw;

        if self.pending_len > 0 {
            let take = (I2S_FRAME_BYTES - self.pending_len).min(rest.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];
            if self.pending_len < I2S_FRAME_BYTES {
                return raw.len() - rest.len();
            }
            block[self.filled] = left_slot(&self.pending);
            self.filled += 1;
            self.pending_len = 0;
        }

        let frames = (rest.len() / I2S_FRAME_BYTES).min(block.len() - self.filled);
        let whole = frames * I2S_FRAME_BYTES;
        self.filled += decode_left_slot(&rest[..whole], &mut block[self.filled..]);
        rest = &rest[whole..];

        if !self.is_full(block) {
            // less than one frame left
            self.pending[..rest.len()].copy_from_slice(rest);
            self.pending_len = rest.len();
            rest = &[];
        }
        raw.len() - rest.len()
    }

    /// Zero-fills whatever the current block is missing and starts the next
    /// one. Returns the number of real samples in the finished block.
    pub fn finish(&mut self, block: &mut [i32]) -> usize {
        let filled = self.filled.min(block.len());
        crate::zero_fill_tail(block, filled);
        self.filled = 0;
        filled
    }
}
