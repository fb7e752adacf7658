/// Linear feedback storage for one offline delay pass.
///
/// Unlike a circular delay line, the buffer holds one cell per input sample
/// and every cell is written exactly once, in ascending order. Reads never see
/// a cell at or past the write cursor: those return silence.
pub struct FeedbackBuffer {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl FeedbackBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0.0; len],
            write_pos: 0,
        }
    }

    /// Index of the next cell to be written.
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Read the cell `offset` samples behind the write cursor.
    ///
    /// Returns 0.0 when the position falls before the start of the buffer.
    #[inline]
    pub fn read_behind(&self, offset: usize) -> f32 {
        match self.write_pos.checked_sub(offset) {
            Some(pos) => self.read_at(pos),
            None => 0.0,
        }
    }

    /// Read an absolute position clamped into `[0, len - 1]`.
    ///
    /// Negative positions hold on the first cell. A clamped position at or
    /// past the write cursor (not written yet) reads as silence.
    #[inline]
    pub fn read_clamped(&self, pos: i64) -> f32 {
        let last = self.buffer.len().saturating_sub(1) as i64;
        self.read_at(pos.clamp(0, last) as usize)
    }

    #[inline]
    fn read_at(&self, pos: usize) -> f32 {
        if pos >= self.write_pos {
            return 0.0;
        }
        self.buffer.get(pos).copied().unwrap_or(0.0)
    }

    /// Write the next cell and advance the cursor.
    ///
    /// Writes past the end of the buffer are dropped.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        if let Some(cell) = self.buffer.get_mut(self.write_pos) {
            *cell = sample;
        }
        self.write_pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_silent() {
        let buffer = FeedbackBuffer::new(16);
        assert_eq!(buffer.write_pos(), 0);
        assert_eq!(buffer.read_clamped(-3), 0.0);
        assert_eq!(buffer.read_behind(0), 0.0);
        assert_eq!(buffer.read_clamped(5), 0.0);
    }

    #[test]
    fn test_read_behind_returns_written_value() {
        let mut buffer = FeedbackBuffer::new(16);
        for i in 0..5 {
            buffer.push(i as f32);
        }
        // write_pos = 5; 3 behind = cell 2
        assert_eq!(buffer.read_behind(3), 2.0);
        assert_eq!(buffer.read_behind(5), 0.0);
    }

    #[test]
    fn test_read_before_start_is_silent() {
        let mut buffer = FeedbackBuffer::new(16);
        buffer.push(1.0);
        assert_eq!(buffer.read_behind(4), 0.0);
    }

    #[test]
    fn test_never_reads_ahead_of_cursor() {
        let mut buffer = FeedbackBuffer::new(8);
        buffer.push(0.5);
        buffer.push(0.25);
        assert_eq!(buffer.read_behind(0), 0.0);
        assert_eq!(buffer.read_clamped(2), 0.0);
        assert_eq!(buffer.read_clamped(100), 0.0);
    }

    #[test]
    fn test_read_clamped_negative_holds_first_cell() {
        let mut buffer = FeedbackBuffer::new(8);
        buffer.push(0.75);
        buffer.push(0.1);
        assert_eq!(buffer.read_clamped(-20), 0.75);
        assert_eq!(buffer.read_clamped(0), 0.75);
        assert_eq!(buffer.read_clamped(1), 0.1);
    }

    #[test]
    fn test_read_clamped_caps_at_last_cell() {
        let mut buffer = FeedbackBuffer::new(3);
        for s in [0.1, 0.2, 0.3] {
            buffer.push(s);
        }
        assert_eq!(buffer.read_clamped(2), 0.3);
        assert_eq!(buffer.read_clamped(50), 0.3);
    }

    #[test]
    fn test_push_past_end_is_dropped() {
        let mut buffer = FeedbackBuffer::new(1);
        buffer.push(0.5);
        buffer.push(0.9);
        assert_eq!(buffer.write_pos(), 2);
        assert_eq!(buffer.read_behind(2), 0.5);
        assert_eq!(buffer.read_behind(1), 0.0);
    }
}
