use tracing::{debug, trace};

/// Size-capped buffer assembling a streamed response body.
///
/// The accumulator keeps at most `max` bytes but keeps counting past the
/// cap: `logical_len` is the exact sum of every chunk ever offered, so a
/// caller can report "received but truncated" separately from "nothing
/// received". Exactly one fetch feeds an accumulator at a time, enforced by
/// the `&mut` borrow on `offer`.
#[derive(Debug)]
pub struct ResponseAccumulator {
    buf: Vec<u8>,
    max: usize,
    logical_len: usize,
}

impl ResponseAccumulator {
    /// Create an empty accumulator that stores at most `max` bytes.
    /// No allocation happens until the first chunk arrives.
    pub fn new(max: usize) -> Self {
        Self {
            buf: Vec::new(),
            max,
            logical_len: 0,
        }
    }

    /// Append a chunk, truncated so that stored bytes never exceed the cap.
    ///
    /// Once the cap is reached further bytes are counted but discarded; the
    /// logical length always advances by the full chunk length.
    pub fn offer(&mut self, chunk: &[u8]) {
        self.logical_len += chunk.len();

        if self.buf.len() >= self.max {
            trace!(
                target = "jsonfetch::accumulator",
                dropped = chunk.len(),
                logical_len = self.logical_len,
                "cap reached, counting only"
            );
            return;
        }

        let room = self.max - self.buf.len();
        let take = chunk.len().min(room);
        self.buf.extend_from_slice(&chunk[..take]);

        trace!(
            target = "jsonfetch::accumulator",
            offered = chunk.len(),
            kept = take,
            stored_len = self.buf.len(),
            logical_len = self.logical_len,
            "chunk offered"
        );
    }

    /// Free the buffer and reset both counters. Safe to call when already
    /// empty; the accumulator afterwards behaves like a fresh one.
    pub fn release(&mut self) {
        if !self.buf.is_empty() {
            debug!(
                target = "jsonfetch::accumulator",
                stored_len = self.buf.len(),
                logical_len = self.logical_len,
                "releasing accumulated body"
            );
        }
        self.buf = Vec::new();
        self.logical_len = 0;
    }

    /// The stored (possibly truncated) body bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes actually kept, bounded by the cap.
    pub fn stored_len(&self) -> usize {
        self.buf.len()
    }

    /// Total bytes ever offered, unbounded. Diagnostic only.
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True when bytes were offered past the cap and discarded.
    pub fn is_truncated(&self) -> bool {
        self.logical_len > self.buf.len()
    }
}
