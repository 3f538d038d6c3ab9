//! Sequential decoder and appender for delta-encoded posting pages.
//!
//! Layout: the first identifier as a plain varint at offset 0, then one
//! varint delta per following identifier. The zero-filled tail reads as a
//! zero delta and ends the stream.

use crate::postings::{Postings, PostingsWriter};
use crate::varint::{self, MAX_VARINT_LEN64, VarintError};
use crate::{Error, Result};
use tracing::{debug, trace};

/// Why the last `next()` returned `None`.
///
/// Every variant looks the same to callers of `Iterator::next`; this only
/// separates a clean end from a damaged record for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A zero delta, or a zero first value on an uninitialized page.
    Terminator,
    /// The read position reached the end of the buffer.
    BufferExhausted,
    /// A varint ran past the end of the buffer.
    Truncated,
    /// A varint or a running sum exceeded `u64`.
    Overflow,
}

/// Read/write head over a page buffer.
///
/// A cursor over `&[u8]` only reads; one over `&mut [u8]` (or any owned
/// buffer) can also append.
#[derive(Debug, Clone)]
pub struct PageCursor<B> {
    data: B,
    pos: usize,
    cur: Option<u64>,
    end: Option<EndReason>,
}

impl<B: AsRef<[u8]>> PageCursor<B> {
    pub fn new(data: B) -> Self {
        Self {
            data,
            pos: 0,
            cur: None,
            end: None,
        }
    }

    /// Byte offset of the next record.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end
    }

    pub fn is_exhausted(&self) -> bool {
        self.end.is_some()
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    fn rewind(&mut self) {
        self.pos = 0;
        self.cur = None;
        self.end = None;
    }

    fn finish(&mut self, reason: EndReason) -> Option<u64> {
        if matches!(reason, EndReason::Truncated | EndReason::Overflow) {
            debug!(pos = self.pos, ?reason, "posting page ends on a malformed record");
        }
        self.end = Some(reason);
        None
    }

    fn decode_next(&mut self) -> Option<u64> {
        if self.end.is_some() {
            return None;
        }
        let Some(rest) = self.data.as_ref().get(self.pos..).filter(|r| !r.is_empty()) else {
            return self.finish(EndReason::BufferExhausted);
        };
        let (raw, n) = match varint::uvarint(rest) {
            Ok(decoded) => decoded,
            Err(VarintError::Truncated) => return self.finish(EndReason::Truncated),
            Err(VarintError::Overflow) => return self.finish(EndReason::Overflow),
        };
        if raw == 0 {
            return self.finish(EndReason::Terminator);
        }
        // Position 0 holds the plain first value, everything after is a delta.
        let value = match self.cur {
            None => raw,
            Some(cur) => match cur.checked_add(raw) {
                Some(v) => v,
                None => return self.finish(EndReason::Overflow),
            },
        };
        self.pos += n;
        self.cur = Some(value);
        Some(value)
    }
}

impl<B: AsRef<[u8]>> Iterator for PageCursor<B> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.decode_next()
    }
}

impl<B: AsRef<[u8]>> std::iter::FusedIterator for PageCursor<B> {}

impl<B: AsRef<[u8]>> Postings for PageCursor<B> {
    fn seek(&mut self, target: u64) -> Option<u64> {
        if let Some(cur) = self.cur {
            if target < cur {
                self.rewind();
            } else if target == cur {
                return Some(cur);
            }
        }
        self.find(|&v| v >= target)
    }

    fn current(&self) -> Option<u64> {
        self.cur
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PostingsWriter for PageCursor<B> {
    fn append(&mut self, id: u64) -> Result<()> {
        // Run to the end so `cur` is the last stored id and `pos` the write offset.
        while self.decode_next().is_some() {}

        let last = self.cur.unwrap_or(0);
        if id <= last {
            trace!(last, id, "append rejected: out of order");
            return Err(Error::OutOfOrder { last, id });
        }

        let remaining = self.data.as_ref().len() - self.pos;
        if remaining < MAX_VARINT_LEN64 {
            trace!(remaining, id, "append rejected: page full");
            return Err(Error::PageFull { remaining });
        }

        let Some(n) = varint::put_uvarint(&mut self.data.as_mut()[self.pos..], id - last) else {
            unreachable!("varint must fit after the page-full check");
        };
        self.pos += n;
        self.cur = Some(id);
        self.end = None;
        trace!(id, pos = self.pos, "appended posting");
        Ok(())
    }
}
