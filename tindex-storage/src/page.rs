use crate::cursor::PageCursor;
use crate::postings::{PostingPage, PostingsWriter};
use crate::varint::{self, MAX_VARINT_LEN64};
use crate::{Error, PAGE_SIZE, Result};
use std::fmt;
use tracing::debug;

/// A fixed-capacity page holding one delta-encoded posting list.
///
/// The page only owns the bytes; all interpretation goes through
/// [`PageCursor`].
#[derive(Clone, PartialEq, Eq)]
pub struct DeltaPage {
    buf: Box<[u8]>,
}

impl DeltaPage {
    /// A zeroed page of [`PAGE_SIZE`] bytes.
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; PAGE_SIZE].into_boxed_slice(),
        }
    }

    /// Wraps an existing buffer, e.g. one read back from disk.
    pub fn from_bytes(buf: impl Into<Box<[u8]>>) -> Result<Self> {
        let buf = buf.into();
        if buf.len() < MAX_VARINT_LEN64 {
            return Err(Error::UnsupportedPageSize(buf.len()));
        }
        Ok(Self { buf })
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Clears the page and stores `first` as its plain leading value.
    ///
    /// Calling this on a page that already holds postings discards them.
    pub fn init(&mut self, first: u64) -> Result<()> {
        if first == 0 {
            return Err(Error::ZeroId);
        }
        if !self.is_empty() {
            debug!(
                capacity = self.capacity(),
                first, "re-initializing posting page, existing postings discarded"
            );
        }
        self.buf.fill(0);
        if varint::put_uvarint(&mut self.buf, first).is_none() {
            unreachable!("page capacity is at least one varint");
        }
        Ok(())
    }

    pub fn cursor(&self) -> PageCursor<&[u8]> {
        PageCursor::new(&self.buf[..])
    }

    pub fn cursor_mut(&mut self) -> PageCursor<&mut [u8]> {
        PageCursor::new(&mut self.buf[..])
    }

    /// Shorthand for appending through a fresh write cursor.
    pub fn append(&mut self, id: u64) -> Result<()> {
        self.cursor_mut().append(id)
    }

    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Box<[u8]> {
        self.buf
    }

    pub fn first(&self) -> Option<u64> {
        self.cursor().next()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// Bytes occupied by readable records.
    pub fn used_bytes(&self) -> usize {
        let mut cursor = self.cursor();
        cursor.by_ref().for_each(drop);
        cursor.position()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.used_bytes()
    }

    /// True once no further identifier can be appended.
    pub fn is_full(&self) -> bool {
        self.remaining() < MAX_VARINT_LEN64
    }
}

impl Default for DeltaPage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeltaPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaPage")
            .field("capacity", &self.capacity())
            .field("used_bytes", &self.used_bytes())
            .field("first", &self.first())
            .finish()
    }
}

impl PostingPage for DeltaPage {
    type Cursor<'a>
        = PageCursor<&'a [u8]>
    where
        Self: 'a;

    type CursorMut<'a>
        = PageCursor<&'a mut [u8]>
    where
        Self: 'a;

    fn init(&mut self, first: u64) -> Result<()> {
        DeltaPage::init(self, first)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        DeltaPage::cursor(self)
    }

    fn cursor_mut(&mut self) -> Self::CursorMut<'_> {
        DeltaPage::cursor_mut(self)
    }

    fn data(&self) -> &[u8] {
        DeltaPage::data(self)
    }
}
