use crate::Result;

/// A forward-only view over one posting list.
///
/// `Iterator::next` yields identifiers in strictly increasing order and
/// returns `None` once the readable records are exhausted. The sequence is
/// finite and not restartable in place; `seek` to an earlier target rescans.
pub trait Postings: Iterator<Item = u64> {
    /// Advances to the first stored identifier `>= target`.
    ///
    /// This is a lower-bound search: the caller compares the returned value
    /// against `target` to tell a match from a miss.
    fn seek(&mut self, target: u64) -> Option<u64>;

    /// The identifier most recently yielded or appended.
    fn current(&self) -> Option<u64>;
}

/// A posting list cursor that can also write at the logical end.
pub trait PostingsWriter: Postings {
    /// Appends `id`, which must be greater than every identifier already
    /// stored. Either the whole record is written or the storage is left
    /// untouched.
    fn append(&mut self, id: u64) -> Result<()>;
}

/// Fixed-capacity storage for a single posting list.
pub trait PostingPage {
    type Cursor<'a>: Postings + 'a
    where
        Self: 'a;

    type CursorMut<'a>: PostingsWriter + 'a
    where
        Self: 'a;

    /// Stores the first identifier. Must be called once before any append.
    fn init(&mut self, first: u64) -> Result<()>;

    fn cursor(&self) -> Self::Cursor<'_>;

    fn cursor_mut(&mut self) -> Self::CursorMut<'_>;

    /// The raw backing bytes.
    fn data(&self) -> &[u8];
}
