//! A page handle that can cross threads: appends take the write lock,
//! scans take the read lock.

use crate::cursor::PageCursor;
use crate::page::DeltaPage;
use crate::postings::Postings;
use crate::Result;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Default)]
pub struct SharedPage {
    inner: Arc<RwLock<DeltaPage>>,
}

impl SharedPage {
    pub fn new(page: DeltaPage) -> Self {
        Self {
            inner: Arc::new(RwLock::new(page)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DeltaPage> {
        self.inner.read().unwrap()
    }

    fn write(&self) -> RwLockWriteGuard<'_, DeltaPage> {
        self.inner.write().unwrap()
    }

    pub fn init(&self, first: u64) -> Result<()> {
        self.write().init(first)
    }

    pub fn append(&self, id: u64) -> Result<()> {
        self.write().append(id)
    }

    /// Runs `f` over a fresh read cursor. Appends wait until `f` returns.
    pub fn with_cursor<R>(&self, f: impl FnOnce(&mut PageCursor<&[u8]>) -> R) -> R {
        let page = self.read();
        let mut cursor = page.cursor();
        f(&mut cursor)
    }

    pub fn seek(&self, target: u64) -> Option<u64> {
        self.with_cursor(|c| c.seek(target))
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.with_cursor(|c| c.by_ref().collect())
    }

    /// Copy of the backing bytes for persistence.
    pub fn snapshot(&self) -> Box<[u8]> {
        self.read().data().into()
    }

    pub fn is_full(&self) -> bool {
        self.read().is_full()
    }

    /// Returns the page if this is the last handle to it.
    pub fn try_unwrap(self) -> std::result::Result<DeltaPage, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner().unwrap()),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl From<DeltaPage> for SharedPage {
    fn from(page: DeltaPage) -> Self {
        Self::new(page)
    }
}
