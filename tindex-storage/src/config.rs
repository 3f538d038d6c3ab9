use crate::page::DeltaPage;
use crate::varint::MAX_VARINT_LEN64;
use crate::{Error, PAGE_SIZE, Result};
use serde::{Deserialize, Serialize};

/// Sizing for posting pages handed out by a page directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page_size: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

impl PageConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size < MAX_VARINT_LEN64 {
            return Err(Error::UnsupportedPageSize(self.page_size));
        }
        Ok(())
    }

    /// A zeroed page of `page_size` bytes.
    pub fn allocate(&self) -> Result<DeltaPage> {
        self.validate()?;
        DeltaPage::from_bytes(vec![0u8; self.page_size])
    }

    /// Wraps persisted bytes, which must be exactly `page_size` long.
    pub fn load(&self, bytes: impl Into<Box<[u8]>>) -> Result<DeltaPage> {
        self.validate()?;
        let bytes = bytes.into();
        if bytes.len() != self.page_size {
            return Err(Error::PageSizeMismatch {
                expected: self.page_size,
                found: bytes.len(),
            });
        }
        DeltaPage::from_bytes(bytes)
    }
}
