pub mod config;
pub mod cursor;
mod error;
pub mod page;
pub mod postings;
pub mod shared;
pub mod varint;

pub use crate::config::PageConfig;
pub use crate::cursor::{EndReason, PageCursor};
pub use crate::error::{Error, Result};
pub use crate::page::DeltaPage;
pub use crate::postings::{PostingPage, Postings, PostingsWriter};
pub use crate::shared::SharedPage;

pub const PAGE_SIZE: usize = 2048;
