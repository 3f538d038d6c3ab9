#![no_main]

use libfuzzer_sys::fuzz_target;
use tindex_storage::{DeltaPage, Error, PostingsWriter};

// Interprets the input as little-endian u64 chunks and appends each one,
// checking that rejected appends never change the bytes.
fuzz_target!(|data: &[u8]| {
    let mut page = DeltaPage::new();
    let mut stored = Vec::new();

    for chunk in data.chunks_exact(8) {
        let id = u64::from_le_bytes(chunk.try_into().unwrap());
        let before = page.data().to_vec();
        match page.cursor_mut().append(id) {
            Ok(()) => stored.push(id),
            Err(Error::OutOfOrder { .. }) | Err(Error::PageFull { .. }) => {
                assert_eq!(page.data(), &before[..]);
            }
            Err(e) => panic!("unexpected append error: {e}"),
        }
    }

    let read: Vec<u64> = page.cursor().collect();
    assert_eq!(read, stored);
});
