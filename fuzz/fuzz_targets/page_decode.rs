#![no_main]

use libfuzzer_sys::fuzz_target;
use tindex_storage::{DeltaPage, Postings};

fuzz_target!(|data: &[u8]| {
    let Ok(page) = DeltaPage::from_bytes(data) else {
        return;
    };

    let ids: Vec<u64> = page.cursor().collect();
    assert!(ids.len() <= data.len());
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    // Every stored id must be reachable by a lower-bound seek.
    let mut cursor = page.cursor();
    for &id in ids.iter().rev() {
        assert_eq!(cursor.seek(id), Some(id));
    }
    if let Some(&last) = ids.last() {
        if last < u64::MAX {
            assert_eq!(cursor.seek(last + 1), None);
        }
    }
});
