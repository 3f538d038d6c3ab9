//! Property tests for delta-encoded posting pages:
//! - init + append round-trips any strictly increasing list that fits
//! - non-increasing appends are rejected without touching the bytes
//! - seek is a lower bound against the stored list
//! - append from a partially read cursor lands at the logical end

use proptest::prelude::*;
use std::collections::BTreeSet;
use tindex_storage::{DeltaPage, Error, PAGE_SIZE, Postings, PostingsWriter};

fn build(ids: &BTreeSet<u64>) -> DeltaPage {
    let mut page = DeltaPage::new();
    let mut iter = ids.iter().copied();
    let first = iter.next().unwrap();
    page.init(first).unwrap();
    for id in iter {
        page.cursor_mut().append(id).unwrap();
    }
    page
}

// 150 ids of at most 10 bytes each always fit in one page.
fn id_sets() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(1..u64::MAX, 1..150)
}

fn small_id_sets() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(1..10_000u64, 1..100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn round_trips_increasing_lists(ids in id_sets()) {
        let page = build(&ids);
        let read: Vec<u64> = page.cursor().collect();
        prop_assert_eq!(read, ids.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn rejects_non_increasing_ids(ids in small_id_sets(), back in 0u64..20_000) {
        let mut page = build(&ids);
        let last = *ids.last().unwrap();
        let candidate = back.min(last);
        let before = page.data().to_vec();

        let err = page.cursor_mut().append(candidate).unwrap_err();
        let rejected_as_out_of_order = matches!(err, Error::OutOfOrder { last: l, id } if l == last && id == candidate);
        prop_assert!(rejected_as_out_of_order);
        prop_assert_eq!(page.data(), &before[..]);
    }

    #[test]
    fn seek_matches_btree_lower_bound(
        ids in small_id_sets(),
        targets in prop::collection::vec(0u64..10_100, 1..20),
    ) {
        let page = build(&ids);
        let mut cursor = page.cursor();
        for target in targets {
            let expected = ids.range(target..).next().copied();
            prop_assert_eq!(cursor.seek(target), expected, "target {}", target);
        }
    }

    #[test]
    fn append_after_partial_read_matches_fresh_append(
        ids in small_id_sets(),
        skip in 0usize..100,
        gap in 1u64..1_000,
    ) {
        let next = ids.last().unwrap() + gap;

        let mut fresh = build(&ids);
        fresh.cursor_mut().append(next).unwrap();

        let mut partial = build(&ids);
        {
            let mut cursor = partial.cursor_mut();
            for _ in 0..skip.min(ids.len()) {
                cursor.next();
            }
            cursor.append(next).unwrap();
            prop_assert_eq!(cursor.current(), Some(next));
        }

        prop_assert_eq!(fresh.data(), partial.data());
    }
}

#[test]
fn zeroed_page_reads_empty() {
    let page = DeltaPage::from_bytes(vec![0u8; PAGE_SIZE]).unwrap();
    assert_eq!(page.cursor().next(), None);
    assert_eq!(page.first(), None);
}

#[test]
fn seek_scenario() {
    let page = build(&BTreeSet::from([10, 20, 30, 50]));
    let mut cursor = page.cursor();
    assert_eq!(cursor.seek(25), Some(30));
    assert_eq!(cursor.seek(30), Some(30));
    assert_eq!(cursor.seek(30), Some(30));
    assert_eq!(cursor.seek(5), Some(10));
    assert_eq!(cursor.seek(51), None);
}
