// Flat index tests
// Whole-prefix binary search, and agreement with the nested per-column search.

use prefix_index::{CompositeKeyIndex, Error, FlatIndex, Layout};

static TRIPLES: [i32; 36] = [
    1, 3, 2, //
    2, 4, 3, //
    4, 5, 4, //
    5, 1, 1, //
    6, 4, 2, //
    6, 4, 3, //
    6, 4, 4, //
    6, 4, 6, //
    6, 4, 7, //
    8, 1, 2, //
    8, 5, 5, //
    9, 1, 0, //
];

// =============================================================================
// Test 1: Full-key lookups on the triples scenario
// =============================================================================
#[test]
fn find_triples() {
    let index = FlatIndex::new(&TRIPLES, Layout::full(3)).unwrap();
    assert_eq!(index.rows(), 12);
    assert_eq!(index.find(&[6, 4, 4]), Some(&[6, 4, 4][..]));
    assert_eq!(index.find(&[9, 1, 0]), Some(&[9, 1, 0][..]));
    assert_eq!(index.find(&[1, 3, 2]), Some(&[1, 3, 2][..]));
    assert_eq!(index.find(&[6, 4, 5]), None);
    assert_eq!(index.find(&[0, 0, 0]), None);
    assert_eq!(index.find(&[10, 0, 0]), None);
    assert_eq!(index.find_row(&[8, 1, 2]), Some(9));
}

// =============================================================================
// Test 2: Prefix keys compare only the key columns
// =============================================================================
#[test]
fn prefix_lookup() {
    let index = FlatIndex::new(&TRIPLES, Layout::new(3, 2).unwrap()).unwrap();
    let found = index.find(&[6, 4]).unwrap();
    assert_eq!(&found[..2], &[6, 4]);
    assert!(index.contains(&[8, 5]));
    assert!(!index.contains(&[8, 4]));
}

// =============================================================================
// Test 3: Empty and single-record buffers
// =============================================================================
#[test]
fn empty_and_single() {
    let empty: [i32; 0] = [];
    let index = FlatIndex::new(&empty, Layout::full(2)).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.find(&[0, 0]), None);

    let one = [3, 3];
    let index = FlatIndex::new(&one, Layout::full(2)).unwrap();
    assert_eq!(index.find(&[3, 3]), Some(&[3, 3][..]));
    assert_eq!(index.find(&[3, 2]), None);
    assert_eq!(index.find(&[3, 4]), None);
}

// =============================================================================
// Test 4: Construction errors match the nested index
// =============================================================================
#[test]
fn construction_errors() {
    let data = [1, 2, 3, 4, 5];
    assert_eq!(
        FlatIndex::new(&data, Layout::full(2)).unwrap_err(),
        Error::Misaligned { len: 5, width: 2 }
    );
    assert_eq!(
        FlatIndex::with_key_len(&data, 5, 6).unwrap_err(),
        Error::InvalidLayout { width: 5, key_len: 6 }
    );
    let unsorted = [2, 1];
    assert_eq!(
        FlatIndex::new_checked(&unsorted, Layout::full(1)).unwrap_err(),
        Error::Unsorted { row: 1 }
    );
}

// =============================================================================
// Test 5: Flat and nested agree on every key in a dense grid
// =============================================================================
#[test]
fn agrees_with_composite_index() {
    // Every third point of a 6x6x6 cube, so misses interleave with hits.
    let data: Vec<i32> = (0..216)
        .filter(|i| i % 3 != 1)
        .flat_map(|i| [i / 36, (i / 6) % 6, i % 6])
        .collect();

    for key_len in 1..=3 {
        let layout = Layout::new(3, key_len).unwrap();
        let flat = FlatIndex::new_checked(&data, layout).unwrap();
        let nested = CompositeKeyIndex::new_checked(&data, layout).unwrap();

        for a in -1..7 {
            for b in -1..7 {
                for c in -1..7 {
                    let probe = [a, b, c];
                    let key = &probe[..key_len];
                    let expected = flat.find(key).map(|r| &r[..key_len]);
                    let actual = nested.find(key).map(|r| &r[..key_len]);
                    assert_eq!(actual, expected, "{key:?}");
                    if let Some(prefix) = expected {
                        assert_eq!(prefix, key);
                    }
                }
            }
        }
    }
}
