use ordered_collections::red_black_tree::{RedBlackMultiSet, RedBlackSet};
use ordered_collections::{Cursor, Error};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_red_black_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1000);

        match rng.gen_range(0, 3) {
            0 => {
                let (cursor, inserted) = set.insert(key);
                assert_eq!(inserted, expected.insert(key));
                assert_eq!(set.get(cursor), Ok(&key));
            },
            1 => assert_eq!(set.remove(&key).is_some(), expected.remove(&key)),
            _ => {
                let cursor = set.lower_bound(&key);
                match expected.range(key..).next().cloned() {
                    Some(bound) => {
                        assert_eq!(set.erase(cursor), Ok(bound));
                        expected.remove(&bound);
                    },
                    None => assert_eq!(set.erase(cursor), Err(Error::EndOfContainer)),
                }
            },
        }

        assert_eq!(set.len(), expected.len());
    }

    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_eq!(
        set.iter().rev().collect::<Vec<&u32>>(),
        expected.iter().rev().collect::<Vec<&u32>>(),
    );
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());
}

#[test]
fn int_test_red_black_multiset() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut multiset = RedBlackMultiSet::new();
    let mut expected: Vec<u32> = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 100);

        if rng.gen_range(0, 3) == 0 {
            let removed = multiset.remove(&key);
            match expected.iter().position(|value| *value == key) {
                Some(index) => {
                    expected.remove(index);
                    assert_eq!(removed, Some(key));
                },
                None => assert_eq!(removed, None),
            }
        } else {
            multiset.insert(key);
            let index = expected
                .iter()
                .position(|value| *value > key)
                .unwrap_or_else(|| expected.len());
            expected.insert(index, key);
        }

        assert_eq!(multiset.len(), expected.len());
        assert_eq!(
            multiset.count(&key),
            expected.iter().filter(|value| **value == key).count(),
        );
    }

    assert_eq!(multiset.iter().cloned().collect::<Vec<u32>>(), expected);
}

#[test]
fn int_test_cursors_survive_erasures() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut cursors: Vec<(Cursor, u32)> = Vec::new();
    for _ in 0..1000 {
        let key = rng.next_u32();
        let (cursor, inserted) = set.insert(key);
        if inserted {
            cursors.push((cursor, key));
        }
    }

    let mut erased = Vec::new();
    while cursors.len() > 500 {
        let index = rng.gen_range(0, cursors.len());
        let (cursor, key) = cursors.swap_remove(index);
        assert_eq!(set.erase(cursor), Ok(key));
        erased.push(cursor);
    }

    for (cursor, key) in &cursors {
        assert_eq!(set.get(*cursor), Ok(key));
    }
    for cursor in erased {
        assert_eq!(set.get(cursor), Err(Error::InvalidCursor));
        assert_eq!(set.erase(cursor), Err(Error::InvalidCursor));
    }
    assert_eq!(set.len(), 500);
}

#[test]
fn int_test_erase_sequence() {
    let mut set: RedBlackSet<u32> = vec![52, 53, 54, 45, 48].into_iter().collect();

    let cursor = set.find(&48);
    assert_eq!(set.erase(cursor), Ok(48));
    assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&45, &52, &53, &54]);

    let cursor = set.begin();
    assert_eq!(set.erase(cursor), Ok(45));

    let last = set.predecessor(set.end()).unwrap();
    assert_eq!(set.erase(last), Ok(54));
    assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&52, &53]);

    assert_eq!(set.erase(set.end()), Err(Error::EndOfContainer));
    let cursor = set.begin();
    set.erase(cursor).unwrap();
    let cursor = set.begin();
    set.erase(cursor).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.erase(set.begin()), Err(Error::EndOfContainer));
}

#[test]
fn int_test_walk_both_directions() {
    let set: RedBlackSet<u32> = (0..100).collect();

    let mut forward = Vec::new();
    let mut cursor = set.begin();
    while cursor != set.end() {
        forward.push(*set.get(cursor).unwrap());
        cursor = set.successor(cursor).unwrap();
    }
    assert_eq!(forward, (0..100).collect::<Vec<u32>>());
    assert_eq!(set.successor(cursor), Err(Error::EndOfContainer));

    let mut backward = Vec::new();
    let mut cursor = set.end();
    while let Ok(prev) = set.predecessor(cursor) {
        backward.push(*set.get(prev).unwrap());
        cursor = prev;
    }
    assert_eq!(backward, (0..100).rev().collect::<Vec<u32>>());
    assert_eq!(cursor, set.begin());
}

#[test]
fn int_test_cursors_of_other_sets() {
    let mut set: RedBlackSet<u32> = (0..10).collect();
    let other: RedBlackSet<u32> = (0..10).collect();

    assert_eq!(set.get(other.begin()), Err(Error::InvalidCursor));
    assert_eq!(set.successor(other.end()), Err(Error::InvalidCursor));
    assert_eq!(set.erase(other.begin()), Err(Error::InvalidCursor));
    assert_eq!(set.len(), 10);
}

#[test]
fn int_test_merge_sets() {
    let mut set: RedBlackSet<u32> = vec![1, 3, 5].into_iter().collect();
    let mut other: RedBlackSet<u32> = vec![1, 2, 3, 4].into_iter().collect();
    let moved = other.find(&2);
    let collided = other.find(&3);
    set.merge(&mut other);

    assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4, &5]);
    assert_eq!(other.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
    assert_eq!(set.get(moved), Ok(&2));
    assert_eq!(other.get(moved), Err(Error::InvalidCursor));
    assert_eq!(other.get(collided), Ok(&3));
    assert_eq!(set.get(collided), Err(Error::InvalidCursor));
}

#[test]
fn int_test_cursors_follow_merged_nodes() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut other = RedBlackSet::new();
    for _ in 0..1000 {
        set.insert(rng.gen_range(0, 2000));
    }
    let mut cursors: Vec<(Cursor, u32)> = Vec::new();
    for _ in 0..1000 {
        let key = rng.gen_range(0, 2000);
        let (cursor, inserted) = other.insert(key);
        if inserted {
            cursors.push((cursor, key));
        }
    }

    set.merge(&mut other);
    for (cursor, key) in cursors {
        match other.get(cursor) {
            Ok(value) => {
                assert_eq!(*value, key);
                assert!(set.contains(&key));
                assert_eq!(set.get(cursor), Err(Error::InvalidCursor));
            },
            Err(err) => {
                assert_eq!(err, Error::InvalidCursor);
                assert_eq!(set.get(cursor), Ok(&key));
                assert_eq!(set.find(&key), cursor);
            },
        }
    }

    let mut multiset: RedBlackMultiSet<u32> = vec![2, 2].into_iter().collect();
    let mut other: RedBlackMultiSet<u32> = vec![1, 2].into_iter().collect();
    let one = other.begin();
    let two = other.successor(one).unwrap();
    multiset.merge(&mut other);

    assert_eq!(multiset.get(one), Ok(&1));
    assert_eq!(multiset.get(two), Ok(&2));
    assert_eq!(multiset.successor(two), Ok(multiset.end()));
    assert_eq!(multiset.erase(one), Ok(1));
    assert_eq!(multiset.count(&2), 3);
}

#[test]
fn int_test_iter_range_rejects_backwards_cursors() {
    let set: RedBlackSet<u32> = (0..10).collect();
    assert_eq!(set.iter_range(set.end(), set.find(&3)).err(), Some(Error::InvalidCursor));
    assert_eq!(set.iter_range(set.find(&6), set.find(&3)).err(), Some(Error::InvalidCursor));
    assert_eq!(set.iter_range(set.find(&3), set.find(&6)).unwrap().len(), 3);
    assert_eq!(set.iter_range(set.find(&3), set.find(&3)).unwrap().len(), 0);
    assert_eq!(set.iter_range(set.begin(), set.end()).unwrap().rev().len(), 10);

    let multiset: RedBlackMultiSet<u32> = vec![1, 2, 2, 3].into_iter().collect();
    let (first, last) = multiset.equal_range(&2);
    assert_eq!(multiset.iter_range(last, first).err(), Some(Error::InvalidCursor));
    assert_eq!(
        multiset.iter_range(multiset.end(), multiset.begin()).err(),
        Some(Error::InvalidCursor),
    );
}
