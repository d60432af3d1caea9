//! Loom model tests for SortedSet.
//!
//! Built with `--cfg loom`, the set's lock is loom's `RwLock`, so every
//! interleaving of the threads below is explored.
//!
//! # Running these tests
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo test --release --test sorted_set_loom_tests
//! ```

#![cfg(loom)]

use loom::sync::Arc;
use loom::thread;
use sortedset::SortedSet;

/// Two writers adding distinct elements: both survive, in order.
#[test]
fn loom_concurrent_adds() {
    loom::model(|| {
        let set = Arc::new(SortedSet::ascending());

        let handles: Vec<_> = [2, 1]
            .into_iter()
            .map(|element| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    set.add(element);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(set.elements(), vec![1, 2]);
    });
}

/// Two writers racing to add the same element: exactly one wins.
#[test]
fn loom_duplicate_add_inserts_once() {
    loom::model(|| {
        let set = Arc::new(SortedSet::ascending());

        let first = {
            let set = Arc::clone(&set);
            thread::spawn(move || set.add(7))
        };
        let second = set.add(7);
        let first = first.join().unwrap();

        assert!(first ^ second);
        assert_eq!(set.len(), 1);
    });
}

/// A reader concurrent with a batch sees none or all of it.
#[test]
fn loom_reader_sees_whole_batch() {
    loom::model(|| {
        let set = Arc::new(SortedSet::ascending());

        let writer = {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                set.add_all([3, 1, 2]);
            })
        };

        let snapshot = set.elements();
        assert!(snapshot.is_empty() || snapshot == vec![1, 2, 3]);

        writer.join().unwrap();
        assert_eq!(set.len(), 3);
    });
}

/// Two poppers draining a set never return the same element.
#[test]
fn loom_pops_never_duplicate() {
    loom::model(|| {
        let set = Arc::new(SortedSet::ascending());
        set.add_all([1, 2]);

        let left = {
            let set = Arc::clone(&set);
            thread::spawn(move || set.pop_left())
        };
        let right = set.pop_right();
        let left = left.join().unwrap();

        let mut popped = vec![left.unwrap(), right.unwrap()];
        popped.sort_unstable();
        assert_eq!(popped, vec![1, 2]);
        assert!(set.is_empty());
    });
}
