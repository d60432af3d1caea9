//! IAI-Callgrind benchmark for SortedSet.
//!
//! Measures instruction counts for incremental versus bulk insertion and for
//! draining a set from the front.
//! Data sizes: 100, 1000, 10000.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sortedset::{Ascending, SortedSet};
use std::hint::black_box;

fn setup_sorted_vec_100() -> Vec<u32> {
    (0..100).collect()
}

fn setup_sorted_vec_1000() -> Vec<u32> {
    (0..1000).collect()
}

fn setup_sorted_vec_10000() -> Vec<u32> {
    (0..10000).collect()
}

fn setup_populated_1000() -> SortedSet<u32> {
    let set = SortedSet::ascending();
    set.add_all(0..1000);
    set
}

// add benchmarks
#[library_benchmark]
#[bench::small(setup_sorted_vec_100())]
#[bench::medium(setup_sorted_vec_1000())]
#[bench::large(setup_sorted_vec_10000())]
fn add_each(elements: Vec<u32>) -> SortedSet<u32> {
    let set = SortedSet::ascending();
    for element in black_box(elements) {
        set.add(black_box(element));
    }
    black_box(set)
}

// add_all benchmarks
#[library_benchmark]
#[bench::small(setup_sorted_vec_100())]
#[bench::medium(setup_sorted_vec_1000())]
#[bench::large(setup_sorted_vec_10000())]
fn add_all(elements: Vec<u32>) -> SortedSet<u32> {
    let set = SortedSet::ascending();
    set.add_all(black_box(elements));
    black_box(set)
}

// from_sorted_vec benchmarks
#[library_benchmark]
#[bench::small(setup_sorted_vec_100())]
#[bench::medium(setup_sorted_vec_1000())]
#[bench::large(setup_sorted_vec_10000())]
fn from_sorted_vec(elements: Vec<u32>) -> Option<SortedSet<u32>> {
    black_box(SortedSet::from_sorted_vec(Ascending, black_box(elements)).ok())
}

// drain benchmarks
#[library_benchmark]
#[bench::medium(setup_populated_1000())]
fn pop_left_until_empty(set: SortedSet<u32>) -> usize {
    let mut popped = 0;
    while set.pop_left().is_some() {
        popped += 1;
    }
    black_box(popped)
}

library_benchmark_group!(
    name = sorted_set_group;
    benchmarks = add_each, add_all, from_sorted_vec, pop_left_until_empty
);

main!(library_benchmark_groups = sorted_set_group);
