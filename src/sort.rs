//! In-place quicksort over primitive and generic slices.
//!
//! Median-of-three pivot selection with an insertion-sort cutoff for
//! short ranges; recursion always descends into the smaller partition so
//! the stack stays logarithmic. Booleans get a counting sort instead —
//! two buckets make a pivot pointless.

use core::cmp::Ordering;

use crate::heap::{Comparator, NaturalOrder};

// Below this length, insertion sort beats partitioning.
const INSERTION_SORT_THRESHOLD: usize = 24;

/// Sort by natural (`PartialOrd`) ordering.
pub fn quicksort<K: PartialOrd>(data: &mut [K]) {
    quicksort_by(data, &NaturalOrder);
}

/// Sort under an injected comparator.
pub fn quicksort_by<K, C: Comparator<K>>(data: &mut [K], comparator: &C) {
    let len = data.len();
    if len > 1 {
        sort_range(data, comparator, 0, len);
    }
}

/// Counting sort for booleans: all `false`, then all `true`.
pub fn sort_bools(data: &mut [bool]) {
    let trues = data.iter().filter(|&&b| b).count();
    let falses = data.len() - trues;
    data[..falses].fill(false);
    data[falses..].fill(true);
}

#[inline]
fn greater<K, C: Comparator<K>>(comparator: &C, a: &K, b: &K) -> bool {
    comparator.compare(a, b) == Ordering::Greater
}

// Sort data[lo..hi). Tail-calls into the larger partition via the loop.
fn sort_range<K, C: Comparator<K>>(data: &mut [K], comparator: &C, mut lo: usize, mut hi: usize) {
    loop {
        let len = hi - lo;
        if len <= INSERTION_SORT_THRESHOLD {
            insertion_sort_range(data, comparator, lo, hi);
            return;
        }

        // Median of first, middle, last; afterwards data[lo] <= median
        // <= data[hi-1], and the median is parked at hi-2 as the pivot.
        let mid = lo + len / 2;
        if greater(comparator, &data[lo], &data[mid]) {
            data.swap(lo, mid);
        }
        if greater(comparator, &data[mid], &data[hi - 1]) {
            data.swap(mid, hi - 1);
            if greater(comparator, &data[lo], &data[mid]) {
                data.swap(lo, mid);
            }
        }
        data.swap(mid, hi - 2);
        let pivot = hi - 2;

        // Hoare partition of (lo, hi-2); data[lo] and the pivot slot act
        // as sentinels for the two scans.
        let mut i = lo;
        let mut j = hi - 2;
        loop {
            loop {
                i += 1;
                if comparator.compare(&data[i], &data[pivot]) != Ordering::Less {
                    break;
                }
            }
            loop {
                j -= 1;
                if comparator.compare(&data[pivot], &data[j]) != Ordering::Less {
                    break;
                }
            }
            if i >= j {
                break;
            }
            data.swap(i, j);
        }
        data.swap(i, pivot);

        // Recurse into the smaller side, iterate on the larger.
        if i - lo < hi - (i + 1) {
            sort_range(data, comparator, lo, i);
            lo = i + 1;
        } else {
            sort_range(data, comparator, i + 1, hi);
            hi = i;
        }
    }
}

fn insertion_sort_range<K, C: Comparator<K>>(
    data: &mut [K],
    comparator: &C,
    lo: usize,
    hi: usize,
) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && greater(comparator, &data[j - 1], &data[j]) {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
