//! Comparator-driven in-place sort.
//!
//! Quicksort with a middle-element pivot and Hoare partitioning. The sort is
//! not stable, which is fine for the query engine: every comparator it
//! supplies is a total order (ties broken down to the movie id), so no two
//! distinct rows ever compare equal.

/// Sorts `items` so that `precedes(a, b)` holds for every adjacent pair.
///
/// `precedes` must be a strict should-precede relation (irreflexive and
/// transitive); the resulting order is whatever total order it induces.
pub fn quick_sort<T, F>(items: &mut [T], precedes: F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if items.len() > 1 {
        sort_range(items, 0, items.len() as isize - 1, &precedes);
    }
}

fn sort_range<T, F>(items: &mut [T], left: isize, right: isize, precedes: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut i = left;
    let mut j = right;
    let pivot = items[((left + right) / 2) as usize].clone();

    while i <= j {
        while precedes(&items[i as usize], &pivot) {
            i += 1;
        }
        while precedes(&pivot, &items[j as usize]) {
            j -= 1;
        }

        if i <= j {
            items.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    if left < j {
        sort_range(items, left, j, precedes);
    }
    if i < right {
        sort_range(items, i, right, precedes);
    }
}
