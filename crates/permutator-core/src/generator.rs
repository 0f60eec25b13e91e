// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-place lexicographic permutation generator.
//!
//! The generator owns no state of its own: the caller's buffer *is* the
//! iterator. Each [`advance`] call rewrites the buffer into its immediate
//! lexicographic successor, so a run can be abandoned after any step without
//! cleanup.
//!
//! # Seeding
//!
//! Enumeration only covers every ordering when the buffer starts in ascending
//! order. The generator does not check this. A buffer seeded in any other
//! arrangement walks only the tail of the enumeration that follows it; a
//! descending seed is already the last permutation and yields nothing beyond
//! itself. Sort first (`slice::sort`) unless a partial walk is what you want.
//!
//! # Duplicates
//!
//! Equal tokens never compare less-than each other, so the successor step
//! skips arrangements that only swap equal values. Starting from the sorted
//! state, a multiset visits each distinct ordering exactly once.

/// Returns the pivot index: the largest `i` with `seq[i] < seq[i + 1]`.
///
/// `None` means the buffer is non-increasing, i.e. already the last
/// permutation of its multiset.
pub fn pivot<T: Ord>(seq: &[T]) -> Option<usize> {
    seq.windows(2).rposition(|w| w[0] < w[1])
}

/// Rewrites `seq` into its lexicographic successor.
///
/// Returns `false`, leaving the buffer untouched, when `seq` is already the
/// last permutation (including the trivial zero- and one-element cases).
/// On `true` the buffer is strictly greater than on entry and no permutation
/// of the same multiset lies between the two.
///
/// The first call must see an ascending-sorted buffer for a full enumeration;
/// see the module docs.
pub fn advance<T: Ord>(seq: &mut [T]) -> bool {
    let Some(i) = pivot(seq) else {
        return false;
    };
    // The suffix after `i` is non-increasing and contains at least one value
    // greater than `seq[i]` (namely `seq[i + 1]`), so this always finds one.
    let Some(j) = seq.iter().rposition(|t| *t > seq[i]) else {
        return false;
    };
    seq.swap(i, j);
    seq[i + 1..].reverse();
    true
}

/// Whether a visitor wants the walk to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Advance to the next permutation.
    Continue,
    /// Abandon the walk after this permutation.
    Stop,
}

/// Outcome of [`for_each_permutation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Walk {
    /// Number of permutations handed to the visitor.
    pub visited: u64,
    /// `true` when the visitor returned [`Visit::Stop`] while further
    /// permutations remained.
    pub stopped: bool,
}

/// Hands the current arrangement of `seq`, then every successor, to `visit`.
///
/// The visitor sees the buffer as it is on entry, so callers normally sort
/// first. The walk ends when the permutations run out, when `visit` returns
/// [`Visit::Stop`], or on the first error, which is propagated unchanged.
pub fn for_each_permutation<T, E, F>(seq: &mut [T], mut visit: F) -> Result<Walk, E>
where
    T: Ord,
    F: FnMut(&[T]) -> Result<Visit, E>,
{
    let mut walk = Walk::default();
    loop {
        walk.visited += 1;
        if visit(seq)? == Visit::Stop {
            walk.stopped = pivot(seq).is_some();
            return Ok(walk);
        }
        if !advance(seq) {
            return Ok(walk);
        }
    }
}

/// Number of distinct orderings of `tokens`: n! divided by the factorial of
/// each run of equal values.
///
/// Returns `None` when the count does not fit in a `u128`.
pub fn distinct_permutations<T: Ord>(tokens: &[T]) -> Option<u128> {
    let mut sorted: Vec<&T> = tokens.iter().collect();
    sorted.sort_unstable();

    let mut total: u128 = 1;
    let mut placed: u128 = 0;
    let mut start = 0;
    while start < sorted.len() {
        let head = sorted[start];
        let run = sorted[start..]
            .iter()
            .take_while(|&&t| t == head)
            .count();
        // Multiply in C(placed + run, run) one factor at a time; every
        // intermediate quotient is exact.
        for k in 1..=run as u128 {
            total = total.checked_mul(placed + k)? / k;
        }
        placed += run as u128;
        start += run;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(mut seq: Vec<char>) -> Vec<String> {
        let mut out = vec![seq.iter().collect::<String>()];
        while advance(&mut seq) {
            out.push(seq.iter().collect());
        }
        out
    }

    #[test]
    fn abc_walks_all_six_orderings() {
        assert_eq!(
            collect(vec!['A', 'B', 'C']),
            ["ABC", "ACB", "BAC", "BCA", "CAB", "CBA"]
        );
    }

    #[test]
    fn last_permutation_is_left_untouched() {
        let mut seq = ['C', 'B', 'A'];
        assert!(!advance(&mut seq));
        assert_eq!(seq, ['C', 'B', 'A']);
    }

    #[test]
    fn duplicates_are_visited_once() {
        assert_eq!(collect(vec!['A', 'A', 'B']), ["AAB", "ABA", "BAA"]);
    }

    #[test]
    fn empty_and_singleton_have_one_permutation() {
        let mut empty: [u8; 0] = [];
        assert!(!advance(&mut empty));
        let mut one = [7];
        assert!(!advance(&mut one));
        assert_eq!(one, [7]);
    }

    #[test]
    fn descending_seed_yields_only_itself() {
        assert_eq!(collect(vec!['C', 'B', 'A']), ["CBA"]);
    }

    #[test]
    fn unsorted_seed_walks_the_tail() {
        assert_eq!(collect(vec!['B', 'C', 'A']), ["BCA", "CAB", "CBA"]);
    }

    #[test]
    fn pivot_marks_the_changing_position() {
        assert_eq!(pivot(&[1, 3, 2]), Some(0));
        assert_eq!(pivot(&[1, 2, 3]), Some(1));
        assert_eq!(pivot(&[3, 2, 1]), None);
        assert_eq!(pivot::<u8>(&[]), None);
    }

    #[test]
    fn walk_reports_visits_and_stops() {
        let mut seq = [1, 2, 3];
        let walk = for_each_permutation(&mut seq, |_| Ok::<_, ()>(Visit::Continue)).unwrap();
        assert_eq!(walk, Walk { visited: 6, stopped: false });

        let mut seq = [1, 2, 3];
        let mut seen = 0;
        let walk = for_each_permutation(&mut seq, |_| {
            seen += 1;
            Ok::<_, ()>(if seen == 2 { Visit::Stop } else { Visit::Continue })
        })
        .unwrap();
        assert_eq!(walk, Walk { visited: 2, stopped: true });
        assert_eq!(seq, [1, 3, 2]);
    }

    #[test]
    fn stop_on_the_last_permutation_is_not_early() {
        let mut seq = ['b', 'a'];
        let walk = for_each_permutation(&mut seq, |_| Ok::<_, ()>(Visit::Stop)).unwrap();
        assert_eq!(walk, Walk { visited: 1, stopped: false });
    }

    #[test]
    fn walk_propagates_the_first_error() {
        let mut seq = ['a', 'b', 'c'];
        let err = for_each_permutation(&mut seq, |p| {
            if p == ['b', 'a', 'c'] {
                Err("boom")
            } else {
                Ok(Visit::Continue)
            }
        })
        .unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(seq, ['b', 'a', 'c']);
    }

    #[test]
    fn distinct_counts() {
        assert_eq!(distinct_permutations::<u8>(&[]), Some(1));
        assert_eq!(distinct_permutations(&['x']), Some(1));
        assert_eq!(distinct_permutations(&['a', 'b', 'c']), Some(6));
        assert_eq!(distinct_permutations(&['a', 'a', 'b']), Some(3));
        assert_eq!(distinct_permutations(&"mississippi".chars().collect::<Vec<_>>()), Some(34650));
        assert_eq!(distinct_permutations(&(0..20).collect::<Vec<u32>>()), Some(2_432_902_008_176_640_000));
    }

    #[test]
    fn distinct_counts_owned_tokens() {
        let words: Vec<String> = ["b", "a", "b", "c"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(distinct_permutations(&words), Some(12));
    }

    #[test]
    fn distinct_count_overflow_is_none() {
        assert_eq!(distinct_permutations(&(0..40).collect::<Vec<u32>>()), None);
    }
}
