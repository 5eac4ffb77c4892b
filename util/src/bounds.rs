//! 添字・区間の検査。違反はすべて呼び出し側のバグとして panic する。

use std::ops::{Bound, RangeBounds};

#[cold]
#[track_caller]
pub fn invalid_size(len: usize) -> ! {
    if len == 0 {
        panic!("invalid size: tree must hold at least one element (got 0)");
    } else {
        panic!("invalid size: capacity for {len} elements overflows usize");
    }
}

#[cold]
#[track_caller]
pub fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for length {len}");
}

#[cold]
#[track_caller]
fn range_start_after_end(start: usize, end: usize) -> ! {
    panic!("range start {start} is greater than range end {end}");
}

#[cold]
#[track_caller]
fn range_start_out_of_bounds(start: usize, len: usize) -> ! {
    panic!("range start {start} out of range for length {len}");
}

#[cold]
#[track_caller]
fn range_end_out_of_bounds(end: usize, len: usize) -> ! {
    panic!("range end {end} out of range for length {len}");
}

#[track_caller]
#[inline]
pub fn check_index(index: usize, len: usize) {
    if index >= len {
        index_out_of_range(index, len);
    }
}

/// `0 <= r <= len`を検査する。
#[track_caller]
#[inline]
pub fn check_end(end: usize, len: usize) {
    if end > len {
        range_end_out_of_bounds(end, len);
    }
}

/// 戻り値を`(l, r)`とすると以下が保証される。
///
/// * `l <= r <= len`
#[track_caller]
pub fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    use Bound::*;
    let l = match range.start_bound() {
        Excluded(s) => s
            .checked_add(1)
            .unwrap_or_else(|| panic!("attempted to index from after maximum usize")),
        Included(s) => *s,
        Unbounded => 0,
    };
    let r = match range.end_bound() {
        Excluded(e) => *e,
        Included(e) => e
            .checked_add(1)
            .unwrap_or_else(|| panic!("attempted to index up to maximum usize")),
        Unbounded => len,
    };
    check_end(r, len);
    if l > r {
        if l > len {
            range_start_out_of_bounds(l, len);
        }
        range_start_after_end(l, r);
    }
    (l, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_test() {
        assert_eq!(resolve(.., 7), (0, 7));
        assert_eq!(resolve(2.., 7), (2, 7));
        assert_eq!(resolve(..3, 7), (0, 3));
        assert_eq!(resolve(..=3, 7), (0, 4));
        assert_eq!(resolve(4..4, 7), (4, 4));
        assert_eq!(resolve(7..7, 7), (7, 7));
        assert_eq!(
            resolve((Bound::Excluded(1), Bound::Included(5)), 7),
            (2, 6)
        );
    }

    #[test]
    #[should_panic(expected = "range start 5 is greater than range end 4")]
    #[allow(clippy::reversed_empty_ranges)]
    fn reversed_range() {
        resolve(5..4, 7);
    }

    #[test]
    #[should_panic(expected = "range end 9 out of range for length 7")]
    #[allow(clippy::reversed_empty_ranges)]
    fn both_out_of_bounds() {
        resolve(10..9, 7);
    }

    #[test]
    #[should_panic(expected = "range end 8 out of range for length 7")]
    fn end_out_of_bounds() {
        resolve(0..=7, 7);
    }

    #[test]
    #[should_panic(expected = "range start 9 out of range for length 7")]
    fn start_out_of_bounds() {
        resolve(9.., 7);
    }

    #[test]
    #[should_panic(expected = "maximum usize")]
    fn inclusive_overflow() {
        resolve(0..=usize::MAX, 7);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn index_test() {
        check_index(3, 3);
    }

    #[test]
    #[should_panic(expected = "invalid size: tree must hold at least one element (got 0)")]
    fn zero_size() {
        invalid_size(0);
    }
}
