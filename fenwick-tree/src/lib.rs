use query::{Commutative, Group};
use std::ops::RangeBounds;
use util::bounds;

/// 可換群に対するFenwick木。0-indexedで、節点`i`は`[i & (i + 1), i]`を受け持つ。
#[derive(Debug, Clone)]
pub struct FenwickTree<T, OP> {
    data: Box<[T]>,
    op: OP,
}

impl<T, OP> FenwickTree<T, OP> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T, OP: Group<Element = T> + Commutative> FenwickTree<T, OP> {
    #[track_caller]
    pub fn new(len: usize, op: OP) -> Self {
        if len == 0 {
            bounds::invalid_size(len);
        }
        let data = std::iter::repeat_with(|| op.identity()).take(len).collect();
        Self { data, op }
    }

    /// O(n)で構築する。
    #[track_caller]
    pub fn from_vec(values: Vec<T>, op: OP) -> Self {
        if values.is_empty() {
            bounds::invalid_size(0);
        }
        let mut data = values.into_boxed_slice();
        for i in 0..data.len() {
            let j = i | (i + 1);
            if j < data.len() {
                let (lo, hi) = data.split_at_mut(j);
                op.combine_assign_left(&mut hi[0], &lo[i]);
            }
        }
        Self { data, op }
    }

    /// `a[index] = a[index] * value`
    #[track_caller]
    pub fn add(&mut self, index: usize, value: &T) {
        bounds::check_index(index, self.len());
        let mut i = index;
        while i < self.data.len() {
            self.op.combine_assign_left(&mut self.data[i], value);
            i |= i + 1;
        }
    }

    /// `[0, end)`の畳み込み。
    #[track_caller]
    pub fn prefix(&self, end: usize) -> T {
        bounds::check_end(end, self.len());
        let mut res = self.op.identity();
        let mut i = end;
        while i > 0 {
            self.op.combine_assign_left(&mut res, &self.data[i - 1]);
            i &= i - 1;
        }
        res
    }

    #[track_caller]
    pub fn sum<R: RangeBounds<usize>>(&self, range: R) -> T {
        let (l, r) = bounds::resolve(range, self.len());
        self.op.combine_inverse(&self.prefix(r), &self.prefix(l))
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> T {
        bounds::check_index(index, self.len());
        self.sum(index..index + 1)
    }
}
