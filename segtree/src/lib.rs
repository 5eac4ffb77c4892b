use query::Monoid;
use std::{
    iter,
    ops::{Deref, DerefMut, RangeBounds},
};
use util::bounds;

/// モノイドを載せたセグメント木。
///
/// `data`は1-indexedのヒープ配列で、葉`i`は`data[half_len + i]`にある。
/// 公開メソッドから戻った時点で、すべての内部節点`i`について
/// `data[i] == op.combine(&data[2 * i], &data[2 * i + 1])`が成り立つ。
///
/// 内部に同期機構は持たない。複数スレッドから更新する場合は`Mutex`などで外側から排他すること。
#[derive(Debug, Clone)]
pub struct Segtree<T, OP> {
    len: usize,
    half_len: usize,
    data: Box<[T]>,
    op: OP,
}

impl<T, OP> Segtree<T, OP> {
    pub fn into_vec(self) -> Vec<T> {
        self.data
            .into_vec()
            .into_iter()
            .skip(self.half_len)
            .take(self.len)
            .collect()
    }
}

impl<T, OP> Deref for Segtree<T, OP> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.data[self.half_len..self.half_len + self.len]
    }
}

/// `len`個の葉を持つ木の`half_len`。`len`以上の最小の2冪。
#[track_caller]
fn half_len_for(len: usize) -> usize {
    if len == 0 {
        bounds::invalid_size(len);
    }
    len.checked_next_power_of_two()
        .filter(|half_len| half_len.checked_mul(2).is_some())
        .unwrap_or_else(|| bounds::invalid_size(len))
}

impl<T, OP: Monoid<Element = T>> Segtree<T, OP> {
    fn eval(mut self) -> Self {
        for i in (1..self.half_len).rev() {
            self.data[i] = self.op.combine(&self.data[i * 2], &self.data[i * 2 + 1]);
        }
        self
    }

    /// すべての要素が単位元である長さ`len`の木を作る。
    #[track_caller]
    pub fn new(len: usize, op: OP) -> Self {
        let half_len = half_len_for(len);
        let data = iter::repeat_with(|| op.identity())
            .take(half_len * 2)
            .collect();
        Self {
            len,
            half_len,
            data,
            op,
        }
    }

    /// すべての要素が`value`である長さ`len`の木を作る。
    #[track_caller]
    pub fn from_elem(len: usize, value: T, op: OP) -> Self
    where
        T: Clone,
    {
        half_len_for(len);
        Self::from_vec(vec![value; len], op)
    }

    #[track_caller]
    pub fn from_vec(values: Vec<T>, op: OP) -> Self {
        let len = values.len();
        let half_len = half_len_for(len);
        let data = iter::repeat_with(|| op.identity())
            .take(half_len)
            .chain(
                values
                    .into_iter()
                    .chain(iter::repeat_with(|| op.identity()))
                    .take(half_len),
            )
            .collect();
        Self {
            len,
            half_len,
            data,
            op,
        }
        .eval()
    }

    #[track_caller]
    pub fn from_iter_op<I: IntoIterator<Item = T>>(iter: I, op: OP) -> Self {
        Self::from_vec(iter.into_iter().collect(), op)
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        bounds::check_index(index, self.len);
        &self.data[index + self.half_len]
    }

    /// `op.combine`で全体を畳み込んだ値。O(1)。
    pub fn all(&self) -> &T {
        &self.data[1]
    }

    /// `range`の要素を左から順に畳み込む。空区間なら単位元を返す。
    #[track_caller]
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> T {
        let (mut l, mut r) = bounds::resolve(range, self.len);
        l += self.half_len;
        r += self.half_len;
        let mut query_l = self.op.identity();
        let mut query_r = self.op.identity();
        while l < r {
            if r & 1 == 1 {
                r -= 1;
                self.op.combine_assign_right(&self.data[r], &mut query_r);
            }
            if l & 1 == 1 {
                self.op.combine_assign_left(&mut query_l, &self.data[l]);
                l += 1;
            }
            l >>= 1;
            r >>= 1;
        }
        self.op.combine_assign_left(&mut query_l, &query_r);
        query_l
    }

    /// 書き込み用のガードを返す。ガードが破棄されたときに祖先を再計算する。
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> ValMut<'_, T, OP> {
        bounds::check_index(index, self.len);
        ValMut {
            index: index + self.half_len,
            segtree: self,
        }
    }

    fn update_val(&mut self, mut i: usize) {
        while i > 1 {
            i >>= 1;
            self.data[i] = self.op.combine(&self.data[i * 2], &self.data[i * 2 + 1]);
        }
    }

    #[track_caller]
    pub fn update(&mut self, index: usize, value: T) {
        bounds::check_index(index, self.len);
        let i = index + self.half_len;
        self.data[i] = value;
        self.update_val(i);
    }

    /// `pred(&self.query(l..r))`が`true`となる最大の`r`をO(log(n))で求める。
    ///
    /// `pred(&identity)`は`true`で、`pred`は区間を伸ばすと`true`から`false`にのみ変化する必要がある。
    #[track_caller]
    pub fn max_right<P>(&self, l: usize, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        bounds::check_end(l, self.len);
        debug_assert!(pred(&self.op.identity()));
        if l == self.len {
            return l;
        }
        let mut i = l + self.half_len;
        let mut acc = self.op.identity();
        loop {
            while i & 1 == 0 {
                i >>= 1;
            }
            let next = self.op.combine(&acc, &self.data[i]);
            if !pred(&next) {
                while i < self.half_len {
                    i <<= 1;
                    let next = self.op.combine(&acc, &self.data[i]);
                    if pred(&next) {
                        acc = next;
                        i += 1;
                    }
                }
                return i - self.half_len;
            }
            acc = next;
            i += 1;
            if i.is_power_of_two() {
                return self.len;
            }
        }
    }

    /// `pred(&self.query(l..r))`が`true`となる最小の`l`をO(log(n))で求める。
    #[track_caller]
    pub fn min_left<P>(&self, r: usize, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        bounds::check_end(r, self.len);
        debug_assert!(pred(&self.op.identity()));
        if r == 0 {
            return 0;
        }
        let mut i = r + self.half_len;
        let mut acc = self.op.identity();
        loop {
            i -= 1;
            while i > 1 && i & 1 == 1 {
                i >>= 1;
            }
            let next = self.op.combine(&self.data[i], &acc);
            if !pred(&next) {
                while i < self.half_len {
                    i = i * 2 + 1;
                    let next = self.op.combine(&self.data[i], &acc);
                    if pred(&next) {
                        acc = next;
                        i -= 1;
                    }
                }
                return i + 1 - self.half_len;
            }
            acc = next;
            if i.is_power_of_two() {
                return 0;
            }
        }
    }
}

pub struct ValMut<'a, T, OP: Monoid<Element = T>> {
    segtree: &'a mut Segtree<T, OP>,
    index: usize,
}

impl<'a, T, OP: Monoid<Element = T>> Deref for ValMut<'a, T, OP> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.segtree.data[self.index]
    }
}

impl<'a, T, OP: Monoid<Element = T>> DerefMut for ValMut<'a, T, OP> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.segtree.data[self.index]
    }
}

impl<'a, T, OP: Monoid<Element = T>> Drop for ValMut<'a, T, OP> {
    fn drop(&mut self) {
        self.segtree.update_val(self.index);
    }
}

impl<I, OP> FromIterator<I> for Segtree<I, OP>
where
    OP: Default + Monoid<Element = I>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::from_iter_op(iter, OP::default())
    }
}

impl<T, OP> From<Segtree<T, OP>> for Vec<T> {
    fn from(value: Segtree<T, OP>) -> Self {
        value.into_vec()
    }
}
