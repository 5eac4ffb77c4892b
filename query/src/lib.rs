pub mod ops;
pub use ops::{Concat, Max, Min, Noop, Product, Sum, Xor};

use std::ops::Deref;

/// モノイドの性質を満たす二項演算
///
/// # モノイドであるための条件
/// * 任意の元`a,b,c`に対して、`(a * b) * c = a * (b * c)`が成り立つ。(結合則)
/// * ある元`e`が存在して、任意の元`a`に対して、`e * a = a * e = a`が成り立つ。(単位元の存在)
///
/// 交換則は要求しない。
pub trait Monoid {
    type Element: Clone;

    fn identity(&self) -> Self::Element;

    fn combine(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `acc = acc * b`
    fn combine_assign_left(&self, acc: &mut Self::Element, b: &Self::Element) {
        *acc = self.combine(acc, b);
    }

    /// `acc = a * acc`
    fn combine_assign_right(&self, a: &Self::Element, acc: &mut Self::Element) {
        *acc = self.combine(a, acc);
    }

    fn assume_commutative(self) -> CommutativeOp<Self>
    where
        Self: Sized,
    {
        CommutativeOp(self)
    }
}

impl<M: Monoid> Monoid for &M {
    type Element = M::Element;

    fn identity(&self) -> Self::Element {
        (*self).identity()
    }

    fn combine(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (*self).combine(a, b)
    }

    fn combine_assign_left(&self, acc: &mut Self::Element, b: &Self::Element) {
        (*self).combine_assign_left(acc, b);
    }

    fn combine_assign_right(&self, a: &Self::Element, acc: &mut Self::Element) {
        (*self).combine_assign_right(a, acc);
    }
}

/// 群の性質を満たす二項演算
///
/// # 群であるための条件
/// * 二項演算はモノイドである。
/// * 任意の元`a`に対して、ある元`b`が存在して、`a * b = b * a = e`が成り立つ。(逆元の存在)
pub trait Group: Monoid {
    /// `self.combine(&a, &self.inverse(&a)) == self.identity()`を満たす必要がある。
    fn inverse(&self, a: &Self::Element) -> Self::Element;

    /// `a * b^-1`
    fn combine_inverse(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.combine(a, &self.inverse(b))
    }
}

impl<G: Group> Group for &G {
    fn inverse(&self, a: &Self::Element) -> Self::Element {
        (*self).inverse(a)
    }

    fn combine_inverse(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (*self).combine_inverse(a, b)
    }
}

/// 任意の元`a,b`に対して、`a * b = b * a`が成り立つ。
pub trait Commutative: Monoid {}

impl<M: Commutative> Commutative for &M {}

/// 単位元と二項演算のクロージャから作るモノイド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonoidOp<T, F> {
    identity: T,
    op: F,
}

impl<T: Clone, F: Fn(&T, &T) -> T> MonoidOp<T, F> {
    pub fn new(identity: T, op: F) -> Self {
        Self { identity, op }
    }
}

impl<T: Clone, F: Fn(&T, &T) -> T> Monoid for MonoidOp<T, F> {
    type Element = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        (self.op)(a, b)
    }
}

/// モノイドに逆元のクロージャを加えた群
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GroupOp<M, IF> {
    monoid: M,
    inv: IF,
}

impl<M: Monoid, IF: Fn(&M::Element) -> M::Element> GroupOp<M, IF> {
    pub fn new(monoid: M, inv: IF) -> Self {
        Self { monoid, inv }
    }
}

impl<M: Monoid, IF: Fn(&M::Element) -> M::Element> Monoid for GroupOp<M, IF> {
    type Element = M::Element;

    fn identity(&self) -> M::Element {
        self.monoid.identity()
    }

    fn combine(&self, a: &M::Element, b: &M::Element) -> M::Element {
        self.monoid.combine(a, b)
    }

    fn combine_assign_left(&self, acc: &mut M::Element, b: &M::Element) {
        self.monoid.combine_assign_left(acc, b);
    }

    fn combine_assign_right(&self, a: &M::Element, acc: &mut M::Element) {
        self.monoid.combine_assign_right(a, acc);
    }
}

impl<M: Monoid, IF: Fn(&M::Element) -> M::Element> Group for GroupOp<M, IF> {
    fn inverse(&self, a: &M::Element) -> M::Element {
        (self.inv)(a)
    }
}

impl<M: Commutative, IF: Fn(&M::Element) -> M::Element> Commutative for GroupOp<M, IF> {}

/// 交換則が成り立つと仮定したモノイド。`Monoid::assume_commutative`で作る。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CommutativeOp<M>(M);

impl<M> Deref for CommutativeOp<M> {
    type Target = M;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<M> CommutativeOp<M> {
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M: Monoid> Monoid for CommutativeOp<M> {
    type Element = M::Element;

    fn identity(&self) -> M::Element {
        self.0.identity()
    }

    fn combine(&self, a: &M::Element, b: &M::Element) -> M::Element {
        self.0.combine(a, b)
    }

    fn combine_assign_left(&self, acc: &mut M::Element, b: &M::Element) {
        self.0.combine_assign_left(acc, b);
    }

    fn combine_assign_right(&self, a: &M::Element, acc: &mut M::Element) {
        self.0.combine_assign_right(a, acc);
    }
}

impl<M: Monoid> Commutative for CommutativeOp<M> {}

impl<M: Group> Group for CommutativeOp<M> {
    fn inverse(&self, a: &M::Element) -> M::Element {
        self.0.inverse(a)
    }

    fn combine_inverse(&self, a: &M::Element, b: &M::Element) -> M::Element {
        self.0.combine_inverse(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold<M: Monoid>(op: &M, xs: &[M::Element]) -> M::Element {
        let mut acc = op.identity();
        for x in xs {
            op.combine_assign_left(&mut acc, x);
        }
        acc
    }

    #[test]
    fn monoid_op_test() {
        let gcd = MonoidOp::new(0u64, |&a: &u64, &b: &u64| {
            let (mut a, mut b) = (a, b);
            while b != 0 {
                (a, b) = (b, a % b);
            }
            a
        });
        assert_eq!(gcd.identity(), 0);
        assert_eq!(fold(&gcd, &[12, 18, 30]), 6);
        assert_eq!(fold(&gcd, &[]), 0);
    }

    #[test]
    fn assign_order_test() {
        let concat = Concat;
        let mut acc = "b".to_string();
        concat.combine_assign_left(&mut acc, &"c".to_string());
        concat.combine_assign_right(&"a".to_string(), &mut acc);
        assert_eq!(acc, "abc");
    }

    #[test]
    fn group_op_test() {
        // (a, b): x -> a x + b の合成。a = ±1 に限れば逆元がある。
        let affine = MonoidOp::new((1i64, 0i64), |&(a1, b1): &(i64, i64), &(a2, b2): &(i64, i64)| {
            (a1 * a2, a2 * b1 + b2)
        });
        let group = GroupOp::new(affine, |&(a, b): &(i64, i64)| (a, -a * b));
        let x = (-1, 5);
        assert_eq!(group.combine(&x, &group.inverse(&x)), group.identity());
        assert_eq!(group.combine_inverse(&x, &x), group.identity());

        let y = (1, -3);
        let xy = group.combine(&x, &y);
        assert_eq!(group.combine_inverse(&xy, &y), x);
    }

    #[test]
    fn commutative_op_test() {
        fn requires_commutative<M: Commutative>(op: M, a: &M::Element, b: &M::Element) -> M::Element {
            op.combine(a, b)
        }
        let add = MonoidOp::new(0i32, |a: &i32, b: &i32| a + b).assume_commutative();
        assert_eq!(requires_commutative(&add, &3, &4), 7);
        assert_eq!(add.into_inner().identity(), 0);
    }
}
