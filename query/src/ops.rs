use std::{
    marker::PhantomData,
    ops::{self, AddAssign, Neg, Sub},
};

use crate::{Commutative, Group, Monoid};

pub trait Zero {
    const ZERO: Self;
}

pub trait One {
    const ONE: Self;
}

pub trait Bounded {
    const MIN: Self;
    const MAX: Self;
}

macro_rules! impl_trait_integer {
    ($($t:ty),*) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }
            impl One for $t {
                const ONE: Self = 1;
            }
            impl Bounded for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_trait_integer!(i8, i16, i32, i64, i128, isize);
impl_trait_integer!(u8, u16, u32, u64, u128, usize);

macro_rules! marker_op {
    ($($name:ident),*) => {
        $(
            pub struct $name<T>(PhantomData<fn() -> T>);

            impl<T> $name<T> {
                pub const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<T> Default for $name<T> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T> Copy for $name<T> {}

            impl<T> std::fmt::Debug for $name<T> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )*
    };
}

marker_op!(Sum, Product, Min, Max, Xor);

impl<T> Monoid for Sum<T>
where
    T: Clone + ops::Add<Output = T> + AddAssign + Zero,
{
    type Element = T;

    fn identity(&self) -> T {
        T::ZERO
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }

    fn combine_assign_left(&self, acc: &mut T, b: &T) {
        *acc += b.clone();
    }

    fn combine_assign_right(&self, a: &T, acc: &mut T) {
        *acc += a.clone();
    }
}

impl<T> Commutative for Sum<T> where Sum<T>: Monoid<Element = T> {}

impl<T> Group for Sum<T>
where
    Sum<T>: Monoid<Element = T>,
    T: Clone + Neg<Output = T> + Sub<Output = T>,
{
    fn inverse(&self, a: &T) -> T {
        -a.clone()
    }

    fn combine_inverse(&self, a: &T, b: &T) -> T {
        a.clone() - b.clone()
    }
}

impl<T> Monoid for Product<T>
where
    T: Clone + ops::Mul<Output = T> + One,
{
    type Element = T;

    fn identity(&self) -> T {
        T::ONE
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() * b.clone()
    }
}

impl<T> Commutative for Product<T> where Product<T>: Monoid<Element = T> {}

impl<T> Monoid for Min<T>
where
    T: Ord + Clone + Bounded,
{
    type Element = T;

    fn identity(&self) -> T {
        T::MAX
    }

    fn combine(&self, a: &T, b: &T) -> T {
        if b < a {
            b.clone()
        } else {
            a.clone()
        }
    }
}

impl<T> Commutative for Min<T> where Min<T>: Monoid<Element = T> {}

impl<T> Monoid for Max<T>
where
    T: Ord + Clone + Bounded,
{
    type Element = T;

    fn identity(&self) -> T {
        T::MIN
    }

    fn combine(&self, a: &T, b: &T) -> T {
        if b > a {
            b.clone()
        } else {
            a.clone()
        }
    }
}

impl<T> Commutative for Max<T> where Max<T>: Monoid<Element = T> {}

impl<T> Monoid for Xor<T>
where
    T: Clone + ops::BitXor<Output = T> + Zero,
{
    type Element = T;

    fn identity(&self) -> T {
        T::ZERO
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() ^ b.clone()
    }
}

impl<T> Commutative for Xor<T> where Xor<T>: Monoid<Element = T> {}

impl<T> Group for Xor<T>
where
    Xor<T>: Monoid<Element = T>,
    T: Clone,
{
    fn inverse(&self, a: &T) -> T {
        a.clone()
    }
}

/// `()`上の自明な群。値を持たない構造に渡す。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Noop;

impl Monoid for Noop {
    type Element = ();

    fn identity(&self) {}

    fn combine(&self, _: &(), _: &()) {}

    fn combine_assign_left(&self, _: &mut (), _: &()) {}

    fn combine_assign_right(&self, _: &(), _: &mut ()) {}
}

impl Commutative for Noop {}

impl Group for Noop {
    fn inverse(&self, _: &()) {}

    fn combine_inverse(&self, _: &(), _: &()) {}
}

/// 文字列の連結。交換則は成り立たない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl Monoid for Concat {
    type Element = String;

    fn identity(&self) -> String {
        String::new()
    }

    fn combine(&self, a: &String, b: &String) -> String {
        let mut s = String::with_capacity(a.len() + b.len());
        s.push_str(a);
        s.push_str(b);
        s
    }

    fn combine_assign_left(&self, acc: &mut String, b: &String) {
        acc.push_str(b);
    }

    fn combine_assign_right(&self, a: &String, acc: &mut String) {
        acc.insert_str(0, a);
    }
}
