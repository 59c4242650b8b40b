use std::rc::Rc;
use std::sync::Arc;

use crate::{Equatable, EquatableWith};

macro_rules! exact_equality(
    { $($t: ty),* } => {
        $(
            impl Equatable for $t {
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
);

exact_equality!(
    (), bool, char, str, String, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl<T: Equatable> Equatable for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(l, r)| l.equals(r))
    }
}

impl<T: EquatableWith<E>, E: Copy> EquatableWith<E> for [T] {
    fn equals_with(&self, other: &Self, extra: E) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(l, r)| l.equals_with(r, extra))
    }
}

impl<T: Equatable, const N: usize> Equatable for [T; N] {
    fn equals(&self, other: &Self) -> bool {
        self[..].equals(&other[..])
    }
}

impl<T: EquatableWith<E>, E: Copy, const N: usize> EquatableWith<E> for [T; N] {
    fn equals_with(&self, other: &Self, extra: E) -> bool {
        self[..].equals_with(&other[..], extra)
    }
}

impl<T: Equatable> Equatable for Vec<T> {
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: EquatableWith<E>, E: Copy> EquatableWith<E> for Vec<T> {
    fn equals_with(&self, other: &Self, extra: E) -> bool {
        self.as_slice().equals_with(other.as_slice(), extra)
    }
}

/// Optional values, not references: two `None`s are equal here.
impl<T: Equatable> Equatable for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(l), Some(r)) => l.equals(r),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: EquatableWith<E>, E> EquatableWith<E> for Option<T> {
    fn equals_with(&self, other: &Self, extra: E) -> bool {
        match (self, other) {
            (Some(l), Some(r)) => l.equals_with(r, extra),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! tuple_equality(
    { $(($($name: ident . $idx: tt),+))* } => {
        $(
            impl<$($name: Equatable),+> Equatable for ($($name,)+) {
                fn equals(&self, other: &Self) -> bool {
                    $(self.$idx.equals(&other.$idx))&&+
                }
            }
        )*
    };
);

tuple_equality!((A.0) (A.0, B.1) (A.0, B.1, C.2) (A.0, B.1, C.2, D.3));

macro_rules! pointee_equality(
    { $($ptr: ident),* } => {
        $(
            impl<T: Equatable + ?Sized> Equatable for $ptr<T> {
                fn equals(&self, other: &Self) -> bool {
                    (**self).equals(&**other)
                }
            }

            impl<T: EquatableWith<E> + ?Sized, E> EquatableWith<E> for $ptr<T> {
                fn equals_with(&self, other: &Self, extra: E) -> bool {
                    (**self).equals_with(&**other, extra)
                }
            }
        )*
    };
);

pointee_equality!(Box, Rc, Arc);
