/// Implements `==` and `!=` for types that implement [`crate::Equatable`].
///
/// `eq` calls `Equatable::equals`; `ne` keeps its default of `!(a == b)` so the
/// two operators cannot drift apart. Append `: Eq` to also mark the type `Eq`,
/// which is only correct if `equals` is reflexive.
///
/// ```
/// # use equatable::{equality_comparable, Equatable};
/// struct Id(u32);
/// struct Labelled<T>(T, &'static str);
///
/// impl Equatable for Id {
///     fn equals(&self, other: &Self) -> bool {
///         self.0 == other.0
///     }
/// }
/// impl<T: Equatable> Equatable for Labelled<T> {
///     fn equals(&self, other: &Self) -> bool {
///         self.0.equals(&other.0)
///     }
/// }
///
/// equality_comparable!(Id: Eq, [T: Equatable] Labelled<T>);
///
/// assert!(Labelled(Id(1), "a") == Labelled(Id(1), "b"));
/// ```
///
/// Generic types are held to the same contract:
///
/// ```compile_fail
/// # use equatable::equality_comparable;
/// struct Wrapper<T>(T);
///
/// equality_comparable!([T] Wrapper<T>);
/// ```
#[macro_export]
macro_rules! equality_comparable(
    {} => {};
    { @partial_eq [$($gen: tt)*] $t: ty } => {
        impl<$($gen)*> ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                <Self as $crate::Equatable>::equals(self, other)
            }
        }
    };
    { [$($gen: tt)*] $t: ty : Eq $(, $($rest: tt)*)? } => {
        $crate::equality_comparable!(@partial_eq [$($gen)*] $t);
        impl<$($gen)*> ::core::cmp::Eq for $t {}
        $crate::equality_comparable!($($($rest)*)?);
    };
    { [$($gen: tt)*] $t: ty $(, $($rest: tt)*)? } => {
        $crate::equality_comparable!(@partial_eq [$($gen)*] $t);
        $crate::equality_comparable!($($($rest)*)?);
    };
    { $t: ty : Eq $(, $($rest: tt)*)? } => {
        $crate::__private::static_assertions::assert_impl_all!($t: $crate::Equatable);
        $crate::equality_comparable!(@partial_eq [] $t);
        impl ::core::cmp::Eq for $t {}
        $crate::equality_comparable!($($($rest)*)?);
    };
    { $t: ty $(, $($rest: tt)*)? } => {
        $crate::__private::static_assertions::assert_impl_all!($t: $crate::Equatable);
        $crate::equality_comparable!(@partial_eq [] $t);
        $crate::equality_comparable!($($($rest)*)?);
    };
);

#[cfg(test)]
mod tests {
    use crate::Equatable;
    use pretty_assertions::assert_eq;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::cell::Cell;

    thread_local! {
        static EQUALS_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Equatable for Point {
        fn equals(&self, other: &Self) -> bool {
            EQUALS_CALLS.with(|calls| calls.set(calls.get() + 1));
            self.x == other.x && self.y == other.y
        }
    }

    /// Equal when the lengths match, whatever the contents.
    #[derive(Debug)]
    struct Shape<T>(Vec<T>);

    impl<T> Equatable for Shape<T> {
        fn equals(&self, other: &Self) -> bool {
            self.0.len() == other.0.len()
        }
    }

    #[derive(Debug)]
    struct Tagged<T> {
        value: T,
        tag: u8,
    }

    impl<T: Equatable> Equatable for Tagged<T> {
        fn equals(&self, other: &Self) -> bool {
            self.value.equals(&other.value)
        }
    }

    struct NotComparable;

    crate::equality_comparable!(
        Point: Eq,
        [T] Shape<T>,
        [T: Equatable] Tagged<T>,
    );

    assert_impl_all!(Point: PartialEq, Eq);
    assert_impl_all!(Shape<f64>: PartialEq);
    assert_not_impl_any!(Shape<f64>: Eq);
    assert_not_impl_any!(NotComparable: Equatable, PartialEq);

    #[test]
    fn operators_follow_equals() {
        EQUALS_CALLS.with(|calls| calls.set(0));
        let a = Point { x: 1, y: 2 };

        assert!(a == Point { x: 1, y: 2 });
        assert!(a != Point { x: 1, y: 3 });
        assert!(!(a != Point { x: 1, y: 2 }));
        assert_eq!(EQUALS_CALLS.with(Cell::get), 3, "Every operator should go through equals");
    }

    #[test]
    fn generic_types_use_their_own_equals() {
        assert!(Shape(vec![1.0, 2.0]) == Shape(vec![3.0, f64::NAN]));
        assert!(Shape(vec![1.0]) != Shape(vec![]));

        let left = Tagged {
            value: Point { x: 0, y: 0 },
            tag: 1,
        };
        let right = Tagged {
            value: Point { x: 0, y: 0 },
            tag: 2,
        };
        assert_eq!(left, right);
        assert!(left.tag != right.tag);
    }
}
