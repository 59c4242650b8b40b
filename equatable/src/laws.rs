//! Checks for what [`Equatable`] expects of its implementors but cannot enforce.
//!
//! Useful in an adopting type's tests, over a handful of representative values
//! (include the empty and default ones).

use std::fmt::Debug;

use crate::{EqualityError, Equatable};

pub fn check_reflexive<T: Equatable + Debug>(values: &[T]) -> Result<(), EqualityError> {
    for value in values {
        if !value.equals(value) {
            return Err(EqualityError::NotReflexive {
                value: format!("{value:?}"),
            });
        }
    }
    Ok(())
}

pub fn check_symmetric<T: Equatable + Debug>(values: &[T]) -> Result<(), EqualityError> {
    for (i, left) in values.iter().enumerate() {
        for right in &values[i + 1..] {
            if left.equals(right) != right.equals(left) {
                return Err(EqualityError::NotSymmetric {
                    left: format!("{left:?}"),
                    right: format!("{right:?}"),
                });
            }
        }
    }
    Ok(())
}

/// `==` must agree with `equals` and `!=` must be its negation, for every ordered pair.
pub fn check_operators<T: Equatable + PartialEq + Debug>(values: &[T]) -> Result<(), EqualityError> {
    for left in values {
        for right in values {
            let equals = left.equals(right);
            let operator = left == right;
            if operator != equals || (left != right) == operator {
                return Err(EqualityError::OperatorMismatch {
                    left: format!("{left:?}"),
                    right: format!("{right:?}"),
                    equals,
                    operator,
                });
            }
        }
    }
    Ok(())
}

pub fn check_laws<T: Equatable + PartialEq + Debug>(values: &[T]) -> Result<(), EqualityError> {
    log::debug!(
        "Checking equality laws for {} over {} values",
        std::any::type_name::<T>(),
        values.len()
    );
    check_reflexive(values)?;
    check_symmetric(values)?;
    check_operators(values)
}

/// Asserts [`check_laws`] over the given values, showing the violation as a diff.
#[macro_export]
macro_rules! assert_equality_laws {
    ($($value: expr),+ $(,)?) => {
        $crate::__private::pretty_assertions::assert_eq!(
            $crate::laws::check_laws(&[$($value),+]),
            Ok(()),
            "Equality laws should hold"
        );
    };
}
