use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum EqualityError {
    InvalidTolerance {
        atol: f64,
    },
    NotReflexive {
        value: String,
    },
    NotSymmetric {
        left: String,
        right: String,
    },
    OperatorMismatch {
        left: String,
        right: String,
        equals: bool,
        operator: bool,
    },
}

impl std::fmt::Display for EqualityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use EqualityError::*;
        match self {
            InvalidTolerance { atol } => write!(
                f,
                "Absolute tolerance must be finite and non-negative, got {atol}"
            ),
            NotReflexive { value } => write!(f, "Value is not equal to itself: {value}"),
            NotSymmetric { left, right } => write!(
                f,
                "Comparison is not symmetric between {left} and {right}"
            ),
            OperatorMismatch {
                left,
                right,
                equals,
                operator,
            } => write!(
                f,
                "`==` returned {operator} but `equals` returned {equals} for {left} and {right}"
            ),
        }
    }
}
