use crate::{EqualityError, Equatable, EquatableWith};

pub const DEFAULT_ATOL: f64 = 1e-5;

/// How floating point values compare when passed to [`EquatableWith::equals_with`].
///
/// Plain [`Equatable::equals`] on floats stays exact IEEE equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EqualOptions {
    nans_equal: bool,
    signed_zeros_equal: bool,
    atol: f64,
    use_atol: bool,
}

impl Default for EqualOptions {
    fn default() -> Self {
        Self {
            nans_equal: false,
            signed_zeros_equal: true,
            atol: DEFAULT_ATOL,
            use_atol: false,
        }
    }
}

impl EqualOptions {
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Whether NaN compares equal to NaN.
    pub fn nans_equal(&self) -> bool {
        self.nans_equal
    }
    /// Whether `+0.0` compares equal to `-0.0`.
    pub fn signed_zeros_equal(&self) -> bool {
        self.signed_zeros_equal
    }
    pub fn atol(&self) -> f64 {
        self.atol
    }
    pub fn use_atol(&self) -> bool {
        self.use_atol
    }

    pub fn with_nans_equal(mut self, nans_equal: bool) -> Self {
        self.nans_equal = nans_equal;
        self
    }

    pub fn with_signed_zeros_equal(mut self, signed_zeros_equal: bool) -> Self {
        self.signed_zeros_equal = signed_zeros_equal;
        self
    }

    pub fn with_use_atol(mut self, use_atol: bool) -> Self {
        self.use_atol = use_atol;
        self
    }

    /// Sets the absolute tolerance and turns approximate comparison on.
    pub fn with_atol(mut self, atol: f64) -> Result<Self, EqualityError> {
        if !atol.is_finite() || atol < 0.0 {
            return Err(EqualityError::InvalidTolerance { atol });
        }
        self.atol = atol;
        self.use_atol = true;
        Ok(self)
    }
}

macro_rules! float_equality(
    { $($t: ty),* } => {
        $(
            impl Equatable for $t {
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl EquatableWith<&EqualOptions> for $t {
                #[allow(clippy::useless_conversion)]
                fn equals_with(&self, other: &Self, options: &EqualOptions) -> bool {
                    let (a, b) = (*self, *other);
                    if a.is_nan() || b.is_nan() {
                        return options.nans_equal && a.is_nan() && b.is_nan();
                    }
                    // inf - inf is NaN, so mismatched infinities fail the tolerance
                    if options.use_atol && f64::from((a - b).abs()) <= options.atol {
                        return true;
                    }
                    if a == 0.0 && b == 0.0 {
                        return options.signed_zeros_equal
                            || a.is_sign_negative() == b.is_sign_negative();
                    }
                    a == b
                }
            }
        )*
    };
);

float_equality!(f32, f64);
