use std::ops::Deref;

/// The one method a type writes to opt into value equality.
///
/// `equals` is expected to be reflexive, symmetric and free of side effects.
/// Nothing here enforces that; [`crate::laws`] can check it for a sample of values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement the value equality contract",
    label = "`{Self}` has no `Equatable::equals(&self, other: &Self) -> bool`",
    note = "implement `equatable::Equatable` for `{Self}` to derive `==`, `!=` and `PtrsEqual` from it"
)]
pub trait Equatable {
    fn equals(&self, other: &Self) -> bool;

    /// Compares against a shared reference that may be absent.
    ///
    /// An absent reference never equals anything, including another absent
    /// reference; types that want `None == None` have to say so themselves.
    fn equals_shared<P>(&self, other: Option<&P>) -> bool
    where
        P: Deref<Target = Self>,
    {
        match other {
            Some(other) => self.equals(&**other),
            None => {
                log::trace!(
                    "{} compared against an absent reference",
                    std::any::type_name::<Self>()
                );
                false
            }
        }
    }
}

/// Comparison that takes extra parameters, e.g. a float tolerance or a field mask.
///
/// A type may implement this for several `Extra` types, one per shape of
/// parameters it understands. Use a tuple to pass more than one.
pub trait EquatableWith<Extra>: Equatable {
    fn equals_with(&self, other: &Self, extra: Extra) -> bool;

    /// [`Equatable::equals_shared`], forwarding `extra` to [`EquatableWith::equals_with`].
    fn equals_shared_with<P>(&self, other: Option<&P>, extra: Extra) -> bool
    where
        P: Deref<Target = Self>,
    {
        match other {
            Some(other) => self.equals_with(&**other, extra),
            None => {
                log::trace!(
                    "{} compared against an absent reference",
                    std::any::type_name::<Self>()
                );
                false
            }
        }
    }
}
