use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::Equatable;

/// A binary equality test, for collections that take their comparison as a value.
pub trait EqualityPredicate<K: ?Sized> {
    fn test(&self, left: &K, right: &K) -> bool;
}

impl<K: ?Sized, F: Fn(&K, &K) -> bool> EqualityPredicate<K> for F {
    fn test(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

/// Compares two shared references to `T` by the values they point at.
///
/// Both sides must be present. For keys that might be absent use
/// [`Equatable::equals_shared`] instead.
pub struct PtrsEqual<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> PtrsEqual<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Equatable + ?Sized> PtrsEqual<T> {
    pub fn call<L, R>(&self, left: &L, right: &R) -> bool
    where
        L: Deref<Target = T>,
        R: Deref<Target = T>,
    {
        (**left).equals(&**right)
    }

    /// The predicate as a closure, e.g. for `Vec::dedup_by` or `Iterator::position`.
    pub fn as_fn<P: Deref<Target = T>>(self) -> impl Fn(&P, &P) -> bool + Copy {
        move |left: &P, right: &P| self.call(left, right)
    }
}

impl<T: Equatable + ?Sized, P: Deref<Target = T>> EqualityPredicate<P> for PtrsEqual<T> {
    fn test(&self, left: &P, right: &P) -> bool {
        self.call(left, right)
    }
}

impl<T: ?Sized> Default for PtrsEqual<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for PtrsEqual<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: ?Sized> Copy for PtrsEqual<T> {}

impl<T: ?Sized> fmt::Debug for PtrsEqual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PtrsEqual<{}>", std::any::type_name::<T>())
    }
}

/// A shared reference that compares by value through [`PtrsEqual`].
///
/// Lets `Vec::contains`, `dedup` and friends treat `Arc<T>` keys as values.
#[derive(Clone, Debug, Default)]
#[repr(transparent)]
pub struct ByValue<P>(pub P);

impl<P> ByValue<P> {
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> From<P> for ByValue<P> {
    fn from(ptr: P) -> Self {
        Self(ptr)
    }
}

impl<P: Deref> Deref for ByValue<P> {
    type Target = P::Target;

    fn deref(&self) -> &P::Target {
        &self.0
    }
}

impl<P> PartialEq for ByValue<P>
where
    P: Deref,
    P::Target: Equatable,
{
    fn eq(&self, other: &Self) -> bool {
        PtrsEqual::<P::Target>::new().call(&self.0, &other.0)
    }
}

impl<P> Eq for ByValue<P>
where
    P: Deref,
    P::Target: Equatable + Eq,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;
    use std::rc::Rc;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct Field {
        name: String,
        nullable: bool,
    }

    impl Field {
        fn new(name: &str, nullable: bool) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                nullable,
            })
        }
    }

    impl Equatable for Field {
        fn equals(&self, other: &Self) -> bool {
            self.name == other.name && self.nullable == other.nullable
        }
    }

    assert_impl_all!(PtrsEqual<Field>: Send, Sync, Copy, Default);
    assert_impl_all!(PtrsEqual<str>: Send, Sync);
    assert_impl_all!(ByValue<Arc<Field>>: PartialEq, Send, Sync);

    #[test]
    fn compares_referents_not_addresses() {
        let eq = PtrsEqual::<Field>::new();
        let a = Field::new("id", false);
        let b = Field::new("id", false);
        let c = Field::new("id", true);

        assert!(!Arc::ptr_eq(&a, &b));
        assert!(eq.call(&a, &b));
        assert!(eq.call(&a, &a));
        assert!(!eq.call(&a, &c));
        assert!(eq.test(&b, &a));
    }

    #[test]
    fn mixes_pointer_kinds() {
        let eq = PtrsEqual::<Field>::new();
        let shared = Field::new("x", true);
        let boxed = Box::new(Field {
            name: "x".to_string(),
            nullable: true,
        });
        let local = Rc::new((*shared).clone());
        assert!(eq.call(&shared, &boxed));
        assert!(eq.call(&local, &boxed));
    }

    #[test]
    fn works_as_a_collection_policy() {
        let mut fields = vec![
            Field::new("a", false),
            Field::new("a", false),
            Field::new("b", false),
            Field::new("b", true),
            Field::new("b", true),
        ];
        let same = PtrsEqual::<Field>::new().as_fn::<Arc<Field>>();
        fields.dedup_by(|l, r| same(&*l, &*r));

        let names: Vec<_> = fields.iter().map(|f| (f.name.as_str(), f.nullable)).collect();
        assert_eq!(names, vec![("a", false), ("b", false), ("b", true)]);

        let needle = Field::new("b", true);
        assert_eq!(fields.iter().position(|f| same(f, &needle)), Some(2));
    }

    #[test]
    fn by_value_keys() {
        let keys: Vec<ByValue<Arc<Field>>> = vec![
            Field::new("a", false).into(),
            Field::new("b", false).into(),
        ];
        assert!(keys.contains(&ByValue(Field::new("b", false))));
        assert!(!keys.contains(&ByValue(Field::new("b", true))));
        assert_eq!(keys[0].name, "a");
    }

    #[test]
    fn closures_are_predicates() {
        let by_len = |l: &String, r: &String| l.len() == r.len();
        assert!(by_len.test(&"abc".to_string(), &"xyz".to_string()));
    }
}
