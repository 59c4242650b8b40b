#![deny(clippy::all)]
//! Value equality from a single comparison method.
//!
//! A type implements [`Equatable::equals`] once and gets the rest:
//! `==` / `!=` through [`equality_comparable!`], comparison against shared and
//! possibly absent references through [`Equatable::equals_shared`], and the
//! [`PtrsEqual`] predicate for collections of shared values.
//!
//! ```
//! use equatable::{equality_comparable, Equatable, PtrsEqual};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Equatable for Point {
//!     fn equals(&self, other: &Self) -> bool {
//!         self.x == other.x && self.y == other.y
//!     }
//! }
//! equality_comparable!(Point);
//!
//! let a = Point { x: 1, y: 2 };
//! assert!(a == Point { x: 1, y: 2 });
//! assert!(a != Point { x: 1, y: 3 });
//! assert!(!a.equals_shared::<Arc<Point>>(None));
//!
//! let shared = Arc::new(Point { x: 1, y: 2 });
//! assert!(a.equals_shared(Some(&shared)));
//! assert!(PtrsEqual::new().call(&shared, &Arc::new(Point { x: 1, y: 2 })));
//! ```
//!
//! A type that never implements the contract cannot opt in:
//!
//! ```compile_fail
//! use equatable::equality_comparable;
//!
//! struct Opaque(u8);
//! equality_comparable!(Opaque);
//! ```

pub mod contract;
pub mod error;
mod impls;
pub mod laws;
#[macro_use]
pub mod macros;
pub mod options;
pub mod ptrs_equal;

pub use contract::{Equatable, EquatableWith};
pub use error::EqualityError;
pub use options::EqualOptions;
pub use ptrs_equal::{ByValue, EqualityPredicate, PtrsEqual};

#[doc(hidden)]
pub mod __private {
    pub use pretty_assertions;
    pub use static_assertions;
}

#[cfg(feature = "native")]
static LOGS_INITIALISED: std::sync::Once = std::sync::Once::new();

#[cfg(feature = "native")]
fn build_logger(finish: impl FnOnce(&mut env_logger::Builder)) {
    LOGS_INITIALISED.call_once(|| {
        finish(
            env_logger::Builder::from_env(
                env_logger::Env::default()
                    .filter_or("RUST_LOG", "info")
                    .write_style_or("RUST_LOG_STYLE", "AUTO"),
            )
            .format_timestamp(None),
        );
    });
}

/// Sets up `env_logger` once per process. Safe to call from every test.
#[cfg(all(feature = "native", test))]
pub fn ensure_initialized() {
    build_logger(|env| {
        let _ = env.is_test(true).try_init();
    });
}
/// Sets up `env_logger` once per process. Safe to call from every test.
#[cfg(all(feature = "native", not(test)))]
pub fn ensure_initialized() {
    build_logger(|env| {
        let _ = env.try_init();
    });
}
#[cfg(not(feature = "native"))]
pub fn ensure_initialized() {}
