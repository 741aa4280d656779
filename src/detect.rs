//! # Layer 2b: Structural Seeding
//!
//! Inherent-const fallback detection for the descriptor bits that map onto
//! standard traits. When the candidate is an actual Rust type, four of its
//! operation bits are mechanically observable:
//!
//! | trait | descriptor bit |
//! |---|---|
//! | `Clone` | `copyable` |
//! | `Default` | `default_ctor` |
//! | `PartialEq` | `eq` |
//! | `Ord` | `ord` |
//!
//! ## How it works
//!
//! For each trait:
//! 1. a fallback trait carries `const IS_X: bool = false`, implemented for
//!    `Detect<T>` for all `T`;
//! 2. an inherent `IS_X = true` exists on `Detect<T>` where `T` satisfies
//!    the bound.
//!
//! Resolving `Detect::<Concrete>::IS_X` finds the inherent const when the
//! bound holds and the trait const otherwise.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site, not in
//! generic contexts. The remaining operation bits (increment, dereference
//! payloads, ...) have no structural analog and stay hand-maintained.
//!
//! ```
//! use tola_cursor::{seed, ops};
//! use tola_cursor::desc::Ops;
//!
//! #[derive(Clone, Default, PartialEq)]
//! struct Cursor(usize);
//!
//! let hand_written: Ops = ops! { pre_inc };
//! let seeded = hand_written.with_seed(seed!(Cursor));
//! assert!(seeded.copyable && seeded.default_ctor && seeded.eq);
//! assert!(!seeded.ord);
//! ```

use core::marker::PhantomData;

use crate::desc::Ops;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

// =============================================================================
// Trait Detection (generated)
// =============================================================================

/// Generate fallback trait + inherent const for one detected trait.
macro_rules! impl_detect {
    ($Trait:ident => $CONST:ident) => {
        paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

impl_detect!(Clone => IS_COPYABLE);
impl_detect!(Default => IS_DEFAULT_CTOR);
impl_detect!(PartialEq => IS_EQ);
impl_detect!(Ord => IS_ORD);

// =============================================================================
// Seeding
// =============================================================================

/// The structurally observable operation bits of a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpsSeed {
    pub copyable: bool,
    pub default_ctor: bool,
    pub eq: bool,
    pub ord: bool,
}

impl Ops {
    /// Merge structurally detected bits into an operation set.
    pub const fn with_seed(self, seed: OpsSeed) -> Ops {
        Ops {
            copyable: seed.copyable,
            default_ctor: seed.default_ctor,
            eq: seed.eq,
            ord: seed.ord,
            ..self
        }
    }
}

/// Detect the [`OpsSeed`] of a concrete type.
///
/// ```
/// use tola_cursor::seed;
///
/// assert!(seed!(i32).ord);
/// assert!(!seed!(f64).ord); // PartialOrd only
/// ```
#[macro_export]
macro_rules! seed {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::{
            CloneFallback as _, DefaultFallback as _, OrdFallback as _, PartialEqFallback as _,
        };
        $crate::detect::OpsSeed {
            copyable: $crate::detect::Detect::<$T>::IS_COPYABLE,
            default_ctor: $crate::detect::Detect::<$T>::IS_DEFAULT_CTOR,
            eq: $crate::detect::Detect::<$T>::IS_EQ,
            ord: $crate::detect::Detect::<$T>::IS_ORD,
        }
    }};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    #[test]
    fn test_seed_std_types() {
        let int = seed!(i32);
        assert!(int.copyable && int.default_ctor && int.eq && int.ord);

        let float = seed!(f64);
        assert!(float.copyable && float.eq);
        assert!(!float.ord);
    }

    #[test]
    fn test_seed_is_const_evaluable() {
        struct Opaque;
        const SEED: crate::detect::OpsSeed = seed!(Opaque);
        assert!(!SEED.copyable && !SEED.default_ctor && !SEED.eq && !SEED.ord);
    }
}
