//! Descriptor construction sugar.
//!
//! [`Ops`](crate::desc::Ops) and [`Decls`](crate::desc::Decls) are plain
//! structs with `NONE` constants; these macros are struct-update shorthand
//! where a bare field name means "supported". Both expand to const
//! expressions.

// =============================================================================
// ops! - Operation set shorthand
// =============================================================================

/// Build an [`Ops`](crate::desc::Ops) value.
///
/// A bare boolean field means `true`; payload fields take an expression:
///
/// ```
/// use tola_cursor::{ops, Ty};
///
/// const ELEM: Ty = Ty::Named("i32");
/// const OPS: tola_cursor::desc::Ops = ops! {
///     deref: Some(Ty::Ref(&ELEM)),
///     pre_inc,
///     eq,
///     copyable,
/// };
/// assert!(OPS.eq && !OPS.ord);
/// ```
#[macro_export]
macro_rules! ops {
    ( $($field:ident $(: $value:expr)?),* $(,)? ) => {
        $crate::desc::Ops {
            $( $field: $crate::ops!(@value $($value)?), )*
            ..$crate::desc::Ops::NONE
        }
    };
    (@value) => { true };
    (@value $value:expr) => { $value };
}

// =============================================================================
// decls! - Self-declaration shorthand
// =============================================================================

/// Build a [`Decls`](crate::desc::Decls) value.
///
/// ```
/// use tola_cursor::{decls, Tier, Ty};
///
/// const DECLS: tola_cursor::desc::Decls = decls! {
///     category: Some(Tier::Forward),
///     value_type: Some(Ty::Named("i32")),
/// };
/// assert!(DECLS.concept.is_none());
/// ```
#[macro_export]
macro_rules! decls {
    ( $($slot:ident: $value:expr),* $(,)? ) => {
        $crate::desc::Decls {
            $( $slot: $value, )*
            ..$crate::desc::Decls::NONE
        }
    };
}
