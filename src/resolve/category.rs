//! Category resolution and the trust/verify policy.
//!
//! Precedence under [`Policy::Trust`] (first match wins):
//!
//! 1. the self-declared `iterator_concept` slot, returned unverified;
//! 2. the self-declared `iterator_category` slot, returned unverified;
//! 3. the strongest mechanically probed tier;
//! 4. nothing — the candidate is not an iterator shape.
//!
//! Trusting declarations over mechanical evidence preserves compatibility
//! with hand-written categories that under- or over-claim. [`Policy::Verify`]
//! is the opposite contract: the category comes from probed evidence only,
//! and declarations never raise or lower it. Either way, [`diagnose`]
//! reports declaration/evidence disagreements for callers who opt in.

use crate::desc::CursorDesc;
use crate::probe::Probe;
use crate::tier::Tier;

// =============================================================================
// Policy
// =============================================================================

/// How self-declared categories interact with probed evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Trust `iterator_concept` / `iterator_category` slots without
    /// re-verification. The legacy-compatible default.
    #[default]
    Trust,
    /// Resolve from probed capabilities only; declarations are ignored for
    /// the category (but still surface through [`diagnose`]).
    Verify,
}

// =============================================================================
// Resolution
// =============================================================================

/// The resolved category, or `None` for a candidate that reaches no tier.
pub const fn category(desc: &CursorDesc, policy: Policy) -> Option<Tier> {
    match policy {
        Policy::Trust => match desc.decls.declared_tier() {
            Some(declared) => Some(declared),
            None => Probe::new(desc).strongest(),
        },
        Policy::Verify => Probe::new(desc).strongest(),
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// A declaration that disagrees with mechanical evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// What the candidate claims (`iterator_concept` slot, else
    /// `iterator_category`).
    pub declared: Tier,
    /// The strongest tier its operations actually support.
    pub probed: Option<Tier>,
}

impl Mismatch {
    /// The declaration claims more than the operations support.
    pub const fn is_overclaim(&self) -> bool {
        match self.probed {
            Some(probed) => self.declared.rank() > probed.rank(),
            None => true,
        }
    }

    /// The declaration claims less than the operations support.
    pub const fn is_underclaim(&self) -> bool {
        match self.probed {
            Some(probed) => self.declared.rank() < probed.rank(),
            None => false,
        }
    }
}

impl core::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.probed {
            Some(probed) => write!(
                f,
                "declared {} but operations support {}",
                self.declared, probed
            ),
            None => write!(
                f,
                "declared {} but operations support no tier",
                self.declared
            ),
        }
    }
}

/// Compare the candidate's declaration against probed evidence.
///
/// `None` when the candidate declares nothing, or when declaration and
/// evidence agree. Policy-independent: `Trust` callers can still ask.
pub const fn diagnose(desc: &CursorDesc) -> Option<Mismatch> {
    let declared = match desc.decls.declared_tier() {
        Some(tier) => tier,
        None => return None,
    };
    let probed = Probe::new(desc).strongest();
    let agrees = match probed {
        Some(tier) => tier.rank() == declared.rank(),
        None => false,
    };
    if agrees {
        None
    } else {
        Some(Mismatch { declared, probed })
    }
}
