use std::fmt;

use serde::Serialize;

/// Identifies a single claim within a `Validator`.
///
/// Claims are assigned contiguous indices starting from `0` in the order they
/// were added, so two claims with identical bounds and faction still receive
/// distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClaimId(pub u32);

impl ClaimId {
    /// Position of this claim in the validator's arena.
    #[inline] pub fn index(self) -> usize { self.0 as usize }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
