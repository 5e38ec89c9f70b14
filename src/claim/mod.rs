mod claim;
mod error;
mod id;
mod predicates;

pub use claim::Claim;
pub use error::{Axis, ClaimError};
pub use id::ClaimId;
pub use predicates::range_intersect;
