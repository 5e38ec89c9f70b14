#![doc = "Territory claim validation: rectangle geometry, rival buffers and per-faction contiguity"]
mod claim;
mod io;
mod report;
mod validator;

#[doc(inline)]
pub use claim::{Axis, Claim, ClaimError, ClaimId, range_intersect};

#[doc(inline)]
pub use validator::{Conflict, ConflictError, ConflictKind, Connectivity, Validator};

#[doc(inline)]
pub use io::{Record, load_validator, parse_record, read_claims, read_claims_str};

#[doc(inline)]
pub use report::{ConflictReport, FactionReport, Report};
