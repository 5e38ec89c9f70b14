//! Reading claim records from whitespace-delimited text.
//!
//! Each non-blank line holds one record, `faction x1 y1 x2 y2`. Lines starting
//! with `#` are comments.

mod records;

pub use records::{Record, load_validator, parse_record, read_claims, read_claims_str};
