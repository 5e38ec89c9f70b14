pub mod check;
pub mod conflicts;
