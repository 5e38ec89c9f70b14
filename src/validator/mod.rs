mod conflicts;
mod connectivity;
mod validator;

pub use conflicts::{Conflict, ConflictError, ConflictKind};
pub use connectivity::Connectivity;
pub use validator::Validator;
