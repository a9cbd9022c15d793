//! Candidate query normalization (verb module)
//!
//! Best-effort repair of the structured reply coming from the translation
//! service: malformed predicate entries are dropped one by one, never the
//! whole query.

mod error;
mod normalize;
mod types;

pub use error::NormalizeError;
pub use normalize::normalize_reply;
pub use types::{CandidateQuery, CandidateReply};
