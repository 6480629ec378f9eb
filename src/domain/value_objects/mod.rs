//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod delimiter;
mod hash;
mod identifier;

pub use delimiter::{
    choose_delimiter, choose_delimiter_within, delimiter_candidates, Delimiter, DelimiterChoice,
    DEFAULT_DELIMITER, MAX_DELIMITER_CANDIDATES,
};
pub use hash::ContentHash;
pub use identifier::{Identifier, InvalidIdentifier};
