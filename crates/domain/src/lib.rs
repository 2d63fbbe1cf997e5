//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod filter;
mod user;

pub use filter::{LIKE_ESCAPE, UserFilter, like_contains_pattern};
pub use user::{
    USER_DELETED_MESSAGE, USER_NAMES_REQUIRED_MESSAGE, USER_NOT_FOUND_MESSAGE, UserId, UserPatch,
    UserRecord,
};
