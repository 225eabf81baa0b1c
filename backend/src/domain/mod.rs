//! Domain primitives, services, and ports.
//!
//! Purpose: define the user record and its rules, the data-access use cases
//! over it, and the ports through which adapters plug in. Nothing in here
//! depends on actix or diesel.
//!
//! Public surface:
//! - `User` and its drafts: the record shape and validation rules.
//! - `UserDirectoryService`: the data-access layer behind `ports::UserDirectory`.
//! - `Error`/`ErrorCode`: transport-agnostic failures for inbound adapters.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    JOB_MIN_LEN, JobTitle, NewUser, User, UserDraft, UserFilter, UserId, UserName, UserPatch,
    UserPatchDraft, UserValidationError,
};
pub use self::user_directory::UserDirectoryService;
