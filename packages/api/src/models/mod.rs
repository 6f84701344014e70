//! Data models exchanged with the REST API.

mod user;

pub use user::{AdminUser, NewUser, NewUserError, Role, SessionUser, UserPatch};
