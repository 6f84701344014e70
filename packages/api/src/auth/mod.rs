//! Authentication: session payloads and the route guard decision.

pub mod guard;
mod session;

pub use guard::{authorize, home_for, Access, AccessRule, Destination};
pub use session::{LoginRequest, TokenResponse, TOKEN_STORAGE_KEY};
