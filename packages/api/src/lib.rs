//! # API crate — client-side contract of the portal
//!
//! Everything the pages need to talk to the outside world, kept free of UI
//! code so it can be unit tested on the host:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Route guard decision ([`auth::guard`]) over the current session |
//! | [`chat`] | WebSocket wire protocol of `/ws/chat` and `/ws/ai-chat` |
//! | [`client`] | REST client for `/auth/*` and `/admin/users` with bearer token injection |
//! | [`config`] | Base URLs for REST and WebSocket endpoints |
//! | [`error`] | [`ApiError`], shared by every fallible call |
//! | [`models`] | Session user, roles, admin user payloads |
//! | [`modules`] | Static module registry (key → label, route) |
//!
//! The REST API and the WebSocket server are external services; this crate
//! only describes the shapes they exchange.

pub mod auth;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod modules;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::{AdminUser, NewUser, NewUserError, Role, SessionUser, UserPatch};
pub use modules::{ModuleEntry, ModuleKey, MODULES};
