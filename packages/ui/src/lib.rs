//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const PORTAL_CSS: Asset = asset!("/assets/portal.css");

mod storage;
pub use storage::{finance_book, make_store};

mod auth;
pub use auth::{
    api_client, client_config, login, logout, use_auth, AuthProvider, AuthState, LogoutButton,
};

mod theme;
pub use theme::{apply_theme, load_theme, Theme, ThemeSignal, ThemeToggle};

mod page_header;
pub use page_header::PageHeader;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod chat_socket;
pub use chat_socket::{use_chat_socket, ChatSocket};

mod chat_feed;
pub use chat_feed::{ChatComposer, ChatFeed};

mod arena_canvas;
pub use arena_canvas::ArenaCanvas;
