use dioxus::prelude::*;

use crate::activity_log_panel::ActivityLogToggle;
use crate::auth::LogoutButton;
use crate::theme::ThemeToggle;

/// Title row shared by the module pages: heading, subtitle, extra actions
/// passed as children, and the logout button. Also mounts the theme toggle.
#[component]
pub fn PageHeader(
    title: String,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        ThemeToggle {}
        div {
            class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div {
                class: "page-header-actions",
                {children}
                ActivityLogToggle {}
                LogoutButton {}
            }
        }
    }
}
