//! Route guard: renders its children only when the session may see them.

use api::auth::{authorize, Access, AccessRule};
use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Wraps a page. While the session is loading nothing is rendered; a
/// rejected session is sent elsewhere with `replace`, so the guarded page
/// never lands in history.
#[component]
pub fn Protected(rule: AccessRule, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    match authorize(state.loading, state.user.as_ref(), &rule) {
        Access::Pending => rsx! {},
        Access::Granted => rsx! { {children} },
        Access::Redirect(destination) => {
            tracing::debug!("Guard redirect to {}", destination.path());
            nav.replace(Route::from(destination));
            rsx! {}
        }
    }
}
