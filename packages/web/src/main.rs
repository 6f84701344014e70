use api::auth::{home_for, Destination};
use api::ModuleKey;
use dioxus::prelude::*;

use ui::{ActivityLogPanel, AuthProvider};
use views::{
    AdminUserEdit, AdminUsers, AiChat, Chat, Dashboard, Doom, Financeiro, FinanceiroRegistros,
    Login, Pdv,
};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/chat")]
    Chat {},
    #[route("/ai-chat")]
    AiChat {},
    #[route("/pdv")]
    Pdv {},
    #[route("/financeiro")]
    Financeiro {},
    #[route("/financeiro/registros")]
    FinanceiroRegistros {},
    #[route("/doom")]
    Doom {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/users/:id")]
    AdminUserEdit { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Landing page of a module.
    fn module(key: ModuleKey) -> Self {
        match key {
            ModuleKey::Chat => Route::Chat {},
            ModuleKey::AiChat => Route::AiChat {},
            ModuleKey::Dashboard => Route::Dashboard {},
            ModuleKey::Pdv => Route::Pdv {},
            ModuleKey::Financeiro => Route::Financeiro {},
            ModuleKey::Doom => Route::Doom {},
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::AdminHome => Route::AdminUsers {},
            Destination::Module(module) => Route::module(module.unwrap_or_default()),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    let theme: ui::ThemeSignal = use_context_provider(|| Signal::new(ui::load_theme()));
    use_effect(move || {
        ui::apply_theme(theme());
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
            ActivityLogPanel {}
        }
    }
}

/// Redirect `/` to the user's home, or to `/login`
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    let state = auth();
    if !state.loading {
        match state.user {
            Some(ref user) => {
                nav.replace(Route::from(home_for(user)));
            }
            None => {
                nav.replace(Route::Login {});
            }
        }
    }

    rsx! {}
}

/// Anything unknown goes back through `/`
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Root {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MODULES;

    #[test]
    fn test_module_routes_match_registry() {
        for entry in MODULES.iter() {
            assert_eq!(Route::module(entry.key).to_string(), entry.route);
        }
    }

    #[test]
    fn test_destinations_match_paths() {
        let destinations = [
            Destination::Login,
            Destination::AdminHome,
            Destination::Module(None),
            Destination::Module(Some(ModuleKey::Financeiro)),
            Destination::Module(Some(ModuleKey::Doom)),
        ];
        for destination in destinations {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_unknown_paths_parse_to_fallback() {
        let route: Route = "/nao/existe".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        let route: Route = "/admin/users/42".parse().unwrap();
        assert_eq!(route, Route::AdminUserEdit { id: "42".to_string() });
    }
}
