//! "Campo RPG" landing page.

use api::auth::AccessRule;
use api::ModuleKey;
use dioxus::prelude::*;
use ui::{use_auth, PageHeader};

use crate::guard::Protected;

/// Checklist shown under the greeting.
const SESSION_STEPS: [&str; 3] = [
    "Confirme a data da próxima sessão com o grupo.",
    "Revise as fichas dos personagens.",
    "Separe os dados e as anotações da campanha.",
];

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::Dashboard), Field {} }
    }
}

#[component]
fn Field() -> Element {
    let auth = use_auth();
    let nickname = auth().user.map(|u| u.nickname).unwrap_or_default();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Campo RPG",
                    subtitle: "Seu ponto de partida para as aventuras do grupo.",
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Olá, {nickname}!" }
                    p { "O campo está pronto. Prepare a próxima sessão:" }
                    ul {
                        for step in SESSION_STEPS {
                            li { key: "{step}", "{step}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::auth::{authorize, Access, Destination};
    use api::{Role, SessionUser, MODULES};

    use super::*;

    #[test]
    fn test_dashboard_users_only_reach_the_dashboard() {
        let session = SessionUser {
            id: "u3".to_string(),
            nickname: "caio".to_string(),
            role: Role::User,
            module: Some(ModuleKey::Dashboard),
        };
        let home = AccessRule::module(ModuleKey::Dashboard);
        assert_eq!(authorize(false, Some(&session), &home), Access::Granted);

        for entry in MODULES.iter().filter(|e| e.key != ModuleKey::Dashboard) {
            assert_eq!(
                authorize(false, Some(&session), &AccessRule::module(entry.key)),
                Access::Redirect(Destination::Module(Some(ModuleKey::Dashboard))),
                "{} must not be reachable from the dashboard",
                entry.route
            );
        }
    }
}
