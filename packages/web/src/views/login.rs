//! Login page view with nickname/password form.

use dioxus::prelude::*;
use ui::{login, use_auth, ThemeToggle};

use crate::Route;

pub const LOGIN_FAILED: &str = "Nickname ou senha inválidos";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut nickname = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, let the root pick the landing page
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Root {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match login(auth, nickname().trim(), &password()).await {
                Ok(()) => {
                    nav.replace(Route::Root {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some(LOGIN_FAILED.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        ThemeToggle {}
        div {
            class: "login-container",

            form {
                class: "card login-card",
                onsubmit: handle_login,

                h1 { class: "login-title", "Portal" }
                p { class: "page-subtitle", "Entre com seu nickname e senha." }

                label {
                    class: "field",
                    span { "Nickname" }
                    input {
                        class: "input",
                        r#type: "text",
                        autocomplete: "username",
                        value: nickname(),
                        oninput: move |evt: FormEvent| nickname.set(evt.value()),
                    }
                }

                label {
                    class: "field",
                    span { "Senha" }
                    input {
                        class: "input",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                button {
                    class: "btn btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Entrando..." } else { "Entrar" }
                }
            }
        }
    }
}
