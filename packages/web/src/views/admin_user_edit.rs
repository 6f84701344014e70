//! Edit one USER: nickname, active flag, module and an optional password reset.

use api::auth::AccessRule;
use api::{AdminUser, ApiError, ModuleKey, UserPatch};
use dioxus::prelude::*;
use ui::{log_activity, use_activity_log, use_auth, LogLevel, PageHeader};

use super::admin_users::ModuleSelect;
use crate::guard::Protected;
use crate::Route;

#[component]
pub fn AdminUserEdit(id: String) -> Element {
    rsx! {
        Protected { rule: AccessRule::ADMIN, UserForm { key: "{id}", id: id.clone() } }
    }
}

const LOAD_FAILED: &str = "Usuário não encontrado";

/// What the page shows while the user is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditView {
    Loading,
    Failed,
    Ready,
}

impl EditView {
    fn of(load: Option<&Result<AdminUser, ApiError>>) -> Self {
        match load {
            None => EditView::Loading,
            Some(Err(_)) => EditView::Failed,
            Some(Ok(_)) => EditView::Ready,
        }
    }
}

#[component]
fn UserForm(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut activity_log = use_activity_log();
    let mut nickname = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut module = use_signal(ModuleKey::default);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let load_id = id.clone();
    let loader = use_resource(move || {
        let id = load_id.clone();
        async move {
            let client = auth.peek().client();
            let user = client.get_user(&id).await;
            match &user {
                Ok(user) => {
                    nickname.set(user.nickname.clone());
                    is_active.set(user.is_active);
                    module.set(user.module.unwrap_or_default());
                }
                Err(e) => tracing::warn!("Loading user {id}: {e}"),
            }
            user
        }
    });

    let view = EditView::of(loader.read().as_ref());

    let save = move |_| {
        if EditView::of(loader.peek().as_ref()) != EditView::Ready {
            return;
        }
        let id = id.clone();
        spawn(async move {
            error.set(None);
            busy.set(true);
            let patch = UserPatch::new(nickname(), module(), is_active(), &password());
            let client = auth.peek().client();
            match client.update_user(&id, &patch).await {
                Ok(()) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Success,
                        &format!("Usuário {} salvo", patch.nickname),
                    );
                    nav.push(Route::AdminUsers {});
                }
                Err(e) => {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Salvar usuário: {e}"));
                    error.set(Some(e.user_message("Falha ao salvar")));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container narrow",
                PageHeader { title: "Editar USER" }

                match view {
                    EditView::Loading => rsx! {
                        div { class: "card muted", "Carregando..." }
                    },
                    EditView::Failed => rsx! {
                        div {
                            class: "card",
                            div { class: "form-error", "{LOAD_FAILED}" }
                            div {
                                class: "form-actions",
                                button {
                                    class: "btn btn-outline",
                                    title: "Voltar",
                                    onclick: move |_| {
                                        nav.push(Route::AdminUsers {});
                                    },
                                    "Voltar"
                                }
                            }
                        }
                    },
                    EditView::Ready => rsx! {
                        div {
                            class: "card",
                            div {
                                class: "form-grid",
                                label { class: "field-label", "Nickname" }
                                input {
                                    class: "input",
                                    value: nickname(),
                                    oninput: move |evt: FormEvent| nickname.set(evt.value()),
                                }

                                label { class: "field-label", "Status" }
                                label {
                                    class: "checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: is_active(),
                                        onchange: move |evt: FormEvent| is_active.set(evt.checked()),
                                    }
                                    if is_active() { "Ativo" } else { "Inativo" }
                                }

                                label { class: "field-label", "Módulo" }
                                ModuleSelect {
                                    value: module(),
                                    on_change: move |key| module.set(key),
                                }

                                label { class: "field-label", "Nova senha (reset)" }
                                input {
                                    class: "input",
                                    r#type: "password",
                                    placeholder: "Deixe vazio para não alterar",
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                            }

                            if let Some(err) = error() {
                                div { class: "form-error", "{err}" }
                            }

                            div {
                                class: "form-actions",
                                button {
                                    class: "btn btn-outline",
                                    title: "Voltar",
                                    onclick: move |_| {
                                        nav.push(Route::AdminUsers {});
                                    },
                                    "Voltar"
                                }
                                button {
                                    class: "btn",
                                    title: "Salvar alterações",
                                    disabled: busy(),
                                    onclick: save,
                                    if busy() { "Salvando..." } else { "Salvar" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AdminUser {
        AdminUser {
            id: "u2".to_string(),
            nickname: "bia".to_string(),
            role: api::Role::User,
            module: Some(ModuleKey::Pdv),
            is_active: true,
        }
    }

    #[test]
    fn test_form_waits_for_the_user() {
        assert_eq!(EditView::of(None), EditView::Loading);
        assert_eq!(EditView::of(Some(&Ok(user()))), EditView::Ready);
    }

    #[test]
    fn test_failed_load_hides_the_form() {
        let missing = Err(ApiError::from_status(404, r#"{"detail":"Not found"}"#));
        assert_eq!(EditView::of(Some(&missing)), EditView::Failed);
        assert_eq!(EditView::of(Some(&Err(ApiError::MissingToken))), EditView::Failed);
        assert_eq!(LOAD_FAILED, "Usuário não encontrado");
    }
}
