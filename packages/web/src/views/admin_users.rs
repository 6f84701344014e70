//! Admin panel: list accounts and create new USERs.

use api::auth::AccessRule;
use api::{AdminUser, ModuleKey, NewUser, Role, MODULES};
use dioxus::prelude::*;
use ui::{log_activity, use_activity_log, use_auth, LogLevel, PageHeader};

use crate::guard::Protected;
use crate::Route;

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        Protected { rule: AccessRule::ADMIN, UsersPanel {} }
    }
}

#[component]
fn UsersPanel() -> Element {
    let auth = use_auth();
    let mut activity_log = use_activity_log();
    let mut nickname = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut module = use_signal(ModuleKey::default);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let mut users = use_resource(move || async move {
        let client = auth.peek().client();
        client.list_users().await
    });

    let create_user = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let user = match NewUser::new(&nickname(), &password(), module()) {
                Ok(user) => user,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            busy.set(true);
            let client = auth.peek().client();
            match client.create_user(&user).await {
                Ok(()) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Success,
                        &format!("Usuário {} criado", user.nickname),
                    );
                    nickname.set(String::new());
                    password.set(String::new());
                    module.set(ModuleKey::default());
                    users.restart();
                }
                Err(e) => {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Criar usuário: {e}"));
                    error.set(Some(e.user_message("Falha ao criar usuário")));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Painel Admin",
                    subtitle: "Gerencie os usuários e os módulos a que têm acesso.",
                }

                form {
                    class: "card",
                    onsubmit: create_user,
                    h2 { class: "card-title", "Criar USER" }
                    div {
                        class: "form-grid",
                        label { class: "field-label", "Nickname" }
                        input {
                            class: "input",
                            value: nickname(),
                            oninput: move |evt: FormEvent| nickname.set(evt.value()),
                        }
                        label { class: "field-label", "Senha" }
                        input {
                            class: "input",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        label { class: "field-label", "Módulo" }
                        ModuleSelect {
                            value: module(),
                            on_change: move |key| module.set(key),
                        }
                    }
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        title: "Criar usuário",
                        disabled: busy(),
                        if busy() { "Criando..." } else { "Criar" }
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Usuários" }
                    div {
                        class: "table",
                        div {
                            class: "table-row table-head",
                            div { "Nickname" }
                            div { "Módulo" }
                            div { "Status" }
                            div {}
                        }
                        match &*users.read() {
                            None => rsx! {
                                div { class: "muted", "Carregando..." }
                            },
                            Some(Err(e)) => rsx! {
                                div { class: "form-error", {e.user_message("Falha ao carregar usuários")} }
                            },
                            Some(Ok(list)) => rsx! {
                                for user in list.iter().cloned() {
                                    UserRow { key: "{user.id}", user }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: AdminUser) -> Element {
    rsx! {
        div {
            class: "table-row",
            div { "{user.nickname}" }
            div { "{user.module_label()}" }
            div {
                class: if user.is_active { "status active" } else { "status inactive" },
                if user.is_active { "Ativo" } else { "Inativo" }
            }
            div {
                if user.role == Role::User {
                    Link {
                        to: Route::AdminUserEdit { id: user.id.clone() },
                        class: "link",
                        "Editar"
                    }
                } else {
                    span { class: "muted", "ADMIN" }
                }
            }
        }
    }
}

/// `<select>` over every registered module.
#[component]
pub fn ModuleSelect(value: ModuleKey, on_change: EventHandler<ModuleKey>) -> Element {
    rsx! {
        select {
            class: "input",
            value: value.as_str(),
            onchange: move |evt: FormEvent| {
                if let Ok(key) = evt.value().parse::<ModuleKey>() {
                    on_change.call(key);
                }
            },
            for entry in MODULES.iter() {
                option {
                    value: entry.key.as_str(),
                    selected: entry.key == value,
                    "{entry.label}"
                }
            }
        }
    }
}
