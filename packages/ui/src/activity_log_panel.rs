use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Atividade" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Limpar"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Fechar"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "Nenhum evento." }
                }
                for (i, entry) in entries.iter().enumerate().rev() {
                    div {
                        key: "{i}",
                        class: entry.level.class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_errors = log().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Atividade",
            if count > 0 {
                "{count}"
            } else {
                "Log"
            }
        }
    }
}
