//! AI chat room: same socket protocol as the general room, tagged messages
//! and a processing status reported by the server.

use api::auth::AccessRule;
use api::chat::{ChatChannel, ChatStatus};
use api::ModuleKey;
use dioxus::prelude::*;
use ui::{use_auth, use_chat_socket, ChatComposer, ChatFeed, PageHeader};

use super::chat::ConnectionPill;
use crate::guard::Protected;

/// Quick prompts as (button label, text sent).
const PROMPTS: [(&str, &str); 3] = [
    ("Pedir ajuda", "Olá! Preciso de ajuda com o sistema."),
    ("Dúvida de login", "Como faço login no sistema?"),
    ("Ver módulos", "Quais módulos estão disponíveis?"),
];

#[component]
pub fn AiChat() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::AiChat), AiRoom {} }
    }
}

#[component]
fn AiRoom() -> Element {
    let auth = use_auth();
    let socket = use_chat_socket(ChatChannel::Ai);

    let send = move |text: String| -> bool {
        match auth().user {
            Some(user) => socket.send(&user.nickname, &text),
            None => false,
        }
    };

    let status = socket.status();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Chat com IA",
                    subtitle: "Converse com o assistente. As respostas chegam pelo mesmo canal.",
                    ConnectionPill { socket }
                    span {
                        class: if status == ChatStatus::Running { "pill pill-running" } else { "pill" },
                        "{status.label()}"
                    }
                }

                div {
                    class: "quick-actions",
                    for (label, prompt) in PROMPTS {
                        button {
                            key: "{label}",
                            class: "btn btn-outline",
                            title: prompt,
                            disabled: !socket.is_connected(),
                            onclick: move |_| {
                                send(prompt.to_string());
                            },
                            "{label}"
                        }
                    }
                }

                div {
                    class: "card chat-card",
                    ChatFeed {
                        messages: socket.messages(),
                        show_tags: true,
                        empty_text: "Nenhuma conversa ainda. Envie uma pergunta para começar.",
                    }
                    ChatComposer {
                        on_send: send,
                        disabled: !socket.is_connected(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_buttons_show_short_labels() {
        for (label, prompt) in PROMPTS {
            assert!(label.chars().count() < prompt.chars().count());
            assert!(!prompt.trim().is_empty());
        }
        assert_eq!(PROMPTS[1], ("Dúvida de login", "Como faço login no sistema?"));
    }
}
