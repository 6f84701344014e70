//! General chat room.

use api::auth::AccessRule;
use api::chat::{dice_roll_text, ChatChannel};
use api::ModuleKey;
use dioxus::prelude::*;
use rand::Rng;
use ui::{use_auth, use_chat_socket, ChatComposer, ChatFeed, ChatSocket, PageHeader};

use crate::guard::Protected;

const GREETING: &str = "👋 Olá pessoal!";
const QUICK_ACTION: &str = "✨ Fazendo uma ação incrível no campo!";

#[component]
pub fn Chat() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::Chat), ChatRoom {} }
    }
}

#[component]
fn ChatRoom() -> Element {
    let auth = use_auth();
    let socket = use_chat_socket(ChatChannel::General);

    let send = move |text: String| -> bool {
        match auth().user {
            Some(user) => socket.send(&user.nickname, &text),
            None => false,
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Chat geral",
                    subtitle: "Todos os usuários ficam juntos aqui para conversas rápidas e rolagens.",
                    ConnectionPill { socket }
                }

                div {
                    class: "quick-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            send(GREETING.to_string());
                        },
                        "Cumprimentar"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let roll = rand::thread_rng().gen_range(1..=20);
                            send(dice_roll_text(roll));
                        },
                        "Rolar d20"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            send(QUICK_ACTION.to_string());
                        },
                        "Ação rápida"
                    }
                }

                div {
                    class: "card chat-card",
                    ChatFeed { messages: socket.messages() }
                    ChatComposer {
                        on_send: send,
                        disabled: !socket.is_connected(),
                    }
                }
            }
        }
    }
}

/// "Online" / "Offline" marker for a room socket.
#[component]
pub fn ConnectionPill(socket: ChatSocket) -> Element {
    let online = socket.is_connected();
    rsx! {
        span {
            class: if online { "pill pill-online" } else { "pill pill-offline" },
            if online { "Online" } else { "Offline" }
        }
    }
}
