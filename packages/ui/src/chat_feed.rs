use api::chat::ChatMessage;
use dioxus::prelude::*;

use crate::icons::{FaPaperPlane, FaXmark};
use crate::Icon;

/// Scrollable list of room messages, oldest first.
#[component]
pub fn ChatFeed(
    messages: Vec<ChatMessage>,
    /// Show the "AI" / "Você" suffix after the sender.
    #[props(default)]
    show_tags: bool,
    #[props(default = "Nenhuma mensagem ainda. Seja o primeiro a falar!".to_string())]
    empty_text: String,
) -> Element {
    rsx! {
        div {
            class: "chat-feed",
            if messages.is_empty() {
                div { class: "chat-empty", "{empty_text}" }
            }
            for message in messages {
                div {
                    key: "{message.id}",
                    class: "chat-message",
                    div {
                        class: "chat-meta",
                        "{message.sender}"
                        if show_tags {
                            if let Some(tag) = message.tag_label() {
                                " · {tag}"
                            }
                        }
                        " · {message.time_label()}"
                    }
                    div { class: "chat-text", "{message.text}" }
                }
            }
        }
    }
}

/// Message box with clear and send buttons. `on_send` receives the raw text;
/// the box is cleared when the handler returns `true`.
#[component]
pub fn ChatComposer(
    on_send: Callback<String, bool>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut text = use_signal(String::new);

    let mut submit = move || {
        if on_send.call(text()) {
            text.set(String::new());
        }
    };

    rsx! {
        div {
            class: "chat-composer",
            textarea {
                class: "input",
                rows: 3,
                placeholder: "Digite sua mensagem...",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() {
                        evt.prevent_default();
                        submit();
                    }
                },
            }
            div {
                class: "chat-composer-actions",
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    title: "Limpar mensagem",
                    onclick: move |_| text.set(String::new()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                    " Limpar"
                }
                button {
                    r#type: "button",
                    class: "btn",
                    title: "Enviar mensagem",
                    disabled: disabled,
                    onclick: move |_| submit(),
                    Icon { icon: FaPaperPlane, width: 12, height: 12 }
                    " Enviar"
                }
            }
        }
    }
}
