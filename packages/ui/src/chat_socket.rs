//! WebSocket hook for the chat rooms.
//!
//! [`use_chat_socket`] opens one socket when the page mounts and closes it
//! when the page unmounts. Browser callbacks only forward raw events into a
//! coroutine; all signal writes happen there, inside the Dioxus runtime.

use api::chat::{self, ChatChannel, ChatMessage, ChatStatus, ClientEvent, RoomState};
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::auth::use_auth;

/// Raw events coming from the browser socket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
enum SocketEvent {
    Open,
    Frame(String),
    Closed,
}

/// Handle to a room; cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct ChatSocket {
    channel: ChatChannel,
    room: Signal<RoomState>,
    connected: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    connection: Signal<Option<browser::Connection>>,
}

impl ChatSocket {
    /// The trailing window of messages to render.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.room.read().visible().to_vec()
    }

    pub fn status(&self) -> ChatStatus {
        self.room.read().status
    }

    pub fn is_connected(&self) -> bool {
        (self.connected)()
    }

    /// Send `text` as `sender`. Returns `false` when the text is blank or
    /// the socket is not open.
    pub fn send(&self, sender: &str, text: &str) -> bool {
        let Some(event) = ClientEvent::message(self.channel, sender, text) else {
            return false;
        };
        let payload = match event.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to encode chat message: {e}");
                return false;
            }
        };
        self.transmit(&payload)
    }

    #[cfg(target_arch = "wasm32")]
    fn transmit(&self, payload: &str) -> bool {
        self.connection
            .read()
            .as_ref()
            .is_some_and(|c| c.send(payload))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn transmit(&self, _payload: &str) -> bool {
        false
    }
}

pub fn use_chat_socket(channel: ChatChannel) -> ChatSocket {
    let auth = use_auth();
    let mut activity_log = use_activity_log();
    let mut room = use_signal(RoomState::default);
    let mut connected = use_signal(|| false);

    let events = use_coroutine(move |mut rx: UnboundedReceiver<SocketEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                SocketEvent::Open => {
                    connected.set(true);
                    log_activity(&mut activity_log, LogLevel::Success, "Chat conectado");
                }
                SocketEvent::Frame(frame) => {
                    if let Some(event) = chat::decode(&frame) {
                        room.write().apply(event);
                    }
                }
                SocketEvent::Closed => {
                    connected.set(false);
                    log_activity(&mut activity_log, LogLevel::Warning, "Chat desconectado");
                }
            }
        }
    });

    #[cfg(target_arch = "wasm32")]
    let connection = use_signal(move || {
        let token = auth.peek().token.clone()?;
        let url = match channel.socket_url(&crate::auth::client_config().ws_base_url, &token) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid socket URL for {}: {e}", channel.path());
                return None;
            }
        };
        let tx = events.tx();
        match browser::Connection::open(url.as_str(), move |event| {
            let _ = tx.unbounded_send(event);
        }) {
            Ok(connection) => Some(connection),
            Err(e) => {
                tracing::error!("Could not open {}: {e}", channel.path());
                None
            }
        }
    });

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (auth, events);
    }

    use_drop(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let mut connection = connection;
            if let Ok(mut slot) = connection.try_write() {
                slot.take();
            }
        }
    });

    ChatSocket {
        channel,
        room,
        connected,
        #[cfg(target_arch = "wasm32")]
        connection,
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    use super::SocketEvent;

    /// An open socket plus the callbacks that must outlive it.
    pub(super) struct Connection {
        socket: WebSocket,
        _on_open: Closure<dyn FnMut()>,
        _on_message: Closure<dyn FnMut(MessageEvent)>,
        _on_close: Closure<dyn FnMut(CloseEvent)>,
    }

    impl Connection {
        pub(super) fn open(
            url: &str,
            notify: impl Fn(SocketEvent) + Clone + 'static,
        ) -> Result<Self, String> {
            let socket = WebSocket::new(url).map_err(|e| format!("{e:?}"))?;

            let on_open = {
                let notify = notify.clone();
                Closure::<dyn FnMut()>::new(move || notify(SocketEvent::Open))
            };
            let on_message = {
                let notify = notify.clone();
                Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                    // Binary frames are not part of the protocol
                    if let Some(text) = event.data().as_string() {
                        notify(SocketEvent::Frame(text));
                    }
                })
            };
            let on_close =
                Closure::<dyn FnMut(CloseEvent)>::new(move |_: CloseEvent| notify(SocketEvent::Closed));

            socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
            socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
            socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

            Ok(Self {
                socket,
                _on_open: on_open,
                _on_message: on_message,
                _on_close: on_close,
            })
        }

        pub(super) fn send(&self, payload: &str) -> bool {
            self.socket.ready_state() == WebSocket::OPEN && self.socket.send_with_str(payload).is_ok()
        }
    }

    impl Drop for Connection {
        fn drop(&mut self) {
            self.socket.set_onopen(None);
            self.socket.set_onmessage(None);
            self.socket.set_onclose(None);
            let _ = self.socket.close();
        }
    }
}
