//! First-person arena page: start button, HUD and the canvas.

use api::auth::AccessRule;
use api::ModuleKey;
use arena::{Arena, INSTRUCTIONS};
use dioxus::prelude::*;
use ui::{log_activity, use_activity_log, ArenaCanvas, LogLevel, PageHeader};

use crate::guard::Protected;

#[component]
pub fn Doom() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::Doom), Combat {} }
    }
}

#[component]
fn Combat() -> Element {
    let mut activity_log = use_activity_log();
    let mut arena = use_signal(|| Arena::new(&mut rand::thread_rng()));
    // Bumped on every start so the canvas (and its frame loop) is rebuilt.
    let mut session = use_signal(|| 0u32);

    let started = session() > 0;
    let stats = arena.read().stats();
    let dead = arena.read().is_dead();

    let start = move |_| {
        arena.set(Arena::new(&mut rand::thread_rng()));
        let next = session() + 1;
        session.set(next);
        log_activity(&mut activity_log, LogLevel::Info, "Combate iniciado");
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Módulo Doom",
                    subtitle: "Combate rápido em primeira pessoa inspirado no clássico.",
                }

                div {
                    class: "card",
                    div {
                        class: "arena-toolbar",
                        button {
                            class: "btn",
                            onclick: start,
                            if started { "Reiniciar combate" } else { "Iniciar combate" }
                        }
                        div {
                            class: "pill-row",
                            span { class: if dead { "pill pill-danger" } else { "pill" }, "HP: {stats.health}" }
                            span { class: "pill", "Mun: {stats.ammo}" }
                            span { class: "pill", "Pontuação: {stats.score}" }
                        }
                    }
                    div {
                        class: "pill-row muted",
                        for text in INSTRUCTIONS {
                            span { key: "{text}", "{text}" }
                        }
                    }
                }

                div {
                    class: "card arena-card",
                    if started {
                        ArenaCanvas { key: "{session}", arena }
                    } else {
                        div { class: "arena-placeholder", "Clique em iniciar para entrar na arena." }
                    }
                }
            }
        }
    }
}
