//! Finance dashboard: period and category filters, totals and a quick
//! add-record form.

use api::auth::AccessRule;
use api::ModuleKey;
use chrono::Utc;
use dioxus::prelude::*;
use store::report::{self, format_brl};
use store::{CategoryFilter, FinanceError, Period, RecordDraft};
use ui::{log_activity, use_activity_log, LogLevel, PageHeader};

use super::record_form::RecordForm;
use crate::guard::Protected;
use crate::Route;

const ROADMAP: [&str; 5] = [
    "Alertas inteligentes para metas de gastos e limites por categoria.",
    "Importação automática de extratos bancários e cartões.",
    "Relatórios comparativos mês a mês com metas e tendências.",
    "Integração com notificações push para lembrar vencimentos.",
    "Compartilhamento de categorias com múltiplos usuários da conta.",
];

#[component]
pub fn Financeiro() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::Financeiro), FinanceDashboard {} }
    }
}

#[component]
fn FinanceDashboard() -> Element {
    let book = ui::finance_book();
    let mut activity_log = use_activity_log();
    let mut state = use_signal(|| ui::finance_book().load(Utc::now()));
    let mut period = use_signal(Period::default);
    let mut category = use_signal(CategoryFilter::default);
    let mut form_open = use_signal(|| false);

    let current = state();
    let filtered = report::filter(&current.records, period(), &category(), Utc::now());
    let total = report::total(&filtered);
    let by_category = report::totals_by_category(&filtered, &current.categories);
    let busiest = by_category
        .first()
        .map(|t| t.category.name.clone())
        .unwrap_or_else(|| "Sem dados".to_string());

    let add_record = move |draft: RecordDraft| -> Result<(), FinanceError> {
        let record = book.add_record(&mut *state.write(), &draft)?;
        log_activity(
            &mut activity_log,
            LogLevel::Success,
            &format!("Registro \"{}\" adicionado", record.description),
        );
        form_open.set(false);
        Ok(())
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Módulo Financeiro",
                    subtitle: "Acompanhe seus gastos com categorias claras, filtros rápidos e indicadores essenciais.",
                    Link { to: Route::FinanceiroRegistros {}, class: "btn btn-outline", "Ver registros" }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let open = form_open();
                            form_open.set(!open);
                        },
                        if form_open() { "Fechar" } else { "Adicionar registro" }
                    }
                }

                div {
                    class: "card",
                    div {
                        class: "filter-row",
                        for choice in Period::ALL {
                            button {
                                key: "{choice.label()}",
                                class: if choice == period() { "chip chip-active" } else { "chip" },
                                onclick: move |_| period.set(choice),
                                "{choice.label()}"
                            }
                        }
                        select {
                            class: "input",
                            value: category().value().to_string(),
                            onchange: move |evt: FormEvent| category.set(CategoryFilter::from_value(&evt.value())),
                            option { value: "all", "Todas as categorias" }
                            for cat in current.categories.iter() {
                                option {
                                    key: "{cat.id}",
                                    value: "{cat.id}",
                                    selected: category().value() == cat.id,
                                    "{cat.name}"
                                }
                            }
                        }
                    }
                    div {
                        class: "tile-grid",
                        div {
                            class: "tile",
                            span { class: "muted", "Total filtrado" }
                            strong { class: "figure", "{format_brl(total)}" }
                        }
                        div {
                            class: "tile",
                            span { class: "muted", "Registros no período" }
                            strong { class: "figure", "{filtered.len()}" }
                        }
                        div {
                            class: "tile",
                            span { class: "muted", "Categoria mais ativa" }
                            strong { "{busiest}" }
                        }
                    }
                }

                if form_open() {
                    RecordForm {
                        categories: current.categories.clone(),
                        on_submit: add_record,
                        on_cancel: move |_| form_open.set(false),
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Resumo por categoria" }
                    p { class: "muted", "Compare rapidamente os maiores centros de custo no período selecionado." }
                    div {
                        class: "tile-grid",
                        for entry in by_category.iter() {
                            div {
                                key: "{entry.category.id}",
                                class: "tile",
                                span { style: "color: {entry.category.color}", "{entry.category.name}" }
                                strong { class: "figure", "{format_brl(entry.total)}" }
                            }
                        }
                        if by_category.is_empty() {
                            p { class: "muted", "Nenhum gasto encontrado para este filtro." }
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Sequência de evoluções sugeridas" }
                    ol {
                        for item in ROADMAP {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }
        }
    }
}
