//! Finance records: full list, new records and categories, and inline
//! editing of one record at a time.

use api::auth::AccessRule;
use api::ModuleKey;
use chrono::Utc;
use dioxus::prelude::*;
use store::report::{self, format_brl, format_date};
use store::{FinanceCategory, FinanceError, FinanceRecord, RecordDraft, CATEGORY_COLORS};
use ui::{log_activity, use_activity_log, LogLevel, PageHeader};

use super::record_form::{error_message, RecordFields, RecordForm};
use crate::guard::Protected;
use crate::Route;

#[component]
pub fn FinanceiroRegistros() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::Financeiro), RecordsPage {} }
    }
}

#[component]
fn RecordsPage() -> Element {
    let book = ui::finance_book();
    let mut activity_log = use_activity_log();
    let mut state = use_signal(|| ui::finance_book().load(Utc::now()));
    let mut add_open = use_signal(|| false);
    let mut category_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut edit_draft = use_signal(RecordDraft::default);
    let mut edit_error = use_signal(|| Option::<&'static str>::None);

    let current = state();
    let records = report::sorted_by_date_desc(&current.records);

    let add_record = {
        let book = book.clone();
        move |draft: RecordDraft| -> Result<(), FinanceError> {
            let record = book.add_record(&mut *state.write(), &draft)?;
            log_activity(
                &mut activity_log,
                LogLevel::Success,
                &format!("Registro \"{}\" adicionado", record.description),
            );
            add_open.set(false);
            Ok(())
        }
    };

    let add_category = {
        let book = book.clone();
        move |(name, color): (String, String)| -> Result<(), FinanceError> {
            let category = book.add_category(&mut *state.write(), &name, &color)?;
            log_activity(
                &mut activity_log,
                LogLevel::Success,
                &format!("Categoria \"{}\" cadastrada", category.name),
            );
            category_open.set(false);
            Ok(())
        }
    };

    let save_edit = Callback::new(move |id: String| {
        match book.update_record(&mut *state.write(), &id, &edit_draft()) {
            Ok(()) => {
                editing.set(None);
                edit_error.set(None);
                log_activity(&mut activity_log, LogLevel::Info, "Registro atualizado");
            }
            Err(e) => edit_error.set(Some(error_message(&e))),
        }
    });

    let start_edit = move |record: FinanceRecord| {
        edit_draft.set(RecordDraft::from_record(&record));
        edit_error.set(None);
        editing.set(Some(record.id));
    };

    let cancel_edit = move |_: ()| {
        editing.set(None);
        edit_error.set(None);
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Registros financeiros",
                    subtitle: "Gerencie gastos, categorias e edite apenas uma linha por vez para manter o controle.",
                    Link { to: Route::Financeiro {}, class: "btn btn-outline", "Voltar ao dashboard" }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let open = add_open();
                            add_open.set(!open);
                        },
                        if add_open() { "Fechar" } else { "Adicionar registro" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let open = category_open();
                            category_open.set(!open);
                        },
                        "Cadastrar categoria"
                    }
                }

                if add_open() {
                    RecordForm {
                        categories: current.categories.clone(),
                        on_submit: add_record,
                        on_cancel: move |_| add_open.set(false),
                    }
                }

                if category_open() {
                    CategoryForm {
                        on_submit: add_category,
                        on_cancel: move |_| category_open.set(false),
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Lista de registros" }
                    div {
                        class: "record-list",
                        for record in records {
                            RecordRow {
                                key: "{record.id}",
                                category: current.category(&record.category_id).cloned(),
                                categories: current.categories.clone(),
                                editing: editing() == Some(record.id.clone()),
                                locked: editing().is_some(),
                                draft: edit_draft,
                                error: edit_error(),
                                record: record.clone(),
                                on_edit: start_edit,
                                on_save: save_edit,
                                on_cancel: cancel_edit,
                            }
                        }
                        if current.records.is_empty() {
                            p { class: "muted", "Nenhum registro encontrado. Adicione seu primeiro gasto." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordRow(
    record: FinanceRecord,
    category: Option<FinanceCategory>,
    categories: Vec<FinanceCategory>,
    editing: bool,
    /// Another row is being edited.
    locked: bool,
    draft: Signal<RecordDraft>,
    error: Option<&'static str>,
    on_edit: EventHandler<FinanceRecord>,
    on_save: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    if editing {
        let id = record.id.clone();
        return rsx! {
            div {
                class: "record-row editing",
                RecordFields { categories, draft }
                if let Some(message) = error {
                    div { class: "form-error", "{message}" }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_save.call(id.clone()),
                        "Salvar"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                }
            }
        };
    }

    let target = record.clone();
    let (category_name, color) = match &category {
        Some(c) => (c.name.clone(), c.color.clone()),
        None => ("Sem categoria".to_string(), "inherit".to_string()),
    };

    rsx! {
        div {
            class: "record-row",
            strong { "{record.description}" }
            span { class: "figure", "{format_brl(record.amount)}" }
            span { style: "color: {color}", "{category_name}" }
            span { class: "muted", "{format_date(record.date)}" }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-outline",
                    disabled: locked,
                    onclick: move |_| on_edit.call(target.clone()),
                    "Liberar edição"
                }
            }
        }
    }
}

/// Fields of the new-category form.
#[derive(Debug, Clone, PartialEq)]
struct CategoryDraft {
    name: String,
    color: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: CATEGORY_COLORS[0].to_string(),
        }
    }
}

impl CategoryDraft {
    /// A saved category clears the form; a rejected one keeps the input.
    fn settle(&mut self, result: &Result<(), FinanceError>) {
        if result.is_ok() {
            *self = Self::default();
        }
    }
}

#[component]
fn CategoryForm(
    on_submit: Callback<(String, String), Result<(), FinanceError>>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(CategoryDraft::default);
    let mut error = use_signal(|| Option::<&'static str>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let CategoryDraft { name, color } = draft();
        let result = on_submit.call((name, color));
        error.set(result.as_ref().err().map(error_message));
        draft.write().settle(&result);
    };

    rsx! {
        form {
            class: "card",
            onsubmit: submit,
            div {
                class: "form-grid finance-fields",
                label {
                    class: "field",
                    span { "Nome da categoria" }
                    input {
                        class: "input",
                        placeholder: "Ex.: Saúde",
                        value: draft.read().name.clone(),
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                }
                label {
                    class: "field",
                    span { "Cor" }
                    select {
                        class: "input",
                        value: draft.read().color.clone(),
                        onchange: move |evt: FormEvent| draft.write().color = evt.value(),
                        for swatch in CATEGORY_COLORS {
                            option {
                                key: "{swatch}",
                                value: swatch,
                                selected: draft.read().color == swatch,
                                style: "color: {swatch}",
                                "{swatch}"
                            }
                        }
                    }
                }
            }
            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
                button { r#type: "submit", class: "btn", "Salvar categoria" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited() -> CategoryDraft {
        CategoryDraft {
            name: "Saúde".to_string(),
            color: CATEGORY_COLORS[3].to_string(),
        }
    }

    #[test]
    fn test_saved_category_resets_name_and_color() {
        let mut draft = edited();
        draft.settle(&Ok(()));
        assert_eq!(draft, CategoryDraft::default());
        assert_eq!(draft.color, CATEGORY_COLORS[0]);
    }

    #[test]
    fn test_rejected_category_keeps_input() {
        let mut draft = edited();
        draft.settle(&Err(FinanceError::EmptyCategoryName));
        assert_eq!(draft, edited());
    }
}
