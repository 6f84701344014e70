//! Record inputs shared by the finance dashboard and the records page.

use dioxus::prelude::*;
use store::finance::today;
use store::{FinanceCategory, FinanceError, RecordDraft};

/// Portuguese message for a rejected draft.
pub fn error_message(error: &FinanceError) -> &'static str {
    match error {
        FinanceError::EmptyDescription => "Informe a descrição",
        FinanceError::EmptyAmount => "Informe o valor",
        FinanceError::InvalidAmount(_) => "Valor inválido",
        FinanceError::EmptyCategory => "Escolha uma categoria",
        FinanceError::InvalidDate(_) => "Data inválida",
        FinanceError::EmptyCategoryName => "Informe o nome da categoria",
        FinanceError::RecordNotFound(_) => "Registro não encontrado",
    }
}

/// Empty draft defaulting to the first category and today's date.
pub fn blank_draft(categories: &[FinanceCategory]) -> RecordDraft {
    RecordDraft {
        category_id: categories.first().map(|c| c.id.clone()).unwrap_or_default(),
        date: today(chrono::Utc::now()),
        ..RecordDraft::default()
    }
}

#[component]
pub fn CategorySelect(
    categories: Vec<FinanceCategory>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "input",
            value: "{value}",
            onchange: move |evt: FormEvent| on_change.call(evt.value()),
            for category in categories {
                option {
                    key: "{category.id}",
                    value: "{category.id}",
                    selected: category.id == value,
                    "{category.name}"
                }
            }
        }
    }
}

/// Description, amount, category and date inputs bound to `draft`.
#[component]
pub fn RecordFields(categories: Vec<FinanceCategory>, draft: Signal<RecordDraft>) -> Element {
    let mut draft = draft;
    let current = draft();

    rsx! {
        div {
            class: "form-grid finance-fields",
            label {
                class: "field",
                span { "Descrição" }
                input {
                    class: "input",
                    placeholder: "Ex.: Conta de energia",
                    value: "{current.description}",
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }
            }
            label {
                class: "field",
                span { "Valor" }
                input {
                    class: "input",
                    r#type: "number",
                    step: "0.01",
                    placeholder: "0,00",
                    value: "{current.amount}",
                    oninput: move |evt: FormEvent| draft.write().amount = evt.value(),
                }
            }
            label {
                class: "field",
                span { "Categoria" }
                CategorySelect {
                    categories,
                    value: current.category_id.clone(),
                    on_change: move |id| draft.write().category_id = id,
                }
            }
            label {
                class: "field",
                span { "Data" }
                input {
                    class: "input",
                    r#type: "date",
                    value: "{current.date}",
                    oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                }
            }
        }
    }
}

/// Add-record form. `on_submit` returns the validation outcome; the inputs
/// are cleared on success and the message shown on failure.
#[component]
pub fn RecordForm(
    categories: Vec<FinanceCategory>,
    on_submit: Callback<RecordDraft, Result<(), FinanceError>>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial = blank_draft(&categories);
    let mut draft = use_signal(move || initial);
    let mut error = use_signal(|| Option::<&'static str>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match on_submit.call(draft()) {
            Ok(()) => {
                error.set(None);
                let mut current = draft.write();
                current.description.clear();
                current.amount.clear();
            }
            Err(e) => error.set(Some(error_message(&e))),
        }
    };

    rsx! {
        form {
            class: "card",
            onsubmit: submit,
            RecordFields { categories, draft }
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
                button { r#type: "submit", class: "btn", "Salvar registro" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(error_message(&FinanceError::EmptyDescription), "Informe a descrição");
        assert_eq!(
            error_message(&FinanceError::InvalidAmount("abc".to_string())),
            "Valor inválido"
        );
        assert_eq!(
            error_message(&FinanceError::RecordNotFound("rec-1".to_string())),
            "Registro não encontrado"
        );
    }

    #[test]
    fn test_blank_draft_uses_first_category() {
        let categories = vec![
            FinanceCategory {
                id: "cat-a".to_string(),
                name: "Casa".to_string(),
                color: "#ff7043".to_string(),
            },
            FinanceCategory {
                id: "cat-b".to_string(),
                name: "Lazer".to_string(),
                color: "#ab47bc".to_string(),
            },
        ];
        let draft = blank_draft(&categories);
        assert_eq!(draft.category_id, "cat-a");
        assert!(draft.description.is_empty());
        assert_eq!(draft.date.len(), 10);

        assert!(blank_draft(&[]).category_id.is_empty());
    }
}
