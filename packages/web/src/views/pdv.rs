//! PDV / frente de caixa: static reference of the daily register routines.

use api::auth::AccessRule;
use api::ModuleKey;
use dioxus::prelude::*;
use ui::PageHeader;

use crate::guard::Protected;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Primary,
    Secondary,
    Accent,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Primary => "card routine-card tone-primary",
            Tone::Secondary => "card routine-card tone-secondary",
            Tone::Accent => "card routine-card tone-accent",
        }
    }
}

struct Routine {
    title: &'static str,
    description: &'static str,
    steps: [&'static str; 3],
    tone: Tone,
}

const STATUS_PILLS: [(&str, &str); 3] = [
    ("pill", "Caixa aberto"),
    ("pill pill-info", "Operador: turno A"),
    ("pill pill-success", "Meta do dia: R$ 12.000"),
];

const QUICK_ACTIONS: [(&str, &str); 6] = [
    ("Nova venda", "Iniciar atendimento com carrinho vazio"),
    ("Consultar preço", "Buscar produto por código ou nome"),
    ("Aplicar desconto", "Cupom ou percentual autorizado"),
    ("Adicionar cliente", "CPF, telefone ou cadastro rápido"),
    ("Emitir NF", "Gerar nota e enviar por e-mail"),
    ("Relatório do dia", "Resumo de vendas e movimentações"),
];

static ROUTINES: [Routine; 6] = [
    Routine {
        title: "Abertura de caixa",
        description: "Prepare o turno e deixe tudo pronto para vender com segurança.",
        steps: [
            "Conferir fundo de troco",
            "Identificar operador",
            "Registrar horário de abertura",
        ],
        tone: Tone::Primary,
    },
    Routine {
        title: "Fluxo de venda",
        description: "Registre cada item, aplique regras comerciais e finalize rapidamente.",
        steps: ["Adicionar produtos", "Aplicar descontos", "Selecionar cliente"],
        tone: Tone::Accent,
    },
    Routine {
        title: "Pagamentos",
        description: "Finalize com múltiplas formas e controle os recebimentos.",
        steps: ["Pix, cartão ou dinheiro", "Separar parcelas", "Emitir comprovante"],
        tone: Tone::Secondary,
    },
    Routine {
        title: "Pós-venda",
        description: "Lide com trocas, devoluções e cancelamentos do dia a dia.",
        steps: ["Cancelar venda", "Registrar devolução", "Emitir estorno"],
        tone: Tone::Primary,
    },
    Routine {
        title: "Movimentação de caixa",
        description: "Registre sangrias, reforços e eventos do turno.",
        steps: ["Sangria", "Reforço de caixa", "Justificativas e responsável"],
        tone: Tone::Secondary,
    },
    Routine {
        title: "Fechamento",
        description: "Finalize o expediente com conferência e relatórios.",
        steps: ["Conferir vendas", "Comparar recebimentos", "Fechar caixa"],
        tone: Tone::Accent,
    },
];

#[component]
pub fn Pdv() -> Element {
    rsx! {
        Protected { rule: AccessRule::module(ModuleKey::Pdv), Register {} }
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        div {
            class: "page",
            div {
                class: "page-container",
                PageHeader {
                    title: "Módulo PDV",
                    subtitle: "Rotinas essenciais para vendas rápidas, controle de caixa e pós-venda.",
                }

                div {
                    class: "card",
                    div {
                        class: "pill-row",
                        for (class, label) in STATUS_PILLS {
                            span { key: "{label}", class, "{label}" }
                        }
                    }
                    div {
                        class: "tile-grid",
                        for (label, detail) in QUICK_ACTIONS {
                            div {
                                key: "{label}",
                                class: "tile",
                                strong { "{label}" }
                                span { class: "muted", "{detail}" }
                            }
                        }
                    }
                }

                div {
                    class: "routine-grid",
                    for routine in ROUTINES.iter() {
                        div {
                            key: "{routine.title}",
                            class: routine.tone.class(),
                            h2 { class: "card-title", "{routine.title}" }
                            p { class: "muted", "{routine.description}" }
                            ul {
                                for step in routine.steps {
                                    li { key: "{step}", "{step}" }
                                }
                            }
                        }
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
    fn test_routines_have_unique_titles() {
        let mut titles: Vec<_> = ROUTINES.iter().map(|r| r.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), ROUTINES.len());
        assert!(QUICK_ACTIONS.iter().all(|(label, detail)| !label.is_empty() && !detail.is_empty()));
    }
}
