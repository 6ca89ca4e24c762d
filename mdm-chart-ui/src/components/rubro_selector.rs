//! Checkbox multi-select for the rubros shown in rubro-aware charts.

use crate::state::AppState;
use dioxus::prelude::*;
use mdm_survey::chart::RUBROS;

/// Rubro multi-select.
/// Only charts whose columns carry a rubro react to this selection.
#[component]
pub fn RubroSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_rubros)();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; margin-right: 12px;",
                "Rubros:"
            }
            for rubro in RUBROS {
                label {
                    style: "margin-right: 16px; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: selected.iter().any(|r| r == rubro),
                        onchange: move |_| {
                            let mut rubros = (state.selected_rubros)();
                            if let Some(pos) = rubros.iter().position(|r| r == rubro) {
                                rubros.remove(pos);
                            } else {
                                rubros.push(rubro.to_string());
                                // registry order keeps legends stable
                                rubros.sort_by_key(|r| {
                                    RUBROS.iter().position(|c| c == r).unwrap_or(usize::MAX)
                                });
                            }
                            state.selected_rubros.set(rubros);
                        },
                    }
                    " {rubro}"
                }
            }
        }
    }
}
