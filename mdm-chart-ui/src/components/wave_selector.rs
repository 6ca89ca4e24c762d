//! Checkbox multi-select for the waves under comparison.

use crate::state::AppState;
use dioxus::prelude::*;
use mdm_survey::wave::WAVES;

/// Wave multi-select.
/// Reads the selection from AppState and toggles membership on change.
#[component]
pub fn WaveSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_waves)();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; margin-right: 12px;",
                "Ondas a comparar:"
            }
            for wave in WAVES {
                label {
                    style: "margin-right: 16px; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&wave),
                        onchange: move |_| {
                            let mut waves = (state.selected_waves)();
                            if let Some(pos) = waves.iter().position(|w| *w == wave) {
                                waves.remove(pos);
                            } else {
                                waves.push(wave);
                                // chronological order keeps legends stable
                                waves.sort();
                            }
                            state.selected_waves.set(waves);
                        },
                    }
                    " {wave.label()}"
                }
            }
        }
    }
}
