//! Warning display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WarningDisplayProps {
    pub message: String,
}

/// Displays a non-fatal notice in a styled box.
///
/// Used when a chart has nothing to show (filtered out, nothing parseable).
/// Visually distinct from [`ErrorDisplay`] so a degraded chart does not
/// read as a broken one.
#[component]
pub fn WarningDisplay(props: WarningDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #B26A00; border-radius: 4px; border: 1px solid #FFE082;",
            "{props.message}"
        }
    }
}
