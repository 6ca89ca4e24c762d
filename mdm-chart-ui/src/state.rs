//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use mdm_store::TableStore;
use mdm_survey::chart::RUBROS;
use mdm_survey::wave::{Wave, WAVES};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Table store (None until the data source is registered)
    pub store: Signal<Option<TableStore>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Page-level error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Waves included in the comparison
    pub selected_waves: Signal<Vec<Wave>>,
    /// Rubros included in rubro-aware charts
    pub selected_rubros: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with every wave and rubro selected.
    pub fn new() -> Self {
        Self {
            store: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_waves: Signal::new(WAVES.to_vec()),
            selected_rubros: Signal::new(RUBROS.iter().map(|r| r.to_string()).collect()),
        }
    }
}
