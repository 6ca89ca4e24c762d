//! Dashboard Monitor de Marca YPF Luz
//!
//! Brand-tracking survey dashboard: four indicator charts compared across
//! survey waves, with optional rubro (sector) breakdowns.
//!
//! Data flow:
//! 1. `build.rs` copies each chart CSV from `../fixtures` into OUT_DIR.
//! 2. `include_str!` embeds the tables into the WASM binary; a `TableStore`
//!    parses each one on first use.
//! 3. On mount: register the store and evaluate the D3 chart scripts.
//! 4. On selection change: normalize each table against the selected waves
//!    and rubros and re-render via D3.js, one chart at a time so a broken
//!    table never takes down its siblings.

mod chart_data;

use dioxus::prelude::*;
use mdm_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, RubroSelector, WarningDisplay,
    WaveSelector,
};
use mdm_chart_ui::js_bridge;
use mdm_chart_ui::state::AppState;
use mdm_data::SurveyFilter;
use mdm_store::{EmbeddedSource, TableStore};
use mdm_survey::chart::ChartId;
use mdm_survey::wave::Wave;

// Embed each chart CSV (copied into OUT_DIR by build.rs) at compile time.
const IMPORTANCIA_ENERGIA_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/importancia_energia.csv"));
const IMPORTANCIA_RENOVABLES_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/importancia_renovables.csv"));
const CONOCIMIENTO_ESPONTANEO_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/conocimiento_espontaneo.csv"));
const CONOCIMIENTO_GUIADO_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/conocimiento_guiado.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

/// DOM id for a chart's container div.
fn container_id(chart: ChartId) -> String {
    format!("{}-chart", chart.slug())
}

fn embedded_source() -> EmbeddedSource {
    EmbeddedSource::new()
        .with(ChartId::ImportanciaEnergia, IMPORTANCIA_ENERGIA_CSV)
        .with(ChartId::ImportanciaRenovables, IMPORTANCIA_RENOVABLES_CSV)
        .with(ChartId::ConocimientoEspontaneo, CONOCIMIENTO_ESPONTANEO_CSV)
        .with(ChartId::ConocimientoGuiado, CONOCIMIENTO_GUIADO_CSV)
}

/// Outcome of one chart's resolve-and-render cycle.
#[derive(Debug, Clone, PartialEq)]
enum ChartStatus {
    Rendered,
    NoData(String),
    Failed(String),
}

/// Acquire, normalize, and render one chart.
/// Failures stay in this chart's slot; siblings are unaffected.
fn resolve_chart(
    store: &TableStore,
    chart: ChartId,
    waves: &[Wave],
    rubros: &[String],
) -> ChartStatus {
    let table = match store.get(chart) {
        Ok(table) => table,
        Err(e) => {
            log::error!("chart '{}': {}", chart, e);
            return ChartStatus::Failed(e.to_string());
        }
    };

    let mut filter = SurveyFilter::for_waves(waves);
    if chart.is_rubro_aware() {
        filter = filter.with_rubros(rubros.iter().cloned());
    }

    let records = mdm_data::normalize(&table, chart.layout(), &filter);
    if records.is_empty() {
        return ChartStatus::NoData(format!(
            "No se pudieron procesar los datos para {}",
            chart.slug()
        ));
    }

    let (data_json, config_json) = chart_data::chart_payload(chart, &records);
    js_bridge::render_chart(chart.kind(), &container_id(chart), &data_json, &config_json);
    ChartStatus::Rendered
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    // Per-chart outcomes of the last render cycle, in registry order.
    let mut chart_status: Signal<Vec<(ChartId, ChartStatus)>> = use_signal(Vec::new);

    // ─── Effect 1: Register the embedded data once on mount ───
    use_effect(move || {
        state.store.set(Some(TableStore::new(embedded_source())));
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Resolve and render every chart on selection change ───
    // Re-runs whenever loading, selected_waves, or selected_rubros change.
    use_effect(move || {
        let loading = (state.loading)();
        let waves = (state.selected_waves)();
        let rubros = (state.selected_rubros)();
        let store = (state.store)();

        if loading {
            return;
        }
        let store = match store {
            Some(store) => store,
            None => return,
        };

        let needs_rubro = ChartId::ALL.iter().any(|c| c.is_rubro_aware());
        if waves.is_empty() || (needs_rubro && rubros.is_empty()) {
            for chart in ChartId::ALL {
                js_bridge::destroy_chart(&container_id(chart));
            }
            chart_status.set(Vec::new());
            return;
        }

        let statuses: Vec<(ChartId, ChartStatus)> = ChartId::ALL
            .iter()
            .map(|&chart| (chart, resolve_chart(&store, chart, &waves, &rubros)))
            .collect();
        chart_status.set(statuses);
    });

    // ─── Render ───
    let waves_empty = state.selected_waves.read().is_empty();
    let rubros_empty = state.selected_rubros.read().is_empty()
        && ChartId::ALL.iter().any(|c| c.is_rubro_aware());
    let statuses = chart_status();
    let main_slot = statuses.first().cloned();
    let grid_slots: Vec<(ChartId, ChartStatus)> = statuses.get(1..).unwrap_or(&[]).to_vec();

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 8px 0 4px 0; font-size: 22px;",
                "Dashboard Monitor de Marca YPF Luz"
            }
            p {
                style: "margin: 0 0 16px 0; color: #555;",
                "Navega los indicadores más importantes del estudio de mercado."
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: grid; grid-template-columns: 1fr 2fr; gap: 12px; align-items: start;",

                    div {
                        style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px;",
                        WaveSelector {}
                        RubroSelector {}
                        if waves_empty {
                            WarningDisplay { message: "Selecciona al menos una ola para comparar".to_string() }
                        }
                        if rubros_empty {
                            WarningDisplay { message: "Selecciona al menos un rubro para comparar".to_string() }
                        }
                    }

                    div {
                        style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px;",
                        if let Some((chart, status)) = main_slot {
                            ChartSlot { chart: chart, status: status }
                        }
                    }
                }

                if !grid_slots.is_empty() {
                    h2 {
                        style: "margin: 20px 0 4px 0; font-size: 18px;",
                        "Análisis Individual de Gráficos"
                    }
                    p {
                        style: "margin: 0 0 12px 0; color: #555;",
                        "Comparación detallada entre olas para cada indicador seleccionado."
                    }
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                        for (chart, status) in grid_slots {
                            div {
                                style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px;",
                                ChartSlot { chart: chart, status: status }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Props for ChartSlot
#[derive(Props, Clone, PartialEq)]
struct ChartSlotProps {
    chart: ChartId,
    status: ChartStatus,
}

/// One chart card: header plus container, warning, or error.
#[component]
fn ChartSlot(props: ChartSlotProps) -> Element {
    let chart = props.chart;
    let body = match &props.status {
        ChartStatus::Rendered => rsx! {
            ChartContainer { id: container_id(chart), min_height: 400 }
        },
        ChartStatus::NoData(msg) => rsx! {
            WarningDisplay { message: msg.clone() }
        },
        ChartStatus::Failed(msg) => rsx! {
            ErrorDisplay { message: msg.clone() }
        },
    };

    rsx! {
        ChartHeader {
            title: chart.title().to_string(),
            subtitle: "Porcentaje de respuestas (%)".to_string(),
        }
        {body}
    }
}
