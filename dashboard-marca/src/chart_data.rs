//! Record-to-JSON shaping for the D3 bridge.
//!
//! Normalized records are chart-agnostic; each encoding needs its own row
//! shape and config. The donut additionally needs the single-wave rule:
//! show the latest selected wave present in the data.

use mdm_data::SurveyRecord;
use mdm_survey::chart::{ChartId, ChartKind};
use mdm_survey::wave::Wave;

/// Wave token shown in a single-wave (donut) chart: the latest wave
/// present in the records, falling back to the first wave present when
/// no token parses as a wave.
pub fn pie_wave(records: &[SurveyRecord]) -> Option<String> {
    let mut latest: Option<(Wave, &str)> = None;
    for record in records {
        if let Some(wave) = Wave::parse(&record.wave) {
            match latest {
                Some((best, _)) if best >= wave => {}
                _ => latest = Some((wave, &record.wave)),
            }
        }
    }
    latest
        .map(|(_, token)| token.to_string())
        .or_else(|| records.first().map(|r| r.wave.clone()))
}

/// Human label for a wave column token ("Ola1" and "Ola 1" both display
/// as "Ola 1"; unrecognized tokens pass through).
pub fn wave_display(token: &str) -> String {
    Wave::parse(token)
        .map(|w| w.label())
        .unwrap_or_else(|| token.to_string())
}

/// Legend label for one record: the wave alone, or wave plus rubro when
/// several rubros are in play and the wave alone would collide.
fn series_label(record: &SurveyRecord, multi_rubro: bool) -> String {
    let wave = wave_display(&record.wave);
    match (&record.rubro, multi_rubro) {
        (Some(rubro), true) => format!("{} - {}", wave, rubro),
        _ => wave,
    }
}

/// JSON rows for the multi-series bar encodings.
pub fn series_rows(records: &[SurveyRecord]) -> Vec<serde_json::Value> {
    let mut rubros: Vec<&str> = records.iter().filter_map(|r| r.rubro.as_deref()).collect();
    rubros.sort_unstable();
    rubros.dedup();
    let multi_rubro = rubros.len() > 1;

    records
        .iter()
        .map(|r| {
            serde_json::json!({
                "category": r.category,
                "series": series_label(r, multi_rubro),
                "value": r.value,
            })
        })
        .collect()
}

/// JSON rows for the donut: only the records of the chosen wave.
pub fn pie_rows(records: &[SurveyRecord], wave_token: &str) -> Vec<serde_json::Value> {
    records
        .iter()
        .filter(|r| r.wave == wave_token)
        .map(|r| {
            serde_json::json!({
                "category": r.category,
                "value": r.value,
            })
        })
        .collect()
}

/// Serialized `(data_json, config_json)` pair for one chart.
pub fn chart_payload(chart: ChartId, records: &[SurveyRecord]) -> (String, String) {
    match chart.kind() {
        ChartKind::Pie => {
            let token = pie_wave(records).unwrap_or_default();
            let rows = pie_rows(records, &token);
            let config = serde_json::json!({
                "title": format!("{} ({})", chart.title(), wave_display(&token)),
                "valueLabel": "%",
                "height": 400,
            });
            (
                serde_json::to_string(&rows).unwrap_or_default(),
                config.to_string(),
            )
        }
        kind => {
            let rows = series_rows(records);
            let x_label = match kind {
                ChartKind::StackedBar => "Ola",
                _ => "Categoría",
            };
            let config = serde_json::json!({
                "title": chart.title(),
                "xLabel": x_label,
                "yLabel": "Porcentaje (%)",
                "height": 400,
            });
            (
                serde_json::to_string(&rows).unwrap_or_default(),
                config.to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{chart_payload, pie_rows, pie_wave, series_rows, wave_display};
    use mdm_data::SurveyRecord;
    use mdm_survey::chart::ChartId;

    fn record(category: &str, wave: &str, rubro: Option<&str>, value: f64) -> SurveyRecord {
        SurveyRecord {
            category: category.to_string(),
            wave: wave.to_string(),
            rubro: rubro.map(str::to_string),
            value,
        }
    }

    #[test]
    fn pie_wave_prefers_the_latest_wave_present() {
        let records = vec![
            record("Muy importante", "Ola 1", None, 62.0),
            record("Muy importante", "Ola 2", None, 68.0),
        ];
        assert_eq!(pie_wave(&records).as_deref(), Some("Ola 2"));

        let compact = vec![
            record("YPF Luz", "Ola2", Some("Total"), 39.0),
            record("YPF Luz", "Ola1", Some("Total"), 34.0),
        ];
        assert_eq!(pie_wave(&compact).as_deref(), Some("Ola2"));
    }

    #[test]
    fn pie_wave_falls_back_to_first_wave_present() {
        let records = vec![
            record("A", "Temporada Alta", None, 10.0),
            record("A", "Temporada Baja", None, 12.0),
        ];
        assert_eq!(pie_wave(&records).as_deref(), Some("Temporada Alta"));
        assert_eq!(pie_wave(&[]), None);
    }

    #[test]
    fn pie_rows_keep_only_the_chosen_wave() {
        let records = vec![
            record("Muy importante", "Ola 1", None, 62.0),
            record("Muy importante", "Ola 2", None, 68.0),
            record("Algo importante", "Ola 2", None, 21.0),
        ];
        let rows = pie_rows(&records, "Ola 2");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.get("wave").is_none()));
        assert_eq!(rows[0]["category"], "Muy importante");
        assert_eq!(rows[0]["value"], 68.0);
    }

    #[test]
    fn series_label_is_wave_only_for_a_single_rubro() {
        let records = vec![
            record("YPF Luz", "Ola1", Some("Total"), 34.0),
            record("YPF Luz", "Ola2", Some("Total"), 39.0),
        ];
        let rows = series_rows(&records);
        assert_eq!(rows[0]["series"], "Ola 1");
        assert_eq!(rows[1]["series"], "Ola 2");
    }

    #[test]
    fn series_label_carries_the_rubro_when_several_are_shown() {
        let records = vec![
            record("YPF Luz", "Ola1", Some("Total"), 34.0),
            record("YPF Luz", "Ola1", Some("Mineria"), 28.0),
        ];
        let rows = series_rows(&records);
        assert_eq!(rows[0]["series"], "Ola 1 - Total");
        assert_eq!(rows[1]["series"], "Ola 1 - Mineria");
    }

    #[test]
    fn wave_display_normalizes_both_spellings() {
        assert_eq!(wave_display("Ola1"), "Ola 1");
        assert_eq!(wave_display("Ola 2"), "Ola 2");
        assert_eq!(wave_display("Temporada Alta"), "Temporada Alta");
    }

    #[test]
    fn pie_payload_titles_name_the_wave() {
        let records = vec![
            record("Muy importante", "Ola 1", None, 62.0),
            record("Muy importante", "Ola 2", None, 68.0),
        ];
        let (data_json, config_json) = chart_payload(ChartId::ImportanciaEnergia, &records);
        let config: serde_json::Value = serde_json::from_str(&config_json).unwrap();
        assert_eq!(config["title"], "Importancia Energía (Ola 2)");

        let rows: Vec<serde_json::Value> = serde_json::from_str(&data_json).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn bar_payload_labels_match_the_encoding() {
        let records = vec![
            record("Muy importante", "Ola 1", None, 55.0),
            record("Muy importante", "Ola 2", None, 61.0),
        ];
        let (_, config_json) = chart_payload(ChartId::ImportanciaRenovables, &records);
        let config: serde_json::Value = serde_json::from_str(&config_json).unwrap();
        assert_eq!(config["xLabel"], "Ola");
        assert_eq!(config["yLabel"], "Porcentaje (%)");

        let (_, config_json) = chart_payload(ChartId::ConocimientoGuiado, &records);
        let config: serde_json::Value = serde_json::from_str(&config_json).unwrap();
        assert_eq!(config["xLabel"], "Categoría");
    }
}
