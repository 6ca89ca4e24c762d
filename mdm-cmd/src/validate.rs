//! Data health check across the chart registry.

use log::{info, warn};
use mdm_data::SurveyFilter;
use mdm_store::{resolve_data_dir, DirSource, TableStore};
use mdm_survey::chart::ChartId;
use mdm_survey::wave::WAVES;
use std::collections::BTreeMap;
use std::path::Path;

/// Load and normalize every registry chart, logging a per-chart report.
///
/// Uses the full wave set and no rubro restriction so the report covers
/// everything a dashboard session could ask for. Acquisition failures are
/// reported per chart and skipped; the command fails at the end if any
/// chart could not be loaded.
pub fn run_validate(data_dir: Option<&Path>) -> anyhow::Result<()> {
    let dir = resolve_data_dir(data_dir);
    info!("Validating chart data in {}", dir.display());

    let store = TableStore::new(DirSource::new(&dir));
    let filter = SurveyFilter::for_waves(&WAVES);
    let mut failures = 0u32;

    for chart in ChartId::ALL {
        let table = match store.get(chart) {
            Ok(table) => table,
            Err(e) => {
                warn!("{}", e);
                failures += 1;
                continue;
            }
        };

        let records = mdm_data::normalize(&table, chart.layout(), &filter);

        let mut per_wave: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &records {
            *per_wave.entry(record.wave.as_str()).or_default() += 1;
        }
        let wave_counts: Vec<String> = per_wave
            .iter()
            .map(|(wave, n)| format!("{}={}", wave, n))
            .collect();

        // Cells that were dropped during cleanup or excluded by column
        // interpretation, relative to the full row x column grid.
        let cell_grid = table.row_count() * table.data_headers().len();
        let dropped = cell_grid.saturating_sub(records.len());

        info!(
            "{}: {} rows x {} data columns -> {} records, {} cells dropped or filtered ({})",
            chart.slug(),
            table.row_count(),
            table.data_headers().len(),
            records.len(),
            dropped,
            wave_counts.join(", ")
        );

        if records.is_empty() {
            warn!("{}: no records survive normalization", chart.slug());
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} charts failed to load", failures, ChartId::ALL.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_validate;
    use mdm_survey::chart::{ChartId, ColumnLayout};
    use std::path::Path;

    fn write_full_registry(dir: &Path) {
        for chart in ChartId::ALL {
            let csv_text = match chart.layout() {
                ColumnLayout::Wave => "Categoria,Ola 1,Ola 2\nMuy importante,45%,52%\n",
                ColumnLayout::WaveRubro => "Marca,Ola1_Total,Ola2_Total\nYPF Luz,34%,39%\n",
            };
            std::fs::write(dir.join(chart.file_name()), csv_text).unwrap();
        }
    }

    #[test]
    fn passes_on_a_complete_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_full_registry(dir.path());
        assert!(run_validate(Some(dir.path())).is_ok());
    }

    #[test]
    fn fails_when_a_chart_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_full_registry(dir.path());
        std::fs::remove_file(dir.path().join(ChartId::ConocimientoGuiado.file_name())).unwrap();

        let err = run_validate(Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("1 of 4"), "{err}");
    }

    #[test]
    fn fails_when_a_chart_file_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        write_full_registry(dir.path());
        std::fs::write(
            dir.path().join(ChartId::ImportanciaEnergia.file_name()),
            "Categoria,Ola 1,Ola 2\n",
        )
        .unwrap();

        assert!(run_validate(Some(dir.path())).is_err());
    }

    #[test]
    fn degraded_data_is_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_full_registry(dir.path());
        // Rows survive acquisition but nothing survives cleanup
        std::fs::write(
            dir.path().join(ChartId::ImportanciaEnergia.file_name()),
            "Categoria,Ola 1,Ola 2\n15%,no,data\n",
        )
        .unwrap();

        assert!(run_validate(Some(dir.path())).is_ok());
    }
}
