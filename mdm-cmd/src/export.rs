//! Normalized long-form export, one dated CSV per chart.

use chrono::Local;
use log::{info, warn};
use mdm_data::{SurveyFilter, SurveyRecord};
use mdm_store::{resolve_data_dir, DirSource, TableStore};
use mdm_survey::chart::ChartId;
use mdm_survey::wave::WAVES;
use std::path::Path;

/// Write every chart's normalized records to `<out_dir>/<slug>_<YYYYMMDD>.csv`.
///
/// The export carries the full wave set and no rubro restriction; rows are
/// `category,wave,rubro,value` with rubro empty for bare-wave charts.
pub fn run_export(data_dir: Option<&Path>, out_dir: &Path) -> anyhow::Result<()> {
    let dir = resolve_data_dir(data_dir);
    let store = TableStore::new(DirSource::new(&dir));
    std::fs::create_dir_all(out_dir)?;

    let filter = SurveyFilter::for_waves(&WAVES);
    let stamp = Local::now().format("%Y%m%d").to_string();
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
        let out_path = out_dir.join(format!("{}_{}.csv", chart.slug(), stamp));
        write_records(&out_path, &records)?;

        info!(
            "{}: {} records written to {}",
            chart.slug(),
            records.len(),
            out_path.display()
        );
    }

    if failures > 0 {
        anyhow::bail!("{} of {} charts failed to load", failures, ChartId::ALL.len());
    }
    Ok(())
}

/// Write records as `category,wave,rubro,value` with a header row.
fn write_records(path: &Path, records: &[SurveyRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["category", "wave", "rubro", "value"])?;
    for record in records {
        wtr.write_record([
            record.category.as_str(),
            record.wave.as_str(),
            record.rubro.as_deref().unwrap_or(""),
            &record.value.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
