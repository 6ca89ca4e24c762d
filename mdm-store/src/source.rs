use crate::error::AcquireError;
use mdm_survey::chart::ChartId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where raw chart CSV text comes from.
///
/// The dashboard embeds its tables at compile time; the command-line tools
/// read them from a data directory. Both hand the store plain CSV text and
/// report failures per chart.
pub trait TableSource {
    fn fetch(&self, chart: ChartId) -> Result<String, AcquireError>;
}

/// CSV tables compiled into the binary, typically via `include_str!`.
#[derive(Clone, Default)]
pub struct EmbeddedSource {
    tables: HashMap<ChartId, &'static str>,
}

impl EmbeddedSource {
    pub fn new() -> EmbeddedSource {
        EmbeddedSource::default()
    }

    /// Register the CSV text for one chart.
    pub fn with(mut self, chart: ChartId, csv_text: &'static str) -> EmbeddedSource {
        self.tables.insert(chart, csv_text);
        self
    }
}

impl TableSource for EmbeddedSource {
    fn fetch(&self, chart: ChartId) -> Result<String, AcquireError> {
        self.tables
            .get(&chart)
            .map(|text| text.to_string())
            .ok_or(AcquireError::NotFound(chart))
    }
}

/// CSV tables read from `<dir>/<slug>.csv` on each fetch.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> DirSource {
        DirSource { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The on-disk path a chart's table is expected at.
    pub fn path_for(&self, chart: ChartId) -> PathBuf {
        self.dir.join(chart.file_name())
    }
}

impl TableSource for DirSource {
    fn fetch(&self, chart: ChartId) -> Result<String, AcquireError> {
        let path = self.path_for(chart);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AcquireError::NotFound(chart),
            _ => AcquireError::Unreadable(chart, e.to_string()),
        })
    }
}

/// Locate the data directory for on-disk sources.
///
/// An explicitly supplied directory always wins. Otherwise look for a
/// `fixtures/` directory next to the running executable, so a packaged
/// install finds its bundled data regardless of the launch directory,
/// and fall back to `fixtures/` under the current working directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let bundled = parent.join("fixtures");
            if bundled.is_dir() {
                return bundled;
            }
        }
    }
    PathBuf::from("fixtures")
}

#[cfg(test)]
mod tests {
    use super::{resolve_data_dir, DirSource, EmbeddedSource, TableSource};
    use crate::error::AcquireError;
    use mdm_survey::chart::ChartId;
    use std::path::Path;

    const ENERGIA_CSV: &str = "Categoria,Ola 1,Ola 2\nMuy importante,45%,52%\n";

    #[test]
    fn embedded_source_serves_registered_text() {
        let source = EmbeddedSource::new().with(ChartId::ImportanciaEnergia, ENERGIA_CSV);
        let text = source.fetch(ChartId::ImportanciaEnergia).unwrap();
        assert_eq!(text, ENERGIA_CSV);
    }

    #[test]
    fn embedded_source_misses_are_not_found() {
        let source = EmbeddedSource::new();
        assert_eq!(
            source.fetch(ChartId::ConocimientoGuiado),
            Err(AcquireError::NotFound(ChartId::ConocimientoGuiado))
        );
    }

    #[test]
    fn dir_source_reads_chart_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ChartId::ImportanciaEnergia.file_name()),
            ENERGIA_CSV,
        )
        .unwrap();

        let source = DirSource::new(dir.path());
        let text = source.fetch(ChartId::ImportanciaEnergia).unwrap();
        assert_eq!(text, ENERGIA_CSV);
    }

    #[test]
    fn dir_source_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert_eq!(
            source.fetch(ChartId::ImportanciaEnergia),
            Err(AcquireError::NotFound(ChartId::ImportanciaEnergia))
        );
    }

    #[test]
    fn dir_source_io_failure_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the CSV file should be
        std::fs::create_dir(dir.path().join(ChartId::ImportanciaEnergia.file_name())).unwrap();

        let source = DirSource::new(dir.path());
        match source.fetch(ChartId::ImportanciaEnergia) {
            Err(AcquireError::Unreadable(chart, _)) => {
                assert_eq!(chart, ChartId::ImportanciaEnergia)
            }
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/srv/survey-data")));
        assert_eq!(dir, Path::new("/srv/survey-data"));
    }

    #[test]
    fn default_data_dir_is_named_fixtures() {
        let dir = resolve_data_dir(None);
        assert_eq!(dir.file_name().unwrap(), "fixtures");
    }
}
