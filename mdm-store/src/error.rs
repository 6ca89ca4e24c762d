use mdm_survey::chart::ChartId;
use std::fmt;

/// Why a chart's data table could not be produced.
///
/// Acquisition failures are always scoped to a single chart so one broken
/// file never takes down the rest of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireError {
    /// No data file exists for the chart at the configured location.
    NotFound(ChartId),
    /// The file exists but could not be read or parsed as CSV.
    Unreadable(ChartId, String),
    /// The file parsed but contains no data rows.
    Empty(ChartId),
}

impl AcquireError {
    /// The chart whose acquisition failed.
    pub fn chart(&self) -> ChartId {
        match self {
            AcquireError::NotFound(c)
            | AcquireError::Unreadable(c, _)
            | AcquireError::Empty(c) => *c,
        }
    }
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquireError::NotFound(chart) => {
                write!(f, "no data file '{}' for chart '{}'", chart.file_name(), chart)
            }
            AcquireError::Unreadable(chart, detail) => {
                write!(f, "could not read data for chart '{}': {}", chart, detail)
            }
            AcquireError::Empty(chart) => {
                write!(f, "data file for chart '{}' has no rows", chart)
            }
        }
    }
}

impl std::error::Error for AcquireError {}

#[cfg(test)]
mod tests {
    use super::AcquireError;
    use mdm_survey::chart::ChartId;

    #[test]
    fn error_reports_its_chart() {
        let err = AcquireError::NotFound(ChartId::ImportanciaEnergia);
        assert_eq!(err.chart(), ChartId::ImportanciaEnergia);

        let err = AcquireError::Unreadable(ChartId::ConocimientoGuiado, "bad csv".to_string());
        assert_eq!(err.chart(), ChartId::ConocimientoGuiado);
    }

    #[test]
    fn display_names_the_file() {
        let err = AcquireError::NotFound(ChartId::ImportanciaEnergia);
        let msg = err.to_string();
        assert!(msg.contains("importancia_energia.csv"), "{msg}");
    }
}
