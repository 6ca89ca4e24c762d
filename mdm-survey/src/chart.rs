use crate::wave::Wave;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one chart of the study. One CSV file per chart, named
/// `<slug>.csv` in the data directory.
///
/// This is the hand-maintained registry of the dashboard: adding a chart
/// means adding a variant here, extending the `ALL`/`slug`/`title`/`kind`/
/// `layout` tables below, and dropping the CSV next to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartId {
    ImportanciaEnergia,
    ImportanciaRenovables,
    ConocimientoEspontaneo,
    ConocimientoGuiado,
}

/// Chart encodings the dashboard can draw.
///
/// Closed set; `Bar` is the fallback for tags the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Pie,
    StackedBar,
    GroupedBar,
    Bar,
}

/// How a chart CSV names its measurement columns.
///
/// `Wave`: every data column is a bare wave label (`"Ola 1"`).
/// `WaveRubro`: every data column is `wave_rubro` (`"Ola1_Mineria"`),
/// split on the first underscore only.
///
/// The two formats existed as parallel scripts upstream; here they are a
/// single parsing mode selected per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnLayout {
    Wave,
    WaveRubro,
}

/// Rubros (respondent business sectors) fielded in the rubro-aware chart
/// files, as they appear after the underscore in composite column names.
pub const RUBROS: [&str; 4] = ["Total", "Energia", "Mineria", "Agro"];

impl ChartId {
    /// Every chart of the study, in dashboard display order. The first
    /// entry is the main chart; the rest fill the comparison grid.
    pub const ALL: [ChartId; 4] = [
        ChartId::ImportanciaEnergia,
        ChartId::ImportanciaRenovables,
        ChartId::ConocimientoEspontaneo,
        ChartId::ConocimientoGuiado,
    ];

    /// File stem of the chart's CSV, also its stable machine identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartId::ImportanciaEnergia => "importancia_energia",
            ChartId::ImportanciaRenovables => "importancia_renovables",
            ChartId::ConocimientoEspontaneo => "conocimiento_espontaneo",
            ChartId::ConocimientoGuiado => "conocimiento_guiado",
        }
    }

    /// Human-readable title shown above the chart.
    pub fn title(&self) -> &'static str {
        match self {
            ChartId::ImportanciaEnergia => "Importancia Energía",
            ChartId::ImportanciaRenovables => "Importancia Energías Renovables",
            ChartId::ConocimientoEspontaneo => "Conocimiento de la marca TOP OF MIND",
            ChartId::ConocimientoGuiado => "Conocimiento total de marcas guiado",
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartId::ImportanciaEnergia => ChartKind::Pie,
            ChartId::ImportanciaRenovables => ChartKind::StackedBar,
            ChartId::ConocimientoEspontaneo => ChartKind::GroupedBar,
            ChartId::ConocimientoGuiado => ChartKind::GroupedBar,
        }
    }

    pub fn layout(&self) -> ColumnLayout {
        match self {
            ChartId::ImportanciaEnergia => ColumnLayout::Wave,
            ChartId::ImportanciaRenovables => ColumnLayout::Wave,
            ChartId::ConocimientoEspontaneo => ColumnLayout::WaveRubro,
            ChartId::ConocimientoGuiado => ColumnLayout::WaveRubro,
        }
    }

    /// `<slug>.csv`, the file this chart is read from.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<ChartId> {
        ChartId::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    /// Whether this chart's records carry a rubro facet.
    pub fn is_rubro_aware(&self) -> bool {
        self.layout() == ColumnLayout::WaveRubro
    }

    /// Waves this chart can be filtered by. All charts currently share
    /// the study-wide wave list.
    pub fn waves(&self) -> &'static [Wave] {
        &crate::wave::WAVES
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl ChartKind {
    /// Registry tag for this encoding.
    pub fn tag(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::StackedBar => "stacked_bar",
            ChartKind::GroupedBar => "grouped_bar",
            ChartKind::Bar => "bar",
        }
    }

    /// Parse a registry tag. Unknown tags fall back to the plain bar
    /// encoding rather than failing.
    pub fn from_tag(tag: &str) -> ChartKind {
        match tag {
            "pie" => ChartKind::Pie,
            "stacked_bar" => ChartKind::StackedBar,
            "grouped_bar" => ChartKind::GroupedBar,
            _ => ChartKind::Bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartId, ChartKind, ColumnLayout};

    #[test]
    fn slugs_are_unique_and_round_trip() {
        for chart in ChartId::ALL {
            assert_eq!(ChartId::from_slug(chart.slug()), Some(chart));
        }
        let mut slugs: Vec<&str> = ChartId::ALL.iter().map(|c| c.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), ChartId::ALL.len());
    }

    #[test]
    fn unknown_slug_is_none() {
        assert_eq!(ChartId::from_slug("satisfaccion_general"), None);
    }

    #[test]
    fn registry_kinds_match_study_design() {
        assert_eq!(ChartId::ImportanciaEnergia.kind(), ChartKind::Pie);
        assert_eq!(ChartId::ImportanciaRenovables.kind(), ChartKind::StackedBar);
        assert_eq!(ChartId::ConocimientoEspontaneo.kind(), ChartKind::GroupedBar);
        assert_eq!(ChartId::ConocimientoGuiado.kind(), ChartKind::GroupedBar);
    }

    #[test]
    fn conocimiento_charts_are_rubro_aware() {
        assert_eq!(ChartId::ImportanciaEnergia.layout(), ColumnLayout::Wave);
        assert!(ChartId::ConocimientoEspontaneo.is_rubro_aware());
        assert!(ChartId::ConocimientoGuiado.is_rubro_aware());
        assert!(!ChartId::ImportanciaRenovables.is_rubro_aware());
    }

    #[test]
    fn kind_tags_round_trip_and_default_to_bar() {
        for kind in [
            ChartKind::Pie,
            ChartKind::StackedBar,
            ChartKind::GroupedBar,
            ChartKind::Bar,
        ] {
            assert_eq!(ChartKind::from_tag(kind.tag()), kind);
        }
        assert_eq!(ChartKind::from_tag("violin"), ChartKind::Bar);
        assert_eq!(ChartKind::from_tag(""), ChartKind::Bar);
    }

    #[test]
    fn file_names_follow_slug() {
        assert_eq!(
            ChartId::ImportanciaEnergia.file_name(),
            "importancia_energia.csv"
        );
    }
}
