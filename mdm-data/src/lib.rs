//! Survey data normalization: the reshaping core of the dashboard.
//!
//! Chart CSVs arrive wide — one measurement column per wave, or per
//! wave×rubro combination — with spreadsheet-export noise: percent signs,
//! stray whitespace, empty cells, the odd total row ingested as data.
//! This crate unpivots a [`RawTable`] into long-form [`SurveyRecord`]s,
//! applying every cleanup and filtering policy in one place:
//!
//! - cell values are trimmed, a trailing `%` is stripped, and the rest
//!   must parse as a finite number; anything else is dropped, never
//!   coerced to zero;
//! - a row whose category is empty or itself contains `%` is a malformed
//!   header/total artifact and is excluded entirely;
//! - composite column names split on the FIRST underscore only, so a
//!   rubro may legitimately contain underscores;
//! - wave and rubro filters are independent inclusion sets.
//!
//! Output order is deterministic: original row order, then original
//! column order within each row. An empty result means "no displayable
//! data" and is the expected outcome for empty filters, thin tables, or
//! fully malformed input — never an error.

use mdm_survey::chart::ColumnLayout;
use mdm_survey::raw_table::RawTable;
use mdm_survey::wave::Wave;
use serde::Serialize;
use std::collections::HashSet;

/// One normalized long-form measurement: a category's value for a wave
/// (and rubro, when the chart's columns carry one).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurveyRecord {
    pub category: String,
    pub wave: String,
    pub rubro: Option<String>,
    pub value: f64,
}

/// Facet selection applied during normalization.
///
/// `waves` is matched against the wave token of every measurement column;
/// `rubros`, when present, is matched against the rubro token of composite
/// columns. Records from bare-wave columns have no rubro and are never
/// excluded by the rubro set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyFilter {
    pub waves: HashSet<String>,
    pub rubros: Option<HashSet<String>>,
}

impl SurveyFilter {
    /// Filter for a set of selected waves, expanded through
    /// [`Wave::column_keys`] so one selection matches either CSV naming
    /// convention (`"Ola 1"` and `"Ola1"`).
    pub fn for_waves(waves: &[Wave]) -> SurveyFilter {
        SurveyFilter {
            waves: waves.iter().flat_map(|w| w.column_keys()).collect(),
            rubros: None,
        }
    }

    /// Filter for literal wave tokens, matched exactly.
    pub fn for_wave_tokens<I, S>(tokens: I) -> SurveyFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SurveyFilter {
            waves: tokens.into_iter().map(Into::into).collect(),
            rubros: None,
        }
    }

    /// Restrict to a rubro set, matched exactly against composite columns.
    pub fn with_rubros<I, S>(mut self, rubros: I) -> SurveyFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rubros = Some(rubros.into_iter().map(Into::into).collect());
        self
    }

    fn keeps_wave(&self, wave: &str) -> bool {
        self.waves.contains(wave)
    }

    fn keeps_rubro(&self, rubro: Option<&str>) -> bool {
        match (&self.rubros, rubro) {
            (Some(allowed), Some(r)) => allowed.contains(r),
            // No rubro filter supplied, or a bare-wave column: not applicable.
            _ => true,
        }
    }
}

/// A measurement column interpreted under a chart's layout.
struct DataColumn {
    index: usize,
    wave: String,
    rubro: Option<String>,
}

/// Interpret the measurement column headers of `table` under `layout`.
///
/// Headers are trimmed before interpretation. Under `WaveRubro`, a header
/// without any underscore does not match the convention and the column is
/// skipped (dropped, not fatal), consistent with cell-level recovery.
fn interpret_columns(table: &RawTable, layout: ColumnLayout) -> Vec<DataColumn> {
    table
        .data_headers()
        .iter()
        .enumerate()
        .filter_map(|(i, header)| {
            let name = header.trim();
            if name.is_empty() {
                return None;
            }
            // data_headers starts after the category column
            let index = i + 1;
            match layout {
                ColumnLayout::Wave => Some(DataColumn {
                    index,
                    wave: name.to_string(),
                    rubro: None,
                }),
                ColumnLayout::WaveRubro => {
                    let (wave, rubro) = name.split_once('_')?;
                    Some(DataColumn {
                        index,
                        wave: wave.to_string(),
                        rubro: Some(rubro.to_string()),
                    })
                }
            }
        })
        .collect()
}

/// Clean and parse one measurement cell.
///
/// Trims surrounding whitespace, strips one trailing `%` (whitespace
/// between the number and the sign is tolerated), then parses as `f64`.
/// Only finite numbers survive: `parse::<f64>` happily accepts `"NaN"`
/// and `"inf"`, which are malformed as survey values.
pub fn parse_value(raw: &str) -> Option<f64> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    let cleaned = cleaned.strip_suffix('%').unwrap_or(cleaned).trim();
    let value: f64 = cleaned.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Validate a category cell, returning the trimmed label.
///
/// Empty categories and categories containing `%` are header/total rows
/// accidentally ingested as data, not real categories.
pub fn valid_category(raw: &str) -> Option<&str> {
    let label = raw.trim();
    (!label.is_empty() && !label.contains('%')).then_some(label)
}

/// Unpivot `table` into filtered long-form records.
///
/// Returns records in row-major order (original row order, then original
/// column order). The result is empty — never an error — when the table
/// has fewer than two columns, the wave filter is empty, or nothing
/// survives cleanup and filtering.
pub fn normalize(table: &RawTable, layout: ColumnLayout, filter: &SurveyFilter) -> Vec<SurveyRecord> {
    if table.column_count() < 2 || filter.waves.is_empty() {
        return Vec::new();
    }

    let columns: Vec<DataColumn> = interpret_columns(table, layout)
        .into_iter()
        .filter(|c| filter.keeps_wave(&c.wave) && filter.keeps_rubro(c.rubro.as_deref()))
        .collect();
    if columns.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut dropped_cells = 0u32;
    let mut dropped_rows = 0u32;

    for row in table.rows() {
        let category = match row.first().map(String::as_str).and_then(valid_category) {
            Some(c) => c,
            None => {
                dropped_rows += 1;
                continue;
            }
        };

        for column in &columns {
            // Ragged rows leave trailing cells missing; treat like any
            // other unusable value.
            let value = match row.get(column.index).and_then(|c| parse_value(c)) {
                Some(v) => v,
                None => {
                    dropped_cells += 1;
                    continue;
                }
            };
            records.push(SurveyRecord {
                category: category.to_string(),
                wave: column.wave.clone(),
                rubro: column.rubro.clone(),
                value,
            });
        }
    }

    if dropped_rows > 0 || dropped_cells > 0 {
        log::debug!(
            "normalize: kept {} records, dropped {} rows and {} cells",
            records.len(),
            dropped_rows,
            dropped_cells
        );
    }
    records
}
