//! Cached table acquisition for the brand-monitor dashboard.
//!
//! Each chart's data lives in its own small CSV file. This crate turns a
//! [`TableSource`] (embedded text in the WASM app, a data directory for
//! the command-line tools) into parsed [`RawTable`]s, fetching and parsing
//! each file at most once per store.
//!
//! # Architecture
//!
//! - `Rc<RefCell<HashMap<..>>>` cache for interior mutability in
//!   single-threaded WASM; the store is cheaply cloneable and every clone
//!   shares the same cache
//! - parsed tables are handed out as `Rc<RawTable>` so consumers never
//!   copy the data
//! - failures are per chart ([`AcquireError`]) and never cached, so a
//!   fixed file is picked up on the next fetch
//!
//! # Usage
//!
//! ```rust
//! use mdm_store::{EmbeddedSource, TableStore};
//! use mdm_survey::chart::ChartId;
//!
//! let source = EmbeddedSource::new()
//!     .with(ChartId::ImportanciaEnergia, "Categoria,Ola 1,Ola 2\nMuy importante,45%,52%\n");
//! let store = TableStore::new(source);
//!
//! let table = store.get(ChartId::ImportanciaEnergia).unwrap();
//! assert_eq!(table.row_count(), 1);
//! ```

mod error;
mod source;

pub use error::AcquireError;
pub use source::{resolve_data_dir, DirSource, EmbeddedSource, TableSource};

use mdm_survey::chart::ChartId;
use mdm_survey::raw_table::RawTable;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Parse-once cache over a [`TableSource`].
#[derive(Clone)]
pub struct TableStore {
    source: Rc<dyn TableSource>,
    cache: Rc<RefCell<HashMap<ChartId, Rc<RawTable>>>>,
}

impl TableStore {
    pub fn new(source: impl TableSource + 'static) -> TableStore {
        TableStore {
            source: Rc::new(source),
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// The parsed table for a chart, fetching through the source on the
    /// first request.
    ///
    /// A file with no data rows is an acquisition failure
    /// ([`AcquireError::Empty`]); deciding what to do with rows that later
    /// fail cleanup is the normalizer's job, not the store's.
    pub fn get(&self, chart: ChartId) -> Result<Rc<RawTable>, AcquireError> {
        if let Some(table) = self.cache.borrow().get(&chart) {
            return Ok(Rc::clone(table));
        }

        let text = self.source.fetch(chart)?;
        let table = RawTable::parse(&text)
            .map_err(|e| AcquireError::Unreadable(chart, e.to_string()))?;
        if table.is_empty() {
            return Err(AcquireError::Empty(chart));
        }
        log::info!(
            "loaded table for chart '{}': {} rows, {} columns",
            chart,
            table.row_count(),
            table.column_count()
        );

        let table = Rc::new(table);
        self.cache.borrow_mut().insert(chart, Rc::clone(&table));
        Ok(table)
    }

    /// Drop a chart's cached table so the next [`get`](TableStore::get)
    /// fetches it again.
    pub fn invalidate(&self, chart: ChartId) {
        self.cache.borrow_mut().remove(&chart);
    }

    pub fn invalidate_all(&self) {
        self.cache.borrow_mut().clear();
    }
}
