use futures::join;
use tracing::warn;

use crate::content::{ContentError, TableSource};
use crate::types::Record;

pub const SERVICES_TABLE: &str = "service";
pub const PORTFOLIO_TABLE: &str = "portfolio";
pub const SUB_CATEGORIES_TABLE: &str = "service_sub_categories";

/// The three content tables plus the shared loading flag.
///
/// Records are produced once per session and immutable afterward; there is no
/// refetch, polling, or cache-invalidation policy. A caller wanting a reload
/// simply runs [`ContentStore::load_all`] again.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub services: Vec<Record>,
    pub portfolio: Vec<Record>,
    pub service_sub_categories: Vec<Record>,
    loading: bool,
}

impl ContentStore {
    /// The pre-load state: empty tables, `loading` true. What the UI renders
    /// skeletons from until [`ContentStore::load_all`] resolves.
    pub fn new() -> Self {
        ContentStore {
            services: Vec::new(),
            portfolio: Vec::new(),
            service_sub_categories: Vec::new(),
            loading: true,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Fetch all three tables concurrently and return the loaded store.
    ///
    /// A failing table is logged and left empty; it neither aborts the other
    /// fetches nor surfaces a distinguishable error state to consumers.
    /// `loading` is false on the returned store regardless of outcome.
    pub async fn load_all<S: TableSource>(source: &S) -> ContentStore {
        let (services, portfolio, sub_categories) = join!(
            source.fetch_table(SERVICES_TABLE),
            source.fetch_table(PORTFOLIO_TABLE),
            source.fetch_table(SUB_CATEGORIES_TABLE),
        );

        ContentStore {
            services: records_or_empty(SERVICES_TABLE, services),
            portfolio: records_or_empty(PORTFOLIO_TABLE, portfolio),
            service_sub_categories: records_or_empty(SUB_CATEGORIES_TABLE, sub_categories),
            loading: false,
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn records_or_empty(table: &str, result: Result<Vec<Record>, ContentError>) -> Vec<Record> {
    match result {
        Ok(records) => records,
        Err(err) => {
            warn!(table, %err, "table fetch failed, leaving it empty");
            Vec::new()
        }
    }
}
