pub mod gviz;
pub mod source;
pub mod store;

pub use gviz::decode_table;
pub use source::{ContentError, SheetSource, TableSource, DEFAULT_BASE_URL};
pub use store::{ContentStore, PORTFOLIO_TABLE, SERVICES_TABLE, SUB_CATEGORIES_TABLE};
