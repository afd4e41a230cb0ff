pub mod identifiers;
pub mod record;

pub use identifiers::{ServiceId, SubCategoryId};
pub use record::Record;
