pub mod controller;
pub mod filter;

pub use controller::{Selection, SelectionController};
pub use filter::{filter_projects, sub_categories_for, visible, ServiceIndex};
