//! Content loading and portfolio filtering core for a studio showcase site.
//!
//! `showcase-core` fetches the services, portfolio, and sub-category tables
//! from a spreadsheet-backed tabular-query endpoint, decodes each into an
//! ordered sequence of flat label→value records, and derives the visible
//! project list from the user's service/sub-category selection. Everything
//! presentational (layout, animation, the contact form) lives outside this
//! crate and consumes it through [`content::ContentStore`] and
//! [`selection::SelectionController`].

pub mod content;
pub mod selection;
pub mod types;
