//! # fundus-search
//!
//! Read-only query pipeline over a doctor's patient records: optional text
//! and date filters (combined conjunctively), a stable sort by diagnosis
//! timestamp descending, and offset/page-size pagination with next/prev
//! indicators.
//!
//! The pipeline is stateless per call and operates on an owned copy of the
//! input; pagination state lives in a caller-owned [`PageCursor`].
//!
//! ## Modules
//!
//! - [`filter`] - Text and date predicates
//! - [`engine`] - [`PatientQuery`] and pipeline execution
//! - [`page`] - [`QueryPage`] results and the [`PageCursor`]

pub mod engine;
pub mod filter;
pub mod page;

pub use engine::{DEFAULT_PAGE_SIZE, PatientQuery};
pub use filter::{DateFilter, TextFilter};
pub use page::{PageCursor, QueryPage};
