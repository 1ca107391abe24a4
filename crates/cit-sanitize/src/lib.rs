//! Cleaning primitives applied to citation text before indexing.
//!
//! - **period**: strip sentence-terminal and stray periods
//! - **name**: classify how well-formed an author name is
//! - **date**: classify how complete a loosely formatted date is
//!
//! The quality functions return `None` when no level applies; callers emit a
//! quality field only for `Some`.

pub mod date;
pub mod name;
pub mod period;

pub use date::{DateQuality, date_quality};
pub use name::{NameQuality, author_name_quality};
pub use period::remove_period;
