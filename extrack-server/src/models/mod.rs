//! Domain models with validation at construction
//!
//! All client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod username;
pub mod exercise;
pub mod date;
pub mod log_query;

pub use validation::ValidationError;
pub use username::Username;
pub use exercise::{Description, Minutes, RawNumber};
pub use date::{Calendar, CalendarDate};
pub use log_query::{LogQuery, LogQueryParams};
