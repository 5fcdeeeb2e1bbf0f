//! NBA schedule loader
//!
//! Imports the season schedule CSV into the schedule store and answers
//! "which games are on this date" with exact-match lookups against the
//! file's own date format.

pub mod date;
pub mod error;
pub mod loader;
pub mod query;
pub mod record;

pub use date::{to_source_date, SOURCE_DATE_FORMAT};
pub use error::{LoaderError, Result};
pub use loader::{load_schedule, load_schedule_file, LoadSummary, DEFAULT_SCHEDULE_FILE};
pub use query::{games_on_date, games_on_stored_date, GameLookup};
pub use record::ScheduleRecord;
