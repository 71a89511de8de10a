//! Data models for temples, festivals, circuits and the bundled dataset

pub mod circuit;
pub mod dataset;
pub mod festival;
pub mod temple;

pub use circuit::{Circuit, CircuitStop};
pub use dataset::TempleDataset;
pub use festival::{FestivalCalendar, FestivalEntry};
pub use temple::{DeityCategory, Temple};
