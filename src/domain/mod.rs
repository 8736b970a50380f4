//! Domain layer - Business logic and domain models

pub mod front_matter;
pub mod headings;
pub mod journal;
pub mod slug;
pub mod tags;

pub use front_matter::{FrontMatterDocument, TagSet};
pub use journal::{Entry, Journal, JournalConfig, JournalInfo, TimeFormat};
pub use tags::TagSymbols;
