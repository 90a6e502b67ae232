pub mod dictionary;
pub mod error;
pub mod language;
pub mod preprocess;

pub use dictionary::{Dictionary, DictionaryEntry, EntryFormat};
pub use error::DictionaryError;
pub use preprocess::{normalize, normalize_compact, normalize_query};
