pub mod converter;
pub mod loader;
pub mod processor;
pub mod suggest;
pub mod syllables;

pub use converter::{Converter, convert};
pub use loader::DictionaryLoader;
pub use processor::MandarinProcessor;
pub use suggest::{DEFAULT_SUGGESTION_LIMIT, suggest};
pub use syllables::SyllableTable;
