mod constraints;
mod data;
mod engine;
mod results;
mod strategies;

pub use constraints::WordConstraints;
pub use data::{Corpus, CorpusError, Word};
pub use engine::*;
pub use results::*;
pub use strategies::*;
