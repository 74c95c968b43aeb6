//! Feature engineering transformers.

mod first_letter;

pub use first_letter::FirstLetterExtractor;
