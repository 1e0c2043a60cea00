//! Text analysis collaborators for Sarf.
//!
//! This module provides the word tokenizer, root stemmer, lemmatizer, and
//! sentence segmenter that [`crate::analyzer::TextAnalyzer`] orchestrates.
//! Each collaborator sits behind a trait so alternative implementations can
//! be swapped in.

pub mod lemmatizer;
pub mod segmenter;
pub mod stemmer;
pub mod tokenizer;

// Re-export commonly used types
pub use lemmatizer::*;
pub use segmenter::*;
pub use stemmer::*;
pub use tokenizer::*;
