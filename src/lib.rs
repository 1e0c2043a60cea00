//! # Sarf
//!
//! Arabic morphological text analysis for Rust.
//!
//! ## Features
//!
//! - Word tokenization and sentence segmentation for Arabic script
//! - Dictionary-free ISRI root stemming
//! - Lossless Buckwalter transliteration
//! - Lexicon-backed morphological analysis with per-token candidate solutions
//! - Ambiguous-root detection and search by shared root
//!
//! ## Example
//!
//! ```
//! use sarf::analyzer::TextAnalyzer;
//!
//! let mut analyzer = TextAnalyzer::with_text("كيف تحولت من مدينة للانوار إلى الاشباح")?;
//! analyzer.analyze()?;
//! for word in analyzer.detect_ambiguous() {
//!     println!("ambiguous root: {word}");
//! }
//! # Ok::<(), sarf::error::SarfError>(())
//! ```

pub mod analysis;
pub mod analyzer;
pub mod buckwalter;
pub mod error;
pub mod morphology;

pub use analyzer::{ExtractedRecord, ProcessedRecord, TextAnalyzer};
pub use error::{Result, SarfError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
