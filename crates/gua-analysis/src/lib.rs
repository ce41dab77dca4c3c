//! Relational analysis of cast hexagrams.
//!
//! Every analyzer is a pure function of a [`gua_core::Hexagram`] (plus a
//! [`ContextType`] where readings differ by area of life). [`analyze`] runs
//! them all and folds the results into a serializable [`Report`]. Hexagram
//! and line texts come through the [`TextLookup`] trait; a miss leaves the
//! field empty.

pub mod changes;
pub mod config;
pub mod context;
pub mod five_elements;
pub mod najia;
pub mod positional;
pub mod recommend;
pub mod report;
pub mod text;
pub mod trend;

pub use config::AnalysisConfig;
pub use context::ContextType;
pub use report::{Report, analyze};
pub use text::{EmptyTexts, HexagramText, TextError, TextLookup, TextResult, TextTable};
