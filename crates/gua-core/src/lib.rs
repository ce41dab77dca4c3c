//! Hexagram generation and the five-element relation graph.
//!
//! Casts six lines by the three-coin method, assembles them into trigrams,
//! and attaches the stem/branch sequence and role labels. The element
//! relation graph (generating, overcoming, draining and transforming
//! cycles) and its strength and balance metrics live here too, so the
//! analysis layer only reads.

pub mod config;
pub mod element;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod relation;
pub mod roles;
pub mod season;
pub mod stem_branch;
pub mod trigram;

pub use config::DivinationConfig;
pub use element::{Element, ElementCounts};
pub use error::{GuaError, GuaResult};
pub use hexagram::{
    Hexagram, assemble_trigrams, derive_changed_lines, generate_hexagram, palace_of, trigram_key,
};
pub use line::{Line, LineKind, Polarity, generate_line};
pub use relation::{ElementRelation, Relation, balance_score, cycle, relation_type, strength};
pub use roles::{Nature, SixRelative, SixSpirit, TenGod};
pub use season::{Direction, Season};
pub use stem_branch::{EarthlyBranch, HeavenlyStem, StemBranch};
pub use trigram::{Phase, TimeMark, Trigram};
