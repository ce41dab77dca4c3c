//! Hexagram assembly.
//!
//! A [`Hexagram`] is built once, either from six generated lines or from an
//! explicit line sequence, and never mutated afterwards. The changed
//! trigrams, palace and role labels are always derived here.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime};
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::element::Element;
use crate::error::{GuaError, GuaResult};
use crate::line::{Polarity, generate_line};
use crate::roles::{SixRelative, SixSpirit};
use crate::season::Season;
use crate::stem_branch::{HeavenlyStem, StemBranch, sequence};
use crate::trigram::Trigram;

/// Split six lines into (lower, upper) trigrams.
pub fn assemble_trigrams(lines: &[u8; 6]) -> GuaResult<(Trigram, Trigram)> {
    let lower = Trigram::from_lines([lines[0], lines[1], lines[2]])?;
    let upper = Trigram::from_lines([lines[3], lines[4], lines[5]])?;
    Ok((lower, upper))
}

fn split(lines: &[u8; 6]) -> (Trigram, Trigram) {
    let bits = lines.map(|v| v == 1);
    (
        Trigram::from_bits([bits[0], bits[1], bits[2]]),
        Trigram::from_bits([bits[3], bits[4], bits[5]]),
    )
}

/// Flip every line whose index is in `changing`. Indices past 5 are ignored.
pub fn derive_changed_lines(lines: &[u8; 6], changing: &BTreeSet<usize>) -> [u8; 6] {
    let mut changed = *lines;
    for &i in changing {
        if let Some(line) = changed.get_mut(i) {
            *line = 1 - (*line).min(1);
        }
    }
    changed
}

/// The palace of a hexagram is its lower trigram.
pub fn palace_of(lower: Trigram) -> Trigram {
    lower
}

/// The `"{lower}_{upper}"` key used for text lookups.
pub fn trigram_key(lower: Trigram, upper: Trigram) -> String {
    format!("{lower}_{upper}")
}

/// A cast hexagram with everything derived from its lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hexagram {
    lines: [u8; 6],
    changing_lines: BTreeSet<usize>,
    original_trigrams: (Trigram, Trigram),
    changed_trigrams: (Trigram, Trigram),
    palace: Trigram,
    stem_branches: [StemBranch; 6],
    six_relatives: [SixRelative; 6],
    six_spirits: [SixSpirit; 6],
    topic: String,
    time: NaiveDateTime,
}

impl Hexagram {
    /// Build a hexagram from explicit lines.
    ///
    /// `stem_offset` and `branch_offset` pick the start of the stem/branch
    /// sequence and wrap modulo 10 and 12.
    pub fn from_lines(
        lines: [u8; 6],
        changing: BTreeSet<usize>,
        stem_offset: usize,
        branch_offset: usize,
        topic: impl Into<String>,
        time: NaiveDateTime,
    ) -> GuaResult<Self> {
        if let Some((index, &value)) = lines.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(GuaError::InvalidLine { index, value });
        }
        if let Some(&index) = changing.iter().find(|i| **i > 5) {
            return Err(GuaError::LineIndex(index));
        }
        Ok(Self::build(
            lines,
            changing,
            stem_offset,
            branch_offset,
            topic.into(),
            time,
        ))
    }

    fn build(
        lines: [u8; 6],
        changing: BTreeSet<usize>,
        stem_offset: usize,
        branch_offset: usize,
        topic: String,
        time: NaiveDateTime,
    ) -> Self {
        let original_trigrams = split(&lines);
        let changed_trigrams = split(&derive_changed_lines(&lines, &changing));
        let palace = palace_of(original_trigrams.0);
        let stem_branches = sequence(stem_offset, branch_offset);
        let palace_element = palace.element();
        let six_relatives =
            std::array::from_fn(|i| SixRelative::derive(palace_element, stem_branches[i].element));
        let six_spirits = SixSpirit::sequence(stem_branches[0].stem);

        tracing::debug!(
            lower = %original_trigrams.0,
            upper = %original_trigrams.1,
            changing = changing.len(),
            "assembled hexagram"
        );

        Self {
            lines,
            changing_lines: changing,
            original_trigrams,
            changed_trigrams,
            palace,
            stem_branches,
            six_relatives,
            six_spirits,
            topic,
            time,
        }
    }

    /// Build from a line slice, checking the count first.
    pub fn from_slice(
        lines: &[u8],
        changing: BTreeSet<usize>,
        topic: impl Into<String>,
        time: NaiveDateTime,
    ) -> GuaResult<Self> {
        let lines: [u8; 6] = lines
            .try_into()
            .map_err(|_| GuaError::LineCount(lines.len()))?;
        Self::from_lines(lines, changing, 0, 0, topic, time)
    }

    /// Line values, bottom first.
    pub fn lines(&self) -> &[u8; 6] {
        &self.lines
    }

    /// Polarity of the line at 0-based `index`.
    pub fn polarity(&self, index: usize) -> Polarity {
        Polarity::of(self.lines[index % 6])
    }

    /// 0-based indices of the changing lines.
    pub fn changing_lines(&self) -> &BTreeSet<usize> {
        &self.changing_lines
    }

    /// Whether the line at 0-based `index` is changing.
    pub fn is_changing(&self, index: usize) -> bool {
        self.changing_lines.contains(&index)
    }

    /// Lines after flipping the changing ones.
    pub fn changed_lines(&self) -> [u8; 6] {
        derive_changed_lines(&self.lines, &self.changing_lines)
    }

    /// (lower, upper) trigrams of the cast hexagram.
    pub fn original_trigrams(&self) -> (Trigram, Trigram) {
        self.original_trigrams
    }

    /// (lower, upper) trigrams after the changes are applied.
    pub fn changed_trigrams(&self) -> (Trigram, Trigram) {
        self.changed_trigrams
    }

    /// Lower trigram.
    pub fn lower(&self) -> Trigram {
        self.original_trigrams.0
    }

    /// Upper trigram.
    pub fn upper(&self) -> Trigram {
        self.original_trigrams.1
    }

    /// The palace trigram.
    pub fn palace(&self) -> Trigram {
        self.palace
    }

    /// Stem/branch pairs, bottom first.
    pub fn stem_branches(&self) -> &[StemBranch; 6] {
        &self.stem_branches
    }

    /// Six-relative labels, bottom first.
    pub fn six_relatives(&self) -> &[SixRelative; 6] {
        &self.six_relatives
    }

    /// Six-spirit labels, bottom first.
    pub fn six_spirits(&self) -> &[SixSpirit; 6] {
        &self.six_spirits
    }

    /// The question asked.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// When the hexagram was cast.
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Season of the casting month.
    pub fn season(&self) -> Season {
        Season::from_month(self.time.month())
    }

    /// Stem of the first stem/branch entry.
    pub fn celestial_stem(&self) -> HeavenlyStem {
        self.stem_branches[0].stem
    }

    /// Element of the first stem: the reference point for the ten gods.
    pub fn day_master(&self) -> Element {
        self.celestial_stem().element()
    }

    /// Text lookup key of the cast hexagram.
    pub fn key(&self) -> String {
        trigram_key(self.original_trigrams.0, self.original_trigrams.1)
    }

    /// Text lookup key of the changed hexagram, if any line changes.
    pub fn changed_key(&self) -> Option<String> {
        if self.changing_lines.is_empty() {
            None
        } else {
            Some(trigram_key(self.changed_trigrams.0, self.changed_trigrams.1))
        }
    }

    /// Element of the line at 1-based `position`: upper trigram for 4-6,
    /// lower trigram otherwise.
    pub fn line_element(&self, position: usize) -> Element {
        if position >= 4 {
            self.upper().element()
        } else {
            self.lower().element()
        }
    }
}

/// Cast a hexagram: six coin-toss lines plus a random stem/branch start.
pub fn generate_hexagram(
    topic: impl Into<String>,
    rng: &mut StdRng,
    time: NaiveDateTime,
) -> Hexagram {
    let mut lines = [0u8; 6];
    let mut changing = BTreeSet::new();
    for (i, slot) in lines.iter_mut().enumerate() {
        let line = generate_line(rng);
        *slot = line.value;
        if line.changing {
            changing.insert(i);
        }
    }
    let stem_offset = rng.random_range(0..10);
    let branch_offset = rng.random_range(0..12);
    Hexagram::build(
        lines,
        changing,
        stem_offset,
        branch_offset,
        topic.into(),
        time,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn pure_yang() {
        let h = Hexagram::from_lines([1; 6], BTreeSet::new(), 0, 0, "t", at()).unwrap();
        assert_eq!(h.original_trigrams(), (Trigram::Qian, Trigram::Qian));
        assert_eq!(h.key(), "乾_乾");
        assert_eq!(h.changed_key(), None);
        assert_eq!(h.changed_trigrams(), h.original_trigrams());
    }

    #[test]
    fn pure_yin_with_outer_changes() {
        let h = Hexagram::from_lines([0; 6], set(&[0, 5]), 0, 0, "t", at()).unwrap();
        assert_eq!(h.changed_lines(), [1, 0, 0, 0, 0, 1]);
        assert_eq!(h.changed_trigrams(), (Trigram::Zhen, Trigram::Gen));
        assert_ne!(h.changed_trigrams().0, Trigram::Kun);
        assert_eq!(h.changed_key().as_deref(), Some("震_艮"));
    }

    #[test]
    fn rejects_bad_lines() {
        assert_eq!(
            Hexagram::from_lines([1, 0, 2, 0, 1, 1], BTreeSet::new(), 0, 0, "", at()),
            Err(GuaError::InvalidLine { index: 2, value: 2 })
        );
        assert_eq!(
            Hexagram::from_lines([1; 6], set(&[6]), 0, 0, "", at()),
            Err(GuaError::LineIndex(6))
        );
        assert_eq!(
            Hexagram::from_slice(&[1, 0, 1], BTreeSet::new(), "", at()),
            Err(GuaError::LineCount(3))
        );
    }

    #[test]
    fn palace_is_lower() {
        let h = Hexagram::from_lines([1, 0, 0, 1, 1, 1], BTreeSet::new(), 0, 0, "", at()).unwrap();
        assert_eq!(h.palace(), Trigram::Zhen);
        assert_eq!(h.line_element(1), Element::Wood);
        assert_eq!(h.line_element(6), Element::Metal);
    }

    #[test]
    fn roles_follow_stems_and_palace() {
        // 乾 palace (metal); stems start at 甲, branches at 子.
        let h = Hexagram::from_lines([1; 6], BTreeSet::new(), 0, 0, "", at()).unwrap();
        assert_eq!(h.celestial_stem(), HeavenlyStem::Jia);
        assert_eq!(h.day_master(), Element::Wood);
        assert_eq!(h.six_spirits()[0], SixSpirit::AzureDragon);
        // 子 water: metal generates water.
        assert_eq!(h.six_relatives()[0], SixRelative::Offspring);
        // 丑 earth: earth generates metal.
        assert_eq!(h.six_relatives()[1], SixRelative::Parents);
        // 寅 wood: metal overcomes wood.
        assert_eq!(h.six_relatives()[2], SixRelative::Wealth);
    }

    #[test]
    fn derive_changed_is_an_involution() {
        let lines = [1, 0, 1, 1, 0, 0];
        let changing = set(&[1, 2, 4]);
        let once = derive_changed_lines(&lines, &changing);
        assert_eq!(derive_changed_lines(&once, &changing), lines);
    }

    #[test]
    fn generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        let h1 = generate_hexagram("q", &mut a, at());
        let h2 = generate_hexagram("q", &mut b, at());
        assert_eq!(h1, h2);
        assert!(h1.lines().iter().all(|v| *v <= 1));
        assert_eq!(h1.season(), Season::Spring);
    }
}
