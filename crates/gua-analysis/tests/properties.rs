//! Property-based tests.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use gua_analysis::positional::{line_strength, response_position, world_position, world_response};
use gua_analysis::changes::DevelopmentPattern;
use gua_analysis::{ContextType, EmptyTexts, TextTable, analyze};
use gua_core::{DivinationConfig, Hexagram, Trigram};
use proptest::prelude::*;

fn at(month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn hexagram() -> impl Strategy<Value = Hexagram> {
    (
        prop::array::uniform6(0u8..=1),
        prop::collection::btree_set(0usize..6, 0..=6),
        0usize..10,
        0usize..12,
        1u32..=12,
    )
        .prop_map(|(lines, changing, stem, branch, month)| {
            Hexagram::from_lines(lines, changing, stem, branch, "", at(month)).unwrap()
        })
}

fn context() -> impl Strategy<Value = ContextType> {
    prop::sample::select(ContextType::ALL.to_vec())
}

// ── Positional ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn line_strength_is_bounded(position in 1usize..=6, value in 0u8..=1, changing: bool) {
        let s = line_strength(position, value, changing);
        prop_assert!((0.5..=1.0).contains(&s.value));
        prop_assert_eq!(s.description, s.level.description());
    }

    #[test]
    fn changing_never_weakens_a_line(position in 1usize..=6, value in 0u8..=1) {
        let still = line_strength(position, value, false);
        let moving = line_strength(position, value, true);
        prop_assert!(moving.value > still.value);
    }

    #[test]
    fn world_and_response_are_three_apart(h in hexagram()) {
        let wr = world_response(&h);
        prop_assert_eq!(wr.world + wr.response, 7);
        prop_assert_eq!(wr.world.abs_diff(wr.response), 3);
        prop_assert_eq!(wr.world_moving, h.is_changing(wr.world - 1));
    }
}

#[test]
fn zhen_palace_world_two_response_five() {
    assert_eq!(world_position(Trigram::Zhen), 2);
    assert_eq!(response_position(Trigram::Zhen), 5);
}

// ── Report ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn report_is_consistent(h in hexagram(), ctx in context()) {
        let r = analyze(&h, ctx, &EmptyTexts);
        prop_assert_eq!(r.basic_info.context, ctx);
        prop_assert_eq!(r.line_layout.lines.len(), 6);
        prop_assert_eq!(r.hexagram_info.lines.len(), 6);
        prop_assert_eq!(r.hexagram_info.changed.is_some(), !h.changing_lines().is_empty());
        prop_assert_eq!(r.relationships.changes.count, h.changing_lines().len());
        prop_assert_eq!(r.line_layout.dynamics.changing, h.changing_lines().len());

        let score = r.relationships.five_elements.status.score;
        prop_assert!((0.0..=100.0).contains(&score));
        let balance = r.relationships.five_elements.tally.balance;
        prop_assert!((0.0..=1.0).contains(&balance));
        let confidence = r.relationships.trend.confidence;
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!(r.relationships.relatives.main.len() <= 2);
        prop_assert_eq!(r.recommendations.najia.len(), 4);
    }

    #[test]
    fn seeded_casts_are_reproducible(seed: u64) {
        let cfg = DivinationConfig::default().with_seed(seed).with_time(at(6));
        let a = analyze(&cfg.cast(), ContextType::General, TextTable::bundled());
        let b = analyze(&cfg.cast(), ContextType::General, TextTable::bundled());
        prop_assert_eq!(a, b);
    }
}

#[test]
fn changed_hexagram_absent_without_changes() {
    let h = Hexagram::from_lines([0, 1, 0, 0, 1, 0], BTreeSet::new(), 3, 7, "", at(3)).unwrap();
    let r = analyze(&h, ContextType::Relationship, TextTable::bundled());
    assert!(r.hexagram_info.changed.is_none());
    assert_eq!(r.hexagram_info.original.key, "坎_坎");
    assert_eq!(r.line_layout.world_response.world, 6);
    assert_eq!(r.relationships.changes.temporal.pattern, DevelopmentPattern::Stable);
    assert_eq!(r.relationships.response_line.position, 1);
}
