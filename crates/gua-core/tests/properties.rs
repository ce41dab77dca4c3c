//! Property-based tests.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use gua_core::{
    Element, ElementCounts, Hexagram, Relation, Trigram, assemble_trigrams, balance_score, cycle,
    derive_changed_lines, relation_type, strength,
};
use proptest::prelude::*;

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::ALL.to_vec())
}

fn lines() -> impl Strategy<Value = [u8; 6]> {
    prop::array::uniform6(0u8..=1)
}

fn changing() -> impl Strategy<Value = BTreeSet<usize>> {
    prop::collection::btree_set(0usize..6, 0..=6)
}

// ── Trigram table ─────────────────────────────────────────────────────────

#[test]
fn eight_triplets_give_eight_distinct_trigrams() {
    let mut seen = BTreeSet::new();
    for bits in 0u8..8 {
        let triplet = [(bits >> 2) & 1, (bits >> 1) & 1, bits & 1];
        seen.insert(Trigram::from_lines(triplet).unwrap());
    }
    assert_eq!(seen.len(), 8);
}

// ── Element graph ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_cycle_closes_after_five_steps(e in element()) {
        for relation in Relation::CYCLIC {
            let steps = cycle(e, relation).unwrap();
            prop_assert_eq!(steps.len(), 5);
            prop_assert_eq!(steps[0].0, e);
            prop_assert_eq!(steps[4].1, e);
            let visited: BTreeSet<Element> = steps.iter().map(|(from, _)| *from).collect();
            prop_assert_eq!(visited.len(), 5);
        }
    }

    #[test]
    fn strength_is_bounded(a in element(), b in element()) {
        let s = strength(a, b);
        prop_assert!((0.0..=1.0).contains(&s), "strength {} out of range", s);
    }

    #[test]
    fn self_relation_is_full_strength(e in element()) {
        prop_assert_eq!(relation_type(e, e), Relation::SameKind);
        prop_assert_eq!(strength(e, e), 1.0);
    }

    #[test]
    fn balance_is_bounded(counts in prop::array::uniform5(0u32..20)) {
        let score = balance_score(&ElementCounts::from_array(counts));
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn equal_counts_are_perfectly_balanced(n in 1u32..50) {
        prop_assert_eq!(balance_score(&ElementCounts::from_array([n; 5])), 1.0);
    }

    #[test]
    fn skewing_one_count_lowers_balance(n in 1u32..5, extra in 1u32..20) {
        let even = balance_score(&ElementCounts::from_array([n; 5]));
        let skewed = balance_score(&ElementCounts::from_array([n + extra, n, n, n, n]));
        prop_assert!(skewed < even);
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn flipping_twice_is_identity(lines in lines(), changing in changing()) {
        let once = derive_changed_lines(&lines, &changing);
        prop_assert_eq!(derive_changed_lines(&once, &changing), lines);
    }

    #[test]
    fn changed_trigrams_match_flipped_lines(lines in lines(), changing in changing()) {
        let h = Hexagram::from_lines(lines, changing.clone(), 0, 0, "", at()).unwrap();
        let expected = assemble_trigrams(&derive_changed_lines(&lines, &changing)).unwrap();
        prop_assert_eq!(h.changed_trigrams(), expected);
        prop_assert_eq!(h.palace(), h.lower());
        prop_assert_eq!(h.changed_key().is_none(), changing.is_empty());
    }

    #[test]
    fn stem_branch_offsets_wrap(stem in 0usize..100, branch in 0usize..100) {
        let a = Hexagram::from_lines([1; 6], BTreeSet::new(), stem, branch, "", at()).unwrap();
        let b = Hexagram::from_lines([1; 6], BTreeSet::new(), stem % 10, branch % 12, "", at()).unwrap();
        prop_assert_eq!(a.stem_branches(), b.stem_branches());
    }
}

// ── Fixed scenarios ───────────────────────────────────────────────────────

#[test]
fn pure_yang_is_qian_over_qian() {
    let h = Hexagram::from_lines([1; 6], BTreeSet::new(), 0, 0, "", at()).unwrap();
    assert_eq!(h.original_trigrams(), (Trigram::Qian, Trigram::Qian));
    assert_eq!(h.key(), "乾_乾");
}

#[test]
fn pure_yin_outer_changes() {
    let changing: BTreeSet<usize> = [0, 5].into_iter().collect();
    let h = Hexagram::from_lines([0; 6], changing, 0, 0, "", at()).unwrap();
    assert_eq!(h.changed_lines(), [1, 0, 0, 0, 0, 1]);
    assert_ne!(h.changed_trigrams().0, Trigram::Kun);
}
