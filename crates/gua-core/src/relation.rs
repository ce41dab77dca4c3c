//! The five-element relation graph.
//!
//! Each cyclic relation is a permutation of the five elements stored as a
//! `[Element; 5]` indexed by [`Element::index`]. Together with the identity
//! the four permutations form a Latin square, so every ordered pair of
//! elements is covered by exactly one relation.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementCounts};
use crate::error::{GuaError, GuaResult};

use Element::{Earth, Fire, Metal, Water, Wood};

const GENERATING: [Element; 5] = [Water, Fire, Wood, Earth, Metal];
const OVERCOMING: [Element; 5] = [Wood, Earth, Fire, Metal, Water];
const DRAINING: [Element; 5] = [Earth, Water, Metal, Wood, Fire];
const TRANSFORMING: [Element; 5] = [Fire, Metal, Earth, Water, Wood];

/// How one element stands to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// 同类
    SameKind,
    /// 生
    Generating,
    /// 克
    Overcoming,
    /// 泄
    Draining,
    /// 化
    Transforming,
    /// 异类
    Unrelated,
}

impl Relation {
    /// The four cyclic relations, in lookup priority order.
    pub const CYCLIC: [Self; 4] = [
        Self::Generating,
        Self::Overcoming,
        Self::Draining,
        Self::Transforming,
    ];

    /// Parse a Chinese or English relation name.
    pub fn parse(s: &str) -> GuaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "生" | "generating" | "generate" => Ok(Self::Generating),
            "克" | "overcoming" | "overcome" => Ok(Self::Overcoming),
            "泄" | "draining" | "drain" => Ok(Self::Draining),
            "化" | "transforming" | "transform" => Ok(Self::Transforming),
            "同类" | "same" | "samekind" | "same-kind" => Ok(Self::SameKind),
            "异类" | "unrelated" => Ok(Self::Unrelated),
            _ => Err(GuaError::InvalidRelation(s.to_string())),
        }
    }

    /// The permutation backing a cyclic relation.
    pub fn permutation(self) -> Option<&'static [Element; 5]> {
        match self {
            Self::Generating => Some(&GENERATING),
            Self::Overcoming => Some(&OVERCOMING),
            Self::Draining => Some(&DRAINING),
            Self::Transforming => Some(&TRANSFORMING),
            Self::SameKind | Self::Unrelated => None,
        }
    }

    /// The element `from` maps to under this relation.
    pub fn target(self, from: Element) -> Option<Element> {
        self.permutation().map(|p| p[from.index()])
    }

    /// Base weight before seasonal and directional adjustment.
    pub fn base_strength(self) -> f64 {
        match self {
            Self::SameKind => 1.0,
            Self::Generating => 0.8,
            Self::Transforming => 0.7,
            Self::Overcoming => 0.6,
            Self::Draining => 0.4,
            Self::Unrelated => 0.3,
        }
    }

    /// Whether the relation reads as supportive.
    pub fn is_favorable(self) -> bool {
        matches!(
            self,
            Self::Generating | Self::Transforming | Self::SameKind
        )
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SameKind => "同类",
            Self::Generating => "生",
            Self::Overcoming => "克",
            Self::Draining => "泄",
            Self::Transforming => "化",
            Self::Unrelated => "异类",
        }
    }

    /// English name.
    pub fn english(self) -> &'static str {
        match self {
            Self::SameKind => "same-kind",
            Self::Generating => "generating",
            Self::Overcoming => "overcoming",
            Self::Draining => "draining",
            Self::Transforming => "transforming",
            Self::Unrelated => "unrelated",
        }
    }

    /// Names of the five stages a cycle of this relation passes through.
    pub fn stages(self) -> Option<[&'static str; 5]> {
        match self {
            Self::Generating => Some(["初始", "发展", "成熟", "转化", "完成"]),
            Self::Overcoming => Some(["主导", "受制", "缓冲", "调节", "平衡"]),
            Self::Draining => Some(["储备", "释放", "消耗", "补充", "恢复"]),
            Self::Transforming => Some(["原始", "变化", "转型", "新生", "回归"]),
            Self::SameKind | Self::Unrelated => None,
        }
    }

    fn advice(self) -> RelationAdvice {
        let (enhance, adjust, watch) = match self {
            Self::Generating => (
                ["注重滋养关系", "保持稳定供给", "建立良性循环"],
                ["适度补充", "维持平衡", "避免过度"],
                ["防止消耗过度", "关注反馈", "保持适度"],
            ),
            Self::Overcoming => (
                ["把握适度", "建立制衡", "明确边界"],
                ["避免过激", "保持理性", "寻求平衡"],
                ["防止伤害", "注意限度", "保持克制"],
            ),
            Self::Draining => (
                ["适度释放", "保持流通", "注重转化"],
                ["控制节奏", "维持动力", "避免耗散"],
                ["防止衰竭", "保持储备", "注意补充"],
            ),
            Self::Transforming => (
                ["促进转化", "把握时机", "注重质变"],
                ["控制进度", "保持方向", "维持动力"],
                ["防止偏离", "注意稳定", "关注效果"],
            ),
            Self::SameKind | Self::Unrelated => (
                ["保持现状", "稳定发展", "适度调整"],
                ["维持平衡", "适度改善", "注意协调"],
                ["避免冲突", "保持距离", "寻求共识"],
            ),
        };
        RelationAdvice {
            enhance,
            adjust,
            watch,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify how `a` stands to `b`.
pub fn relation_type(a: Element, b: Element) -> Relation {
    if a == b {
        return Relation::SameKind;
    }
    Relation::CYCLIC
        .into_iter()
        .find(|r| r.target(a) == Some(b))
        .unwrap_or(Relation::Unrelated)
}

/// Weighted strength of the relation from `a` to `b`, in [0, 1].
pub fn strength(a: Element, b: Element) -> f64 {
    let mut s = relation_type(a, b).base_strength();
    if a.season() == b.season() {
        s *= 1.2;
    }
    if a.direction() == b.direction() {
        s *= 1.1;
    }
    s.min(1.0)
}

/// Follow a cyclic relation five times from `start`.
///
/// Returns the five `(from, to)` steps. Fails if the relation is not cyclic
/// or the walk does not return to `start`.
pub fn cycle(start: Element, relation: Relation) -> GuaResult<Vec<(Element, Element)>> {
    let perm = relation.permutation().ok_or_else(|| GuaError::CycleNotClosed {
        relation: relation.to_string(),
        start: start.to_string(),
    })?;
    let mut steps = Vec::with_capacity(5);
    let mut current = start;
    for _ in 0..5 {
        let next = perm[current.index()];
        steps.push((current, next));
        current = next;
    }
    if current != start {
        return Err(GuaError::CycleNotClosed {
            relation: relation.to_string(),
            start: start.to_string(),
        });
    }
    Ok(steps)
}

/// How evenly the counts are spread, in [0, 1], rounded to 2 decimals.
///
/// Computed as `1 - variance / mean²`. All-zero counts score 1.0.
pub fn balance_score(counts: &ElementCounts) -> f64 {
    let n = Element::ALL.len() as f64;
    let mean = f64::from(counts.total()) / n;
    if mean == 0.0 {
        return 1.0;
    }
    let variance = counts
        .iter()
        .map(|(_, c)| (f64::from(c) - mean).powi(2))
        .sum::<f64>()
        / n;
    let score = (1.0 - variance / (mean * mean)).clamp(0.0, 1.0);
    round2(score)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// A classified, weighted relation between two elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRelation {
    /// Relation kind.
    pub kind: Relation,
    /// Weighted strength.
    pub strength: f64,
    /// Human-readable description.
    pub description: String,
    /// Whether the relation reads as supportive.
    pub favorable: bool,
}

impl ElementRelation {
    /// Classify and describe the relation from `a` to `b`.
    pub fn between(a: Element, b: Element) -> Self {
        let kind = relation_type(a, b);
        let description = match kind {
            Relation::Generating => format!("{a}生{b}，关系有利，注重滋养"),
            Relation::Overcoming => format!("{a}克{b}，关系受制，需要平衡"),
            Relation::Draining => format!("{a}泄于{b}，关系消耗，注意补充"),
            Relation::Transforming => format!("{a}化为{b}，关系转化，把握变化"),
            Relation::SameKind => format!("同属{a}，关系和谐，注重稳定"),
            Relation::Unrelated => format!("{a}与{b}异类，关系疏离，需要协调"),
        };
        Self {
            kind,
            strength: strength(a, b),
            description,
            favorable: kind.is_favorable(),
        }
    }
}

/// Enhance / adjust / watch advice for one relation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationAdvice {
    /// 增强
    pub enhance: [&'static str; 3],
    /// 调节
    pub adjust: [&'static str; 3],
    /// 注意
    pub watch: [&'static str; 3],
}

/// Advice for handling the relation between two elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationRecommendation {
    /// The relation being advised on.
    pub relation: ElementRelation,
    /// Generic advice for the relation kind.
    pub advice: RelationAdvice,
    /// Lead-in sentence reflecting the relation's strength.
    pub emphasis: &'static str,
    /// Concrete actions built from the elements' attributes.
    pub actions: Vec<String>,
}

/// Build advice for the relation from `a` to `b`.
pub fn recommend(a: Element, b: Element) -> RelationRecommendation {
    let relation = ElementRelation::between(a, b);
    let emphasis = if relation.strength > 0.8 {
        "当前关系强度较高，建议："
    } else if relation.strength > 0.5 {
        "当前关系强度适中，建议："
    } else {
        "当前关系强度较弱，建议："
    };
    let actions = match relation.kind {
        Relation::Generating => vec![
            format!("可以通过{}味食物来增强{a}的特性", a.taste()),
            format!("在{}方位活动有助于关系发展", a.direction()),
            format!("适合在{}季节采取行动", a.season()),
        ],
        Relation::Overcoming => vec![
            format!("注意避免在{}季节采取重要行动", b.season()),
            format!("可以用{b}的{}色调来缓和关系", b.color()),
            format!("通过{}来平衡关系", b.advice().enhance[0]),
        ],
        Relation::Draining => vec![
            format!("建议在{}方位进行调节", b.direction()),
            format!("可以通过{}来维持能量", a.advice().enhance[0]),
            format!("注意在{}季节进行能量储备", a.season()),
        ],
        _ => {
            let hour = a.hours().first().map(|h| h.name()).unwrap_or_default();
            vec![
                format!("可以选择在{hour}时辰行动"),
                format!("通过{}来促进转化", b.advice().behaviour[0]),
                format!("注意调动{}情志的力量", a.emotion()),
            ]
        }
    };
    RelationRecommendation {
        advice: relation.kind.advice(),
        relation,
        emphasis,
        actions,
    }
}

/// Where an element sits within one relation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStage {
    /// The cyclic relation.
    pub relation: Relation,
    /// Index of the element within its own cycle.
    pub position: usize,
    /// The element it maps to.
    pub next: Element,
    /// Number of steps in the cycle.
    pub length: usize,
    /// Whether the walk returned to its start.
    pub closed: bool,
    /// Stage description.
    pub description: String,
}

/// Walk all four cycles from `element` and describe its place in each.
pub fn analyze_cycles(element: Element) -> GuaResult<Vec<CycleStage>> {
    Relation::CYCLIC
        .into_iter()
        .map(|relation| {
            let steps = cycle(element, relation)?;
            let position = steps
                .iter()
                .position(|(from, _)| *from == element)
                .unwrap_or(0);
            let stage = relation.stages().map(|s| s[position]).unwrap_or_default();
            Ok(CycleStage {
                relation,
                position,
                next: steps[position].1,
                length: steps.len(),
                closed: steps.last().map(|(_, to)| *to) == Some(element),
                description: format!("在{relation}的循环中处于{stage}阶段"),
            })
        })
        .collect()
}
