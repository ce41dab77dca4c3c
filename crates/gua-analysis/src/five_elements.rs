//! Five-element balance of a hexagram and its original/changed comparison.

use gua_core::relation::{CycleStage, RelationRecommendation, analyze_cycles, recommend};
use gua_core::{
    Element, ElementCounts, ElementRelation, Hexagram, Relation, Season, balance_score,
};
use serde::Serialize;

/// Element tallies with their extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementTally {
    /// Weighted counts.
    pub counts: ElementCounts,
    /// Elements with the highest count.
    pub strongest: Vec<Element>,
    /// Elements with the lowest count.
    pub weakest: Vec<Element>,
    /// Balance score in [0, 1].
    pub balance: f64,
}

/// One directed relation between two of the hexagram's elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationEntry {
    /// Which pair this is, e.g. 上卦→下卦.
    pub label: &'static str,
    /// Source element.
    pub from: Element,
    /// Target element.
    pub to: Element,
    /// The classified relation.
    pub relation: ElementRelation,
}

/// Number of relations of each cyclic kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelationScores {
    /// 生
    pub generating: u32,
    /// 克
    pub overcoming: u32,
    /// 泄
    pub draining: u32,
    /// 化
    pub transforming: u32,
}

impl RelationScores {
    fn add(&mut self, relation: Relation) {
        match relation {
            Relation::Generating => self.generating += 1,
            Relation::Overcoming => self.overcoming += 1,
            Relation::Draining => self.draining += 1,
            Relation::Transforming => self.transforming += 1,
            Relation::SameKind | Relation::Unrelated => {}
        }
    }

    /// Relations of any cyclic kind.
    pub fn total(&self) -> u32 {
        self.generating + self.overcoming + self.draining + self.transforming
    }

    /// Share of cyclic relations that generate or transform; 0 when none.
    pub fn favorable_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.generating + self.transforming) / f64::from(total),
        }
    }

    /// Most frequent cyclic relation. Ties go to the earlier of
    /// generating, overcoming, draining, transforming; `None` when no cyclic
    /// relation occurred.
    pub fn dominant(&self) -> Option<Relation> {
        let counted = [
            (Relation::Generating, self.generating),
            (Relation::Overcoming, self.overcoming),
            (Relation::Draining, self.draining),
            (Relation::Transforming, self.transforming),
        ];
        let mut best: Option<(Relation, u32)> = None;
        for (relation, count) in counted {
            if count > 0 && best.is_none_or(|(_, top)| count > top) {
                best = Some((relation, count));
            }
        }
        best.map(|(relation, _)| relation)
    }
}

/// Seasonal support for the time element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalInfluence {
    /// Season of the casting month.
    pub season: Season,
    /// Element ruling the season.
    pub season_element: Element,
    /// Relation from the season element to the time element.
    pub relation: Relation,
    /// Whether the season supports the time element.
    pub favorable: bool,
}

/// Bucketed overall five-element status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLevel {
    /// 极佳
    Excellent,
    /// 良好
    Good,
    /// 一般
    Fair,
    /// 欠佳
    Poor,
    /// 不利
    Adverse,
}

impl StatusLevel {
    fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else if score >= 20.0 {
            Self::Poor
        } else {
            Self::Adverse
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Excellent => "极佳",
            Self::Good => "良好",
            Self::Fair => "一般",
            Self::Poor => "欠佳",
            Self::Adverse => "不利",
        }
    }
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall five-element verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStatus {
    /// Score out of 100, one decimal.
    pub score: f64,
    /// Bucket.
    pub level: StatusLevel,
    /// Advice lines.
    pub recommendations: Vec<String>,
}

/// Full five-element analysis of a hexagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveElementAnalysis {
    /// Element of the upper trigram.
    pub upper: Element,
    /// Element of the lower trigram.
    pub lower: Element,
    /// Element of the casting time (the day master).
    pub time: Element,
    /// Weighted counts.
    pub tally: ElementTally,
    /// Upper→lower, time→upper, time→lower.
    pub relations: Vec<RelationEntry>,
    /// Count per cyclic relation.
    pub scores: RelationScores,
    /// Dominant cyclic relation, if any.
    pub dominant: Option<Relation>,
    /// Seasonal support.
    pub seasonal: SeasonalInfluence,
    /// Overall verdict.
    pub status: OverallStatus,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Analyze the five-element balance of a hexagram.
pub fn analyze_five_elements(hexagram: &Hexagram) -> FiveElementAnalysis {
    let upper = hexagram.upper().element();
    let lower = hexagram.lower().element();
    let time = hexagram.day_master();

    let mut counts = ElementCounts::new();
    counts.add(upper, 2);
    counts.add(lower, 2);
    counts.add(time, 1);
    let tally = ElementTally {
        strongest: counts.strongest(),
        weakest: counts.weakest(),
        balance: balance_score(&counts),
        counts,
    };

    let relations: Vec<RelationEntry> = [
        ("上卦→下卦", upper, lower),
        ("时令→上卦", time, upper),
        ("时令→下卦", time, lower),
    ]
    .into_iter()
    .map(|(label, from, to)| RelationEntry {
        label,
        from,
        to,
        relation: ElementRelation::between(from, to),
    })
    .collect();

    let mut scores = RelationScores::default();
    for entry in &relations {
        scores.add(entry.relation.kind);
    }
    let dominant = scores.dominant();

    let season = hexagram.season();
    let season_element = season.element();
    let seasonal_relation = gua_core::relation_type(season_element, time);
    let seasonal = SeasonalInfluence {
        season,
        season_element,
        relation: seasonal_relation,
        favorable: matches!(
            seasonal_relation,
            Relation::Generating | Relation::Transforming
        ),
    };

    let score = round1(
        tally.balance * 30.0
            + scores.favorable_ratio() * 40.0
            + if seasonal.favorable { 30.0 } else { 0.0 },
    );

    let mut recommendations: Vec<String> = tally
        .weakest
        .iter()
        .map(|e| format!("可以通过增强{e}的特质来改善状态"))
        .collect();
    match dominant {
        Some(Relation::Overcoming) => recommendations.push("需要注意化解冲突，避免对抗".into()),
        Some(Relation::Draining) => recommendations.push("注意节制，避免过度消耗".into()),
        _ => {}
    }
    if !seasonal.favorable {
        recommendations.push("当前季节特性不利，建议顺应时势，稳健行事".into());
    }

    FiveElementAnalysis {
        upper,
        lower,
        time,
        tally,
        relations,
        scores,
        dominant,
        seasonal,
        status: OverallStatus {
            score,
            level: StatusLevel::from_score(score),
            recommendations,
        },
    }
}

/// Upper/lower relation of one side of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigramPair {
    /// Upper trigram element.
    pub upper: Element,
    /// Lower trigram element.
    pub lower: Element,
    /// Advice for the relation from upper to lower.
    pub recommendation: RelationRecommendation,
}

impl TrigramPair {
    fn new(upper: Element, lower: Element) -> Self {
        Self {
            upper,
            lower,
            recommendation: recommend(upper, lower),
        }
    }
}

/// Original against changed hexagram, element-wise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementComparison {
    /// The cast hexagram.
    pub original: TrigramPair,
    /// The changed hexagram, if any line changes.
    pub changed: Option<TrigramPair>,
    /// Cycle positions of the original upper element.
    pub cycles: Vec<CycleStage>,
    /// One-line summary.
    pub summary: String,
    /// Advice on moving from the original to the changed situation.
    pub migration: Vec<&'static str>,
}

/// Compare the element relations of the original and changed hexagrams.
pub fn compare_elements(hexagram: &Hexagram) -> ElementComparison {
    let original = TrigramPair::new(hexagram.upper().element(), hexagram.lower().element());
    let changed = hexagram.changed_key().map(|_| {
        let (lower, upper) = hexagram.changed_trigrams();
        TrigramPair::new(upper.element(), lower.element())
    });

    let cycles = analyze_cycles(original.upper).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "cycle analysis failed");
        Vec::new()
    });

    let current = &original.recommendation.relation;
    let summary = format!(
        "{}上{}下，{}",
        original.upper, original.lower, current.description
    );

    let mut migration = vec![if current.favorable {
        "当前形势有利于迁移，可以积极准备"
    } else {
        "当前形势需要谨慎，建议做好充分准备"
    }];
    let future_favorable = changed
        .as_ref()
        .map_or(current.favorable, |c| c.recommendation.relation.favorable);
    migration.push(if future_favorable {
        "长期发展趋势向好，可以规划长远"
    } else {
        "未来可能面临挑战，需要制定应对策略"
    });
    if current.strength > 0.7 {
        migration.push("当前基础稳固，可以采取主动行动");
    } else if current.strength < 0.4 {
        migration.push("基础还需加强，建议先做内部调整");
    }

    ElementComparison {
        original,
        changed,
        cycles,
        summary,
        migration,
    }
}
