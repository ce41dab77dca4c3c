//! Role readings: context meanings of the six relatives and ten gods,
//! their aggregated trend, and the world/response relation.

use gua_core::relation::ElementRelation;
use gua_core::{Hexagram, Polarity, SixRelative, TenGod};
use serde::Serialize;

use crate::context::ContextType;
use crate::positional::{LineAnalysis, world_response};

/// What a six-relative label stands for in a context.
pub fn relative_meaning(relative: SixRelative, context: ContextType) -> &'static str {
    use SixRelative::*;
    match context {
        ContextType::General => relative.description(),
        ContextType::Career => match relative {
            Siblings => "竞争对手",
            Offspring => "技能成果",
            Officer => "上级领导",
            Parents => "资源支持",
            Wealth => "报酬收入",
        },
        ContextType::Relationship => match relative {
            Siblings => "情敌",
            Offspring => "感情结果",
            Officer => "另一半",
            Parents => "长辈建议",
            Wealth => "感情付出",
        },
        ContextType::Health => match relative {
            Siblings => "免疫系统",
            Offspring => "恢复能力",
            Officer => "疾病",
            Parents => "调养",
            Wealth => "营养",
        },
        ContextType::Wealth => match relative {
            Siblings => "合作伙伴",
            Offspring => "收益",
            Officer => "机遇",
            Parents => "本金",
            Wealth => "财源",
        },
    }
}

/// What a ten-god label stands for in a context.
pub fn ten_god_meaning(god: TenGod, context: ContextType) -> &'static str {
    use TenGod::*;
    let [career, relationship, health, wealth] = match god {
        DirectOfficer => ["正统权威", "正缘", "正规治疗", "正当收入"],
        SevenKillings => ["竞争压力", "暧昧对象", "急性病症", "意外收入"],
        DirectResource => ["学习提升", "精神契合", "调养", "稳定增长"],
        IndirectResource => ["技能特长", "精神寄托", "保健", "潜在收益"],
        Companion => ["同事", "朋友", "体魄", "共同发展"],
        RobWealth => ["竞争", "干扰", "隐患", "消耗"],
        HurtingOfficer => ["创新能力", "浪漫情怀", "亚健康", "投机"],
        EatingGod => ["才能", "愉悦", "养生", "生财之道"],
        DirectWealth => ["正当利益", "真诚", "营养", "固定收入"],
        IndirectWealth => ["额外收益", "暧昧", "补充", "机会"],
    };
    match context {
        ContextType::General => god.meaning(),
        ContextType::Career => career,
        ContextType::Relationship => relationship,
        ContextType::Health => health,
        ContextType::Wealth => wealth,
    }
}

/// Sum `weight` per key and keep the two heaviest. Ties keep the key that
/// appears first.
fn top_two<T: Copy + PartialEq>(items: impl IntoIterator<Item = (T, f64)>) -> Vec<T> {
    let mut totals: Vec<(T, f64)> = Vec::new();
    for (key, weight) in items {
        match totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += weight,
            None => totals.push((key, weight)),
        }
    }
    // Stable sort keeps first appearance on ties.
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.into_iter().take(2).map(|(k, _)| k).collect()
}

/// The six relatives carrying the most line strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeTrend {
    /// Up to two dominant relatives, heaviest first.
    pub main: Vec<SixRelative>,
    /// Reading of the dominant relatives in the context.
    pub description: String,
}

/// Aggregate six-relative influence over the analyzed lines.
pub fn relative_trend(lines: &[LineAnalysis], context: ContextType) -> RelativeTrend {
    let main = top_two(lines.iter().map(|l| (l.six_relative, l.strength.value)));
    let parts: Vec<String> = main
        .iter()
        .map(|r| format!("{r}（{}）", relative_meaning(*r, context)))
        .collect();
    RelativeTrend {
        description: format!("主要受{}影响", parts.join("、")),
        main,
    }
}

/// The ten gods carrying the most line strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenGodIndication {
    /// Up to two dominant ten gods, heaviest first.
    pub key: Vec<TenGod>,
    /// Reading of the dominant ten gods in the context.
    pub meaning: String,
}

/// Aggregate ten-god influence over the analyzed lines.
pub fn ten_god_indication(lines: &[LineAnalysis], context: ContextType) -> TenGodIndication {
    let key = top_two(lines.iter().map(|l| (l.ten_god, l.strength.value)));
    let parts: Vec<String> = key
        .iter()
        .map(|g| format!("{g}主{}", ten_god_meaning(*g, context)))
        .collect();
    TenGodIndication {
        meaning: parts.join("，"),
        key,
    }
}

/// How strongly the world/response relation weighs on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Impact {
    /// 强烈
    Strong,
    /// 中等
    Moderate,
    /// 微弱
    Weak,
}

impl Impact {
    fn from_strength(strength: f64) -> Self {
        if strength > 0.8 {
            Self::Strong
        } else if strength > 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strong => "强烈",
            Self::Moderate => "中等",
            Self::Weak => "微弱",
        }
    }

    fn suggestion(self, favorable: bool) -> &'static str {
        match (self, favorable) {
            (Self::Strong, true) => "积极把握机会",
            (Self::Strong, false) => "谨慎应对",
            (Self::Moderate, true) => "稳步推进",
            (Self::Moderate, false) => "防范风险",
            (Self::Weak, true) => "等待时机",
            (Self::Weak, false) => "暂时观望",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relation between the world line and the response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldResponseRelation {
    /// Whether the two lines have opposite polarity.
    pub resonant: bool,
    /// 阴阳相应 or 敌应.
    pub resonance: &'static str,
    /// Element relation from the world line to the response line.
    pub element_relation: ElementRelation,
    /// Whether the overall relation reads as supportive.
    pub favorable: bool,
    /// Context reading of the relation.
    pub meaning: String,
    /// Combined strength in [0, 1].
    pub strength: f64,
    /// Impact bucket.
    pub impact: Impact,
    /// Suggested stance.
    pub suggestion: &'static str,
}

fn context_reading(context: ContextType, favorable: bool) -> &'static str {
    match (context, favorable) {
        (ContextType::General, true) => "彼此呼应，诸事顺遂",
        (ContextType::General, false) => "彼此牵制，需要协调",
        (ContextType::Career, true) => "上下协同，合作顺利",
        (ContextType::Career, false) => "意见分歧，推进受阻",
        (ContextType::Relationship, true) => "两情相悦，心意相通",
        (ContextType::Relationship, false) => "心意难合，需要沟通",
        (ContextType::Health, true) => "身心调和，恢复顺利",
        (ContextType::Health, false) => "内外失调，需要调养",
        (ContextType::Wealth, true) => "财路通畅，往来有利",
        (ContextType::Wealth, false) => "财路受阻，谨防损耗",
    }
}

/// Relate the world and response lines of a hexagram.
pub fn world_response_relation(
    hexagram: &Hexagram,
    context: ContextType,
) -> WorldResponseRelation {
    let wr = world_response(hexagram);
    let world_polarity = Polarity::of(hexagram.lines()[wr.world - 1]);
    let response_polarity = Polarity::of(hexagram.lines()[wr.response - 1]);
    let resonant = world_polarity != response_polarity;
    let element_relation = ElementRelation::between(
        hexagram.line_element(wr.world),
        hexagram.line_element(wr.response),
    );
    let favorable = resonant && element_relation.favorable;
    let strength =
        (element_relation.strength + if resonant { 1.0 } else { 0.5 }) / 2.0;
    let impact = Impact::from_strength(strength);
    let nature = if favorable { "吉" } else { "需慎" };
    WorldResponseRelation {
        resonant,
        resonance: if resonant { "阴阳相应" } else { "敌应" },
        meaning: format!(
            "{}，{}（{nature}）",
            element_relation.description,
            context_reading(context, favorable)
        ),
        element_relation,
        favorable,
        strength,
        impact,
        suggestion: impact.suggestion(favorable),
    }
}

/// Najia-based recommendations assembled from the role readings.
pub fn recommendations(
    relation: &WorldResponseRelation,
    trend: &RelativeTrend,
    indication: &TenGodIndication,
    context: ContextType,
) -> Vec<String> {
    let closing = match context {
        ContextType::General => "综合来看，宜顺势而为",
        ContextType::Career => "事业上注意与上级和同事的配合",
        ContextType::Relationship => "感情上注意沟通与包容",
        ContextType::Health => "健康上注意作息规律，及时调养",
        ContextType::Wealth => "财务上注意开源节流，控制风险",
    };
    vec![
        format!("根据世应关系：{}", relation.suggestion),
        format!("整体趋势：{}", trend.description),
        format!("关键指向：{}", indication.meaning),
        closing.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positional::analyze_lines;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn hexagram(lines: [u8; 6], changing: &[usize]) -> Hexagram {
        let time = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let changing: BTreeSet<usize> = changing.iter().copied().collect();
        Hexagram::from_lines(lines, changing, 0, 0, "test", time).unwrap()
    }

    #[test]
    fn context_meanings() {
        assert_eq!(
            relative_meaning(SixRelative::Officer, ContextType::Relationship),
            "另一半"
        );
        assert_eq!(
            relative_meaning(SixRelative::Parents, ContextType::General),
            SixRelative::Parents.description()
        );
        assert_eq!(ten_god_meaning(TenGod::EatingGod, ContextType::Wealth), "生财之道");
        assert_eq!(
            ten_god_meaning(TenGod::RobWealth, ContextType::General),
            TenGod::RobWealth.meaning()
        );
    }

    #[test]
    fn top_two_sums_and_keeps_first_on_ties() {
        let picked = top_two([('a', 0.5), ('b', 0.5), ('c', 0.4), ('c', 0.4)]);
        assert_eq!(picked, vec!['c', 'a']);
        assert_eq!(top_two([('x', 0.1)]), vec!['x']);
    }

    #[test]
    fn trends_name_at_most_two() {
        let h = hexagram([1, 0, 1, 0, 1, 0], &[2]);
        let lines = analyze_lines(&h);
        let trend = relative_trend(&lines, ContextType::Career);
        assert!(!trend.main.is_empty() && trend.main.len() <= 2);
        assert!(trend.description.starts_with("主要受"));
        let gods = ten_god_indication(&lines, ContextType::Career);
        assert!(!gods.key.is_empty() && gods.key.len() <= 2);
    }

    #[test]
    fn pure_qian_world_response_is_hostile() {
        // World 5 and response 2 are both yang: no resonance.
        let h = hexagram([1; 6], &[]);
        let rel = world_response_relation(&h, ContextType::General);
        assert!(!rel.resonant);
        assert_eq!(rel.resonance, "敌应");
        assert!(!rel.favorable);
        // Same-kind metal: (1.0 + 0.5) / 2.
        assert_eq!(rel.strength, 0.75);
        assert_eq!(rel.impact, Impact::Moderate);
        assert_eq!(rel.suggestion, "防范风险");
    }

    #[test]
    fn najia_recommendations_have_fixed_shape() {
        let h = hexagram([0, 1, 0, 1, 0, 1], &[]);
        let lines = analyze_lines(&h);
        let ctx = ContextType::Health;
        let recs = recommendations(
            &world_response_relation(&h, ctx),
            &relative_trend(&lines, ctx),
            &ten_god_indication(&lines, ctx),
            ctx,
        );
        assert_eq!(recs.len(), 4);
        assert!(recs[0].starts_with("根据世应关系："));
        assert!(recs[1].starts_with("整体趋势："));
        assert!(recs[2].starts_with("关键指向："));
    }
}
