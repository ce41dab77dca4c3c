//! Aggregation of every analyzer into one serializable report.

use gua_core::{Element, HeavenlyStem, Hexagram, Season, Trigram};
use serde::Serialize;

use crate::changes::{ChangeAnalysis, analyze_changes};
use crate::context::ContextType;
use crate::five_elements::{
    ElementComparison, FiveElementAnalysis, analyze_five_elements, compare_elements,
};
use crate::najia::{
    RelativeTrend, TenGodIndication, WorldResponseRelation, recommendations, relative_trend,
    ten_god_indication, world_response_relation,
};
use crate::positional::{
    KeyLine, KeyRole, LineAnalysis, WorldResponse, analyze_lines, key_line, world_response,
};
use crate::recommend::{AdviceInputs, Dynamics, advise, dynamics};
use crate::text::TextLookup;
use crate::trend::{TrendAnalysis, analyze_trend};

/// When, what and for which area of life.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    /// Casting time, `YYYY-MM-DD HH:MM:SS`.
    pub time: String,
    /// Question asked.
    pub topic: String,
    /// Interpretation context.
    pub context: ContextType,
    /// Stem/branch labels, bottom first, e.g. 甲子水.
    pub stem_branches: Vec<String>,
    /// Stem of the first line.
    pub celestial_stem: HeavenlyStem,
    /// Element of that stem.
    pub day_master: Element,
    /// Season of the casting month.
    pub season: Season,
}

/// Text of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineText {
    /// 1-based position.
    pub position: usize,
    /// Raw text, empty on a lookup miss.
    pub text: String,
    /// `第n爻：text`, marked when the line changes.
    pub explanation: String,
}

/// Names and texts of a hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramSummary {
    /// Lookup key, `{lower}_{upper}`.
    pub key: String,
    /// Lower trigram.
    pub lower: Trigram,
    /// Upper trigram.
    pub upper: Trigram,
    /// `{lower}下{upper}上`.
    pub trigrams: String,
    /// Name.
    pub name: String,
    /// Short gloss.
    pub meaning: String,
    /// Judgment text.
    pub description: String,
    /// Character.
    pub nature: String,
}

impl HexagramSummary {
    fn new(lower: Trigram, upper: Trigram, texts: &dyn TextLookup) -> Self {
        let key = gua_core::trigram_key(lower, upper);
        let text = texts.hexagram(&key).unwrap_or_default();
        Self {
            trigrams: format!("{lower}下{upper}上"),
            key,
            lower,
            upper,
            name: text.name,
            meaning: text.meaning,
            description: text.description,
            nature: text.nature,
        }
    }
}

/// The cast hexagram, its line texts and the changed hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramInfo {
    /// The cast hexagram.
    pub original: HexagramSummary,
    /// Line texts, bottom first.
    pub lines: Vec<LineText>,
    /// The changed hexagram, when any line changes.
    pub changed: Option<HexagramSummary>,
}

/// Palace, lines, world/response and motion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayout {
    /// Palace trigram.
    pub palace: Trigram,
    /// All six lines.
    pub lines: Vec<LineAnalysis>,
    /// World and response positions.
    pub world_response: WorldResponse,
    /// Motion classification.
    pub dynamics: Dynamics,
}

/// Relational readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationships {
    /// The world line.
    pub world_line: KeyLine,
    /// The response line.
    pub response_line: KeyLine,
    /// World against response.
    pub world_response: WorldResponseRelation,
    /// Five-element balance.
    pub five_elements: FiveElementAnalysis,
    /// Original against changed.
    pub comparison: ElementComparison,
    /// Dominant six relatives.
    pub relatives: RelativeTrend,
    /// Dominant ten gods.
    pub ten_gods: TenGodIndication,
    /// Changing-line analysis.
    pub changes: ChangeAnalysis,
    /// Development trend.
    pub trend: TrendAnalysis,
}

/// All advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Near-term steps.
    pub short_term: Vec<String>,
    /// Medium-term direction.
    pub medium_term: Vec<String>,
    /// Long-term outlook.
    pub long_term: Vec<String>,
    /// Risk warnings.
    pub risks: Vec<String>,
    /// Advice from the role readings.
    pub najia: Vec<String>,
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// When, what and for which area of life.
    pub basic_info: BasicInfo,
    /// Names and texts.
    pub hexagram_info: HexagramInfo,
    /// Line-level layout.
    pub line_layout: LineLayout,
    /// Relational readings.
    pub relationships: Relationships,
    /// Advice.
    pub recommendations: Recommendations,
}

fn line_texts(hexagram: &Hexagram, texts: &dyn TextLookup) -> Vec<LineText> {
    let key = hexagram.key();
    (1..=6)
        .map(|position| {
            let text = texts.line(&key, position).unwrap_or_default();
            let mut explanation = format!("第{position}爻：{text}");
            if hexagram.is_changing(position - 1) {
                explanation.push_str("（变爻）");
            }
            LineText {
                position,
                text,
                explanation,
            }
        })
        .collect()
}

/// Analyze a hexagram for a context, pulling texts from `texts`.
pub fn analyze(hexagram: &Hexagram, context: ContextType, texts: &dyn TextLookup) -> Report {
    let (lower, upper) = hexagram.original_trigrams();
    let changed = hexagram.changed_key().map(|_| {
        let (lower, upper) = hexagram.changed_trigrams();
        HexagramSummary::new(lower, upper, texts)
    });

    let lines = analyze_lines(hexagram);
    let wr = world_response(hexagram);
    let world_line = key_line(hexagram, KeyRole::World);
    let response_line = key_line(hexagram, KeyRole::Response);
    let motion = dynamics(hexagram.changing_lines().len());
    let five_elements = analyze_five_elements(hexagram);
    let comparison = compare_elements(hexagram);
    let wr_relation = world_response_relation(hexagram, context);
    let relatives = relative_trend(&lines, context);
    let ten_gods = ten_god_indication(&lines, context);
    let changes = analyze_changes(hexagram);
    let trend = analyze_trend(hexagram, &changes);

    let advice = advise(&AdviceInputs {
        dynamics: &motion,
        lines: &lines,
        world: &world_line,
        elements: &five_elements,
        comparison: &comparison,
    });
    let najia = recommendations(&wr_relation, &relatives, &ten_gods, context);

    tracing::debug!(
        key = %hexagram.key(),
        changed = ?hexagram.changed_key(),
        %context,
        world = wr.world,
        score = five_elements.status.score,
        "analysis complete"
    );

    Report {
        basic_info: BasicInfo {
            time: hexagram.time().format("%Y-%m-%d %H:%M:%S").to_string(),
            topic: hexagram.topic().to_string(),
            context,
            stem_branches: hexagram.stem_branches().iter().map(|sb| sb.to_string()).collect(),
            celestial_stem: hexagram.celestial_stem(),
            day_master: hexagram.day_master(),
            season: hexagram.season(),
        },
        hexagram_info: HexagramInfo {
            original: HexagramSummary::new(lower, upper, texts),
            lines: line_texts(hexagram, texts),
            changed,
        },
        line_layout: LineLayout {
            palace: hexagram.palace(),
            lines,
            world_response: wr,
            dynamics: motion,
        },
        relationships: Relationships {
            world_line,
            response_line,
            world_response: wr_relation,
            five_elements,
            comparison,
            relatives,
            ten_gods,
            changes,
            trend,
        },
        recommendations: Recommendations {
            short_term: advice.short_term,
            medium_term: advice.medium_term,
            long_term: advice.long_term,
            risks: advice.risks,
            najia,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{EmptyTexts, TextTable};
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn hexagram(lines: [u8; 6], changing: &[usize]) -> Hexagram {
        let time = NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let changing: BTreeSet<usize> = changing.iter().copied().collect();
        Hexagram::from_lines(lines, changing, 0, 0, "求职", time).unwrap()
    }

    #[test]
    fn report_for_pure_qian() {
        let h = hexagram([1; 6], &[]);
        let r = analyze(&h, ContextType::Career, TextTable::bundled());
        assert_eq!(r.basic_info.time, "2025-02-03 14:30:00");
        assert_eq!(r.basic_info.topic, "求职");
        assert_eq!(r.basic_info.stem_branches.len(), 6);
        assert_eq!(r.hexagram_info.original.key, "乾_乾");
        assert_eq!(r.hexagram_info.original.name, "乾为天");
        assert_eq!(r.hexagram_info.original.trigrams, "乾下乾上");
        assert!(r.hexagram_info.changed.is_none());
        assert_eq!(r.line_layout.world_response.world, 5);
        assert_eq!(r.relationships.world_line.position, 5);
        assert_eq!(r.relationships.response_line.position, 2);
        assert_eq!(r.relationships.response_line.role, KeyRole::Response);
        assert_eq!(r.relationships.response_line.state, "应爻失正，外部不稳");
        assert_eq!(r.line_layout.lines.len(), 6);
        assert_eq!(r.recommendations.najia.len(), 4);
    }

    #[test]
    fn text_misses_degrade_to_empty() {
        let h = hexagram([1, 0, 1, 0, 1, 0], &[0]);
        let r = analyze(&h, ContextType::General, &EmptyTexts);
        assert!(r.hexagram_info.original.name.is_empty());
        assert_eq!(r.hexagram_info.lines[0].explanation, "第1爻：（变爻）");
        assert_eq!(r.hexagram_info.lines[1].explanation, "第2爻：");
        let changed = r.hexagram_info.changed.unwrap();
        assert!(changed.name.is_empty());
        assert_ne!(changed.key, r.hexagram_info.original.key);
    }

    #[test]
    fn report_serializes() {
        let h = hexagram([0; 6], &[0, 5]);
        let r = analyze(&h, ContextType::Wealth, TextTable::bundled());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["basic_info"]["context"], "wealth");
        assert_eq!(json["hexagram_info"]["original"]["key"], "坤_坤");
        assert!(json["hexagram_info"]["changed"].is_object());
        assert_eq!(json["relationships"]["changes"]["count"], 2);
    }
}
