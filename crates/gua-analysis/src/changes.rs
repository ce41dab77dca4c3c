//! Analysis of the changing lines: how many, which way, where and when.
//!
//! Indices in this module are 0-based line indices, matching
//! [`Hexagram::changing_lines`].

use gua_core::Hexagram;
use serde::Serialize;

use crate::positional::line_strength;

/// Traditional names of the six positions, bottom first.
pub const POSITION_NAMES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

/// Classification by number of changing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeType {
    /// 无变爻
    None,
    /// 单爻变
    Single,
    /// 双爻变
    Double,
    /// 三爻变
    Triple,
    /// 多爻变
    Many,
}

impl ChangeType {
    /// Classify a changing-line count.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Single,
            2 => Self::Double,
            3 => Self::Triple,
            _ => Self::Many,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "无变爻",
            Self::Single => "单爻变",
            Self::Double => "双爻变",
            Self::Triple => "三爻变",
            Self::Many => "多爻变",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Three-step intensity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Intensity {
    /// 弱
    Weak,
    /// 中
    Medium,
    /// 强
    Strong,
}

impl Intensity {
    /// Numeric weight: 0.3, 0.6 or 1.0.
    pub fn value(self) -> f64 {
        match self {
            Self::Weak => 0.3,
            Self::Medium => 0.6,
            Self::Strong => 1.0,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Weak => "弱",
            Self::Medium => "中",
            Self::Strong => "强",
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the changing lines follow each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DevelopmentPattern {
    /// 稳定
    Stable,
    /// 突变
    Sudden,
    /// 连续发展
    Continuous,
    /// 跳跃发展
    Leaping,
}

impl DevelopmentPattern {
    /// Classify sorted 0-based changing indices.
    pub fn of(changing: &[usize]) -> Self {
        match changing.len() {
            0 => Self::Stable,
            1 => Self::Sudden,
            _ if changing.windows(2).all(|w| w[1] == w[0] + 1) => Self::Continuous,
            _ => Self::Leaping,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stable => "稳定",
            Self::Sudden => "突变",
            Self::Continuous => "连续发展",
            Self::Leaping => "跳跃发展",
        }
    }

    /// Weight in the trend potential.
    pub fn score(self) -> f64 {
        match self {
            Self::Continuous => 1.0,
            Self::Leaping => 0.7,
            Self::Sudden => 0.5,
            Self::Stable => 0.3,
        }
    }

    /// Timing advice.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Self::Stable => &["保持耐心，等待时机成熟"],
            Self::Sudden => &["变化突然，需要快速反应", "抓住转折点，顺势而为"],
            Self::Continuous => &["循序渐进，按部就班推进", "每个阶段都要做好准备"],
            Self::Leaping => &["变化跨度较大，注意衔接", "做好阶段性调整的准备"],
        }
    }
}

impl std::fmt::Display for DevelopmentPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance between the first and last changing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeSpan {
    /// 短期
    Short,
    /// 中期
    Medium,
    /// 长期
    Long,
}

impl TimeSpan {
    /// Span of sorted 0-based changing indices; `None` when empty.
    pub fn of(changing: &[usize]) -> Option<Self> {
        let (first, last) = (changing.first()?, changing.last()?);
        Some(match last - first {
            0 | 1 => Self::Short,
            2 | 3 => Self::Medium,
            _ => Self::Long,
        })
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Short => "短期",
            Self::Medium => "中期",
            Self::Long => "长期",
        }
    }
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How much of the hexagram the changes reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpactScope {
    /// 无
    None,
    /// 局部
    Local,
    /// 全局
    Global,
}

impl ImpactScope {
    /// Scope for a number of changing lines.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 | 2 => Self::Local,
            _ => Self::Global,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "无",
            Self::Local => "局部",
            Self::Global => "全局",
        }
    }
}

/// Which way the changing lines flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeDirection {
    /// Yin lines turning yang.
    pub yin_to_yang: usize,
    /// Yang lines turning yin.
    pub yang_to_yin: usize,
    /// 阴转阳, 阳转阴 or 平衡.
    pub dominant: &'static str,
}

/// Where in the hexagram the changes sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeStructure {
    /// Changes in the lower trigram.
    pub lower: usize,
    /// Changes in the upper trigram.
    pub upper: usize,
    /// Changes on positions 2-5.
    pub inner: usize,
    /// Changes on positions 1 and 6.
    pub outer: usize,
}

/// What a single changing line touches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionImpact {
    /// 0-based index.
    pub index: usize,
    /// Position name, e.g. 初爻.
    pub name: &'static str,
    /// Domain of the position.
    pub domain: &'static str,
    /// Stage of influence.
    pub influence: &'static str,
    /// Aspect of the matter.
    pub aspect: &'static str,
    /// Line strength of the changing line.
    pub significance: f64,
}

/// Combined impact of all changing lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallImpact {
    /// Reach of the changes.
    pub scope: ImpactScope,
    /// Strongest single-line significance, bucketed.
    pub intensity: Option<Intensity>,
    /// Duration of the latest change.
    pub duration: Option<&'static str>,
    /// Domains touched.
    pub domains: Vec<&'static str>,
    /// Aspects touched.
    pub aspects: Vec<&'static str>,
}

/// Temporal reading of one changing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalStep {
    /// 0-based index.
    pub index: usize,
    /// Phase of development.
    pub phase: &'static str,
    /// Timing.
    pub timing: &'static str,
    /// Expected duration.
    pub duration: &'static str,
}

/// The changing lines read as a sequence in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalSequence {
    /// One step per changing line, bottom first.
    pub steps: Vec<TemporalStep>,
    /// Span of the changes; `None` without changes.
    pub span: Option<TimeSpan>,
    /// Development pattern.
    pub pattern: DevelopmentPattern,
    /// Timing advice.
    pub suggestions: &'static [&'static str],
}

/// Everything derived from the changing lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeAnalysis {
    /// Number of changing lines.
    pub count: usize,
    /// Count classification.
    pub change_type: ChangeType,
    /// Names of the changing positions.
    pub positions: Vec<&'static str>,
    /// Flip direction.
    pub direction: ChangeDirection,
    /// Placement.
    pub structure: ChangeStructure,
    /// Intensity by count.
    pub intensity: Intensity,
    /// Per-line impact.
    pub impacts: Vec<PositionImpact>,
    /// Combined impact.
    pub overall: OverallImpact,
    /// Temporal reading.
    pub temporal: TemporalSequence,
    /// Advice.
    pub recommendations: Vec<&'static str>,
}

const DOMAINS: [(&str, &str, &str); 6] = [
    ("基础", "开始", "动机"),
    ("内在", "发展", "准备"),
    ("内核", "执行", "行动"),
    ("外显", "表现", "形式"),
    ("外在", "环境", "地位"),
    ("终极", "结果", "目标"),
];

const PHASES: [(&str, &str, &str); 6] = [
    ("初始", "开始", "短期"),
    ("发展", "渐进", "短中期"),
    ("成长", "发展", "中期"),
    ("转化", "变化", "中长期"),
    ("成熟", "稳定", "长期"),
    ("终结", "完成", "最终"),
];

fn direction(hexagram: &Hexagram) -> ChangeDirection {
    let (yin_to_yang, yang_to_yin) =
        hexagram
            .changing_lines()
            .iter()
            .fold((0, 0), |(up, down), &i| {
                if hexagram.lines()[i] == 0 {
                    (up + 1, down)
                } else {
                    (up, down + 1)
                }
            });
    let dominant = match yin_to_yang.cmp(&yang_to_yin) {
        std::cmp::Ordering::Greater => "阴转阳",
        std::cmp::Ordering::Less => "阳转阴",
        std::cmp::Ordering::Equal => "平衡",
    };
    ChangeDirection {
        yin_to_yang,
        yang_to_yin,
        dominant,
    }
}

fn structure(changing: &[usize]) -> ChangeStructure {
    let count = |f: fn(usize) -> bool| changing.iter().filter(|i| f(**i)).count();
    ChangeStructure {
        lower: count(|i| i < 3),
        upper: count(|i| i >= 3),
        inner: count(|i| (1..=4).contains(&i)),
        outer: count(|i| i == 0 || i == 5),
    }
}

fn impacts(hexagram: &Hexagram, changing: &[usize]) -> Vec<PositionImpact> {
    changing
        .iter()
        .map(|&index| {
            let (domain, influence, aspect) = DOMAINS[index];
            PositionImpact {
                index,
                name: POSITION_NAMES[index],
                domain,
                influence,
                aspect,
                significance: line_strength(index + 1, hexagram.lines()[index], true).value,
            }
        })
        .collect()
}

fn overall(impacts: &[PositionImpact]) -> OverallImpact {
    let scope = ImpactScope::from_count(impacts.len());
    let intensity = impacts
        .iter()
        .map(|i| i.significance)
        .reduce(f64::max)
        .map(|max| {
            if max >= 0.8 {
                Intensity::Strong
            } else if max >= 0.6 {
                Intensity::Medium
            } else {
                Intensity::Weak
            }
        });
    OverallImpact {
        scope,
        intensity,
        duration: impacts.last().map(|i| PHASES[i.index].2),
        domains: impacts.iter().map(|i| i.domain).collect(),
        aspects: impacts.iter().map(|i| i.aspect).collect(),
    }
}

fn temporal(changing: &[usize]) -> TemporalSequence {
    let steps: Vec<TemporalStep> = changing
        .iter()
        .map(|&index| {
            let (phase, timing, duration) = PHASES[index];
            TemporalStep {
                index,
                phase,
                timing,
                duration,
            }
        })
        .collect();
    let pattern = DevelopmentPattern::of(changing);
    TemporalSequence {
        steps,
        span: TimeSpan::of(changing),
        pattern,
        suggestions: pattern.suggestions(),
    }
}

/// Analyze the changing lines of a hexagram.
pub fn analyze_changes(hexagram: &Hexagram) -> ChangeAnalysis {
    let changing: Vec<usize> = hexagram.changing_lines().iter().copied().collect();
    let count = changing.len();
    let intensity = match count {
        0 | 1 => Intensity::Weak,
        2 => Intensity::Medium,
        _ => Intensity::Strong,
    };
    let impacts = impacts(hexagram, &changing);
    let overall = overall(&impacts);
    let temporal = temporal(&changing);

    let mut recommendations = Vec::new();
    match count {
        0 => recommendations.push("当前形势稳定，宜守不宜进"),
        1 => recommendations.push("单一领域有变化，注意把握机会"),
        2 => {}
        _ => recommendations.push("变化较多，需要全面应对"),
    }
    if intensity == Intensity::Strong {
        recommendations.push("变化影响重大，需要认真对待");
    }
    match temporal.span {
        Some(TimeSpan::Short) => recommendations.push("变化见效较快，及时把握"),
        Some(TimeSpan::Long) => recommendations.push("变化需要时间，保持耐心"),
        Some(TimeSpan::Medium) | None => {}
    }

    ChangeAnalysis {
        count,
        change_type: ChangeType::from_count(count),
        positions: changing.iter().map(|i| POSITION_NAMES[*i]).collect(),
        direction: direction(hexagram),
        structure: structure(&changing),
        intensity,
        impacts,
        overall,
        temporal,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn hexagram(lines: [u8; 6], changing: &[usize]) -> Hexagram {
        let time = NaiveDate::from_ymd_opt(2024, 5, 5)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let changing: BTreeSet<usize> = changing.iter().copied().collect();
        Hexagram::from_lines(lines, changing, 0, 0, "", time).unwrap()
    }

    #[test]
    fn no_changes() {
        let c = analyze_changes(&hexagram([1; 6], &[]));
        assert_eq!(c.count, 0);
        assert_eq!(c.change_type, ChangeType::None);
        assert_eq!(c.direction.dominant, "平衡");
        assert_eq!(c.overall.scope, ImpactScope::None);
        assert_eq!(c.overall.intensity, None);
        assert_eq!(c.temporal.span, None);
        assert_eq!(c.temporal.pattern, DevelopmentPattern::Stable);
        assert_eq!(c.recommendations, vec!["当前形势稳定，宜守不宜进"]);
    }

    #[test]
    fn outer_pair_on_pure_yin() {
        let c = analyze_changes(&hexagram([0; 6], &[0, 5]));
        assert_eq!(c.change_type, ChangeType::Double);
        assert_eq!(c.positions, vec!["初爻", "上爻"]);
        assert_eq!(c.direction.yin_to_yang, 2);
        assert_eq!(c.direction.dominant, "阴转阳");
        assert_eq!(
            c.structure,
            ChangeStructure {
                lower: 1,
                upper: 1,
                inner: 0,
                outer: 2
            }
        );
        assert_eq!(c.intensity, Intensity::Medium);
        assert_eq!(c.temporal.pattern, DevelopmentPattern::Leaping);
        assert_eq!(c.temporal.span, Some(TimeSpan::Long));
        assert_eq!(c.overall.duration, Some("最终"));
    }

    #[test]
    fn consecutive_middle_changes() {
        let c = analyze_changes(&hexagram([1, 0, 1, 0, 1, 0], &[2, 3, 4]));
        assert_eq!(c.change_type, ChangeType::Triple);
        assert_eq!(c.intensity, Intensity::Strong);
        assert_eq!(c.structure.inner, 3);
        assert_eq!(c.direction.dominant, "阳转阴");
        assert_eq!(c.temporal.pattern, DevelopmentPattern::Continuous);
        assert_eq!(c.temporal.span, Some(TimeSpan::Medium));
        assert_eq!(c.overall.scope, ImpactScope::Global);
        // Position 3, yang, harmonious and changing.
        assert_eq!(c.impacts[0].significance, 0.85);
        assert_eq!(c.overall.intensity, Some(Intensity::Strong));
        assert!(c.recommendations.contains(&"变化影响重大，需要认真对待"));
    }

    #[test]
    fn single_change_is_sudden() {
        let c = analyze_changes(&hexagram([1; 6], &[1]));
        assert_eq!(c.temporal.pattern, DevelopmentPattern::Sudden);
        assert_eq!(c.temporal.span, Some(TimeSpan::Short));
        assert_eq!(c.impacts[0].domain, "内在");
        assert_eq!(
            c.recommendations,
            vec!["单一领域有变化，注意把握机会", "变化见效较快，及时把握"]
        );
    }

    #[test]
    fn development_patterns() {
        assert_eq!(DevelopmentPattern::of(&[]), DevelopmentPattern::Stable);
        assert_eq!(DevelopmentPattern::of(&[3]), DevelopmentPattern::Sudden);
        assert_eq!(DevelopmentPattern::of(&[1, 2]), DevelopmentPattern::Continuous);
        assert_eq!(DevelopmentPattern::of(&[0, 2, 3]), DevelopmentPattern::Leaping);
        assert_eq!(DevelopmentPattern::Continuous.score(), 1.0);
        assert_eq!(DevelopmentPattern::Leaping.score(), 0.7);
        assert_eq!(DevelopmentPattern::Sudden.score(), 0.5);
        assert_eq!(DevelopmentPattern::Stable.score(), 0.3);
        assert_eq!(DevelopmentPattern::Leaping.to_string(), "跳跃发展");
        assert_eq!(DevelopmentPattern::Stable.suggestions(), ["保持耐心，等待时机成熟"]);
    }

    #[test]
    fn time_spans() {
        assert_eq!(TimeSpan::of(&[]), None);
        assert_eq!(TimeSpan::of(&[4]), Some(TimeSpan::Short));
        assert_eq!(TimeSpan::of(&[1, 4]), Some(TimeSpan::Medium));
        assert_eq!(TimeSpan::of(&[0, 4]), Some(TimeSpan::Long));
    }
}
