//! Per-line positional analysis and the world/response lines.
//!
//! Positions here are 1-based (1 = bottom line). Changing-line membership
//! is checked against the 0-based index `position - 1`.

use gua_core::{
    Element, Hexagram, Polarity, SixRelative, SixSpirit, StemBranch, TenGod, Trigram,
};
use serde::Serialize;

/// Bucketed line strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLevel {
    /// 极弱
    ExtremelyWeak,
    /// 较弱
    Weak,
    /// 中等
    Moderate,
    /// 较强
    Strong,
    /// 极强
    ExtremelyStrong,
}

impl StrengthLevel {
    /// Bucket a score in [0, 1].
    pub fn from_score(score: f64) -> Self {
        Self::from_points((score * 100.0).round() as u32)
    }

    fn from_points(points: u32) -> Self {
        match points {
            80.. => Self::ExtremelyStrong,
            60..80 => Self::Strong,
            40..60 => Self::Moderate,
            20..40 => Self::Weak,
            _ => Self::ExtremelyWeak,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ExtremelyStrong => "极强",
            Self::Strong => "较强",
            Self::Moderate => "中等",
            Self::Weak => "较弱",
            Self::ExtremelyWeak => "极弱",
        }
    }

    /// Fixed description of the bucket.
    pub fn description(self) -> &'static str {
        match self {
            Self::ExtremelyStrong => "具有决定性影响",
            Self::Strong => "影响力显著",
            Self::Moderate => "影响力一般",
            Self::Weak => "影响力较小",
            Self::ExtremelyWeak => "影响力微弱",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A line's strength score with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStrength {
    /// Score in [0, 1].
    pub value: f64,
    /// Bucket.
    pub level: StrengthLevel,
    /// Bucket description.
    pub description: &'static str,
}

/// Yang for positions 1, 3, 5; yin for 2, 4, 6.
pub fn position_nature(position: usize) -> Polarity {
    Polarity::of_position(position)
}

/// Strength of a line at a 1-based position.
pub fn line_strength(position: usize, value: u8, changing: bool) -> LineStrength {
    // Whole points out of 100 keep the bucket edges exact.
    let mut points: u32 = 50;
    match position {
        3 | 4 => points += 10,
        2 | 5 => points += 5,
        _ => {}
    }
    if Polarity::of(value) == position_nature(position) {
        points += 10;
    }
    if changing {
        points += 15;
    }
    let points = points.min(100);
    let level = StrengthLevel::from_points(points);
    LineStrength {
        value: f64::from(points) / 100.0,
        level,
        description: level.description(),
    }
}

/// Everything known about one line of a hexagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineAnalysis {
    /// 1-based position.
    pub position: usize,
    /// 1 for yang, 0 for yin.
    pub value: u8,
    /// Whether the line changes.
    pub changing: bool,
    /// 动爻 or 静爻.
    pub state: &'static str,
    /// Polarity of the line itself.
    pub polarity: Polarity,
    /// Polarity of the position.
    pub position_nature: Polarity,
    /// Element inherited from the line's trigram.
    pub element: Element,
    /// Whether the line's polarity matches its position.
    pub harmony: bool,
    /// Strength score.
    pub strength: LineStrength,
    /// Stem/branch attached to the line.
    pub stem_branch: StemBranch,
    /// Six-relative label.
    pub six_relative: SixRelative,
    /// Six-spirit label.
    pub six_spirit: SixSpirit,
    /// Ten-god label relative to the day master.
    pub ten_god: TenGod,
}

/// Analyze the line at a 1-based position in `1..=6`.
pub(crate) fn analyze_line(hexagram: &Hexagram, position: usize) -> LineAnalysis {
    debug_assert!((1..=6).contains(&position), "line position {position}");
    let index = position - 1;
    let value = hexagram.lines()[index];
    let changing = hexagram.is_changing(index);
    let polarity = Polarity::of(value);
    let nature = position_nature(position);
    let element = hexagram.line_element(position);
    LineAnalysis {
        position,
        value,
        changing,
        state: if changing { "动爻" } else { "静爻" },
        polarity,
        position_nature: nature,
        element,
        harmony: polarity == nature,
        strength: line_strength(position, value, changing),
        stem_branch: hexagram.stem_branches()[index],
        six_relative: hexagram.six_relatives()[index],
        six_spirit: hexagram.six_spirits()[index],
        ten_god: TenGod::derive(hexagram.day_master(), element, polarity),
    }
}

/// Analyze all six lines, bottom first.
pub fn analyze_lines(hexagram: &Hexagram) -> Vec<LineAnalysis> {
    (1..=6).map(|p| analyze_line(hexagram, p)).collect()
}

/// 1-based world position for a palace.
pub fn world_position(palace: Trigram) -> usize {
    match palace {
        Trigram::Qian | Trigram::Gen => 5,
        Trigram::Dui | Trigram::Kun => 4,
        Trigram::Li => 3,
        Trigram::Zhen => 2,
        Trigram::Xun => 1,
        Trigram::Kan => 6,
    }
}

/// 1-based response position: the 7-complement of the world position.
pub fn response_position(palace: Trigram) -> usize {
    7 - world_position(palace)
}

/// World and response positions with their moving states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldResponse {
    /// 1-based world position.
    pub world: usize,
    /// 1-based response position.
    pub response: usize,
    /// Whether the world line changes.
    pub world_moving: bool,
    /// Whether the response line changes.
    pub response_moving: bool,
    /// Combined description.
    pub description: &'static str,
}

/// Locate the world and response lines.
pub fn world_response(hexagram: &Hexagram) -> WorldResponse {
    let world = world_position(hexagram.palace());
    let response = response_position(hexagram.palace());
    let world_moving = hexagram.is_changing(world - 1);
    let response_moving = hexagram.is_changing(response - 1);
    let description = match (world_moving, response_moving) {
        (true, true) => "世应俱动，变化显著",
        (false, false) => "世应俱静，局势稳定",
        (true, false) => "世动应静，主动求变",
        (false, true) => "世静应动，被动变化",
    };
    WorldResponse {
        world,
        response,
        world_moving,
        response_moving,
        description,
    }
}

/// Which of the two key lines to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyRole {
    /// 世
    World,
    /// 应
    Response,
}

impl KeyRole {
    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::World => "世爻",
            Self::Response => "应爻",
        }
    }

    /// 1-based position of this role for a palace.
    pub fn position(self, palace: Trigram) -> usize {
        match self {
            Self::World => world_position(palace),
            Self::Response => response_position(palace),
        }
    }

    fn state(self, harmony: bool, changing: bool) -> &'static str {
        match (self, harmony, changing) {
            (Self::World, true, false) => "世爻得正，局势稳定",
            (Self::World, true, true) => "世爻得正而变，主动求变",
            (Self::World, false, false) => "世爻失正，需要调整",
            (Self::World, false, true) => "世爻失正而变，被动变化",
            (Self::Response, true, false) => "应爻得正，外部稳定",
            (Self::Response, true, true) => "应爻得正而变，外部主动变化",
            (Self::Response, false, false) => "应爻失正，外部不稳",
            (Self::Response, false, true) => "应爻失正而变，外部被动变化",
        }
    }
}

/// Detailed reading of a single key line (world or response).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyLine {
    /// World or response.
    pub role: KeyRole,
    /// 1-based position.
    pub position: usize,
    /// 1 for yang, 0 for yin.
    pub value: u8,
    /// Whether the line changes.
    pub changing: bool,
    /// Polarity of the position.
    pub position_nature: Polarity,
    /// Polarity of the line.
    pub polarity: Polarity,
    /// Whether the two agree.
    pub harmony: bool,
    /// Strength score.
    pub strength: LineStrength,
    /// Trigram the line sits in.
    pub trigram: Trigram,
    /// Element of that trigram.
    pub element: Element,
    /// State description.
    pub state: &'static str,
    /// Advice.
    pub advice: Vec<&'static str>,
}

/// Read the world or response line of a hexagram.
pub fn key_line(hexagram: &Hexagram, role: KeyRole) -> KeyLine {
    let position = role.position(hexagram.palace());
    let line = analyze_line(hexagram, position);
    let mut advice = vec![
        if line.harmony {
            "当前位置有利，可以稳步推进"
        } else {
            "需要调整策略，寻找更合适的定位"
        },
        if line.changing {
            "时机已到，可以采取行动"
        } else {
            "暂时保持现状，等待合适时机"
        },
    ];
    advice.push(match line.strength.level {
        StrengthLevel::ExtremelyStrong => "形势大好，可以大胆行动",
        StrengthLevel::Strong => "条件较好，可以稳步前进",
        StrengthLevel::Moderate => "形势一般，需要谨慎行事",
        StrengthLevel::Weak | StrengthLevel::ExtremelyWeak => "条件不足，建议先行积累",
    });
    KeyLine {
        role,
        position,
        value: line.value,
        changing: line.changing,
        position_nature: line.position_nature,
        polarity: line.polarity,
        harmony: line.harmony,
        strength: line.strength,
        trigram: if position > 3 {
            hexagram.upper()
        } else {
            hexagram.lower()
        },
        element: line.element,
        state: role.state(line.harmony, line.changing),
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn hexagram(lines: [u8; 6], changing: &[usize]) -> Hexagram {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let changing: BTreeSet<usize> = changing.iter().copied().collect();
        Hexagram::from_lines(lines, changing, 0, 0, "", time).unwrap()
    }

    #[test]
    fn position_parity() {
        assert_eq!(position_nature(1), Polarity::Yang);
        assert_eq!(position_nature(4), Polarity::Yin);
    }

    #[test]
    fn strength_scores() {
        // Base only: position 1, yin on a yang position, still.
        let s = line_strength(1, 0, false);
        assert_eq!(s.value, 0.5);
        assert_eq!(s.level, StrengthLevel::Moderate);
        // Middle + harmony + changing: 0.5 + 0.1 + 0.1 + 0.15.
        let s = line_strength(3, 1, true);
        assert_eq!(s.value, 0.85);
        assert_eq!(s.level, StrengthLevel::ExtremelyStrong);
        assert_eq!(s.description, "具有决定性影响");
        // Central + harmony: 0.5 + 0.05 + 0.1.
        let s = line_strength(2, 0, false);
        assert_eq!(s.value, 0.65);
        assert_eq!(s.level, StrengthLevel::Strong);
        // Middle only lands exactly on the strong edge.
        assert_eq!(line_strength(4, 1, false).level, StrengthLevel::Strong);
    }

    #[test]
    fn levels_from_scores() {
        assert_eq!(StrengthLevel::from_score(0.1), StrengthLevel::ExtremelyWeak);
        assert_eq!(StrengthLevel::from_score(0.2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(0.8), StrengthLevel::ExtremelyStrong);
    }

    #[test]
    fn zhen_palace_world_and_response() {
        assert_eq!(world_position(Trigram::Zhen), 2);
        assert_eq!(response_position(Trigram::Zhen), 5);
        for t in Trigram::ALL {
            assert_eq!(world_position(t) + response_position(t), 7);
        }
    }

    #[test]
    fn world_response_states() {
        // 震 lower: world 2 (index 1), response 5 (index 4).
        let h = hexagram([1, 0, 0, 1, 1, 1], &[1]);
        let wr = world_response(&h);
        assert!(wr.world_moving);
        assert!(!wr.response_moving);
        assert_eq!(wr.description, "世动应静，主动求变");

        let h = hexagram([1, 0, 0, 1, 1, 1], &[]);
        assert_eq!(world_response(&h).description, "世应俱静，局势稳定");
    }

    #[test]
    fn line_analysis_uses_trigram_elements() {
        let h = hexagram([1, 0, 0, 1, 1, 1], &[5]);
        let lines = analyze_lines(&h);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].element, Element::Wood);
        assert_eq!(lines[5].element, Element::Metal);
        assert!(lines[5].changing);
        assert_eq!(lines[5].state, "动爻");
        assert!(lines[0].harmony);
        assert!(lines[1].harmony);
        assert!(!lines[2].harmony);
    }

    #[test]
    fn key_line_for_world() {
        // 乾 palace: world at 5, yang on a yang position, still.
        let h = hexagram([1; 6], &[]);
        let line = key_line(&h, KeyRole::World);
        assert_eq!(line.role, KeyRole::World);
        assert_eq!(line.position, 5);
        assert_eq!(line.trigram, Trigram::Qian);
        assert!(line.harmony);
        assert_eq!(line.state, "世爻得正，局势稳定");
        assert_eq!(line.advice.len(), 3);
        assert_eq!(line.advice[2], "条件较好，可以稳步前进");
    }

    #[test]
    fn key_line_for_response() {
        // 震 palace: response at 5, yang on a yang position, changing.
        let h = hexagram([1, 0, 0, 1, 1, 1], &[4]);
        let line = key_line(&h, KeyRole::Response);
        assert_eq!(line.position, 5);
        assert_eq!(line.trigram, Trigram::Qian);
        assert!(line.harmony);
        assert!(line.changing);
        assert_eq!(line.state, "应爻得正而变，外部主动变化");
        assert_eq!(line.advice[1], "时机已到，可以采取行动");
    }

    #[test]
    fn key_role_positions_complement() {
        for t in Trigram::ALL {
            assert_eq!(
                KeyRole::World.position(t) + KeyRole::Response.position(t),
                7
            );
        }
    }
}
