//! Development trend read from the trigram pair and the changes.

use gua_core::{Hexagram, Phase, Season, Trigram};
use serde::Serialize;

use crate::changes::ChangeAnalysis;

/// How the directions of the two trigrams combine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionCombination {
    /// Angle between the two bearings, 0-180.
    pub angle: Option<u32>,
    /// 同向, 对冲, 相助 or 相离.
    pub kind: &'static str,
    /// 最强, 最弱, 较强 or 较弱.
    pub strength: &'static str,
    /// Numeric score.
    pub score: f64,
    /// Description.
    pub description: &'static str,
    /// Advice.
    pub recommendations: [&'static str; 2],
}

/// Combine the directions of the lower and upper trigrams.
pub fn direction_combination(lower: Trigram, upper: Trigram) -> DirectionCombination {
    let angle = lower.direction().angle_between(upper.direction());
    let (kind, strength, score, description, recommendations) = match angle {
        Some(0) => (
            "同向",
            "最强",
            1.0,
            "上下一致，力量集中",
            ["方向明确，可以果断前进", "力量集中，适合专注发展"],
        ),
        Some(180) => (
            "对冲",
            "最弱",
            0.1,
            "上下相对，力量分散",
            ["需要调和对立的力量", "寻找平衡点再行动"],
        ),
        Some(a) if a < 90 => (
            "相助",
            "较强",
            0.75,
            "方向协调，力量互补",
            ["力量互补，可以稳步前进", "注意协调各方面的发展"],
        ),
        _ => (
            "相离",
            "较弱",
            0.25,
            "方向偏离，力量分散",
            ["需要整合分散的力量", "调整方向后再行动"],
        ),
    };
    DirectionCombination {
        angle,
        kind,
        strength,
        score,
        description,
        recommendations,
    }
}

/// Seasonal movement from the lower to the upper trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeasonProgression {
    /// 稳定
    Stable,
    /// 顺行
    Forward,
    /// 逆行
    Backward,
    /// 跳跃
    Leap,
    /// 特殊
    Irregular,
}

impl SeasonProgression {
    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stable => "稳定",
            Self::Forward => "顺行",
            Self::Backward => "逆行",
            Self::Leap => "跳跃",
            Self::Irregular => "特殊",
        }
    }

    /// Description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Stable => "季节稳定，能量平稳",
            Self::Forward => "季节顺序发展，能量渐进",
            Self::Backward => "季节逆序变化，能量回溯",
            Self::Leap => "季节跨度较大，能量转换显著",
            Self::Irregular => "季节变化不规则",
        }
    }
}

fn season_order(season: Season) -> Option<usize> {
    match season {
        Season::Spring => Some(0),
        Season::Summer => Some(1),
        Season::Autumn => Some(2),
        Season::Winter => Some(3),
        Season::Interseasonal => None,
    }
}

/// Seasonal movement between two trigram phases.
pub fn season_progression(lower: Phase, upper: Phase) -> SeasonProgression {
    if lower == upper {
        return SeasonProgression::Stable;
    }
    let (Phase::Season(l), Phase::Season(u)) = (lower, upper) else {
        return SeasonProgression::Irregular;
    };
    let (Some(l), Some(u)) = (season_order(l), season_order(u)) else {
        return SeasonProgression::Irregular;
    };
    match (u + 4 - l) % 4 {
        1 => SeasonProgression::Forward,
        3 => SeasonProgression::Backward,
        _ => SeasonProgression::Leap,
    }
}

/// Flow of the time-of-day marks from the lower to the upper trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeFlow {
    /// 凝滞
    Stagnant,
    /// 顺时
    Forward,
    /// 逆时
    Backward,
}

impl TimeFlow {
    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stagnant => "凝滞",
            Self::Forward => "顺时",
            Self::Backward => "逆时",
        }
    }

    /// Description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Stagnant => "时间静止，需要突破",
            Self::Forward => "时间顺序流转，发展自然",
            Self::Backward => "时间逆序流转，需要调整",
        }
    }
}

/// Time flow between two trigrams.
pub fn time_flow(lower: Trigram, upper: Trigram) -> TimeFlow {
    let l = lower.time_mark().index();
    let u = upper.time_mark().index();
    if l == u {
        TimeFlow::Stagnant
    } else if (u + 7 - l) % 7 <= 3 {
        TimeFlow::Forward
    } else {
        TimeFlow::Backward
    }
}

/// Energy pattern from season progression and time flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnergyPattern {
    /// 最强
    Strongest,
    /// 较强
    Strong,
    /// 中等
    Moderate,
    /// 较弱
    Weak,
    /// 最弱
    Weakest,
    /// 停滞
    Stalled,
}

impl EnergyPattern {
    /// Combine a season progression with a time flow.
    pub fn of(season: SeasonProgression, time: TimeFlow) -> Self {
        match (season, time) {
            (SeasonProgression::Forward, TimeFlow::Forward) => Self::Strongest,
            (SeasonProgression::Forward, TimeFlow::Backward) => Self::Strong,
            (SeasonProgression::Backward, TimeFlow::Forward) => Self::Weak,
            (SeasonProgression::Backward, TimeFlow::Backward) => Self::Weakest,
            (SeasonProgression::Stable, TimeFlow::Stagnant) => Self::Stalled,
            _ => Self::Moderate,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strongest => "最强",
            Self::Strong => "较强",
            Self::Moderate => "中等",
            Self::Weak => "较弱",
            Self::Weakest => "最弱",
            Self::Stalled => "停滞",
        }
    }

    /// Numeric score.
    pub fn score(self) -> f64 {
        match self {
            Self::Strongest => 1.0,
            Self::Strong => 0.8,
            Self::Moderate => 0.6,
            Self::Weak => 0.4,
            Self::Weakest => 0.2,
            Self::Stalled => 0.1,
        }
    }

    /// Description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Strongest => "能量充沛，发展顺畅",
            Self::Strong => "能量充足，略有阻滞",
            Self::Moderate => "能量平稳，发展正常",
            Self::Weak => "能量不足，需要蓄积",
            Self::Weakest => "能量衰竭，需要休整",
            Self::Stalled => "能量凝滞，需要突破",
        }
    }
}

/// A labelled forecast line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Bucket name.
    pub level: &'static str,
    /// Forecast text.
    pub description: &'static str,
}

/// Momentum, stability and potential in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indicators {
    /// Average of direction and energy scores.
    pub momentum: f64,
    /// One minus their difference.
    pub stability: f64,
    /// Average of change intensity and pattern score.
    pub potential: f64,
}

/// Full trend reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    /// Direction combination.
    pub direction: DirectionCombination,
    /// Seasonal progression.
    pub season: SeasonProgression,
    /// Time flow.
    pub time: TimeFlow,
    /// Energy pattern.
    pub energy: EnergyPattern,
    /// Indicators.
    pub indicators: Indicators,
    /// Momentum forecast.
    pub momentum: Prediction,
    /// Stability forecast.
    pub stability: Prediction,
    /// Potential forecast.
    pub potential: Prediction,
    /// Weighted confidence in [0, 1].
    pub confidence: f64,
    /// Confidence forecast.
    pub confidence_level: Prediction,
}

fn bucket(
    value: f64,
    high: (&'static str, &'static str),
    mid: (&'static str, &'static str),
    low: (&'static str, &'static str),
) -> Prediction {
    let (level, description) = if value > 0.8 {
        high
    } else if value > 0.6 {
        mid
    } else {
        low
    };
    Prediction { level, description }
}

/// Read the development trend of a hexagram.
pub fn analyze_trend(hexagram: &Hexagram, changes: &ChangeAnalysis) -> TrendAnalysis {
    let (lower, upper) = hexagram.original_trigrams();
    let direction = direction_combination(lower, upper);
    let season = season_progression(lower.phase(), upper.phase());
    let time = time_flow(lower, upper);
    let energy = EnergyPattern::of(season, time);

    let d = direction.score;
    let e = energy.score();
    let indicators = Indicators {
        momentum: (d + e) / 2.0,
        stability: 1.0 - (d - e).abs(),
        potential: (changes.intensity.value() + changes.temporal.pattern.score()) / 2.0,
    };

    let confidence =
        0.3 * indicators.momentum + 0.4 * indicators.stability + 0.3 * indicators.potential;
    let confidence_level = if confidence > 0.8 {
        Prediction {
            level: "很高",
            description: "预测可信度很高，可以作为重要参考",
        }
    } else if confidence > 0.6 {
        Prediction {
            level: "较高",
            description: "预测可信度较高，可以参考",
        }
    } else if confidence > 0.4 {
        Prediction {
            level: "中等",
            description: "预测可信度一般，仅供参考",
        }
    } else {
        Prediction {
            level: "较低",
            description: "预测可信度较低，需要谨慎参考",
        }
    };

    TrendAnalysis {
        momentum: bucket(
            indicators.momentum,
            ("极强", "发展势头强劲，可以大胆进取"),
            ("较强", "动力充足，稳步前进"),
            ("一般", "动力欠缺，需要蓄势"),
        ),
        stability: bucket(
            indicators.stability,
            ("高", "发展稳定，可持续性强"),
            ("中", "基本稳定，有小幅波动"),
            ("低", "变数较大，需要防范"),
        ),
        potential: bucket(
            indicators.potential,
            ("巨大", "潜力充沛，前景广阔"),
            ("较好", "有一定潜力，可以开发"),
            ("有限", "潜力有限，需要创新"),
        ),
        direction,
        season,
        time,
        energy,
        indicators,
        confidence,
        confidence_level,
    }
}
