//! Short, medium and long-term advice plus risk warnings.

use gua_core::{Nature, SixRelative};
use serde::Serialize;

use crate::five_elements::{ElementComparison, FiveElementAnalysis, StatusLevel};
use crate::positional::{KeyLine, LineAnalysis};

/// How much a hexagram is in motion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dynamics {
    /// Number of changing lines.
    pub changing: usize,
    /// 静卦, 单变卦, 双变卦 or 多变卦.
    pub level: &'static str,
    /// Description.
    pub description: &'static str,
    /// Fixed advice for the level.
    pub advice: [&'static str; 3],
}

/// Classify by changing-line count.
pub fn dynamics(changing: usize) -> Dynamics {
    let (level, description, advice) = match changing {
        0 => (
            "静卦",
            "整体稳定，变化较少",
            ["保持现有策略", "稳步推进计划", "注意长期发展"],
        ),
        1 => (
            "单变卦",
            "局部变化，整体稳定",
            ["关注变化方向", "适度调整策略", "把握关键时机"],
        ),
        2 => (
            "双变卦",
            "多重变化，需要关注",
            ["制定应对预案", "做好充分准备", "注意风险控制"],
        ),
        _ => (
            "多变卦",
            "变化剧烈，需要谨慎",
            ["谨慎决策行动", "加强风险管理", "寻求稳定支持"],
        ),
    };
    Dynamics {
        changing,
        level,
        description,
        advice,
    }
}

/// Advice grouped by horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    /// Near-term steps.
    pub short_term: Vec<String>,
    /// Medium-term direction.
    pub medium_term: Vec<String>,
    /// Long-term outlook.
    pub long_term: Vec<String>,
    /// Risk warnings.
    pub risks: Vec<String>,
}

/// Inputs the advice is chosen from.
pub struct AdviceInputs<'a> {
    /// Motion classification.
    pub dynamics: &'a Dynamics,
    /// All six lines.
    pub lines: &'a [LineAnalysis],
    /// The world line.
    pub world: &'a KeyLine,
    /// Five-element analysis.
    pub elements: &'a FiveElementAnalysis,
    /// Original/changed comparison.
    pub comparison: &'a ElementComparison,
}

/// Pick advice by threshold rules.
pub fn advise(inputs: &AdviceInputs<'_>) -> Advice {
    let short_term = inputs.dynamics.advice.iter().map(|s| s.to_string()).collect();

    let medium_term = match inputs.elements.status.level {
        StatusLevel::Excellent | StatusLevel::Good => {
            vec!["五行配置有利，可以积极拓展".to_string(), "巩固优势，扩大成果".to_string()]
        }
        StatusLevel::Fair => {
            vec!["五行大体平衡，稳中求进".to_string(), "补足短板，均衡发展".to_string()]
        }
        StatusLevel::Poor | StatusLevel::Adverse => {
            vec!["五行失衡，需要调整布局".to_string(), "先求稳定，再图发展".to_string()]
        }
    };

    let future_favorable = inputs
        .comparison
        .changed
        .as_ref()
        .map_or(inputs.comparison.original.recommendation.relation.favorable, |c| {
            c.recommendation.relation.favorable
        });
    let mut long_term = vec![if future_favorable {
        "变卦趋势向好，长远可期".to_string()
    } else {
        "变卦趋势欠佳，需要未雨绸缪".to_string()
    }];
    long_term.push(if inputs.world.strength.value >= 0.6 {
        "世爻有力，自身根基稳固".to_string()
    } else {
        "世爻力弱，需要积蓄实力".to_string()
    });

    let mut risks: Vec<String> = inputs
        .lines
        .iter()
        .filter(|l| l.changing && l.six_spirit.nature() == Nature::Unfavorable)
        .map(|l| format!("第{}爻{}发动，注意{}", l.position, l.six_spirit, l.six_spirit.meaning()))
        .collect();
    if inputs
        .lines
        .get(inputs.world.position - 1)
        .is_some_and(|l| l.six_relative == SixRelative::Officer)
    {
        risks.push("世爻临官鬼，注意压力与阻碍".to_string());
    }
    if inputs.elements.tally.balance < 0.5 {
        risks.push("五行失衡，注意调和".to_string());
    }
    if !inputs.elements.seasonal.favorable {
        risks.push("时令不利，避免冒进".to_string());
    }

    Advice {
        short_term,
        medium_term,
        long_term,
        risks,
    }
}
