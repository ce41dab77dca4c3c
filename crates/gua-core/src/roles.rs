//! Positional role labels: six relatives, six spirits and ten gods.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::line::Polarity;
use crate::relation::{Relation, relation_type};
use crate::season::Direction;
use crate::stem_branch::HeavenlyStem;

/// Static fortune tag attached to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    /// 吉
    Favorable,
    /// 凶
    Unfavorable,
    /// 中性
    Neutral,
}

impl Nature {
    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Favorable => "吉",
            Self::Unfavorable => "凶",
            Self::Neutral => "中性",
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The six relatives (六亲). There are five labels despite the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SixRelative {
    /// 兄弟
    Siblings,
    /// 子孙
    Offspring,
    /// 妻财
    Wealth,
    /// 官鬼
    Officer,
    /// 父母
    Parents,
}

impl SixRelative {
    /// All labels.
    pub const ALL: [Self; 5] = [
        Self::Siblings,
        Self::Offspring,
        Self::Wealth,
        Self::Officer,
        Self::Parents,
    ];

    /// Label for a line whose branch element is `line`, in a palace of
    /// element `palace`.
    pub fn derive(palace: Element, line: Element) -> Self {
        match relation_type(palace, line) {
            Relation::SameKind | Relation::Unrelated => Self::Siblings,
            Relation::Generating => Self::Offspring,
            Relation::Overcoming => Self::Wealth,
            _ => match relation_type(line, palace) {
                Relation::Overcoming => Self::Officer,
                Relation::Generating => Self::Parents,
                _ => Self::Siblings,
            },
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Siblings => "兄弟",
            Self::Offspring => "子孙",
            Self::Wealth => "妻财",
            Self::Officer => "官鬼",
            Self::Parents => "父母",
        }
    }

    /// Fortune tag.
    pub fn nature(self) -> Nature {
        match self {
            Self::Siblings => Nature::Neutral,
            Self::Officer => Nature::Unfavorable,
            Self::Offspring | Self::Wealth | Self::Parents => Nature::Favorable,
        }
    }

    /// Short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Siblings => "平等、竞争",
            Self::Offspring => "后代、结果",
            Self::Wealth => "财运、收获",
            Self::Officer => "权威、压力",
            Self::Parents => "长辈、助力",
        }
    }
}

impl std::fmt::Display for SixRelative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The six spirits (六神).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SixSpirit {
    /// 青龙
    AzureDragon,
    /// 朱雀
    VermilionBird,
    /// 勾陈
    Hook,
    /// 螣蛇
    FlyingSnake,
    /// 白虎
    WhiteTiger,
    /// 玄武
    BlackTortoise,
}

impl SixSpirit {
    /// All spirits in ascending order.
    pub const ALL: [Self; 6] = [
        Self::AzureDragon,
        Self::VermilionBird,
        Self::Hook,
        Self::FlyingSnake,
        Self::WhiteTiger,
        Self::BlackTortoise,
    ];

    /// The spirit on the bottom line for a given first stem.
    pub fn starting(stem: HeavenlyStem) -> Self {
        match stem {
            HeavenlyStem::Jia | HeavenlyStem::Yi => Self::AzureDragon,
            HeavenlyStem::Bing | HeavenlyStem::Ding => Self::VermilionBird,
            HeavenlyStem::Wu => Self::Hook,
            HeavenlyStem::Ji => Self::FlyingSnake,
            HeavenlyStem::Geng | HeavenlyStem::Xin => Self::WhiteTiger,
            HeavenlyStem::Ren | HeavenlyStem::Gui => Self::BlackTortoise,
        }
    }

    /// Spirits for all six lines, ascending cyclically from the start.
    pub fn sequence(stem: HeavenlyStem) -> [Self; 6] {
        let start = Self::starting(stem).index();
        std::array::from_fn(|i| Self::ALL[(start + i) % Self::ALL.len()])
    }

    /// Position in ascending order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龙",
            Self::VermilionBird => "朱雀",
            Self::Hook => "勾陈",
            Self::FlyingSnake => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }

    /// Fortune tag.
    pub fn nature(self) -> Nature {
        match self {
            Self::AzureDragon | Self::BlackTortoise => Nature::Favorable,
            _ => Nature::Unfavorable,
        }
    }

    /// Associated quarter.
    pub fn direction(self) -> Direction {
        match self {
            Self::AzureDragon => Direction::East,
            Self::VermilionBird => Direction::South,
            Self::Hook => Direction::Center,
            Self::FlyingSnake | Self::BlackTortoise => Direction::North,
            Self::WhiteTiger => Direction::West,
        }
    }

    /// Short meaning.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::AzureDragon => "贵人相助",
            Self::VermilionBird => "口舌是非",
            Self::Hook => "疾病困扰",
            Self::FlyingSnake => "暗处危险",
            Self::WhiteTiger => "意外损失",
            Self::BlackTortoise => "贵人运",
        }
    }
}

impl std::fmt::Display for SixSpirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The ten gods (十神).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 正印
    DirectResource,
    /// 偏印
    IndirectResource,
    /// 正官
    DirectOfficer,
    /// 七杀
    SevenKillings,
    /// 正财
    DirectWealth,
    /// 偏财
    IndirectWealth,
    /// 食神
    EatingGod,
    /// 伤官
    HurtingOfficer,
    /// 比肩
    Companion,
    /// 劫财
    RobWealth,
}

impl TenGod {
    /// All ten gods.
    pub const ALL: [Self; 10] = [
        Self::DirectResource,
        Self::IndirectResource,
        Self::DirectOfficer,
        Self::SevenKillings,
        Self::DirectWealth,
        Self::IndirectWealth,
        Self::EatingGod,
        Self::HurtingOfficer,
        Self::Companion,
        Self::RobWealth,
    ];

    /// Role of a line of `line` element and `polarity`, relative to the
    /// day master element.
    pub fn derive(day_master: Element, line: Element, polarity: Polarity) -> Self {
        let yang = polarity == Polarity::Yang;
        match relation_type(day_master, line) {
            Relation::Generating if yang => Self::DirectResource,
            Relation::Generating => Self::IndirectResource,
            Relation::Overcoming if yang => Self::DirectOfficer,
            Relation::Overcoming => Self::SevenKillings,
            Relation::Draining if yang => Self::DirectWealth,
            Relation::Draining => Self::IndirectWealth,
            Relation::Transforming if yang => Self::EatingGod,
            Relation::Transforming => Self::HurtingOfficer,
            Relation::SameKind | Relation::Unrelated if yang => Self::Companion,
            Relation::SameKind | Relation::Unrelated => Self::RobWealth,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DirectResource => "正印",
            Self::IndirectResource => "偏印",
            Self::DirectOfficer => "正官",
            Self::SevenKillings => "七杀",
            Self::DirectWealth => "正财",
            Self::IndirectWealth => "偏财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
        }
    }

    /// Fortune tag.
    pub fn nature(self) -> Nature {
        match self {
            Self::DirectResource | Self::DirectOfficer | Self::DirectWealth | Self::EatingGod => {
                Nature::Favorable
            }
            Self::Companion => Nature::Neutral,
            _ => Nature::Unfavorable,
        }
    }

    /// Short meaning.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::DirectResource => "贵人、学习",
            Self::IndirectResource => "小人、暗算",
            Self::DirectOfficer => "正统、权威",
            Self::SevenKillings => "克制、伤害",
            Self::DirectWealth => "正财、正当收获",
            Self::IndirectWealth => "意外之财",
            Self::EatingGod => "智慧、才艺",
            Self::HurtingOfficer => "破坏、创新",
            Self::Companion => "自身、竞争",
            Self::RobWealth => "损失、破财",
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Element::{Earth, Fire, Metal, Water, Wood};

    #[test]
    fn relatives_from_palace() {
        assert_eq!(SixRelative::derive(Wood, Wood), SixRelative::Siblings);
        assert_eq!(SixRelative::derive(Wood, Fire), SixRelative::Offspring);
        assert_eq!(SixRelative::derive(Wood, Earth), SixRelative::Wealth);
        assert_eq!(SixRelative::derive(Wood, Metal), SixRelative::Officer);
        assert_eq!(SixRelative::derive(Wood, Water), SixRelative::Parents);
    }

    #[test]
    fn every_relative_is_reachable() {
        for relative in SixRelative::ALL {
            assert!(
                Element::ALL
                    .iter()
                    .any(|e| SixRelative::derive(Metal, *e) == relative),
                "{relative}"
            );
        }
    }

    #[test]
    fn spirits_ascend_from_stem() {
        assert_eq!(
            SixSpirit::sequence(HeavenlyStem::Jia),
            SixSpirit::ALL
        );
        let seq = SixSpirit::sequence(HeavenlyStem::Ji);
        assert_eq!(seq[0], SixSpirit::FlyingSnake);
        assert_eq!(seq[2], SixSpirit::BlackTortoise);
        assert_eq!(seq[3], SixSpirit::AzureDragon);
    }

    #[test]
    fn ten_gods_by_relation_and_polarity() {
        assert_eq!(
            TenGod::derive(Metal, Water, Polarity::Yang),
            TenGod::DirectResource
        );
        assert_eq!(
            TenGod::derive(Metal, Wood, Polarity::Yin),
            TenGod::SevenKillings
        );
        assert_eq!(
            TenGod::derive(Metal, Earth, Polarity::Yang),
            TenGod::DirectWealth
        );
        assert_eq!(
            TenGod::derive(Metal, Fire, Polarity::Yin),
            TenGod::HurtingOfficer
        );
        assert_eq!(
            TenGod::derive(Metal, Metal, Polarity::Yin),
            TenGod::RobWealth
        );
    }

    #[test]
    fn natures() {
        assert_eq!(SixRelative::Officer.nature(), Nature::Unfavorable);
        assert_eq!(SixSpirit::BlackTortoise.nature(), Nature::Favorable);
        assert_eq!(TenGod::Companion.nature(), Nature::Neutral);
        assert_eq!(TenGod::IndirectWealth.nature(), Nature::Unfavorable);
    }
}
