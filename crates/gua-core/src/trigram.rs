//! The eight trigrams and their attribute tables.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{GuaError, GuaResult};
use crate::line::Polarity;
use crate::season::{Direction, Season};

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// 乾, heaven
    Qian,
    /// 兑, lake
    Dui,
    /// 离, fire
    Li,
    /// 震, thunder
    Zhen,
    /// 巽, wind
    Xun,
    /// 坎, water
    Kan,
    /// 艮, mountain
    Gen,
    /// 坤, earth
    Kun,
}

/// Bottom-line-first patterns, paired with their trigram.
const TABLE: [([u8; 3], Trigram); 8] = [
    ([1, 1, 1], Trigram::Qian),
    ([0, 0, 0], Trigram::Kun),
    ([0, 1, 0], Trigram::Kan),
    ([1, 0, 1], Trigram::Li),
    ([1, 0, 0], Trigram::Zhen),
    ([0, 0, 1], Trigram::Gen),
    ([1, 1, 0], Trigram::Dui),
    ([0, 1, 1], Trigram::Xun),
];

/// Trigrams indexed by their lines read as a binary number, bottom line
/// as the most significant bit.
const BY_BITS: [Trigram; 8] = [
    Trigram::Kun,
    Trigram::Gen,
    Trigram::Kan,
    Trigram::Xun,
    Trigram::Zhen,
    Trigram::Li,
    Trigram::Dui,
    Trigram::Qian,
];

impl Trigram {
    /// All eight trigrams in the traditional 乾兑离震巽坎艮坤 order.
    pub const ALL: [Self; 8] = [
        Self::Qian,
        Self::Dui,
        Self::Li,
        Self::Zhen,
        Self::Xun,
        Self::Kan,
        Self::Gen,
        Self::Kun,
    ];

    /// Look up the trigram for three lines, bottom line first.
    pub fn from_lines(lines: [u8; 3]) -> GuaResult<Self> {
        if lines.iter().any(|v| *v > 1) {
            return Err(GuaError::InvalidTriplet(lines));
        }
        Ok(Self::from_bits(lines.map(|v| v == 1)))
    }

    /// Look up the trigram for three yang flags, bottom line first.
    pub fn from_bits(bits: [bool; 3]) -> Self {
        let index = bits.iter().fold(0, |acc, b| acc * 2 + usize::from(*b));
        BY_BITS[index]
    }

    /// The trigram's lines, bottom line first.
    pub fn lines(self) -> [u8; 3] {
        TABLE
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(pattern, _)| *pattern)
            .unwrap_or_default()
    }

    /// Parse a Chinese name or pinyin.
    pub fn parse(s: &str) -> GuaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "乾" | "qian" | "heaven" => Ok(Self::Qian),
            "兑" | "dui" | "lake" => Ok(Self::Dui),
            "离" | "li" | "fire" => Ok(Self::Li),
            "震" | "zhen" | "thunder" => Ok(Self::Zhen),
            "巽" | "xun" | "wind" => Ok(Self::Xun),
            "坎" | "kan" | "water" => Ok(Self::Kan),
            "艮" | "gen" | "mountain" => Ok(Self::Gen),
            "坤" | "kun" | "earth" => Ok(Self::Kun),
            _ => Err(GuaError::InvalidTrigram(s.to_string())),
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }

    /// The natural image: 天 泽 火 雷 风 水 山 地.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Dui => "泽",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "风",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
        }
    }

    /// English rendering of the image.
    pub fn english(self) -> &'static str {
        match self {
            Self::Qian => "heaven",
            Self::Dui => "lake",
            Self::Li => "fire",
            Self::Zhen => "thunder",
            Self::Xun => "wind",
            Self::Kan => "water",
            Self::Gen => "mountain",
            Self::Kun => "earth",
        }
    }

    /// Yang or yin nature.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Qian | Self::Zhen | Self::Kan | Self::Gen => Polarity::Yang,
            Self::Dui | Self::Li | Self::Xun | Self::Kun => Polarity::Yin,
        }
    }

    /// The element this trigram belongs to.
    pub fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// Compass direction in the later-heaven arrangement.
    pub fn direction(self) -> Direction {
        match self {
            Self::Qian => Direction::NorthWest,
            Self::Dui => Direction::West,
            Self::Li => Direction::South,
            Self::Zhen => Direction::East,
            Self::Xun => Direction::SouthEast,
            Self::Kan => Direction::North,
            Self::Gen => Direction::NorthEast,
            Self::Kun => Direction::SouthWest,
        }
    }

    /// Family member.
    pub fn family(self) -> &'static str {
        match self {
            Self::Qian => "父",
            Self::Dui => "少女",
            Self::Li => "中女",
            Self::Zhen => "长男",
            Self::Xun => "长女",
            Self::Kan => "中男",
            Self::Gen => "少男",
            Self::Kun => "母",
        }
    }

    /// Body part.
    pub fn body(self) -> &'static str {
        match self {
            Self::Qian => "头",
            Self::Dui => "口",
            Self::Li => "目",
            Self::Zhen => "足",
            Self::Xun => "股",
            Self::Kan => "耳",
            Self::Gen => "手",
            Self::Kun => "腹",
        }
    }

    /// Animal.
    pub fn animal(self) -> &'static str {
        match self {
            Self::Qian => "马",
            Self::Dui => "羊",
            Self::Li => "雉",
            Self::Zhen => "龙",
            Self::Xun => "鸡",
            Self::Kan => "豕",
            Self::Gen => "狗",
            Self::Kun => "牛",
        }
    }

    /// Three characteristic traits.
    pub fn traits(self) -> [&'static str; 3] {
        match self {
            Self::Qian => ["刚健", "君子", "创造"],
            Self::Dui => ["悦乐", "喜悦", "和顺"],
            Self::Li => ["明丽", "文明", "丽泽"],
            Self::Zhen => ["动", "起", "振发"],
            Self::Xun => ["入", "巽", "顺从"],
            Self::Kan => ["陷", "险", "潜藏"],
            Self::Gen => ["止", "静", "安定"],
            Self::Kun => ["顺", "承", "柔顺"],
        }
    }

    /// One-sentence meaning.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::Qian => "刚健中正，充满活力，具有领导才能",
            Self::Dui => "喜悦和畅，与人和睦，具有亲和力",
            Self::Li => "光明磊落，文明昌盛，具有智慧",
            Self::Zhen => "雷厉风行，震撼奋起，具有决断力",
            Self::Xun => "谦逊温和，随风潜入，具有适应性",
            Self::Kan => "险中求通，智慧深邃，具有洞察力",
            Self::Gen => "稳重安静，不轻举妄动，具有耐性",
            Self::Kun => "柔顺包容，厚德载物，具有承载力",
        }
    }

    /// Fortune tag.
    pub fn fortune(self) -> &'static str {
        match self {
            Self::Qian => "大吉",
            Self::Zhen => "吉凶参半",
            Self::Kan => "凶",
            Self::Dui | Self::Li | Self::Xun | Self::Gen | Self::Kun => "吉",
        }
    }

    /// Season the trigram belongs to by its element.
    pub fn season(self) -> Season {
        self.element().season()
    }

    /// Ordinal number, 1 to 8.
    pub fn number(self) -> u8 {
        match self {
            Self::Qian => 1,
            Self::Dui => 2,
            Self::Li => 3,
            Self::Zhen => 4,
            Self::Xun => 5,
            Self::Kan => 6,
            Self::Gen => 7,
            Self::Kun => 8,
        }
    }

    /// Colour.
    pub fn color(self) -> &'static str {
        match self {
            Self::Qian | Self::Xun => "紫",
            Self::Dui => "白",
            Self::Li => "赤",
            Self::Zhen => "青",
            Self::Kan => "黑",
            Self::Gen | Self::Kun => "黄",
        }
    }

    /// Seasonal phase used when reading a hexagram's development.
    pub fn phase(self) -> Phase {
        match self {
            Self::Qian | Self::Kan => Phase::Season(Season::Winter),
            Self::Kun | Self::Li => Phase::Season(Season::Summer),
            Self::Zhen => Phase::Season(Season::Spring),
            Self::Dui => Phase::Season(Season::Autumn),
            Self::Xun => Phase::Transition(Season::Spring, Season::Summer),
            Self::Gen => Phase::Transition(Season::Winter, Season::Spring),
        }
    }

    /// Time-of-day mark used when reading a hexagram's development.
    pub fn time_mark(self) -> TimeMark {
        match self {
            Self::Qian => TimeMark::Night,
            Self::Kun | Self::Li => TimeMark::Noon,
            Self::Zhen => TimeMark::Dawn,
            Self::Xun => TimeMark::Evening,
            Self::Kan => TimeMark::Zi,
            Self::Gen => TimeMark::Yin,
            Self::Dui => TimeMark::You,
        }
    }

    /// The full attribute sheet.
    pub fn attributes(self) -> TrigramAttributes {
        TrigramAttributes {
            trigram: self,
            name: self.name(),
            symbol: self.symbol(),
            image: self.image(),
            polarity: self.polarity(),
            element: self.element(),
            direction: self.direction(),
            family: self.family(),
            body: self.body(),
            animal: self.animal(),
            traits: self.traits(),
            meaning: self.meaning(),
            fortune: self.fortune(),
            season: self.season(),
            number: self.number(),
            color: self.color(),
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A season, or the seam between two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// A single season.
    Season(Season),
    /// The turn from one season into the next.
    Transition(Season, Season),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Season(s) => write!(f, "{s}"),
            Self::Transition(a, b) => write!(f, "{a}{b}之交"),
        }
    }
}

/// Time-of-day marks, in their daily order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TimeMark {
    /// 子, midnight
    Zi,
    /// 寅, before dawn
    Yin,
    /// 晨, morning
    Dawn,
    /// 午, noon
    Noon,
    /// 晚, evening
    Evening,
    /// 酉, dusk
    You,
    /// 夜, night
    Night,
}

impl TimeMark {
    /// Position in the daily order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Yin => "寅",
            Self::Dawn => "晨",
            Self::Noon => "午",
            Self::Evening => "晚",
            Self::You => "酉",
            Self::Night => "夜",
        }
    }
}

impl std::fmt::Display for TimeMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the engine knows about a trigram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrigramAttributes {
    /// The trigram described.
    pub trigram: Trigram,
    /// Chinese name.
    pub name: &'static str,
    /// Unicode symbol.
    pub symbol: char,
    /// Natural image.
    pub image: &'static str,
    /// Yang or yin.
    pub polarity: Polarity,
    /// Element.
    pub element: Element,
    /// Direction.
    pub direction: Direction,
    /// Family role.
    pub family: &'static str,
    /// Body part.
    pub body: &'static str,
    /// Animal.
    pub animal: &'static str,
    /// Traits.
    pub traits: [&'static str; 3],
    /// Meaning.
    pub meaning: &'static str,
    /// Fortune tag.
    pub fortune: &'static str,
    /// Season.
    pub season: Season,
    /// Ordinal number.
    pub number: u8,
    /// Colour.
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_display() {
        insta::assert_snapshot!(Trigram::Xun.phase().to_string(), @"春夏之交");
        insta::assert_snapshot!(Trigram::Kan.phase().to_string(), @"冬");
    }

    #[test]
    fn bits_agree_with_table() {
        for (pattern, trigram) in TABLE {
            assert_eq!(Trigram::from_bits(pattern.map(|v| v == 1)), trigram);
        }
    }

    #[test]
    fn table_is_a_bijection() {
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_lines(t.lines()).unwrap(), t);
        }
    }

    #[test]
    fn bottom_first_patterns() {
        assert_eq!(Trigram::from_lines([1, 0, 0]).unwrap(), Trigram::Zhen);
        assert_eq!(Trigram::from_lines([0, 0, 1]).unwrap(), Trigram::Gen);
        assert_eq!(Trigram::from_lines([0, 1, 1]).unwrap(), Trigram::Xun);
        assert_eq!(Trigram::from_lines([1, 1, 0]).unwrap(), Trigram::Dui);
    }

    #[test]
    fn rejects_non_binary_triplet() {
        assert_eq!(
            Trigram::from_lines([1, 2, 0]),
            Err(GuaError::InvalidTriplet([1, 2, 0]))
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!(Trigram::parse("坎").unwrap(), Trigram::Kan);
        assert_eq!(Trigram::parse("Mountain").unwrap(), Trigram::Gen);
        assert!(Trigram::parse("雨").is_err());
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Dui.element(), Element::Metal);
        assert_eq!(Trigram::Xun.element(), Element::Wood);
        assert_eq!(Trigram::Gen.element(), Element::Earth);
    }

    #[test]
    fn numbers_are_distinct() {
        let mut numbers: Vec<u8> = Trigram::ALL.iter().map(|t| t.number()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=8).collect::<Vec<_>>());
    }
}
