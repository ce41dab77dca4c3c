//! The five elements and their static associations.

use serde::{Deserialize, Serialize};

use crate::error::{GuaError, GuaResult};
use crate::season::{Direction, Season};
use crate::stem_branch::EarthlyBranch;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    /// 金
    Metal,
    /// 木
    Wood,
    /// 水
    Water,
    /// 火
    Fire,
    /// 土
    Earth,
}

impl Element {
    /// All five elements in table order.
    pub const ALL: [Self; 5] = [
        Self::Metal,
        Self::Wood,
        Self::Water,
        Self::Fire,
        Self::Earth,
    ];

    /// Position of this element in [`Element::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// Parse a Chinese or English element name.
    pub fn parse(s: &str) -> GuaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "金" | "metal" => Ok(Self::Metal),
            "木" | "wood" => Ok(Self::Wood),
            "水" | "water" => Ok(Self::Water),
            "火" | "fire" => Ok(Self::Fire),
            "土" | "earth" => Ok(Self::Earth),
            _ => Err(GuaError::InvalidElement(s.to_string())),
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// English name.
    pub fn english(self) -> &'static str {
        match self {
            Self::Metal => "metal",
            Self::Wood => "wood",
            Self::Water => "water",
            Self::Fire => "fire",
            Self::Earth => "earth",
        }
    }

    /// The season this element rules.
    pub fn season(self) -> Season {
        match self {
            Self::Metal => Season::Autumn,
            Self::Wood => Season::Spring,
            Self::Water => Season::Winter,
            Self::Fire => Season::Summer,
            Self::Earth => Season::Interseasonal,
        }
    }

    /// The direction this element rules.
    pub fn direction(self) -> Direction {
        match self {
            Self::Metal => Direction::West,
            Self::Wood => Direction::East,
            Self::Water => Direction::North,
            Self::Fire => Direction::South,
            Self::Earth => Direction::Center,
        }
    }

    /// Associated colour.
    pub fn color(self) -> &'static str {
        match self {
            Self::Metal => "白",
            Self::Wood => "青",
            Self::Water => "黑",
            Self::Fire => "赤",
            Self::Earth => "黄",
        }
    }

    /// Associated taste.
    pub fn taste(self) -> &'static str {
        match self {
            Self::Metal => "辛",
            Self::Wood => "酸",
            Self::Water => "咸",
            Self::Fire => "苦",
            Self::Earth => "甘",
        }
    }

    /// The two numbers associated with this element.
    pub fn numbers(self) -> [u8; 2] {
        match self {
            Self::Metal => [4, 9],
            Self::Wood => [3, 8],
            Self::Water => [1, 6],
            Self::Fire => [2, 7],
            Self::Earth => [5, 10],
        }
    }

    /// The earthly branches (double-hours) carrying this element.
    pub fn hours(self) -> &'static [EarthlyBranch] {
        use EarthlyBranch::*;
        match self {
            Self::Metal => &[Shen, You],
            Self::Wood => &[Yin, Mao],
            Self::Water => &[Zi, Hai],
            Self::Fire => &[Si, Wu],
            Self::Earth => &[Chen, Xu, Chou, Wei],
        }
    }

    /// Associated organs.
    pub fn organs(self) -> [&'static str; 2] {
        match self {
            Self::Metal => ["肺", "大肠"],
            Self::Wood => ["肝", "胆"],
            Self::Water => ["肾", "膀胱"],
            Self::Fire => ["心", "小肠"],
            Self::Earth => ["脾", "胃"],
        }
    }

    /// Associated emotion.
    pub fn emotion(self) -> &'static str {
        match self {
            Self::Metal => "悲",
            Self::Wood => "怒",
            Self::Water => "恐",
            Self::Fire => "喜",
            Self::Earth => "思",
        }
    }

    /// Associated climate.
    pub fn weather(self) -> &'static str {
        match self {
            Self::Metal => "燥",
            Self::Wood => "风",
            Self::Water => "寒",
            Self::Fire => "热",
            Self::Earth => "湿",
        }
    }

    /// Qualities, features, images and functions of the element.
    pub fn nature(self) -> ElementNature {
        match self {
            Self::Metal => ElementNature {
                qualities: ["刚健", "收敛", "肃杀"],
                features: ["坚韧", "锐利", "清洁"],
                images: ["金属", "岩石", "矿物"],
                functions: ["断绝", "决断", "取舍"],
            },
            Self::Wood => ElementNature {
                qualities: ["生发", "向上", "舒展"],
                features: ["柔韧", "曲直", "生长"],
                images: ["树木", "草药", "花卉"],
                functions: ["疏达", "条达", "升发"],
            },
            Self::Water => ElementNature {
                qualities: ["寒冷", "向下", "润泽"],
                features: ["柔弱", "滋润", "通达"],
                images: ["江河", "雨露", "泉源"],
                functions: ["浸润", "滋养", "藏精"],
            },
            Self::Fire => ElementNature {
                qualities: ["炎热", "向上", "光明"],
                features: ["温暖", "明亮", "活跃"],
                images: ["日月", "星辰", "火光"],
                functions: ["温煦", "蒸腾", "推动"],
            },
            Self::Earth => ElementNature {
                qualities: ["厚重", "中和", "承载"],
                features: ["稳重", "包容", "中正"],
                images: ["山岳", "大地", "田土"],
                functions: ["生化", "承载", "统摄"],
            },
        }
    }

    /// Advice for strengthening or balancing this element.
    pub fn advice(self) -> ElementAdvice {
        match self {
            Self::Metal => ElementAdvice {
                enhance: ["佩戴金属饰品", "居于西方", "食用辛味食物"],
                environment: ["保持环境整洁", "适当通风", "减少湿度"],
                behaviour: ["培养决断力", "保持纪律", "注重效率"],
                avoid: ["过度压抑", "环境混乱", "意志不坚"],
            },
            Self::Wood => ElementAdvice {
                enhance: ["亲近自然", "食用酸味食物", "晨练"],
                environment: ["增加绿植", "保持通风", "充足光照"],
                behaviour: ["保持运动", "正面思考", "创新发展"],
                avoid: ["郁结不舒", "压抑情绪", "缺乏活动"],
            },
            Self::Water => ElementAdvice {
                enhance: ["亲水活动", "食用咸味食物", "充足休息"],
                environment: ["保持安静", "适度潮湿", "柔和光线"],
                behaviour: ["静心冥想", "充足睡眠", "知识积累"],
                avoid: ["过度疲劳", "环境燥热", "意志消沉"],
            },
            Self::Fire => ElementAdvice {
                enhance: ["晒太阳", "食用苦味食物", "社交活动"],
                environment: ["明亮光线", "温暖空间", "红色调"],
                behaviour: ["保持热情", "积极交际", "乐观向上"],
                avoid: ["情绪激动", "过度兴奋", "缺乏节制"],
            },
            Self::Earth => ElementAdvice {
                enhance: ["接地气", "食用甘味食物", "规律作息"],
                environment: ["整洁有序", "黄色调", "稳定温度"],
                behaviour: ["保持中正", "脚踏实地", "注重调和"],
                avoid: ["过度思虑", "饮食无度", "环境混乱"],
            },
        }
    }

    /// The full attribute sheet for this element.
    pub fn attributes(self) -> ElementAttributes {
        ElementAttributes {
            element: self,
            direction: self.direction(),
            season: self.season(),
            color: self.color(),
            hours: self.hours().to_vec(),
            organs: self.organs(),
            emotion: self.emotion(),
            weather: self.weather(),
            taste: self.taste(),
            numbers: self.numbers(),
            nature: self.nature(),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptive traits of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementNature {
    /// 性质
    pub qualities: [&'static str; 3],
    /// 特征
    pub features: [&'static str; 3],
    /// 物象
    pub images: [&'static str; 3],
    /// 职能
    pub functions: [&'static str; 3],
}

/// Balancing advice for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementAdvice {
    /// 增强
    pub enhance: [&'static str; 3],
    /// 环境
    pub environment: [&'static str; 3],
    /// 行为
    pub behaviour: [&'static str; 3],
    /// 避免
    pub avoid: [&'static str; 3],
}

/// Everything the engine knows about an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementAttributes {
    /// The element described.
    pub element: Element,
    /// Ruling direction.
    pub direction: Direction,
    /// Ruling season.
    pub season: Season,
    /// Colour.
    pub color: &'static str,
    /// Branches (double-hours) carrying the element.
    pub hours: Vec<EarthlyBranch>,
    /// Organs.
    pub organs: [&'static str; 2],
    /// Emotion.
    pub emotion: &'static str,
    /// Climate.
    pub weather: &'static str,
    /// Taste.
    pub taste: &'static str,
    /// Numbers.
    pub numbers: [u8; 2],
    /// Descriptive traits.
    pub nature: ElementNature,
}

/// Per-element tallies, indexed by [`Element`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts([u32; 5]);

impl ElementCounts {
    /// All counts zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw counts in [`Element::ALL`] order.
    pub fn from_array(counts: [u32; 5]) -> Self {
        Self(counts)
    }

    /// Add `amount` to an element's count.
    pub fn add(&mut self, element: Element, amount: u32) {
        self.0[element.index()] += amount;
    }

    /// The count for one element.
    pub fn get(&self, element: Element) -> u32 {
        self.0[element.index()]
    }

    /// Sum over all elements.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// `(element, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.iter().map(|e| (*e, self.get(*e)))
    }

    /// Elements holding the highest count, in table order.
    pub fn strongest(&self) -> Vec<Element> {
        let max = self.0.iter().copied().max().unwrap_or(0);
        self.iter().filter(|(_, c)| *c == max).map(|(e, _)| e).collect()
    }

    /// Elements holding the lowest count, in table order.
    pub fn weakest(&self) -> Vec<Element> {
        let min = self.0.iter().copied().min().unwrap_or(0);
        self.iter().filter(|(_, c)| *c == min).map(|(e, _)| e).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_chinese_and_english() {
        assert_eq!(Element::parse("金").unwrap(), Element::Metal);
        assert_eq!(Element::parse("Fire").unwrap(), Element::Fire);
        assert_eq!(Element::parse(" earth ").unwrap(), Element::Earth);
        assert!(matches!(
            Element::parse("aether"),
            Err(GuaError::InvalidElement(_))
        ));
    }

    #[test]
    fn index_matches_all_order() {
        for (i, e) in Element::ALL.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
    }

    #[test]
    fn seasons_and_directions_are_distinct() {
        for a in Element::ALL {
            for b in Element::ALL {
                if a != b {
                    assert_ne!(a.season(), b.season());
                    assert_ne!(a.direction(), b.direction());
                }
            }
        }
    }

    #[test]
    fn every_branch_belongs_to_exactly_one_element() {
        for branch in EarthlyBranch::ALL {
            let owners = Element::ALL
                .iter()
                .filter(|e| e.hours().contains(&branch))
                .count();
            assert_eq!(owners, 1, "{branch}");
        }
    }

    #[test]
    fn counts_strongest_and_weakest() {
        let mut counts = ElementCounts::new();
        counts.add(Element::Metal, 2);
        counts.add(Element::Fire, 2);
        counts.add(Element::Earth, 1);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.strongest(), vec![Element::Metal, Element::Fire]);
        assert_eq!(counts.weakest(), vec![Element::Wood, Element::Water]);
    }

    #[test]
    fn attributes_serialize() {
        let json = serde_json::to_value(Element::Water.attributes()).unwrap();
        assert_eq!(json["direction"], "North");
        assert_eq!(json["taste"], "咸");
        assert_eq!(json["hours"].as_array().unwrap().len(), 2);
    }
}
