//! Heavenly stems, earthly branches and the per-line stem/branch sequence.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{GuaError, GuaResult};
use crate::line::Polarity;

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    /// 甲
    Jia,
    /// 乙
    Yi,
    /// 丙
    Bing,
    /// 丁
    Ding,
    /// 戊
    Wu,
    /// 己
    Ji,
    /// 庚
    Geng,
    /// 辛
    Xin,
    /// 壬
    Ren,
    /// 癸
    Gui,
}

impl HeavenlyStem {
    /// All stems in cyclic order.
    pub const ALL: [Self; 10] = [
        Self::Jia,
        Self::Yi,
        Self::Bing,
        Self::Ding,
        Self::Wu,
        Self::Ji,
        Self::Geng,
        Self::Xin,
        Self::Ren,
        Self::Gui,
    ];

    /// The stem at `offset` in the cycle, wrapping.
    pub fn nth(offset: usize) -> Self {
        Self::ALL[offset % Self::ALL.len()]
    }

    /// Position in the cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a Chinese stem name.
    pub fn parse(s: &str) -> GuaResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|stem| stem.name() == s)
            .ok_or_else(|| GuaError::InvalidStem(s.to_string()))
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"][self.index()]
    }

    /// Element carried by the stem.
    pub fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Odd stems are yang, even stems yin.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    /// 子
    Zi,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

impl EarthlyBranch {
    /// All branches in cyclic order.
    pub const ALL: [Self; 12] = [
        Self::Zi,
        Self::Chou,
        Self::Yin,
        Self::Mao,
        Self::Chen,
        Self::Si,
        Self::Wu,
        Self::Wei,
        Self::Shen,
        Self::You,
        Self::Xu,
        Self::Hai,
    ];

    /// The branch at `offset` in the cycle, wrapping.
    pub fn nth(offset: usize) -> Self {
        Self::ALL[offset % Self::ALL.len()]
    }

    /// Position in the cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a Chinese branch name.
    pub fn parse(s: &str) -> GuaResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|branch| branch.name() == s)
            .ok_or_else(|| GuaError::InvalidBranch(s.to_string()))
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        [
            "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
        ][self.index()]
    }

    /// Element carried by the branch.
    pub fn element(self) -> Element {
        match self {
            Self::Shen | Self::You => Element::Metal,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Zi | Self::Hai => Element::Water,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A stem/branch pair attached to one line, with the branch's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemBranch {
    /// Heavenly stem.
    pub stem: HeavenlyStem,
    /// Earthly branch.
    pub branch: EarthlyBranch,
    /// Element of the branch.
    pub element: Element,
}

impl StemBranch {
    /// Pair a stem and branch.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self {
            stem,
            branch,
            element: branch.element(),
        }
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.stem, self.branch, self.element)
    }
}

/// Six consecutive stem/branch pairs starting from the given offsets.
pub fn sequence(stem_offset: usize, branch_offset: usize) -> [StemBranch; 6] {
    std::array::from_fn(|i| {
        StemBranch::new(
            HeavenlyStem::nth(stem_offset + i),
            EarthlyBranch::nth(branch_offset + i),
        )
    })
}
