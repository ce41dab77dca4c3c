//! Seasons and compass directions associated with elements and trigrams.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// 春
    Spring,
    /// 夏
    Summer,
    /// 秋
    Autumn,
    /// 冬
    Winter,
    /// 四季: the transitional weeks closing each season, ruled by earth.
    Interseasonal,
}

impl Season {
    /// The season a calendar month falls in (1-12).
    ///
    /// March-May is spring, June-August summer, September-November autumn,
    /// everything else winter. The interseasonal period is never returned.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// The element that rules this season.
    pub fn element(self) -> Element {
        match self {
            Self::Spring => Element::Wood,
            Self::Summer => Element::Fire,
            Self::Autumn => Element::Metal,
            Self::Winter => Element::Water,
            Self::Interseasonal => Element::Earth,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "春",
            Self::Summer => "夏",
            Self::Autumn => "秋",
            Self::Winter => "冬",
            Self::Interseasonal => "四季",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A compass direction, or the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 北
    North,
    /// 东北
    NorthEast,
    /// 东
    East,
    /// 东南
    SouthEast,
    /// 南
    South,
    /// 西南
    SouthWest,
    /// 西
    West,
    /// 西北
    NorthWest,
    /// 中
    Center,
}

impl Direction {
    /// Compass bearing in degrees, north = 0. The centre has none.
    pub fn angle(self) -> Option<u32> {
        match self {
            Self::North => Some(0),
            Self::NorthEast => Some(45),
            Self::East => Some(90),
            Self::SouthEast => Some(135),
            Self::South => Some(180),
            Self::SouthWest => Some(225),
            Self::West => Some(270),
            Self::NorthWest => Some(315),
            Self::Center => None,
        }
    }

    /// Smallest angle between two bearings (0-180), if both have one.
    pub fn angle_between(self, other: Self) -> Option<u32> {
        let a = self.angle()?;
        let b = other.angle()?;
        let diff = a.abs_diff(b);
        Some(if diff > 180 { 360 - diff } else { diff })
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "北",
            Self::NorthEast => "东北",
            Self::East => "东",
            Self::SouthEast => "东南",
            Self::South => "南",
            Self::SouthWest => "西南",
            Self::West => "西",
            Self::NorthWest => "西北",
            Self::Center => "中",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_map_to_seasons() {
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
    }

    #[test]
    fn season_elements() {
        assert_eq!(Season::Spring.element(), Element::Wood);
        assert_eq!(Season::Interseasonal.element(), Element::Earth);
    }

    #[test]
    fn angle_between_wraps() {
        assert_eq!(Direction::North.angle_between(Direction::NorthWest), Some(45));
        assert_eq!(Direction::East.angle_between(Direction::West), Some(180));
        assert_eq!(Direction::South.angle_between(Direction::South), Some(0));
        assert_eq!(Direction::Center.angle_between(Direction::South), None);
    }
}
