use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geohash::{
    GeoHash,
    constants::{BASE32, BORDERS, NEIGHBOR_VALUES, value_of},
};

/// 隣接セルを求める方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// 全方向（上・右・下・左の順）
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// 逆方向を返す。
    ///
    /// ```
    /// # use geohash_logic::Direction;
    /// assert_eq!(Direction::Top.opposite(), Direction::Bottom);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// 指定方向に隣接する同じ長さのセルを求める。
///
/// 末尾の文字から順に遷移テーブルで置き換え、置き換えた文字が境界文字であれば
/// 1つ手前の文字へ繰り上げる。先頭の文字まで繰り上がった場合はそこで止まり、
/// 地球を一周した反対側のセルになる。
pub(crate) fn adjacent(hash: &GeoHash, direction: Direction) -> GeoHash {
    let mut bytes = hash.as_str().as_bytes().to_vec();

    for i in (0..bytes.len()).rev() {
        //その文字を末尾とする接頭辞の長さの偶奇でテーブルを選ぶ
        let parity = (i + 1) % 2;
        let current = bytes[i];
        let Some(value) = value_of(current) else {
            break;
        };

        bytes[i] = BASE32[NEIGHBOR_VALUES[parity][direction as usize][value as usize] as usize];

        if !BORDERS[parity][direction as usize].contains(&current) {
            break;
        }
        tracing::trace!(%direction, index = i, "border crossed, carrying into prefix");
    }

    GeoHash::from_bytes_unchecked(bytes)
}

/// あるセルを囲む8つのセル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub top: GeoHash,
    pub top_right: GeoHash,
    pub right: GeoHash,
    pub bottom_right: GeoHash,
    pub bottom: GeoHash,
    pub bottom_left: GeoHash,
    pub left: GeoHash,
    pub top_left: GeoHash,
}

impl Neighbors {
    pub(crate) fn of(hash: &GeoHash) -> Neighbors {
        let top = adjacent(hash, Direction::Top);
        let bottom = adjacent(hash, Direction::Bottom);
        Neighbors {
            top_right: adjacent(&top, Direction::Right),
            top_left: adjacent(&top, Direction::Left),
            bottom_right: adjacent(&bottom, Direction::Right),
            bottom_left: adjacent(&bottom, Direction::Left),
            right: adjacent(hash, Direction::Right),
            left: adjacent(hash, Direction::Left),
            top,
            bottom,
        }
    }

    /// 上から時計回りに8つのセルを返す。
    pub fn iter(&self) -> impl Iterator<Item = &GeoHash> {
        [
            &self.top,
            &self.top_right,
            &self.right,
            &self.bottom_right,
            &self.bottom,
            &self.bottom_left,
            &self.left,
            &self.top_left,
        ]
        .into_iter()
    }
}
