use serde::{Deserialize, Serialize};

use crate::geometry::coordinate::Coordinate;

/// GeoHash セルが覆う経度・緯度の範囲。
///
/// `min` は南西端、`max` は北東端を表す。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Coordinate,
    max: Coordinate,
}

impl Bounds {
    pub(crate) fn new(min: Coordinate, max: Coordinate) -> Bounds {
        Bounds { min, max }
    }

    /// 南西端の座標を返します。
    pub fn min(&self) -> Coordinate {
        self.min
    }

    /// 北東端の座標を返します。
    pub fn max(&self) -> Coordinate {
        self.max
    }

    /// セルの中心座標を返します。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let bounds = GeoHash::new("s").unwrap().bounds();
    /// let center = bounds.center();
    /// assert_eq!(center.longitude(), 22.5);
    /// assert_eq!(center.latitude(), 22.5);
    /// ```
    pub fn center(&self) -> Coordinate {
        Coordinate::new_unchecked(
            self.min.longitude() + self.longitude_span() / 2.0,
            self.min.latitude() + self.latitude_span() / 2.0,
        )
    }

    /// 東西方向の幅（度）
    pub fn longitude_span(&self) -> f64 {
        self.max.longitude() - self.min.longitude()
    }

    /// 南北方向の幅（度）
    pub fn latitude_span(&self) -> f64 {
        self.max.latitude() - self.min.latitude()
    }
}
