use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 経度の最小値と最大値
pub const LONGITUDE_RANGE: [f64; 2] = [-180.0, 180.0];

/// 緯度の最小値と最大値
pub const LATITUDE_RANGE: [f64; 2] = [-90.0, 90.0];

/// 経度・緯度で表される座標。
///
/// 経度は `-180.0..=180.0`、緯度は `-90.0..=90.0` の範囲に収まることが保証される。
/// 範囲外の値は [`Coordinate::new`] で拒否されるため、丸めて扱いたい場合は
/// [`Coordinate::clamped`] を明示的に使用する。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl fmt::Display for Coordinate {
    /// `Coordinate` を `"{longitude},{latitude}"` の形式で表示する。
    ///
    /// ```
    /// # use geohash_logic::Coordinate;
    /// let coordinate = Coordinate::new(139.5, 35.25).unwrap();
    /// assert_eq!(coordinate.to_string(), "139.5,35.25");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl Coordinate {
    /// 経度・緯度から [`Coordinate`] を構築します。
    ///
    /// # パラメータ
    /// * `longitude` — 経度（度）
    /// * `latitude` — 緯度（度）
    ///
    /// # バリデーション
    /// - `longitude` が `-180.0..=180.0` の範囲外（NaN を含む）の場合、[`Error::LongitudeOutOfRange`] を返します。
    /// - `latitude` が `-90.0..=90.0` の範囲外（NaN を含む）の場合、[`Error::LatitudeOutOfRange`] を返します。
    ///
    /// 座標の作成:
    /// ```
    /// # use geohash_logic::Coordinate;
    /// let coordinate = Coordinate::new(-122.419, 37.7749).unwrap();
    /// assert_eq!(coordinate.longitude(), -122.419);
    /// assert_eq!(coordinate.latitude(), 37.7749);
    /// ```
    ///
    /// 範囲外の検知:
    /// ```
    /// # use geohash_logic::{Coordinate, Error};
    /// let coordinate = Coordinate::new(0.0, 91.0);
    /// assert_eq!(coordinate, Err(Error::LatitudeOutOfRange { latitude: 91.0 }));
    /// ```
    pub fn new(longitude: f64, latitude: f64) -> Result<Coordinate, Error> {
        if !(LONGITUDE_RANGE[0]..=LONGITUDE_RANGE[1]).contains(&longitude) {
            tracing::debug!(longitude, "rejected out-of-range longitude");
            return Err(Error::LongitudeOutOfRange { longitude });
        }
        if !(LATITUDE_RANGE[0]..=LATITUDE_RANGE[1]).contains(&latitude) {
            tracing::debug!(latitude, "rejected out-of-range latitude");
            return Err(Error::LatitudeOutOfRange { latitude });
        }
        Ok(Coordinate {
            longitude,
            latitude,
        })
    }

    /// 範囲外の値を有効範囲の端に丸めて [`Coordinate`] を構築します。
    ///
    /// 有限でない値（NaN, ±∞）は `0.0` として扱います。
    ///
    /// ```
    /// # use geohash_logic::Coordinate;
    /// let coordinate = Coordinate::clamped(200.0, -95.0);
    /// assert_eq!(coordinate.longitude(), 180.0);
    /// assert_eq!(coordinate.latitude(), -90.0);
    ///
    /// let coordinate = Coordinate::clamped(f64::NAN, 10.0);
    /// assert_eq!(coordinate.longitude(), 0.0);
    /// ```
    pub fn clamped(longitude: f64, latitude: f64) -> Coordinate {
        let clamp = |value: f64, [min, max]: [f64; 2]| {
            if value.is_finite() {
                value.clamp(min, max)
            } else {
                0.0
            }
        };
        Coordinate {
            longitude: clamp(longitude, LONGITUDE_RANGE),
            latitude: clamp(latitude, LATITUDE_RANGE),
        }
    }

    /// 検証を行わずに [`Coordinate`] を構築します。
    ///
    /// 呼び出し側は、値が有効範囲内であることを保証しなければなりません。
    pub(crate) fn new_unchecked(longitude: f64, latitude: f64) -> Coordinate {
        Coordinate {
            longitude,
            latitude,
        }
    }

    /// 経度を返します。
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// 緯度を返します。
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.longitude, raw.latitude)
    }
}
