/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 経度・緯度の座標と、その範囲。
mod geometry;

/// GeoHash のエンコード・デコードおよび隣接セルの計算。
mod geohash;

pub use error::Error;
pub use geohash::{
    GeoHash, bottom, constants, decode, encode, left,
    neighbor::{Direction, Neighbors},
    right, top,
};
pub use geometry::{
    bounds::Bounds,
    coordinate::{Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE},
};
