use crate::{
    error::Error,
    geohash::{
        constants::{BASE32, BITS_PER_CHAR, MAX_LENGTH},
        interval::{self, Axis},
    },
    geometry::coordinate::Coordinate,
};

/// 座標を `length` 文字の GeoHash 文字列に変換する。
///
/// 経度から始めて経度・緯度を交互に二分し、5bit ごとに1文字を出力する。
/// 軸の交代は文字の境界をまたいで継続する。
pub(crate) fn encode(coordinate: Coordinate, length: usize) -> Result<String, Error> {
    if !(1..=MAX_LENGTH).contains(&length) {
        tracing::debug!(length, "rejected encode length");
        return Err(Error::InvalidLength { length });
    }

    let target = [coordinate.longitude(), coordinate.latitude()];
    let mut intervals = interval::world();
    let mut axis = Axis::Longitude;
    let mut hash = String::with_capacity(length);

    for _ in 0..length {
        let mut value = 0u8;
        for _ in 0..BITS_PER_CHAR {
            let current = &mut intervals[axis as usize];
            let upper = !current.is_lower(target[axis as usize]);
            current.bisect(upper);
            value = (value << 1) | upper as u8;
            axis = axis.next();
        }
        hash.push(BASE32[value as usize] as char);
    }

    tracing::trace!(%coordinate, %hash, "encoded");
    Ok(hash)
}
