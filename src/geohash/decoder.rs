use crate::{
    geohash::{
        GeoHash,
        constants::{BITS_PER_CHAR, value_of},
        interval::{self, Axis, Interval},
    },
    geometry::{bounds::Bounds, coordinate::Coordinate},
};

/// 検証済みの GeoHash を、エンコード時と同じ順序で二分し直した区間を返す。
fn bisect(hash: &GeoHash) -> [Interval; 2] {
    let mut intervals = interval::world();
    let mut axis = Axis::Longitude;

    for character in hash.as_str().bytes() {
        //GeoHash::new で検証済みのため、ここでアルファベット外の文字は現れない
        let Some(value) = value_of(character) else {
            continue;
        };
        for shift in (0..BITS_PER_CHAR).rev() {
            intervals[axis as usize].bisect((value >> shift) & 1 == 1);
            axis = axis.next();
        }
    }

    intervals
}

/// セルの中心座標を返す。
pub(crate) fn decode(hash: &GeoHash) -> Coordinate {
    let [longitude, latitude] = bisect(hash);
    Coordinate::new_unchecked(longitude.mid, latitude.mid)
}

/// セルの範囲を返す。
pub(crate) fn bounds(hash: &GeoHash) -> Bounds {
    let [longitude, latitude] = bisect(hash);
    Bounds::new(
        Coordinate::new_unchecked(longitude.low, latitude.low),
        Coordinate::new_unchecked(longitude.high, latitude.high),
    )
}
