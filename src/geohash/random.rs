use std::ops::RangeInclusive;

use rand::Rng;

use crate::geohash::{
    GeoHash,
    constants::{BASE32, MAX_LENGTH},
};

#[cfg(test)]
use proptest::prelude::Strategy;

impl GeoHash {
    /// 1–11文字の範囲からランダムに [`GeoHash`] を生成します。
    pub fn random() -> Self {
        Self::random_within(1..=MAX_LENGTH)
    }

    /// 特定の文字数 `length` でランダムな [`GeoHash`] を生成します。
    pub fn random_at(length: usize) -> Self {
        Self::random_within(length..=length)
    }

    /// 指定された文字数の範囲内でランダムな [`GeoHash`] を生成します。
    pub fn random_within(length_range: RangeInclusive<usize>) -> Self {
        let mut rng = rand::rng();
        Self::random_within_using(&mut rng, length_range)
    }

    /// 外部の乱数生成器を使用してランダムな [`GeoHash`] を生成します。
    ///
    /// 文字数は `1..=MAX_LENGTH` に切り詰められます。
    pub fn random_within_using<R: Rng>(rng: &mut R, length_range: RangeInclusive<usize>) -> Self {
        let start = (*length_range.start()).max(1);
        let end = (*length_range.end()).clamp(1, MAX_LENGTH);
        let length = if start > end {
            end
        } else {
            rng.random_range(start..=end)
        };

        let bytes = (0..length)
            .map(|_| BASE32[rng.random_range(0..BASE32.len())])
            .collect();
        GeoHash::from_bytes_unchecked(bytes)
    }

    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        Self::arb_within(1..=MAX_LENGTH)
    }

    #[cfg(test)]
    pub fn arb_within(length_range: RangeInclusive<usize>) -> impl Strategy<Value = Self> {
        proptest::collection::vec(proptest::sample::select(BASE32.to_vec()), length_range)
            .prop_map(GeoHash::from_bytes_unchecked)
    }
}
