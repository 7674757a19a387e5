use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::{bounds::Bounds, coordinate::Coordinate},
};

pub mod constants;
pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod interval;
pub mod neighbor;

#[cfg(any(test, feature = "random"))]
mod random;

#[cfg(test)]
mod tests;

use constants::{BASE32, value_of};
use neighbor::{Direction, Neighbors};

/// GeoHash は経度・緯度の範囲を base-32 の文字列で表す型。
///
/// 内部的には小文字に正規化された ASCII 文字列を保持しており、
/// すべての文字が [`BASE32`] に含まれることが保証されている。
///
/// この型は `PartialOrd` / `Ord` を実装していますが、これは文字列としての順序であり、
/// 空間的な「大小」を意味するものではない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoHash(String);

impl fmt::Display for GeoHash {
    /// GeoHash を文字列として表示する。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let hash = GeoHash::new("9Q8YY").unwrap();
    /// assert_eq!(format!("{}", hash), "9q8yy");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl GeoHash {
    /// 文字列から [`GeoHash`] を構築します。大文字は小文字に正規化されます。
    ///
    /// # バリデーション
    /// - 空文字列の場合、[`Error::InvalidLength`] を返します。
    /// - [`BASE32`] に含まれない文字がある場合、[`Error::InvalidCharacter`] を返します。
    ///
    /// 11文字を超える文字列も受け付けますが、それ以上の精度は得られません。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let hash = GeoHash::new("ezs42").unwrap();
    /// assert_eq!(hash.as_str(), "ezs42");
    /// assert_eq!(hash.len(), 5);
    /// ```
    ///
    /// アルファベット外の文字の検知:
    /// ```
    /// # use geohash_logic::{Error, GeoHash};
    /// let hash = GeoHash::new("ezs4a");
    /// assert_eq!(hash, Err(Error::InvalidCharacter { character: 'a', index: 4 }));
    /// ```
    pub fn new(hash: &str) -> Result<GeoHash, Error> {
        if hash.is_empty() {
            tracing::debug!("rejected empty geohash");
            return Err(Error::InvalidLength { length: 0 });
        }

        let normalized = hash.to_ascii_lowercase();
        if let Some((index, character)) = normalized
            .char_indices()
            .find(|&(_, c)| !c.is_ascii() || value_of(c as u8).is_none())
        {
            tracing::debug!(hash, index, %character, "rejected geohash character");
            return Err(Error::InvalidCharacter { character, index });
        }

        Ok(GeoHash(normalized))
    }

    /// 座標を指定した文字数の [`GeoHash`] に変換します。
    ///
    /// # パラメータ
    /// * `coordinate` — 変換する座標
    /// * `length` — 出力する文字数（1–11の範囲が有効）
    ///
    /// # バリデーション
    /// - `length` が `1..=11` の範囲外の場合、[`Error::InvalidLength`] を返します。
    ///
    /// 二分の境界上にある値は下側（ビット0）に分類されます。
    ///
    /// ```
    /// # use geohash_logic::{Coordinate, GeoHash};
    /// let coordinate = Coordinate::new(-122.4194, 37.7749).unwrap();
    /// let hash = GeoHash::encode(coordinate, 9).unwrap();
    /// assert_eq!(hash.as_str(), "9q8yyk8yt");
    /// ```
    pub fn encode(coordinate: Coordinate, length: usize) -> Result<GeoHash, Error> {
        encoder::encode(coordinate, length).map(GeoHash)
    }

    /// セルの中心座標を返します。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let center = GeoHash::new("ezs42").unwrap().decode();
    /// assert_eq!(center.longitude(), -5.60302734375);
    /// assert_eq!(center.latitude(), 42.60498046875);
    /// ```
    pub fn decode(&self) -> Coordinate {
        decoder::decode(self)
    }

    /// セルが覆う範囲を返します。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let bounds = GeoHash::new("9q").unwrap().bounds();
    /// assert_eq!(bounds.min().longitude(), -123.75);
    /// assert_eq!(bounds.max().latitude(), 39.375);
    /// ```
    pub fn bounds(&self) -> Bounds {
        decoder::bounds(self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 文字数を返します。常に1以上です。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 指定方向に隣接する同じ長さのセルを返します。
    ///
    /// 最上位の文字まで境界をまたいだ場合は、地球を一周した反対側のセルになります。
    ///
    /// ```
    /// # use geohash_logic::{Direction, GeoHash};
    /// let hash = GeoHash::new("ezs42").unwrap();
    /// assert_eq!(hash.neighbor(Direction::Left).as_str(), "ezefr");
    ///
    /// // 1文字のセルでも繰り上げは発生しない
    /// let hash = GeoHash::new("b").unwrap();
    /// assert_eq!(hash.neighbor(Direction::Top).as_str(), "0");
    /// ```
    pub fn neighbor(&self, direction: Direction) -> GeoHash {
        neighbor::adjacent(self, direction)
    }

    pub fn top(&self) -> GeoHash {
        self.neighbor(Direction::Top)
    }

    pub fn right(&self) -> GeoHash {
        self.neighbor(Direction::Right)
    }

    pub fn bottom(&self) -> GeoHash {
        self.neighbor(Direction::Bottom)
    }

    pub fn left(&self) -> GeoHash {
        self.neighbor(Direction::Left)
    }

    /// 周囲8つのセルを返します。斜め方向は上下の隣接セルをさらに左右へ動かして求めます。
    pub fn neighbors(&self) -> Neighbors {
        Neighbors::of(self)
    }

    /// 末尾の1文字を除いた親セルを返します。1文字の場合は親が存在しないため `None` を返します。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let hash = GeoHash::new("ezs42").unwrap();
    /// assert_eq!(hash.parent().unwrap().as_str(), "ezs4");
    /// assert!(GeoHash::new("e").unwrap().parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<GeoHash> {
        if self.len() <= 1 {
            return None;
        }
        Some(GeoHash(self.0[..self.len() - 1].to_string()))
    }

    /// このセルを32分割した子セルを、アルファベット順に返します。
    ///
    /// ```
    /// # use geohash_logic::GeoHash;
    /// let hash = GeoHash::new("ezs4").unwrap();
    /// let children: Vec<_> = hash.children().collect();
    /// assert_eq!(children.len(), 32);
    /// assert_eq!(children[2].as_str(), "ezs42");
    /// ```
    pub fn children(&self) -> impl Iterator<Item = GeoHash> + '_ {
        BASE32.iter().map(move |&c| {
            let mut child = String::with_capacity(self.len() + 1);
            child.push_str(&self.0);
            child.push(c as char);
            GeoHash(child)
        })
    }

    /// 検証を行わずにバイト列から [`GeoHash`] を構築する。
    ///
    /// 呼び出し側は、すべてのバイトが [`BASE32`] に含まれることを保証しなければならない。
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> GeoHash {
        GeoHash(bytes.into_iter().map(char::from).collect())
    }
}

impl FromStr for GeoHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoHash::new(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GeoHash::new(&value)
    }
}

impl From<GeoHash> for String {
    fn from(hash: GeoHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 経度・緯度を `length` 文字の GeoHash に変換します。
///
/// 座標が範囲外の場合は [`Error::LongitudeOutOfRange`] / [`Error::LatitudeOutOfRange`]、
/// 文字数が `1..=11` の範囲外の場合は [`Error::InvalidLength`] を返します。
///
/// ```
/// # use geohash_logic::{constants::DEFAULT_LENGTH, encode};
/// assert_eq!(encode(-122.419, 37.7749, 9).unwrap().as_str(), "9q8yyk9nw");
/// assert_eq!(encode(180.0, 90.0, DEFAULT_LENGTH).unwrap().as_str(), "zzzzzzzzzzz");
/// assert!(encode(181.0, 0.0, 5).is_err());
/// ```
pub fn encode(longitude: f64, latitude: f64, length: usize) -> Result<GeoHash, Error> {
    GeoHash::encode(Coordinate::new(longitude, latitude)?, length)
}

/// GeoHash 文字列をセルの中心座標に変換します。
///
/// ```
/// # use geohash_logic::decode;
/// let center = decode("s").unwrap();
/// assert_eq!((center.longitude(), center.latitude()), (22.5, 22.5));
/// assert!(decode("").is_err());
/// ```
pub fn decode(hash: &str) -> Result<Coordinate, Error> {
    Ok(GeoHash::new(hash)?.decode())
}

/// 上（北）に隣接するセルを返します。
///
/// ```
/// # use geohash_logic::top;
/// assert_eq!(top("s").unwrap().as_str(), "u");
/// ```
pub fn top(hash: &str) -> Result<GeoHash, Error> {
    Ok(GeoHash::new(hash)?.top())
}

/// 右（東）に隣接するセルを返します。
pub fn right(hash: &str) -> Result<GeoHash, Error> {
    Ok(GeoHash::new(hash)?.right())
}

/// 下（南）に隣接するセルを返します。
pub fn bottom(hash: &str) -> Result<GeoHash, Error> {
    Ok(GeoHash::new(hash)?.bottom())
}

/// 左（西）に隣接するセルを返します。
pub fn left(hash: &str) -> Result<GeoHash, Error> {
    Ok(GeoHash::new(hash)?.left())
}
