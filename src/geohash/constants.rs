/// GeoHash で使用する base-32 のアルファベット。
///
/// 添字がそのまま 5bit の値に対応する。`a`, `i`, `l`, `o` は含まれない。
///
/// ```
/// # use geohash_logic::constants::BASE32;
/// assert_eq!(BASE32.len(), 32);
/// assert_eq!(BASE32[16], b'h');
/// ```
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// エンコード時に許容される最大の文字数
//11文字で経度・緯度ともに約1.3e-6度の分解能となり、f64で意味のある上限となる
pub const MAX_LENGTH: usize = 11;

/// 長さを省略した場合に使用する文字数
pub const DEFAULT_LENGTH: usize = MAX_LENGTH;

/// 1文字が保持するビット数
pub const BITS_PER_CHAR: usize = 5;

/// 方向ごとの隣接遷移テーブル。
///
/// `NEIGHBORS[parity][direction]` の形で参照する。`parity` は GeoHash の長さの偶奇
/// (`len % 2`)、`direction` は上・右・下・左の順。末尾文字がこの文字列中で何番目に
/// 現れるかが、隣接セルの末尾文字の [`BASE32`] 上の添字となる。
///
/// ```
/// # use geohash_logic::constants::NEIGHBORS;
/// // 偶数長の上方向テーブル
/// assert_eq!(NEIGHBORS[0][0], b"p0r21436x8zb9dcf5h7kjnmqesgutwvy");
/// ```
pub const NEIGHBORS: [[&[u8; 32]; 4]; 2] = [
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

/// 方向ごとの境界文字テーブル。
///
/// 末尾文字がここに含まれる場合、隣接セルは親セルの外側にあるため、
/// 親 (末尾1文字を除いた部分) も同じ方向へ移動させる必要がある。
pub const BORDERS: [[&[u8]; 4]; 2] = [
    [b"prxz", b"bcfguvyz", b"028b", b"0145hjnp"],
    [b"bcfguvyz", b"prxz", b"0145hjnp", b"028b"],
];

/// アルファベット外の文字を表す番兵
pub(crate) const INVALID: u8 = u8::MAX;

/// ASCII 文字から 5bit 値への逆引き表
pub(crate) const DECODE_MAP: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < BASE32.len() {
        map[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// `NEIGHBORS` の逆引き表。
///
/// `NEIGHBOR_VALUES[parity][direction][value]` は、5bit 値 `value` の文字を
/// 指定方向へ動かした後の 5bit 値を返す。
pub(crate) const NEIGHBOR_VALUES: [[[u8; 32]; 4]; 2] = {
    let mut out = [[[0u8; 32]; 4]; 2];
    let mut parity = 0;
    while parity < 2 {
        let mut direction = 0;
        while direction < 4 {
            let table = NEIGHBORS[parity][direction];
            let mut position = 0;
            while position < 32 {
                let value = DECODE_MAP[table[position] as usize];
                out[parity][direction][value as usize] = position as u8;
                position += 1;
            }
            direction += 1;
        }
        parity += 1;
    }
    out
};

/// 1文字を 5bit 値に変換する。アルファベット外なら `None`。
pub(crate) fn value_of(character: u8) -> Option<u8> {
    match DECODE_MAP.get(character as usize) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_map_inverts_alphabet() {
        for (i, &c) in BASE32.iter().enumerate() {
            assert_eq!(value_of(c), Some(i as u8));
        }
        for c in [b'a', b'i', b'l', b'o', b'A', b'-', b' '] {
            assert_eq!(value_of(c), None);
        }
    }

    #[test]
    fn neighbor_tables_are_permutations() {
        for parity in 0..2 {
            for direction in 0..4 {
                let mut seen = NEIGHBOR_VALUES[parity][direction].to_vec();
                seen.sort();
                assert_eq!(seen, (0..32).collect::<Vec<u8>>());
            }
        }
    }

    #[test]
    fn neighbor_values_follow_table_position() {
        //偶数長・上方向で 'p' は0番目なので、'p' の上は '0'
        let p = value_of(b'p').unwrap() as usize;
        assert_eq!(BASE32[NEIGHBOR_VALUES[0][0][p] as usize], b'0');

        //奇数長・右方向で 'y' は31番目なので、'y' の右は 'z'
        let y = value_of(b'y').unwrap() as usize;
        assert_eq!(BASE32[NEIGHBOR_VALUES[1][1][y] as usize], b'z');
    }

    #[test]
    fn border_characters_are_in_alphabet() {
        for parity in 0..2 {
            for direction in 0..4 {
                assert!(BORDERS[parity][direction].iter().all(|&c| value_of(c).is_some()));
            }
        }
    }
}
