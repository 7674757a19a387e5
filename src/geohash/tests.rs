#[cfg(test)]
mod tests {
    use crate::{
        Direction, Error, GeoHash, bottom, constants::BASE32, decode, encode, left,
        right, top,
    };
    use proptest::prelude::{ProptestConfig, Strategy};
    use proptest::proptest;

    ///有効範囲内の座標と文字数を生成する
    fn arb_point() -> impl Strategy<Value = (f64, f64, usize)> {
        (-180.0f64..=180.0, -90.0f64..=90.0, 1usize..=11)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        ///エンコード結果の文字数は指定通りで、すべての文字がアルファベットに含まれる
        #[test]
        fn encode_length_and_alphabet((longitude, latitude, length) in arb_point()) {
            let hash = encode(longitude, latitude, length).unwrap();
            assert_eq!(hash.len(), length);
            assert!(hash.as_str().bytes().all(|c| BASE32.contains(&c)));
        }

        ///元の座標はエンコードしたセルの範囲に含まれ、デコード結果はそのセルの中心になる
        #[test]
        fn round_trip_stays_in_cell((longitude, latitude, length) in arb_point()) {
            let hash = encode(longitude, latitude, length).unwrap();
            let bounds = hash.bounds();

            assert!(bounds.min().longitude() <= longitude && longitude <= bounds.max().longitude());
            assert!(bounds.min().latitude() <= latitude && latitude <= bounds.max().latitude());

            let center = decode(hash.as_str()).unwrap();
            assert!((center.longitude() - longitude).abs() <= bounds.longitude_span() / 2.0);
            assert!((center.latitude() - latitude).abs() <= bounds.latitude_span() / 2.0);
        }

        ///11文字では誤差が1e-6度未満になる
        #[test]
        fn full_precision_error((longitude, latitude, _) in arb_point()) {
            let center = decode(encode(longitude, latitude, 11).unwrap().as_str()).unwrap();
            assert!((center.longitude() - longitude).abs() < 1e-6);
            assert!((center.latitude() - latitude).abs() < 1e-6);
        }

        ///セルの中心を再エンコードすると同じ GeoHash に戻る
        #[test]
        fn center_encodes_to_same_hash(hash in GeoHash::arb()) {
            let center = hash.decode();
            assert_eq!(GeoHash::encode(center, hash.len()).unwrap(), hash);
        }

        ///隣接セルは同じ長さで、逆方向へ戻ると元のセルになる
        #[test]
        fn neighbor_symmetry(hash in GeoHash::arb()) {
            for direction in Direction::ALL {
                let moved = hash.neighbor(direction);
                assert_eq!(moved.len(), hash.len());
                assert_ne!(moved, hash);
                assert_eq!(moved.neighbor(direction.opposite()), hash);
            }
        }

        ///隣接セルの親は、元の親かその同方向の隣接セルになる
        #[test]
        fn neighbor_parent_is_parent_or_its_neighbor(hash in GeoHash::arb_within(2..=11)) {
            let parent = hash.parent().unwrap();
            for direction in Direction::ALL {
                let moved_parent = hash.neighbor(direction).parent().unwrap();
                assert!(moved_parent == parent || moved_parent == parent.neighbor(direction));
            }
        }

        ///大文字・小文字を区別しない
        #[test]
        fn decode_ignores_case(hash in GeoHash::arb()) {
            let upper = hash.as_str().to_ascii_uppercase();
            assert_eq!(decode(&upper).unwrap(), hash.decode());
            assert_eq!(top(&upper).unwrap(), hash.top());
        }
    }

    #[test]
    fn golden_san_francisco() {
        assert_eq!(encode(-122.419, 37.7749, 9).unwrap().as_str(), "9q8yyk9nw");
    }

    #[test]
    fn encode_then_decode_entry_point() {
        //エンコードしてからデコードする単純な利用例
        let hash = encode(170.7896, -78.11868, 11).unwrap();
        assert_eq!(hash.as_str(), "pf17w6vjwne");

        let center = decode(hash.as_str()).unwrap();
        assert!((center.longitude() - 170.7896).abs() < 1e-6);
        assert!((center.latitude() - -78.11868).abs() < 1e-6);
    }

    #[test]
    fn boundary_values_are_deterministic() {
        for length in 1..=11 {
            let low = encode(-180.0, -90.0, length).unwrap();
            let high = encode(180.0, 90.0, length).unwrap();
            assert_eq!(low.as_str(), "0".repeat(length));
            assert_eq!(high.as_str(), "z".repeat(length));
            assert_eq!(low, encode(-180.0, -90.0, length).unwrap());
        }
    }

    #[test]
    fn top_of_single_character_terminates() {
        assert_eq!(top("s").unwrap().as_str(), "u");
        //北端の 'b' は繰り上げずに南端へ回り込む
        assert_eq!(top("b").unwrap().as_str(), "0");
        assert_eq!(right("z").unwrap().as_str(), "b");
        assert_eq!(bottom("0").unwrap().as_str(), "b");
        assert_eq!(left("0").unwrap().as_str(), "p");
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert_eq!(decode(""), Err(Error::InvalidLength { length: 0 }));
        assert_eq!(top(""), Err(Error::InvalidLength { length: 0 }));
        assert_eq!(
            decode("9q8i"),
            Err(Error::InvalidCharacter {
                character: 'i',
                index: 3
            })
        );
        assert_eq!(
            left("ü9"),
            Err(Error::InvalidCharacter {
                character: 'ü',
                index: 0
            })
        );
        assert_eq!(
            encode(0.0, 0.0, 0),
            Err(Error::InvalidLength { length: 0 })
        );
        assert_eq!(
            encode(0.0, 0.0, 12),
            Err(Error::InvalidLength { length: 12 })
        );
        assert_eq!(
            encode(-180.1, 0.0, 5),
            Err(Error::LongitudeOutOfRange { longitude: -180.1 })
        );
        assert_eq!(
            encode(0.0, 90.1, 5),
            Err(Error::LatitudeOutOfRange { latitude: 90.1 })
        );
    }

    #[test]
    fn parent_and_children() {
        let hash = GeoHash::new("9q8y").unwrap();
        for child in hash.children() {
            assert_eq!(child.parent().unwrap(), hash);
            let bounds = child.bounds();
            let parent_bounds = hash.bounds();
            assert!(parent_bounds.min().longitude() <= bounds.min().longitude());
            assert!(bounds.max().latitude() <= parent_bounds.max().latitude());
        }
    }

    #[test]
    fn serde_uses_plain_string() {
        let hash = GeoHash::new("EZS42").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, r#""ezs42""#);

        let back: GeoHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
        assert!(serde_json::from_str::<GeoHash>(r#""ezs4a""#).is_err());
    }

    #[test]
    fn from_str_matches_new() {
        let parsed: GeoHash = "u4pruydqqvj".parse().unwrap();
        assert_eq!(parsed, GeoHash::new("u4pruydqqvj").unwrap());
        assert!("".parse::<GeoHash>().is_err());
    }
}
