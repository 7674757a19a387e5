//! 経度・緯度で表される地理座標と、その範囲を扱うための型。
//!
//! 角度は特に明記しない限り度（degree）単位で扱います。

/// 経度・緯度で定義される `Coordinate` 型。
pub mod coordinate;

/// GeoHash セルが覆う範囲を表す `Bounds` 型。
pub mod bounds;
