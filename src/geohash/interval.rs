/// 二分探索中の一軸分の区間
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval {
    pub(crate) low: f64,
    pub(crate) mid: f64,
    pub(crate) high: f64,
}

impl Interval {
    pub(crate) fn new(low: f64, high: f64) -> Self {
        Interval {
            low,
            mid: low + (high - low) / 2.0,
            high,
        }
    }

    /// 値が下半分 `[low, mid]` に含まれるかを返す。境界上の値は下半分として扱う。
    pub(crate) fn is_lower(&self, value: f64) -> bool {
        value >= self.low && value <= self.mid
    }

    /// 区間を半分に絞り込む。`upper` が真なら上半分、偽なら下半分を残す。
    pub(crate) fn bisect(&mut self, upper: bool) {
        if upper {
            self.low = self.mid;
        } else {
            self.high = self.mid;
        }
        self.mid = self.low + (self.high - self.low).abs() / 2.0;
    }
}

/// 現在どちらの軸を絞り込んでいるかを表すEnum
/// `[Interval; 2]` の添字として使う
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub(crate) enum Axis {
    Longitude = 0,
    Latitude = 1,
}

impl Axis {
    pub(crate) fn next(self) -> Self {
        match self {
            Axis::Longitude => Axis::Latitude,
            Axis::Latitude => Axis::Longitude,
        }
    }
}

/// 経度と緯度の初期区間
pub(crate) fn world() -> [Interval; 2] {
    [Interval::new(-180.0, 180.0), Interval::new(-90.0, 90.0)]
}
