/// A `D3D_FEATURE_LEVEL` value such as `0xb000` for 11_0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FeatureLevel(pub u32);

impl FeatureLevel {
    pub const LEVEL_11_0: Self = Self(0xb000);
    pub const LEVEL_11_1: Self = Self(0xb100);
    pub const LEVEL_12_0: Self = Self(0xc000);
    pub const LEVEL_12_1: Self = Self(0xc100);

    pub fn major(self) -> u32 {
        (self.0 >> 12) & 0xf
    }

    pub fn minor(self) -> u32 {
        (self.0 >> 8) & 0xf
    }
}

impl std::fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.major(), self.minor())
    }
}

/// Levels tried, in order, when creating the D3D12 device.
pub const MODERN_DEVICE_LEVELS: [FeatureLevel; 4] = [
    FeatureLevel::LEVEL_12_1,
    FeatureLevel::LEVEL_12_0,
    FeatureLevel::LEVEL_11_1,
    FeatureLevel::LEVEL_11_0,
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FeatureLevelOrder {
    /// Highest tier first, so the device gets the best level the adapter has.
    #[default]
    Descending,
    /// Lowest tier first. Any adapter that runs D3D12 at all accepts 11_0,
    /// so in practice this always lands on the first entry.
    Ascending,
}

impl FeatureLevelOrder {
    pub fn candidates(self) -> [FeatureLevel; 4] {
        let mut levels = MODERN_DEVICE_LEVELS;
        if self == FeatureLevelOrder::Ascending {
            levels.reverse();
        }
        levels
    }
}
