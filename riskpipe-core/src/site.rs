//! Geographic sites

/// A geographic point, compared by coordinate value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    longitude: f64,
    latitude: f64,
}

impl Site {
    /// Create a site from longitude (x) and latitude (y)
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl core::fmt::Display for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}
