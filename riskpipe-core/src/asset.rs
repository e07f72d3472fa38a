//! Exposure assets resolved for a site

use crate::{GridDefinition, Site};

/// Exposure value read for a site
///
/// A non-computable asset still carries the raw value it was built from
/// (normally the no-data sentinel) for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    site: Site,
    value: f64,
    computable: bool,
}

impl Asset {
    /// Asset holding a real value
    pub const fn new(site: Site, value: f64) -> Self {
        Self {
            site,
            value,
            computable: true,
        }
    }

    /// Asset for a cell without data
    pub const fn empty(site: Site, raw: f64) -> Self {
        Self {
            site,
            value: raw,
            computable: false,
        }
    }

    /// Build from a raw cell value, checking it against the grid sentinel
    pub fn from_raw(site: Site, raw: f64, grid: &GridDefinition) -> Self {
        if grid.is_no_data(raw) {
            Self::empty(site, raw)
        } else {
            Self::new(site, raw)
        }
    }

    /// Site the asset was read for
    pub const fn defined_at(&self) -> Site {
        self.site
    }

    /// Raw value; only meaningful when [`is_computable`](Self::is_computable)
    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn is_computable(&self) -> bool {
        self.computable
    }

    /// Value if computable
    pub const fn computable_value(&self) -> Option<f64> {
        if self.computable {
            Some(self.value)
        } else {
            None
        }
    }
}
