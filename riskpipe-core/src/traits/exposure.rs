//! Exposure value and asset reading interfaces

use alloc::boxed::Box;

use crate::{Asset, RasterFileDefinition, Result, Site};

/// Source of raw exposure values
///
/// Implementations own any file access. A site outside the source's
/// coverage must be reported as [`RiskError::OutOfGrid`](crate::RiskError),
/// never as the no-data sentinel.
pub trait ExposureReader {
    /// Raw cell value at `site`, sentinel included
    fn read_at(&self, site: &Site) -> Result<f64>;
}

impl<E: ExposureReader + ?Sized> ExposureReader for &E {
    fn read_at(&self, site: &Site) -> Result<f64> {
        (**self).read_at(site)
    }
}

impl<E: ExposureReader + ?Sized> ExposureReader for Box<E> {
    fn read_at(&self, site: &Site) -> Result<f64> {
        (**self).read_at(site)
    }
}

/// Exposure source backed by a single raster, exposing its geometry
pub trait GridSource: ExposureReader {
    fn definition(&self) -> &RasterFileDefinition;
}

impl<G: GridSource + ?Sized> GridSource for &G {
    fn definition(&self) -> &RasterFileDefinition {
        (**self).definition()
    }
}

impl<G: GridSource + ?Sized> GridSource for Box<G> {
    fn definition(&self) -> &RasterFileDefinition {
        (**self).definition()
    }
}

/// Produces an [`Asset`] for a site
///
/// Missing data is reported through [`Asset::is_computable`], not as an
/// error.
pub trait AssetReader {
    fn read_at(&self, site: &Site) -> Result<Asset>;
}

impl<R: AssetReader + ?Sized> AssetReader for &R {
    fn read_at(&self, site: &Site) -> Result<Asset> {
        (**self).read_at(site)
    }
}

impl<R: AssetReader + ?Sized> AssetReader for Box<R> {
    fn read_at(&self, site: &Site) -> Result<Asset> {
        (**self).read_at(site)
    }
}
