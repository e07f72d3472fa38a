//! Asset reader over ESRI binary grids

use rayon::prelude::*;
use riskpipe_core::{
    Asset, AssetReader, ExposureAsset, ExposureReader, GridSource, Pipe, RasterFileDefinition,
    Site,
};

/// Reads assets by combining an exposure source with the grid's sentinel
///
/// The reader holds no mutable state: a single instance can serve any
/// number of threads when its exposure source is `Sync`.
#[derive(Debug, Clone)]
pub struct EsriBinaryFileAssetReader<E> {
    exposure: E,
    definition: RasterFileDefinition,
}

impl<E: GridSource> EsriBinaryFileAssetReader<E> {
    /// Reader whose sentinel comes from the source's own definition
    pub fn from_source(exposure: E) -> Self {
        let definition = *exposure.definition();
        Self::new(exposure, definition)
    }
}

impl<E: ExposureReader> EsriBinaryFileAssetReader<E> {
    /// Pair a source with the definition whose sentinel gates assets
    ///
    /// `definition` must describe the same raster as `exposure`; prefer
    /// [`from_source`](Self::from_source) when the source carries one.
    pub fn new(exposure: E, definition: RasterFileDefinition) -> Self {
        Self {
            exposure,
            definition,
        }
    }

    pub fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }

    pub fn exposure(&self) -> &E {
        &self.exposure
    }

    /// Read every site in parallel, keeping input order
    pub fn read_all(&self, sites: &[Site]) -> Vec<riskpipe_core::Result<Asset>>
    where
        E: Sync,
    {
        sites.par_iter().map(|site| self.read_at(site)).collect()
    }

    /// Read the asset for `site` and store it in the pipe's asset slot
    pub fn load_into(&self, site: &Site, pipe: &mut Pipe) -> riskpipe_core::Result<()> {
        let asset = self.read_at(site)?;
        pipe.set::<ExposureAsset>(asset);
        Ok(())
    }
}

impl<E: ExposureReader> AssetReader for EsriBinaryFileAssetReader<E> {
    fn read_at(&self, site: &Site) -> riskpipe_core::Result<Asset> {
        let raw = self.exposure.read_at(site)?;
        Ok(Asset::from_raw(*site, raw, self.definition.grid()))
    }
}
