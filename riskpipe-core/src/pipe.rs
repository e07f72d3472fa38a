//! Typed scratch space shared by the stages of one risk computation
//!
//! The pipe exposes a closed vocabulary of slots. Each slot is a marker type
//! implementing [`PipeSlot`], so the value type of a slot is checked at
//! compile time; only whether the slot has been set is checked at run time.

use crate::{Asset, DiscreteVulnerabilityFunction, Result, RiskError};

/// Names of the pipe slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PipeKey {
    /// Mean intensity measure level loaded from the hazard
    MeanIml,
    /// Mean vulnerability function for the asset's typology
    MeanFunction,
    /// Exposure asset read for the current site
    Asset,
}

impl core::fmt::Display for PipeKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PipeKey::MeanIml => write!(f, "mean IML"),
            PipeKey::MeanFunction => write!(f, "mean vulnerability function"),
            PipeKey::Asset => write!(f, "asset"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A named, typed slot of a [`Pipe`]
pub trait PipeSlot: sealed::Sealed {
    type Value;

    const KEY: PipeKey;

    #[doc(hidden)]
    fn slot(pipe: &Pipe) -> &Option<Self::Value>;

    #[doc(hidden)]
    fn slot_mut(pipe: &mut Pipe) -> &mut Option<Self::Value>;
}

macro_rules! pipe_slot {
    ($(#[$doc:meta])* $name:ident, $field:ident, $value:ty, $key:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl PipeSlot for $name {
            type Value = $value;

            const KEY: PipeKey = PipeKey::$key;

            fn slot(pipe: &Pipe) -> &Option<$value> {
                &pipe.$field
            }

            fn slot_mut(pipe: &mut Pipe) -> &mut Option<$value> {
                &mut pipe.$field
            }
        }
    };
}

pipe_slot!(
    /// Slot for [`PipeKey::MeanIml`]
    MeanIml, mean_iml, f64, MeanIml
);
pipe_slot!(
    /// Slot for [`PipeKey::MeanFunction`]
    MeanFunction, mean_function, DiscreteVulnerabilityFunction, MeanFunction
);
pipe_slot!(
    /// Slot for [`PipeKey::Asset`]
    ExposureAsset, asset, Asset, Asset
);

/// Intermediate values of one computation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipe {
    mean_iml: Option<f64>,
    mean_function: Option<DiscreteVulnerabilityFunction>,
    asset: Option<Asset>,
}

impl Pipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a slot, failing with [`RiskError::MissingKey`] if it is unset
    pub fn get<S: PipeSlot>(&self) -> Result<&S::Value> {
        S::slot(self).as_ref().ok_or(RiskError::MissingKey(S::KEY))
    }

    /// Set a slot, replacing any previous value
    pub fn set<S: PipeSlot>(&mut self, value: S::Value) {
        *S::slot_mut(self) = Some(value);
    }

    /// Builder form of [`set`](Self::set)
    pub fn with<S: PipeSlot>(mut self, value: S::Value) -> Self {
        self.set::<S>(value);
        self
    }

    pub fn contains<S: PipeSlot>(&self) -> bool {
        S::slot(self).is_some()
    }

    /// Remove and return a slot's value
    pub fn take<S: PipeSlot>(&mut self) -> Option<S::Value> {
        S::slot_mut(self).take()
    }

    /// Unset every slot
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;
    use alloc::vec;

    #[test]
    fn test_missing_key_is_an_error() {
        let pipe = Pipe::new();

        assert_eq!(
            pipe.get::<MeanIml>(),
            Err(RiskError::MissingKey(PipeKey::MeanIml))
        );
        assert_eq!(
            pipe.get::<MeanFunction>().unwrap_err(),
            RiskError::MissingKey(PipeKey::MeanFunction)
        );
        assert_eq!(
            pipe.get::<ExposureAsset>(),
            Err(RiskError::MissingKey(PipeKey::Asset))
        );
    }

    #[test]
    fn test_set_overwrites() {
        let mut pipe = Pipe::new();

        pipe.set::<MeanIml>(0.5);
        assert_eq!(pipe.get::<MeanIml>(), Ok(&0.5));

        pipe.set::<MeanIml>(0.7);
        assert_eq!(pipe.get::<MeanIml>(), Ok(&0.7));
    }

    #[test]
    fn test_slots_are_independent() {
        let function =
            DiscreteVulnerabilityFunction::new(vec![0.1, 1.0], vec![0.0, 0.5], vec![0.0, 0.0])
                .unwrap();
        let asset = Asset::new(Site::new(1.0, 2.0), 10.0);

        let mut pipe = Pipe::new()
            .with::<MeanFunction>(function.clone())
            .with::<ExposureAsset>(asset);

        assert!(!pipe.contains::<MeanIml>());
        assert_eq!(pipe.get::<MeanFunction>(), Ok(&function));
        assert_eq!(pipe.get::<ExposureAsset>(), Ok(&asset));

        assert_eq!(pipe.take::<ExposureAsset>(), Some(asset));
        assert!(!pipe.contains::<ExposureAsset>());
        assert!(pipe.contains::<MeanFunction>());

        pipe.clear();
        assert_eq!(pipe, Pipe::new());
    }
}
