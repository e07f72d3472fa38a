//! Discrete vulnerability functions

use alloc::vec::Vec;

use crate::{Result, RiskError};

/// Vulnerability function sampled at discrete intensity measure levels
///
/// The valid input domain is the closed interval between the first and
/// last IML.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteVulnerabilityFunction {
    imls: Vec<f64>,
    mean_loss_ratios: Vec<f64>,
    covs: Vec<f64>,
}

impl DiscreteVulnerabilityFunction {
    /// Build from IMLs, mean loss ratios and coefficients of variation
    ///
    /// IMLs must be finite and strictly increasing; all tables must have
    /// the same non-zero length.
    pub fn new(imls: Vec<f64>, mean_loss_ratios: Vec<f64>, covs: Vec<f64>) -> Result<Self> {
        if imls.is_empty() || imls.len() != mean_loss_ratios.len() || imls.len() != covs.len() {
            return Err(RiskError::InvalidVulnerabilityFunction);
        }
        if imls.iter().any(|iml| !iml.is_finite()) || imls.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RiskError::InvalidVulnerabilityFunction);
        }

        Ok(Self {
            imls,
            mean_loss_ratios,
            covs,
        })
    }

    pub fn imls(&self) -> &[f64] {
        &self.imls
    }

    pub fn mean_loss_ratios(&self) -> &[f64] {
        &self.mean_loss_ratios
    }

    pub fn covs(&self) -> &[f64] {
        &self.covs
    }

    /// Domain as `(lowest IML, highest IML)`
    pub fn domain(&self) -> (f64, f64) {
        // Non-empty by construction
        (self.imls[0], self.imls[self.imls.len() - 1])
    }

    /// Whether `iml` falls outside the closed domain (NaN is outside)
    pub fn out_of_bounds(&self, iml: f64) -> bool {
        let (lowest, highest) = self.domain();
        !(iml >= lowest && iml <= highest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn function() -> DiscreteVulnerabilityFunction {
        DiscreteVulnerabilityFunction::new(
            vec![0.1, 0.5, 1.0],
            vec![0.05, 0.2, 0.6],
            vec![0.3, 0.3, 0.3],
        )
        .unwrap()
    }

    #[test]
    fn test_domain_is_inclusive() {
        let function = function();

        assert_eq!(function.domain(), (0.1, 1.0));
        assert!(!function.out_of_bounds(0.1));
        assert!(!function.out_of_bounds(0.5));
        assert!(!function.out_of_bounds(1.0));

        assert!(function.out_of_bounds(0.099));
        assert!(function.out_of_bounds(1.5));
        assert!(function.out_of_bounds(f64::NAN));
    }

    #[test]
    fn test_rejects_inconsistent_tables() {
        assert_eq!(
            DiscreteVulnerabilityFunction::new(vec![], vec![], vec![]),
            Err(RiskError::InvalidVulnerabilityFunction)
        );
        assert_eq!(
            DiscreteVulnerabilityFunction::new(vec![0.1, 0.2], vec![0.1], vec![0.1, 0.1]),
            Err(RiskError::InvalidVulnerabilityFunction)
        );
        assert_eq!(
            DiscreteVulnerabilityFunction::new(vec![0.2, 0.1], vec![0.1, 0.2], vec![0.0, 0.0]),
            Err(RiskError::InvalidVulnerabilityFunction)
        );
        assert_eq!(
            DiscreteVulnerabilityFunction::new(vec![0.1, 0.1], vec![0.1, 0.2], vec![0.0, 0.0]),
            Err(RiskError::InvalidVulnerabilityFunction)
        );
        assert_eq!(
            DiscreteVulnerabilityFunction::new(vec![f64::NAN], vec![0.1], vec![0.0]),
            Err(RiskError::InvalidVulnerabilityFunction)
        );
    }

    #[test]
    fn test_single_point_domain() {
        let function =
            DiscreteVulnerabilityFunction::new(vec![0.3], vec![0.1], vec![0.0]).unwrap();

        assert!(!function.out_of_bounds(0.3));
        assert!(function.out_of_bounds(0.30001));
    }
}
