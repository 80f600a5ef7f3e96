use crate::build_validation::domain::{BuildState, PriceBreakdown};

/// Assembly service fee: 6.5%, in basis points
pub const DEFAULT_ASSEMBLY_FEE_BASIS_POINTS: u64 = 650;

const BASIS_POINTS_PER_UNIT: u64 = 10_000;

/// PricingCalculator service for quoting a build
///
/// The fee is computed in integer basis points and rounded half-up to the
/// nearest currency unit, so `round(subtotal * 0.065)` never depends on
/// floating point representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingCalculator {
    fee_basis_points: u64,
}

impl PricingCalculator {
    pub fn new() -> Self {
        Self::with_fee_basis_points(DEFAULT_ASSEMBLY_FEE_BASIS_POINTS)
    }

    pub fn with_fee_basis_points(fee_basis_points: u64) -> Self {
        Self { fee_basis_points }
    }

    /// Fee rate as a percentage, for display (650 bp -> 6.5)
    pub fn fee_percent(&self) -> f64 {
        self.fee_basis_points as f64 / 100.0
    }

    /// Sum of the prices of all selected components; empty slots add nothing
    pub fn subtotal(&self, build: &BuildState) -> u64 {
        build
            .selected()
            .fold(0u64, |sum, component| sum.saturating_add(component.price()))
    }

    /// round(subtotal x rate), half-up
    pub fn assembly_fee(&self, subtotal: u64) -> u64 {
        let scaled = u128::from(subtotal) * u128::from(self.fee_basis_points);
        let unit = u128::from(BASIS_POINTS_PER_UNIT);
        let rounded = (scaled + unit / 2) / unit;
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }

    pub fn quote(&self, build: &BuildState) -> PriceBreakdown {
        let subtotal = self.subtotal(build);
        PriceBreakdown::new(subtotal, self.assembly_fee(subtotal))
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new()
    }
}
