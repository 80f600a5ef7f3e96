/// PowerBudget policy for sizing a power supply against component heat output
///
/// The thresholds are expressed as ratios of the combined processor and
/// graphics card TDP:
/// - below 1.3x the supply is insufficient
/// - below 1.5x the supply is marginal
/// - the recommendation is 1.5x rounded up to the next 50 W step
///
/// All arithmetic is integer-only (tenths), so boundary values such as
/// 500 W against 385 W TDP (threshold 500.5 W) compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBudget {
    total_tdp: u64,
}

/// Minimum acceptable ratio of PSU wattage to total TDP, in tenths
const MINIMUM_RATIO_TENTHS: u64 = 13;

/// Comfortable ratio of PSU wattage to total TDP, in tenths
const RECOMMENDED_RATIO_TENTHS: u64 = 15;

/// Recommendations are rounded up to a multiple of this many watts
const WATTAGE_STEP: u64 = 50;

/// Outcome of comparing a power supply against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAssessment {
    /// wattage < total TDP x 1.3
    Insufficient,
    /// total TDP x 1.3 <= wattage < total TDP x 1.5
    Marginal,
    Adequate,
}

impl PowerBudget {
    /// Builds the budget from the processor and graphics card TDP (absent = 0)
    pub fn new(processor_tdp: u32, graphics_tdp: u32) -> Self {
        Self {
            total_tdp: u64::from(processor_tdp) + u64::from(graphics_tdp),
        }
    }

    pub fn total_tdp(&self) -> u64 {
        self.total_tdp
    }

    /// ceil(total TDP x 1.5 / 50) x 50
    pub fn recommended_wattage(&self) -> u64 {
        (self.total_tdp * RECOMMENDED_RATIO_TENTHS).div_ceil(10 * WATTAGE_STEP) * WATTAGE_STEP
    }

    pub fn assess(&self, wattage: u32) -> PowerAssessment {
        let wattage_tenths = u64::from(wattage) * 10;

        if wattage_tenths < self.total_tdp * MINIMUM_RATIO_TENTHS {
            PowerAssessment::Insufficient
        } else if wattage_tenths < self.total_tdp * RECOMMENDED_RATIO_TENTHS {
            PowerAssessment::Marginal
        } else {
            PowerAssessment::Adequate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_tdp() {
        assert_eq!(PowerBudget::new(65, 320).total_tdp(), 385);
        assert_eq!(PowerBudget::new(0, 0).total_tdp(), 0);
    }

    #[test]
    fn test_recommended_wattage_rounds_up_to_50() {
        // 385 * 1.5 = 577.5 -> 600
        assert_eq!(PowerBudget::new(65, 320).recommended_wattage(), 600);
        // 100 * 1.5 = 150 exactly
        assert_eq!(PowerBudget::new(100, 0).recommended_wattage(), 150);
        // 101 * 1.5 = 151.5 -> 200
        assert_eq!(PowerBudget::new(101, 0).recommended_wattage(), 200);
        assert_eq!(PowerBudget::new(0, 0).recommended_wattage(), 0);
    }

    #[test]
    fn test_insufficient_boundary_is_strict() {
        let budget = PowerBudget::new(65, 320);
        // 500 < 500.5
        assert_eq!(budget.assess(500), PowerAssessment::Insufficient);
        // 501 >= 500.5 but < 577.5
        assert_eq!(budget.assess(501), PowerAssessment::Marginal);
    }

    #[test]
    fn test_marginal_boundary_is_strict() {
        let budget = PowerBudget::new(100, 0);
        // exactly 1.3x is not insufficient
        assert_eq!(budget.assess(130), PowerAssessment::Marginal);
        assert_eq!(budget.assess(149), PowerAssessment::Marginal);
        // exactly 1.5x is adequate
        assert_eq!(budget.assess(150), PowerAssessment::Adequate);
    }

    #[test]
    fn test_zero_budget_is_always_adequate() {
        let budget = PowerBudget::new(0, 0);
        assert_eq!(budget.assess(0), PowerAssessment::Adequate);
        assert_eq!(budget.assess(650), PowerAssessment::Adequate);
    }
}
