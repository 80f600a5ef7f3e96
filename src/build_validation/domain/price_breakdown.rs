/// PriceBreakdown value object: the quote for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceBreakdown {
    subtotal: u64,
    assembly_fee: u64,
    grand_total: u64,
}

impl PriceBreakdown {
    pub fn new(subtotal: u64, assembly_fee: u64) -> Self {
        Self {
            subtotal,
            assembly_fee,
            grand_total: subtotal.saturating_add(assembly_fee),
        }
    }

    /// Sum of the prices of all selected components
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    pub fn assembly_fee(&self) -> u64 {
        self.assembly_fee
    }

    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }
}
