//! Compatibility rules over a build.
//!
//! Each rule is an independent pure function that inspects the build and
//! yields at most one issue. [`DEFAULT_RULES`] fixes the evaluation order.

use super::power_budget::{PowerAssessment, PowerBudget};
use crate::build_validation::domain::{
    well_known, BuildState, CompatibilityIssue, Component, IssueKind, HIGH_POWER_CONNECTOR,
};

/// A compatibility rule: zero or one issue for a given build
pub type CompatibilityRule = fn(&BuildState) -> Option<CompatibilityIssue>;

/// The rule set in evaluation order
pub const DEFAULT_RULES: &[CompatibilityRule] = &[
    socket_match,
    memory_type_match,
    power_budget,
    power_connector,
    cooling_adequacy,
    processor_without_motherboard,
    motherboard_without_processor,
    graphics_card_without_power_supply,
];

fn describe(value: Option<&str>) -> &str {
    value.unwrap_or("unspecified")
}

fn tdp_of(component: Option<&Component>) -> u32 {
    component.map_or(0, |c| c.attributes().tdp_or_zero())
}

/// Processor and motherboard must share a socket
pub fn socket_match(build: &BuildState) -> Option<CompatibilityIssue> {
    let cpu = build.get(well_known::PROCESSOR)?;
    let motherboard = build.get(well_known::MOTHERBOARD)?;

    let cpu_socket = cpu.attributes().socket.as_deref();
    let board_socket = motherboard.attributes().socket.as_deref();
    if cpu_socket == board_socket {
        return None;
    }

    Some(CompatibilityIssue::new(
        IssueKind::SocketMismatch,
        format!(
            "Socket mismatch: processor uses {}, motherboard uses {}",
            describe(cpu_socket),
            describe(board_socket)
        ),
    ))
}

/// Memory modules must match the motherboard's memory standard
pub fn memory_type_match(build: &BuildState) -> Option<CompatibilityIssue> {
    let motherboard = build.get(well_known::MOTHERBOARD)?;
    let memory = build.get(well_known::MEMORY)?;

    let board_type = motherboard.attributes().memory_type.as_deref();
    let memory_type = memory.attributes().memory_type.as_deref();
    if board_type == memory_type {
        return None;
    }

    Some(CompatibilityIssue::new(
        IssueKind::MemoryTypeMismatch,
        format!(
            "Memory type mismatch: motherboard supports {}, selected memory is {}",
            describe(board_type),
            describe(memory_type)
        ),
    ))
}

/// Power supply wattage against processor + graphics card TDP
///
/// Without a power supply, recommends one as soon as a processor or a
/// graphics card is part of the build.
pub fn power_budget(build: &BuildState) -> Option<CompatibilityIssue> {
    let cpu = build.get(well_known::PROCESSOR);
    let gpu = build.get(well_known::GRAPHICS_CARD);
    let budget = PowerBudget::new(tdp_of(cpu), tdp_of(gpu));
    let recommended = budget.recommended_wattage();

    match build.get(well_known::POWER_SUPPLY) {
        Some(psu) => {
            let wattage = psu.attributes().wattage_or_zero();
            match budget.assess(wattage) {
                PowerAssessment::Insufficient => Some(CompatibilityIssue::new(
                    IssueKind::InsufficientPower,
                    format!(
                        "Insufficient power supply: at least {}W required, {}W selected",
                        recommended, wattage
                    ),
                )),
                PowerAssessment::Marginal => Some(CompatibilityIssue::new(
                    IssueKind::MarginalPower,
                    format!(
                        "Power supply is at its limit. {}W recommended for headroom",
                        recommended
                    ),
                )),
                PowerAssessment::Adequate => None,
            }
        }
        None if cpu.is_some() || gpu.is_some() => Some(CompatibilityIssue::new(
            IssueKind::PowerSupplyRecommended,
            format!(
                "Recommended power supply: {}W (current draw: ~{}W)",
                recommended,
                budget.total_tdp()
            ),
        )),
        None => None,
    }
}

/// A graphics card needing the 16-pin connector needs a power supply providing it
pub fn power_connector(build: &BuildState) -> Option<CompatibilityIssue> {
    let gpu = build.get(well_known::GRAPHICS_CARD)?;
    let psu = build.get(well_known::POWER_SUPPLY)?;

    let needs_connector = gpu.attributes().has_connector(HIGH_POWER_CONNECTOR);
    let has_connector = psu.attributes().has_connector(HIGH_POWER_CONNECTOR);
    if !needs_connector || has_connector {
        return None;
    }

    Some(CompatibilityIssue::new(
        IssueKind::MissingPowerConnector,
        format!(
            "Graphics card requires a {} power connector (ATX 3.0), but the power supply does not provide one",
            HIGH_POWER_CONNECTOR
        ),
    ))
}

/// Cooler capacity must cover the processor's TDP
pub fn cooling_adequacy(build: &BuildState) -> Option<CompatibilityIssue> {
    let cpu = build.get(well_known::PROCESSOR)?;
    let cooling = build.get(well_known::COOLING)?;

    let cpu_tdp = cpu.attributes().tdp_or_zero();
    let capacity = cooling.attributes().tdp_or_zero();
    if cpu_tdp <= capacity {
        return None;
    }

    Some(CompatibilityIssue::new(
        IssueKind::InsufficientCooling,
        format!(
            "Processor TDP ({}W) exceeds cooling capacity ({}W)",
            cpu_tdp, capacity
        ),
    ))
}

/// Nudge toward a motherboard once a processor is chosen
pub fn processor_without_motherboard(build: &BuildState) -> Option<CompatibilityIssue> {
    if build.get(well_known::PROCESSOR).is_none() || build.get(well_known::MOTHERBOARD).is_some() {
        return None;
    }
    Some(CompatibilityIssue::new(
        IssueKind::MissingMotherboard,
        "Select a motherboard for the processor".to_string(),
    ))
}

/// Nudge toward a processor once a motherboard is chosen
pub fn motherboard_without_processor(build: &BuildState) -> Option<CompatibilityIssue> {
    if build.get(well_known::MOTHERBOARD).is_none() || build.get(well_known::PROCESSOR).is_some() {
        return None;
    }
    Some(CompatibilityIssue::new(
        IssueKind::MissingProcessor,
        "Select a processor for the motherboard".to_string(),
    ))
}

/// Nudge toward a power supply once a graphics card is chosen
pub fn graphics_card_without_power_supply(build: &BuildState) -> Option<CompatibilityIssue> {
    if build.get(well_known::GRAPHICS_CARD).is_none()
        || build.get(well_known::POWER_SUPPLY).is_some()
    {
        return None;
    }
    Some(CompatibilityIssue::new(
        IssueKind::MissingPowerSupply,
        "Add a power supply for the graphics card".to_string(),
    ))
}
