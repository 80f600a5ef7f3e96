use serde::Serialize;

/// Severity of a compatibility issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The build cannot work as selected; confirmation is blocked
    Error,
    /// The build works but something deserves attention
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable identifier for each kind of problem a rule can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    SocketMismatch,
    MemoryTypeMismatch,
    InsufficientPower,
    MarginalPower,
    PowerSupplyRecommended,
    MissingPowerConnector,
    InsufficientCooling,
    MissingMotherboard,
    MissingProcessor,
    MissingPowerSupply,
}

impl IssueKind {
    /// Each kind always carries the same severity
    pub fn severity(self) -> Severity {
        match self {
            IssueKind::SocketMismatch
            | IssueKind::MemoryTypeMismatch
            | IssueKind::InsufficientPower
            | IssueKind::MissingPowerConnector => Severity::Error,
            IssueKind::MarginalPower
            | IssueKind::PowerSupplyRecommended
            | IssueKind::InsufficientCooling
            | IssueKind::MissingMotherboard
            | IssueKind::MissingProcessor
            | IssueKind::MissingPowerSupply => Severity::Warning,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::SocketMismatch => "socket-mismatch",
            IssueKind::MemoryTypeMismatch => "memory-type-mismatch",
            IssueKind::InsufficientPower => "insufficient-power",
            IssueKind::MarginalPower => "marginal-power",
            IssueKind::PowerSupplyRecommended => "power-supply-recommended",
            IssueKind::MissingPowerConnector => "missing-power-connector",
            IssueKind::InsufficientCooling => "insufficient-cooling",
            IssueKind::MissingMotherboard => "missing-motherboard",
            IssueKind::MissingProcessor => "missing-processor",
            IssueKind::MissingPowerSupply => "missing-power-supply",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CompatibilityIssue value object produced by a compatibility rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompatibilityIssue {
    kind: IssueKind,
    message: String,
}

impl CompatibilityIssue {
    pub fn new(kind: IssueKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}
