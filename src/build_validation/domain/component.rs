use super::category::CategoryId;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// Maximum length for component ids (security limit)
const MAX_COMPONENT_ID_LENGTH: usize = 128;

/// Connector identifier for the 12VHPWR / 12V-2x6 high-power GPU connector (ATX 3.0)
pub const HIGH_POWER_CONNECTOR: &str = "16-pin";

/// NewType wrapper for a component id with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Component id cannot be empty");
        }

        if id.len() > MAX_COMPONENT_ID_LENGTH {
            anyhow::bail!(
                "Component id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_COMPONENT_ID_LENGTH
            );
        }

        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Component id '{}' must not contain whitespace or control characters",
                id.escape_debug()
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Technical attributes inspected by the compatibility rules.
///
/// Every field is optional; which ones are meaningful depends on the category.
/// Numeric attributes that are absent count as zero in power arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAttributes {
    /// Processor / motherboard socket, e.g. "AM5", "LGA1700"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    /// Motherboard / memory standard, e.g. "DDR5"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    /// Heat output in watts; for cooling, the dissipation capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdp: Option<u32>,
    /// Rated power supply output in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,
    /// Connectors a power supply provides or a graphics card requires
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub psu_connectors: Vec<String>,
}

impl TechnicalAttributes {
    pub fn tdp_or_zero(&self) -> u32 {
        self.tdp.unwrap_or(0)
    }

    pub fn wattage_or_zero(&self) -> u32 {
        self.wattage.unwrap_or(0)
    }

    pub fn has_connector(&self, connector: &str) -> bool {
        self.psu_connectors.iter().any(|c| c == connector)
    }
}

/// A priced catalog item that fits into exactly one category slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    category: CategoryId,
    brand: String,
    name: String,
    price: u64,
    /// Display-only specification labels (e.g. "Cores" -> "8"), in catalog order
    #[serde(default)]
    specs: IndexMap<String, String>,
    #[serde(flatten)]
    attributes: TechnicalAttributes,
}

impl Component {
    pub fn new(id: &str, category: &str, brand: &str, name: &str, price: u64) -> Result<Self> {
        Ok(Self {
            id: ComponentId::new(id.to_string())?,
            category: CategoryId::new(category.to_string())?,
            brand: brand.to_string(),
            name: name.to_string(),
            price,
            specs: IndexMap::new(),
            attributes: TechnicalAttributes::default(),
        })
    }

    pub fn with_attributes(mut self, attributes: TechnicalAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_spec(mut self, label: &str, value: &str) -> Self {
        self.specs.insert(label.to_string(), value.to_string());
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn specs(&self) -> &IndexMap<String, String> {
        &self.specs
    }

    pub fn attributes(&self) -> &TechnicalAttributes {
        &self.attributes
    }
}
