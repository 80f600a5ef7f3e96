use super::build_state::BuildState;
use super::category::Category;
use super::component::Component;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::HashSet;

/// Catalog aggregate: the ordered categories and every component on offer
///
/// Read-only once loaded. Construction checks that ids are unique and that
/// every component points at a declared category.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    components: Vec<Component>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, components: Vec<Component>) -> Result<Self> {
        if categories.is_empty() {
            return Err(BuildError::Validation {
                message: "catalog declares no categories".to_string(),
            }
            .into());
        }

        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id().as_str()) {
                return Err(BuildError::Validation {
                    message: format!("category '{}' is declared more than once", category.id()),
                }
                .into());
            }
        }

        let mut component_ids = HashSet::new();
        for component in &components {
            if !component_ids.insert(component.id().as_str()) {
                return Err(BuildError::Validation {
                    message: format!("component '{}' is declared more than once", component.id()),
                }
                .into());
            }
            if !category_ids.contains(component.category().as_str()) {
                return Err(BuildError::Validation {
                    message: format!(
                        "component '{}' refers to undeclared category '{}'",
                        component.id(),
                        component.category()
                    ),
                }
                .into());
            }
        }

        Ok(Self {
            categories,
            components,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id().as_str() == id)
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id().as_str() == id)
    }

    /// Components offered for one category, in catalog order
    pub fn components_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Component> {
        self.components
            .iter()
            .filter(move |c| c.category().as_str() == category)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Creates an empty build with one slot per catalog category
    pub fn empty_build(&self) -> Result<BuildState> {
        BuildState::new(self.categories.clone())
    }
}
