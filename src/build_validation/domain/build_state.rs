use super::category::{Category, CategoryId};
use super::component::Component;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::HashSet;

/// One category slot holding zero or one component
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSlot {
    category: Category,
    component: Option<Component>,
}

impl BuildSlot {
    fn empty(category: Category) -> Self {
        Self {
            category,
            component: None,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }
}

/// BuildState aggregate for an in-progress build
///
/// Holds exactly one slot per catalog category, in catalog order. Slots are
/// fixed at construction; the only mutation is [`BuildState::set`], which
/// enforces that a component lands in the slot of its own category.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildState {
    slots: Vec<BuildSlot>,
}

impl BuildState {
    /// Creates an empty build with one slot per category
    ///
    /// # Errors
    /// Returns an error if two categories share an id
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id().clone()) {
                return Err(BuildError::InvalidCategory {
                    category: category.id().to_string(),
                    reason: "category is declared more than once".to_string(),
                }
                .into());
            }
        }

        Ok(Self {
            slots: categories.into_iter().map(BuildSlot::empty).collect(),
        })
    }

    /// Returns the component selected for `category`, if any.
    /// Unknown categories are simply absent.
    pub fn get(&self, category: &str) -> Option<&Component> {
        self.slot(category).and_then(BuildSlot::component)
    }

    /// Places `component` into the slot for `category`, or clears it with `None`
    ///
    /// # Returns
    /// The component previously held by the slot
    ///
    /// # Errors
    /// Returns `BuildError::InvalidCategory` if the category is unknown or the
    /// component belongs to a different category. The build is left untouched.
    pub fn set(&mut self, category: &str, component: Option<Component>) -> Result<Option<Component>> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.category.id().as_str() == category)
            .ok_or_else(|| BuildError::InvalidCategory {
                category: category.to_string(),
                reason: "category is not part of this build".to_string(),
            })?;

        if let Some(component) = &component {
            if component.category().as_str() != category {
                return Err(BuildError::InvalidCategory {
                    category: category.to_string(),
                    reason: format!(
                        "component '{}' belongs to category '{}'",
                        component.id(),
                        component.category()
                    ),
                }
                .into());
            }
        }

        Ok(std::mem::replace(&mut slot.component, component))
    }

    /// Returns true if the build declares a slot for `category`
    pub fn has_category(&self, category: &str) -> bool {
        self.slot(category).is_some()
    }

    /// All slots in catalog order
    pub fn slots(&self) -> &[BuildSlot] {
        &self.slots
    }

    /// Selected components in catalog order
    pub fn selected(&self) -> impl Iterator<Item = &Component> {
        self.slots.iter().filter_map(BuildSlot::component)
    }

    pub fn category_ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.slots.iter().map(|slot| slot.category.id())
    }

    pub fn is_empty(&self) -> bool {
        self.selected().next().is_none()
    }

    fn slot(&self, category: &str) -> Option<&BuildSlot> {
        self.slots
            .iter()
            .find(|slot| slot.category.id().as_str() == category)
    }
}
