//! Menu item model shared by dropdown and context menu.

use serde::{Deserialize, Serialize};

/// Visual/semantic variant of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemVariant {
    #[default]
    Default,
    /// Destructive action styling (delete, sign out).
    Danger,
}

/// Result of attempting to activate an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The item handled the click.
    Activated,
    /// Disabled or unknown item; the click was swallowed.
    Ignored,
}

/// One selectable entry in a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Icon name resolved by the presentation layer.
    pub icon: Option<String>,
    pub variant: ItemVariant,
    pub disabled: bool,
    /// Highlighted as the current selection (dropdown only).
    pub is_active: bool,
}

impl MenuItem {
    /// Create an enabled default-variant item.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ItemVariant::Default,
            disabled: false,
            is_active: false,
        }
    }

    /// Set the icon name.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark as a destructive action.
    #[must_use]
    pub fn danger(mut self) -> Self {
        self.variant = ItemVariant::Danger;
        self
    }

    /// Disable the item; activation is swallowed.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark as the active selection.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chaining() {
        let item = MenuItem::new("delete", "Delete").icon("trash").danger().disabled();
        assert_eq!(item.id, "delete");
        assert_eq!(item.variant, ItemVariant::Danger);
        assert!(item.disabled);
        assert_eq!(item.icon.as_deref(), Some("trash"));
    }
}
