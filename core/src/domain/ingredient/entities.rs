use serde::{Deserialize, Serialize};

/// Ordered working set of user-entered ingredients.
///
/// Entries are trimmed and unique under case-insensitive comparison. Order is
/// insertion order and stays stable until the set is mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` once trimmed. Returns `false` and leaves the set
    /// untouched when the text is blank or already present.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }

        self.items.push(trimmed.to_string());
        true
    }

    /// Removes the entry at `position`, shifting later entries down by one.
    /// Out-of-range positions are ignored.
    pub fn remove(&mut self, position: usize) -> Option<String> {
        if position >= self.items.len() {
            return None;
        }

        Some(self.items.remove(position))
    }

    pub fn contains(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        self.items.iter().any(|item| item.to_lowercase() == needle)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
