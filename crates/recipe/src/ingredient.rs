use menuplan_shared::{Document, Model, bail};
use serde::{Deserialize, Serialize};

/// A single line of a recipe's ingredient list.
///
/// `quantity` is free-form ("1 cup", "100 gram", "to taste").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

impl Model for Ingredient {
    fn validate(&self) -> menuplan_shared::Result<()> {
        if self.name.is_empty() {
            bail!("Ingredient name cannot be empty.");
        }

        if self.quantity.is_empty() {
            bail!("Ingredient quantity must be a non-empty string.");
        }

        Ok(())
    }

    fn to_dict(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name".to_owned(), self.name.clone().into());
        doc.insert("quantity".to_owned(), self.quantity.clone().into());
        doc
    }
}
