use std::str::FromStr;

use menuplan_shared::{Document, Model, bail, validate_object_id};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Category, Ingredient};

fn default_category() -> String {
    Category::default().to_string()
}

/// A user's recipe.
///
/// `user_id` and `category` are kept as text so that values read back from
/// the store are representable even when they break the rules; `validate`
/// is where they get checked. Equality is field-wise and is what a menu
/// uses to detect duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_time: i32,
    #[serde(default = "default_category")]
    pub category: String,
}

impl Recipe {
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            description: description.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            prep_time: 0,
            category: default_category(),
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients = ingredients.into_iter().collect();
        self
    }

    pub fn with_steps(mut self, steps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prep_time(mut self, minutes: i32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Parsed category, `None` when the stored text is outside the closed set.
    pub fn category_kind(&self) -> Option<Category> {
        Category::from_str(&self.category).ok()
    }
}

impl Model for Recipe {
    fn validate(&self) -> menuplan_shared::Result<()> {
        validate_object_id(&self.user_id)?;

        if self.title.is_empty() {
            bail!("Title cannot be empty.");
        }

        if self.prep_time < 0 {
            bail!("Preparation time must be a non-negative integer.");
        }

        if self.category_kind().is_none() {
            bail!("Invalid category: {}", self.category);
        }

        if self.ingredients.is_empty() {
            bail!("Ingredients list cannot be empty.");
        }

        Ok(())
    }

    fn to_dict(&self) -> Document {
        let ingredients = self
            .ingredients
            .iter()
            .map(|ingredient| Value::Object(ingredient.to_dict()))
            .collect::<Vec<_>>();

        let mut doc = Document::new();
        doc.insert("user_id".to_owned(), self.user_id.clone().into());
        doc.insert("title".to_owned(), self.title.clone().into());
        doc.insert("description".to_owned(), self.description.clone().into());
        doc.insert("ingredients".to_owned(), Value::Array(ingredients));
        doc.insert("steps".to_owned(), self.steps.clone().into());
        doc.insert("prep_time".to_owned(), self.prep_time.into());
        doc.insert("category".to_owned(), self.category.clone().into());
        doc
    }
}
