use menuplan_recipe::Recipe;
use menuplan_shared::{Document, Error, Model, bail, validate_object_id};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Recipes a user plans to cook on a given day.
///
/// Order of `recipes` is presentation order. No two entries are equal;
/// this holds for recipes added through [`Menu::add_recipe`], not for a
/// list assigned directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub user_id: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Menu {
    pub fn new(user_id: impl Into<String>, date: Date) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            recipes: Vec::new(),
        }
    }

    pub fn with_recipes(mut self, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        self.recipes = recipes.into_iter().collect();
        self
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn contains(&self, recipe: &Recipe) -> bool {
        self.recipes.contains(recipe)
    }

    pub fn find_recipe(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.title == title)
    }

    /// Appends `recipe` unless an equal recipe is already on the menu.
    pub fn add_recipe(&mut self, recipe: Recipe) -> menuplan_shared::Result<()> {
        if self.contains(&recipe) {
            return Err(Error::Duplicate {
                title: recipe.title,
            });
        }

        tracing::debug!(
            user_id = %self.user_id,
            date = %self.date,
            title = %recipe.title,
            "recipe added to menu"
        );

        self.recipes.push(recipe);

        Ok(())
    }

    /// Removes the first recipe titled `title` and hands it back.
    pub fn remove_recipe(&mut self, title: &str) -> menuplan_shared::Result<Recipe> {
        let Some(position) = self.recipes.iter().position(|r| r.title == title) else {
            return Err(Error::NotFound {
                title: title.to_owned(),
            });
        };

        tracing::debug!(
            user_id = %self.user_id,
            date = %self.date,
            title,
            "recipe removed from menu"
        );

        Ok(self.recipes.remove(position))
    }
}

impl Model for Menu {
    /// Contained recipes are not validated here.
    fn validate(&self) -> menuplan_shared::Result<()> {
        validate_object_id(&self.user_id)?;

        if self.recipes.is_empty() {
            bail!("Menu must have at least one recipe.");
        }

        Ok(())
    }

    fn to_dict(&self) -> Document {
        let recipes = self
            .recipes
            .iter()
            .map(|recipe| Value::Object(recipe.to_dict()))
            .collect::<Vec<_>>();

        let mut doc = Document::new();
        doc.insert("user_id".to_owned(), self.user_id.clone().into());
        doc.insert("date".to_owned(), self.date.to_string().into());
        doc.insert("recipes".to_owned(), Value::Array(recipes));
        doc
    }
}
