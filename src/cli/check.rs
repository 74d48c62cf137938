use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use menuplan_mealplan::Menu;
use menuplan_recipe::{Ingredient, Recipe};
use menuplan_shared::{Document, Model};
use menuplan_user::User;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Ingredient,
    Recipe,
    Menu,
    User,
}

/// Parse `raw` as a `kind` entity, validate it and return its document.
pub fn check(kind: Kind, raw: &str) -> anyhow::Result<Document> {
    match kind {
        Kind::Ingredient => load::<Ingredient>(raw),
        Kind::Recipe => load::<Recipe>(raw),
        Kind::Menu => load::<Menu>(raw),
        Kind::User => load::<User>(raw),
    }
}

pub fn check_file(kind: Kind, path: &Path) -> anyhow::Result<Document> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    tracing::debug!(?kind, path = %path.display(), "checking entity");

    check(kind, &raw)
}

fn load<T: DeserializeOwned + Model>(raw: &str) -> anyhow::Result<Document> {
    let entity: T = serde_json::from_str(raw)?;
    entity.validate()?;

    Ok(entity.to_dict())
}
