use menuplan_recipe::{Category, Ingredient, Recipe};
use menuplan_shared::{Error, Model, ObjectId};

fn pasta() -> Recipe {
    Recipe::new(ObjectId::new().to_hex(), "Pasta", "Weeknight pasta")
        .with_ingredients([
            Ingredient::new("Pastsa", "100 gram"),
            Ingredient::new("Water", "2 cups"),
        ])
        .with_steps([
            "Boil the water",
            "Add pasta and let cook for 8 minutes",
            "strain and serve",
        ])
        .with_prep_time(10)
        .with_category("parve")
}

fn validation_message(recipe: &Recipe) -> String {
    match recipe.validate() {
        Err(Error::Validation(msg)) => msg,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn valid_recipe_passes() {
    assert!(pasta().validate().is_ok());
}

#[test]
fn defaults_match_a_fresh_recipe() {
    let recipe = Recipe::new(ObjectId::new().to_hex(), "Toast", "");

    assert!(recipe.ingredients.is_empty());
    assert!(recipe.steps.is_empty());
    assert_eq!(recipe.prep_time, 0);
    assert_eq!(recipe.category, "unknown");
    assert_eq!(recipe.category_kind(), Some(Category::Unknown));
}

#[test]
fn invalid_user_id_is_rejected() {
    let mut recipe = pasta();
    recipe.user_id = "invalid".to_owned();

    assert_eq!(validation_message(&recipe), "Invalid ObjectId: invalid");
}

#[test]
fn empty_title_is_rejected() {
    let mut recipe = pasta();
    recipe.title = String::new();

    assert_eq!(validation_message(&recipe), "Title cannot be empty.");
}

#[test]
fn negative_prep_time_is_rejected() {
    let recipe = pasta().with_prep_time(-1);

    assert_eq!(
        validation_message(&recipe),
        "Preparation time must be a non-negative integer."
    );
}

#[test]
fn invalid_category_is_rejected() {
    let recipe = pasta().with_category("vegan");

    assert_eq!(validation_message(&recipe), "Invalid category: vegan");
    assert_eq!(recipe.category_kind(), None);
}

#[test]
fn empty_ingredients_are_rejected() {
    let recipe = pasta().with_ingredients([]);

    assert_eq!(
        validation_message(&recipe),
        "Ingredients list cannot be empty."
    );
}

#[test]
fn first_failing_check_wins() {
    let recipe = Recipe::new("invalid", "", "")
        .with_prep_time(-5)
        .with_category("vegan");

    assert_eq!(validation_message(&recipe), "Invalid ObjectId: invalid");

    let recipe = Recipe::new(ObjectId::new().to_hex(), "Soup", "")
        .with_prep_time(-5)
        .with_category("vegan");

    assert_eq!(
        validation_message(&recipe),
        "Preparation time must be a non-negative integer."
    );
}

#[test]
fn empty_steps_are_allowed() {
    let recipe = pasta().with_steps(Vec::<String>::new());

    assert!(recipe.validate().is_ok());
}

#[test]
fn to_dict_nests_ingredients_and_keeps_order() {
    let recipe = pasta();
    let doc = recipe.to_dict();

    assert_eq!(doc["user_id"], recipe.user_id.as_str());
    assert_eq!(doc["title"], "Pasta");
    assert_eq!(doc["description"], "Weeknight pasta");
    assert_eq!(doc["prep_time"], 10);
    assert_eq!(doc["category"], "parve");

    let ingredients = doc["ingredients"].as_array().expect("ingredients array");
    assert_eq!(ingredients.len(), recipe.ingredients.len());
    assert_eq!(ingredients[0]["name"], "Pastsa");
    assert_eq!(ingredients[1]["quantity"], "2 cups");

    let steps = doc["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), recipe.steps.len());
    assert_eq!(steps[2], "strain and serve");
}

#[test]
fn deserialize_fills_defaults() -> anyhow::Result<()> {
    let recipe: Recipe = serde_json::from_str(
        r#"{
            "user_id": "507f1f77bcf86cd799439011",
            "title": "Salad",
            "description": "Green",
            "ingredients": [{"name": "Lettuce", "quantity": "1 head"}]
        }"#,
    )?;

    assert_eq!(recipe.prep_time, 0);
    assert_eq!(recipe.category, "unknown");
    assert!(recipe.steps.is_empty());
    assert!(recipe.validate().is_ok());
    Ok(())
}

#[test]
fn equality_is_by_value() {
    let a = pasta();
    let mut b = a.clone();

    assert_eq!(a, b);

    b.steps.push("Enjoy".to_owned());
    assert_ne!(a, b);
}
