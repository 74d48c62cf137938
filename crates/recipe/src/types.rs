use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Kashrut category of a recipe.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Dairy,
    Meat,
    Parve,
    #[default]
    Unknown,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantArray;

    use super::*;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(Category::from_str("dairy"), Ok(Category::Dairy));
        assert_eq!(Category::from_str("parve"), Ok(Category::Parve));
        assert!(Category::from_str("vegan").is_err());
        assert!(Category::from_str("Meat").is_err());
    }

    #[test]
    fn closed_set_of_four() {
        let names: Vec<&str> = Category::VARIANTS.iter().map(|c| c.as_ref()).collect();

        assert_eq!(names, ["dairy", "meat", "parve", "unknown"]);
        assert_eq!(Category::default().to_string(), "unknown");
    }
}
