mod ingredient;
mod recipe;
mod types;

pub use ingredient::*;
pub use recipe::*;
pub use types::*;
