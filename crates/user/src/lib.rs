pub mod password;

mod user;

pub use password::PasswordCost;
pub use user::*;
