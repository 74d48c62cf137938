mod check;
mod password;

pub use check::*;
pub use password::*;
