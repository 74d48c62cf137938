mod command;
mod model;

pub use bson::oid::ObjectId;
pub use command::*;
pub use model::*;
