pub mod connection;
pub mod endpoints;

pub use connection::{MealDbClient, MealDbError};
pub use endpoints::{Meal, MealSearchResponse};
