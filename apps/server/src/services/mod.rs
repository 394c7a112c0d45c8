//! Service layer - business logic between handlers and stores

pub mod recipes;
pub mod users;

pub use recipes::{RecipeService, SummaryPage};
pub use users::UserService;
