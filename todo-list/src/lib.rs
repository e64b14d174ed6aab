pub mod config;
pub mod input;
pub mod menu;
pub mod repository;
pub mod todo;

pub use menu::Menu;
pub use repository::{RepositoryError, TodoRepository};
pub use todo::Todo;
