pub mod health;
pub mod lists;
pub mod todos;
