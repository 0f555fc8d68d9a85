pub mod config;
pub mod console;
pub mod navigation;
pub mod registry;
pub mod terminal;
pub mod validate;
pub mod walk;
