pub mod scene;
pub mod story;
