pub mod scene;
pub mod sharp;
