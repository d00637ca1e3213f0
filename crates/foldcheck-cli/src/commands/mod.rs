pub mod analyze;
pub mod compare;
pub mod fetch;
pub mod render;
