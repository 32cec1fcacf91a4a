pub mod diff;
pub mod list;
pub mod render;
