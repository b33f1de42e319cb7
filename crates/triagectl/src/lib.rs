//! triagectl library - exposes command logic for testing.

pub mod commands;
pub mod render;
