//! Text utilities shared by handlers

mod html;

pub use html::strip_tags;
