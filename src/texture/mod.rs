//! Texture and sprite handling.

pub mod animated;
pub mod sprite;
pub mod text;
