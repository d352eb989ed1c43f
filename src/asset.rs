//! Embedded asset access.
//!
//! Assets are compiled into the binary with `include_bytes!`, so there is
//! nothing to locate on disk at runtime.

use std::borrow::Cow;

use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The packed sprite atlas containing every sprite and glyph.
    AtlasImage,
}

impl Asset {
    pub fn get_bytes(self) -> Result<Cow<'static, [u8]>, AssetError> {
        match self {
            Asset::AtlasImage => Ok(Cow::Borrowed(include_bytes!("../assets/game/atlas.png"))),
        }
    }
}
