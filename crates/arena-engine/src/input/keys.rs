//! Browser `KeyboardEvent.keyCode` values used by the default bindings.

pub const ARROW_LEFT: u32 = 37;
pub const ARROW_UP: u32 = 38;
pub const ARROW_RIGHT: u32 = 39;
pub const ARROW_DOWN: u32 = 40;
pub const A: u32 = 65;
pub const D: u32 = 68;
pub const R: u32 = 82;
pub const S: u32 = 83;
pub const W: u32 = 87;
