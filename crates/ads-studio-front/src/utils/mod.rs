#[cfg(target_arch = "wasm32")]
pub mod dnd;
pub mod format;
pub mod validation;
