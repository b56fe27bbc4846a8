pub mod approval;
pub mod asset;
pub mod assignment;
pub mod campaign;
pub mod campaign_tree;
pub mod drag;
pub mod form;
pub mod library;
pub mod nav;
pub mod operation;
pub mod pagination;
pub mod rule;
pub mod selection;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod toast;

pub use asset::*;
#[cfg(target_arch = "wasm32")]
pub use state::*;
