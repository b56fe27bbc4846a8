pub mod create;
pub mod list;

pub use create::*;
pub use list::*;
