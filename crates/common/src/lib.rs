pub mod failure;
pub mod platform;
pub mod request;
pub mod response;

pub use failure::Failure;
pub use platform::Platform;
