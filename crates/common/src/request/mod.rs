pub mod update_text_request;

pub use update_text_request::UpdateTextRequest;
