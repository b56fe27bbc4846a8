pub mod account_selector;
pub mod asset_card;
pub mod asset_library;
pub mod asset_preview;
pub mod campaign_selector;
pub mod confirm_dialog;
pub mod drop_zone;
pub mod edit_text_dialog;
pub mod error_message;
pub mod form_field;
pub mod layout;
pub mod loading;
pub mod navbar;
pub mod pagination_bar;
pub mod sidebar;
pub mod toast;

pub use account_selector::*;
pub use asset_card::*;
pub use asset_library::*;
pub use asset_preview::*;
pub use campaign_selector::*;
pub use confirm_dialog::*;
pub use drop_zone::*;
pub use edit_text_dialog::*;
pub use error_message::*;
pub use form_field::*;
pub use layout::*;
pub use loading::*;
pub use navbar::*;
pub use pagination_bar::*;
pub use sidebar::*;
pub use toast::*;
