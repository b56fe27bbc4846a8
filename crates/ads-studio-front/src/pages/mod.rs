pub mod approvals;
pub mod campaigns;
pub mod home;
pub mod rules;

pub use approvals::*;
pub use campaigns::*;
pub use home::*;
pub use rules::*;
