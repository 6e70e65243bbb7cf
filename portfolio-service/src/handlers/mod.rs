pub mod diagnostics;
pub mod diary;
pub mod health;
pub mod profile;

pub use diagnostics::run_diagnostics;
pub use diary::{get_diary_item, list_diary};
pub use health::{health_check, root};
pub use profile::get_profile;
