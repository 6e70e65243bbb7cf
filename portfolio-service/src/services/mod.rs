pub mod content;
pub mod diagnostics;

pub use content::ContentStore;
pub use diagnostics::{DatabaseProbe, DatabaseStatus};
