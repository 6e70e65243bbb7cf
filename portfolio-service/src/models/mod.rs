pub mod diary;
pub mod profile;

pub use diary::{DiaryDocument, DiaryItem};
pub use profile::{Profile, SocialLink};
