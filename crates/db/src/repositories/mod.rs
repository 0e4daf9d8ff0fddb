pub mod lecture_repo;
pub mod site_setting_repo;
pub mod slide_repo;
pub mod summary_repo;
pub mod transcript_repo;

pub use lecture_repo::{AggregateError, LectureRepo};
pub use site_setting_repo::SiteSettingRepo;
pub use slide_repo::SlideRepo;
pub use summary_repo::SummaryRepo;
pub use transcript_repo::TranscriptRepo;
