pub mod model;
pub mod stats;
pub mod store;

pub use model::{DailyTargets, DayStatus, StudyLog};
pub use store::{ActivityLogStore, LOGS_KEY};
