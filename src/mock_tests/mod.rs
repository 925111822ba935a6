pub mod model;
pub mod store;

pub use model::MockTestResult;
pub use store::{MockScoreStore, MOCK_SCORES_KEY};
