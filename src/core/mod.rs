pub mod ad_copy;
pub mod audience;
pub mod estimator;
pub mod export;
pub mod generator;
pub mod history;
pub mod keywords;

pub use crate::domain::model::{CampaignRequest, CampaignResult};
pub use crate::domain::ports::{RequestSource, Storage};
pub use crate::utils::error::Result;
