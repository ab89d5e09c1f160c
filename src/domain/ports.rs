use crate::domain::model::CampaignRequest;
use crate::utils::error::Result;

/// Where exported campaign files end up.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// Anything able to produce a campaign request: CLI flags, a TOML file, a form.
pub trait RequestSource {
    fn campaign_request(&self) -> Result<CampaignRequest>;
}
