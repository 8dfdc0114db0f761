use crate::credentials::Credentials;
use crate::endpoint::ApiEndpoint;
use crate::ClientResult;
use log::info;
use warren::PagerSettings;

pub const ENV_PREFIX: &str = "WARREN";

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Root URL of the upstream JSON:API service
    pub base: String,
    pub credentials: Credentials,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub pager: PagerSettings,
}

impl Settings {
    /// Loads a settings file, letting `WARREN_<SECTION>__<KEY>` variables override it
    pub fn from_file(path: &str) -> ClientResult<Self> {
        let mut settings = config::Config::default();
        settings
            .merge(config::File::with_name(path))?
            .merge(config::Environment::with_prefix(ENV_PREFIX).separator("__"))?;

        let settings: Settings = settings.try_into()?;
        settings.api.credentials.validate()?;
        // the endpoint owns base URL validation
        settings.endpoint()?;
        info!("loaded settings from `{}` for upstream {}", path, settings.api.base);
        Ok(settings)
    }

    pub fn endpoint(&self) -> ClientResult<ApiEndpoint> {
        ApiEndpoint::new(&self.api.base, self.pager.clone())
    }

    pub fn credentials(&self) -> &Credentials { &self.api.credentials }
}
