use crate::error::{ApiError, ValidationError};
use crate::functions_config::{
    FunctionsConfig, ACCESS_TOKEN_KEY, CHANNEL_ID_KEY, CHANNEL_SECRET_KEY, LINE_GROUP,
};

pub struct ChannelCommandService;

/// Input of `fliff config`; at least one field must be set.
#[derive(Debug, Clone, Default)]
pub struct ChannelConfigRequest {
    pub channel_id: Option<String>,
    pub channel_secret: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChannelConfigResult {
    /// `(key, value)` pairs written, in request order.
    pub updated: Vec<(String, String)>,
}

impl ChannelCommandService {
    /// Write the given credentials into the `line` group in one `set` invocation.
    pub async fn run_configure(
        store: &FunctionsConfig,
        request: &ChannelConfigRequest,
    ) -> Result<ChannelConfigResult, ApiError> {
        let pairs: Vec<(String, String)> = [
            (CHANNEL_ID_KEY, &request.channel_id),
            (CHANNEL_SECRET_KEY, &request.channel_secret),
            (ACCESS_TOKEN_KEY, &request.access_token),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| (format!("{}.{}", LINE_GROUP, key), v.clone()))
        })
        .collect();

        if pairs.is_empty() {
            return Err(ValidationError::MissingFlag(
                "Command `fliff config` requires at least one of --id, --secret or --token"
                    .to_string(),
            )
            .into());
        }

        store.set_many(&pairs).await?;
        Ok(ChannelConfigResult { updated: pairs })
    }
}
