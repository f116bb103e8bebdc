use crate::config::LineApiConfig;
use crate::error::{ApiError, ValidationError};
use crate::functions_config::{config_key, FunctionsConfig, VIEW_GROUP};
use crate::line::{LiffApp, LiffFeatures, LiffView, LiffViewDescriptor, ViewType};
use crate::resolve::{open_session, resolve_id, Target};
use tracing::{info, warn};

pub struct LiffCommandService;

/// Input of `fliff add`.
#[derive(Debug, Clone)]
pub struct LiffAddRequest {
    pub name: String,
    pub url: String,
    pub view_type: ViewType,
    pub description: Option<String>,
    pub ble: bool,
}

/// Input of `fliff update`.
#[derive(Debug, Clone)]
pub struct LiffUpdateRequest {
    pub target: Target,
    pub url: String,
    pub view_type: ViewType,
    pub description: Option<String>,
    pub ble: bool,
}

#[derive(Debug, Clone)]
pub struct LiffAddResult {
    pub name: String,
    pub liff_id: String,
    pub config_key: String,
}

#[derive(Debug, Clone)]
pub struct LiffUpdateResult {
    pub liff_id: String,
}

#[derive(Debug, Clone)]
pub struct LiffDeleteResult {
    pub liff_id: String,
    /// Upstream not-found message; the view was already gone.
    pub not_found: Option<String>,
    /// `views.<name>` keys removed from the Functions configuration.
    pub unset: Vec<String>,
}

/// One LIFF app joined with the configured names pointing at it.
#[derive(Debug, Clone)]
pub struct LiffViewRow {
    pub names: Vec<String>,
    pub app: LiffApp,
}

#[derive(Debug, Clone)]
pub struct LiffGetResult {
    pub views: Vec<LiffViewRow>,
    pub not_found: Option<String>,
}

impl LiffCommandService {
    pub fn parse_view_type(type_str: &str) -> Result<ViewType, ApiError> {
        match type_str.to_ascii_lowercase().as_str() {
            "compact" => Ok(ViewType::Compact),
            "tall" => Ok(ViewType::Tall),
            "full" => Ok(ViewType::Full),
            _ => Err(ValidationError::InvalidViewType(type_str.to_string()).into()),
        }
    }

    fn descriptor(
        url: &str,
        view_type: ViewType,
        description: Option<String>,
        ble: bool,
    ) -> LiffViewDescriptor {
        LiffViewDescriptor {
            view: LiffView {
                view_type,
                url: url.to_string(),
            },
            description,
            features: ble.then_some(LiffFeatures { ble: true }),
        }
    }

    /// Register a view, then store its id under `views.<name>`.
    pub async fn run_add(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        request: &LiffAddRequest,
    ) -> Result<LiffAddResult, ApiError> {
        let session = open_session(store, settings).await?;
        let description = request
            .description
            .clone()
            .or_else(|| Some(request.name.clone()));
        let descriptor =
            Self::descriptor(&request.url, request.view_type, description, request.ble);

        let created = session.client.add_liff_view(&descriptor).await?;
        info!(name = %request.name, liff_id = %created.liff_id, "LIFF view created");

        let key = config_key(VIEW_GROUP, &request.name);
        if let Err(e) = store.set(&key, &created.liff_id).await {
            return Err(ApiError::step_failed(
                vec![format!(
                    "Created {} view with LIFF ID: {}",
                    request.name, created.liff_id
                )],
                "Failed to set Functions configuration",
                e.into(),
                vec![
                    "Try re-run with the following command".to_string(),
                    store.describe_set(&key, &created.liff_id),
                ],
            ));
        }

        Ok(LiffAddResult {
            name: request.name.clone(),
            liff_id: created.liff_id,
            config_key: key,
        })
    }

    pub async fn run_update(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        request: &LiffUpdateRequest,
    ) -> Result<LiffUpdateResult, ApiError> {
        let session = open_session(store, settings).await?;
        let liff_id = resolve_id(
            store,
            VIEW_GROUP,
            &request.target,
            &session.record,
            "fliff update",
        )
        .await?;
        let descriptor = Self::descriptor(
            &request.url,
            request.view_type,
            request.description.clone(),
            request.ble,
        );

        session.client.update_liff_view(&liff_id, &descriptor).await?;
        info!(liff_id = %liff_id, "LIFF view updated");
        Ok(LiffUpdateResult { liff_id })
    }

    /// Delete a view and unset every configured name that pointed at it.
    pub async fn run_delete(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        target: &Target,
    ) -> Result<LiffDeleteResult, ApiError> {
        let session = open_session(store, settings).await?;
        let liff_id =
            resolve_id(store, VIEW_GROUP, target, &session.record, "fliff delete").await?;

        let not_found = match session.client.delete_liff_view(&liff_id).await {
            Ok(_) => None,
            Err(e) => match e.not_found_message() {
                Some(message) => {
                    warn!(liff_id = %liff_id, detail = message, "LIFF view not found upstream");
                    Some(message.to_string())
                }
                None => return Err(e),
            },
        };

        let deleted = match &not_found {
            Some(_) => Vec::new(),
            None => vec![format!("Deleted view with LIFF ID: {}", liff_id)],
        };
        let names = store
            .get_names_by_id(VIEW_GROUP, &liff_id, Some(&session.record))
            .await?;
        let keys: Vec<String> = names.iter().map(|n| format!("{}.{}", VIEW_GROUP, n)).collect();
        let unset = store.unset_all(&keys).await.map_err(|e| {
            ApiError::step_failed(
                deleted,
                "Failed to unset view(s) in Functions configuration",
                e.into(),
                keys.iter().map(|k| store.describe_unset(k)).collect(),
            )
        })?;

        Ok(LiffDeleteResult {
            liff_id,
            not_found,
            unset,
        })
    }

    /// List views, optionally narrowed to one id or configured name.
    pub async fn run_get(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        target: Option<&Target>,
    ) -> Result<LiffGetResult, ApiError> {
        let session = open_session(store, settings).await?;
        let wanted = match target {
            Some(target) => Some(
                resolve_id(store, VIEW_GROUP, target, &session.record, "fliff get").await?,
            ),
            None => None,
        };

        let apps = match session.client.list_liff_views().await {
            Ok(list) => list.apps,
            Err(e) => {
                return match e.not_found_message() {
                    Some(message) => Ok(LiffGetResult {
                        views: Vec::new(),
                        not_found: Some(message.to_string()),
                    }),
                    None => Err(e),
                }
            }
        };

        let views = apps
            .into_iter()
            .filter(|app| wanted.as_deref().map_or(true, |id| app.liff_id == id))
            .map(|app| LiffViewRow {
                names: session.record.names_by_id(VIEW_GROUP, &app.liff_id),
                app,
            })
            .collect();

        Ok(LiffGetResult {
            views,
            not_found: None,
        })
    }
}
