use crate::config::LineApiConfig;
use crate::error::{ApiError, ValidationError};
use crate::functions_config::{config_key, FunctionsConfig, RICHMENU_GROUP};
use crate::line::{ApiResponse, RichMenu, RichMenuDefinition, RichMenuImage};
use crate::resolve::{open_session, resolve_id, Target};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct RichMenuCommandService;

/// Input of `richmenu add`. Paths stay optional; the service checks them before any call.
#[derive(Debug, Clone)]
pub struct RichMenuAddRequest {
    pub name: String,
    pub data: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RichMenuAddResult {
    pub name: String,
    pub rich_menu_id: String,
    pub config_key: String,
    /// Completed steps, in order.
    pub steps: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RichMenuDeleteResult {
    pub rich_menu_id: String,
    pub not_found: Option<String>,
    pub unset: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RichMenuRow {
    pub names: Vec<String>,
    pub menu: RichMenu,
}

#[derive(Debug, Clone)]
pub struct RichMenuGetResult {
    pub menus: Vec<RichMenuRow>,
    pub not_found: Option<String>,
}

/// Outcome of `default`, `link` and `unlink`.
#[derive(Debug, Clone)]
pub struct RichMenuTargetResult {
    pub rich_menu_id: Option<String>,
    pub user_id: Option<String>,
    pub not_found: Option<String>,
}

const FILES_REQUIRED: &str = "Data file and image file must exist";

/// Benign upstream not-found becomes `Ok(Some(message))`.
fn tolerate_not_found(
    result: Result<ApiResponse, ApiError>,
    subject: &str,
) -> Result<Option<String>, ApiError> {
    match result {
        Ok(_) => Ok(None),
        Err(e) => match e.not_found_message() {
            Some(message) => {
                warn!(subject, detail = message, "Rich menu resource not found upstream");
                Ok(Some(message.to_string()))
            }
            None => Err(e),
        },
    }
}

impl RichMenuCommandService {
    /// Create a menu, store its id under `richmenus.<name>`, then upload its image.
    ///
    /// Both input files are read and checked before anything is sent. A failure after the
    /// menu exists is reported with the steps already done; nothing is rolled back.
    pub async fn run_add(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        request: &RichMenuAddRequest,
    ) -> Result<RichMenuAddResult, ApiError> {
        let (data_path, image_path) = match (&request.data, &request.image) {
            (Some(data), Some(image)) => (data, image),
            _ => return Err(ValidationError::MissingFlag(FILES_REQUIRED.to_string()).into()),
        };
        for (what, path) in [("Data file", data_path), ("Image file", image_path)] {
            if !path.is_file() {
                return Err(ValidationError::MissingFile {
                    what,
                    path: path.clone(),
                }
                .into());
            }
        }
        let image = RichMenuImage::load(image_path).await?;
        let definition = RichMenuDefinition::load(data_path).await?;

        let session = open_session(store, settings).await?;
        let created = session.client.add_rich_menu(&definition).await?;
        let rich_menu_id = created.rich_menu_id;
        info!(name = %request.name, rich_menu_id = %rich_menu_id, "Rich menu created");
        let mut steps = vec![format!(
            "Created {} with RichMenu ID: {}",
            request.name, rich_menu_id
        )];

        let key = config_key(RICHMENU_GROUP, &request.name);
        if let Err(e) = store.set(&key, &rich_menu_id).await {
            return Err(ApiError::step_failed(
                steps,
                "Failed to set Functions configuration",
                e.into(),
                vec![
                    "Try re-run with the following command".to_string(),
                    store.describe_set(&key, &rich_menu_id),
                ],
            ));
        }
        steps.push(format!("Saved {} in Functions configuration", key));

        if let Err(e) = session
            .client
            .upload_rich_menu_image(&rich_menu_id, &image)
            .await
        {
            return Err(ApiError::step_failed(
                steps,
                "Failed to upload image",
                e,
                vec![format!(
                    "Remove the menu with `richmenu delete --id {}` and re-run `richmenu add`",
                    rich_menu_id
                )],
            ));
        }
        steps.push(format!("Uploaded image for RichMenu {}", rich_menu_id));

        Ok(RichMenuAddResult {
            name: request.name.clone(),
            rich_menu_id,
            config_key: key,
            steps,
        })
    }

    /// Delete a menu and unset every name pointing at it. An upstream not-found still
    /// cleans up the configured names.
    pub async fn run_delete(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        target: &Target,
    ) -> Result<RichMenuDeleteResult, ApiError> {
        let session = open_session(store, settings).await?;
        let rich_menu_id = resolve_id(
            store,
            RICHMENU_GROUP,
            target,
            &session.record,
            "richmenu delete",
        )
        .await?;

        let not_found = tolerate_not_found(
            session.client.delete_rich_menu(&rich_menu_id).await,
            &rich_menu_id,
        )?;
        let completed = match &not_found {
            Some(_) => Vec::new(),
            None => vec![format!("Deleted RichMenu ID: {}", rich_menu_id)],
        };

        let names = store
            .get_names_by_id(RICHMENU_GROUP, &rich_menu_id, Some(&session.record))
            .await?;
        let keys: Vec<String> = names
            .iter()
            .map(|n| format!("{}.{}", RICHMENU_GROUP, n))
            .collect();
        let unset = store.unset_all(&keys).await.map_err(|e| {
            ApiError::step_failed(
                completed,
                "Failed to unset richmenu(s) in Functions configuration",
                e.into(),
                vec![
                    format!(
                        "Try looking for RichMenu name with RichMenu ID {} using `richmenu get` command and unset it manually",
                        rich_menu_id
                    ),
                    store.describe_unset(&format!("{}.<richMenuName>", RICHMENU_GROUP)),
                ],
            )
        })?;

        Ok(RichMenuDeleteResult {
            rich_menu_id,
            not_found,
            unset,
        })
    }

    pub async fn run_get(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
    ) -> Result<RichMenuGetResult, ApiError> {
        let session = open_session(store, settings).await?;
        let menus = match session.client.list_rich_menus().await {
            Ok(list) => list.richmenus,
            Err(e) => {
                return match e.not_found_message() {
                    Some(message) => Ok(RichMenuGetResult {
                        menus: Vec::new(),
                        not_found: Some(message.to_string()),
                    }),
                    None => Err(e),
                }
            }
        };

        let menus = menus
            .into_iter()
            .map(|menu| RichMenuRow {
                names: session
                    .record
                    .names_by_id(RICHMENU_GROUP, &menu.rich_menu_id),
                menu,
            })
            .collect();
        Ok(RichMenuGetResult {
            menus,
            not_found: None,
        })
    }

    /// Make a menu the default for every user of the channel.
    pub async fn run_default(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        target: &Target,
    ) -> Result<RichMenuTargetResult, ApiError> {
        let session = open_session(store, settings).await?;
        let rich_menu_id = resolve_id(
            store,
            RICHMENU_GROUP,
            target,
            &session.record,
            "richmenu default",
        )
        .await?;
        let not_found = tolerate_not_found(
            session.client.set_default_rich_menu(&rich_menu_id).await,
            &rich_menu_id,
        )?;
        Ok(RichMenuTargetResult {
            rich_menu_id: Some(rich_menu_id),
            user_id: None,
            not_found,
        })
    }

    pub async fn run_link(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        target: &Target,
        user_id: &str,
    ) -> Result<RichMenuTargetResult, ApiError> {
        let session = open_session(store, settings).await?;
        let rich_menu_id = resolve_id(
            store,
            RICHMENU_GROUP,
            target,
            &session.record,
            "richmenu link",
        )
        .await?;
        let not_found = tolerate_not_found(
            session.client.link_rich_menu(user_id, &rich_menu_id).await,
            user_id,
        )?;
        Ok(RichMenuTargetResult {
            rich_menu_id: Some(rich_menu_id),
            user_id: Some(user_id.to_string()),
            not_found,
        })
    }

    pub async fn run_unlink(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        user_id: &str,
    ) -> Result<RichMenuTargetResult, ApiError> {
        let session = open_session(store, settings).await?;
        let not_found =
            tolerate_not_found(session.client.unlink_rich_menu(user_id).await, user_id)?;
        Ok(RichMenuTargetResult {
            rich_menu_id: None,
            user_id: Some(user_id.to_string()),
            not_found,
        })
    }
}
