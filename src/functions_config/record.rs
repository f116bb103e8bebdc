//! In-memory copy of the Firebase Functions configuration and the lookups over it.

use crate::error::ConfigStoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Channel credentials group.
pub const LINE_GROUP: &str = "line";
/// Rich menu name → rich menu id.
pub const RICHMENU_GROUP: &str = "richmenus";
/// LIFF view name → LIFF id.
pub const VIEW_GROUP: &str = "views";

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CHANNEL_ID_KEY: &str = "channel_id";
pub const CHANNEL_SECRET_KEY: &str = "channel_secret";

/// Canonical configuration key for a user supplied name: lowercase, whitespace → `_`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// `group.name` key as understood by `functions:config:set` / `unset`.
pub fn config_key(group: &str, name: &str) -> String {
    format!("{}.{}", group, normalize_name(name))
}

/// Channel credentials as stored in the `line` group. Presence is checked by `resolve`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub channel_id: Option<String>,
    pub channel_secret: Option<String>,
}

/// Group name → property name → value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord {
    groups: Map<String, Value>,
}

impl ConfigRecord {
    pub fn from_value(value: Value) -> Result<Self, ConfigStoreError> {
        match value {
            Value::Object(groups) => Ok(Self { groups }),
            Value::Null => Ok(Self::default()),
            other => Err(ConfigStoreError::InvalidOutput(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.group(group).is_some()
    }

    fn group(&self, group: &str) -> Option<&Map<String, Value>> {
        self.groups.get(group).and_then(Value::as_object)
    }

    /// Raw string property, exact key.
    pub fn property(&self, group: &str, name: &str) -> Option<&str> {
        self.group(group)?.get(name)?.as_str()
    }

    /// Id stored under `name` (normalized) in `group`; non-string values do not count.
    pub fn id_by_name(&self, group: &str, name: &str) -> Option<String> {
        self.property(group, &normalize_name(name)).map(String::from)
    }

    /// Every name in `group` whose value equals `id`.
    pub fn names_by_id(&self, group: &str, id: &str) -> Vec<String> {
        self.group(group)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, value)| value.as_str() == Some(id))
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Credentials from the `line` group, `None` when the group is missing.
    pub fn credentials(&self) -> Option<Credentials> {
        self.group(LINE_GROUP)?;
        let get = |key: &str| self.property(LINE_GROUP, key).map(String::from);
        Some(Credentials {
            access_token: get(ACCESS_TOKEN_KEY),
            channel_id: get(CHANNEL_ID_KEY),
            channel_secret: get(CHANNEL_SECRET_KEY),
        })
    }
}
