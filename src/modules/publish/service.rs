use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::modules::config::application::ports::outgoing::storage::{
    KeyValueStorage, StorageError,
};
use crate::modules::config::domain::entities::{PortfolioConfig, TemplateVariant};

use super::slug::{random_slug, sanitize_slug};

/// Published-documents table key.
pub const SHARED_TABLE_KEY: &str = "sharedPortfolios";

//
// ──────────────────────────────────────────────────────────
// Snapshot + link
// ──────────────────────────────────────────────────────────
//

/// Immutable-at-publish-time copy of a document plus the template variant
/// it was rendered with. Lives independently of later edits to the private
/// document; never garbage-collected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishedSnapshot {
    pub config: PortfolioConfig,
    pub template_type: TemplateVariant,
    /// Absent on snapshots written before this field existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub slug: String,
    pub url: Url,
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PublishService<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
    base_url: Url,
}

impl<S> PublishService<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: Arc<S>, base_url: Url) -> Self {
        Self { storage, base_url }
    }

    /// Snapshot `document` under a slug and return the shareable address.
    ///
    /// Slug candidates, first non-empty wins: the sanitized desired slug,
    /// the sanitized hero name, a random token. Publishing under a slug
    /// that already exists silently replaces that snapshot; entries under
    /// other slugs are always preserved. The private document is never
    /// touched.
    pub fn publish(
        &self,
        document: &PortfolioConfig,
        variant: TemplateVariant,
        desired_slug: Option<&str>,
    ) -> Result<ShareLink, PublishError> {
        let slug = choose_slug(desired_slug, &document.hero.name);

        let mut table = self.read_table()?;
        if table.contains_key(&slug) {
            warn!(%slug, "replacing existing published snapshot");
        }
        table.insert(
            slug.clone(),
            PublishedSnapshot {
                config: document.clone(),
                template_type: variant,
                published_at: Some(Utc::now()),
            },
        );

        let raw = serde_json::to_string(&table)
            .map_err(|e| PublishError::Serialization(e.to_string()))?;
        self.storage.set(SHARED_TABLE_KEY, &raw)?;

        let url = self.share_url(&slug);
        info!(%slug, "published portfolio snapshot");
        Ok(ShareLink { slug, url })
    }

    /// Look up a published snapshot. `Ok(None)` means the slug was never
    /// published (or the table was unreadable and got recovered as empty).
    pub fn find(&self, slug: &str) -> Result<Option<PublishedSnapshot>, PublishError> {
        let mut table = self.read_table()?;
        Ok(table.remove(slug))
    }

    fn read_table(&self) -> Result<HashMap<String, PublishedSnapshot>, PublishError> {
        let raw = match self.storage.get(SHARED_TABLE_KEY)? {
            Some(raw) => raw,
            None => return Ok(HashMap::new()),
        };
        match serde_json::from_str(&raw) {
            Ok(table) => Ok(table),
            Err(e) => {
                warn!(error = %e, "published table is unreadable; starting from an empty table");
                Ok(HashMap::new())
            }
        }
    }

    fn share_url(&self, slug: &str) -> Url {
        // Generated links use the query form; the resolver also accepts the
        // older path forms for links generated by previous releases.
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!("share={slug}")));
        url
    }
}

fn choose_slug(desired: Option<&str>, hero_name: &str) -> String {
    if let Some(desired) = desired {
        let cleaned = sanitize_slug(desired);
        if !cleaned.is_empty() {
            return cleaned;
        }
    }
    let derived = sanitize_slug(hero_name);
    if !derived.is_empty() {
        return derived;
    }
    random_slug()
}
