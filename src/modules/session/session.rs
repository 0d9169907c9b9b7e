use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::modules::config::application::ports::outgoing::storage::KeyValueStorage;
use crate::modules::config::application::services::config_store::{ConfigStore, ConfigStoreError};
use crate::modules::config::domain::entities::{PortfolioConfig, TemplateVariant};
use crate::modules::config::domain::seed::seed;
use crate::modules::mutation::engine::{set_at_path, PathError};
use crate::modules::mutation::path::Path;
use crate::modules::publish::service::{PublishError, PublishService, ShareLink};

use super::view_mode::{resolve, ViewMode};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    /// The new value would break the document schema; the in-memory
    /// document is left unchanged.
    #[error("value does not fit the document shape: {0}")]
    InvalidShape(String),

    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

//
// ──────────────────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────────────────
//
// The handle templates work against — the only surface they get. Owns the
// loaded document and the storage-facing services; templates never touch
// storage directly. Passed around explicitly, no ambient singleton.
//

pub struct PortfolioSession<S>
where
    S: KeyValueStorage,
{
    store: ConfigStore<S>,
    publisher: PublishService<S>,
    document: PortfolioConfig,
    mode: ViewMode,
    template: TemplateVariant,
    loading: bool,
    load_warning: Option<String>,
    subscribers: Vec<Box<dyn Fn(&PortfolioConfig) + Send>>,
}

impl<S> PortfolioSession<S>
where
    S: KeyValueStorage,
{
    /// Resolve the mode from `location` and load the matching document:
    /// the published snapshot named by the slug (read-only), or the
    /// private editable document. Loading is synchronous; once this
    /// returns, the session is ready.
    pub fn open(
        storage: Arc<S>,
        base_url: Url,
        location: &Url,
        default_variant: TemplateVariant,
    ) -> Result<Self, SessionError> {
        let store = ConfigStore::new(Arc::clone(&storage));
        let publisher = PublishService::new(storage, base_url);
        let mode = resolve(location);

        let mut load_warning = None;
        let (document, template) = match &mode {
            ViewMode::View { slug } => match publisher.find(slug)? {
                Some(snapshot) => (snapshot.config, snapshot.template_type),
                None => {
                    warn!(%slug, "published snapshot not found; falling back to seed");
                    load_warning =
                        Some(format!("no published portfolio named `{slug}`"));
                    (seed(), default_variant)
                }
            },
            ViewMode::Edit => (store.load()?, default_variant),
        };

        Ok(Self {
            store,
            publisher,
            document,
            mode,
            template,
            loading: false,
            load_warning,
            subscribers: Vec::new(),
        })
    }

    pub fn document(&self) -> &PortfolioConfig {
        &self.document
    }

    pub fn is_view_mode(&self) -> bool {
        self.mode.is_view()
    }

    /// Always false once `open` has returned; kept so templates have a
    /// single readiness flag to key their skeleton state off.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn template_variant(&self) -> TemplateVariant {
        self.template
    }

    /// Non-fatal problem from session open (currently only: the slug in
    /// the location had no published snapshot).
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Replace the value at `path` and persist the document.
    ///
    /// In view mode this is a no-op: the call returns `Ok` without
    /// touching state or storage. In edit mode the mutation is applied
    /// in memory first, then persisted; if persisting fails the error is
    /// returned but the in-memory value keeps the change, so a later
    /// successful update re-persists everything.
    pub fn update_field(&mut self, path: &Path, value: Value) -> Result<(), SessionError> {
        if self.mode.is_view() {
            debug!(%path, "ignoring update in view mode");
            return Ok(());
        }

        let current = serde_json::to_value(&self.document)
            .map_err(|e| SessionError::InvalidShape(e.to_string()))?;
        let next = set_at_path(&current, path, value)?;
        let document: PortfolioConfig = serde_json::from_value(next)
            .map_err(|e| SessionError::InvalidShape(e.to_string()))?;

        self.document = document;
        self.store.persist(&self.document)?;
        self.notify();
        Ok(())
    }

    /// Snapshot the current document under a slug and return the address
    /// to share. Available in both modes; never mutates the private
    /// document.
    pub fn generate_shareable_link(
        &self,
        desired_slug: Option<&str>,
    ) -> Result<ShareLink, PublishError> {
        self.publisher
            .publish(&self.document, self.template, desired_slug)
    }

    /// Discard all edits: remove the stored private document and go back
    /// to the seed. No-op in view mode.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.mode.is_view() {
            debug!("ignoring reset in view mode");
            return Ok(());
        }
        self.document = self.store.reset()?;
        self.notify();
        Ok(())
    }

    /// Register a re-render callback, invoked with the new document after
    /// every successful mutation or reset.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&PortfolioConfig) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.document);
        }
    }
}
