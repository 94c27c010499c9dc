//! Configurator session: catalog, selection, verdict, and the save form.

use crate::app::commands::configurator::catalog_loader::{CatalogLoad, load_catalog};
use crate::domain::{
    AppError, AuthSession, Catalog, Category, CompatibilityVerdict, NamedConfiguration, Notice,
    Product, SelectionMap, ValidatedVerdict, total_price,
};
use crate::ports::{CatalogClient, ConfiguratorClient};

/// Handle for a validation request issued by [`ConfiguratorSession::begin_validation`].
#[derive(Debug, Clone)]
pub struct ValidationTicket {
    epoch: u64,
    revision: u64,
    selection: SelectionMap,
}

impl ValidationTicket {
    /// Snapshot of the selection to send.
    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }
}

/// Handle for a catalog load issued by [`ConfiguratorSession::begin_load`].
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    epoch: u64,
}

/// State owned by one configurator visit.
///
/// `reset` models navigating away: everything is cleared and the epoch moves
/// on, so results belonging to the previous visit are discarded on arrival.
/// A verdict is kept when the selection changes afterwards; use
/// [`ConfiguratorSession::verdict_is_stale`] to tell.
#[derive(Debug, Default)]
pub struct ConfiguratorSession {
    epoch: u64,
    categories: Vec<Category>,
    catalog: Catalog,
    selection: SelectionMap,
    verdict: Option<ValidatedVerdict>,
    in_flight: bool,
    config_name: String,
}

impl ConfiguratorSession {
    pub fn new() -> Self {
        Self { categories: Category::ALL.to_vec(), ..Self::default() }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    pub fn set_config_name(&mut self, name: impl Into<String>) {
        self.config_name = name.into();
    }

    pub fn select(&mut self, category: Category, product_id: impl Into<String>) {
        self.selection.select(category, product_id);
    }

    pub fn deselect(&mut self, category: Category) {
        self.selection.deselect(category);
    }

    /// Selected product for `category`, if it is still in the loaded inventory.
    pub fn selected_product(&self, category: Category) -> Option<&Product> {
        self.catalog.selected(&self.selection, category)
    }

    /// Current total, recomputed from selection and catalog on every call.
    pub fn total_price(&self) -> f64 {
        total_price(&self.selection, &self.catalog)
    }

    pub fn verdict(&self) -> Option<&ValidatedVerdict> {
        self.verdict.as_ref()
    }

    pub fn verdict_is_stale(&self) -> bool {
        self.verdict.as_ref().is_some_and(|verdict| verdict.is_stale(&self.selection))
    }

    pub fn validation_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Navigate away: drop all state and invalidate outstanding tickets.
    pub fn reset(&mut self) {
        let categories = std::mem::take(&mut self.categories);
        *self = Self { epoch: self.epoch + 1, categories, ..Self::default() };
    }

    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket { epoch: self.epoch }
    }

    /// Install a finished load. Returns `ResultDiscarded` when the session was reset meanwhile.
    /// On success the categories that failed to load are handed back.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        load: CatalogLoad,
    ) -> Result<Vec<(Category, AppError)>, Notice> {
        if ticket.epoch != self.epoch {
            tracing::debug!("discarding catalog load for a closed configurator session");
            return Err(Notice::ResultDiscarded);
        }
        self.catalog = load.catalog;
        Ok(load.failures)
    }

    /// Load every category of this session. Partial failures are returned, not raised.
    pub fn load_catalog<C>(&mut self, client: &C) -> Vec<(Category, AppError)>
    where
        C: CatalogClient + Sync + ?Sized,
    {
        let ticket = self.begin_load();
        let load = load_catalog(client, &self.categories);
        self.finish_load(ticket, load).unwrap_or_default()
    }

    /// Check preconditions and take a snapshot for a validation request.
    pub fn begin_validation(&mut self) -> Result<ValidationTicket, Notice> {
        if self.selection.is_empty() {
            return Err(Notice::SelectionRequired);
        }
        if self.in_flight {
            return Err(Notice::ValidationInFlight);
        }
        self.in_flight = true;
        Ok(ValidationTicket {
            epoch: self.epoch,
            revision: self.selection.revision(),
            selection: self.selection.clone(),
        })
    }

    /// Record the outcome of a validation request.
    ///
    /// On failure the previous verdict stays in place.
    pub fn finish_validation(
        &mut self,
        ticket: ValidationTicket,
        result: Result<CompatibilityVerdict, AppError>,
    ) -> Result<&ValidatedVerdict, Notice> {
        if ticket.epoch != self.epoch {
            tracing::debug!("discarding validation result for a closed configurator session");
            return Err(Notice::ResultDiscarded);
        }
        self.in_flight = false;

        match result {
            Ok(verdict) => {
                tracing::info!(
                    compatible = verdict.compatible,
                    issues = verdict.issues.len(),
                    "configuration validated"
                );
                Ok(self.verdict.insert(ValidatedVerdict::new(verdict, ticket.revision)))
            }
            Err(error) => {
                tracing::warn!(%error, "Erreur lors de la validation");
                Err(Notice::ValidationFailed)
            }
        }
    }

    /// Validate the current selection against the remote rule engine (single attempt).
    pub fn validate<C>(
        &mut self,
        client: &C,
        auth: Option<&AuthSession>,
    ) -> Result<&ValidatedVerdict, Notice>
    where
        C: ConfiguratorClient + ?Sized,
    {
        let ticket = self.begin_validation()?;
        let result = client.validate(auth, ticket.selection());
        self.finish_validation(ticket, result)
    }

    /// Save the current selection under the name in the form.
    ///
    /// Success clears the name and keeps the selection; failure keeps both.
    pub fn save<C>(
        &mut self,
        client: &C,
        auth: Option<&AuthSession>,
    ) -> Result<NamedConfiguration, Notice>
    where
        C: ConfiguratorClient + ?Sized,
    {
        let Some(auth) = auth else {
            return Err(Notice::AuthenticationRequired);
        };
        let name = self.config_name.trim();
        if name.is_empty() {
            return Err(Notice::NameRequired);
        }

        match client.save(auth, name, &self.selection) {
            Ok(saved) => {
                tracing::info!(id = %saved.id, name = %saved.name, "configuration saved");
                self.config_name.clear();
                Ok(saved)
            }
            Err(error) => {
                tracing::warn!(%error, "Erreur lors de la sauvegarde");
                Err(Notice::SaveFailed)
            }
        }
    }
}
