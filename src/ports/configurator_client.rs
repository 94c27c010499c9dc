//! Configurator API port definition.

use crate::domain::{
    AppError, AuthSession, Category, CompatibilityVerdict, NamedConfiguration, SelectionMap,
};

/// Port for the remote compatibility rule engine and build persistence.
pub trait ConfiguratorClient {
    /// Categories the configurator offers.
    fn categories(&self) -> Result<Vec<Category>, AppError>;

    /// Ask the rule engine whether `selection` works together.
    ///
    /// The backend may require a session; it is sent when present.
    fn validate(
        &self,
        session: Option<&AuthSession>,
        selection: &SelectionMap,
    ) -> Result<CompatibilityVerdict, AppError>;

    /// Persist `selection` under `name` for the session's user.
    fn save(
        &self,
        session: &AuthSession,
        name: &str,
        selection: &SelectionMap,
    ) -> Result<NamedConfiguration, AppError>;

    /// Configurations saved by the session's user.
    fn my_configurations(&self, session: &AuthSession)
    -> Result<Vec<NamedConfiguration>, AppError>;
}
