use std::fmt;

/// User-facing outcome of a configurator action.
///
/// Precondition notices are produced before any request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Validation asked for with nothing selected.
    SelectionRequired,
    /// A validation request is already outstanding for this session.
    ValidationInFlight,
    /// The rule engine could not be reached or answered with an error.
    ValidationFailed,
    /// A result arrived for a session that was reset in the meantime.
    ResultDiscarded,
    /// Saving needs a logged-in user.
    AuthenticationRequired,
    /// Saving needs a non-blank name.
    NameRequired,
    Saved,
    /// The backend rejected or never received the save; inputs are kept for retry.
    SaveFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SelectionRequired => "Veuillez sélectionner au moins un composant",
            Notice::ValidationInFlight => "Une validation est déjà en cours",
            Notice::ValidationFailed => "Impossible de valider la configuration",
            Notice::ResultDiscarded => "Résultat ignoré : la session du configurateur a été fermée",
            Notice::AuthenticationRequired => {
                "Veuillez vous connecter pour sauvegarder votre configuration"
            }
            Notice::NameRequired => "Veuillez donner un nom à votre configuration",
            Notice::Saved => "Configuration sauvegardée avec succès !",
            Notice::SaveFailed => "Erreur lors de la sauvegarde",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Notice::Saved)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
