use std::sync::Arc;

use planner_core::{
    ActionEnvelope, Build, BuildAction, BuildEngine, BuildMetadata, Catalog, LocaleTable,
    PlannerConfig, PlannerError, TemplateCorrections,
};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::view::BuildView;

/// Single writer of the current build.
///
/// Reference data and the locale table are shared read-only; the build is
/// replaced wholesale by every accepted action and left untouched by every
/// rejected one.
pub struct BuildSession {
    catalog: Arc<Catalog>,
    locale: Arc<LocaleTable>,
    corrections: TemplateCorrections,
    build: Build,
    revision: u64,
}

impl BuildSession {
    /// Starts a session on the initial build for `config.default_character`
    /// (or the first listed character).
    pub fn new(
        catalog: Arc<Catalog>,
        locale: Arc<LocaleTable>,
        config: &PlannerConfig,
    ) -> Result<Self, SessionError> {
        let metadata = BuildMetadata::new(config.game_version.clone());
        let build = BuildEngine::new(catalog.as_ref())
            .initial_build(config.default_character.as_ref(), metadata)?;
        let corrections =
            TemplateCorrections::builtin().with_rules(config.template_corrections.iter().cloned());

        info!(
            character = %build.character,
            career = %build.career,
            locale = %config.locale,
            "build session started"
        );

        Ok(Self {
            catalog,
            locale,
            corrections,
            build,
            revision: 0,
        })
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    /// Number of accepted actions so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Applies `action` and returns the new build.
    ///
    /// On error the previous build stays current.
    pub fn dispatch(&mut self, action: BuildAction) -> Result<&Build, SessionError> {
        let engine = BuildEngine::new(self.catalog.as_ref());
        match engine.reduce(&self.build, &action) {
            Ok(next) => {
                self.build = next;
                self.revision += 1;
                debug!(
                    kind = %action.kind(),
                    revision = self.revision,
                    career = %self.build.career,
                    "action applied"
                );
                Ok(&self.build)
            }
            Err(err) => {
                warn!(
                    kind = %action.kind(),
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    error = %err,
                    "action rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Decodes a wire envelope and dispatches it.
    pub fn dispatch_envelope(&mut self, envelope: ActionEnvelope) -> Result<&Build, SessionError> {
        let action = envelope.decode().inspect_err(|err| {
            warn!(code = err.error_code(), error = %err, "action not decoded");
        })?;
        self.dispatch(action)
    }

    /// Parses one `{"type": ..., "payload": ...}` document and dispatches it.
    pub fn dispatch_json(&mut self, text: &str) -> Result<&Build, SessionError> {
        let envelope = ActionEnvelope::from_json(text).map_err(SessionError::Decode)?;
        self.dispatch_envelope(envelope)
    }

    /// Localized view model of the current build.
    pub fn view(&self) -> Result<BuildView, SessionError> {
        BuildView::derive(
            &self.build,
            self.catalog.as_ref(),
            self.locale.as_ref(),
            &self.corrections,
        )
    }

    /// Current build as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, SessionError> {
        serde_json::to_string_pretty(&self.build).map_err(SessionError::Encode)
    }
}
