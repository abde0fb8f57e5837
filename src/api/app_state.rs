use crate::config::config::AppConfig;
use crate::observability::AppMetrics;
use crate::services::assembler::TriageAssembler;
use crate::services::places::ChemistFinder;
use crate::services::session_log::SessionLog;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Triage assembler for symptom/medicine/remedy tools
    pub assembler: Arc<dyn TriageAssembler>,
    /// Chemist finder for the external places lookup
    pub chemist_finder: Arc<dyn ChemistFinder>,
    /// Bounded session log shared across handlers
    pub session_log: Arc<SessionLog>,
    /// Application metrics
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config.app_name)
            .field("assembler", &"Arc<dyn TriageAssembler>")
            .field("chemist_finder", &"Arc<dyn ChemistFinder>")
            .field("session_log", &self.session_log.total())
            .field("metrics", &"Arc<AppMetrics>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        config: AppConfig,
        assembler: Box<dyn TriageAssembler>,
        chemist_finder: Box<dyn ChemistFinder>,
        session_log: Arc<SessionLog>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            assembler: Arc::from(assembler),
            chemist_finder: Arc::from(chemist_finder),
            session_log,
            metrics: Arc::new(AppMetrics::default()),
        }
    }

    /// Create development application state with default configuration
    pub fn development() -> crate::error::Result<Self> {
        use crate::services::assembler::create_triage_assembler;
        use crate::services::places::create_chemist_finder;

        let config = AppConfig::development();
        let session_log = Arc::new(SessionLog::new(config.session_log.capacity));
        let assembler = create_triage_assembler(session_log.clone());
        let chemist_finder = create_chemist_finder(config.places.clone())?;

        Ok(Self::new(config, assembler, chemist_finder, session_log))
    }
}
