use importer::SwimmerImporter;
use performance::SessionRepository;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRepository,
    pub importer: SwimmerImporter,
}

impl AppState {
    pub fn new(sessions: SessionRepository, importer: SwimmerImporter) -> Self {
        Self { sessions, importer }
    }
}
