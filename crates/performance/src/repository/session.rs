use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::report::AnalysisReport;
use crate::dto::session::SessionInfo;
use crate::error::{PerformanceError, Result};

pub trait SessionIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
pub struct UuidSessionIds;

impl SessionIdGenerator for UuidSessionIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct StoredReport {
    report: Arc<AnalysisReport>,
    stored_at: DateTime<Utc>,
}

/// Process-lifetime map of session ids to their latest report.
///
/// Clones share the same underlying map. Nothing is persisted.
#[derive(Clone)]
pub struct SessionRepository {
    reports: Arc<RwLock<HashMap<String, StoredReport>>>,
    issued: Arc<AtomicU64>,
    ids: Arc<dyn SessionIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl SessionRepository {
    pub fn new() -> Self {
        Self::with_providers(Arc::new(UuidSessionIds), Arc::new(SystemClock))
    }

    pub fn with_providers(ids: Arc<dyn SessionIdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reports: Arc::new(RwLock::new(HashMap::new())),
            issued: Arc::new(AtomicU64::new(0)),
            ids,
            clock,
        }
    }

    /// Issues a fresh session id. The session holds no report until
    /// `store_report` is called.
    pub fn create_session(&self) -> String {
        self.issued.fetch_add(1, Ordering::Relaxed);
        self.ids.next_id()
    }

    /// Stores `report` for the session, replacing any previous one.
    pub fn store_report(&self, session_id: &str, report: AnalysisReport) -> Arc<AnalysisReport> {
        let report = Arc::new(report);
        let stored = StoredReport {
            report: Arc::clone(&report),
            stored_at: self.clock.now(),
        };

        self.reports
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.to_string(), stored);

        report
    }

    pub fn get_report(&self, session_id: &str) -> Result<Arc<AnalysisReport>> {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .map(|stored| Arc::clone(&stored.report))
            .ok_or(PerformanceError::NotFound)
    }

    pub fn has_report(&self, session_id: &str) -> bool {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(session_id)
    }

    pub fn session_info(&self, session_id: &str) -> Result<SessionInfo> {
        let reports = self.reports.read().unwrap_or_else(PoisonError::into_inner);
        let stored = reports.get(session_id).ok_or(PerformanceError::NotFound)?;

        Ok(SessionInfo {
            user_id: session_id.to_string(),
            has_data: true,
            swimmer_name: stored.report.swimmer.name.clone(),
            stored_at: stored.stored_at,
        })
    }

    /// Drops the session's report. Returns whether one was stored.
    pub fn clear(&self, session_id: &str) -> bool {
        self.reports
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    /// Sessions currently holding a report.
    pub fn active_sessions(&self) -> usize {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Session ids issued since startup.
    pub fn total_sessions(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

impl Default for SessionRepository {
    fn default() -> Self {
        Self::new()
    }
}
