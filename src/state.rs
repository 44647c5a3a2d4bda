//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccountService, AnalysisService, HistoryService};
use crate::infrastructure::persistence::{
    KvHistoryRepository, KvSessionRepository, KvUserRepository,
};
use crate::infrastructure::store::{JsonRecords, KeyValueStore};

pub type Accounts = AccountService<KvUserRepository, KvSessionRepository>;
pub type History = HistoryService<KvHistoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub account_service: Arc<Accounts>,
    pub history_service: Arc<History>,
    pub store: Arc<dyn KeyValueStore>,
    /// Model name reported by the health check; `None` in demo mode.
    pub model: Option<String>,
}

impl AppState {
    /// Wires the account and history repositories onto one store.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        analysis_service: AnalysisService,
        credential_secret: String,
        model: Option<String>,
    ) -> Self {
        let records = JsonRecords::new(store.clone());

        let account_service = AccountService::new(
            Arc::new(KvUserRepository::new(records.clone())),
            Arc::new(KvSessionRepository::new(records.clone())),
            credential_secret,
        );
        let history_service = HistoryService::new(Arc::new(KvHistoryRepository::new(records)));

        Self {
            analysis_service: Arc::new(analysis_service),
            account_service: Arc::new(account_service),
            history_service: Arc::new(history_service),
            store,
            model,
        }
    }
}
