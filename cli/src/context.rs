use onair_core::{AppConfig, AppConfigExt, ConfigStore};
use onair_overlay::{PlanPresenter, SnapshotKeeper};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::sink::StdoutSink;

pub type Presenter = PlanPresenter<StdoutSink>;

/// Handles of long-running tasks, aborted when replaced
#[derive(Default)]
pub struct BackgroundTasks {
    pub refresh: Option<JoinHandle<()>>,
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<ConfigStore>>,
    /// Schedule payload file read on every refresh. None until `load`.
    pub payload_path: Arc<RwLock<Option<PathBuf>>>,
    pub snapshot: Arc<RwLock<SnapshotKeeper>>,
    pub presenter: Arc<Mutex<Presenter>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
    sequence: Arc<AtomicU64>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(ConfigStore::new(config))),
            payload_path: Arc::new(RwLock::new(None)),
            snapshot: Arc::new(RwLock::new(SnapshotKeeper::new())),
            presenter: Arc::new(Mutex::new(PlanPresenter::new(StdoutSink::stdout()))),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number the next refresh or relayout request. Later requests win
    /// when results reach the presenter out of order.
    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
