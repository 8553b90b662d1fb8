//! Periodic re-render of the standing status board.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::TraceId;
use crate::domain::chat_dispatcher::ChatDispatcher;
use crate::domain::ports::Sleeper;
use crate::domain::standing::RefreshOutcome;

/// Default interval between status board refreshes.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(5 * 60 * 60);

/// Replaces the status board on a fixed period.
///
/// The first refresh happens one full period after start; the startup path
/// publishes the initial board.
pub struct StatusBoardRefresher {
    dispatcher: Arc<ChatDispatcher>,
    sleeper: Arc<dyn Sleeper>,
    period: Duration,
}

impl StatusBoardRefresher {
    pub fn new(dispatcher: Arc<ChatDispatcher>, sleeper: Arc<dyn Sleeper>, period: Duration) -> Self {
        Self {
            dispatcher,
            sleeper,
            period,
        }
    }

    /// Wait one period, then refresh once under a fresh trace id.
    pub async fn tick(&self) -> RefreshOutcome {
        self.sleeper.sleep(self.period).await;
        let outcome = TraceId::in_fresh_scope(self.dispatcher.refresh_status_board()).await;
        info!(?outcome, "status board refresh finished");
        outcome
    }

    /// Run forever on the current runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                self.tick().await;
            }
        })
    }
}
