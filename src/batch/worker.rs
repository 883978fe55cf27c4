// src/batch/worker.rs
use crate::batch::compiler::compile_sections;
use crate::batch::models::{BatchProgress, BatchReport};
use crate::session::Session;
use crate::utils::error::{AppError, ExtractError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A scan running on the blocking pool. Progress arrives on `progress`; the
/// channel closes when the scan ends, successfully or not.
pub struct BatchHandle {
    pub progress: mpsc::UnboundedReceiver<BatchProgress>,
    pub result: JoinHandle<Result<BatchReport, ExtractError>>,
}

/// Starts the scan on a background worker. There is no cancellation; the
/// worker runs until every file is merged or one fails.
pub fn spawn_batch(session: Session) -> BatchHandle {
    let (tx, rx) = mpsc::unbounded_channel();

    let result = tokio::task::spawn_blocking(move || {
        compile_sections(&session, |progress| {
            // The receiver only goes away if the front end stopped listening.
            let _ = tx.send(progress);
        })
    });

    BatchHandle { progress: rx, result }
}

impl BatchHandle {
    /// Drains progress events into `on_progress`, then waits for the result.
    pub async fn finish<F>(mut self, mut on_progress: F) -> Result<BatchReport, AppError>
    where
        F: FnMut(&BatchProgress),
    {
        while let Some(progress) = self.progress.recv().await {
            on_progress(&progress);
        }

        let report = self
            .result
            .await
            .map_err(|e| AppError::Worker(e.to_string()))??;
        Ok(report)
    }
}
