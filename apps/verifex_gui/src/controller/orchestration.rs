//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{AnalyzeError, RequestController};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the worker. On failure `status` explains why and `false` is returned.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Analysis worker is not running (startup or runtime failure); restart the app"
                .to_string();
            false
        }
    }
}

/// Submits the editor contents. A submission that cannot be queued is failed
/// immediately so the controller never waits on a call that was never issued.
pub fn submit_analysis(
    controller: &mut RequestController,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    let Some(submission) = controller.submit_input() else {
        return;
    };
    let generation = submission.generation;

    if dispatch_backend_command(cmd_tx, BackendCommand::Analyze(submission), status) {
        *status = "Analysis in progress".to_string();
    } else {
        controller.resolve(generation, Err(AnalyzeError::Transport(status.clone())));
    }
}
