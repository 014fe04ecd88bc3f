//! Analysis worker: a dedicated thread driving a multi-threaded tokio runtime.
//!
//! Commands are served one at a time, so at most one analysis call is in
//! flight. The command loop blocks on the crossbeam receiver, so the HTTP
//! connection pool must be driven by the runtime's worker threads; otherwise a
//! keep-alive connection the service closed while idle is reused and fails.
//! Completions are delivered with a blocking send; dropping one would leave the
//! controller pending.

use std::{io, thread};

use client_core::{AnalysisTransport, ClientSettings, HttpAnalysisClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Analysis worker starting...".to_string()));
        let runtime = match build_runtime() {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "Analysis worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = match HttpAnalysisClient::new(&settings) {
            Ok(client) => client,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "Analysis worker startup failure: {err:#}"
                )));
                tracing::error!("failed to build analysis client: {err:#}");
                return;
            }
        };

        tracing::info!(server_url = %settings.server_url, "analysis worker ready");
        let _ = ui_tx.try_send(UiEvent::BackendReady {
            server_url: settings.server_url.clone(),
        });

        runtime.block_on(serve_commands(&client, &cmd_rx, &ui_tx));
        tracing::info!("analysis worker stopped");
    });
}

pub(crate) fn build_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
}

pub(crate) async fn serve_commands<T>(
    transport: &T,
    cmd_rx: &Receiver<BackendCommand>,
    ui_tx: &Sender<UiEvent>,
) where
    T: AnalysisTransport + ?Sized,
{
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Analyze(submission) => {
                let completion = submission.dispatch(transport).await;
                if ui_tx.send(UiEvent::AnalysisCompleted(completion)).is_err() {
                    tracing::debug!("ui event channel closed; stopping worker");
                    break;
                }
            }
        }
    }
}
