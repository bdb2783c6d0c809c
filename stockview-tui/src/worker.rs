//! Background dispatcher — network requests never run on the UI thread.
//!
//! Communication with the TUI main thread is via `mpsc` channels. Each fetch
//! gets its own short-lived thread, so several requests can be outstanding at
//! once and their results arrive in whatever order the backend answers.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use stockview_core::{AnalysisClient, AnalysisError, AnalysisResult, FetchTicket};
use tracing::{debug, error};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Fetch(FetchTicket),
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    Analysis {
        ticket: FetchTicket,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
}

/// Spawn the dispatcher thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    client: Arc<dyn AnalysisClient>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stockview-worker".into())
        .spawn(move || worker_loop(rx, tx, client))
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    client: Arc<dyn AnalysisClient>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Fetch(ticket)) => spawn_fetch(ticket, &tx, &client),
        }
    }
    debug!("worker stopped");
}

fn spawn_fetch(
    ticket: FetchTicket,
    tx: &Sender<WorkerResponse>,
    client: &Arc<dyn AnalysisClient>,
) {
    let fetch_tx = tx.clone();
    let client = Arc::clone(client);

    let spawned = thread::Builder::new()
        .name(format!("stockview-fetch-{}", ticket.request_id))
        .spawn(move || {
            let outcome = ticket.run(client.as_ref());
            // The UI may have quit while we were waiting.
            let _ = fetch_tx.send(WorkerResponse::Analysis { ticket, outcome });
        });

    // Still resolve the ticket so the loading flag drops.
    if let Err(e) = spawned {
        error!(request_id = ticket.request_id, "failed to spawn fetch thread: {e}");
        let _ = tx.send(WorkerResponse::Analysis {
            ticket,
            outcome: Err(AnalysisError::Transport(format!("could not start request: {e}"))),
        });
    }
}
