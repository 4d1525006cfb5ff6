//! Background worker thread: catalog calls run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. Requests
//! whose generation is already stale when dequeued are skipped without
//! touching the network.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use fitlab_core::{CatalogError, Exercise, ExerciseCatalog, ExerciseQuery};

use crate::request::RequestTracker;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Search { generation: u64, query: ExerciseQuery },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    SearchDone {
        generation: u64,
        query: ExerciseQuery,
        outcome: Result<Vec<Exercise>, CatalogError>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    tracker: RequestTracker,
    catalog: Box<dyn ExerciseCatalog>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("fitlab-worker".into())
        .spawn(move || worker_loop(rx, tx, tracker, catalog))
}

/// Ask the worker to stop and wait at most `limit` for it.
///
/// A search blocked on the network only sees `Shutdown` after it returns, so
/// the handle is detached instead of joined once `limit` passes. Returns
/// whether the thread finished in time.
pub fn shutdown_worker(
    tx: &Sender<WorkerCommand>,
    handle: JoinHandle<()>,
    limit: Duration,
) -> bool {
    // A closed channel means the worker already left its loop.
    let _ = tx.send(WorkerCommand::Shutdown);

    let deadline = Instant::now() + limit;
    while !handle.is_finished() {
        if Instant::now() >= deadline {
            tracing::warn!(?limit, "worker still busy at exit, detaching");
            return false;
        }
        thread::sleep(Duration::from_millis(10));
    }
    if handle.join().is_err() {
        tracing::error!("worker thread panicked");
    }
    true
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    tracker: RequestTracker,
    catalog: Box<dyn ExerciseCatalog>,
) {
    tracing::info!(catalog = catalog.name(), "worker started");
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Search { generation, query }) => {
                if !tracker.is_current(generation) {
                    tracing::debug!(generation, "skipping superseded search");
                    continue;
                }
                let outcome = catalog.search(&query);
                if let Err(e) = &outcome {
                    tracing::warn!(generation, query = %query.describe(), error = %e, "catalog search failed");
                }
                let resp = WorkerResponse::SearchDone {
                    generation,
                    query,
                    outcome,
                };
                if tx.send(resp).is_err() {
                    break;
                }
            }
        }
    }
    tracing::info!("worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    use crate::test_helpers::sample_exercises;

    /// Records every query it is asked and answers with fixed records.
    struct FakeCatalog {
        seen: Arc<Mutex<Vec<ExerciseQuery>>>,
    }

    impl ExerciseCatalog for FakeCatalog {
        fn name(&self) -> &str {
            "fake"
        }

        fn search(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, CatalogError> {
            self.seen.lock().unwrap().push(query.clone());
            Ok(sample_exercises())
        }
    }

    fn spawn_fake() -> (
        Sender<WorkerCommand>,
        Receiver<WorkerResponse>,
        RequestTracker,
        Arc<Mutex<Vec<ExerciseQuery>>>,
        JoinHandle<()>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let tracker = RequestTracker::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let catalog = FakeCatalog { seen: seen.clone() };
        let handle = spawn_worker(cmd_rx, resp_tx, tracker.clone(), Box::new(catalog)).unwrap();
        (cmd_tx, resp_rx, tracker, seen, handle)
    }

    /// Blocks in `search` until the test releases it.
    struct StalledCatalog {
        entered: Mutex<Sender<()>>,
        release: Mutex<Receiver<()>>,
    }

    impl ExerciseCatalog for StalledCatalog {
        fn name(&self) -> &str {
            "stalled"
        }

        fn search(&self, _query: &ExerciseQuery) -> Result<Vec<Exercise>, CatalogError> {
            let _ = self.entered.lock().unwrap().send(());
            let _ = self.release.lock().unwrap().recv();
            Err(CatalogError::Network("released".into()))
        }
    }

    #[test]
    fn shutdown_does_not_wait_for_stalled_search() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let tracker = RequestTracker::new();
        let catalog = StalledCatalog {
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        };
        let handle = spawn_worker(cmd_rx, resp_tx, tracker.clone(), Box::new(catalog)).unwrap();

        cmd_tx
            .send(WorkerCommand::Search {
                generation: tracker.begin(),
                query: ExerciseQuery::default(),
            })
            .unwrap();
        entered_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        let started = Instant::now();
        let finished = shutdown_worker(&cmd_tx, handle, Duration::from_millis(100));
        assert!(!finished);
        assert!(started.elapsed() < Duration::from_secs(2));

        drop(release_tx);
    }

    #[test]
    fn shutdown_joins_idle_worker() {
        let (cmd_tx, _resp_rx, _tracker, _seen, handle) = spawn_fake();
        assert!(shutdown_worker(&cmd_tx, handle, Duration::from_secs(5)));
    }

    #[test]
    fn worker_shutdown() {
        let (cmd_tx, _resp_rx, _tracker, _seen, handle) = spawn_fake();
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn answers_current_search() {
        let (cmd_tx, resp_rx, tracker, _seen, handle) = spawn_fake();
        let generation = tracker.begin();
        cmd_tx
            .send(WorkerCommand::Search {
                generation,
                query: ExerciseQuery::new("curl", "", ""),
            })
            .unwrap();

        let WorkerResponse::SearchDone {
            generation: got,
            outcome,
            ..
        } = resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(got, generation);
        assert_eq!(outcome.unwrap().len(), 3);

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn skips_superseded_search() {
        let (cmd_tx, resp_rx, tracker, seen, handle) = spawn_fake();
        let stale = tracker.begin();
        let fresh = tracker.begin();
        cmd_tx
            .send(WorkerCommand::Search {
                generation: stale,
                query: ExerciseQuery::new("old", "", ""),
            })
            .unwrap();
        cmd_tx
            .send(WorkerCommand::Search {
                generation: fresh,
                query: ExerciseQuery::new("new", "", ""),
            })
            .unwrap();
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let responses: Vec<_> = resp_rx.try_iter().collect();
        assert_eq!(responses.len(), 1);
        let WorkerResponse::SearchDone { generation, .. } = &responses[0];
        assert_eq!(*generation, fresh);
        assert_eq!(seen.lock().unwrap().as_slice(), &[ExerciseQuery::new("new", "", "")]);
    }
}
