//! Fixed worker pool for off-thread placement.
//!
//! Requests are spread round-robin across a small set of identical workers: no affinity,
//! no ordering guarantee across different correlation ids. All responses funnel into one
//! shared receiver; matching them back to requests by id is the caller's job. No timeouts
//! are enforced on the channel; a caller adds its own upper bound if it needs one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::Placer;
use crate::message::{Request, Response};
use remora_core::Result;

/// The pool has been shut down and can no longer accept requests.
#[derive(Debug, thiserror::Error)]
#[error("placer pool is shut down")]
pub struct PoolClosed;

pub struct PlacerPool {
    senders: Vec<Sender<Request>>,
    responses: Receiver<Result<Response>>,
    next: AtomicUsize,
    workers: Vec<JoinHandle<()>>,
}

impl PlacerPool {
    /// Spawns `size` worker threads (at least one).
    pub fn new(size: usize) -> Self {
        let (response_tx, responses) = unbounded();

        let mut senders = Vec::new();
        let mut workers = Vec::new();

        for index in 0..size.max(1) {
            let (request_tx, request_rx) = unbounded::<Request>();
            let response_tx: Sender<Result<Response>> = response_tx.clone();

            let handle = std::thread::spawn(move || {
                let placer = Placer::new();

                tracing::debug!(worker = index, "placer worker started");

                for request in request_rx {
                    if response_tx.send(placer.handle(request)).is_err() {
                        break;
                    }
                }

                tracing::debug!(worker = index, "placer worker stopped");
            });

            senders.push(request_tx);
            workers.push(handle);
        }

        Self {
            senders,
            responses,
            next: AtomicUsize::new(0),
            workers,
        }
    }

    /// Hands `request` to the next worker in round-robin order.
    pub fn dispatch(&self, request: Request) -> std::result::Result<(), PoolClosed> {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.senders.len();

        self.senders[index].send(request).map_err(|_| PoolClosed)
    }

    /// The shared response stream. Responses carry the id of the request they answer and
    /// arrive in no particular order across ids.
    pub fn responses(&self) -> &Receiver<Result<Response>> {
        &self.responses
    }

    pub fn size(&self) -> usize {
        self.senders.len()
    }
}

impl Drop for PlacerPool {
    fn drop(&mut self) {
        // Disconnect the request channels so the workers drain and exit.
        self.senders.clear();

        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}
