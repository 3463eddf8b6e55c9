//! Scripted object lister.

use std::collections::VecDeque;
use std::sync::Mutex;

use shoal_core::listing::{ListObjectsRequest, ListingPage, ObjectLister};
use shoal_core::{Error, Result};
use tokio::sync::oneshot;

/// Handle that releases one gated response.
///
/// Dropping the handle without calling [`release`](GateHandle::release)
/// also unblocks the response; holding it keeps the request in flight.
#[derive(Debug)]
pub struct GateHandle {
    tx: oneshot::Sender<()>,
}

impl GateHandle {
    /// Allows the gated response to be delivered.
    pub fn release(self) {
        let _ = self.tx.send(());
    }
}

struct Scripted {
    result: Result<ListingPage>,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct Inner {
    script: VecDeque<Scripted>,
    calls: Vec<ListObjectsRequest>,
}

/// An [`ObjectLister`] that replays queued responses in order.
///
/// Responses are consumed first in, first out, regardless of request
/// parameters; tests control the request order, so they control which
/// response answers which request. Every received request is recorded
/// and can be inspected afterwards.
#[derive(Default)]
pub struct MockLister {
    inner: Mutex<Inner>,
}

impl MockLister {
    /// Creates a lister with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful page response.
    pub fn push_page(&self, page: ListingPage) {
        self.lock().script.push_back(Scripted {
            result: Ok(page),
            gate: None,
        });
    }

    /// Queues a failed response.
    pub fn push_error(&self, error: Error) {
        self.lock().script.push_back(Scripted {
            result: Err(error),
            gate: None,
        });
    }

    /// Queues a page response that is held until the gate is released.
    ///
    /// The request that consumes this response stays pending until the
    /// returned handle is released or dropped, letting tests overlap a
    /// slow response with later requests.
    pub fn push_gated_page(&self, page: ListingPage) -> GateHandle {
        self.push_gated(Ok(page))
    }

    /// Queues a failed response that is held until the gate is released.
    pub fn push_gated_error(&self, error: Error) -> GateHandle {
        self.push_gated(Err(error))
    }

    /// Returns every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<ListObjectsRequest> {
        self.lock().calls.clone()
    }

    /// Returns the number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn push_gated(&self, result: Result<ListingPage>) -> GateHandle {
        let (tx, rx) = oneshot::channel();
        self.lock().script.push_back(Scripted {
            result,
            gate: Some(rx),
        });
        GateHandle { tx }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock lister lock poisoned")
    }
}

#[async_trait::async_trait]
impl ObjectLister for MockLister {
    async fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListingPage> {
        let scripted = {
            let mut inner = self.lock();
            inner.calls.push(request.clone());
            inner.script.pop_front()
        };

        let Some(scripted) = scripted else {
            return Err(Error::unreachable().with_message(format!(
                "no scripted response for prefix '{}' in bucket '{}'",
                request.prefix, request.bucket
            )));
        };

        // Await outside the lock so other requests can arrive while
        // this one is held at the gate.
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }

        scripted.result
    }
}
