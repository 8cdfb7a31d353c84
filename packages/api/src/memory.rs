use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::error::FetchError;
use crate::transport::{RawResponse, Transport};

#[derive(Clone, Debug)]
enum Canned {
    Respond(RawResponse),
    Unreachable(String),
}

/// In-memory Transport for tests and offline previews.
///
/// Responses are keyed by full path (`/api/users`). Several responses queued on
/// one path are served in order and the last one repeats. Paths with nothing
/// queued answer 404, like a server without that route. Every request is
/// journaled so tests can assert what was asked for.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    routes: Arc<Mutex<HashMap<String, VecDeque<Canned>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response carrying `body` serialized as JSON.
    pub fn with_json(self, path: &str, body: &impl Serialize) -> Self {
        let bytes = serde_json::to_vec(body).unwrap_or_default();
        self.with_response(path, 200, bytes)
    }

    /// Queue a response with an arbitrary status and raw body.
    pub fn with_response(self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.push(path, Canned::Respond(RawResponse::new(status, body)))
    }

    /// Queue a transport failure, as if the server were unreachable.
    pub fn with_unreachable(self, path: &str, reason: &str) -> Self {
        self.push(path, Canned::Unreachable(reason.to_string()))
    }

    /// Paths requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    fn push(self, path: &str, canned: Canned) -> Self {
        lock(&self.routes)
            .entry(path.to_string())
            .or_default()
            .push_back(canned);
        self
    }

    fn next(&self, path: &str) -> Option<Canned> {
        let mut routes = lock(&self.routes);
        let queue = routes.get_mut(path)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Transport for MemoryTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, FetchError> {
        lock(&self.requests).push(path.to_string());
        match self.next(path) {
            Some(Canned::Respond(response)) => Ok(response),
            Some(Canned::Unreachable(reason)) => Err(FetchError::Transport(reason)),
            None => Ok(RawResponse::new(404, "")),
        }
    }
}
