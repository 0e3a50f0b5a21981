//! Test helpers: a scripted, recording `Remote`.

use crate::error::{PortfolioError, Result};
use crate::remote::Remote;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        form: Vec<(String, String)>,
    },
}

impl Call {
    pub fn path(&self) -> &str {
        match self {
            Call::Get { path, .. } | Call::Post { path, .. } => path,
        }
    }

    pub fn is_post(&self) -> bool {
        matches!(self, Call::Post { .. })
    }
}

/// Scripted body for a GET, or a failure status for any request.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
}

/// A `Remote` that answers from per-path queues and records every call.
///
/// A path with one queued reply keeps returning it; with several, they are
/// consumed in order and the last one sticks.
#[derive(Default)]
pub struct StubRemote {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<Call>>,
}

impl StubRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, path: &str, body: &str) -> Self {
        self.push(path, Reply::Body(body.to_string()))
    }

    pub fn fail(self, path: &str, status: u16) -> Self {
        self.push(path, Reply::Status(status))
    }

    fn push(self, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self, path: &str) -> Option<Reply> {
        let mut replies = self.replies.lock().unwrap();
        let queue = replies.get_mut(path)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

fn owned(pairs: &[(&str, String)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn status_error(path: &str, code: u16) -> PortfolioError {
    PortfolioError::Status {
        path: path.to_string(),
        status: StatusCode::from_u16(code).unwrap(),
    }
}

#[async_trait]
impl Remote for StubRemote {
    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        self.calls.lock().unwrap().push(Call::Get {
            path: path.to_string(),
            query: owned(query),
        });
        match self.next_reply(path) {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(code)) => Err(status_error(path, code)),
            None => Err(status_error(path, 404)),
        }
    }

    async fn post_form(&self, path: &str, form: &[(&str, String)]) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Post {
            path: path.to_string(),
            form: owned(form),
        });
        // POSTs peek so they never consume a reply queued for a GET on the same path
        let front = self
            .replies
            .lock()
            .unwrap()
            .get(path)
            .and_then(|q| q.front().cloned());
        match front {
            Some(Reply::Status(code)) => Err(status_error(path, code)),
            _ => Ok(()),
        }
    }
}
