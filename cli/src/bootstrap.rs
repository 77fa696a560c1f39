//! Page-mount hook that asks the server to start its background scheduler.
//!
//! A bootstrapper belongs to a single mounted page. When that page lives in
//! the admin section the first mount fires one `POST` to the scheduler init
//! endpoint in a detached task. Nothing is retried and failures are only
//! logged: the endpoint is idempotent and the next admin page will try again.

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, error};

pub const ADMIN_PATH_PREFIX: &str = "/admin";
pub const SCHEDULER_INIT_PATH: &str = "/api/admin/scheduler/init";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Idle,
    InitializationRequested,
}

#[derive(Debug)]
pub struct SchedulerBootstrapper {
    client: Client,
    init_url: String,
    state: BootstrapState,
}

pub fn is_admin_path(path: &str) -> bool {
    path.starts_with(ADMIN_PATH_PREFIX)
}

impl SchedulerBootstrapper {
    pub fn new(client: Client, server: &str) -> Self {
        Self {
            client,
            init_url: format!("{}{}", server.trim_end_matches('/'), SCHEDULER_INIT_PATH),
            state: BootstrapState::Idle,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Runs the mount effect for a page at `path`.
    ///
    /// Returns the handle of the spawned request when one was issued. Callers
    /// may drop it; the request still runs to completion.
    pub fn mount(&mut self, path: &str) -> Option<JoinHandle<()>> {
        if self.state != BootstrapState::Idle || !is_admin_path(path) {
            return None;
        }
        self.state = BootstrapState::InitializationRequested;

        let request = self.client.post(&self.init_url);
        let init_url = self.init_url.clone();

        Some(tokio::spawn(async move {
            match request.send().await.and_then(|resp| resp.error_for_status()) {
                Ok(resp) => debug!("Scheduler init request accepted: {}", resp.status()),
                Err(err) => error!("Failed to initialize scheduler at {init_url}: {err}"),
            }
        }))
    }
}
