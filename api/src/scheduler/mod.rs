pub mod routes;
pub mod schema;

use crate::scheduler::schema::SchedulerInitialization;
use chrono::{DateTime, Utc};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Process-wide record of whether the background scheduler was started.
///
/// Initialization is idempotent: only the first call takes effect, later
/// ones report the instant of that first call.
#[derive(Debug, Default)]
pub struct SchedulerGate {
    initialized_at: OnceLock<DateTime<Utc>>,
}

impl SchedulerGate {
    pub fn initialize(&self) -> SchedulerInitialization {
        let mut first_call = false;
        let initialized_at = *self.initialized_at.get_or_init(|| {
            first_call = true;
            Utc::now()
        });

        if first_call {
            info!("Scheduler initialized at {initialized_at}");
        } else {
            debug!("Scheduler already initialized at {initialized_at}");
        }

        SchedulerInitialization {
            success: true,
            already_initialized: !first_call,
            initialized_at,
        }
    }
}
