mod job_poller;
mod job_service;

pub use job_poller::{DEFAULT_POLL_INTERVAL, JobPoller, PollError, PollOutcome};
pub use job_service::{
    ClaimOutcome, DEFAULT_LIST_LIMIT, DEFAULT_PENDING_LIMIT, JobService, MAX_LIMIT, clamp_limit,
};
