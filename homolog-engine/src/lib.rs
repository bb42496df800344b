//! Homolog Engine
//!
//! Drives a homology-modeling job through its full remote lifecycle.
//!
//! Architecture:
//! - Configuration: service endpoint, credentials, and polling policy
//! - Poller: fixed-interval status loop until a terminal state
//! - Extractor: turns a completed summary into model artifacts
//! - Engine: composes submit, poll, and extract into one run
//!
//! The engine submits a request once, polls the project until it reports
//! COMPLETED or FAILED, and returns a structured [`JobOutcome`]. It never
//! writes to disk or prints; diagnostics flow through `tracing` and the
//! injectable [`JobObserver`] seam.

pub mod config;
pub mod error;
pub mod extract;
pub mod observer;
pub mod poller;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the engine surface
pub use config::EngineConfig;
pub use error::{ExtractError, PollError};
pub use extract::extract_artifacts;
pub use observer::{JobObserver, TracingObserver};
pub use poller::StatusPoller;
pub use runner::ModelingEngine;

// Re-export the domain types callers interact with
pub use homolog_core::domain::job::{
    FailureKind, JobOutcome, JobStatus, ModelArtifact, ModelingRequest, ProjectHandle,
};
