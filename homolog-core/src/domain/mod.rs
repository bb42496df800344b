//! Core domain types
//!
//! This module contains the domain structures shared between the client
//! (which speaks to the remote modeling service) and the engine (which
//! drives a job from submission to a terminal state).

pub mod job;
