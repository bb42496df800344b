//! Homolog Core
//!
//! Core types and abstractions for the homolog modeling-job workflow.
//!
//! This crate contains:
//! - Domain types: modeling requests, job statuses, outcomes
//! - DTOs: wire representations of the remote modeling service's API

pub mod domain;
pub mod dto;
