//! Data Transfer Objects for the remote modeling service
//!
//! This module contains the wire representations exchanged with the
//! modeling service's REST API. DTOs stay close to the service's JSON
//! shapes; domain types interpret them.

pub mod project;
