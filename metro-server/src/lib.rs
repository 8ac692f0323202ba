//! Metro route-planning server.
//!
//! Computes minimum-cost routes through fixed metro networks, optionally
//! forced through ordered waypoints, and serves them over a JSON API.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
