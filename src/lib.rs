//! # Spots Rust Backend
//!
//! Campus open-classroom availability engine.
//!
//! This crate answers "which classroom is open right now, and how far away
//! is it?" over a static catalog of buildings, rooms, and weekly time-slot
//! schedules. For every scheduled slot it computes a three-state
//! availability classification relative to the current local time, rolls
//! the classification up through room and building levels, and optionally
//! ranks buildings by great-circle distance from the caller. The backend
//! exposes a REST API via Axum for the Next.js frontend.
//!
//! ## Features
//!
//! - **Catalog Loading**: Parse the building/room/slot catalog from its
//!   GeoJSON-flavoured JSON document
//! - **Slot Classification**: `available` / `upcoming` / `unavailable`
//!   relative to the configured campus time zone
//! - **Status Rollup**: priority-based reduction across rooms and buildings
//! - **Distance Ranking**: haversine great-circle ordering from an optional
//!   caller position
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: Service configuration from environment and TOML file
//! - [`models`]: Catalog data model, parsing, and time handling
//! - [`services`]: Availability aggregation, classification, and ranking
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
