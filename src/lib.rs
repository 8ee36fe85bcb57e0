//! HTTP backend for creating, fetching and listing opinion polls.
//!
//! A poll has a title, an optional description, 2 to 10 text options and an
//! optional expiry. Input is turned into a [`models::Poll`] by
//! [`poll::prepare_for_creation`], checked by [`poll::validate`] and only then
//! handed to a [`store::PollStore`].
//!
//! ```text
//! POST /api/polls       create, 201 / 400 / 500
//! GET  /api/polls       list,   200 (always a JSON array)
//! GET  /api/polls/{id}  fetch,  200 / 400 / 404 / 500
//! GET  /                health
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod poll;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
