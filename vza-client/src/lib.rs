//! Client for the vizallas hosted backend.
//!
//! The backend is a Postgres REST gateway: every data set is a table or
//! view queried with `GET /rest/v1/{name}` plus equality filters and an
//! order clause, returning a JSON array of rows. This crate wraps that
//! contract in a typed [`rest::RestClient`], exposes the three queries the
//! app needs in [`queries`], and defines the source traits in [`source`]
//! that let the state containers swap the HTTP client for test doubles.
//!
//! Connection settings are plain data ([`config::ClientConfig`]) built by
//! the host application; nothing here reads globals or embeds credentials.

pub mod config;
pub mod error;
pub mod queries;
pub mod rest;
pub mod source;
