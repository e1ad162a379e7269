//! Eventboard - Dioxus Fullstack Web Application
//!
//! A dashboard for networking events synced into the backend from a set of
//! partner sites. The UI lists events with server-side filtering and sorting,
//! drives a per-site resynchronization workflow, and exports the current view
//! to a spreadsheet.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```
//!
//! The backend API location is taken from the `API_URL` environment variable.

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod export;
mod pages;
mod refresh;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    api::init_api_url(
        std::env::var("API_URL").unwrap_or_else(|_| api::DEFAULT_API_URL.to_string()),
    );

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
