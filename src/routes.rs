//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::Dashboard;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
}
