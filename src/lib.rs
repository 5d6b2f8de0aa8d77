//! Static generator for the product marketing site.
//!
//! Content is read from a snapshot of the CMS (see [`content::ContentSnapshot`]),
//! reconciled into view models, and rendered to an output directory.

pub mod api;
pub mod config;
pub mod content;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod services;
pub mod templates;
pub mod utils;
