//! Portfolio page client.
//!
//! Drives the dynamic parts of a personal portfolio page: a random fact, a
//! greeting from the server, four labelled locations, and a comment list
//! (list, submit, delete-all) behind a one-shot login check. The server and
//! the page markup are collaborators reached through the `Remote` and
//! `PageSurface` traits.

pub mod comments;
pub mod config;
pub mod error;
pub mod facts;
pub mod greeting;
pub mod locations;
pub mod login;
pub mod models;
pub mod page;
pub mod portfolio;
pub mod remote;
pub mod templates;
pub mod url_validator;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{Config, Endpoints};
pub use error::{PortfolioError, Result};
pub use models::{
    render_comment, CommentLimit, TextStyle, COMMENT_MARKER, FACTS, FACT_STYLE, LOCATION_LABELS,
};
pub use page::{Input, MemoryPage, Mutation, PageSurface, Slot, SlotState};
pub use portfolio::Portfolio;
pub use remote::{get_json, HttpRemote, Remote};
pub use templates::{html_escape, render_page, render_slot};
pub use url_validator::{endpoint_url, validate_base_url, UrlValidationError};
