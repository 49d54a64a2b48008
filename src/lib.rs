//! Drug review sentiment inference and condition-based drug recommendations.
//!
//! The fitted vectorizer, the classifier and the review dataset are loaded
//! once into an [`state::AppState`] and shared read-only by the HTTP
//! handlers in [`api`] and the one-off commands in [`cli`].

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
pub mod state;
