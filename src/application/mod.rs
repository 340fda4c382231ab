//! Application layer - the upload and search workflow.
//!
//! `SearchClient` talks to the backend and the UI only through domain
//! ports, so the same handlers run behind the CLI and in tests.

pub mod services;

pub use services::{SearchClient, SearchOutcome, SubmitOutcome, UiBindings, VisionOutcome};
