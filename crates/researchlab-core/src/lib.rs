//! ResearchLab Core Library
//!
//! This crate provides the GUI-free part of the ResearchLab client:
//! - HTTP client for the research backend
//! - Shared state services (theme, research topic, bookmarks)
//! - View-models for the Innovation Lab, Research Dashboard and Settings pages
//! - SQLite-based persistence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     researchlab-core                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  api/          - Backend traits and reqwest client          │
//! │  views/        - Page view-models                           │
//! │  stores/       - Shared theme / research / bookmark state   │
//! │  sequencer.rs  - Simulated agent-phase walk                 │
//! │  storage/      - SQLite database, queries                   │
//! │  types/        - Wire and record types                      │
//! │  config.rs     - Layered configuration                      │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod sequencer;
pub mod storage;
pub mod stores;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use error::{ApiError, Error, Result, StorageError};
pub use types::*;

pub use api::{BackendClient, IdeaApi, ResearchApi};
pub use config::{load_config, AppConfig};
pub use sequencer::{AgentPhase, PhaseSequencer, Sleeper, TokioSleeper};
pub use storage::Storage;
pub use stores::{
    BookmarkStore, MemoryBookmarkStore, ResearchState, ResearchStore, SqliteBookmarkStore,
    ThemeState, ThemeStore,
};
pub use views::{
    research_job, DashboardEvent, IdeaGenerator, PaperCard, ResearchDashboard, ResultSection,
    ResultState, SettingsPage, SourceTone,
};
