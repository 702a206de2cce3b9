//! # Core Application Logic
//!
//! Marquee's view state and the reducer that advances it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • AppState (view data) │
//!                    │  • Action (events)      │
//!                    │  • reduce() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │    API     │
//!         │  Adapter   │                  │   client   │
//!         │ (ratatui)  │                  │ (reqwest)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `AppState` struct, all view state in one place
//! - [`action`]: The `Action` enum and the `reduce` function
//! - [`config`]: Settings resolution (config file, env vars, CLI flags)

pub mod action;
pub mod config;
pub mod state;
