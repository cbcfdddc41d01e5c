//! `dp-core` — foundational types for the `displace` workspace.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`params`]  | `ScenarioParams`, `ParamKind`                         |
//! | [`year`]    | `Year` (1-based simulated year)                       |
//! | [`config`]  | `McConfig`, `Execution`                               |
//! | [`rng`]     | `SimRng` (one seeded stream per Monte Carlo run)      |
//! | [`error`]   | `DpError`, `DpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to params and config types. |

pub mod config;
pub mod error;
pub mod params;
pub mod rng;
pub mod year;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Execution, McConfig};
pub use error::{DpError, DpResult};
pub use params::{ParamKind, ScenarioParams};
pub use rng::SimRng;
pub use year::Year;
