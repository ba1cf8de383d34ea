//! Hub-Pinned Threshold Dynamics
//!
//! A vertex looks at the weighted count of its in-neighbors in each state
//! and follows the heavier side. The hub never changes its mind: it is read
//! as `Glory` no matter what the state vector says, and ties go to `Glory`.
//!
//! # Scores
//!
//! ```text
//! SG(v) = Σ_u w[u][v] · [s'(u) = Glory]
//! SN(v) = Σ_u w[u][v] · [s'(u) = Gnash]
//! s'    = s with s'(hub) = Glory
//! ```
//!
//! # Schedules
//!
//! - **Synchronous**: every vertex reads the same snapshot
//! - **Asynchronous**: one pass in a given order, updates visible immediately
//!
//! # Threshold
//!
//! With `max_rest` the largest non-hub in-weight of any vertex, a hub
//! broadcast `W > max_rest` wins every vertex in one synchronous step.
//! At `W = max_rest` the tie rule still hands the heaviest vertex to `Glory`.

mod error;
mod schedule;
mod score;
mod threshold;
mod transition;

pub use error::{Error, OrderViolation, Result};
pub use schedule::{
    async_pass, async_random_pass, check_order, random_order, sync_step, AsyncOutcome,
    SyncOutcome,
};
pub use score::{score, tally, Tally};
pub use threshold::{flip_margin, hub_dominates, hub_weight, max_rest, rest_weight};
pub use transition::{decide, next_state, pin_hub_to_glory};
