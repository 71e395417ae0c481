//! External reactivity
//!
//! Audio features and pointer input come from outside the crate as per-frame
//! snapshots. The mapper turns them into [`SolverConstants`](crate::config::SolverConstants)
//! and spawn requests so the solver stages never see them.

pub mod audio;
pub mod input;
pub mod mapper;

pub use audio::AudioFrame;
pub use input::{ClickEvent, InputState};
pub use mapper::{ReactiveFrame, SpawnRequest, map_reactive, solver_constants, spawn_hue, spawn_requests, throb};
