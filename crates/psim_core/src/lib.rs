//! psim_core: transport-agnostic pose simulation semantics.
//!
//! Design goals:
//! - Pure, testable logic (no ROS deps).
//! - Explicit state structs; no ambient globals.
//! - Small, stable public API surface.
//!
//! Key ideas:
//! - `PoseSimulator` owns both pose estimates and is driven from outside:
//!   `apply_command()` on inbound commands, `tick()` on the periodic timer.
//! - `tick()` is pure with respect to transport: it returns the transform
//!   records to emit and never talks to a middleware itself.

/// Pose and command state structs.
pub mod pose;

/// Odometry drift model (uniform random walk).
pub mod drift;

/// Minimal 3D math for transform emission.
pub mod geometry;

/// Coordinate-frame transform records and frame ids.
pub mod transform;

/// The simulator component itself.
pub mod simulator;

pub use drift::DriftModel;
pub use pose::{Pose2d, WheelCommand};
pub use simulator::{PoseSimulator, COMMAND_GAIN};
pub use transform::{Stamp, TransformRecord, FRAME_BASE_LINK, FRAME_MAP, FRAME_ODOM};
