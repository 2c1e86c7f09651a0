use crate::drift::DriftModel;
use crate::geometry::{Quaternion, Vec3};
use crate::pose::{Pose2d, WheelCommand};
use crate::transform::{Stamp, TransformRecord, FRAME_BASE_LINK, FRAME_MAP, FRAME_ODOM};

/// Exponential-smoothing weight applied to every incoming command field.
pub const COMMAND_GAIN: f64 = 0.1;

/// The simulated pose publisher component.
///
/// Responsibilities:
/// - Accumulate wheel commands into the commanded pose (`apply_command`).
/// - Advance the drifted odometry estimate once per tick (`tick`).
/// - Hand back both estimates as transform records for broadcast.
///
/// The two handlers are expected to be dispatched serially (or under an
/// external lock); the simulator itself holds no synchronization.
#[derive(Debug)]
pub struct PoseSimulator {
    commanded: Pose2d,
    drifted: Pose2d,
    drift: DriftModel,
}

impl PoseSimulator {
    /// Simulator with an entropy-seeded drift model, both poses at zero.
    pub fn new() -> Self {
        Self::with_drift(DriftModel::new())
    }

    /// Simulator with a caller-supplied drift model (deterministic tests).
    pub fn with_drift(drift: DriftModel) -> Self {
        Self {
            commanded: Pose2d::ZERO,
            drifted: Pose2d::ZERO,
            drift,
        }
    }

    /// Integrate one inbound command into the commanded pose.
    ///
    /// Adds `COMMAND_GAIN ×` each command field to the matching pose field.
    /// Accepts any finite or non-finite value unconditionally; nothing is
    /// emitted until the next tick.
    pub fn apply_command(&mut self, cmd: &WheelCommand) {
        self.commanded.shift(
            cmd.vec_x * COMMAND_GAIN,
            cmd.vec_y * COMMAND_GAIN,
            cmd.rotation_power * COMMAND_GAIN,
        );
    }

    /// One periodic update: advance the drift walk, then return the two
    /// transform records to broadcast, stamped with the supplied instant.
    ///
    /// Emission order is fixed: ("odom","base_link") first, then
    /// ("map","odom").
    pub fn tick(&mut self, stamp: Stamp) -> [TransformRecord; 2] {
        let [dx, dy, dheading] = self.drift.step();
        self.drifted.shift(dx, dy, dheading);

        [
            Self::record(FRAME_ODOM, FRAME_BASE_LINK, stamp, self.commanded),
            Self::record(FRAME_MAP, FRAME_ODOM, stamp, self.drifted),
        ]
    }

    /// Current commanded-pose estimate.
    pub fn commanded(&self) -> Pose2d {
        self.commanded
    }

    /// Current drifted-odometry estimate.
    pub fn drifted(&self) -> Pose2d {
        self.drifted
    }

    fn record(
        parent_frame: &'static str,
        child_frame: &'static str,
        stamp: Stamp,
        pose: Pose2d,
    ) -> TransformRecord {
        TransformRecord {
            parent_frame,
            child_frame,
            stamp,
            translation: Vec3::new(pose.x, pose.y, 0.0),
            rotation: Quaternion::from_rpy(0.0, 0.0, pose.heading),
        }
    }
}

impl Default for PoseSimulator {
    fn default() -> Self {
        Self::new()
    }
}
