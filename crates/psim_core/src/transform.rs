use crate::geometry::{Quaternion, Vec3};

/// Fixed frame ids of the simulated transform tree.
pub const FRAME_MAP: &str = "map";
pub const FRAME_ODOM: &str = "odom";
pub const FRAME_BASE_LINK: &str = "base_link";

/// Message timestamp, ROS 2 `builtin_interfaces/Time` shape.
///
/// The core never reads a clock itself; callers stamp each tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Stamp {
    pub sec: i32,
    pub nanosec: u32,
}

impl Stamp {
    pub const fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }
}

/// One parent→child rigid-body transform, ready for broadcast.
///
/// Frame ids are static by construction; this system only ever emits the
/// two pairs ("odom","base_link") and ("map","odom").
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformRecord {
    pub parent_frame: &'static str,
    pub child_frame: &'static str,
    pub stamp: Stamp,
    pub translation: Vec3,
    pub rotation: Quaternion,
}
