//! Hand-written mirrors of the ROS 2 wire types this node exchanges.
//!
//! rosbridge carries messages as JSON, so serde shape + `ROS_TYPE_NAME` is
//! all the transport needs; MD5SUM/DEFINITION stay empty (ROS 1 native
//! transport concerns). Keeping the mirrors in-repo avoids a build-time
//! dependency on an installed ROS for message generation.

use serde::{Deserialize, Serialize};

use psim_core::{geometry, transform, TransformRecord, WheelCommand};

/// `builtin_interfaces/Time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

/// `std_msgs/Header` (ROS 2 shape, no seq).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

/// `geometry_msgs/Vector3`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `geometry_msgs/Quaternion`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// `geometry_msgs/Transform`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
}

/// `geometry_msgs/TransformStamped`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformStamped {
    pub header: Header,
    pub child_frame_id: String,
    pub transform: Transform,
}

/// `tf2_msgs/TFMessage`, the payload of the `/tf` topic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TFMessage {
    pub transforms: Vec<TransformStamped>,
}

impl roslibrust::RosMessageType for TFMessage {
    const ROS_TYPE_NAME: &'static str = "tf2_msgs/TFMessage";
    const MD5SUM: &'static str = "";
    const DEFINITION: &'static str = "";
}

/// `actuator_control_msgs/MecanumWheel`, the inbound manual-drive command.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MecanumWheel {
    pub vec_x: f64,
    pub vec_y: f64,
    pub rotation_power: f64,
}

impl roslibrust::RosMessageType for MecanumWheel {
    const ROS_TYPE_NAME: &'static str = "actuator_control_msgs/MecanumWheel";
    const MD5SUM: &'static str = "";
    const DEFINITION: &'static str = "";
}

impl From<transform::Stamp> for Time {
    fn from(stamp: transform::Stamp) -> Self {
        Self {
            sec: stamp.sec,
            nanosec: stamp.nanosec,
        }
    }
}

impl From<geometry::Vec3> for Vector3 {
    fn from(v: geometry::Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<geometry::Quaternion> for Quaternion {
    fn from(q: geometry::Quaternion) -> Self {
        Self {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}

impl From<&TransformRecord> for TransformStamped {
    fn from(record: &TransformRecord) -> Self {
        Self {
            header: Header {
                stamp: record.stamp.into(),
                frame_id: record.parent_frame.to_string(),
            },
            child_frame_id: record.child_frame.to_string(),
            transform: Transform {
                translation: record.translation.into(),
                rotation: record.rotation.into(),
            },
        }
    }
}

impl From<MecanumWheel> for WheelCommand {
    fn from(msg: MecanumWheel) -> Self {
        Self {
            vec_x: msg.vec_x,
            vec_y: msg.vec_y,
            rotation_power: msg.rotation_power,
        }
    }
}
