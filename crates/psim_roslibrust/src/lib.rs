//! psim_roslibrust
//!
//! ROS-facing adapter layer built on top of roslibrust.
//! Provides the wire message mirrors and TF broadcast surface for the
//! pose simulator, while keeping simulation semantics in `psim_core`.

// Public modules
pub mod broadcast;
pub mod clock;
pub mod msgs;
pub mod transport;

// Re-export the pieces node binaries will commonly need
pub use broadcast::{MessageSink, TfBroadcaster};
pub use clock::stamp_now;
pub use transport::roslibrust::RosbridgePublisher;
