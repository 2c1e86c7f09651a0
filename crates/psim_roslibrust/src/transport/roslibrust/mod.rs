mod publisher;

pub use publisher::RosbridgePublisher;
