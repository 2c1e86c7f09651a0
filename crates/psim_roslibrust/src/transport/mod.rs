//! Transport backends.
//!
//! Only rosbridge (via roslibrust) is provided; the broadcast layer itself
//! is transport-agnostic and tested without it.

pub mod roslibrust;
