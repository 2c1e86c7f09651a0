use std::time::{SystemTime, UNIX_EPOCH};

use psim_core::Stamp;

/// Current wall-clock time as a message stamp.
///
/// A clock before the epoch degrades to the zero stamp rather than
/// erroring; transform consumers treat stamps as opaque.
pub fn stamp_now() -> Stamp {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Stamp::new(now.as_secs() as i32, now.subsec_nanos())
}
