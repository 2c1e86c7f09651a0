use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use psim_core::TransformRecord;

use crate::msgs::{TFMessage, TransformStamped};

/// Minimal async publish capability.
///
/// This is intentionally tiny so we can:
/// - unit test transform broadcasting without ROS
/// - adapt roslibrust publishers in the transport layer
pub trait MessageSink<T>: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn publish<'a>(
        &'a self,
        msg: &'a T,
    ) -> Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send + 'a>>;
}

/// TF broadcaster over any `MessageSink<TFMessage>`.
///
/// Follows the tf2 broadcaster convention: every `send_transform` call
/// publishes one `TFMessage` carrying a single stamped transform. Emission
/// is fire-and-forget; the caller decides what to do with a transport
/// error (this node logs and drops it).
pub struct TfBroadcaster<S>
where
    S: MessageSink<TFMessage>,
{
    sink: Arc<S>,
}

impl<S> TfBroadcaster<S>
where
    S: MessageSink<TFMessage>,
{
    pub fn new(sink: Arc<S>) -> Self {
        Self { sink }
    }

    /// Wrap one transform record into a TF message and publish it.
    pub async fn send_transform(&self, record: &TransformRecord) -> Result<(), S::Error> {
        let msg = TFMessage {
            transforms: vec![TransformStamped::from(record)],
        };
        self.sink.publish(&msg).await
    }

    /// Access to the underlying sink (escape hatch).
    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }
}
