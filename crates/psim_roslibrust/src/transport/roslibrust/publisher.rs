use std::sync::Arc;

use crate::broadcast::MessageSink;

/// Thin adapter so we can implement `MessageSink` for roslibrust
/// publishers without orphan-rule issues.
pub struct RosbridgePublisher<T: roslibrust::RosMessageType>(
    pub Arc<roslibrust::rosbridge::Publisher<T>>,
);

impl<T> MessageSink<T> for RosbridgePublisher<T>
where
    T: roslibrust::RosMessageType + Send + Sync + 'static,
{
    type Error = roslibrust::Error;

    fn publish<'a>(
        &'a self,
        msg: &'a T,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), Self::Error>> + Send + 'a>>
    {
        Box::pin(async move { self.0.publish(msg).await })
    }
}
