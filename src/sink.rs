use crate::error::Result;

/// Destination for posted messages.
pub trait MessageSink {
    fn emit(&self, message: &str) -> Result<()>;
}

/// Writes each message as one INFO event on the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn emit(&self, message: &str) -> Result<()> {
        tracing::info!("{}", message);
        Ok(())
    }
}
