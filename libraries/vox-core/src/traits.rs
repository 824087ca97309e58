/// Host-capability traits for Vox Engine
use crate::error::Result;
use crate::types::AudioSource;
use async_trait::async_trait;

/// Byte retrieval for audio sources
///
/// Implementers resolve an [`AudioSource`] to raw container bytes. The
/// engine treats retrieval as a single suspension point with no ordering
/// guarantees between overlapping fetches; stale completions are discarded
/// by the caller's generation counter.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Retrieve the full byte content of a source
    ///
    /// # Errors
    /// Returns an error if the source is unreachable or unreadable.
    async fn fetch(&self, source: &AudioSource) -> Result<Vec<u8>>;
}
