//! Landmark frame providers

use face_metrics::LandmarkFrame;
use std::future::Future;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Landmark inference failed: {0}")]
    Inference(String),

    #[error("Landmark source disconnected")]
    SourceClosed,
}

/// Per-frame landmark source.
///
/// `estimate` is invoked under the session's inference throttle and may
/// suspend (it can be backed by an asynchronous inference call). `Ok(None)`
/// means no face was detected this cycle; provider failures are reported to
/// the scheduler, which logs them and continues on the next tick.
pub trait LandmarkProvider: Send {
    fn estimate(
        &mut self,
    ) -> impl Future<Output = Result<Option<LandmarkFrame>, ProviderError>> + Send;
}

/// Provider fed by an external producer over a bounded channel.
///
/// Each estimate drains the channel and keeps only the newest frame, so
/// frames arriving faster than the inference cadence are dropped rather
/// than buffered.
pub struct ChannelProvider {
    rx: mpsc::Receiver<LandmarkFrame>,
}

impl ChannelProvider {
    pub fn new(buffer: usize) -> (mpsc::Sender<LandmarkFrame>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, Self { rx })
    }
}

impl LandmarkProvider for ChannelProvider {
    async fn estimate(&mut self) -> Result<Option<LandmarkFrame>, ProviderError> {
        let mut latest = None;
        let mut dropped = 0usize;

        loop {
            match self.rx.try_recv() {
                Ok(frame) => {
                    if latest.is_some() {
                        dropped += 1;
                    }
                    latest = Some(frame);
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    return match latest {
                        Some(frame) => Ok(Some(frame)),
                        None => Err(ProviderError::SourceClosed),
                    };
                }
            }
        }

        if dropped > 0 {
            debug!(dropped, "dropped stale landmark frames");
        }
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_metrics::Landmark;

    fn frame(n: usize) -> LandmarkFrame {
        LandmarkFrame::new(vec![Landmark::default(); n])
    }

    #[tokio::test]
    async fn test_empty_channel_means_no_face() {
        let (_tx, mut provider) = ChannelProvider::new(8);
        assert!(provider.estimate().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_keeps_only_newest_frame() {
        let (tx, mut provider) = ChannelProvider::new(8);
        tx.send(frame(1)).await.unwrap();
        tx.send(frame(2)).await.unwrap();
        tx.send(frame(3)).await.unwrap();

        let got = provider.estimate().await.unwrap().unwrap();
        assert_eq!(got.keypoints.len(), 3);
        // Older frames were dropped, not deferred to the next tick
        assert!(provider.estimate().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disconnected_source_is_an_error() {
        let (tx, mut provider) = ChannelProvider::new(8);
        drop(tx);
        assert!(matches!(
            provider.estimate().await,
            Err(ProviderError::SourceClosed)
        ));
    }
}
