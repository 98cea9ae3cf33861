//! Inference gateway - asynchronous classifier acquisition, synchronous
//! prediction.
//!
//! The lifecycle is a one-way state machine: Unloaded -> Loading ->
//! Ready or Failed, with exactly one terminal transition. The load runs on
//! one background thread which builds the classifier fully and then
//! publishes it over an mpsc channel; the UI loop observes the transition
//! by calling [`InferenceGateway::poll`] once per frame, never blocking.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{error, info, warn};

use crate::classifier::Classifier;
use crate::error::{SketchError, SketchResult};
use crate::preprocess::BinaryTensor;

/// One classification outcome, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Class label from the configured list
    pub label: String,
    /// Arg-max probability scaled to 0..=100
    pub confidence: f32,
}

/// Classifier acquisition lifecycle. The handle only exists in `Ready`,
/// which is what makes premature predictions unrepresentable.
enum LoadState {
    Unloaded,
    Loading {
        result_rx: Receiver<SketchResult<Classifier>>,
    },
    Ready {
        classifier: Classifier,
    },
    Failed {
        reason: String,
    },
}

/// Owns the classifier lifecycle and maps its outputs onto class labels.
pub struct InferenceGateway {
    labels: Vec<String>,
    state: LoadState,
}

impl InferenceGateway {
    /// Creates an idle gateway that maps output indices onto `labels`.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            state: LoadState::Unloaded,
        }
    }

    /// Spawns the background load. Never blocks; completion is observed
    /// through [`InferenceGateway::poll`]. A second call is ignored.
    pub fn begin_load(&mut self, path: PathBuf) {
        if !matches!(self.state, LoadState::Unloaded) {
            warn!("begin_load called more than once; ignoring");
            return;
        }

        info!(path = %path.display(), "loading classifier");
        let num_classes = self.labels.len();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            // The classifier is fully built before the send; the channel
            // transfer is the only publish point.
            let result = Classifier::load(&path, num_classes);
            let _ = tx.send(result);
        });

        self.state = LoadState::Loading { result_rx: rx };
    }

    /// Consumes a published load result if one has arrived and performs the
    /// single Loading -> Ready | Failed transition. Non-blocking; a no-op
    /// in every other state.
    pub fn poll(&mut self) {
        let result = match &self.state {
            LoadState::Loading { result_rx } => match result_rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => Err(SketchError::ModelLoad {
                    reason: "load thread exited without a result".to_string(),
                }),
            },
            _ => return,
        };

        match result {
            Ok(classifier) => {
                info!(classes = classifier.num_classes(), "classifier ready");
                self.state = LoadState::Ready { classifier };
            }
            Err(e) => {
                error!("classifier load failed: {e}");
                self.state = LoadState::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready { .. })
    }

    /// The permanent failure reason, once the load has failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Classifies one preprocessed drawing.
    ///
    /// Fails with [`SketchError::NotReady`] unless the gateway is Ready.
    pub fn predict(&self, tensor: &BinaryTensor) -> SketchResult<Prediction> {
        let LoadState::Ready { classifier } = &self.state else {
            return Err(SketchError::NotReady);
        };

        let probs = classifier.probabilities(tensor)?;
        let (index, probability) = probs
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| SketchError::Inference("empty distribution".to_string()))?;

        let label = self.labels.get(index).cloned().ok_or_else(|| {
            SketchError::Inference(format!("class index {index} out of range"))
        })?;
        let confidence = probability * 100.0;

        info!(%label, confidence, "prediction");
        Ok(Prediction { label, confidence })
    }
}
