//! Classifier boundary - loads trained weights and runs the forward pass.
//!
//! Everything upstream treats this as an opaque capability: a 28x28 binary
//! image goes in, a probability distribution over the configured classes
//! comes out. The network itself is a small CNN; its architecture only has
//! to agree with the training side that produced the weights file.

use std::path::Path;

use burn::backend::ndarray::{NdArray, NdArrayDevice};
use burn::config::Config;
use burn::module::Module;
use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::pool::{MaxPool2d, MaxPool2dConfig};
use burn::nn::{Linear, LinearConfig, Relu};
use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder};
use burn::tensor::Tensor;
use burn::tensor::activation::softmax;
use burn::tensor::backend::Backend;

use crate::constants::TENSOR_SIDE;
use crate::error::{SketchError, SketchResult};
use crate::preprocess::BinaryTensor;

/// CPU inference backend; keeps the pad free of GPU requirements.
pub type InferenceBackend = NdArray<f32>;

/// Network hyperparameters. Must match the training side.
#[derive(Config, Debug)]
pub struct NetConfig {
    /// Number of output classes
    pub num_classes: usize,
}

impl NetConfig {
    /// Initializes the network with fresh weights on `device`.
    ///
    /// Size walk for the 28x28 input:
    /// conv1 (3x3, valid) -> 26, pool -> 13, conv2 -> 11, pool -> 5,
    /// flatten 32 * 5 * 5 = 800.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Net<B> {
        Net {
            conv1: Conv2dConfig::new([1, 16], [3, 3])
                .with_stride([1, 1])
                .init(device),
            pool1: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            conv2: Conv2dConfig::new([16, 32], [3, 3])
                .with_stride([1, 1])
                .init(device),
            pool2: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            fc1: LinearConfig::new(800, 128).init(device),
            fc2: LinearConfig::new(128, self.num_classes).init(device),
            activation: Relu::new(),
        }
    }
}

/// Two conv/pool blocks followed by two fully-connected layers.
#[derive(Module, Debug)]
pub struct Net<B: Backend> {
    conv1: Conv2d<B>,
    pool1: MaxPool2d,
    conv2: Conv2d<B>,
    pool2: MaxPool2d,
    fc1: Linear<B>,
    fc2: Linear<B>,
    activation: Relu,
}

impl<B: Backend> Net<B> {
    /// Forward pass: [batch, 1, 28, 28] images to [batch, classes] logits.
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let [batch_size, _, _, _] = images.dims();

        let x = self.conv1.forward(images);
        let x = self.activation.forward(x);
        let x = self.pool1.forward(x);

        let x = self.conv2.forward(x);
        let x = self.activation.forward(x);
        let x = self.pool2.forward(x);

        let [_, c, h, w] = x.dims();
        let x = x.reshape([batch_size, c * h * w]);

        let x = self.fc1.forward(x);
        let x = self.activation.forward(x);
        self.fc2.forward(x)
    }
}

/// A loaded model ready to answer [`Classifier::probabilities`] calls.
pub struct Classifier {
    model: Net<InferenceBackend>,
    device: NdArrayDevice,
    num_classes: usize,
}

impl Classifier {
    /// Loads trained weights (Named MessagePack record) from `path`.
    ///
    /// Fails with [`SketchError::ModelLoad`] when the file is missing,
    /// unreadable, or shaped for a different class count.
    pub fn load(path: &Path, num_classes: usize) -> SketchResult<Self> {
        let device = NdArrayDevice::default();
        let model = NetConfig::new(num_classes).init::<InferenceBackend>(&device);

        let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        let model = model
            .load_file(path, &recorder, &device)
            .map_err(|e| SketchError::ModelLoad {
                reason: e.to_string(),
            })?;

        Ok(Self {
            model,
            device,
            num_classes,
        })
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Softmax distribution over the configured classes for one drawing.
    pub fn probabilities(&self, tensor: &BinaryTensor) -> SketchResult<Vec<f32>> {
        let input =
            Tensor::<InferenceBackend, 1>::from_floats(tensor.to_floats().as_slice(), &self.device)
                .reshape([1, 1, TENSOR_SIDE, TENSOR_SIDE]);

        let logits = self.model.forward(input);
        let distribution = softmax(logits, 1);

        distribution
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| SketchError::Inference(format!("{e:?}")))
    }
}

/// Writes freshly initialized weights to `path` so load paths can be
/// exercised without a real training run.
#[cfg(test)]
pub(crate) fn save_fresh_weights(path: &Path, num_classes: usize) {
    let device = NdArrayDevice::default();
    let model = NetConfig::new(num_classes).init::<InferenceBackend>(&device);
    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    model.save_file(path, &recorder).unwrap();
}
