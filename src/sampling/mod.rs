mod curve;
mod error;
mod params;
mod sample;
mod sampler;

pub use curve::{CurveFormat, MemoryCurve};
pub use error::SamplerError;
pub use params::SamplerParams;
pub use sample::MemorySample;
pub use sampler::MemorySampler;
