use candle_core::Device;

use crate::core::ModelOptions;
use crate::error::{Result, SentimentError};

/// Loads a device to be used for the model.
/// If `index` is `Some(i)` it will attempt to load the specified CUDA device.
/// When `None` it defaults to CUDA device 0 if available and otherwise falls back
/// to CPU.
pub fn load_device_with(index: Option<usize>) -> Result<Device> {
    match index {
        Some(i) => Device::new_cuda(i).map_err(|e| SentimentError::Device(e.to_string())),
        None => Ok(Device::cuda_if_available(0).unwrap_or(Device::Cpu)),
    }
}

/// Request for a specific device, used by pipeline builders.
#[derive(Clone, Default)]
pub enum DeviceRequest {
    /// Use CUDA if available, otherwise CPU (default behavior).
    #[default]
    Default,
    /// Force CPU even if CUDA is available.
    Cpu,
    /// Select a specific CUDA device by index.
    Cuda(usize),
    /// Provide an already constructed device.
    Explicit(Device),
}

impl DeviceRequest {
    /// Resolve the request into an actual [`Device`].
    pub fn resolve(self) -> Result<Device> {
        match self {
            DeviceRequest::Default => load_device_with(None),
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => load_device_with(Some(i)),
            DeviceRequest::Explicit(d) => Ok(d),
        }
    }
}

/// Utility to generate a cache key combining model options and device location.
pub fn build_cache_key<O: ModelOptions>(options: &O, device: &Device) -> String {
    format!("{}-{:?}", options.cache_key(), device.location())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl ModelOptions for Named {
        fn cache_key(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn cpu_request_resolves_to_cpu() {
        let device = DeviceRequest::Cpu.resolve().unwrap();
        assert!(device.is_cpu());
    }

    #[test]
    fn cache_key_includes_device() {
        let key = build_cache_key(&Named("stars"), &Device::Cpu);
        assert_eq!(key, "stars-Cpu");
    }
}
