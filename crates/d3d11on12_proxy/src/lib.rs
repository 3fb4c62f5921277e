//! A stand-in `d3d11.dll`.
//!
//! `D3D11CreateDevice` and `D3D11CreateDeviceAndSwapChain` are answered with a
//! D3D11On12 device: a D3D12 device and direct queue are created first and
//! the D3D11 device runs its work through that queue.
//!
//! The stage order lives in [`DeviceBridge`], which talks to the driver only
//! through the [`Platform`] trait. [`d3d12_platform::D3D12Platform`] is the
//! Windows implementation.

pub mod bridge_config;
pub mod bridge_error;
pub mod create_device_flags;
#[cfg(windows)]
pub mod d3d12_platform;
pub mod device_bridge;
#[cfg(windows)]
pub mod exports;
pub mod feature_level;
pub mod logging;
pub mod platform;
pub mod result_code;
pub mod swap_chain_desc;

pub use bridge_config::BridgeConfig;
pub use bridge_error::BridgeError;
pub use bridge_error::BridgeErrorKind;
pub use bridge_error::BridgeResult;
pub use device_bridge::BridgedDevice;
pub use device_bridge::DeviceBridge;
pub use device_bridge::DeviceRequest;
pub use device_bridge::Outputs;
pub use platform::Platform;
pub use result_code::ResultCode;
