use crate::bridge_config::BridgeConfig;
use crate::bridge_config::OutputPolicy;
use crate::bridge_error::BridgeError;
use crate::bridge_error::BridgeErrorKind;
use crate::bridge_error::BridgeResult;
use crate::create_device_flags::CreateDeviceFlags;
use crate::feature_level::FeatureLevel;
use crate::platform::InteropDevice;
use crate::platform::Platform;
use crate::result_code::ResultCode;
use crate::swap_chain_desc::LegacySwapChainDesc;
use std::sync::OnceLock;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

/// Which output slots the caller passed as non-null.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outputs {
    pub device: bool,
    pub context: bool,
    pub swap_chain: bool,
}

impl Outputs {
    pub const ALL: Self = Self {
        device: true,
        context: true,
        swap_chain: true,
    };
}

pub struct DeviceRequest<'a, A> {
    pub adapter: Option<&'a A>,
    pub flags: CreateDeviceFlags,
    pub feature_levels: &'a [FeatureLevel],
}

impl<A> Clone for DeviceRequest<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for DeviceRequest<'_, A> {}

/// What a bridging call hands back. Slots the caller did not ask for are
/// `None`; their handles have already been released.
pub struct BridgedDevice<P: Platform> {
    pub device: Option<P::LegacyDevice>,
    pub context: Option<P::LegacyContext>,
    pub feature_level: FeatureLevel,
    pub swap_chain: Option<P::SwapChain>,
}

impl<P: Platform> BridgedDevice<P> {
    fn from_interop(interop: InteropDevice<P>, outputs: Outputs) -> Self {
        Self {
            device: outputs.device.then_some(interop.device),
            context: outputs.context.then_some(interop.context),
            feature_level: interop.feature_level,
            swap_chain: None,
        }
    }
}

/// Builds D3D11 devices on top of a D3D12 device and direct queue.
pub struct DeviceBridge<P: Platform> {
    platform: P,
    config: BridgeConfig,
    // Outcome of the one and only entry point lookup, failure included.
    interop: OnceLock<Option<P::InteropEntry>>,
}

impl<P: Platform> DeviceBridge<P> {
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, BridgeConfig::default())
    }

    pub fn with_config(platform: P, config: BridgeConfig) -> Self {
        Self {
            platform,
            config,
            interop: OnceLock::new(),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// `D3D11CreateDevice` semantics.
    pub fn create_legacy_device(
        &self,
        request: DeviceRequest<'_, P::Adapter>,
        outputs: Outputs,
    ) -> BridgeResult<BridgedDevice<P>> {
        if self.config.outputs == OutputPolicy::Strict && !(outputs.device && outputs.context) {
            error!(
                device = outputs.device,
                context = outputs.context,
                "Device and immediate context outputs are required."
            );
            return Err(BridgeError::invalid_argument());
        }

        let interop = self.bridge(request)?;
        Ok(BridgedDevice::from_interop(interop, outputs))
    }

    /// `D3D11CreateDeviceAndSwapChain` semantics. A descriptor without a
    /// requested swap chain is ignored.
    pub fn create_legacy_device_and_swap_chain(
        &self,
        request: DeviceRequest<'_, P::Adapter>,
        swap_chain_desc: Option<&LegacySwapChainDesc<P::Window>>,
        outputs: Outputs,
    ) -> BridgeResult<BridgedDevice<P>> {
        let surface = match (outputs.swap_chain, swap_chain_desc) {
            (true, None) => {
                error!("Swap chain requested without a swap chain description.");
                return Err(BridgeError::invalid_argument());
            }
            (true, Some(desc)) => Some(desc),
            (false, _) => None,
        };

        let interop = self.bridge(request)?;

        let swap_chain = match surface {
            Some(desc) => {
                let modern = desc.to_modern();
                debug!(
                    width = modern.width,
                    height = modern.height,
                    format = modern.format,
                    buffer_count = modern.buffer_count,
                    windowed = desc.windowed,
                    "Creating flip-discard swap chain"
                );
                // On failure `interop` drops here, releasing device and context.
                let swap_chain = self
                    .platform
                    .create_swap_chain(&interop.device, &desc.output_window, &modern)
                    .map_err(|failure| {
                        let error = BridgeError::new(
                            BridgeErrorKind::SurfaceCreationFailed(failure.step),
                            failure.code,
                        );
                        error!("{error}");
                        error
                    })?;
                Some(swap_chain)
            }
            None => None,
        };

        let mut bridged = BridgedDevice::from_interop(interop, outputs);
        bridged.swap_chain = swap_chain;
        Ok(bridged)
    }

    fn bridge(&self, request: DeviceRequest<'_, P::Adapter>) -> BridgeResult<InteropDevice<P>> {
        let device = self.create_modern_device(request.adapter)?;

        let queue = self
            .platform
            .create_direct_queue(&device)
            .map_err(|code| self.fail(BridgeErrorKind::QueueCreationFailed, code))?;

        let entry = self.interop_entry()?;

        let flags = request.flags.with_bgra_support();
        debug!(
            flags = flags.0,
            requested_levels = request.feature_levels.len(),
            "Creating D3D11 device on D3D12"
        );
        let interop = self
            .platform
            .create_interop_device(&entry, device, queue, flags, request.feature_levels)
            .map_err(|code| self.fail(BridgeErrorKind::InteropCreationFailed, code))?;

        info!(feature_level = %interop.feature_level, "Created D3D11On12 device");
        Ok(interop)
    }

    fn create_modern_device(&self, adapter: Option<&P::Adapter>) -> BridgeResult<P::Device> {
        let mut last_code = ResultCode::E_FAIL;
        for level in self.config.feature_level_order.candidates() {
            match self.platform.create_device(adapter, level) {
                Ok(device) => {
                    debug!(%level, "Created D3D12 device");
                    return Ok(device);
                }
                Err(code) => {
                    warn!(%level, %code, "D3D12 device rejected feature level");
                    last_code = code;
                }
            }
        }
        Err(self.fail(BridgeErrorKind::DeviceCreationFailed, last_code))
    }

    fn interop_entry(&self) -> BridgeResult<P::InteropEntry> {
        self.interop
            .get_or_init(|| {
                match self.platform.resolve_interop(self.config.runtime_library) {
                    Ok(entry) => {
                        debug!(library = ?self.config.runtime_library, "Resolved D3D11On12CreateDevice");
                        Some(entry)
                    }
                    Err(code) => {
                        error!(library = ?self.config.runtime_library, %code, "Failed to get D3D11On12CreateDevice function pointer.");
                        None
                    }
                }
            })
            .clone()
            .ok_or_else(BridgeError::interop_unavailable)
    }

    fn fail(&self, kind: BridgeErrorKind, code: ResultCode) -> BridgeError {
        let error = BridgeError::new(kind, code);
        error!("{error}");
        error
    }
}
