use crate::bridge_config::RuntimeLibrary;
use crate::bridge_error::SurfaceStep;
use crate::create_device_flags::CreateDeviceFlags;
use crate::feature_level::FeatureLevel;
use crate::result_code::ResultCode;
use crate::swap_chain_desc::ModernSwapChainDesc;

/// The legacy device/context pair produced by the interop layer.
pub struct InteropDevice<P: Platform + ?Sized> {
    pub device: P::LegacyDevice,
    pub context: P::LegacyContext,
    pub feature_level: FeatureLevel,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SurfaceFailure {
    pub step: SurfaceStep,
    pub code: ResultCode,
}

impl SurfaceFailure {
    pub fn at<E: Into<ResultCode>>(step: SurfaceStep) -> impl FnOnce(E) -> Self {
        move |error| Self {
            step,
            code: error.into(),
        }
    }
}

/// One native call per bridging stage.
///
/// Handles are plain owned values: dropping one releases it. Methods that take
/// a handle by value consume the caller's reference, which is how ownership of
/// the D3D12 device and queue is handed to the interop layer.
pub trait Platform {
    type Adapter;
    type Device;
    type Queue;
    type InteropEntry: Clone;
    type LegacyDevice;
    type LegacyContext;
    type SwapChain;
    type Window;

    /// Creates a D3D12 device on `adapter`, or on the default adapter when `None`.
    fn create_device(
        &self,
        adapter: Option<&Self::Adapter>,
        minimum_level: FeatureLevel,
    ) -> Result<Self::Device, ResultCode>;

    /// Creates a direct queue with normal priority, no flags and node mask 0.
    fn create_direct_queue(&self, device: &Self::Device) -> Result<Self::Queue, ResultCode>;

    fn resolve_interop(&self, library: RuntimeLibrary) -> Result<Self::InteropEntry, ResultCode>;

    /// `queue` is the single queue the legacy device submits to. An empty
    /// `feature_levels` lets the runtime pick its defaults.
    fn create_interop_device(
        &self,
        entry: &Self::InteropEntry,
        device: Self::Device,
        queue: Self::Queue,
        flags: CreateDeviceFlags,
        feature_levels: &[FeatureLevel],
    ) -> Result<InteropDevice<Self>, ResultCode>;

    /// Walks device → adapter → factory and creates a swap chain for `window`.
    fn create_swap_chain(
        &self,
        device: &Self::LegacyDevice,
        window: &Self::Window,
        desc: &ModernSwapChainDesc,
    ) -> Result<Self::SwapChain, SurfaceFailure>;
}
