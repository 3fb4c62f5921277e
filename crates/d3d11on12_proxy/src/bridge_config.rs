use crate::feature_level::FeatureLevelOrder;
use std::ffi::CStr;

/// File name of the system graphics runtime that exports the interop entry point.
pub const RUNTIME_LIBRARY_NAME: &str = "d3d11.dll";
pub const INTEROP_ENTRY_POINT: &CStr = c"D3D11On12CreateDevice";

/// Whether `D3D11CreateDevice` insists on non-null device and context slots.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputPolicy {
    /// Null device or context slot fails with `E_INVALIDARG` before any work.
    #[default]
    Strict,
    /// Null slots are accepted; whatever gets created for them is released.
    Permissive,
}

/// Where the real runtime library is loaded from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RuntimeLibrary {
    /// Full path under the system directory. Loading by bare name would hand
    /// back this proxy when it is itself installed as `d3d11.dll`.
    #[default]
    SystemDirectory,
    /// Bare file name, resolved through the default DLL search order.
    SearchPath,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BridgeConfig {
    pub outputs: OutputPolicy,
    pub feature_level_order: FeatureLevelOrder,
    pub runtime_library: RuntimeLibrary,
}

impl BridgeConfig {
    pub fn with_outputs(mut self, outputs: OutputPolicy) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_feature_level_order(mut self, order: FeatureLevelOrder) -> Self {
        self.feature_level_order = order;
        self
    }

    pub fn with_runtime_library(mut self, library: RuntimeLibrary) -> Self {
        self.runtime_library = library;
        self
    }
}
