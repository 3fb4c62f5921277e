use crate::result_code::ResultCode;

pub type BridgeResult<T, E = BridgeError> = core::result::Result<T, E>;

/// Which part of the device → adapter → factory → swap chain walk failed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SurfaceStep {
    QueryDxgiDevice,
    GetAdapter,
    GetFactory,
    CreateSwapChain,
    QuerySwapChain,
}

impl std::fmt::Display for SurfaceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = match self {
            SurfaceStep::QueryDxgiDevice => "query DXGI device",
            SurfaceStep::GetAdapter => "get DXGI adapter",
            SurfaceStep::GetFactory => "get DXGI factory",
            SurfaceStep::CreateSwapChain => "create swap chain",
            SurfaceStep::QuerySwapChain => "query legacy swap chain",
        };
        f.write_str(step)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BridgeErrorKind {
    /// Malformed caller request, e.g. a surface requested without a descriptor.
    InvalidArgument,
    /// The adapter rejected every feature level in the fallback list.
    DeviceCreationFailed,
    QueueCreationFailed,
    /// `D3D11On12CreateDevice` could not be located on this system.
    InteropUnavailable,
    InteropCreationFailed,
    SurfaceCreationFailed(SurfaceStep),
}

impl std::fmt::Display for BridgeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeErrorKind::InvalidArgument => f.write_str("invalid argument"),
            BridgeErrorKind::DeviceCreationFailed => {
                f.write_str("no feature level accepted for the D3D12 device")
            }
            BridgeErrorKind::QueueCreationFailed => {
                f.write_str("failed to create D3D12 command queue")
            }
            BridgeErrorKind::InteropUnavailable => {
                f.write_str("D3D11On12CreateDevice is unavailable")
            }
            BridgeErrorKind::InteropCreationFailed => {
                f.write_str("failed to create D3D11 device on D3D12")
            }
            BridgeErrorKind::SurfaceCreationFailed(step) => {
                write!(f, "swap chain creation failed ({step})")
            }
        }
    }
}

/// A failed bridging call. The caller only ever sees [`BridgeError::code`];
/// the kind exists for diagnostics.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BridgeError {
    kind: BridgeErrorKind,
    code: ResultCode,
}

impl BridgeError {
    pub fn new(kind: BridgeErrorKind, code: ResultCode) -> Self {
        Self { kind, code }
    }

    pub fn invalid_argument() -> Self {
        Self::new(BridgeErrorKind::InvalidArgument, ResultCode::E_INVALIDARG)
    }

    pub fn interop_unavailable() -> Self {
        Self::new(BridgeErrorKind::InteropUnavailable, ResultCode::E_FAIL)
    }

    pub fn kind(&self) -> BridgeErrorKind {
        self.kind
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }
}

impl std::error::Error for BridgeError {}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. HRESULT: {}", self.kind, self.code)
    }
}

impl std::fmt::Debug for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
