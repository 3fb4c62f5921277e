/// A native `HRESULT` value, kept platform-neutral so the bridge pipeline
/// can be driven by any [`Platform`](crate::platform::Platform).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultCode(pub i32);

impl ResultCode {
    pub const S_OK: Self = Self(0);
    pub const E_FAIL: Self = Self(0x8000_4005_u32 as i32);
    pub const E_INVALIDARG: Self = Self(0x8007_0057_u32 as i32);
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010X}", self.0 as u32)
    }
}

impl std::fmt::Debug for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResultCode({self})")
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for ResultCode {
    fn from(error: windows::core::Error) -> Self {
        Self(error.code().0)
    }
}

#[cfg(windows)]
impl From<windows::core::HRESULT> for ResultCode {
    fn from(hresult: windows::core::HRESULT) -> Self {
        Self(hresult.0)
    }
}

#[cfg(windows)]
impl From<ResultCode> for windows::core::HRESULT {
    fn from(code: ResultCode) -> Self {
        windows::core::HRESULT(code.0)
    }
}
