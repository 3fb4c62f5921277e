#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SampleDesc {
    pub count: u32,
    pub quality: u32,
}

/// The fields of a `DXGI_SWAP_CHAIN_DESC` the bridge reads.
#[derive(Clone, Debug)]
pub struct LegacySwapChainDesc<W> {
    pub width: u32,
    pub height: u32,
    /// Raw `DXGI_FORMAT`.
    pub format: i32,
    pub sample_desc: SampleDesc,
    /// Raw `DXGI_USAGE` bits.
    pub buffer_usage: u32,
    pub buffer_count: u32,
    pub output_window: W,
    pub windowed: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scaling {
    Stretch,
    None,
    AspectRatioStretch,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwapEffect {
    Discard,
    Sequential,
    FlipSequential,
    FlipDiscard,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlphaMode {
    Unspecified,
    Premultiplied,
    Straight,
    Ignore,
}

/// Raw `DXGI_SWAP_CHAIN_FLAG` bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SwapChainFlags(pub u32);

impl SwapChainFlags {
    pub const ALLOW_TEARING: Self = Self(0x800);
}

/// The fields of a `DXGI_SWAP_CHAIN_DESC1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModernSwapChainDesc {
    pub width: u32,
    pub height: u32,
    pub format: i32,
    pub stereo: bool,
    pub sample_desc: SampleDesc,
    pub buffer_usage: u32,
    pub buffer_count: u32,
    pub scaling: Scaling,
    pub swap_effect: SwapEffect,
    pub alpha_mode: AlphaMode,
    pub flags: SwapChainFlags,
}

impl<W> LegacySwapChainDesc<W> {
    /// Carries over size, format, sampling, usage and buffer count. The
    /// presentation model is always flip-discard with tearing allowed, which
    /// is what a D3D12-backed device can present with.
    pub fn to_modern(&self) -> ModernSwapChainDesc {
        ModernSwapChainDesc {
            width: self.width,
            height: self.height,
            format: self.format,
            stereo: false,
            sample_desc: self.sample_desc,
            buffer_usage: self.buffer_usage,
            buffer_count: self.buffer_count,
            scaling: Scaling::Stretch,
            swap_effect: SwapEffect::FlipDiscard,
            alpha_mode: AlphaMode::Unspecified,
            flags: SwapChainFlags::ALLOW_TEARING,
        }
    }
}
