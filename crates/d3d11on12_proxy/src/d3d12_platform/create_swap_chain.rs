use crate::bridge_error::SurfaceStep;
use crate::platform::SurfaceFailure;
use crate::swap_chain_desc::AlphaMode;
use crate::swap_chain_desc::ModernSwapChainDesc;
use crate::swap_chain_desc::Scaling;
use crate::swap_chain_desc::SwapEffect;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::Interface;

// Bridged device → DXGI device → adapter → factory, then the swap chain.
pub fn create_swap_chain(
    device: &ID3D11Device,
    window: HWND,
    desc: &ModernSwapChainDesc,
) -> Result<IDXGISwapChain, SurfaceFailure> {
    let dxgi_device: IDXGIDevice = device
        .cast()
        .map_err(SurfaceFailure::at(SurfaceStep::QueryDxgiDevice))?;

    let adapter: IDXGIAdapter = unsafe { dxgi_device.GetParent() }
        .map_err(SurfaceFailure::at(SurfaceStep::GetAdapter))?;

    let factory: IDXGIFactory4 =
        unsafe { adapter.GetParent() }.map_err(SurfaceFailure::at(SurfaceStep::GetFactory))?;

    let swap_chain_desc = to_dxgi_desc(desc);
    let swap_chain: IDXGISwapChain1 = unsafe {
        factory.CreateSwapChainForHwnd(
            device,
            window,
            &swap_chain_desc,
            None, // No fullscreen desc
            None, // No restrict to output
        )
    }
    .map_err(SurfaceFailure::at(SurfaceStep::CreateSwapChain))?;

    swap_chain
        .cast()
        .map_err(SurfaceFailure::at(SurfaceStep::QuerySwapChain))
}

fn to_dxgi_desc(desc: &ModernSwapChainDesc) -> DXGI_SWAP_CHAIN_DESC1 {
    DXGI_SWAP_CHAIN_DESC1 {
        Width: desc.width,
        Height: desc.height,
        Format: DXGI_FORMAT(desc.format),
        Stereo: desc.stereo.into(),
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: desc.sample_desc.count,
            Quality: desc.sample_desc.quality,
        },
        BufferUsage: DXGI_USAGE(desc.buffer_usage),
        BufferCount: desc.buffer_count,
        Scaling: match desc.scaling {
            Scaling::Stretch => DXGI_SCALING_STRETCH,
            Scaling::None => DXGI_SCALING_NONE,
            Scaling::AspectRatioStretch => DXGI_SCALING_ASPECT_RATIO_STRETCH,
        },
        SwapEffect: match desc.swap_effect {
            SwapEffect::Discard => DXGI_SWAP_EFFECT_DISCARD,
            SwapEffect::Sequential => DXGI_SWAP_EFFECT_SEQUENTIAL,
            SwapEffect::FlipSequential => DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL,
            SwapEffect::FlipDiscard => DXGI_SWAP_EFFECT_FLIP_DISCARD,
        },
        AlphaMode: match desc.alpha_mode {
            AlphaMode::Unspecified => DXGI_ALPHA_MODE_UNSPECIFIED,
            AlphaMode::Premultiplied => DXGI_ALPHA_MODE_PREMULTIPLIED,
            AlphaMode::Straight => DXGI_ALPHA_MODE_STRAIGHT,
            AlphaMode::Ignore => DXGI_ALPHA_MODE_IGNORE,
        },
        Flags: desc.flags.0,
    }
}
