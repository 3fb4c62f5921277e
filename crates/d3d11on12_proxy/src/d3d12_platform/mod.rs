pub mod create_swap_chain;
pub mod runtime_library;

use crate::bridge_config::RuntimeLibrary;
use crate::create_device_flags::CreateDeviceFlags;
use crate::feature_level::FeatureLevel;
use crate::platform::InteropDevice;
use crate::platform::Platform;
use crate::platform::SurfaceFailure;
use crate::result_code::ResultCode;
use crate::swap_chain_desc::ModernSwapChainDesc;
use runtime_library::InteropEntryPoint;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D::D3D_FEATURE_LEVEL;
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::Direct3D11::ID3D11DeviceContext;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::IDXGIAdapter;
use windows::Win32::Graphics::Dxgi::IDXGISwapChain;
use windows::core::Interface;

impl From<FeatureLevel> for D3D_FEATURE_LEVEL {
    fn from(level: FeatureLevel) -> Self {
        D3D_FEATURE_LEVEL(level.0 as i32)
    }
}

impl From<D3D_FEATURE_LEVEL> for FeatureLevel {
    fn from(level: D3D_FEATURE_LEVEL) -> Self {
        FeatureLevel(level.0 as u32)
    }
}

/// The real thing: D3D12 + DXGI through the `windows` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct D3D12Platform;

impl Platform for D3D12Platform {
    type Adapter = IDXGIAdapter;
    type Device = ID3D12Device;
    type Queue = ID3D12CommandQueue;
    type InteropEntry = InteropEntryPoint;
    type LegacyDevice = ID3D11Device;
    type LegacyContext = ID3D11DeviceContext;
    type SwapChain = IDXGISwapChain;
    type Window = HWND;

    fn create_device(
        &self,
        adapter: Option<&IDXGIAdapter>,
        minimum_level: FeatureLevel,
    ) -> Result<ID3D12Device, ResultCode> {
        let mut device: Option<ID3D12Device> = None;
        match adapter {
            Some(adapter) => unsafe {
                D3D12CreateDevice(adapter, minimum_level.into(), &mut device)
            }?,
            None => unsafe { D3D12CreateDevice(None, minimum_level.into(), &mut device) }?,
        }
        device.ok_or(ResultCode::E_FAIL)
    }

    fn create_direct_queue(&self, device: &ID3D12Device) -> Result<ID3D12CommandQueue, ResultCode> {
        let queue = unsafe {
            device.CreateCommandQueue(&D3D12_COMMAND_QUEUE_DESC {
                Type: D3D12_COMMAND_LIST_TYPE_DIRECT,
                Priority: D3D12_COMMAND_QUEUE_PRIORITY_NORMAL.0,
                Flags: D3D12_COMMAND_QUEUE_FLAG_NONE,
                NodeMask: 0,
            })
        }?;
        Ok(queue)
    }

    fn resolve_interop(&self, library: RuntimeLibrary) -> Result<InteropEntryPoint, ResultCode> {
        runtime_library::resolve_interop_entry(library)
    }

    fn create_interop_device(
        &self,
        entry: &InteropEntryPoint,
        device: ID3D12Device,
        queue: ID3D12CommandQueue,
        flags: CreateDeviceFlags,
        feature_levels: &[FeatureLevel],
    ) -> Result<InteropDevice<Self>, ResultCode> {
        let levels: Vec<D3D_FEATURE_LEVEL> = feature_levels.iter().map(|&l| l.into()).collect();
        let levels_ptr = if levels.is_empty() {
            std::ptr::null()
        } else {
            levels.as_ptr()
        };
        let queues = [queue.as_raw()];

        let mut device_out = std::ptr::null_mut();
        let mut context_out = std::ptr::null_mut();
        let mut chosen_level = D3D_FEATURE_LEVEL::default();
        let hr = unsafe {
            (entry.get())(
                device.as_raw(),
                flags.0,
                levels_ptr,
                levels.len() as u32,
                queues.as_ptr(),
                queues.len() as u32,
                0,
                &mut device_out,
                &mut context_out,
                &mut chosen_level,
            )
        };

        // Adopt whatever came back before looking at `hr` so nothing leaks.
        let legacy_device =
            (!device_out.is_null()).then(|| unsafe { ID3D11Device::from_raw(device_out) });
        let context = (!context_out.is_null())
            .then(|| unsafe { ID3D11DeviceContext::from_raw(context_out) });
        hr.ok()?;

        // `device` and `queue` drop on return; the interop device holds its own references.
        match (legacy_device, context) {
            (Some(device), Some(context)) => Ok(InteropDevice {
                device,
                context,
                feature_level: chosen_level.into(),
            }),
            _ => Err(ResultCode::E_FAIL),
        }
    }

    fn create_swap_chain(
        &self,
        device: &ID3D11Device,
        window: &HWND,
        desc: &ModernSwapChainDesc,
    ) -> Result<IDXGISwapChain, SurfaceFailure> {
        create_swap_chain::create_swap_chain(device, *window, desc)
    }
}
