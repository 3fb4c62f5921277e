//! The two `d3d11.dll` entry points, served by a process-wide
//! [`DeviceBridge<D3D12Platform>`].
#![allow(non_snake_case, clippy::too_many_arguments)]

use crate::bridge_error::BridgeError;
use crate::bridge_error::BridgeResult;
use crate::create_device_flags::CreateDeviceFlags;
use crate::d3d12_platform::D3D12Platform;
use crate::device_bridge::BridgedDevice;
use crate::device_bridge::DeviceBridge;
use crate::device_bridge::DeviceRequest;
use crate::device_bridge::Outputs;
use crate::feature_level::FeatureLevel;
use crate::logging::init_logging;
use crate::swap_chain_desc::LegacySwapChainDesc;
use crate::swap_chain_desc::SampleDesc;
use std::ffi::c_void;
use std::sync::OnceLock;
use tracing::debug;
use tracing::error;
use tracing::warn;
use windows::Win32::Foundation::E_FAIL;
use windows::Win32::Foundation::HMODULE;
use windows::Win32::Foundation::HWND;
use windows::Win32::Foundation::S_OK;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Dxgi::DXGI_SWAP_CHAIN_DESC;
use windows::Win32::Graphics::Dxgi::IDXGIAdapter;
use windows::core::HRESULT;
use windows::core::Interface;

static BRIDGE: OnceLock<DeviceBridge<D3D12Platform>> = OnceLock::new();

fn bridge() -> &'static DeviceBridge<D3D12Platform> {
    BRIDGE.get_or_init(|| DeviceBridge::new(D3D12Platform))
}

#[unsafe(no_mangle)]
pub unsafe extern "system" fn D3D11CreateDevice(
    pAdapter: *mut c_void,
    DriverType: D3D_DRIVER_TYPE,
    Software: HMODULE,
    Flags: u32,
    pFeatureLevels: *const D3D_FEATURE_LEVEL,
    FeatureLevels: u32,
    SDKVersion: u32,
    ppDevice: *mut *mut c_void,
    pFeatureLevel: *mut D3D_FEATURE_LEVEL,
    ppImmediateContext: *mut *mut c_void,
) -> HRESULT {
    run("D3D11CreateDevice", || {
        init_logging();
        log_ignored_inputs(DriverType, Software, SDKVersion);

        let levels = unsafe { feature_levels(pFeatureLevels, FeatureLevels) }?;
        let request = DeviceRequest {
            adapter: unsafe { IDXGIAdapter::from_raw_borrowed(&pAdapter) },
            flags: CreateDeviceFlags(Flags),
            feature_levels: &levels,
        };
        let outputs = Outputs {
            device: !ppDevice.is_null(),
            context: !ppImmediateContext.is_null(),
            swap_chain: false,
        };

        let bridged = bridge().create_legacy_device(request, outputs)?;
        unsafe {
            write_outputs(
                bridged,
                std::ptr::null_mut(),
                ppDevice,
                pFeatureLevel,
                ppImmediateContext,
            )
        };
        Ok(())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "system" fn D3D11CreateDeviceAndSwapChain(
    pAdapter: *mut c_void,
    DriverType: D3D_DRIVER_TYPE,
    Software: HMODULE,
    Flags: u32,
    pFeatureLevels: *const D3D_FEATURE_LEVEL,
    FeatureLevels: u32,
    SDKVersion: u32,
    pSwapChainDesc: *const DXGI_SWAP_CHAIN_DESC,
    ppSwapChain: *mut *mut c_void,
    ppDevice: *mut *mut c_void,
    pFeatureLevel: *mut D3D_FEATURE_LEVEL,
    ppImmediateContext: *mut *mut c_void,
) -> HRESULT {
    run("D3D11CreateDeviceAndSwapChain", || {
        init_logging();
        log_ignored_inputs(DriverType, Software, SDKVersion);

        let levels = unsafe { feature_levels(pFeatureLevels, FeatureLevels) }?;
        let request = DeviceRequest {
            adapter: unsafe { IDXGIAdapter::from_raw_borrowed(&pAdapter) },
            flags: CreateDeviceFlags(Flags),
            feature_levels: &levels,
        };
        let swap_chain_desc = unsafe { pSwapChainDesc.as_ref() }.map(legacy_swap_chain_desc);
        let outputs = Outputs {
            device: !ppDevice.is_null(),
            context: !ppImmediateContext.is_null(),
            swap_chain: !ppSwapChain.is_null(),
        };

        let bridged =
            bridge().create_legacy_device_and_swap_chain(request, swap_chain_desc.as_ref(), outputs)?;
        unsafe {
            write_outputs(
                bridged,
                ppSwapChain,
                ppDevice,
                pFeatureLevel,
                ppImmediateContext,
            )
        };
        Ok(())
    })
}

/// Runs one entry point, turning errors and panics into an `HRESULT`.
fn run(entry_point: &'static str, work: impl FnOnce() -> BridgeResult<()>) -> HRESULT {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(work)) {
        Ok(Ok(())) => S_OK,
        Ok(Err(error)) => {
            let report = eyre::Report::new(error).wrap_err(entry_point);
            error!("{report:?}");
            error.code().into()
        }
        Err(_) => {
            error!("{entry_point} panicked");
            E_FAIL
        }
    }
}

fn log_ignored_inputs(driver_type: D3D_DRIVER_TYPE, software: HMODULE, sdk_version: u32) {
    if driver_type != D3D_DRIVER_TYPE_UNKNOWN && driver_type != D3D_DRIVER_TYPE_HARDWARE {
        warn!(
            driver_type = driver_type.0,
            "Driver type ignored, the device is always created on a hardware D3D12 adapter"
        );
    }
    debug!(
        driver_type = driver_type.0,
        software = !software.is_invalid(),
        sdk_version,
        "Ignored D3D11 creation parameters"
    );
}

unsafe fn feature_levels(
    levels: *const D3D_FEATURE_LEVEL,
    count: u32,
) -> BridgeResult<Vec<FeatureLevel>> {
    if levels.is_null() {
        if count != 0 {
            error!(count, "Feature level count given without a feature level list.");
            return Err(BridgeError::invalid_argument());
        }
        return Ok(Vec::new());
    }
    let levels = unsafe { std::slice::from_raw_parts(levels, count as usize) };
    Ok(levels.iter().map(|&level| level.into()).collect())
}

fn legacy_swap_chain_desc(desc: &DXGI_SWAP_CHAIN_DESC) -> LegacySwapChainDesc<HWND> {
    LegacySwapChainDesc {
        width: desc.BufferDesc.Width,
        height: desc.BufferDesc.Height,
        format: desc.BufferDesc.Format.0,
        sample_desc: SampleDesc {
            count: desc.SampleDesc.Count,
            quality: desc.SampleDesc.Quality,
        },
        buffer_usage: desc.BufferUsage.0,
        buffer_count: desc.BufferCount,
        output_window: desc.OutputWindow,
        windowed: desc.Windowed.as_bool(),
    }
}

/// Hands every handle in `bridged` to the caller. A slot is only filled when
/// its pointer was non-null, which is also the only case the bridge kept the
/// handle alive for.
unsafe fn write_outputs(
    bridged: BridgedDevice<D3D12Platform>,
    swap_chain_out: *mut *mut c_void,
    device_out: *mut *mut c_void,
    feature_level_out: *mut D3D_FEATURE_LEVEL,
    context_out: *mut *mut c_void,
) {
    if let Some(swap_chain) = bridged.swap_chain {
        unsafe { *swap_chain_out = swap_chain.into_raw() };
    }
    if let Some(device) = bridged.device {
        unsafe { *device_out = device.into_raw() };
    }
    if let Some(context) = bridged.context {
        unsafe { *context_out = context.into_raw() };
    }
    if !feature_level_out.is_null() {
        unsafe { *feature_level_out = bridged.feature_level.into() };
    }
}
