use crate::bridge_config::INTEROP_ENTRY_POINT;
use crate::bridge_config::RUNTIME_LIBRARY_NAME;
use crate::bridge_config::RuntimeLibrary;
use crate::result_code::ResultCode;
use std::ffi::c_void;
use tracing::debug;
use widestring::U16CString;
use widestring::U16String;
use windows::Win32::Foundation::MAX_PATH;
use windows::Win32::Graphics::Direct3D::D3D_FEATURE_LEVEL;
use windows::Win32::System::LibraryLoader::GetProcAddress;
use windows::Win32::System::LibraryLoader::LoadLibraryW;
use windows::Win32::System::SystemInformation::GetSystemDirectoryW;
use windows::core::HRESULT;
use windows::core::PCSTR;
use windows::core::PCWSTR;

/// `PFN_D3D11ON12_CREATE_DEVICE` with every COM pointer passed raw.
pub type D3D11On12CreateDeviceFn = unsafe extern "system" fn(
    device: *mut c_void,
    flags: u32,
    feature_levels: *const D3D_FEATURE_LEVEL,
    feature_level_count: u32,
    command_queues: *const *mut c_void,
    command_queue_count: u32,
    node_mask: u32,
    device_out: *mut *mut c_void,
    context_out: *mut *mut c_void,
    chosen_feature_level: *mut D3D_FEATURE_LEVEL,
) -> HRESULT;

#[derive(Clone, Copy)]
pub struct InteropEntryPoint(D3D11On12CreateDeviceFn);

impl InteropEntryPoint {
    pub fn get(self) -> D3D11On12CreateDeviceFn {
        self.0
    }
}

/// Loads the graphics runtime and looks up `D3D11On12CreateDevice`.
///
/// The module is never freed: the returned pointer is cached for the life of
/// the process.
pub fn resolve_interop_entry(library: RuntimeLibrary) -> Result<InteropEntryPoint, ResultCode> {
    let path = runtime_library_path(library)?;
    debug!(path = %path.to_string_lossy(), "Loading graphics runtime");

    let module = unsafe { LoadLibraryW(PCWSTR(path.as_ptr())) }?;
    let proc = unsafe { GetProcAddress(module, PCSTR(INTEROP_ENTRY_POINT.as_ptr().cast())) }
        .ok_or(ResultCode::E_FAIL)?;

    let entry = unsafe {
        std::mem::transmute::<unsafe extern "system" fn() -> isize, D3D11On12CreateDeviceFn>(proc)
    };
    Ok(InteropEntryPoint(entry))
}

fn runtime_library_path(library: RuntimeLibrary) -> Result<U16CString, ResultCode> {
    let path = match library {
        RuntimeLibrary::SearchPath => U16String::from_str(RUNTIME_LIBRARY_NAME),
        RuntimeLibrary::SystemDirectory => {
            let mut buffer = [0u16; MAX_PATH as usize];
            let len = unsafe { GetSystemDirectoryW(Some(&mut buffer)) } as usize;
            if len == 0 || len >= buffer.len() {
                return Err(ResultCode::E_FAIL);
            }
            let mut path = U16String::from_vec(buffer[..len].to_vec());
            path.push_str("\\");
            path.push_str(RUNTIME_LIBRARY_NAME);
            path
        }
    };
    U16CString::from_ustr(path).map_err(|_| ResultCode::E_INVALIDARG)
}
