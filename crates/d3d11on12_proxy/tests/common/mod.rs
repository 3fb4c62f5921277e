use d3d11::Platform;
use d3d11::ResultCode;
use d3d11::bridge_config::RuntimeLibrary;
use d3d11::create_device_flags::CreateDeviceFlags;
use d3d11::feature_level::FeatureLevel;
use d3d11::platform::InteropDevice;
use d3d11::platform::SurfaceFailure;
use d3d11::swap_chain_desc::ModernSwapChainDesc;
use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

pub const DXGI_ERROR_UNSUPPORTED: ResultCode = ResultCode(0x887A_0004_u32 as i32);
pub const E_OUTOFMEMORY: ResultCode = ResultCode(0x8007_000E_u32 as i32);

/// Counts handles that have been created and not yet dropped.
#[derive(Clone, Default)]
pub struct Tracker {
    live: Rc<Cell<i64>>,
    created: Rc<Cell<u32>>,
}

impl Tracker {
    fn token(&self) -> Token {
        self.live.set(self.live.get() + 1);
        self.created.set(self.created.get() + 1);
        Token {
            live: self.live.clone(),
        }
    }

    pub fn live(&self) -> i64 {
        self.live.get()
    }

    pub fn created(&self) -> u32 {
        self.created.get()
    }
}

pub struct Token {
    live: Rc<Cell<i64>>,
}

impl Drop for Token {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

pub struct MockAdapter {
    /// Highest level this adapter accepts; `None` rejects everything.
    pub max_level: Option<FeatureLevel>,
}

pub struct MockDevice {
    _token: Token,
    pub level: FeatureLevel,
}

pub struct MockQueue {
    _token: Token,
}

pub struct MockLegacyDevice {
    _token: Token,
    // The interop device keeps the D3D12 objects alive.
    _device: MockDevice,
    _queue: MockQueue,
}

pub struct MockContext {
    _token: Token,
}

// Only the swap chain tests look inside.
#[allow(dead_code)]
pub struct MockSwapChain {
    _token: Token,
    pub desc: ModernSwapChainDesc,
    pub window: u32,
}

#[derive(Clone, Copy)]
pub struct MockEntry;

// Only the device tests look inside.
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteropCall {
    pub flags: CreateDeviceFlags,
    pub feature_levels: Vec<FeatureLevel>,
}

/// A scriptable driver that records every call it receives.
pub struct MockPlatform {
    pub tracker: Tracker,
    pub default_adapter: MockAdapter,
    pub queue_error: Option<ResultCode>,
    pub interop_missing: bool,
    pub interop_error: Option<ResultCode>,
    pub surface_error: Option<SurfaceFailure>,
    pub device_attempts: RefCell<Vec<FeatureLevel>>,
    pub resolve_calls: Cell<u32>,
    pub resolved_from: RefCell<Vec<RuntimeLibrary>>,
    pub interop_calls: RefCell<Vec<InteropCall>>,
    pub swap_chain_calls: Cell<u32>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            tracker: Tracker::default(),
            default_adapter: MockAdapter {
                max_level: Some(FeatureLevel::LEVEL_12_1),
            },
            queue_error: None,
            interop_missing: false,
            interop_error: None,
            surface_error: None,
            device_attempts: RefCell::new(Vec::new()),
            resolve_calls: Cell::new(0),
            resolved_from: RefCell::new(Vec::new()),
            interop_calls: RefCell::new(Vec::new()),
            swap_chain_calls: Cell::new(0),
        }
    }
}

impl MockPlatform {
    pub fn with_default_max_level(mut self, max_level: Option<FeatureLevel>) -> Self {
        self.default_adapter.max_level = max_level;
        self
    }

    pub fn live_handles(&self) -> i64 {
        self.tracker.live()
    }
}

impl Platform for MockPlatform {
    type Adapter = MockAdapter;
    type Device = MockDevice;
    type Queue = MockQueue;
    type InteropEntry = MockEntry;
    type LegacyDevice = MockLegacyDevice;
    type LegacyContext = MockContext;
    type SwapChain = MockSwapChain;
    type Window = u32;

    fn create_device(
        &self,
        adapter: Option<&MockAdapter>,
        minimum_level: FeatureLevel,
    ) -> Result<MockDevice, ResultCode> {
        self.device_attempts.borrow_mut().push(minimum_level);
        let adapter = adapter.unwrap_or(&self.default_adapter);
        match adapter.max_level {
            Some(max_level) if minimum_level <= max_level => Ok(MockDevice {
                _token: self.tracker.token(),
                level: minimum_level,
            }),
            _ => Err(DXGI_ERROR_UNSUPPORTED),
        }
    }

    fn create_direct_queue(&self, _device: &MockDevice) -> Result<MockQueue, ResultCode> {
        match self.queue_error {
            Some(code) => Err(code),
            None => Ok(MockQueue {
                _token: self.tracker.token(),
            }),
        }
    }

    fn resolve_interop(&self, library: RuntimeLibrary) -> Result<MockEntry, ResultCode> {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        self.resolved_from.borrow_mut().push(library);
        if self.interop_missing {
            Err(ResultCode(0x8007_007F_u32 as i32))
        } else {
            Ok(MockEntry)
        }
    }

    fn create_interop_device(
        &self,
        _entry: &MockEntry,
        device: MockDevice,
        queue: MockQueue,
        flags: CreateDeviceFlags,
        feature_levels: &[FeatureLevel],
    ) -> Result<InteropDevice<Self>, ResultCode> {
        self.interop_calls.borrow_mut().push(InteropCall {
            flags,
            feature_levels: feature_levels.to_vec(),
        });
        if let Some(code) = self.interop_error {
            return Err(code);
        }
        let feature_level = feature_levels
            .iter()
            .copied()
            .find(|&level| level <= device.level)
            .unwrap_or(FeatureLevel::LEVEL_11_0);
        Ok(InteropDevice {
            device: MockLegacyDevice {
                _token: self.tracker.token(),
                _device: device,
                _queue: queue,
            },
            context: MockContext {
                _token: self.tracker.token(),
            },
            feature_level,
        })
    }

    fn create_swap_chain(
        &self,
        _device: &MockLegacyDevice,
        window: &u32,
        desc: &ModernSwapChainDesc,
    ) -> Result<MockSwapChain, SurfaceFailure> {
        self.swap_chain_calls.set(self.swap_chain_calls.get() + 1);
        if let Some(failure) = self.surface_error {
            return Err(failure);
        }
        Ok(MockSwapChain {
            _token: self.tracker.token(),
            desc: *desc,
            window: *window,
        })
    }
}

pub fn init_test_logging() {
    let _ = color_eyre::install();
    let _ = tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
