//! Frame timestamp sources

/// Source of monotonically increasing timestamps in milliseconds
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Clock advanced by hand (headless runs and tests)
///
/// Nothing stops it from going backwards, which is how clock skew is
/// exercised.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }

    pub fn set(&mut self, ms: f64) {
        self.now = ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now
    }
}

/// Milliseconds since construction (native)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// `window.performance.now()` (browser)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: web_sys::Performance,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    /// None when the page has no window or performance timer
    pub fn new() -> Option<Self> {
        let performance = web_sys::window()?.performance()?;
        Some(Self { performance })
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now_ms(&mut self) -> f64 {
        self.performance.now()
    }
}
