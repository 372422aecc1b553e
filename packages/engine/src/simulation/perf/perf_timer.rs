/// Milliseconds on a clock that only moves forward within a session.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Splits one tick into consecutive phases.
///
/// `lap_ms` returns the time since the previous lap (or since `start`),
/// `elapsed_ms` the time since `start`. `Date::now` can step backwards on
/// the web, so both clamp at zero.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    origin_ms: f64,
    last_lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        Self { origin_ms: now, last_lap_ms: now }
    }

    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = (now - self.last_lap_ms).max(0.0);
        self.last_lap_ms = now;
        lap
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.origin_ms).max(0.0)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn laps_partition_elapsed_time() {
        let mut timer = PerfTimer::start();
        std::thread::sleep(Duration::from_millis(2));
        let first = timer.lap_ms();
        let second = timer.lap_ms();

        assert!(first >= 2.0, "first lap {first}");
        assert!(second < first);
        assert!(timer.elapsed_ms() >= first + second);
    }
}
