use std::cell::Cell;

/// Source of "now", in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Seconds since the macroquad window opened.
pub struct QuadClock;

impl Clock for QuadClock {
    fn now(&self) -> f64 {
        macroquad::time::get_time()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
