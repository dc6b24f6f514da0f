/// Decides when the next simulation tick is due for a given tick rate.
#[derive(Debug, Default)]
pub struct TickPacer {
    last_tick: Option<f64>,
}

impl TickPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when at least `1 / rate` seconds passed since the last due tick.
    /// The first call is always due.
    pub fn due(&mut self, now: f64, rate: f32) -> bool {
        if rate <= 0.0 {
            return false;
        }
        let interval = 1.0 / rate as f64;
        match self.last_tick {
            Some(last) if now - last < interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_on_interval() {
        let mut pacer = TickPacer::new();
        assert!(pacer.due(0.0, 10.0));
        assert!(!pacer.due(0.05, 10.0));
        assert!(pacer.due(0.1, 10.0));
        // Doubling the rate halves the wait.
        assert!(pacer.due(0.16, 20.0));
        assert!(!pacer.due(0.26, 5.0));
        assert!(pacer.due(0.4, 5.0));
    }

    #[test]
    fn zero_rate_never_ticks() {
        let mut pacer = TickPacer::new();
        assert!(!pacer.due(100.0, 0.0));
    }
}
