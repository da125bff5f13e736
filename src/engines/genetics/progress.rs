use crate::types::TickReport;

/// Notified by the driver after every completed tick
pub trait TickObserver {
    fn on_tick_complete(&mut self, generation: u64, report: &TickReport);
}

/// Observer that ignores everything
pub struct NullObserver;

impl TickObserver for NullObserver {
    fn on_tick_complete(&mut self, _generation: u64, _report: &TickReport) {}
}

/// Logs a running total every `interval` ticks
pub struct LoggingObserver {
    interval: u64,
    crossovers: usize,
    mutations: usize,
}

impl LoggingObserver {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            crossovers: 0,
            mutations: 0,
        }
    }
}

impl TickObserver for LoggingObserver {
    fn on_tick_complete(&mut self, generation: u64, report: &TickReport) {
        self.crossovers += report.crossovers;
        self.mutations += report.mutations;

        if generation % self.interval == 0 {
            log::info!(
                "Tick {}: {} crossovers, {} mutations so far",
                generation,
                self.crossovers,
                self.mutations
            );
        }
    }
}
