use crate::engines::genetics::{MixingEngine, Population, TickObserver};
use crate::error::Result;
use crate::render::{RenderHandle, Renderer};
use crate::types::{RunSummary, TickReport};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How long `Driver::run` keeps going and how fast
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Frames to run; 0 runs until `stop` is set
    pub frames: usize,
    /// Pause after each frame
    pub interval: Duration,
    /// Checked before every frame
    pub stop: Arc<AtomicBool>,
}

impl RunOptions {
    pub fn frames(frames: usize) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_stop(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Frame loop: one mixing tick, then every member's phenotype goes to the renderer.
pub struct Driver<R: Renderer> {
    population: Population,
    engine: MixingEngine,
    renderer: R,
    handles: Vec<RenderHandle>,
}

impl<R: Renderer> Driver<R> {
    /// Spawns one render object per member, in population order
    pub fn new(population: Population, engine: MixingEngine, mut renderer: R) -> Self {
        let handles = population
            .iter()
            .map(|member| renderer.spawn(member.position()))
            .collect();

        Self {
            population,
            engine,
            renderer,
            handles,
        }
    }

    /// Advance one frame
    pub fn step(&mut self) -> Result<TickReport> {
        let report = self.engine.tick(&mut self.population);
        self.render()?;
        Ok(report)
    }

    /// Push every phenotype, changed or not, then present the frame
    pub fn render(&mut self) -> Result<()> {
        for (member, handle) in self.population.iter().zip(&self.handles) {
            self.renderer.apply_phenotype(*handle, member.phenotype());
        }
        self.renderer.present()
    }

    /// Step until the frame budget is spent or the stop flag is raised.
    /// A raised flag lets the current frame finish.
    pub fn run<O: TickObserver>(
        &mut self,
        options: &RunOptions,
        observer: &mut O,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        while options.frames == 0 || summary.frames < options.frames {
            if options.stopped() {
                log::info!("Stop requested after {} frames", summary.frames);
                break;
            }

            let report = self.step()?;
            observer.on_tick_complete(self.engine.generation(), &report);
            summary.record(&report);

            if !options.interval.is_zero() {
                thread::sleep(options.interval);
            }
        }

        Ok(summary)
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn engine(&self) -> &MixingEngine {
        &self.engine
    }

    pub fn into_parts(self) -> (Population, R) {
        (self.population, self.renderer)
    }
}
