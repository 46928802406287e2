/// Observer for the generational loop
pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, mean_diversity: f64);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, mean_diversity: f64) {
        (**self).on_generation_complete(generation, best_fitness, mean_diversity);
    }
}

/// Reports through the `log` facade
pub struct LogProgress;

impl ProgressCallback for LogProgress {
    fn on_generation_start(&mut self, generation: usize) {
        log::info!("generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, mean_diversity: f64) {
        log::info!(
            "generation {} complete: best fitness {:.4}, mean diversity {:.4}",
            generation + 1,
            best_fitness,
            mean_diversity
        );
    }
}

// For consumers driving the search from another thread
pub struct ChannelProgress {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best_fitness: f64,
        mean_diversity: f64,
    },
}

impl ChannelProgress {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgress {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, mean_diversity: f64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            mean_diversity,
        });
    }
}
