use super::evolution_engine::ProgressCallback;

/// Reports progress through the `log` facade
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::info!("Generation {} starting...", generation + 1);
    }

    fn on_member_evaluated(&mut self, member: usize, total: usize, accuracy: f64) {
        log::debug!("  Evaluated {}/{} members (accuracy {:.3})", member, total, accuracy);
    }

    fn on_generation_complete(&mut self, generation: usize, best_accuracy: f64, next_population: usize) {
        log::info!(
            "Generation {} complete. Best accuracy: {:.4}, next population: {}",
            generation + 1,
            best_accuracy,
            next_population
        );
    }
}

// For callers driving the loop from another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    MemberEvaluated { current: usize, total: usize, accuracy: f64 },
    GenerationComplete { generation: usize, best_accuracy: f64, next_population: usize },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_member_evaluated(&mut self, member: usize, total: usize, accuracy: f64) {
        let _ = self.sender.send(ProgressMessage::MemberEvaluated {
            current: member,
            total,
            accuracy,
        });
    }

    fn on_generation_complete(&mut self, generation: usize, best_accuracy: f64, next_population: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_accuracy,
            next_population,
        });
    }
}
