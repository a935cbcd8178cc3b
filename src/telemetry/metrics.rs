use std::collections::VecDeque;

use serde::Serialize;

use super::event::GenerationEvent;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generated: u64,
    pub total_attempts: u64,
    pub avg_attempts: f64,
    pub max_attempts: u32,
    pub suffix_fallbacks: u64,
    pub duplicates_accepted: u64,
    pub resets: u64,
    pub fingerprints_cleared: u64,
}

pub fn compute_stats(events: &VecDeque<GenerationEvent>) -> GenerationStats {
    let mut stats = GenerationStats::default();

    for event in events {
        match *event {
            GenerationEvent::Generated { attempts, used_suffix, novel } => {
                stats.generated += 1;
                stats.total_attempts += u64::from(attempts);
                stats.max_attempts = stats.max_attempts.max(attempts);
                if used_suffix {
                    stats.suffix_fallbacks += 1;
                }
                if !novel {
                    stats.duplicates_accepted += 1;
                }
            }
            GenerationEvent::Reset { cleared } => {
                stats.resets += 1;
                stats.fingerprints_cleared += cleared as u64;
            }
        }
    }

    if stats.generated > 0 {
        stats.avg_attempts = stats.total_attempts as f64 / stats.generated as f64;
    }

    stats
}
