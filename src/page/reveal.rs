use std::collections::HashMap;

use tracing::debug;

use crate::constants::REVEAL_THRESHOLD;

/// Id of an observed element.
pub type TargetId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Observed { delay_ms: u64 },
    Scheduled { at_ms: u64 },
    Revealed,
}

/// One-shot reveal-on-intersection.
///
/// Each target is revealed (`is-in`) once, after its own delay, the first
/// time it intersects the viewport enough. It is then unobserved for good.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f32,
    immediate: bool,
    targets: HashMap<TargetId, Phase>,
}

impl RevealObserver {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            immediate: reduced_motion,
            targets: HashMap::new(),
        }
    }

    /// Starts observing `id`. `delay` mirrors the element's `data-delay` in
    /// milliseconds; unparsable, negative or non-finite values count as zero.
    pub fn observe(&mut self, id: TargetId, delay: Option<&str>) {
        let delay_ms = delay.map_or(0, parse_delay);
        self.targets.entry(id).or_insert(Phase::Observed { delay_ms });
    }

    pub fn is_observed(&self, id: TargetId) -> bool {
        matches!(self.targets.get(&id), Some(Phase::Observed { .. }))
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        matches!(self.targets.get(&id), Some(Phase::Revealed))
    }

    /// Intersection callback for one target.
    pub fn intersect(&mut self, id: TargetId, ratio: f32, now_ms: u64) {
        let Some(phase) = self.targets.get_mut(&id) else {
            return;
        };
        if let Phase::Observed { delay_ms } = *phase {
            if ratio >= self.threshold {
                *phase = if self.immediate {
                    Phase::Revealed
                } else {
                    Phase::Scheduled { at_ms: now_ms.saturating_add(delay_ms) }
                };
                debug!(id, delay_ms, "reveal scheduled");
            }
        }
    }

    /// Reveals every scheduled target whose delay has passed and returns
    /// their ids, sorted.
    pub fn tick(&mut self, now_ms: u64) -> Vec<TargetId> {
        let mut revealed: Vec<TargetId> = self
            .targets
            .iter_mut()
            .filter_map(|(id, phase)| match *phase {
                Phase::Scheduled { at_ms } if now_ms >= at_ms => {
                    *phase = Phase::Revealed;
                    Some(*id)
                }
                _ => None,
            })
            .collect();
        revealed.sort_unstable();
        revealed
    }

    /// Class list for a target.
    pub fn class(&self, id: TargetId, base: &str) -> String {
        if self.is_revealed(id) { format!("{base} is-in") } else { base.to_string() }
    }
}

/// Fractional and exponent forms are accepted and rounded to whole
/// milliseconds. Huge values saturate.
fn parse_delay(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        Ok(ms) if ms.is_finite() && ms >= 0.0 => ms.round() as u64,
        _ => 0,
    }
}
