use serde::{Deserialize, Serialize};

use crate::model::metrics::Metrics;
use crate::model::world::World;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    TickBudget,
    Exhausted,
    Closed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColonyReport {
    pub id: usize,
    pub food_collected: u32,
    pub ants_alive: usize,
    pub ants_carrying: usize,
    pub pheromones: usize,
}

/// End-of-run summary printed by the binary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationReport {
    pub stop: StopReason,
    pub seed: Option<u64>,
    pub config_fingerprint: String,
    pub iterations: u64,
    pub elapsed: f32,
    pub total_food_collected: u32,
    pub food_remaining: u32,
    pub pheromones: usize,
    pub pickups: u64,
    pub deliveries: u64,
    pub avg_tick_us: u64,
    pub colonies: Vec<ColonyReport>,
}

impl SimulationReport {
    #[must_use]
    pub fn collect(world: &World, metrics: &Metrics, stop: StopReason) -> Self {
        Self {
            stop,
            seed: world.config.world.seed,
            config_fingerprint: world.config.fingerprint(),
            iterations: world.iteration,
            elapsed: world.elapsed,
            total_food_collected: world.total_food_collected(),
            food_remaining: world.food_remaining(),
            pheromones: world.pheromones.len(),
            pickups: metrics.pickups,
            deliveries: metrics.deliveries,
            avg_tick_us: metrics.average_tick().as_micros() as u64,
            colonies: world
                .colonies
                .iter()
                .map(|c| ColonyReport {
                    id: c.id,
                    food_collected: c.food_collected,
                    ants_alive: c.ants_alive,
                    ants_carrying: c.carrying_count(),
                    pheromones: world.pheromones.count_for(c.id),
                })
                .collect(),
        }
    }

    /// Multi-line plain text form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "stopped: {:?} after {} ticks ({:.1}s simulated)\n",
            self.stop, self.iterations, self.elapsed
        );
        for colony in &self.colonies {
            out.push_str(&format!(
                "colony {}: collected {} | carrying {} | trail markers {}\n",
                colony.id, colony.food_collected, colony.ants_carrying, colony.pheromones
            ));
        }
        out.push_str(&format!(
            "total collected {} | food left {} | markers {} | avg tick {}us",
            self.total_food_collected, self.food_remaining, self.pheromones, self.avg_tick_us
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;

    #[test]
    fn test_report_serializes_stop_reason() {
        let mut config = AppConfig::default();
        config.world.seed = Some(8);
        let world = World::new(config).unwrap();
        let report = SimulationReport::collect(&world, &Metrics::new(), StopReason::TickBudget);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"stop\":\"tick_budget\""));
        assert_eq!(report.colonies.len(), 2);
        assert_eq!(report.colonies[0].ants_alive, 50);
        assert!(report.render().contains("colony 1: collected 0"));
    }
}
