use crate::domain::Algorithm;

/// Generation cadence presets, in frames per generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub fn all() -> [Speed; 3] {
        [Speed::Slow, Speed::Normal, Speed::Fast]
    }

    pub const fn ticks_per_generation(self) -> u32 {
        match self {
            Speed::Slow => 30,
            Speed::Normal => 10,
            Speed::Fast => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        }
    }
}

/// Start-up settings for a [`Simulation`](super::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Probability of each cell starting alive
    pub initial_live_fraction: f64,
    /// Paused is the default starting policy
    pub start_paused: bool,
    pub ticks_per_generation: u32,
    pub algorithm: Algorithm,
    /// Visible extent in cells
    pub viewport: (usize, usize),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 90,
            initial_live_fraction: 0.3,
            start_paused: true,
            ticks_per_generation: Speed::default().ticks_per_generation(),
            algorithm: Algorithm::default(),
            viewport: (120, 90),
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_live_fraction(mut self, fraction: f64) -> Self {
        self.initial_live_fraction = fraction;
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }

    pub fn with_speed(mut self, ticks_per_generation: u32) -> Self {
        self.ticks_per_generation = ticks_per_generation;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_viewport(mut self, width: usize, height: usize) -> Self {
        self.viewport = (width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_presets_are_ordered() {
        let ticks: Vec<_> = Speed::all().iter().map(|s| s.ticks_per_generation()).collect();
        assert_eq!(ticks, vec![30, 10, 2]);
    }

    #[test]
    fn test_default_starts_paused_at_normal_speed() {
        let config = SimulationConfig::default();
        assert!(config.start_paused);
        assert_eq!(config.ticks_per_generation, Speed::Normal.ticks_per_generation());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimulationConfig::default()
            .with_size(8, 6)
            .with_live_fraction(0.0)
            .with_paused(false)
            .with_speed(3)
            .with_algorithm(Algorithm::Serial)
            .with_viewport(4, 4);
        assert_eq!((config.width, config.height), (8, 6));
        assert_eq!(config.initial_live_fraction, 0.0);
        assert!(!config.start_paused);
        assert_eq!(config.ticks_per_generation, 3);
        assert_eq!(config.algorithm, Algorithm::Serial);
        assert_eq!(config.viewport, (4, 4));
    }
}
