use super::{Command, Direction, SimulationConfig};
use crate::domain::{Algorithm, Cell, Grid, LifeError, Pattern, patterns};

/// Simulation orchestrates the game.
/// This is the application layer: it owns the grid and is the only thing
/// that mutates it, routing input commands to the domain and advancing
/// generations on its own cadence.
pub struct Simulation {
    grid: Grid,
    algorithm: Algorithm,
    paused: bool,
    tick_counter: u32,
    ticks_per_generation: u32,
    generation: u64,
    viewport: (usize, usize),
    /// Pattern waiting for the next paint (None = paint single cells)
    pending_pattern: Option<&'static Pattern>,
}

impl Simulation {
    /// Create a simulation from start-up settings
    pub fn new(config: SimulationConfig) -> Result<Self, LifeError> {
        let grid = Grid::new(config.width, config.height, config.initial_live_fraction);
        Self::from_grid(grid, config)
    }

    /// Create a simulation around an existing grid; size and seeding
    /// settings in `config` are ignored.
    pub fn from_grid(mut grid: Grid, config: SimulationConfig) -> Result<Self, LifeError> {
        let (view_w, view_h) = config.viewport;
        grid.cover_viewport(view_w, view_h)?;
        Ok(Self {
            grid,
            algorithm: config.algorithm,
            paused: config.start_paused,
            tick_counter: 0,
            ticks_per_generation: config.ticks_per_generation.max(1),
            generation: 0,
            viewport: config.viewport,
            pending_pattern: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn ticks_per_generation(&self) -> u32 {
        self.ticks_per_generation
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn viewport(&self) -> (usize, usize) {
        self.viewport
    }

    pub fn pending_pattern(&self) -> Option<&'static Pattern> {
        self.pending_pattern
    }

    /// Update simulation by one frame.
    /// Returns true when a generation was advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }

        self.tick_counter += 1;
        if self.tick_counter < self.ticks_per_generation {
            return false;
        }

        self.grid = self.algorithm.evolve(&self.grid);
        self.tick_counter = 0;
        self.generation += 1;
        true
    }

    /// Toggle play/pause state
    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            let state = if paused { "paused" } else { "running" };
            log::info!("{state} at generation {}", self.generation);
        }
        self.paused = paused;
    }

    /// Change the cadence. The in-flight counter is kept, so if it already
    /// meets the new cadence the next running tick advances.
    pub fn set_speed(&mut self, ticks_per_generation: u32) {
        self.ticks_per_generation = ticks_per_generation.max(1);
        log::info!("speed set to {} ticks per generation", self.ticks_per_generation);
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm != algorithm {
            log::info!("evolving with the {} algorithm", algorithm.name());
        }
        self.algorithm = algorithm;
    }

    /// Move the viewport, growing storage wherever it would run out.
    /// Amounts beyond `isize::MAX` saturate; a pan the grid cannot grow to
    /// follow is rejected and changes nothing.
    pub fn pan(&mut self, direction: Direction, amount: usize) -> Result<(), LifeError> {
        let (dx, dy) = direction.delta();
        let amount = isize::try_from(amount).unwrap_or(isize::MAX);
        let (view_w, view_h) = self.viewport;
        self.grid
            .move_viewport(dx.saturating_mul(amount), dy.saturating_mul(amount), view_w, view_h)
    }

    /// Record the visible extent in cells and make sure storage backs it
    pub fn set_viewport(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        self.grid.cover_viewport(width, height)?;
        self.viewport = (width, height);
        Ok(())
    }

    /// Stamp the armed pattern at `(x, y)`, or bring that one cell to life.
    /// Painting off the grid does nothing.
    pub fn paint(&mut self, x: isize, y: isize) {
        match self.pending_pattern.take() {
            Some(pattern) => {
                pattern.stamp(&mut self.grid, x, y);
            }
            None => {
                let _ = self.grid.set(x, y, Cell::Alive);
            }
        }
    }

    /// Kill a single cell; off-grid coordinates are ignored
    pub fn erase(&mut self, x: isize, y: isize) {
        let _ = self.grid.set(x, y, Cell::Dead);
    }

    /// Select a pattern for the next paint. Unknown names leave the
    /// current selection untouched.
    pub fn arm_pattern(&mut self, name: &str) -> Result<(), LifeError> {
        let pattern = patterns::find(name)?;
        log::info!("armed pattern {}", pattern.name);
        self.pending_pattern = Some(pattern);
        Ok(())
    }

    pub fn disarm_pattern(&mut self) {
        self.pending_pattern = None;
    }

    /// Clear grid and reset generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.tick_counter = 0;
        log::info!("grid cleared");
    }

    /// Randomize grid and reset generation counter
    pub fn reseed(&mut self, live_fraction: f64) {
        self.grid.reseed(live_fraction, &mut rand::rng());
        self.generation = 0;
        self.tick_counter = 0;
        log::info!("grid reseeded with live fraction {live_fraction}");
    }

    /// Single entry point for input commands
    pub fn handle_command(&mut self, command: Command) -> Result<(), LifeError> {
        match command {
            Command::Pan(direction, amount) => self.pan(direction, amount)?,
            Command::TogglePause => self.toggle_pause(),
            Command::SetPaused(paused) => self.set_paused(paused),
            Command::SetSpeed(ticks) => self.set_speed(ticks),
            Command::ArmPattern(name) => self.arm_pattern(&name)?,
            Command::DisarmPattern => self.disarm_pattern(),
            Command::Paint(x, y) => self.paint(x, y),
            Command::Erase(x, y) => self.erase(x, y),
            Command::ResizeViewport(width, height) => self.set_viewport(width, height)?,
            Command::SetAlgorithm(algorithm) => self.set_algorithm(algorithm),
            Command::Clear => self.clear(),
            Command::Reseed(fraction) => self.reseed(fraction),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_CELLS;

    fn empty_sim(width: usize, height: usize) -> Simulation {
        let config = SimulationConfig::default()
            .with_size(width, height)
            .with_live_fraction(0.0)
            .with_viewport(width, height);
        Simulation::new(config).unwrap()
    }

    fn running_blinker(ticks_per_generation: u32) -> Simulation {
        let mut sim = empty_sim(5, 5);
        sim.set_speed(ticks_per_generation);
        sim.arm_pattern("blinker").unwrap();
        sim.paint(2, 2);
        sim.set_paused(false);
        sim
    }

    #[test]
    fn test_starting_policy_is_explicit() {
        let config = SimulationConfig::default().with_size(4, 4).with_viewport(4, 4);
        let paused = Simulation::new(config.clone()).unwrap();
        assert!(paused.is_paused());
        let running = Simulation::new(config.with_paused(false)).unwrap();
        assert!(!running.is_paused());
    }

    #[test]
    fn test_new_covers_configured_viewport() {
        let sim = Simulation::new(
            SimulationConfig::default().with_size(10, 10).with_viewport(30, 20),
        )
        .unwrap();
        assert_eq!(sim.grid().dimensions(), (30, 20));
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut sim = running_blinker(1);
        sim.set_paused(true);
        let before = sim.grid().clone();
        for _ in 0..5 {
            assert!(!sim.tick());
        }
        assert_eq!(sim.tick_counter(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_tick_advances_on_cadence() {
        let mut sim = running_blinker(3);
        assert!(!sim.tick());
        assert!(!sim.tick());
        assert_eq!(sim.tick_counter(), 2);
        assert!(sim.tick());
        assert_eq!(sim.tick_counter(), 0);
        assert_eq!(sim.generation(), 1);
        // horizontal phase
        assert!(sim.grid().get(1, 2).is_alive());
        assert!(sim.grid().get(3, 2).is_alive());
        assert!(!sim.grid().get(2, 1).is_alive());
    }

    #[test]
    fn test_pause_keeps_progress() {
        let mut sim = running_blinker(3);
        sim.tick();
        sim.tick();
        sim.toggle_pause();
        sim.tick();
        assert_eq!(sim.tick_counter(), 2);
        sim.toggle_pause();
        assert!(sim.tick());
    }

    #[test]
    fn test_speed_change_keeps_counter() {
        let mut sim = running_blinker(10);
        for _ in 0..4 {
            sim.tick();
        }
        sim.set_speed(3);
        assert_eq!(sim.tick_counter(), 4);
        // counter already past the new cadence: advances right away
        assert!(sim.tick());
        assert_eq!(sim.tick_counter(), 0);
    }

    #[test]
    fn test_zero_speed_is_clamped() {
        let mut sim = running_blinker(0);
        assert_eq!(sim.ticks_per_generation(), 1);
        assert!(sim.tick());
    }

    #[test]
    fn test_paint_without_pattern_sets_one_cell() {
        let mut sim = empty_sim(5, 5);
        sim.paint(1, 4);
        assert!(sim.grid().get(1, 4).is_alive());
        assert_eq!(sim.grid().population(), 1);

        sim.paint(5, 0);
        sim.paint(-1, 2);
        assert_eq!(sim.grid().population(), 1);
    }

    #[test]
    fn test_armed_pattern_is_consumed_once() {
        let mut sim = empty_sim(10, 10);
        sim.arm_pattern("Block").unwrap();
        assert_eq!(sim.pending_pattern().map(|p| p.name), Some("Block"));

        sim.paint(4, 4);
        assert_eq!(sim.grid().population(), 4);
        assert!(sim.pending_pattern().is_none());

        sim.paint(0, 0);
        assert_eq!(sim.grid().population(), 5);
    }

    #[test]
    fn test_rearming_replaces_pattern() {
        let mut sim = empty_sim(10, 10);
        sim.arm_pattern("Block").unwrap();
        sim.arm_pattern("Glider").unwrap();
        sim.paint(0, 0);
        assert_eq!(sim.grid().population(), 5);
    }

    #[test]
    fn test_unknown_pattern_keeps_previous() {
        let mut sim = empty_sim(10, 10);
        sim.arm_pattern("Toad").unwrap();
        let err = sim.handle_command(Command::ArmPattern("Spaceship".into()));
        assert_eq!(err, Err(LifeError::UnknownPattern("Spaceship".into())));
        assert_eq!(sim.pending_pattern().map(|p| p.name), Some("Toad"));
    }

    #[test]
    fn test_clipped_stamp_still_consumes_pattern() {
        let mut sim = empty_sim(10, 10);
        sim.arm_pattern("Glider").unwrap();
        sim.paint(9, 4);
        assert_eq!(sim.grid().population(), 1);
        assert!(sim.pending_pattern().is_none());
    }

    #[test]
    fn test_disarm_and_erase() {
        let mut sim = empty_sim(6, 6);
        sim.arm_pattern("Block").unwrap();
        sim.handle_command(Command::DisarmPattern).unwrap();
        sim.handle_command(Command::Paint(2, 2)).unwrap();
        assert_eq!(sim.grid().population(), 1);
        sim.handle_command(Command::Erase(2, 2)).unwrap();
        sim.handle_command(Command::Erase(20, 20)).unwrap();
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_pan_left_past_edge_grows_grid() {
        let mut sim = empty_sim(8, 6);
        sim.paint(0, 0);

        sim.handle_command(Command::Pan(Direction::Left, 3)).unwrap();
        assert_eq!(sim.grid().offset(), (0, 0));
        assert_eq!(sim.grid().dimensions(), (11, 6));
        // painted cell moved three columns into the viewport
        assert!(sim.grid().get_visible(3, 0).is_alive());
    }

    #[test]
    fn test_pan_right_and_down_cover_viewport() {
        let mut sim = empty_sim(8, 6);
        sim.pan(Direction::Right, 2).unwrap();
        sim.pan(Direction::Down, 1).unwrap();
        assert_eq!(sim.grid().offset(), (2, 1));
        assert_eq!(sim.grid().dimensions(), (10, 7));

        // panning back inside existing storage grows nothing
        sim.pan(Direction::Left, 2).unwrap();
        sim.pan(Direction::Up, 1).unwrap();
        assert_eq!(sim.grid().offset(), (0, 0));
        assert_eq!(sim.grid().dimensions(), (10, 7));
    }

    #[test]
    fn test_resize_viewport_grows_far_edges() {
        let mut sim = empty_sim(8, 6);
        sim.handle_command(Command::ResizeViewport(12, 6)).unwrap();
        assert_eq!(sim.viewport(), (12, 6));
        assert_eq!(sim.grid().dimensions(), (12, 6));
    }

    #[test]
    fn test_clear_and_reseed_reset_generation() {
        let mut sim = running_blinker(1);
        sim.tick();
        assert_eq!(sim.generation(), 1);

        sim.handle_command(Command::Reseed(1.0)).unwrap();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().population(), 25);

        sim.handle_command(Command::Clear).unwrap();
        assert_eq!(sim.grid().population(), 0);
        assert_eq!(sim.grid().dimensions(), (5, 5));
    }

    #[test]
    fn test_right_pan_never_grows_left_edge() {
        let mut sim = empty_sim(8, 6);
        sim.pan(Direction::Left, 3).unwrap();
        assert_eq!(sim.grid().dimensions(), (11, 6));

        for amount in [1, 5, 1 << 20] {
            let before = sim.grid().clone();
            let _ = sim.handle_command(Command::Pan(Direction::Right, amount));
            let (off_x, _) = sim.grid().offset();
            assert!(off_x >= before.offset().0, "pan by {amount} moved left");
            // nothing was prepended: column 3 still holds the same cells
            for y in 0..6 {
                assert_eq!(sim.grid().get(3, y), before.get(3, y));
            }
        }
    }

    #[test]
    fn test_oversized_pans_are_rejected_without_change() {
        let mut sim = empty_sim(8, 6);
        sim.pan(Direction::Left, 3).unwrap();
        let before = sim.grid().clone();

        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let result = sim.handle_command(Command::Pan(direction, usize::MAX));
            assert_eq!(result, Err(LifeError::GridTooLarge { max_cells: MAX_CELLS }));
            assert_eq!(sim.grid(), &before);
        }
    }

    #[test]
    fn test_oversized_viewport_is_rejected() {
        let mut sim = empty_sim(8, 6);
        assert!(sim.handle_command(Command::ResizeViewport(usize::MAX, 6)).is_err());
        assert_eq!(sim.viewport(), (8, 6));
        assert_eq!(sim.grid().dimensions(), (8, 6));
    }

    #[test]
    fn test_set_algorithm_command() {
        let mut sim = running_blinker(1);
        for algorithm in Algorithm::all() {
            sim.handle_command(Command::SetAlgorithm(algorithm)).unwrap();
            assert_eq!(sim.algorithm(), algorithm);
        }
        sim.tick();
        assert!(sim.grid().get(1, 2).is_alive());
    }
}
