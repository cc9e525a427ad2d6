//! Double-buffered simulation loop state

use super::{GameOfLifeRules, Grid};

/// Owns the two grid buffers of a running simulation
///
/// Each step reads the front buffer, writes the back buffer, then swaps
/// their roles. The front buffer is what drivers render.
#[derive(Debug, Clone)]
pub struct Simulator {
    current: Grid,
    next: Grid,
    generation: usize,
    parallel: bool,
    initial_population: usize,
    peak_population: usize,
}

impl Simulator {
    /// Start a simulation from an already seeded grid
    pub fn new(initial: Grid) -> Self {
        let next = initial.clone();
        let population = initial.living_count();
        Self {
            current: initial,
            next,
            generation: 0,
            parallel: false,
            initial_population: population,
            peak_population: population,
        }
    }

    /// Shard each step's rows across the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Advance one generation and return the new state
    pub fn step(&mut self) -> &Grid {
        if self.parallel {
            GameOfLifeRules::par_evolve_into(&self.current, &mut self.next);
        } else {
            GameOfLifeRules::evolve_into(&self.current, &mut self.next);
        }
        std::mem::swap(&mut self.current, &mut self.next);

        self.generation += 1;
        self.peak_population = self.peak_population.max(self.current.living_count());
        &self.current
    }

    /// Advance `generations` steps, calling `on_frame` after each one
    pub fn run<F>(&mut self, generations: usize, mut on_frame: F)
    where
        F: FnMut(usize, &Grid),
    {
        for _ in 0..generations {
            self.step();
            on_frame(self.generation, &self.current);
        }
    }

    /// Current grid state
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Number of steps taken so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Living cells at generation 0
    pub fn initial_population(&self) -> usize {
        self.initial_population
    }

    /// Largest population seen in any generation so far
    pub fn peak_population(&self) -> usize {
        self.peak_population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns::SeedPattern;

    #[test]
    fn test_step_advances_generation() {
        let grid = Grid::from_living_cells(5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut sim = Simulator::new(grid.clone());
        assert_eq!(sim.generation(), 0);

        sim.step();
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.grid(), &grid);

        sim.step();
        assert_eq!(sim.grid(), &grid);
        assert_eq!(sim.initial_population(), 3);
        assert_eq!(sim.peak_population(), 3);
    }

    #[test]
    fn test_matches_fresh_buffer_evolution() {
        let grid = Grid::create(60, SeedPattern::GosperGun).unwrap();
        let mut sim = Simulator::new(grid.clone());
        sim.run(45, |_, _| {});

        let expected = GameOfLifeRules::evolve_generations(grid, 45);
        assert_eq!(sim.grid(), &expected);
    }

    #[test]
    fn test_gun_emits_gliders() {
        let grid = Grid::create(100, SeedPattern::GosperGun).unwrap();
        let mut sim = Simulator::new(grid);
        sim.run(60, |_, _| {});
        // the gun itself is 36 cells; two emitted gliders add to that
        assert!(sim.grid().living_count() > 36);
        assert!(sim.peak_population() >= sim.grid().living_count());
    }

    #[test]
    fn test_peak_tracks_running_maximum() {
        // an R-pentomino grows well past its initial 5 cells
        let grid = Grid::from_living_cells(40, &[(19, 20), (19, 21), (20, 19), (20, 20), (21, 20)])
            .unwrap();
        let mut sim = Simulator::new(grid);
        let mut highest = sim.grid().living_count();
        sim.run(50, |_, grid| highest = highest.max(grid.living_count()));

        assert_eq!(sim.initial_population(), 5);
        assert_eq!(sim.peak_population(), highest);
        assert!(sim.peak_population() > 5);
    }

    #[test]
    fn test_parallel_simulator_agrees() {
        let grid = Grid::random(48, 0.3).unwrap();
        let mut serial = Simulator::new(grid.clone());
        let mut parallel = Simulator::new(grid).with_parallel(true);
        assert!(parallel.is_parallel());

        for _ in 0..10 {
            serial.step();
            parallel.step();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }

    #[test]
    fn test_run_reports_each_frame() {
        let grid = Grid::create(12, SeedPattern::Glider).unwrap();
        let mut sim = Simulator::new(grid);
        let mut seen = Vec::new();
        sim.run(4, |generation, grid| seen.push((generation, grid.living_count())));
        assert_eq!(seen, vec![(1, 5), (2, 5), (3, 5), (4, 5)]);
        assert_eq!(sim.grid().living_count(), 5);
    }
}
