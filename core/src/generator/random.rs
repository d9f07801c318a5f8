use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Draws uniform coordinates and keeps the ones that are not mined yet, until enough mines are down.
///
/// Expected linear time on sparse boards, degrades as density approaches the full board. No tile is
/// kept safe, not even the first one the player clicks.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionSampler {
    seed: u64,
}

impl RejectionSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RejectionSampler {
    fn generate(self, config: GameConfig) -> MineLayout {
        if let Some(layout) = full_layout(config) {
            return layout;
        }

        let (size_x, size_y) = config.size;
        let mut layout = MineLayout::empty(config.size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut rejected = 0usize;

        while layout.mine_count() < config.mines {
            let coords = (rng.random_range(0..size_x), rng.random_range(0..size_y));
            if !layout.insert(coords) {
                rejected += 1;
            }
        }

        log::trace!(
            "Rejection sampling placed {} mines, {} draws rejected",
            layout.mine_count(),
            rejected
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..32 {
            let config = GameConfig::new((8, 5), 12).unwrap();
            let layout = RejectionSampler::new(seed).generate(config);

            assert_eq!(layout.size(), (8, 5));
            assert_eq!(layout.mine_count(), 12);
            assert_eq!(layout.mine_positions().count(), 12);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new((16, 16), 40).unwrap();

        assert_eq!(
            RejectionSampler::new(42).generate(config),
            RejectionSampler::new(42).generate(config)
        );
    }

    #[test]
    fn dense_board_leaves_one_safe_tile() {
        let config = GameConfig::new((4, 4), 15).unwrap();
        let layout = RejectionSampler::new(5).generate(config);

        assert_eq!(layout.mine_count(), 15);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn overfull_request_fills_board() {
        let config = GameConfig::new_unchecked((3, 2), 10);
        let layout = RejectionSampler::new(0).generate(config);

        assert_eq!(layout.mine_count(), 6);
    }
}
