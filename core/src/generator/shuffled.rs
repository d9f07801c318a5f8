use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Picks distinct tile indices directly, so placement time stays bounded even on nearly full boards.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledSampler {
    seed: u64,
}

impl ShuffledSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for ShuffledSampler {
    fn generate(self, config: GameConfig) -> MineLayout {
        if let Some(layout) = full_layout(config) {
            return layout;
        }

        let size_y = usize::from(config.size.1);
        let mut layout = MineLayout::empty(config.size);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // flat indices follow the standard `[x, y]` layout of the mine mask
        for flat in index::sample(
            &mut rng,
            usize::from(config.total_cells()),
            usize::from(config.mines),
        ) {
            layout.insert(((flat / size_y) as Coord, (flat % size_y) as Coord));
        }

        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        layout
    }
}
