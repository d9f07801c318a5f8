use crate::*;
pub use random::*;
pub use shuffled::*;

mod random;
mod shuffled;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Requests that cannot leave a safe tile get a completely mined board.
///
/// [`Board`] validates its config before calling a generator, so only direct generator calls with
/// [`GameConfig::new_unchecked`] end up here.
fn full_layout(config: GameConfig) -> Option<MineLayout> {
    let total_cells = config.total_cells();
    if config.mines < total_cells {
        return None;
    }

    if config.mines > total_cells {
        log::warn!(
            "Minefield already full, generated anyway, requested {} but only fits {}",
            config.mines,
            total_cells
        );
    }
    let mut layout = MineLayout::empty(config.size);
    for x in 0..config.size.0 {
        for y in 0..config.size.1 {
            layout.insert((x, y));
        }
    }
    Some(layout)
}
