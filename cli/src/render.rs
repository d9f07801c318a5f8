use std::io::{self, Write};

use minesweep_core::{GameStatus, Snapshot, TileView};

pub fn tile_glyph(view: TileView) -> char {
    match view {
        TileView::Hidden => '#',
        TileView::Mine => '*',
        TileView::Count(0) => '.',
        // counts never exceed 8
        TileView::Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

pub fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "in progress",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    }
}

/// Draws rows top to bottom (`y`), columns left to right (`x`).
pub fn render_text(snapshot: &Snapshot, out: &mut impl Write) -> io::Result<()> {
    let (width, height) = snapshot.size;
    let safe_tiles = u32::from(width) * u32::from(height) - u32::from(snapshot.mine_count);
    writeln!(
        out,
        "{} | exposed {}/{} | mines {}",
        status_label(snapshot.status),
        snapshot.exposed_count,
        safe_tiles,
        snapshot.mine_count
    )?;

    for y in 0..height {
        let row: Vec<String> = (0..width)
            .map(|x| {
                let view = snapshot.view_at((x, y)).unwrap_or_default();
                tile_glyph(view).to_string()
            })
            .collect();
        writeln!(out, "{}", row.join(" "))?;
    }

    Ok(())
}

pub fn render_json(snapshot: &Snapshot, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::{Board, MineLayout};

    fn snapshot_after(size: (u8, u8), mines: &[(u8, u8)], clicks: &[(u8, u8)]) -> Snapshot {
        let mut board = Board::new(size.0, size.1).unwrap();
        board
            .place_mine_layout(&MineLayout::from_mine_coords(size, mines).unwrap())
            .unwrap();
        for &click in clicks {
            board.reveal(click).unwrap();
        }
        Snapshot::from_board(&board)
    }

    #[test]
    fn glyphs_cover_every_view() {
        assert_eq!(tile_glyph(TileView::Hidden), '#');
        assert_eq!(tile_glyph(TileView::Mine), '*');
        assert_eq!(tile_glyph(TileView::Count(0)), '.');
        assert_eq!(tile_glyph(TileView::Count(8)), '8');
    }

    #[test]
    fn renders_rows_by_y() {
        let snapshot = snapshot_after((3, 2), &[(2, 1)], &[(0, 0)]);
        let mut out = Vec::new();

        render_text(&snapshot, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "in progress | exposed 4/5 | mines 1\n. 1 #\n. 1 #\n");
    }

    #[test]
    fn json_is_one_line() {
        let snapshot = snapshot_after((2, 2), &[(0, 0)], &[(1, 1)]);
        let mut out = Vec::new();

        render_json(&snapshot, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let decoded: Snapshot = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
