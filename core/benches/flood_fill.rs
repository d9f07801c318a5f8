use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minesweep_core::{Board, MineLayout};
use std::hint::black_box;

fn empty_board(size: (u8, u8)) -> Board {
    let mut board = Board::new(size.0, size.1).unwrap();
    board
        .place_mine_layout(&MineLayout::from_mine_coords(size, &[]).unwrap())
        .unwrap();
    board
}

fn bench_flood_fill(c: &mut Criterion) {
    for size in [(30, 16), (100, 100), (255, 255)] {
        c.bench_function(&format!("flood_fill/empty_{}x{}", size.0, size.1), |b| {
            b.iter_batched(
                || empty_board(size),
                |mut board| black_box(board.reveal((size.0 / 2, size.1 / 2)).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }

    c.bench_function("flood_fill/expert_seeded", |b| {
        b.iter_batched(
            || {
                let mut board = Board::new(30, 16).unwrap();
                board.place_random_mines(99, 42).unwrap();
                board
            },
            |mut board| {
                for x in 0..30 {
                    if board.reveal((x, 0)).unwrap() != minesweep_core::RevealOutcome::Revealed {
                        break;
                    }
                }
                black_box(board.exposed_count())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(flood_fill, bench_flood_fill);
criterion_main!(flood_fill);
