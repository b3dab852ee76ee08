use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::core::{Board, GameSnapshot, MemoryGame};
use memory_match::types::BoardSize;

/// Both positions of every pair, keyed by identity
fn pair_positions(game: &MemoryGame) -> Vec<(usize, usize)> {
    (0..game.board_size().num_pairs() as u8)
        .map(|identity| {
            let mut positions = game
                .board()
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, card)| card.identity == identity)
                .map(|(i, _)| i);
            (positions.next().unwrap(), positions.next().unwrap())
        })
        .collect()
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_hard_board", |b| {
        b.iter(|| Board::deal(black_box(BoardSize::Hard), black_box(99)))
    });
}

fn bench_flip_pair(c: &mut Criterion) {
    let probe = MemoryGame::new(BoardSize::Easy, 12345);
    let (first, second) = pair_positions(&probe)[0];

    c.bench_function("flip_match_pair", |b| {
        b.iter(|| {
            let mut game = MemoryGame::new(BoardSize::Easy, 12345);
            game.flip_card(black_box(first)).unwrap();
            game.flip_card(black_box(second)).unwrap();
            game
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let probe = MemoryGame::new(BoardSize::Hard, 12345);
    let pairs = pair_positions(&probe);

    c.bench_function("play_hard_board_to_win", |b| {
        b.iter(|| {
            let mut game = MemoryGame::new(BoardSize::Hard, 12345);
            for &(first, second) in &pairs {
                game.flip_card(first).unwrap();
                game.flip_card(second).unwrap();
            }
            assert!(game.has_won());
            game
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = MemoryGame::new(BoardSize::Hard, 12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            snap.pairs_found
        })
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_flip_pair,
    bench_full_game,
    bench_snapshot
);
criterion_main!(benches);
