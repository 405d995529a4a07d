use common::games::tictactoe::{Mark, Outcome, empty_board, evaluate, select_move};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_select_move_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_empty_board", |b| {
        b.iter(|| select_move(black_box(empty_board()), Mark::O));
    });
}

fn bench_select_move_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_midgame", |b| {
        let mut board = empty_board();
        for (index, mark) in [(0, Mark::X), (4, Mark::O), (8, Mark::X)] {
            board[index] = mark;
        }
        b.iter(|| select_move(black_box(board), Mark::O));
    });
}

fn bench_self_play_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_self_play", |b| {
        b.iter(|| {
            let mut board = empty_board();
            let mut current_mark = Mark::X;
            while evaluate(&board) == Outcome::Ongoing {
                match select_move(board, current_mark) {
                    Some(index) => board[index] = current_mark,
                    None => break,
                }
                current_mark = if current_mark == Mark::X { Mark::O } else { Mark::X };
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_select_move_empty_board,
    bench_select_move_mid_game,
    bench_self_play_game
);
criterion_main!(benches);
