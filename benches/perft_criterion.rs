use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::chess_types::PieceKind;
use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0",
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        expected_nodes: &[6, 264, 9467],
    },
    BenchCase {
        name: "position_5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486, 62_379],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

/// Single-position costs of the rules API on a few busy middlegames: move
/// listing, status evaluation (which scans for any legal reply), SAN for
/// every move and one full `play_move` per legal move.
fn bench_rules_api(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules_api");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(2));
    group.sample_size(20);

    for case in CASES_STANDARD.iter().skip(1) {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        let moves = game.get_player_moves(game.side_to_move);
        assert!(!moves.is_empty(), "{} should have legal moves", case.name);

        group.bench_function(BenchmarkId::new("get_player_moves", case.name), |b| {
            b.iter(|| black_box(&game).get_player_moves(game.side_to_move).len())
        });

        group.bench_function(BenchmarkId::new("get_status", case.name), |b| {
            b.iter(|| black_box(&game).get_status())
        });

        group.bench_function(BenchmarkId::new("get_san_all", case.name), |b| {
            b.iter(|| {
                moves
                    .iter()
                    .map(|mv| game.get_san(*mv).map(|san| san.len()).unwrap_or(0))
                    .sum::<usize>()
            })
        });

        group.bench_function(BenchmarkId::new("play_move_all", case.name), |b| {
            b.iter(|| {
                for mv in &moves {
                    let promotion = game.needs_promotion(*mv).then_some(PieceKind::Queen);
                    let mut child = game.clone();
                    black_box(child.play_move(*mv, promotion).expect("listed move is legal"));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_rules_api);
criterion_main!(perft_benches);
