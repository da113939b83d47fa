use criterion::{criterion_group, criterion_main, Criterion, black_box};
use regicide::board::Board;
use regicide::search::eval::{evaluate_tenths, EvalParams};

const PLACEMENTS: [(&str, &str); 3] = [
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    ("midgame", "r3k2r/pp3ppp/2n5/3q4/4P3/2N5/PP3PPP/R2QK2R"),
    ("endgame", "4k3/8/3p4/8/3R4/8/4P3/4K3"),
];

fn bench_eval(c: &mut Criterion) {
    let params = EvalParams::default();
    for (name, placement) in PLACEMENTS {
        let Ok(b) = Board::from_placement(placement) else { continue };
        c.bench_function(&format!("evaluate_{name}"), |ben| {
            ben.iter(|| {
                let v = evaluate_tenths(black_box(&b), &params);
                black_box(v)
            })
        });
    }
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
