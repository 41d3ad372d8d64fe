use criterion::{black_box, criterion_group, criterion_main, Criterion};

use portal_draft::cards::{CharacterRecord, Combatant};
use portal_draft::core::DraftRng;
use portal_draft::draft::Team;
use portal_draft::opponent::{OpponentStrategy, WeakBiasStrategist};
use portal_draft::roster::Roster;
use portal_draft::BattleResolver;

fn roster() -> Roster {
    [5u32, 1, 2, 9, 3]
        .into_iter()
        .map(|id| Combatant::generate(CharacterRecord::new(id, format!("C{id}"), "")))
        .collect()
}

fn bench_opponent_draft(c: &mut Criterion) {
    let strategist = WeakBiasStrategist::default();
    let roster = roster();
    let mut rng = DraftRng::new(42);

    c.bench_function("opponent_draft", |b| {
        b.iter(|| strategist.draft(black_box(&roster), &mut rng))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = BattleResolver::default();
    let roster = roster();
    let player = Team::from_members(roster.iter().take(3).cloned());
    let computer = Team::from_members(roster.iter().skip(2).cloned());
    let mut rng = DraftRng::new(42);

    c.bench_function("resolve", |b| {
        b.iter(|| resolver.resolve(black_box(&player), black_box(&computer), &mut rng))
    });
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_combatant", |b| {
        b.iter(|| Combatant::generate(CharacterRecord::new(black_box(242u32), "Mr. Meeseeks", "")))
    });
}

criterion_group!(benches, bench_opponent_draft, bench_resolve, bench_generate);
criterion_main!(benches);
