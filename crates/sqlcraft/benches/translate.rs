use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlcraft::{Builder, Join, OrderBy, Statement, ValueSet};

/// SELECT with `n` columns and `n` WHERE conditions.
fn build_select(n: usize) -> Statement {
    let mut query = Statement::select_as("t", "a");
    query.set_columns((0..n).map(|i| format!("col{i}")));
    for i in 0..n {
        query.and_where(&format!("col{i}"), "=", i as i64);
    }
    query
}

/// INSERT with `n` rows of three columns.
fn build_insert(n: usize) -> Statement {
    let mut query = Statement::insert("t");
    for i in 0..n {
        let row = ValueSet::from_pairs([
            ("id", serde_json::Value::from(i as i64)),
            ("name", format!("name{i}").into()),
            ("active", true.into()),
        ])
        .unwrap();
        query.add_value_set(row);
    }
    query
}

/// Conditions nested `depth` groups deep.
fn build_nested(depth: usize) -> Statement {
    fn group(q: &mut Statement, remaining: usize) {
        q.and_where("id", ">", remaining as i64);
        if remaining > 0 {
            q.or_where_group(move |q| group(q, remaining - 1));
        }
    }
    let mut query = Statement::select("t");
    group(&mut query, depth);
    query
}

fn bench_select(c: &mut Criterion) {
    let builder = Builder::mysql();
    let mut group = c.benchmark_group("translate/select");

    for n in [1, 5, 10, 50, 100] {
        let query = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(builder.build(query).unwrap()));
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let builder = Builder::mysql();
    let mut group = c.benchmark_group("translate/insert");

    for n in [1, 10, 100, 1000] {
        let query = build_insert(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(builder.build(query).unwrap()));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let builder = Builder::mysql();
    let mut group = c.benchmark_group("translate/nested_groups");

    for depth in [0, 2, 4] {
        let query = build_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &query, |b, query| {
            b.iter(|| black_box(builder.build(query).unwrap()));
        });
    }

    group.finish();
}

fn bench_full_select(c: &mut Criterion) {
    let builder = Builder::mysql();
    let mut query = Statement::select_as("users", "u");
    query
        .set_columns(["id", "lastname", "p.website", "COUNT(id)"])
        .left_join(
            Join::with_alias("profile", "p")
                .on_key("id", "=", "user_id")
                .on_null("updated_at"),
        )
        .and_where("lastname", "=", "McTest")
        .set_group_by(["lastname"])
        .order_by(OrderBy::desc(["id"]).unwrap())
        .set_limit(50, Some(10));

    c.bench_function("translate/full_select", |b| {
        b.iter(|| black_box(builder.build(&query).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_select,
    bench_insert,
    bench_nested,
    bench_full_select
);
criterion_main!(benches);
