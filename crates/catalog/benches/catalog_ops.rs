//! Benchmarks for catalog lookups and queries
//!
//! Run with: cargo bench --package catalog
//!
//! The fixture is synthetic so the benchmarks need no dataset on disk.

use catalog::{Catalog, CatalogConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MOVIES: u32 = 5_000;
const USERS: u32 = 2_000;

fn build_catalog() -> Catalog {
    let mut catalog = Catalog::with_config(CatalogConfig {
        movie_capacity: 16_384,
        user_capacity: 8_192,
        tag_capacity: 8_192,
    });

    for id in 1..=MOVIES {
        let title = format!("Movie {id:05} ({})", 1950 + id % 70);
        let genres = format!("Genre{}|Genre{},{}", id % 7, id % 11, 1950 + id % 70);
        catalog.insert_movie(id, &title, &genres).expect("movie capacity");
    }

    // Every user rates a deterministic spread of movies; popular ids pick
    // up enough ratings to clear the top-query threshold
    for user in 1..=USERS {
        for k in 0..25u32 {
            let movie = (user * 31 + k * 97) % MOVIES + 1;
            let rating = ((user + k) % 9 + 1) as f32 / 2.0;
            catalog.record_rating(user, movie, rating).expect("user capacity");
        }
    }

    for id in 1..=MOVIES {
        catalog.tag_movie(id, &format!("tag{}", id % 50)).expect("tag capacity");
        if id % 3 == 0 {
            catalog.tag_movie(id, "shared").expect("tag capacity");
        }
    }

    catalog
}

fn bench_movie_lookup(c: &mut Criterion) {
    let catalog = build_catalog();

    c.bench_function("movie_lookup", |b| {
        b.iter(|| {
            let mut found = 0u32;
            for id in 1..=MOVIES {
                if catalog.movie(black_box(id)).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        })
    });
}

fn bench_prefix_query(c: &mut Criterion) {
    let catalog = build_catalog();

    c.bench_function("prefix_query", |b| {
        b.iter(|| black_box(catalog.prefix_query(black_box("Movie 01"))))
    });
}

fn bench_top_query(c: &mut Criterion) {
    let catalog = build_catalog();

    c.bench_function("top_query", |b| {
        b.iter(|| black_box(catalog.top_query(black_box(10), black_box("Genre3"))))
    });
}

fn bench_tags_query(c: &mut Criterion) {
    let catalog = build_catalog();
    let tags = vec!["shared".to_string(), "tag3".to_string()];

    c.bench_function("tags_query", |b| {
        b.iter(|| black_box(catalog.tags_query(black_box(&tags))))
    });
}

criterion_group!(
    benches,
    bench_movie_lookup,
    bench_prefix_query,
    bench_top_query,
    bench_tags_query
);
criterion_main!(benches);
