use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graphql_fields::{collect_requested_fields, requested_fields, FieldMap, FieldsOptions, ResolveInfo};
use graphql_fields_apollo_ext::ResolveInfoBuilder;
use std::fmt::Write as _;
use std::hint::black_box;

const USERS_ROUTE: &str = r#"
query UsersRoute {
  viewer {
    users(userId: "123", first: 25, includeInactive: true) @skip(if: false) {
      ...A
      ...D
      pageInfo {
        totalResults
      }
    }
  }
}

fragment A on UserConnection {
  edges { node { addressBook { apiType } } }
  ...B
}

fragment B on UserConnection {
  ...C
  edges { cursor }
}

fragment C on UserConnection {
  edges { cursor node { profile { displayName email } } }
}

fragment D on UserConnection {
  edges { node { proProfile { apiType } } }
  ...B
}
"#;

/// A chain of `depth` fragments, each adding a field and spreading the next
fn fragment_chain(depth: usize) -> String {
    let mut source = String::from("query { root { ...F0 } }\n");
    for i in 0..depth {
        let _ = write!(source, "fragment F{i} on T {{ field{i} nested {{ leaf{i} }}");
        if i + 1 < depth {
            let _ = write!(source, " ...F{}", i + 1);
        }
        source.push_str(" }\n");
    }
    source
}

/// `width` sibling fragments that all select the same nested object
fn overlapping_fragments(width: usize) -> String {
    let mut source = String::from("query ($flag: Boolean = true) { root {");
    for i in 0..width {
        let _ = write!(source, " ...O{i}");
    }
    source.push_str(" } }\n");
    for i in 0..width {
        let _ = writeln!(
            source,
            "fragment O{i} on T {{ shared {{ id own{i} @include(if: $flag) }} extra{i} @skip(if: false) }}"
        );
    }
    source
}

fn build_info(source: &str, path: &[&str]) -> ResolveInfo {
    let tree = apollo_parser::Parser::new(source).parse();
    ResolveInfoBuilder::new(&tree)
        .build(path)
        .expect("benchmark documents resolve")
}

fn bench_users_route(c: &mut Criterion) {
    let info = build_info(USERS_ROUTE, &["viewer"]);

    c.bench_function("flatten_users_route", |b| {
        b.iter(|| black_box(requested_fields(black_box(&info))));
    });
}

fn bench_fragment_chain(c: &mut Criterion) {
    let info = build_info(&fragment_chain(64), &["root"]);

    c.bench_function("flatten_fragment_chain_64", |b| {
        b.iter(|| black_box(requested_fields(black_box(&info))));
    });
}

fn bench_overlapping_fragments(c: &mut Criterion) {
    let info = build_info(&overlapping_fragments(256), &["root"]);

    c.bench_function("flatten_overlapping_fragments_256", |b| {
        b.iter(|| black_box(requested_fields(black_box(&info))));
    });
}

fn bench_excluded_fields(c: &mut Criterion) {
    let info = build_info(&overlapping_fragments(256), &["root"]);
    let options = FieldsOptions::excluding((0..128).map(|i| format!("own{i}")));

    c.bench_function("flatten_with_exclusions", |b| {
        b.iter_batched(
            FieldMap::new,
            |initial| black_box(collect_requested_fields(&info, initial, &options)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_build_resolve_info(c: &mut Criterion) {
    let source = overlapping_fragments(256);

    c.bench_function("build_resolve_info_overlapping_256", |b| {
        b.iter(|| black_box(build_info(black_box(&source), &["root"])));
    });
}

criterion_group!(
    benches,
    bench_users_route,
    bench_fragment_chain,
    bench_overlapping_fragments,
    bench_excluded_fields,
    bench_build_resolve_info,
);

criterion_main!(benches);
