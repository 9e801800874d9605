use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use quotedesk_catalog::{PageSize, Product, SearchCategory, SearchField, SortOrder, ViewParams, pipeline};

const BRANDS: [&str; 5] = ["Hanil", "Acme", "Daesung", "Kumho", "Nippon"];
const COUNTRIES: [&str; 4] = ["Korea", "China", "Japan", "Vietnam"];

fn make_products(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            let mut p = Product::new(
                format!("bench-{i}").parse().unwrap(),
                format!("Fastener {i}"),
                ((i * 7919) % 100_000).to_string(),
            );
            p.standard = format!("M{}x{}", 4 + i % 12, 10 + i % 90);
            p.brand = BRANDS[i % BRANDS.len()].to_string();
            p.country = COUNTRIES[i % COUNTRIES.len()].to_string();
            p.pieces = (i % 500) as u32 + 1;
            p
        })
        .collect()
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_view");

    for size in [1_000usize, 10_000] {
        let products = make_products(size);

        let browse = ViewParams {
            sort: SortOrder::Ascending,
            page: 3,
            ..ViewParams::default()
        };
        group.bench_with_input(BenchmarkId::new("sorted_page", size), &products, |b, products| {
            b.iter(|| black_box(pipeline::view(products, &browse)));
        });

        let search = ViewParams {
            category: SearchCategory::Field(SearchField::Brand),
            query: "kum".to_string(),
            page_size: PageSize::Unlimited,
            ..ViewParams::default()
        };
        group.bench_with_input(BenchmarkId::new("brand_search", size), &products, |b, products| {
            b.iter(|| black_box(pipeline::view(products, &search)));
        });

        let everything = ViewParams {
            query: "m8".to_string(),
            sort: SortOrder::Descending,
            ..ViewParams::default()
        };
        group.bench_with_input(BenchmarkId::new("all_fields_search", size), &products, |b, products| {
            b.iter(|| black_box(pipeline::view(products, &everything)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view);
criterion_main!(benches);
