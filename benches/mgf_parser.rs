use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mgfpeak::mgf::MgfParser;

fn generate_test_mgf(num_spectra: usize, fragments_per_spectrum: usize) -> String {
    let mut text = String::new();
    for i in 0..num_spectra {
        text.push_str("BEGIN IONS\n");
        text.push_str(&format!("TITLE=scan {} of synthetic run\n", i + 1));
        text.push_str(&format!("RTINSECONDS={:.3}\n", (i as f64) * 0.5));
        text.push_str(&format!(
            "PEPMASS={:.4} {:.1}\n",
            400.0 + (i as f64) * 0.01,
            1e6
        ));
        text.push_str("CHARGE=2+\n");
        for j in 0..fragments_per_spectrum {
            let mz = 100.0 + (j as f64 / fragments_per_spectrum as f64) * 1500.0;
            let intensity = 1000.0 + ((j * 37) % 997) as f64;
            text.push_str(&format!("{:.4} {:.2}\n", mz, intensity));
        }
        text.push_str("END IONS\n");
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("mgf_parse");

    for &num_spectra in &[100usize, 1_000] {
        let input = generate_test_mgf(num_spectra, 100);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_spectra),
            &input,
            |b, input| {
                b.iter(|| {
                    let parsed = MgfParser::new()
                        .parse(
                            Cursor::new(black_box(input.as_bytes())),
                            Some(input.len() as u64),
                        )
                        .expect("bench input is well-formed");
                    black_box(parsed)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
