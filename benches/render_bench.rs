use codeshot::{RenderConfig, Renderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;

/// Generates n lines of Go-flavored sample code.
fn generate_code(lines: usize) -> String {
  let mut code = String::new();
  for i in 0..lines {
    let _ = writeln!(code, "fmt.Println(\"This is line {i}\")");
  }
  code
}

fn bench_render(c: &mut Criterion) {
  let renderer = Renderer::new();
  if renderer.render(&RenderConfig::new("x", "go")).is_err() {
    return; // Skip if no fonts available
  }

  let mut group = c.benchmark_group("render");
  for lines in [20usize, 40, 80, 100] {
    let code = generate_code(lines);
    group.bench_function(format!("{lines}_lines"), |b| {
      let config = RenderConfig::new(code.clone(), "go").theme("dracula");
      b.iter(|| black_box(renderer.render(&config)).expect("render"));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
