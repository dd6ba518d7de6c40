#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use duo_life::duolife::DEFAULT_SOUP_MARGIN;
use duo_life::duolife::display::FrameBuffers;
use duo_life::duolife::render::{Palette, Renderer};
use duo_life::{DuoLife, DuoLifeConfig};
use rand::SeedableRng;

fn bench(label: &str, width: usize, height: usize, dual: bool, generations: u64) {
    let config = DuoLifeConfig::default()
        .width(width)
        .height(height)
        .dual_unit(dual);
    let mut life = DuoLife::with_config(config);
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    life.seed_soup(&mut rng, DEFAULT_SOUP_MARGIN.min(height / 5));

    let mut display = FrameBuffers::new(width, height);
    let mut renderer = Renderer::new(width, Palette::default());
    renderer.present_initial(&life, &mut display);

    let mut compute_ms = 0.0;
    let mut draw_ms = 0.0;
    let mut rows = 0usize;
    renderer.run(&mut life, &mut display, Some(generations), |stats| {
        compute_ms += stats.compute.as_secs_f64() * 1000.0;
        draw_ms += stats.draw.as_secs_f64() * 1000.0;
        rows += stats.rows_drawn;
    });

    println!(
        "{:<24} {:>6} gens  {:>9.3} ms/gen compute  {:>9.3} ms/gen draw  {:>7.1} rows/gen  pop={}",
        label,
        generations,
        compute_ms / generations as f64,
        draw_ms / generations as f64,
        rows as f64 / generations as f64,
        life.population()
    );
}

fn main() {
    println!("=== DuoLife Generation Benchmark ===\n");

    let sizes: &[(usize, usize, u64)] = &[(640, 480, 500), (1280, 960, 200), (4096, 4096, 20)];
    for &(width, height, generations) in sizes {
        let label = format!("{width}x{height}");
        bench(&format!("{label} single"), width, height, false, generations);
        bench(&format!("{label} dual"), width, height, true, generations);
    }
}
