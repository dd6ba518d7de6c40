#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use duo_life::duolife::display::FrameBuffers;
use duo_life::duolife::patterns::{self, DEFAULT_PATTERN};
use duo_life::duolife::render::{Palette, Renderer};
use duo_life::duolife::{DEFAULT_HEIGHT, DEFAULT_SOUP_MARGIN, DEFAULT_WIDTH};
use duo_life::{DuoLife, DuoLifeConfig};
use log::info;
use rand::SeedableRng;

const USAGE: &str = "usage: duo-life [--width N] [--height N] [--pattern NAME|soup] [--seed N] \
[--generations N] [--hold-ms N] [--single-unit] [--snapshot PATH]";
const DEFAULT_HOLD_MS: u64 = 2000;
const DEFAULT_SEED: u64 = 0x5EED_1234_ABCD_EF01;

struct MainArgs {
    config: DuoLifeConfig,
    width: usize,
    height: usize,
    pattern: String,
    seed: u64,
    generations: Option<u64>,
    hold: Duration,
    snapshot: Option<PathBuf>,
}

fn parse_args() -> Result<MainArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DuoLifeConfig::default();
    let mut out = MainArgs {
        config: DuoLifeConfig::default(),
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        pattern: DEFAULT_PATTERN.to_string(),
        seed: DEFAULT_SEED,
        generations: None,
        hold: Duration::from_millis(DEFAULT_HOLD_MS),
        snapshot: None,
    };
    let value = |i: usize, flag: &str| -> Result<&str> {
        args.get(i)
            .map(String::as_str)
            .with_context(|| format!("{flag} requires a value\n{USAGE}"))
    };
    let number = |i: usize, flag: &str| -> Result<u64> {
        value(i, flag)?
            .parse()
            .with_context(|| format!("{flag} requires a non-negative integer"))
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                out.width = number(i, "--width")? as usize;
            }
            "--height" => {
                i += 1;
                out.height = number(i, "--height")? as usize;
            }
            "--pattern" => {
                i += 1;
                out.pattern = value(i, "--pattern")?.to_string();
            }
            "--seed" => {
                i += 1;
                out.seed = number(i, "--seed")?;
            }
            "--generations" => {
                i += 1;
                out.generations = Some(number(i, "--generations")?);
            }
            "--hold-ms" => {
                i += 1;
                out.hold = Duration::from_millis(number(i, "--hold-ms")?);
            }
            "--single-unit" => {
                config = config.dual_unit(false);
            }
            "--snapshot" => {
                i += 1;
                out.snapshot = Some(PathBuf::from(value(i, "--snapshot")?));
            }
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }

    if out.width == 0 || out.height < duo_life::duolife::MIN_HEIGHT {
        bail!(
            "board must be at least 1x{} cells",
            duo_life::duolife::MIN_HEIGHT
        );
    }
    out.config = config.width(out.width).height(out.height);
    Ok(out)
}

fn load_initial(life: &mut DuoLife, args: &MainArgs) -> Result<()> {
    if args.pattern.eq_ignore_ascii_case("soup") {
        let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
        life.seed_soup(&mut rng, DEFAULT_SOUP_MARGIN);
        return Ok(());
    }
    let Some(pattern) = patterns::find(&args.pattern) else {
        let names: Vec<&str> = patterns::PATTERNS.iter().map(|p| p.name).collect();
        bail!(
            "unknown pattern {:?} (expected soup or one of {})",
            args.pattern,
            names.join(", ")
        );
    };
    life.load_pattern(pattern)
        .with_context(|| format!("built-in pattern {} is malformed", pattern.name))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let mut life = DuoLife::with_config(args.config.clone());
    load_initial(&mut life, &args)?;
    info!(
        "{}x{} board, pattern {}, population {}, {} unit(s)",
        life.width(),
        life.height(),
        args.pattern,
        life.population(),
        if life.is_dual_unit() { 2 } else { 1 }
    );

    let mut display = FrameBuffers::new(args.width, args.height);
    let palette = Palette::default();
    let mut renderer = Renderer::new(args.width, palette);
    renderer.present_initial(&life, &mut display);
    std::thread::sleep(args.hold);

    renderer.run(&mut life, &mut display, args.generations, |stats| {
        info!(
            "Gen {} Compute {:.2}ms, draw {:.2}ms, {} rows",
            stats.generation,
            stats.compute.as_secs_f64() * 1000.0,
            stats.draw.as_secs_f64() * 1000.0,
            stats.rows_drawn
        );
    });

    info!(
        "stopped after {} generations, population {}, {} rows uploaded",
        life.generation(),
        life.population(),
        display.rows_written()
    );

    if let Some(path) = &args.snapshot {
        let file = File::create(path)
            .with_context(|| format!("failed to create snapshot {}", path.display()))?;
        display
            .write_pgm(BufWriter::new(file), palette.live)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}
