use duo_life::duolife::display::{Display, FrameBuffers};
use duo_life::duolife::render::{Palette, Renderer, WARMUP_GENERATIONS};
use duo_life::{DuoLife, DuoLifeConfig};
use rand::SeedableRng;

fn life(width: usize, height: usize) -> DuoLife {
    DuoLife::with_config(
        DuoLifeConfig::default()
            .width(width)
            .height(height)
            .dual_unit(true),
    )
}

fn assert_front_matches(life: &DuoLife, fb: &FrameBuffers, palette: Palette) {
    for y in 0..fb.height() {
        let row = fb.front_row(y);
        for (x, &pixel) in row.iter().enumerate() {
            let expected = if life.get_cell(x, y) {
                palette.live
            } else {
                palette.dead
            };
            assert_eq!(
                pixel,
                expected,
                "pixel ({x},{y}) at generation {}",
                life.generation()
            );
        }
    }
}

#[test]
fn blinker_displays_correctly_without_uploads_after_warmup() {
    let palette = Palette::default();
    let mut life = life(64, 16);
    life.load_rle(3, 1, "3o!", Some(1)).unwrap();
    let mut fb = FrameBuffers::new(64, 16);
    let mut renderer = Renderer::new(64, palette);

    assert_eq!(renderer.present_initial(&life, &mut fb), 16);
    assert_front_matches(&life, &fb, palette);

    for _ in 0..10 {
        let stats = renderer.advance_frame(&mut life, &mut fb);
        fb.wait_for_flip();
        if stats.generation < WARMUP_GENERATIONS {
            assert_eq!(stats.rows_drawn, 16);
        } else {
            assert_eq!(stats.rows_drawn, 0);
        }
        assert_front_matches(&life, &fb, palette);
    }
}

#[test]
fn soup_frames_track_the_board() {
    let palette = Palette { dead: 3, live: 7 };
    let mut life = life(128, 64);
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF00D);
    life.seed_soup(&mut rng, 12);
    let mut fb = FrameBuffers::new(128, 64);
    let mut renderer = Renderer::new(128, palette);
    renderer.present_initial(&life, &mut fb);

    let mut uploaded = 0;
    for _ in 0..40 {
        let stats = renderer.advance_frame(&mut life, &mut fb);
        fb.wait_for_flip();
        uploaded += stats.rows_drawn;
        assert_front_matches(&life, &fb, palette);
    }
    assert!(uploaded < 40 * 64, "every row uploaded every frame");
}

#[test]
fn run_reports_each_generation() {
    let mut life = life(64, 16);
    life.load_rle(2, 2, "2o$2o!", None).unwrap();
    let mut fb = FrameBuffers::new(64, 16);
    let mut renderer = Renderer::new(64, Palette::default());
    renderer.present_initial(&life, &mut fb);

    let mut rows = Vec::new();
    renderer.run(&mut life, &mut fb, Some(4), |stats| rows.push(stats.rows_drawn));

    assert_eq!(rows, vec![16, 0, 0, 0]);
    assert_eq!(life.generation(), 4);
    assert_eq!(fb.flips(), 5);
    assert_eq!(fb.rows_written(), 32);
}
