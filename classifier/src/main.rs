use std::{env, num::NonZeroU32};

use classifier::{
    Canvas, Classifier, Clusters, Label, RunOutcome, TrainConfig, animate, field::Shade,
};
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Pixels per character of the printed field.
const RENDER_STEP: u32 = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TrainConfig::from_inputs(
        &env::var("LR").unwrap_or_default(),
        &env::var("EPOCHS").unwrap_or_default(),
        env::var("AUTO_LR").is_ok_and(|v| matches!(v.trim(), "1" | "true" | "yes")),
    );

    let rng = match env::var("SEED").ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(seed) => {
            info!("seeding with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut classifier = Classifier::new(Canvas::default(), rng)?;
    let added = classifier.scatter(&Clusters::default())?;
    info!("placed {added} random point(s)");
    println!("{}", classifier.idle_status(&config));
    println!("{}", render(&classifier));

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            warn!("received SIGINT, stopping after the current epoch");
            ctrl_c.cancel();
        }
    });

    let outcome = animate(&mut classifier, &config, &token, |report, _| {
        println!("{} | loss {:.6}", report.status(), report.loss);
    })
    .await?;

    match outcome {
        RunOutcome::Completed(status) => info!("completed: {status}"),
        RunOutcome::Stopped(status) => info!("stopped: {status}"),
    }

    println!("{}", render(&classifier));
    println!("{}", outcome.status());
    Ok(())
}

/// Draws the probability field as text, with the points on top.
///
/// `+`/`-` mark confident cells of each class, `.` the uncertain ones near the
/// boundary, `o`/`x` positive and negative points.
fn render<R: rand::Rng>(classifier: &Classifier<R>) -> String {
    let canvas = classifier.canvas();
    let step = NonZeroU32::new(RENDER_STEP).unwrap_or(NonZeroU32::MIN);
    let cols = canvas.width().div_ceil(RENDER_STEP) as usize;
    let rows = canvas.height().div_ceil(RENDER_STEP) as usize;

    let mut grid = vec![vec!['.'; cols]; rows];
    for cell in classifier.field(step).cells() {
        let (col, row) = ((cell.x / cell.size) as usize, (cell.y / cell.size) as usize);
        grid[row][col] = match cell.shade {
            Shade::Positive { alpha } if alpha > 0.05 => '+',
            Shade::Negative { alpha } if alpha > 0.03 => '-',
            _ => '.',
        };
    }

    for p in classifier.points() {
        let col = ((p.x / RENDER_STEP as f64) as usize).min(cols.saturating_sub(1));
        let row = ((p.y / RENDER_STEP as f64) as usize).min(rows.saturating_sub(1));
        grid[row][col] = match p.label {
            Label::Positive => 'o',
            Label::Negative => 'x',
        };
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
