use log::info;
use rand::Rng;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    classifier::Classifier,
    config::TrainConfig,
    error::Result,
    run::{EpochReport, Status},
};

/// How an animated run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// Every epoch ran.
    Completed(Status),
    /// The run was cancelled between two epochs.
    Stopped(Status),
}

impl RunOutcome {
    /// The status after the last epoch that ran.
    pub fn status(&self) -> &Status {
        match self {
            RunOutcome::Completed(status) | RunOutcome::Stopped(status) => status,
        }
    }
}

/// Trains `classifier` one epoch every `config.delay()`, until every epoch ran or
/// `token` is cancelled.
///
/// The classifier stays mutably borrowed for the whole run, so nothing can clear it
/// mid epoch. Cancellation is only checked between epochs.
///
/// # Arguments
/// * `classifier` - The classifier to train.
/// * `config` - The run's learning rate, epochs and pace.
/// * `token` - Stops the run when cancelled.
/// * `on_epoch` - Called after each epoch, to redraw.
///
/// # Returns
/// How the run ended, or `NoPoints` if there was nothing to train on.
pub async fn animate<R, F>(
    classifier: &mut Classifier<R>,
    config: &TrainConfig,
    token: &CancellationToken,
    mut on_epoch: F,
) -> Result<RunOutcome>
where
    R: Rng,
    F: FnMut(&EpochReport, &Classifier<R>),
{
    let mut run = classifier.start(config)?;

    let delay = config.delay();
    let mut ticks = time::interval_at(Instant::now() + delay, delay);

    info!("training {} point(s) for {} epoch(s)", classifier.points().len(), run.epochs());

    while !run.is_finished() {
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                run.stop();
                info!("training stopped after {} epoch(s)", run.completed());
                return Ok(RunOutcome::Stopped(run.status(&*classifier)));
            }
            _ = ticks.tick() => {}
        }

        if let Some(report) = run.step(classifier)? {
            on_epoch(&report, &*classifier);
        }
    }

    info!("training finished: {}", run.status(&*classifier));
    Ok(RunOutcome::Completed(run.status(&*classifier)))
}
