use std::num::NonZeroUsize;

use machine_learning::{MlErr, training::History};
use trainer::{EXAMPLE_DATASET, InitKind, Session, TrainerError, TrainingConfig, train};

fn config(learning_rate: f64, iterations: usize) -> TrainingConfig {
    TrainingConfig {
        learning_rate,
        iterations: NonZeroUsize::new(iterations).unwrap(),
        ..TrainingConfig::default()
    }
}

#[test]
fn trains_the_example_dataset() {
    let report = train(config(0.1, 100), EXAMPLE_DATASET).unwrap();

    assert_eq!(report.samples, 10);
    assert_eq!(report.features, 2);
    assert_eq!(report.history.len(), 101);
    assert_eq!(report.accuracy, Some(100));

    let first = report.history.first().unwrap();
    assert_eq!(first.weights(), [0., 0., 0.]);
    assert!((first.loss() - std::f64::consts::LN_2).abs() < 1e-9);
    assert!(report.final_loss().unwrap() < first.loss());
}

#[test]
fn features_exclude_the_bias() {
    let session = Session::new(config(0.05, 1), "1,2,3,0\n4,5,6,1\n").unwrap();
    assert_eq!(session.dataset().dim(), 3);
    assert_eq!(session.params().len(), 4);

    let report = session.run().unwrap();
    assert_eq!(report.features, 3);
    assert_eq!(report.final_weights().unwrap().len(), report.features + 1);
}

#[test]
fn exports_the_history() {
    let report = train(config(0.05, 3), EXAMPLE_DATASET).unwrap();
    let csv = report.to_csv().unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "iter,loss,w0,w1,w2");
    assert_eq!(lines[1], "0,0.6931471806,0.0000000000,0.0000000000,0.0000000000");
    assert!(lines[4].starts_with("3,"));

    let parsed = History::from_csv(&csv).unwrap();
    assert_eq!(parsed.len(), report.history.len());
}

#[test]
fn seeded_random_init_is_reproducible() {
    let config = TrainingConfig {
        init: InitKind::Random,
        seed: Some(11),
        ..config(0.05, 10)
    };

    let a = Session::new(config.clone(), EXAMPLE_DATASET).unwrap();
    let b = Session::new(config.clone(), EXAMPLE_DATASET).unwrap();

    assert_eq!(a.params(), b.params());
    assert!(a.params().iter().any(|&w| w != 0.));
    assert!(a.params().iter().all(|w| w.abs() <= 0.5));
    assert_eq!(a.run().unwrap(), b.run().unwrap());
}

#[test]
fn skips_bad_rows() {
    let csv = "\
x,y,label
1.0,2.0,0
oops,1,1
3.0,4.0
5.0,6.0,1,
7.0,8.0,1
";
    let report = train(config(0.05, 1), csv).unwrap();

    assert_eq!(report.samples, 2);
    assert_eq!(report.features, 2);
}

#[test]
fn no_usable_rows() {
    let err = Session::new(TrainingConfig::default(), "a,b\n\nc")
        .err()
        .unwrap();
    assert!(matches!(err, TrainerError::Ml(MlErr::NoValidRows)));
}

#[test]
fn invalid_learning_rate() {
    let err = Session::new(config(f64::NAN, 10), EXAMPLE_DATASET)
        .err()
        .unwrap();
    assert!(matches!(err, TrainerError::InvalidConfig(_)));
}
