use crate::reference;
use crate::utils::{assert_close, logger_with, seeded_readings};
use itertools::{iproduct, Itertools};
use templog::errors::Error;
use templog::tracker::WindowState;
use templog::TemperatureLogger;

#[test]
fn answers_match_brute_force_on_sample_feeds() {
    let feeds: [&[i64]; 4] = [
        &[5, -2, 8, 1, -3, 7, 0, 4, -1, 6],
        &[-5, -8, -2, -10, -1],
        &[10, -10, 5, -5, 8, -8, 3, -3],
        &[-10, 10, -10, 10, 0],
    ];

    for feed in feeds {
        let mut logger = logger_with(feed);

        for k in 1..=feed.len() {
            assert_eq!(
                logger.get_average(k).unwrap(),
                reference::suffix_average(feed, k)
            );
            assert_eq!(
                logger.get_max_window(k).unwrap(),
                reference::max_window(feed, k)
            );
        }
    }
}

#[test]
fn documented_examples() {
    let mut logger = logger_with(&[5, -2, 8, 1, -3, 7, 0, 4, -1, 6]);
    assert_close(logger.get_average(3).unwrap(), 3.0);
    assert_close(logger.get_average(5).unwrap(), 3.2);
    assert_close(logger.get_max_window(3).unwrap(), 11.0 / 3.0);

    let mut logger = logger_with(&[-5, -8, -2, -10, -1]);
    assert_close(logger.get_average(5).unwrap(), -5.2);
    assert_close(logger.get_max_window(3).unwrap(), -13.0 / 3.0);
}

#[test]
fn interleaved_appends_and_queries_match_brute_force() {
    for (seed, k) in iproduct!([1u64, 7, 42], [1usize, 2, 5, 17, 64]) {
        let feed = seeded_readings(seed, 400);
        let mut logger = TemperatureLogger::new();
        let mut previous_max = f64::NEG_INFINITY;

        for (i, value) in feed.iter().enumerate() {
            logger.add_reading(*value).unwrap();
            let seen = &feed[..=i];

            if seen.len() < k {
                assert_eq!(
                    logger.get_max_window(k).unwrap_err(),
                    Error::InsufficientData {
                        requested: k,
                        available: seen.len(),
                    }
                );
                continue;
            }

            let average = logger.get_average(k).unwrap();
            let max = logger.get_max_window(k).unwrap();

            assert_eq!(average, reference::suffix_average(seen, k));
            assert_eq!(max, reference::max_window(seen, k));
            assert!(max >= average, "seed {seed}, k {k}, index {i}");
            assert!(max >= previous_max, "seed {seed}, k {k}, index {i}");
            previous_max = max;
        }
    }
}

#[test]
fn late_first_query_backfills_full_history() {
    let feed = seeded_readings(3, 1_000);
    let mut early = TemperatureLogger::new();
    let mut late = logger_with(&feed[..10]);

    for value in &feed[..10] {
        early.add_reading(*value).unwrap();
    }
    early.get_max_window(10).unwrap();

    for value in &feed[10..] {
        early.add_reading(*value).unwrap();
        late.add_reading(*value).unwrap();
    }

    assert_eq!(late.window_state(10), WindowState::Untracked);
    assert_eq!(
        early.get_max_window(10).unwrap(),
        late.get_max_window(10).unwrap()
    );
    assert_eq!(late.window_state(10), WindowState::Tracked);
    assert_eq!(
        late.get_max_window(10).unwrap(),
        reference::max_window(&feed, 10)
    );
}

#[test]
fn many_tracked_lengths_stay_in_sync() {
    let feed = seeded_readings(11, 600);
    let mut logger = logger_with(&feed[..100]);
    let lengths = (1..=100).step_by(9).collect_vec();

    for k in &lengths {
        logger.get_max_window(*k).unwrap();
    }

    for (i, value) in feed.iter().enumerate().skip(100) {
        logger.add_reading(*value).unwrap();

        // Rejected readings must not disturb any tracked window.
        assert!(logger.add_reading(11).is_err());
        assert!(logger.add_reading(0.25).is_err());

        if i % 50 == 0 {
            for k in &lengths {
                assert_eq!(
                    logger.get_max_window(*k).unwrap(),
                    reference::max_window(&feed[..=i], *k)
                );
            }
        }
    }

    assert_eq!(
        logger.get_stats().tracked_windows.into_iter().collect_vec(),
        lengths
    );
}

#[test]
fn boundary_window_lengths() {
    let feed = seeded_readings(5, 250);
    let mut logger = logger_with(&feed);
    let highest = *feed.iter().max().unwrap();

    assert_eq!(logger.get_max_window(1).unwrap(), highest as f64);
    assert_eq!(
        logger.get_max_window(feed.len()).unwrap(),
        logger.get_average(feed.len()).unwrap()
    );
}

#[test]
fn repeated_queries_are_idempotent() {
    let feed = seeded_readings(9, 300);
    let mut logger = logger_with(&feed);

    let answers = (0..5)
        .map(|_| logger.get_max_window(20).unwrap())
        .collect_vec();

    assert!(answers.iter().all_equal());
}

#[test]
fn average_is_independent_of_window_tracking() {
    let feed = seeded_readings(13, 200);
    let mut tracked = logger_with(&feed);
    let untracked = logger_with(&feed);

    for k in [3, 8, 30] {
        tracked.get_max_window(k).unwrap();
    }

    for k in 1..=feed.len() {
        assert_eq!(
            tracked.get_average(k).unwrap(),
            untracked.get_average(k).unwrap()
        );
    }
}

#[test]
fn error_scenarios() {
    let mut logger = logger_with(&[1, 2, 3]);

    assert!(matches!(
        logger.add_reading(15),
        Err(Error::OutOfRange { value: 15, .. })
    ));
    assert!(matches!(
        logger.add_reading(5.5),
        Err(Error::InvalidReading { .. })
    ));
    assert!(matches!(
        logger.get_average(0),
        Err(Error::InvalidWindowSize { .. })
    ));
    assert!(matches!(
        logger.get_max_window(2.5),
        Err(Error::InvalidWindowSize { .. })
    ));
    assert_eq!(
        logger.get_max_window(10).unwrap_err(),
        Error::InsufficientData {
            requested: 10,
            available: 3,
        }
    );

    let stats = logger.get_stats();
    assert_eq!(stats.total_readings, 3);
    assert!(stats.tracked_windows.is_empty());
}

#[test]
fn stats_snapshot_after_large_feed() {
    let feed = seeded_readings(42, 10_000);
    let mut logger = TemperatureLogger::new();

    for (i, value) in feed.iter().enumerate() {
        logger.add_reading(*value).unwrap();

        if i > 0 && i % 1_000 == 0 {
            logger.get_average(i.min(100)).unwrap();
            logger.get_max_window(i.min(50)).unwrap();
        }
    }

    let stats = serde_json::to_value(logger.get_stats()).unwrap();

    assert_eq!(stats["total_readings"], 10_000);
    assert_eq!(stats["tracked_windows"], serde_json::json!([50]));
    assert_eq!(stats["min_reading"], *feed.iter().min().unwrap());
    assert_eq!(stats["max_reading"], *feed.iter().max().unwrap());
    assert_eq!(stats["latest_reading"], *feed.last().unwrap());
}
