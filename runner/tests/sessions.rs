use std::io::Write;

use anyhow::Result;
use game_core::{Config, Phase};
use runner::{load_config, run_session};

#[test]
fn sessions_are_reproducible_per_seed() -> Result<()> {
    for seed in [1, 7, 0xDEAD_BEEF] {
        let first = run_session(seed, 3_000, &Config::default())?;
        let second = run_session(seed, 3_000, &Config::default())?;
        assert_eq!(first, second, "seed={seed:#x}");
        assert!(first.ticks > 0 && first.ticks <= 3_000, "seed={seed:#x}");
        assert!(first.frame_bytes > 0, "seed={seed:#x}");
    }
    Ok(())
}

#[test]
fn session_reports_are_consistent() -> Result<()> {
    let report = run_session(42, 6_000, &Config::default())?;

    assert!(report.lives <= 5);
    assert!(report.level >= 1 && report.level <= report.score / 1000 + 1);
    assert!(report.hud_updates >= 2, "title and start are always reported");
    match report.phase {
        Phase::Over => assert_eq!(report.lives, 0),
        Phase::Playing => assert_eq!(report.ticks, 6_000),
        other => panic!("unexpected final phase {other:?}"),
    }
    Ok(())
}

#[test]
fn pilot_destroys_asteroids() -> Result<()> {
    let report = run_session(3, 3_000, &Config::default())?;
    assert!(report.asteroids_destroyed > 0);
    assert!(report.score > 0);
    Ok(())
}

#[test]
fn zero_ticks_rejected() {
    assert!(run_session(1, 0, &Config::default()).is_err());
}

#[test]
fn invalid_config_rejected() {
    let config = Config {
        powerup_chance: 2.0,
        ..Config::default()
    };
    let err = run_session(1, 100, &config).unwrap_err();
    assert!(format!("{err:#}").contains("powerup_chance"));
}

#[test]
fn config_file_overrides_defaults() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "starting_lives = 1")?;
    writeln!(file, "max_lives = 1")?;

    let config = load_config(Some(file.path()))?;
    assert_eq!(config.starting_lives, 1);

    let report = run_session(9, 18_000, &config)?;
    assert!(report.ship_hits <= 1);
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
    Ok(())
}
