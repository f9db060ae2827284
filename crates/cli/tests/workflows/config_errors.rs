//! Configuration failures abort before anything is pruned

use crate::common::{TestRoot, JANUARY_WEEK};
use crate::dirprune;
use anyhow::Result;

#[test]
fn test_malformed_config_fails_without_pruning() -> Result<()> {
    let root = TestRoot::new()?;
    root.add_dirs(&JANUARY_WEEK)?;
    let config = root.write_file(
        "prune.yaml",
        &format!("root: {}\nretention: [1, 2\n", root.root().display()),
    )?;

    let result = dirprune!(root.workspace()).config(&config).assert_failure()?;

    assert_eq!(root.remaining()?.len(), 8);
    assert!(result.contains_stderr("Invalid config file"));
    Ok(())
}

#[test]
fn test_wrongly_typed_count_fails() -> Result<()> {
    let root = TestRoot::new()?;
    root.add_dirs(&JANUARY_WEEK)?;
    let config = root.write_file(
        "prune.yaml",
        &format!("root: {}\nretention:\n  daily: lots\n", root.root().display()),
    )?;

    dirprune!(root.workspace()).config(&config).assert_failure()?;

    assert_eq!(root.remaining()?.len(), 8);
    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let root = TestRoot::new()?;
    let missing = root.workspace().join("absent.yaml");

    let result = dirprune!(root.workspace()).config(&missing).assert_failure()?;

    assert!(result.contains_stderr("Failed to read config file"));
    Ok(())
}

#[test]
fn test_unknown_flag_is_rejected() -> Result<()> {
    let root = TestRoot::new()?;

    let result = dirprune!(root.workspace(), "--dry-run").assert_failure()?;

    assert_ne!(result.exit_code, 0);
    Ok(())
}
