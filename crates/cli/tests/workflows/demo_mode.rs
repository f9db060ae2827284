//! Runs without a configured root seed and prune a temporary directory

use crate::common::TestRoot;
use crate::dirprune;
use anyhow::Result;

#[test]
fn test_demo_without_config_prunes_seeded_days() -> Result<()> {
    let root = TestRoot::new()?;

    let result = dirprune!(root.workspace()).assert_success()?;

    assert!(result.contains_stdout("seeded demo directory"));
    // default policy keeps nothing
    assert!(result.contains_stdout("100 directories"));
    Ok(())
}

#[test]
fn test_demo_respects_policy_and_cleans_up() -> Result<()> {
    let root = TestRoot::new()?;
    let config = root.write_file(
        "prune.yaml",
        "verbose: true\nretention:\n  monthly: 2\n  weekly: 4\n  daily: 5\n",
    )?;

    let result = dirprune!(root.workspace()).config(&config).assert_success()?;

    // 100 days always fill every keep set: 2 + 4 + 5
    assert!(result.contains_stdout("Deleted"));
    assert_eq!(result.stderr.matches("keeping ").count(), 11);

    let seeded = result
        .stdout
        .lines()
        .find_map(|line| line.strip_prefix("Root: "))
        .map(|p| p.trim().to_string());
    let seeded = seeded.expect("summary names the seeded root");
    assert!(seeded.contains("dirprune-"));
    assert!(!std::path::Path::new(&seeded).exists());
    Ok(())
}
