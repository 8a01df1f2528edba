use crate::common::repository::TestRepository;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn repository(repository_dir: TempDir) -> TestRepository {
    TestRepository::init(repository_dir)
}

pub fn run_topo_command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("topo-order-commits").expect("Failed to find binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    cmd
}
