use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn set_mtime(path: &Path, secs: u64) -> std::io::Result<()> {
    let file = fs::OpenOptions::new().write(true).open(path)?;
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
}

#[test]
fn test_default_listing_is_sorted_and_hides_dotfiles() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("beta.txt"), "b")?;
    fs::write(dir.path().join("alpha.txt"), "a")?;
    fs::write(dir.path().join(".hidden"), "h")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg(dir.path());
    cmd.assert().success().stdout("alpha.txt\nbeta.txt\n");
    Ok(())
}

#[test]
fn test_show_all_includes_synthetic_entries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("beta.txt"), "b")?;
    fs::write(dir.path().join(".hidden"), "h")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-a").arg(dir.path());
    cmd.assert().success().stdout(".\n..\n.hidden\nbeta.txt\n");
    Ok(())
}

#[test]
fn test_almost_all_excludes_synthetic_entries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("beta.txt"), "b")?;
    fs::write(dir.path().join(".hidden"), "h")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-A").arg(dir.path());
    cmd.assert().success().stdout(".hidden\nbeta.txt\n");
    Ok(())
}

#[test]
fn test_reverse_flips_name_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("alpha.txt"), "a")?;
    fs::write(dir.path().join("beta.txt"), "b")?;
    fs::write(dir.path().join("gamma.txt"), "c")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-r").arg(dir.path());
    cmd.assert()
        .success()
        .stdout("gamma.txt\nbeta.txt\nalpha.txt\n");
    Ok(())
}

#[test]
fn test_time_sort_newest_first_and_reversal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    fs::write(&old, "o")?;
    fs::write(&new, "n")?;
    set_mtime(&old, 1_000_000)?;
    set_mtime(&new, 2_000_000)?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-t").arg(dir.path());
    cmd.assert().success().stdout("new.txt\nold.txt\n");

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-tr").arg(dir.path());
    cmd.assert().success().stdout("old.txt\nnew.txt\n");
    Ok(())
}

#[test]
fn test_single_file_operand_renders_one_line_without_header(
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("file.txt");
    fs::write(&path, "data")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(format!("{}\n", path.display()));
    Ok(())
}

#[test]
fn test_long_format_line_layout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("file.txt");
    fs::write(&path, "data")?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;
    set_mtime(&path, 1_000_000)?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-l").arg(&path);
    cmd.assert().success().stdout(predicate::str::is_match(
        r"-rw-r--r--   1 \S+ \S+        4 Jan 12  1970 .*file\.txt\n",
    )?);
    Ok(())
}

#[test]
fn test_human_readable_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("big.bin"), vec![0u8; 2048])?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-lh").arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("      2K "));
    Ok(())
}

#[test]
fn test_multiple_operands_get_headers_and_separation() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let d1 = root.path().join("d1");
    let d2 = root.path().join("d2");
    fs::create_dir(&d1)?;
    fs::create_dir(&d2)?;
    fs::write(d1.join("a.txt"), "a")?;
    fs::write(d2.join("b.txt"), "b")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg(&d1).arg(&d2);
    cmd.assert().success().stdout(format!(
        "{}:\na.txt\n\n{}:\nb.txt\n",
        d1.display(),
        d2.display()
    ));
    Ok(())
}

#[test]
fn test_missing_operand_is_reported_but_others_proceed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("real.txt"), "r")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("/no/such/path").arg(dir.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("real.txt"))
        .stderr(predicate::str::contains(
            "lsr: cannot access '/no/such/path': No such file or directory",
        ));
    Ok(())
}

#[test]
fn test_recursive_descent_is_depth_first_with_headers() -> Result<(), Box<dyn std::error::Error>> {
    // root/
    //   top.txt
    //   sub/ { deep/ { deepest.txt }, inner.txt }
    //   zeta/ { zfile.txt }
    let root = tempdir()?;
    fs::write(root.path().join("top.txt"), "t")?;
    let sub = root.path().join("sub");
    let deep = sub.join("deep");
    let zeta = root.path().join("zeta");
    fs::create_dir_all(&deep)?;
    fs::create_dir(&zeta)?;
    fs::write(sub.join("inner.txt"), "i")?;
    fs::write(deep.join("deepest.txt"), "d")?;
    fs::write(zeta.join("zfile.txt"), "z")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-R").arg(root.path());
    // The whole of `sub` (including `sub/deep`) comes before `zeta`.
    cmd.assert().success().stdout(format!(
        "sub\ntop.txt\nzeta\n\n{sub}:\ndeep\ninner.txt\n\n{deep}:\ndeepest.txt\n\n{zeta}:\nzfile.txt\n",
        sub = sub.display(),
        deep = deep.display(),
        zeta = zeta.display()
    ));
    Ok(())
}

#[test]
fn test_recursion_does_not_descend_into_symlinked_directories(
) -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let sub = root.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(sub.join("inner.txt"), "i")?;
    // A symlink back to the root would loop forever if followed.
    std::os::unix::fs::symlink(root.path(), root.path().join("loop"))?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-R").arg(root.path());
    cmd.assert()
        .success()
        .stdout(format!("loop\nsub\n\n{}:\ninner.txt\n", sub.display()));
    Ok(())
}

#[test]
fn test_one_per_line_flag_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    // Output is already one entry per line; -1 must parse and change nothing.
    let dir = tempdir()?;
    fs::write(dir.path().join("only.txt"), "o")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-1").arg(dir.path());
    cmd.assert().success().stdout("only.txt\n");
    Ok(())
}
