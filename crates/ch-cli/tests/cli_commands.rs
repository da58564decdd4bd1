//! End-to-end tests for the `ch` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `ch` running in an empty directory with no provider credential, so every
/// fortune comes from the fallback list.
fn ch_offline(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ch").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// cards
// ---------------------------------------------------------------------------

#[test]
fn cards_lists_major_arcana() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .arg("cards")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("22 cards")
                .and(predicate::str::contains("The Fool"))
                .and(predicate::str::contains("愚者"))
                .and(predicate::str::contains("cards/21-the-world.jpg")),
        );
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

#[test]
fn fortune_without_credential_is_simulated() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .args(["fortune", "The Fool", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool").and(predicate::str::contains("(Simulated)")));
}

#[test]
fn fortune_uses_localized_card_name() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .args(["fortune", "the moon", "--lang", "zh", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("月亮").and(predicate::str::contains("(Simulated)")));
}

#[test]
fn fortune_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let run = || {
        ch_offline(&dir)
            .args(["fortune", "Death", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn fortune_rejects_unknown_language() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .args(["fortune", "The Fool", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));
}

#[test]
fn fortune_rejects_empty_card() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .args(["fortune", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

// ---------------------------------------------------------------------------
// reveal
// ---------------------------------------------------------------------------

#[test]
fn reveal_session_shows_fortune() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .args(["reveal", "--seed", "3"])
        .write_stdin("start\nclick\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Consulting the Aether")
                .and(predicate::str::contains("(Simulated)"))
                .and(predicate::str::contains("revealed "))
                .and(predicate::str::contains("farewell")),
        );
}

#[test]
fn reveal_click_before_start_does_nothing() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .arg("reveal")
        .write_stdin("click\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Phase: Idle")
                .and(predicate::str::contains("(Simulated)").not()),
        );
}

#[test]
fn reveal_pinch_flips_card() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .args(["reveal", "--lang", "zh"])
        .write_stdin("start\nstatus\npinch 0.5 0.5 0.51 0.5\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("正在諮詢以太"));
}

#[test]
fn reveal_reports_unknown_commands() {
    let dir = TempDir::new().unwrap();
    ch_offline(&dir)
        .arg("reveal")
        .write_stdin("shuffle\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: shuffle"));
}

#[test]
fn reveal_against_unreachable_server_shows_placeholder() {
    let dir = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ch_offline(&dir)
        .args(["reveal", "--server", &format!("http://{addr}")])
        .write_stdin("start\nclick\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The stars are silent."));
}

#[test]
fn reveal_gives_up_on_silent_server() {
    let dir = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept connections and never answer them.
    std::thread::spawn(move || {
        let held: Vec<_> = listener.incoming().collect();
        drop(held);
    });

    ch_offline(&dir)
        .args(["reveal", "--server", &format!("http://{addr}"), "--timeout-secs", "1"])
        .write_stdin("start\nclick\nquit\n")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The stars are silent.")
                .and(predicate::str::contains("farewell")),
        );
}
