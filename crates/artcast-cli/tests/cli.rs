use std::net::UdpSocket;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("artcast"))
}

fn loopback_receiver() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("bind receiver");
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .expect("read timeout");
    let port = socket.local_addr().expect("local addr").port();
    (socket, port)
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("send").and(contains("encode")));
}

#[test]
fn encode_prints_reference_packet() {
    let assert = cmd()
        .args(["encode", "--universe", "1", "--data", "255,0,128"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");

    assert_eq!(value["universe"], 1);
    assert_eq!(value["sequence"], 0);
    assert_eq!(value["physical"], 0);
    assert_eq!(value["length"], 3);
    assert_eq!(value["total_bytes"], 21);
    assert_eq!(
        value["hex"],
        "4172742d4e6574000050000e000001000003ff0080"
    );
}

#[test]
fn encode_accepts_hex_input() {
    let assert = cmd()
        .args(["encode", "--hex", "0a0b", "--pretty"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["universe"], 0);
    assert_eq!(value["length"], 2);
    assert!(value["hex"].as_str().expect("hex string").ends_with("000000020a0b"));
}

#[test]
fn encode_rejects_out_of_range_universe() {
    cmd()
        .args(["encode", "--universe", "65536", "--data", "1"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn encode_rejects_out_of_range_channel() {
    cmd()
        .args(["encode", "--data", "1,300"])
        .assert()
        .failure()
        .stderr(contains("invalid channel frame"));
}

#[test]
fn data_and_hex_conflict() {
    cmd()
        .args(["encode", "--data", "1", "--hex", "01"])
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn send_delivers_to_loopback() {
    let (receiver, port) = loopback_receiver();

    cmd()
        .args(["send", "--host", "127.0.0.1", "--no-broadcast", "--universe", "5"])
        .args(["--port", &port.to_string(), "--data", "10,20,30"])
        .assert()
        .success()
        .stderr(contains("OK: sent 21 bytes"));

    let mut buf = [0u8; 64];
    let (len, _) = receiver.recv_from(&mut buf).expect("recv");
    assert_eq!(len, 21);
    assert_eq!(&buf[..8], b"Art-Net\0");
    assert_eq!(&buf[14..16], &[5, 0]);
    assert_eq!(&buf[16..18], &[0, 3]);
    assert_eq!(&buf[18..21], &[10, 20, 30]);
}

#[test]
fn send_uses_config_file_and_flags_override() {
    let (receiver, port) = loopback_receiver();
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("sender.json");
    std::fs::write(
        &config,
        format!(r#"{{"host": "127.0.0.1", "port": {port}, "universe": 9, "broadcast": false}}"#),
    )
    .expect("write config");

    cmd()
        .args(["send", "--config"])
        .arg(&config)
        .args(["--universe", "300", "--hex", "ff", "--quiet"])
        .assert()
        .success()
        .stderr(contains("OK:").not());

    let mut buf = [0u8; 64];
    let (len, _) = receiver.recv_from(&mut buf).expect("recv");
    assert_eq!(len, 19);
    assert_eq!(&buf[14..16], &[44, 1]);
    assert_eq!(buf[18], 0xff);
}

#[test]
fn send_repeat_dispatches_each_packet() {
    let (receiver, port) = loopback_receiver();

    cmd()
        .args(["send", "--host", "127.0.0.1", "--no-broadcast", "--repeat", "3"])
        .args(["--port", &port.to_string(), "--data", "1"])
        .assert()
        .success()
        .stderr(contains("x3"));

    let mut buf = [0u8; 64];
    for _ in 0..3 {
        let (len, _) = receiver.recv_from(&mut buf).expect("recv");
        assert_eq!(len, 19);
    }
}

#[test]
fn missing_config_file_shows_error() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.json");

    cmd()
        .args(["send", "--config"])
        .arg(missing)
        .args(["--data", "1"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("Failed to load config")));
}
