use std::process::Command;

#[test]
fn generate_json_matches_library() {
    let output = Command::new(env!("CARGO_BIN_EXE_quasiboats"))
        .args(["generate", "--seed", "42", "--json"])
        .output()
        .expect("failed to run quasiboats");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");

    let generated = quasiboats::generate(42, 6);
    assert_eq!(v["report"]["seed"], 42);
    assert_eq!(v["report"]["attempts"], generated.report.attempts);
    assert_eq!(v["grid"]["size"], 6);
    assert_eq!(v["grid"]["exit_row"], 3);
    let boats = v["grid"]["boats"].as_array().unwrap();
    assert_eq!(boats.len(), generated.grid.boats().len());
    assert_eq!(boats[0]["role"], "Player");
    assert_eq!(boats[0]["col"], generated.grid.player().col());
}

#[test]
fn generate_text_draws_the_harbor() {
    let output = Command::new(env!("CARGO_BIN_EXE_quasiboats"))
        .args(["generate", "--seed", "7", "--size", "4"])
        .output()
        .expect("failed to run quasiboats");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("seed 7  size 4"));
    assert!(stdout.contains('P'));
    assert!(stdout.contains('>'));
}
