use std::process::{Command, Output};

fn tsort(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tsort"))
        .args(args)
        .output()
        .expect("Unable to run tsort")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_an_ordering_with_removal() {
    let output = tsort(&["./assets/dressing.txt", "--algorithm", "removal"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let order = stdout(&output);
    let line = order.lines().next().expect("tsort printed nothing");
    assert_eq!(line.split(" -> ").count(), 9);
    let position = |name: &str| line.split(" -> ").position(|node| node == name);
    assert!(position("socks") < position("shoes"));
    assert!(position("tie") < position("jacket"));
}

#[test]
fn prints_the_dfs_ordering_by_default() {
    let output = tsort(&["./assets/dressing.txt"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "watch -> socks -> shirt -> tie -> undershorts -> pants -> shoes -> belt -> jacket"
    );
}

#[test]
fn cycle_is_a_diagnostic() {
    for algorithm in ["dfs", "removal"] {
        let output = tsort(&["./assets/cyclic.txt", "--algorithm", algorithm]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).is_empty());
        assert!(
            stderr(&output).contains("graph has at least one cycle"),
            "{}",
            stderr(&output)
        );
    }
}

#[test]
fn unknown_start_is_a_diagnostic() {
    let output = tsort(&["./assets/dressing.txt", "--start", "hat"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Node `hat` does not exist"));
}

#[test]
fn unreadable_schedule_is_a_diagnostic() {
    let output = tsort(&["./assets/does_not_exist.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: "));
}

#[test]
fn parse_error_is_a_diagnostic() {
    let output = tsort(&["./assets/malformed.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Line 5: edges must be written as `from,to`"));
}
