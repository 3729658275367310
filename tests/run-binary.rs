use std::process::{Command, Output};

use assert_cmd::prelude::*;

fn run(args: &[&str]) -> Output {
    Command::cargo_bin("sokoban-search")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn csv_with_header() {
    let output = run(&["levels/simplest.txt", "bfs", "--csv", "--header"]);
    assert!(output.status.success());
    assert_eq!(stderr(&output), "");

    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "board,algorithm,heuristic,result,cost,expanded,frontier,duration_sec,solution"
    );

    let fields: Vec<_> = lines[1].split(',').collect();
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], "levels/simplest.txt");
    assert_eq!(fields[1], "breadth_first");
    assert_eq!(fields[2], "");
    assert_eq!(fields[3], "solved");
    assert_eq!(fields[4], "2");
    assert_eq!(fields[5], "3");
    assert!(fields[7].parse::<f64>().unwrap() >= 0.0);
    assert_eq!(fields[8], "RR");
}

#[test]
fn csv_no_solution() {
    let output = run(&["levels/no-solution.txt", "a_star", "euclidean", "--csv"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let fields: Vec<_> = out.trim_end().split(',').collect();
    assert_eq!(fields[1], "a_star");
    assert_eq!(fields[2], "euclidean");
    assert_eq!(fields[3], "no solution");
    assert_eq!(fields[4], "");
    assert_eq!(fields[8], "");
}

#[test]
fn budget_exceeded() {
    let output = run(&["levels/room.txt", "dfs", "--csv", "--node-budget", "2"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let fields: Vec<_> = out.trim_end().split(',').collect();
    assert_eq!(fields[3], "budget exceeded");
    assert_eq!(fields[5], "2");
}

#[test]
fn human_readable() {
    let output = run(&["levels/one-way.txt", "astar", "manhattan"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("Solving levels/one-way.txt using a_star-manhattan..."));
    assert!(out.contains("Found solution using a_star-manhattan: UU"));
    assert!(out.contains("Moves: 2"));
    assert!(out.contains("Pushes: 2"));
    // the last board of the replay
    assert!(out.contains("###\n#*#\n#@#\n# #\n# #\n###\n"));
}

#[test]
fn unknown_algorithm() {
    let output = run(&["levels/simplest.txt", "dijkstra"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    assert!(err.contains("unknown algorithm 'dijkstra'"));
    assert!(err.contains("breadth_first, depth_first, iterative_deepening, greedy, a_star"));
}

#[test]
fn missing_heuristic() {
    let output = run(&["levels/simplest.txt", "greedy"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("greedy needs a heuristic"));
}

#[test]
fn missing_file() {
    let output = run(&["levels/does-not-exist.txt", "bfs"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Can't load level"));
}
