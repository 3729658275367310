use std::io;
use std::process;

use clap::{value_t, App, Arg};

use sokoban_search::config::{Method, SearchConfig};
use sokoban_search::report::{self, Report};
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves box-pushing puzzles using uninformed and heuristic search")
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("Level in XSB format"),
        )
        .arg(
            Arg::with_name("algorithm")
                .required(true)
                .help("breadth_first, depth_first, iterative_deepening, greedy or a_star"),
        )
        .arg(
            Arg::with_name("heuristic")
                .help("Required by greedy and a_star: manhattan, euclidean, linear_conflict or manhattan_plus_player"),
        )
        .arg(
            Arg::with_name("csv")
                .long("csv")
                .help("Print one CSV row instead of the solution"),
        )
        .arg(
            Arg::with_name("header")
                .long("header")
                .requires("csv")
                .help("Print the CSV header before the row"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .conflicts_with("csv")
                .help("Print the board after every move, not just after pushes"),
        )
        .arg(
            Arg::with_name("heuristic-deadlocks")
                .long("heuristic-deadlocks")
                .help("Heuristics treat detected deadlocks as unsolvable (not admissible anymore)"),
        )
        .arg(
            Arg::with_name("node-budget")
                .long("node-budget")
                .takes_value(true)
                .value_name("N")
                .help("Give up after expanding N states"),
        )
        .get_matches();

    // required args
    let path = matches.value_of("file").unwrap();
    let algorithm = matches.value_of("algorithm").unwrap();

    let method = Method::from_names(algorithm, matches.value_of("heuristic"))
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let node_budget = if matches.is_present("node-budget") {
        Some(value_t!(matches, "node-budget", usize).unwrap_or_else(|err| err.exit()))
    } else {
        None
    };
    let config = SearchConfig {
        heuristic_deadlocks: matches.is_present("heuristic-deadlocks"),
        node_budget,
    };

    let level = path.load_level().unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    let result = level.solve(method, &config);

    if matches.is_present("csv") {
        let reports = [Report::new(path, &result)];
        if let Err(err) = report::write_csv(&reports, matches.is_present("header"), io::stdout()) {
            eprintln!("Can't write CSV: {}", err);
            process::exit(1);
        }
        return;
    }

    println!("Solving {} using {}...", path, method);
    println!("{}", level);
    println!("{}", result);
    if let Some(moves) = result.moves() {
        println!("Solution:");
        print!("{}", level.format_solution(moves, matches.is_present("steps")));
        println!("{}", moves.lurd());
    }
    print!("{}", report::table(&[Report::new(path, &result)], true));
}
