use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    Greedy,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::IterativeDeepening,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    pub fn is_informed(self) -> bool {
        match self {
            Algorithm::Greedy | Algorithm::AStar => true,
            Algorithm::BreadthFirst | Algorithm::DepthFirst | Algorithm::IterativeDeepening => {
                false
            }
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Algorithm::BreadthFirst => write!(f, "breadth_first"),
            Algorithm::DepthFirst => write!(f, "depth_first"),
            Algorithm::IterativeDeepening => write!(f, "iterative_deepening"),
            Algorithm::Greedy => write!(f, "greedy"),
            Algorithm::AStar => write!(f, "a_star"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ArgumentErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breadth_first" | "bfs" => Ok(Algorithm::BreadthFirst),
            "depth_first" | "dfs" => Ok(Algorithm::DepthFirst),
            "iterative_deepening" | "iddfs" => Ok(Algorithm::IterativeDeepening),
            "greedy" => Ok(Algorithm::Greedy),
            "a_star" | "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ArgumentErr::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    LinearConflict,
    ManhattanPlusPlayer,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::LinearConflict,
        Heuristic::ManhattanPlusPlayer,
    ];
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::LinearConflict => write!(f, "linear_conflict"),
            Heuristic::ManhattanPlusPlayer => write!(f, "manhattan_plus_player"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ArgumentErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            "linear_conflict" => Ok(Heuristic::LinearConflict),
            "manhattan_plus_player" | "manhattan_player" => Ok(Heuristic::ManhattanPlusPlayer),
            _ => Err(ArgumentErr::UnknownHeuristic(s.to_owned())),
        }
    }
}

/// Which strategy to run. Informed strategies always carry their heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    Greedy(Heuristic),
    AStar(Heuristic),
}

impl Method {
    pub fn new(algorithm: Algorithm, heuristic: Option<Heuristic>) -> Result<Self, ArgumentErr> {
        match (algorithm, heuristic) {
            (Algorithm::BreadthFirst, None) => Ok(Method::BreadthFirst),
            (Algorithm::DepthFirst, None) => Ok(Method::DepthFirst),
            (Algorithm::IterativeDeepening, None) => Ok(Method::IterativeDeepening),
            (Algorithm::Greedy, Some(h)) => Ok(Method::Greedy(h)),
            (Algorithm::AStar, Some(h)) => Ok(Method::AStar(h)),
            (alg, None) => Err(ArgumentErr::MissingHeuristic(alg)),
            (alg, Some(_)) => Err(ArgumentErr::UnexpectedHeuristic(alg)),
        }
    }

    /// Selects a method by name, e.g. `("a_star", Some("manhattan"))`.
    pub fn from_names(algorithm: &str, heuristic: Option<&str>) -> Result<Self, ArgumentErr> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        let heuristic = heuristic.map(str::parse::<Heuristic>).transpose()?;
        Method::new(algorithm, heuristic)
    }

    pub fn algorithm(self) -> Algorithm {
        match self {
            Method::BreadthFirst => Algorithm::BreadthFirst,
            Method::DepthFirst => Algorithm::DepthFirst,
            Method::IterativeDeepening => Algorithm::IterativeDeepening,
            Method::Greedy(_) => Algorithm::Greedy,
            Method::AStar(_) => Algorithm::AStar,
        }
    }

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Method::Greedy(h) | Method::AStar(h) => Some(h),
            _ => None,
        }
    }

    /// Every valid combination of algorithm and heuristic.
    pub fn all() -> Vec<Method> {
        let mut methods = vec![
            Method::BreadthFirst,
            Method::DepthFirst,
            Method::IterativeDeepening,
        ];
        for &h in &Heuristic::ALL {
            methods.push(Method::Greedy(h));
        }
        for &h in &Heuristic::ALL {
            methods.push(Method::AStar(h));
        }
        methods
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.heuristic() {
            None => write!(f, "{}", self.algorithm()),
            Some(h) => write!(f, "{}-{}", self.algorithm(), h),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Heuristics return infinity when any box off a goal is deadlocked,
    /// such states are then never queued by informed searches.
    pub heuristic_deadlocks: bool,
    /// Stop after expanding this many states. Without it a search only ends
    /// when it finds a solution or exhausts the state space,
    /// memory use grows with the number of discovered states.
    pub node_budget: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            heuristic_deadlocks: false,
            node_budget: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentErr {
    UnknownAlgorithm(String),
    UnknownHeuristic(String),
    MissingHeuristic(Algorithm),
    UnexpectedHeuristic(Algorithm),
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for ArgumentErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ArgumentErr::UnknownAlgorithm(ref name) => write!(
                f,
                "Invalid argument: unknown algorithm '{}', valid options: {}",
                name,
                join(&Algorithm::ALL)
            ),
            ArgumentErr::UnknownHeuristic(ref name) => write!(
                f,
                "Invalid argument: unknown heuristic '{}', valid options: {}",
                name,
                join(&Heuristic::ALL)
            ),
            ArgumentErr::MissingHeuristic(alg) => write!(
                f,
                "Invalid argument: {} needs a heuristic, valid options: {}",
                alg,
                join(&Heuristic::ALL)
            ),
            ArgumentErr::UnexpectedHeuristic(alg) => {
                write!(f, "Invalid argument: {} doesn't use a heuristic", alg)
            }
        }
    }
}

impl Error for ArgumentErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_methods() {
        assert_eq!(Method::from_names("bfs", None), Ok(Method::BreadthFirst));
        assert_eq!(
            Method::from_names("iterative_deepening", None),
            Ok(Method::IterativeDeepening)
        );
        assert_eq!(
            Method::from_names("a_star", Some("linear_conflict")),
            Ok(Method::AStar(Heuristic::LinearConflict))
        );
        assert_eq!(
            Method::from_names("greedy", Some("manhattan_plus_player")),
            Ok(Method::Greedy(Heuristic::ManhattanPlusPlayer))
        );
    }

    #[test]
    fn names_round_trip() {
        for method in Method::all() {
            let alg = method.algorithm().to_string();
            let heur = method.heuristic().map(|h| h.to_string());
            assert_eq!(Method::from_names(&alg, heur.as_deref()), Ok(method));
        }
        assert_eq!(Method::all().len(), 11);
    }

    #[test]
    fn invalid_arguments() {
        let err = Method::from_names("dijkstra", None).unwrap_err();
        assert_eq!(err, ArgumentErr::UnknownAlgorithm("dijkstra".to_owned()));
        let msg = err.to_string();
        assert!(msg.contains("dijkstra"));
        assert!(msg.contains("breadth_first, depth_first, iterative_deepening, greedy, a_star"));

        let err = Method::from_names("greedy", Some("hamming")).unwrap_err();
        assert_eq!(err, ArgumentErr::UnknownHeuristic("hamming".to_owned()));
        assert!(err.to_string().contains("manhattan, euclidean"));

        assert_eq!(
            Method::from_names("a_star", None),
            Err(ArgumentErr::MissingHeuristic(Algorithm::AStar))
        );
        assert_eq!(
            Method::from_names("dfs", Some("manhattan")),
            Err(ArgumentErr::UnexpectedHeuristic(Algorithm::DepthFirst))
        );
    }
}
