//! Search an ASCII map and print the path found.
//!
//! ```bash
//! cargo run -p tilepath-demos -- --map demos/maps/maze.txt
//! cargo run -p tilepath-demos -- --map demos/maps/maze.txt --config demos/demo.toml --diagonal
//! RUST_LOG=trace cargo run -p tilepath-demos -- --map demos/maps/maze.txt --from 0,10 --to 15,0
//! ```

mod config;
mod error;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use tilepath::{AStarPathFinder, HeuristicKind, Point};
use tilepath_maps::{CharMap, MoverKind};

use crate::config::DemoConfig;
use crate::error::{DemoError, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ASCII map file (`S` and `T` mark the default endpoints)
    #[arg(short, long)]
    map: PathBuf,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also step diagonally
    #[arg(long)]
    diagonal: bool,

    /// Forbid diagonal steps past walls
    #[arg(long)]
    no_corner_cutting: bool,

    /// Depth at which the search gives up
    #[arg(long)]
    max_distance: Option<usize>,

    /// closest, closest_squared or manhattan
    #[arg(long)]
    heuristic: Option<HeuristicKind>,

    /// walker or swimmer
    #[arg(long)]
    mover: Option<MoverKind>,

    /// Start tile as X,Y
    #[arg(long, value_parser = parse_point)]
    from: Option<Point>,

    /// Target tile as X,Y
    #[arg(long, value_parser = parse_point)]
    to: Option<Point>,
}

impl Args {
    /// Apply command-line overrides on top of file settings.
    fn apply(&self, cfg: &mut DemoConfig) {
        if self.diagonal {
            cfg.finder.allow_diagonal = true;
        }
        if self.no_corner_cutting {
            cfg.corner_cutting = false;
        }
        if let Some(max) = self.max_distance {
            cfg.finder.max_search_distance = max;
        }
        if let Some(heuristic) = self.heuristic {
            cfg.heuristic = heuristic;
        }
        if let Some(mover) = self.mover {
            cfg.mover = mover;
        }
    }
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got \u{201c}{s}\u{201d}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate \u{201c}{v}\u{201d}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn run(args: &Args) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    args.apply(&mut cfg);

    let text = fs::read_to_string(&args.map).map_err(|source| DemoError::Io {
        path: args.map.clone(),
        source,
    })?;
    let map = CharMap::parse(&text)?.with_corner_cutting(cfg.corner_cutting);

    let from = args.from.or(map.start()).ok_or(DemoError::MissingEndpoint {
        what: "start",
        flag: "from",
    })?;
    let to = args.to.or(map.target()).ok_or(DemoError::MissingEndpoint {
        what: "target",
        flag: "to",
    })?;

    info!(
        "searching {}x{} map from {from} to {to} as {} using {} heuristic",
        map.size().x,
        map.size().y,
        cfg.mover,
        cfg.heuristic
    );

    let mut finder = AStarPathFinder::for_map(&map, cfg.finder, cfg.heuristic);
    let path = finder
        .find_path(&map, &cfg.mover, from, to)
        .ok_or(DemoError::NoPath { from, to })?;

    print!("{}", map.render_path(&path));
    println!();
    println!("{} steps, {} tiles evaluated", path.len(), map.visited_tiles());
    for (i, p) in path.iter().enumerate() {
        println!("{i:>4}: {p}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parse() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 10 , -1 "), Ok(Point::new(10, -1)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,4").is_err());
    }

    #[test]
    fn flags_override_file_settings() {
        let args = Args::try_parse_from([
            "tilepath-demo",
            "--map",
            "maze.txt",
            "--diagonal",
            "--max-distance",
            "40",
            "--heuristic",
            "closest-squared",
            "--mover",
            "swimmer",
            "--from",
            "1,2",
        ])
        .unwrap();
        assert_eq!(args.from, Some(Point::new(1, 2)));
        assert_eq!(args.to, None);

        let mut cfg = DemoConfig::from_toml("heuristic = \"manhattan\"").unwrap();
        args.apply(&mut cfg);
        assert!(cfg.finder.allow_diagonal);
        assert_eq!(cfg.finder.max_search_distance, 40);
        assert_eq!(cfg.heuristic, HeuristicKind::ClosestSquared);
        assert_eq!(cfg.mover, MoverKind::Swimmer);
        assert!(cfg.corner_cutting);
    }

    #[test]
    fn unset_flags_keep_file_settings() {
        let args = Args::try_parse_from(["tilepath-demo", "-m", "maze.txt"]).unwrap();
        let mut cfg = DemoConfig::from_toml("mover = \"swimmer\"\ncorner_cutting = false").unwrap();
        let before = cfg;
        args.apply(&mut cfg);
        assert_eq!(cfg, before);
    }

    #[test]
    fn missing_map_file_is_reported() {
        let args = Args::try_parse_from(["tilepath-demo", "--map", "/nonexistent/map.txt"]).unwrap();
        assert!(matches!(run(&args), Err(DemoError::Io { .. })));
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
