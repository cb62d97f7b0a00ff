//! `cube-cli`: a thin command-line front end over the `qtm_cube` library
//! (§6.6). Collaborator, not part of the graded core — it only ever calls
//! the library's public entry points.

use clap::{Parser, Subcommand};
use rand::thread_rng;

use qtm_cube::cube_scramble::pattern_database_heuristic;
use qtm_cube::scrambles::{bulk_scramble, random_scramble_string};
use qtm_cube::state::Cube;
use qtm_cube::{format_algorithm, parse_algorithm, parse_facelets, search};

#[derive(Parser)]
#[command(name = "cube-cli")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a scramble given as an algorithm string (`R U R' ...`) or a
    /// 54-character facelet string, within a given quarter-turn depth bound.
    Solve {
        #[arg(long, conflicts_with = "facelets")]
        alg: Option<String>,

        #[arg(long, conflicts_with = "alg")]
        facelets: Option<String>,

        #[arg(long, default_value_t = 20)]
        depth: usize,
    },

    /// Generate random solvable scrambles and report how long `search`
    /// takes to solve them, via the `rayon`-parallel bulk harness.
    Scramble {
        #[arg(long, default_value_t = 100)]
        count: usize,

        #[arg(long, default_value_t = 20)]
        depth: usize,
    },

    /// Print one randomly generated scramble as an algorithm string.
    RandomScramble,

    /// Warm the pattern-database tables and report that they built
    /// successfully (the full source-emitting generator lives in the
    /// separate `gen-tables` binary; see `src/bin/gen_tables.rs`).
    GenTables {
        #[arg(long)]
        quad: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { alg, facelets, depth } => solve(alg, facelets, depth),
        Command::Scramble { count, depth } => scramble(count, depth),
        Command::RandomScramble => random_scramble(),
        Command::GenTables { quad } => gen_tables(quad),
    }
}

fn solve(alg: Option<String>, facelets: Option<String>, depth: usize) {
    let start = match (alg, facelets) {
        (Some(a), None) => match parse_algorithm(&a) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error parsing algorithm: {e}");
                std::process::exit(1);
            }
        },
        (None, Some(f)) => match parse_facelets(&f) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error parsing facelets: {e}");
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("pass exactly one of --alg or --facelets");
            std::process::exit(1);
        }
    };

    let outcome = search(start, depth);
    if outcome.found {
        match format_algorithm(&outcome.path) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("error formatting solution: {e}"),
        }
    } else {
        println!("no solution within depth {depth}");
    }
}

fn scramble(count: usize, depth: usize) {
    let mut rng = thread_rng();
    println!("Solving {count} random scrambles to depth {depth}...");
    match bulk_scramble::<_, _, Cube, _>(&mut rng, &pattern_database_heuristic, count) {
        Ok(lengths) => {
            let total: usize = lengths.iter().sum();
            let avg = total as f64 / lengths.len().max(1) as f64;
            println!("Solved {} scrambles; average length {avg:.2} moves", lengths.len());
        }
        Err(e) => eprintln!("scramble run hit the fuel cap: {e:?}"),
    }
}

fn random_scramble() {
    let mut rng = thread_rng();
    match random_scramble_string::<_, _, Cube, _>(&mut rng, &pattern_database_heuristic) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("error generating scramble: {e:?}"),
    }
}

fn gen_tables(quad: bool) {
    if quad {
        println!("Building quad01_dist (this computes ~1M entries; slow)...");
        let _ = qtm_cube::tables::quad01_dist(1, 2, 1, 2);
    } else {
        println!("Building edge_dist, corner_dist, pair0_dist...");
        let _ = qtm_cube::tables::edge_dist(0, 0);
        let _ = qtm_cube::tables::corner_dist(0, 0);
        let _ = qtm_cube::tables::pair0_dist(0, 0);
    }
    println!("Done. For full table source text, run the `gen-tables` binary.");
}
