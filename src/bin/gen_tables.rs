//! Standalone table-generator binary (§6.4): prints the distance tables as
//! Rust source text declaring byte arrays, for inspection/diffing/offline
//! caching. The library itself never reads this binary's output — it
//! computes the same tables lazily at process start via the `OnceLock`
//! behind `qtm_cube::tables` (see that module's doc comment and
//! `DESIGN.md` for why). This binary is a thin wrapper around the same
//! construction routine, exposed separately because a generator tool that
//! emits inspectable table source is part of this repository's own idiom
//! (see `examples/original_source/cxx`'s `gen_tables` equivalent).

use clap::Parser;

use qtm_cube::tables;

#[derive(Parser)]
struct Cli {
    /// Emit `quad01_dist` (32^4 entries) instead of the first three tables.
    /// This table is expensive to build (~1M IDA*-prefix searches); only
    /// pass this flag when you actually want to wait for it.
    #[arg(long)]
    quad: bool,
}

fn print_array2(name: &str, side: usize, f: impl Fn(u8, u8) -> i32) {
    println!("pub const {name}: [[i8; {side}]; {side}] = [");
    for a in 0..side {
        print!("    [");
        for b in 0..side {
            let v = f(a as u8, b as u8);
            print!("{v}, ");
        }
        println!("],");
    }
    println!("];");
}

fn print_array4(name: &str, side: usize, f: impl Fn(u8, u8, u8, u8) -> i32) {
    println!("pub const {name}: [[[[i8; {side}]; {side}]; {side}]; {side}] = [");
    for a in 0..side {
        println!("    [");
        for b in 0..side {
            print!("        [");
            for c in 0..side {
                print!("[");
                for d in 0..side {
                    let v = f(a as u8, b as u8, c as u8, d as u8);
                    print!("{v}, ");
                }
                print!("], ");
            }
            println!("],");
        }
        println!("    ],");
    }
    println!("];");
}

fn main() {
    let cli = Cli::parse();

    if cli.quad {
        eprintln!("Building quad01_dist (32^4 entries, this is slow)...");
        print_array4("QUAD01_DIST", 32, tables::quad01_dist);
    } else {
        eprintln!("Building edge_dist, corner_dist, pair0_dist...");
        print_array2("EDGE_DIST", 32, tables::edge_dist);
        print_array2("CORNER_DIST", 32, tables::corner_dist);
        print_array2("PAIR0_DIST", 32, tables::pair0_dist);
    }
}
