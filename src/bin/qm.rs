//! Quine-McCluskey truth-table minimizer - command line interface
//!
//! Reads a `.truth` file (one line of `0`/`1` per output function), minimizes
//! every output, and prints SOP expressions or writes a Verilog module.

use clap::Parser;
use qm_logic::{verilog, MinimizerConfig, Sop, TruthTable};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(about = "Multi-output Quine-McCluskey SOP minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Input truth-table file: one line of 0/1 per output, 2^n characters each
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write a Verilog module instead of printing SOP expressions
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Verilog module name (defaults to the input file stem)
    #[arg(short = 'm', long = "module-name")]
    module_name: Option<String>,

    /// Refuse tables with more than this many input variables
    #[arg(long = "max-vars", default_value_t = 20)]
    max_vars: usize,

    /// Minimize each output on its own thread
    #[arg(short = 'p', long = "parallel")]
    parallel: bool,

    /// Provide execution summary on stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let file = match File::open(&args.input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error opening '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let table = match TruthTable::from_reader(BufReader::new(file)) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading truth table '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!(
            "nVars = {}, nOuts = {}, length = {}",
            table.n_vars(),
            table.num_outputs(),
            1usize << table.n_vars()
        );
    }

    let config = MinimizerConfig {
        max_vars: args.max_vars,
        parallel: args.parallel,
    };

    let results = match table.minimize_with_config(&config) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    for out in &results {
        if args.summary {
            eprintln!("output y{}: {} implicants", out.index, out.cover.len());
        }
        if let Some(stall) = &out.stall {
            eprintln!("Warning: output y{}: {}", out.index, stall);
        }
    }

    if let Some(ref output_path) = args.output_file {
        let module_name = args.module_name.clone().unwrap_or_else(|| {
            args.input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "top".to_string())
        });

        let file = match File::create(output_path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error creating '{}': {}", output_path.display(), e);
                process::exit(1);
            }
        };
        let mut writer = BufWriter::new(file);
        if let Err(e) = verilog::write_verilog(&mut writer, &module_name, table.n_vars(), &results)
        {
            eprintln!("Error writing Verilog output: {}", e);
            process::exit(1);
        }
        if args.summary {
            eprintln!("Wrote Verilog to: {}", output_path.display());
        }
    } else {
        for out in &results {
            println!("y{} = {}", out.index, Sop::from_cover(&out.cover));
        }
    }

    if args.summary {
        eprintln!("Done.");
    }
}
