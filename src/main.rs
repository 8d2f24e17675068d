//! WhyBin - CLI Entry Point
//!
//! Commands:
//! - `whybin check` - Run the distributivity survey over all digit triples
//! - `whybin add <A> <B>` - Add two WhyBin numbers
//! - `whybin mul <A> <B>` - Multiply two WhyBin numbers

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "whybin")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Arithmetic over the six-symbol WhyBin numeral system")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check distributivity of (x+y)*z over all 216 ordered digit triples
    Check {
        /// Write the full report to a JSON file
        #[arg(short, long)]
        json: Option<String>,
        /// Print only the summary, not every triple
        #[arg(short, long)]
        quiet: bool,
    },
    /// Add two WhyBin numbers
    Add {
        /// First operand, e.g. "1i0j"
        a: String,
        /// Second operand, e.g. "100i0"
        b: String,
    },
    /// Multiply two WhyBin numbers
    Mul {
        /// First operand
        a: String,
        /// Second operand (only its lowest digit participates)
        b: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { json, quiet }) => {
            run_check(json.as_deref(), quiet);
        }
        Some(Commands::Add { a, b }) => {
            let (a, b) = parse_operands(&a, &b);
            println!("{} + {} = {}", a, b, whybin::add(&a, &b));
        }
        Some(Commands::Mul { a, b }) => {
            let (a, b) = parse_operands(&a, &b);
            println!("{} * {} = {}", a, b, whybin::multiply(&a, &b));
        }
        None => {
            println!("WhyBin v0.1.0");
            println!("Arithmetic over the six-symbol numeral system 0 1 i j w n");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_whybin_primitives();
        }
    }
}

fn parse_operands(a: &str, b: &str) -> (whybin::Number, whybin::Number) {
    let parse = |text: &str| match whybin::Number::parse(text) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("❌ Bad operand '{}': {}", text, e);
            std::process::exit(1);
        }
    };
    (parse(a), parse(b))
}

fn run_check(json: Option<&str>, quiet: bool) {
    println!("━━━ WhyBin Distributivity Survey ━━━");
    println!();

    let report = whybin::survey::run();

    if !quiet {
        for o in &report.outcomes {
            println!("({} + {}) * {} = {}", o.x, o.y, o.z, o.lhs);
            println!("{} * {} + {} * {} = {}", o.x, o.z, o.y, o.z, o.rhs);
            println!("{}", o.holds);
        }
        println!();
    }

    println!("Triples checked: {}", report.outcomes.len());
    println!("Violations:      {}", report.violations);
    if report.holds_universally() {
        println!("✓ Distributivity holds for every digit triple");
    } else {
        println!("✗ Distributivity does NOT hold for this algebra");
    }

    if let Some(path) = json {
        match report.save_json(path) {
            Ok(()) => println!("📂 Report written to {}", path),
            Err(e) => {
                eprintln!("❌ Failed to write report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn demo_whybin_primitives() {
    use whybin::{Digit, Number, add, multiply};

    println!("━━━ WhyBin Demo ━━━");
    println!();

    println!("Digits (six symbolic values):");
    for d in Digit::ALL {
        println!("  {} = index {}", d, d.index());
    }
    println!();

    println!("Number arithmetic:");
    let a = Number::parse("1i0j").expect("literal parses");
    let b = Number::parse("100i0").expect("literal parses");
    println!("  {} + {} = {}", a, b, add(&a, &b));
    println!("  {} * {} = {}", a, b, multiply(&a, &b));
    println!();

    println!("✓ Core WhyBin primitives working!");
}
