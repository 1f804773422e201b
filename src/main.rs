// main.rs - CLI entry point

use pivotab::cli::args::{CheckArgs, RenderArgs};
use pivotab::cli::{validate_check_args, validate_render_args, Args, Command, Config};
use pivotab::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "pivotab=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    init_tracing(args.is_verbose());
    debug!("{}", pivotab::get_info());

    match args.command {
        Command::Check(check) => run_check(&check),
        Command::Render(render) => run_render(&render),
        Command::SampleConfig(_) => {
            println!("{}", Config::generate_sample());
            println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
            Ok(())
        }
    }
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let input = validate_check_args(args)?;
    println!("🔍 Checking {} (verbose: {})", input.display(), args.verbose);

    let options = CheckOptions::verbose(args.verbose);
    match check_file(&input, &options) {
        Ok(report) => {
            if args.verbose {
                println!("Checking file format");
                for note in &report.passed_checks {
                    println!("  - {}", note);
                }
            }
            println!(
                "\n✅ Successfully checked \"{}\"\n   It is a valid Jenkins Submitter Pivot Table and can be processed\n",
                input.display()
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", e);
            println!("Check failed.");
            std::process::exit(1);
        }
    }
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let plan = validate_render_args(args)?;

    let mut table = Table::from_file(&plan.input)?;
    if plan.run_check {
        let report = validate_table(&table, &CheckOptions::verbose(args.verbose))?;
        info!(
            records = report.data_records,
            columns = report.header_columns,
            "input validated"
        );
    }

    if let Some(period) = &plan.period {
        table = table.select_period(period)?;
        println!("📅 Keeping period column: {}", period);
    }

    write_table(&plan.output, &table, &plan.markdown)
}
