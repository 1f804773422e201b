// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// pivotab - validate and reformat submitter pivot tables
pub struct Args {
    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Check(CheckArgs),
    Render(RenderArgs),
    SampleConfig(SampleConfigArgs),
}

#[derive(FromArgs)]
/// validates that the input file is a submitter pivot table (as produced by GNU datamash pivot)
#[argh(subcommand, name = "check")]
pub struct CheckArgs {
    /// input CSV file
    #[argh(positional)]
    pub input: String,

    /// display details about the checked file
    #[argh(switch)]
    pub verbose: bool,
}

#[derive(FromArgs)]
/// writes a pivot table as CSV or as an aligned Markdown table (.md output)
#[argh(subcommand, name = "render")]
pub struct RenderArgs {
    /// input CSV file
    #[argh(positional)]
    pub input: String,

    /// output file; a .md extension selects Markdown, anything else CSV
    #[argh(option, short = 'o')]
    pub output: Option<String>,

    /// introduction text written before a Markdown table
    #[argh(option)]
    pub intro: Option<String>,

    /// file whose content is written before a Markdown table
    #[argh(option)]
    pub intro_file: Option<String>,

    /// number of header rows preceding the Markdown separator (default: 1)
    #[argh(option)]
    pub header_rows: Option<usize>,

    /// keep a single period column: YYYY-MM or "latest"
    #[argh(option)]
    pub month: Option<String>,

    /// render without validating the input first
    #[argh(switch)]
    pub skip_check: bool,

    /// display details while processing
    #[argh(switch)]
    pub verbose: bool,
}

#[derive(FromArgs)]
/// print a sample configuration file and exit
#[argh(subcommand, name = "sample-config")]
pub struct SampleConfigArgs {}

impl Args {
    pub fn is_verbose(&self) -> bool {
        match &self.command {
            Command::Check(c) => c.verbose,
            Command::Render(r) => r.verbose,
            Command::SampleConfig(_) => false,
        }
    }
}
