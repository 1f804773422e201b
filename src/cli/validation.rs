// validation.rs - Input validation utilities

use crate::cli::args::{CheckArgs, RenderArgs};
use crate::core::PeriodSelector;
use crate::error::{PivotError, Result};
use crate::output::{check_dir, is_file_valid, MarkdownOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a render run needs, resolved from the arguments
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub markdown: MarkdownOptions,
    pub period: Option<PeriodSelector>,
    pub run_check: bool,
}

fn validate_input(input: &str) -> Result<PathBuf> {
    let path = PathBuf::from(input);
    if !is_file_valid(&path) {
        return Err(PivotError::InvalidInput { path });
    }
    Ok(path)
}

/// Validate the check command arguments
pub fn validate_check_args(args: &CheckArgs) -> Result<PathBuf> {
    validate_input(&args.input)
}

/// Validate all render arguments before any file is touched
pub fn validate_render_args(args: &RenderArgs) -> Result<RenderPlan> {
    let input = validate_input(&args.input)?;

    let output = PathBuf::from(
        args.output
            .as_deref()
            .ok_or_else(|| PivotError::Config("--output is required".to_string()))?,
    );
    check_dir(&output)?;

    if args.intro.is_some() && args.intro_file.is_some() {
        return Err(PivotError::Config(
            "--intro and --intro-file cannot be used together".to_string(),
        ));
    }
    let introduction = match &args.intro_file {
        Some(file) => Some(load_intro_file(Path::new(file))?),
        None => args.intro.clone(),
    };

    let header_rows = args.header_rows.unwrap_or(1);
    if header_rows == 0 {
        return Err(PivotError::Config(
            "--header-rows must be at least 1".to_string(),
        ));
    }

    let period = args
        .month
        .as_deref()
        .map(str::parse::<PeriodSelector>)
        .transpose()?;

    Ok(RenderPlan {
        input,
        output,
        markdown: MarkdownOptions {
            introduction,
            header_rows,
        },
        period,
        run_check: !args.skip_check,
    })
}

/// Read an introduction file, dropping a single trailing newline (one is written back after it)
fn load_intro_file(file_path: &Path) -> Result<String> {
    let content = fs::read_to_string(file_path).map_err(|e| PivotError::io(file_path, e))?;
    let trimmed = content
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(content.as_str());
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        dir: tempfile::TempDir,
        input: String,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pivot.csv");
        fs::write(&input, ",2023-01\nbasil,1\n").unwrap();
        Fixture {
            input: input.to_string_lossy().into_owned(),
            dir,
        }
    }

    fn render_args(fx: &Fixture) -> RenderArgs {
        RenderArgs {
            input: fx.input.clone(),
            output: Some(fx.dir.path().join("out.md").to_string_lossy().into_owned()),
            intro: None,
            intro_file: None,
            header_rows: None,
            month: None,
            skip_check: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_render_args() {
        let fx = fixture();
        let mut args = render_args(&fx);
        args.month = Some("LATEST".to_string());
        args.intro = Some("# Title".to_string());

        let plan = validate_render_args(&args).unwrap();
        assert_eq!(plan.markdown.header_rows, 1);
        assert_eq!(plan.markdown.introduction.as_deref(), Some("# Title"));
        assert_eq!(plan.period, Some(PeriodSelector::Latest));
        assert!(plan.run_check);
    }

    #[test]
    fn test_missing_input_and_directory() {
        let fx = fixture();

        let mut args = render_args(&fx);
        args.input = fx.dir.path().to_string_lossy().into_owned();
        assert!(matches!(
            validate_render_args(&args),
            Err(PivotError::InvalidInput { .. })
        ));

        let mut args = render_args(&fx);
        args.output = Some(fx.dir.path().join("junk").join("out.md").to_string_lossy().into_owned());
        assert!(matches!(
            validate_render_args(&args),
            Err(PivotError::MissingDirectory { .. })
        ));

        let mut args = render_args(&fx);
        args.output = None;
        assert!(matches!(validate_render_args(&args), Err(PivotError::Config(_))));
    }

    #[test]
    fn test_bad_month_rejected() {
        let fx = fixture();
        let mut args = render_args(&fx);
        args.month = Some("2003-08".to_string());
        assert!(matches!(
            validate_render_args(&args),
            Err(PivotError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn test_zero_header_rows_rejected() {
        let fx = fixture();
        let mut args = render_args(&fx);
        args.header_rows = Some(0);
        match validate_render_args(&args) {
            Err(PivotError::Config(msg)) => assert!(msg.contains("header-rows")),
            other => panic!("unexpected result: {:?}", other),
        }

        args.header_rows = Some(2);
        assert_eq!(validate_render_args(&args).unwrap().markdown.header_rows, 2);
    }

    #[test]
    fn test_intro_file() {
        let fx = fixture();
        let intro = fx.dir.path().join("intro.md");
        fs::write(&intro, "# Extract\n\nTop submitters\n").unwrap();

        let mut args = render_args(&fx);
        args.intro_file = Some(intro.to_string_lossy().into_owned());
        let plan = validate_render_args(&args).unwrap();
        assert_eq!(
            plan.markdown.introduction.as_deref(),
            Some("# Extract\n\nTop submitters")
        );

        args.intro = Some("inline".to_string());
        assert!(matches!(validate_render_args(&args), Err(PivotError::Config(_))));
    }

    #[test]
    fn test_check_args() {
        let fx = fixture();
        let args = CheckArgs {
            input: fx.input.clone(),
            verbose: true,
        };
        assert!(validate_check_args(&args).is_ok());

        let args = CheckArgs {
            input: "unexistantFile.txt".to_string(),
            verbose: false,
        };
        assert!(validate_check_args(&args).is_err());
    }
}
