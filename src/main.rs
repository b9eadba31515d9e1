use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gpa_calc::grading::{GradeError, RawCumulative, RawSubject};
use gpa_calc::output::{OutputFormat, ScoreKind};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive calculator (default if no subcommand)
    Tui,
    /// Calculate a term GPA from subject credits and grades
    Gpa {
        /// Subjects as CREDITS:GRADE, e.g. 3:A 4:S (grades S, A, B, C, D, E).
        /// Put a negative entry after `--`.
        #[arg(required = true, value_parser = parse_subject)]
        subjects: Vec<RawSubject>,
    },
    /// Blend a previous CGPA with the current term's GPA
    Cgpa {
        /// Cumulative GPA before this term
        #[arg(long, allow_negative_numbers = true)]
        previous_cgpa: String,
        /// GPA of this term
        #[arg(long, allow_negative_numbers = true)]
        current_gpa: String,
        /// Credits counted in the previous CGPA
        #[arg(long, allow_negative_numbers = true)]
        total_credits: String,
        /// Credits of this term
        #[arg(long, allow_negative_numbers = true)]
        current_credits: String,
    },
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gpa-calc")]
#[command(about = "GPA and CGPA calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gpa-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format for gpa/cgpa results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_subject(arg: &str) -> Result<RawSubject, String> {
    gpa_calc::grading::parse_subject_arg(arg).map_err(|e| format!("{:#}", e))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    gpa_calc::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Tui);
    let config_path = cli.config.map(PathBuf::from);

    // Init writes the config, so it must not depend on loading one
    if let Commands::Init { force } = command {
        match gpa_calc::config::write_default_config(config_path, force) {
            Ok(path) => {
                println!("Wrote default config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match gpa_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = gpa_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let bounds = config.effective_bounds();
    tracing::debug!(?bounds, max_subjects = config.max_subjects(), "config loaded");

    let use_colors = !cli.no_color && gpa_calc::output::should_use_colors();

    let outcome = match command {
        Commands::Tui => {
            let theme = gpa_calc::tui::resolve_theme(config.theme_mode());
            let app = gpa_calc::tui::App::new(&config, theme);
            if let Err(e) = gpa_calc::tui::run_tui(app).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Gpa { subjects } => {
            match gpa_calc::grading::parse_subjects(&subjects, &bounds) {
                Ok(entries) => {
                    if cli.verbose && cli.format == OutputFormat::Human {
                        let rows = gpa_calc::grading::gpa_breakdown(&entries);
                        println!("{}", gpa_calc::output::format_breakdown(&rows, use_colors));
                        println!();
                    }
                    gpa_calc::grading::compute_gpa(&entries).map(|r| (ScoreKind::Gpa, r))
                }
                Err(e) => Err(e),
            }
        }
        Commands::Cgpa {
            previous_cgpa,
            current_gpa,
            total_credits,
            current_credits,
        } => {
            let raw = RawCumulative {
                previous_cgpa,
                current_gpa,
                total_credits,
                current_credits,
            };
            gpa_calc::grading::cgpa_from_form(&raw, &bounds).map(|r| (ScoreKind::Cgpa, r))
        }
        Commands::Init { .. } => unreachable!("handled before config load"),
    };

    let (kind, result) = match outcome {
        Ok(ok) => ok,
        Err(e) => report_input_error(&e),
    };

    tracing::debug!(
        kind = kind.label(),
        score = result.score,
        total_weight = result.total_weight,
        "calculation succeeded"
    );

    match cli.format {
        OutputFormat::Human => {
            println!("{}", gpa_calc::output::format_result(kind, &result, use_colors))
        }
        OutputFormat::Tsv => println!("{}", gpa_calc::output::format_tsv(kind, &result)),
        OutputFormat::Json => match gpa_calc::output::format_json(kind, &result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}

fn report_input_error(error: &GradeError) -> ! {
    tracing::debug!(%error, "input rejected");
    eprintln!("{}", error);
    std::process::exit(EXIT_INPUT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_calc::grading::{cgpa_from_form, gpa_from_form, Bounds};

    #[test]
    fn test_negative_cgpa_reaches_validator() {
        let cli = Cli::try_parse_from([
            "gpa-calc",
            "cgpa",
            "--previous-cgpa",
            "-1",
            "--current-gpa",
            "8",
            "--total-credits",
            "10",
            "--current-credits",
            "10",
        ])
        .unwrap();

        let Some(Commands::Cgpa {
            previous_cgpa,
            current_gpa,
            total_credits,
            current_credits,
        }) = cli.command
        else {
            panic!("expected cgpa command");
        };
        assert_eq!(previous_cgpa, "-1");

        let raw = RawCumulative {
            previous_cgpa,
            current_gpa,
            total_credits,
            current_credits,
        };
        let err = cgpa_from_form(&raw, &Bounds::default()).unwrap_err();
        assert_eq!(err.to_string(), "Previous CGPA should be between 0 and 10");
    }

    #[test]
    fn test_negative_subject_after_separator() {
        let cli = Cli::try_parse_from(["gpa-calc", "gpa", "--", "-1:A"]).unwrap();
        let Some(Commands::Gpa { subjects }) = cli.command else {
            panic!("expected gpa command");
        };
        let err = gpa_from_form(&subjects, &Bounds::default()).unwrap_err();
        assert_eq!(err.to_string(), "Subject 1 credits should be between 0.5 and 6");
    }

    #[test]
    fn test_trailing_flags_still_parsed() {
        let cli = Cli::try_parse_from(["gpa-calc", "gpa", "3:A", "4:S", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let Some(Commands::Gpa { subjects }) = cli.command else {
            panic!("expected gpa command");
        };
        assert_eq!(subjects.len(), 2);
    }
}
