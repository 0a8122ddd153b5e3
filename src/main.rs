use anyhow::{Context, Result};
use simplepipe::cli::{
    commands::{ArgsCommand, RunCommand, ValidateCommand},
    logging::{self, LogSink},
    output::*,
    Cli, Command,
};
use simplepipe::{parse_file, ExecutionEngine, PipelineDocument, RunnerConfig, SubprocessRunner};
use tracing::instrument::WithSubscriber;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    logging::init(cli.verbose)?;

    match &cli.command {
        Command::Run(cmd) => run_pipeline(cmd, cli.verbose).await?,
        Command::Args(cmd) => show_arguments(cmd)?,
        Command::Validate(cmd) => validate_pipeline(cmd)?,
    }

    Ok(())
}

fn load(path: &std::path::Path) -> Result<PipelineDocument> {
    parse_file(path).with_context(|| format!("Error parsing pipeline file {}", path.display()))
}

async fn run_pipeline(cmd: &RunCommand, verbose: bool) -> Result<()> {
    let document = load(&cmd.file)?;
    let quiet = cmd.output_only || cmd.json;

    if !quiet {
        println!("{} simplepipe v{}", INFO, env!("CARGO_PKG_VERSION"));
        println!("{} Pipeline {} loaded", INFO, style(&document.name).bold());
    }

    let arguments = match document.bind_arguments(cmd.args.iter().cloned()) {
        Ok(arguments) => arguments,
        Err(e) => {
            eprintln!("{} {}", CROSS, style(&e).red());
            eprintln!("{}", format_argument_list(&document));
            std::process::exit(1);
        }
    };

    let mut engine = ExecutionEngine::new(SubprocessRunner::new(RunnerConfig::default()));
    if !quiet {
        engine.add_event_handler(|event| println!("{}", format_execution_event(&event)));
    }

    let run = engine.execute(&document, &arguments);
    let outcome = match &cmd.log_file {
        Some(path) => {
            let sink = LogSink::open(path, verbose)?;
            debug!("Writing run log to {}", sink.path().display());
            run.with_subscriber(sink.dispatch()).await
        }
        None => run.await,
    };

    let (result, failure) = match outcome {
        Ok(result) => (result, None),
        Err(failure) => {
            let message = failure.to_string();
            (failure.result, Some(message))
        }
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if cmd.output_only {
        println!("{}", result.output);
    } else {
        println!("Pipeline output: {}", result.output);
    }

    if cmd.time {
        println!("{}", format_total_time(&result));
    }
    if cmd.time_cmd {
        for line in format_step_timings(&result) {
            println!("{}", line);
        }
    }

    if let Some(message) = failure {
        eprintln!(
            "\n{} {} {}",
            CROSS,
            style(&document.name).bold(),
            style("failed").red()
        );
        if let Some((index, step)) = result.failed_step() {
            eprintln!(
                "  step {} [{}]: {}",
                index + 1,
                step.command,
                step.error.as_deref().unwrap_or_default()
            );
        }
        error!("{}", message);
        std::process::exit(1);
    }

    Ok(())
}

fn show_arguments(cmd: &ArgsCommand) -> Result<()> {
    let document = load(&cmd.file)?;
    println!("{}", format_argument_list(&document));
    Ok(())
}

fn validate_pipeline(cmd: &ValidateCommand) -> Result<()> {
    match load(&cmd.file) {
        Ok(document) => {
            println!("{} Pipeline file is valid!", CHECK);
            for line in format_document_summary(&document) {
                println!("{}", line);
            }

            if cmd.json {
                let json = serde_json::to_string_pretty(&document)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}
