//! CLI output formatting

use crate::{
    core::{PipelineDocument, PipelineResult},
    execution::ExecutionEvent,
};
use console::Emoji;
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format an execution event for display
pub fn format_execution_event(event: &ExecutionEvent) -> String {
    match event {
        ExecutionEvent::PipelineStarted {
            execution_id,
            pipeline_name,
        } => format!(
            "{} Executing pipeline {} ({})",
            ROCKET,
            style(pipeline_name).bold(),
            style(&execution_id.to_string()[..8]).dim()
        ),
        ExecutionEvent::StepStarted { index, kind } => {
            format!("{} step {} ({})", SPINNER, index + 1, style(kind).dim())
        }
        ExecutionEvent::StepCompleted {
            index,
            command,
            elapsed,
        } => format!(
            "{} step {} [{}] {}",
            CHECK,
            index + 1,
            style(command).green(),
            style(format_duration(*elapsed)).dim()
        ),
        ExecutionEvent::StepFailed {
            index,
            command,
            error,
        } => format!(
            "{} step {} [{}]: {}",
            CROSS,
            index + 1,
            style(command).red(),
            style(error).dim()
        ),
        ExecutionEvent::PipelineCompleted {
            success,
            total_time,
            ..
        } => {
            let status = if *success {
                style("completed").green().to_string()
            } else {
                style("failed").red().to_string()
            };
            format!(
                "{} Pipeline {} in {}",
                INFO,
                status,
                format_duration(*total_time)
            )
        }
    }
}

/// Describe the positional arguments a pipeline expects
pub fn format_argument_list(document: &PipelineDocument) -> String {
    let mut line = format!("You must provide {} argument(s):", document.inputs.len());
    for input in &document.inputs {
        if input.default.is_empty() {
            line.push_str(&format!(" <{}>", input.name));
        } else {
            line.push_str(&format!(" <{}=\"{}\">", input.name, input.default));
        }
    }
    line
}

/// Total run time line for `--time`
pub fn format_total_time(result: &PipelineResult) -> String {
    format!("Execution time: {}", format_duration(result.total_time))
}

/// One line per step for `--time-cmd`
pub fn format_step_timings(result: &PipelineResult) -> Vec<String> {
    result
        .exec_steps
        .iter()
        .map(|step| {
            format!(
                "Command [ {} ] - Time [ {} ]",
                step.command,
                format_duration(step.elapsed)
            )
        })
        .collect()
}

/// Summary lines for `validate`
pub fn format_document_summary(document: &PipelineDocument) -> Vec<String> {
    vec![
        format!("  Name: {}", style(&document.name).bold()),
        format!("  Inputs: {}", style(document.inputs.len()).cyan()),
        format!("  Declarations: {}", style(document.declarations.len()).cyan()),
        format!("  Steps: {}", style(document.steps.len()).cyan()),
        format!(
            "  Output: {}",
            style(document.output.as_deref().unwrap_or("(none)")).cyan()
        ),
    ]
}

/// Human-readable duration
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        format!("{:.2}ms", duration.as_secs_f64() * 1000.0)
    } else if secs < 60 {
        format!("{:.2}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
