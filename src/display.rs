use owo_colors::{OwoColorize, Stream, Style};

use crate::types::{OutputFormat, ScenarioReport};

fn style_label() -> Style {
    Style::new().dimmed()
}

/// Render one report in the requested format, newline-terminated.
pub fn format_report(
    report: &ScenarioReport,
    format: &OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Default => Ok(format_default(report)),
        OutputFormat::Short => Ok(format_short(report)),
        OutputFormat::Json => format_json(report),
    }
}

/// The four-element tuple `[user, system, elapsed, raw]`, each element quoted
/// and escaped so the raw capture stays on one line.
pub fn format_default(report: &ScenarioReport) -> String {
    let (user, system, elapsed, raw) = report.sample.as_tuple();
    format!("[{:?}, {:?}, {:?}, {:?}]\n", user, system, elapsed, raw)
}

/// Compact single line: scenario flags followed by the three times.
pub fn format_short(report: &ScenarioReport) -> String {
    let label = style_label();

    let flags = format!("-c {:<5} -i {:<5}", report.concurrency, report.iterations);
    let flags_colored = flags
        .if_supports_color(Stream::Stdout, |s| s.cyan())
        .to_string();

    let field = |name: &str, value: &str| {
        format!(
            "{} {}",
            name.if_supports_color(Stream::Stdout, |s| s.style(label)),
            value.if_supports_color(Stream::Stdout, |s| s.yellow())
        )
    };

    format!(
        "{}  {}  {}  {}\n",
        flags_colored,
        field("user", &report.sample.user_time),
        field("system", &report.sample.system_time),
        field("elapsed", &report.sample.elapsed_time),
    )
}

/// One JSON object per line.
pub fn format_json(report: &ScenarioReport) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(report)?;
    line.push('\n');
    Ok(line)
}
