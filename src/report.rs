//! Per-invocation driver and output rendering.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use time::format_description::well_known::Rfc3339;

use crate::estimator::{aggregate, estimate, whole_seconds};
use crate::model::{AggregateResult, Parameters, SessionResult};
use crate::repository::CommitSource;
use crate::util::{format_duration, DateRenderer};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Estimate for one author who had at least one commit
#[derive(Debug, Clone)]
pub struct AuthorReport {
    pub author: String,
    pub result: SessionResult,
}

/// Everything produced by one invocation
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub authors: Vec<AuthorReport>,
    /// Present whenever more than one author was requested
    pub combined: Option<AggregateResult>,
}

/// Query and estimate each author in turn.
///
/// A failed query is logged and the author skipped; authors without commits are
/// skipped silently.
pub fn collect<S>(source: &S, usernames: &[String], params: &Parameters) -> Summary
where
    S: CommitSource + ?Sized,
{
    let mut authors = Vec::with_capacity(usernames.len());

    for username in usernames {
        let commits = match source.commits_by(username, params.scan_all_branches) {
            Ok(commits) => commits,
            Err(e) => {
                tracing::warn!("Couldn't get log for {}: {:#}", username, e);
                continue;
            }
        };

        match estimate(&commits, params) {
            Some(result) => authors.push(AuthorReport {
                author: username.clone(),
                result,
            }),
            None => tracing::debug!(author = %username, "no commits, skipping"),
        }
    }

    let combined = (usernames.len() > 1).then(|| aggregate(authors.iter().map(|a| &a.result)));

    Summary { authors, combined }
}

/// Line reported for a single author
pub fn author_line(report: &AuthorReport, params: &Parameters, dates: &dyn DateRenderer) -> String {
    let result = &report.result;
    format!(
        "User \"{}\" commited {} times between {} and {} and spend ca. {} (DD:HH:MM:SS) in {} sessions on this repository.",
        report.author,
        result.commit_count,
        dates.render(result.first_commit),
        dates.render(result.last_commit),
        format_duration(whole_seconds(result.total_time), params.include_days),
        result.sessions,
    )
}

/// Line reported for all selected authors together
pub fn combined_line(combined: &AggregateResult, params: &Parameters) -> String {
    format!(
        "All selected users combined commited {} commits and spend ca. {} (DD:HH:MM:SS) in {} sessions on this repository.",
        combined.commit_count,
        format_duration(whole_seconds(combined.total_time), params.include_days),
        combined.sessions,
    )
}

pub fn write_text<W: Write>(
    out: &mut W,
    summary: &Summary,
    params: &Parameters,
    dates: &dyn DateRenderer,
) -> Result<()> {
    for report in &summary.authors {
        writeln!(out, "{}", author_line(report, params, dates))?;
    }
    if let Some(combined) = &summary.combined {
        writeln!(out, "{}", combined_line(combined, params))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonSummary {
    authors: Vec<JsonAuthor>,
    combined: Option<JsonCombined>,
}

#[derive(Serialize)]
struct JsonAuthor {
    author: String,
    commits: u64,
    sessions: u64,
    total_seconds: u64,
    duration: String,
    first_commit: String,
    last_commit: String,
}

#[derive(Serialize)]
struct JsonCombined {
    commits: u64,
    sessions: u64,
    total_seconds: u64,
    duration: String,
}

pub fn write_json<W: Write>(out: &mut W, summary: &Summary, params: &Parameters) -> Result<()> {
    let mut authors = Vec::with_capacity(summary.authors.len());
    for report in &summary.authors {
        let result = &report.result;
        let total_seconds = whole_seconds(result.total_time);
        authors.push(JsonAuthor {
            author: report.author.clone(),
            commits: result.commit_count,
            sessions: result.sessions,
            total_seconds,
            duration: format_duration(total_seconds, params.include_days),
            first_commit: result.first_commit.format(&Rfc3339)?,
            last_commit: result.last_commit.format(&Rfc3339)?,
        });
    }

    let combined = summary.combined.map(|c| {
        let total_seconds = whole_seconds(c.total_time);
        JsonCombined {
            commits: c.commit_count,
            sessions: c.sessions,
            total_seconds,
            duration: format_duration(total_seconds, params.include_days),
        }
    });

    serde_json::to_writer_pretty(&mut *out, &JsonSummary { authors, combined })?;
    writeln!(out)?;
    Ok(())
}

/// Estimate every author and write the report in the requested format
pub fn run<S, W>(
    source: &S,
    usernames: &[String],
    params: &Parameters,
    dates: &dyn DateRenderer,
    format: OutputFormat,
    out: &mut W,
) -> Result<Summary>
where
    S: CommitSource + ?Sized,
    W: Write,
{
    let summary = collect(source, usernames, params);
    match format {
        OutputFormat::Text => write_text(out, &summary, params, dates)?,
        OutputFormat::Json => write_json(out, &summary, params)?,
    }
    Ok(summary)
}
