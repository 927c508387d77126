#![allow(dead_code)]

use std::path::Path;
use thiserror::Error;

use crate::helpers::{self, HelperError};
use crate::openaiapi::{ApiError, ApiStyle, Client, Request};
use crate::prompts;

pub const DIFF_FILE: &str = "changes.diff";
pub const DETAILED_NOTES_FILE: &str = "release_notes.txt";
pub const AGGREGATED_NOTES_FILE: &str = "release_notes_aggregated.txt";
pub const SUMMARY_FILE: &str = "release_notes_summary.txt";

#[derive(Debug, Error)]
pub enum NotesError {
	#[error("file error: {0}")]
	Io(#[from] HelperError),
	#[error("backend error: {0}")]
	Backend(#[from] ApiError),
}

/// Which notes file the summarizer reads when none is given explicitly. The
/// legacy completion-style script summarized the aggregated notes, the newer
/// chat-style one the detailed notes.
pub fn default_summary_input(style: ApiStyle) -> &'static str {
	match style {
		ApiStyle::Chat => DETAILED_NOTES_FILE,
		ApiStyle::Completion => AGGREGATED_NOTES_FILE,
	}
}

/// Generate detailed release notes from a git diff: read the diff, issue one
/// generation request, overwrite the output file with the trimmed response
/// and hand the same text back for echoing.
pub async fn generate(
	client: &Client,
	version: &str,
	diff_file: &Path,
	output_file: &Path,
	style: ApiStyle,
) -> Result<String, NotesError> {
	// the diff is read before anything touches the network, a missing file
	// never turns into a request
	let diff = helpers::read_input(diff_file)?;
	tracing::info!(file = %diff_file.display(), bytes = diff.len(), "read diff");

	let request = match style {
		ApiStyle::Chat => Request::chat(
			client.model(),
			prompts::detailed_notes_instruction(version),
			prompts::detailed_notes_payload(version, &diff),
		),
		ApiStyle::Completion => {
			Request::completion(client.model(), prompts::detailed_completion_prompt(&diff))
		},
	};

	let notes = client.call(&request).await?;
	helpers::write_output(output_file, &notes)?;
	tracing::info!(file = %output_file.display(), chars = notes.len(), "wrote release notes");
	Ok(notes)
}

/// Compress an existing release-notes document into a short summary. Same
/// shape as `generate`: read, one request, overwrite, return for echoing.
pub async fn summarize(
	client: &Client,
	input_file: &Path,
	output_file: &Path,
	style: ApiStyle,
) -> Result<String, NotesError> {
	let document = helpers::read_input(input_file)?;
	tracing::info!(file = %input_file.display(), bytes = document.len(), "read release notes");

	let request = match style {
		ApiStyle::Chat => Request::chat(client.model(), prompts::SUMMARY_PERSONA.to_string(), document),
		ApiStyle::Completion => {
			Request::completion(client.model(), prompts::summary_completion_prompt(&document))
		},
	};

	let summary = client.call(&request).await?;
	helpers::write_output(output_file, &summary)?;
	tracing::info!(file = %output_file.display(), chars = summary.len(), "wrote summary");
	Ok(summary)
}
