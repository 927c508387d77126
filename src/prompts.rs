#![allow(dead_code)]

// Prompt text sent to the generation backend. The completion-style prompts
// are the ones the legacy pipeline scripts sent, kept verbatim.

pub const DETAILED_NOTES_PERSONA: &str = r#"You are the release-notes writer for this repository.
Write detailed release notes for the release described by the git diff you are given.
Rules:
- Tone: mildly sarcastic, but always informative. The reader should learn
  exactly what changed while being mildly entertained.
- Group related changes and describe their intent, not line-by-line edits.
- Never mention internal build artifacts such as lock files
  (package-lock.json, yarn.lock, pnpm-lock.yaml) or generated bundles.
- Respond with the release notes only, no surrounding narration."#;

pub const SUMMARY_PERSONA: &str =
	"You are a summarizer, provide a concise summary of the release notes you are given.";

/// System instruction for the detailed generator. The -rc normalization is
/// advisory: the backend is told which label to print, nothing rewrites the
/// generated text locally.
pub fn detailed_notes_instruction(version: &str) -> String {
	let release = version.strip_suffix("-rc").unwrap_or(version);
	let mut instruction = format!("{DETAILED_NOTES_PERSONA}\n- Title the notes as version {release}.");
	if release != version {
		instruction.push_str(&format!(
			" The label {version} is a release candidate: drop the -rc suffix and present the release as {release}."
		));
	}
	instruction
}

pub fn detailed_notes_payload(version: &str, diff: &str) -> String {
	format!("Version: {version}\n\nGit diff:\n{diff}")
}

pub fn detailed_completion_prompt(diff: &str) -> String {
	format!("Generate detailed release notes based on this git diff: {diff}")
}

pub fn summary_completion_prompt(notes: &str) -> String {
	format!("Summarize these release notes: {notes}")
}
