use clap::{CommandFactory, Parser};
use std::path::PathBuf;

mod helpers;
mod notes;
mod openaiapi;
mod prompts;

#[derive(Parser)]
struct Cli {
	#[clap(long, default_value = "chat")]
	/// request shape: "chat" (current) or "completion" (legacy pipeline)
	style: String,
	#[clap(long)]
	/// notes to summarize (default depends on --style: release_notes.txt for
	/// chat, release_notes_aggregated.txt for completion)
	input_file: Option<PathBuf>,
	#[clap(long, default_value = "release_notes_summary.txt")]
	output_file: PathBuf,
	#[clap(long, default_value = "false")]
	/// dump last_request.json and last_response.json for debugging
	write_req_resp: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();

	let style = match openaiapi::ApiStyle::parse(&args.style) {
		Some(style) => style,
		None => {
			let mut cmd = Cli::command();
			cmd.error(
				clap::error::ErrorKind::InvalidValue,
				"--style must be chat or completion, see --help",
				).exit();
		},
	};

	// logs go to stderr, stdout carries only the summary
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
		)
		.with_writer(std::io::stderr)
		.init();

	let mut client = openaiapi::Client::from_env();
	client.write_req_resp = args.write_req_resp;

	let input_file = args
		.input_file
		.unwrap_or_else(|| PathBuf::from(notes::default_summary_input(style)));

	let summary = notes::summarize(&client, &input_file, &args.output_file, style).await?;
	println!("{}", summary);
	Ok(())
}
