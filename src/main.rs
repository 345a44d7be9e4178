//! CLI entrypoint.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use regdoc::input::read_nodes;
use regdoc::logger::init_logger;
use regdoc::{CmarkRenderer, RegdocError, SiteConfig, is_library, parse_url, parse_usage, render_page};
use tracing::{info, warn};

#[derive(Args, Clone)]
struct GlobalArgs {
	/// Show debug logs
	#[arg(short = 'v', long, global = true, default_value_t = false)]
	verbose: bool,

	/// Only show errors
	#[arg(short = 'q', long, global = true, default_value_t = false)]
	quiet: bool,

	/// Disable ANSI colors in CLI output
	#[arg(long, global = true, default_value_t = false)]
	no_color: bool,
}

#[derive(Args, Clone)]
struct RenderArgs {
	/// JSON array of doc nodes, or `-` for stdin
	input: PathBuf,

	/// Module url the nodes were extracted from
	#[arg(short = 'u', long)]
	url: String,

	/// Dotted item path to render instead of the module root
	#[arg(value_name = "ITEM")]
	item: Option<String>,

	/// Include private items
	#[arg(short = 'p', long, default_value_t = false)]
	private: bool,

	/// Base url for social preview images
	#[arg(long)]
	base_url: Option<String>,

	/// Site config file (JSON)
	#[arg(short = 'c', long)]
	config: Option<PathBuf>,

	/// Write the page here instead of stdout
	#[arg(short = 'o', long)]
	output: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct UsageArgs {
	/// Module url
	url: String,

	/// Dotted item path
	#[arg(value_name = "ITEM")]
	item: Option<String>,

	/// Import the item with `import type`
	#[arg(short = 't', long = "type", default_value_t = false)]
	is_type: bool,
}

#[derive(Args, Clone)]
struct ParseUrlArgs {
	/// Module url
	url: String,

	/// Prefix identifying built-in libraries
	#[arg(long)]
	library_prefix: Option<String>,
}

#[derive(Subcommand, Clone)]
enum Command {
	/// Render a module or item page as HTML.
	Render(RenderArgs),
	/// Print the import statement for a module or item.
	Usage(UsageArgs),
	/// Print the registry fields of a module url as JSON.
	ParseUrl(ParseUrlArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the regdoc CLI.
struct Cli {
	#[command(subcommand)]
	command: Command,

	#[command(flatten)]
	global: GlobalArgs,
}

fn main() {
	let cli = Cli::parse();
	init_logger(cli.global.verbose, cli.global.quiet, cli.global.no_color);
	let no_color = cli.global.no_color;

	if let Err(e) = run(cli) {
		if no_color {
			eprintln!("error: {e}");
		} else {
			eprintln!("{} {e}", "error:".red().bold());
		}
		process::exit(1);
	}
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	match cli.command {
		Command::Render(args) => run_render(&args),
		Command::Usage(args) => {
			let usage = parse_usage(&args.url, args.item.as_deref(), args.is_type);
			print!("{}", usage.import_statement);
			Ok(())
		}
		Command::ParseUrl(args) => run_parse_url(&args),
	}
}

fn load_config(args: &RenderArgs) -> Result<SiteConfig, RegdocError> {
	let config = match &args.config {
		Some(path) => SiteConfig::load(path)?,
		None => SiteConfig::default(),
	};
	let mut config = config.apply_env()?;
	if let Some(base_url) = &args.base_url {
		config = config.with_base_url(base_url.clone());
	}
	if args.private {
		config = config.with_include_private(true);
	}
	Ok(config)
}

fn run_render(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
	let config = load_config(args)?;
	let entries = read_nodes(&args.input)?;
	if parse_url(&args.url).is_none() && !is_library(&args.url, &config.library_prefix) {
		warn!(url = %args.url, "url is neither a registry url nor a library reference");
	}

	let page = render_page(&entries, &args.url, args.item.as_deref(), &config, &CmarkRenderer);
	if page.is_error() {
		warn!(item = ?args.item, url = %args.url, "entry not found");
	}
	let html = page.to_html();

	match &args.output {
		Some(path) => {
			fs::write(path, html).map_err(|err| RegdocError::io(path, err))?;
			info!(path = %path.display(), "wrote page");
		}
		None => print!("{html}"),
	}
	Ok(())
}

fn run_parse_url(args: &ParseUrlArgs) -> Result<(), Box<dyn Error>> {
	let prefix = match &args.library_prefix {
		Some(prefix) => prefix.clone(),
		None => SiteConfig::default().apply_env()?.library_prefix,
	};
	if is_library(&args.url, &prefix) {
		println!("{} is a library reference", args.url);
		return Ok(());
	}
	match parse_url(&args.url) {
		Some(parsed) => println!("{}", serde_json::to_string_pretty(&parsed)?),
		None => return Err(format!("'{}' is not an http(s) module url", args.url).into()),
	}
	Ok(())
}
