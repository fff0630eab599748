use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use tag_cloud_core::{TagCloud, TagCloudOptions, parse_limit};

/// Build an HTML tag cloud of the most frequent words in a text file.
///
/// Any of INPUT, --output or --count left out is asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "tag-cloud", version)]
struct Args {
    /// Text file to analyze
    input: Option<PathBuf>,

    /// HTML file to write (defaults to INPUT with an .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of words to display (negative values display none)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<String>,

    /// Every character treated as a word separator
    #[arg(long)]
    separators: Option<String>,

    /// Stylesheet to link from the page (repeatable, replaces the defaults)
    #[arg(long = "stylesheet")]
    stylesheets: Vec<String>,
}

/// Prints `question` and returns the next stdin line without its line end.
fn prompt(stdin: &mut impl BufRead, question: &str) -> io::Result<String> {
    println!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    if stdin.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(answer.trim_end_matches(['\r', '\n']).to_owned())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdin = io::stdin().lock();

    let input = match args.input {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut stdin, "Enter a valid file in location: ")?),
    };

    let output = match args.output {
        Some(path) => path,
        None => {
            let answer = prompt(&mut stdin, "Enter a valid file out location (empty for default): ")?;
            if answer.is_empty() {
                TagCloud::default_output_path(&input)?
            } else {
                PathBuf::from(answer)
            }
        }
    };

    let mut options = TagCloudOptions::default();
    options.limit = match args.count {
        Some(count) => parse_limit(&count)?,
        None => parse_limit(&prompt(&mut stdin, "Enter the number of words you would like to tag cloud: ")?)?,
    };
    if let Some(spec) = &args.separators {
        options.set_separators(spec);
    }
    if !args.stylesheets.is_empty() {
        options.set_stylesheets(args.stylesheets);
    }

    let cloud = TagCloud::from_path(&input, options.separators())?;
    if let Some(err) = cloud.interrupted() {
        warn!("Input was not read to the end, the cloud only covers what was read: {}", err);
    }
    info!(
        "{} distinct words in {}, displaying {}",
        cloud.frequencies().len(),
        input.display(),
        options.limit.min(cloud.frequencies().len())
    );

    cloud.write_to_path(&output, &options)?;
    println!("Tag cloud written to {}", output.display());
    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
