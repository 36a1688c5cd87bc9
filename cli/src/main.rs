use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser};
use serde::Serialize;
use serde_json::Value;
use xyml::Options;

#[derive(Parser, Debug)]
#[command(name = "xyml", version, about = "XYML to JSON converter")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Key under which a node's own value is stored.
    #[arg(long = "valueKey", alias = "value-key", value_name = "key", default_value = "#")]
    value_key: String,

    /// Prefix prepended to attribute keys.
    #[arg(long = "attrPrefix", alias = "attr-prefix", value_name = "prefix", default_value = "$")]
    attribute_prefix: String,

    /// Keep single-value wrapper objects instead of collapsing them.
    #[arg(long = "no-collapse-values", action = ArgAction::SetFalse, default_value_t = true)]
    collapse_values: bool,

    /// Collapse single-item arrays to their item.
    #[arg(long = "collapse-arrays")]
    collapse_arrays: bool,

    /// Keep leaf values wrapped under the value key.
    #[arg(long = "no-summarize", action = ArgAction::SetFalse, default_value_t = true)]
    summarize: bool,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Indentation width used with --pretty (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let options = Options::default()
        .with_value_key(args.value_key.clone())
        .with_attribute_prefix(args.attribute_prefix.clone())
        .with_collapse_single_value_objects(args.collapse_values)
        .with_collapse_singleton_arrays(args.collapse_arrays)
        .with_summarize_leaf_values(args.summarize);

    let value = match args.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            xyml::parse_with_options(&buf, &options)?
        }
        Some(path) => xyml::parse_file_with_options(path, &options)?,
    };

    let indent = if args.pretty { args.indent } else { 0 };
    with_output_writer(args.output.as_deref(), |writer| {
        write_json(writer, &value, indent)
    })
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
