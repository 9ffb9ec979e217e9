use chaebol_core::format::{format_krw_compact, format_percent};
use chaebol_core::{Error, GroupData};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Dataset(Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Dataset(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<Error> for CliError {
    fn from(value: Error) -> Self {
        Self::Dataset(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Info,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "chaebol-cli\n\
\n\
USAGE:\n\
  chaebol-cli [layout] [--pretty] [--out <path>] [<path>|-]\n\
  chaebol-cli info [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the group JSON document is read from stdin.\n\
  - layout prints positioned nodes + classified edges as JSON.\n\
  - info prints a group summary; dataset warnings go to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "info" => args.command = Command::Info,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let data = GroupData::from_json_str(&text)?;

    match args.command {
        Command::Layout => {
            let layout = chaebol_layout::build_chart_for_group(&data);
            write_json(&layout, args.pretty, args.out.as_deref())?;
            Ok(())
        }
        Command::Info => {
            for warning in data.validate() {
                eprintln!("warning: {warning}");
            }

            let listed = data.companies.iter().filter(|c| c.is_listed).count();
            let total_market_cap: f64 = data
                .companies
                .iter()
                .filter_map(|c| c.market_cap)
                .sum();
            let direct_pct: f64 = data
                .controller_holdings
                .iter()
                .map(|h| h.ownership_pct)
                .sum();

            let controller_kind = if data.controller().is_some() {
                "declared"
            } else if data.controller_holdings.is_empty() {
                "none"
            } else {
                "synthetic"
            };
            println!("{} ({})", data.group.name, data.group.slug);
            println!(
                "controller:  {} ({controller_kind})",
                data.group.controller_name
            );
            if !data.group.data_date.is_empty() {
                println!("data date:   {}", data.group.data_date);
            }
            println!("companies:   {} ({listed} listed)", data.companies.len());
            println!("relations:   {}", data.relations.len());
            println!(
                "holdings:    {} (sum {})",
                data.controller_holdings.len(),
                format_percent(direct_pct)
            );
            if total_market_cap > 0.0 {
                println!("market cap:  {}", format_krw_compact(total_market_cap));
            }
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
