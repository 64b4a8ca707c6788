use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use trnav_cli::commands::distance::handle_distance_command;
use trnav_cli::commands::neighbours::handle_neighbours_command;
use trnav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use trnav_cli::commands::MapPaths;
use trnav_cli::output::OutputFormat;
use trnav_lib::RouteAlgorithm;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest routes between cities on a 2D map")]
struct Cli {
    /// Coordinate file with one `name,x,y` record per line.
    #[arg(
        long,
        global = true,
        env = "TRNAV_LOCATIONS",
        default_value = "city_coordinates.txt"
    )]
    locations: PathBuf,

    /// Connection file with one `from,to` record per line.
    #[arg(
        long,
        global = true,
        env = "TRNAV_CONNECTIONS",
        default_value = "city_connections.txt"
    )]
    connections: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two locations.
    Route(RouteArgs),
    /// Straight-line distance between two locations.
    Distance {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// List the direct connections of a location.
    Neighbours {
        #[arg(long = "name")]
        name: String,
    },
}

#[derive(clap::Args, Debug)]
struct RouteArgs {
    /// Starting location; asked for interactively when omitted.
    #[arg(long = "from")]
    from: Option<String>,
    /// Destination location; asked for interactively when omitted.
    #[arg(long = "to")]
    to: Option<String>,
    /// Search algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    algorithm: AlgorithmArg,
    /// Location the route must not pass through. Repeatable.
    #[arg(long = "avoid")]
    avoid: Vec<String>,
    /// Longest single leg allowed on the route.
    #[arg(long = "max-leg", value_parser = parse_leg_limit)]
    max_leg: Option<f64>,
}

fn parse_leg_limit(value: &str) -> Result<f64, String> {
    let limit: f64 = value
        .parse()
        .map_err(|err| format!("'{value}' is not a number: {err}"))?;
    if limit.is_nan() || limit < 0.0 {
        return Err(format!("'{value}' must be a non-negative distance"));
    }
    Ok(limit)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        RouteCommandArgs {
            from: args.from,
            to: args.to,
            algorithm: args.algorithm.into(),
            avoid: args.avoid,
            max_leg: args.max_leg,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = MapPaths {
        locations: cli.locations,
        connections: cli.connections,
    };
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Route(args) => {
            let mut input = io::stdin().lock();
            let mut prompts = io::stderr().lock();
            handle_route_command(
                &mut input,
                &mut prompts,
                &mut out,
                &paths,
                cli.format,
                &args.into(),
            )?
        }
        Command::Distance { from, to } => {
            handle_distance_command(&mut out, &paths, cli.format, &from, &to)?
        }
        Command::Neighbours { name } => {
            handle_neighbours_command(&mut out, &paths, cli.format, &name)?
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
