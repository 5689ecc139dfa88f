use std::io::{self, Write};

use clap::Parser;

use cnv_store::config::MongoConfig;
use cnv_store::intersect::{IntervalQuery, find_intersections};

#[derive(Parser, Debug)]
#[command(
    name = "query_intersections",
    about = "Find records intersecting a genomic interval"
)]
struct Args {
    /// Collection to search.
    #[arg(long)]
    collection: String,

    /// Database name (defaults to the MONGO_DB environment variable).
    #[arg(long)]
    database: Option<String>,

    /// Chromosome identifier, e.g. `chr1`.
    #[arg(long)]
    chromosome: String,

    /// Interval start.
    #[arg(long)]
    start: i64,

    /// Interval end.
    #[arg(long)]
    end: i64,

    /// Only records lying completely within the interval.
    #[arg(long)]
    inside_only: bool,

    /// Attribute to include in the output; repeatable. All when omitted.
    #[arg(long = "attribute")]
    attributes: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cnv_store::init_logger();

    let args = Args::parse();
    if args.start > args.end {
        writeln!(io::stderr(), "error: --start must not exceed --end")?;
        std::process::exit(1);
    }

    let config = MongoConfig::from_env();
    let client = config.client().await?;
    let database = args.database.unwrap_or_else(|| config.database.clone());

    let mut query = if args.inside_only {
        IntervalQuery::inside(args.chromosome, args.start, args.end)
    } else {
        IntervalQuery::overlapping(args.chromosome, args.start, args.end)
    };
    if !args.attributes.is_empty() {
        query = query.with_attributes(args.attributes);
    }

    let matches = find_intersections(&client, &database, &args.collection, &query).await?;
    for document in &matches {
        println!("{}", serde_json::to_string(document)?);
    }
    log::info!("{} matching records", matches.len());
    Ok(())
}
