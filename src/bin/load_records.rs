use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use mongodb::bson::Document;

use cnv_store::config::MongoConfig;
use cnv_store::load::{CollectionLoader, LoadOptions};

#[derive(Parser, Debug)]
#[command(
    name = "load_records",
    about = "Replace a MongoDB collection from newline-delimited JSON records"
)]
struct Args {
    /// Newline-delimited JSON file, one record per line.
    #[arg(long)]
    input: PathBuf,

    /// Target collection; dropped and recreated before loading.
    #[arg(long)]
    collection: String,

    /// Database name (defaults to the MONGO_DB environment variable).
    #[arg(long)]
    database: Option<String>,

    /// Build a categorical `cnv_type` index instead of the interval indexes.
    #[arg(long)]
    cnv_type_index: bool,

    /// Additional single-field ascending index; repeatable.
    #[arg(long = "index")]
    extra_indexes: Vec<String>,

    /// Records per insert batch (defaults to MONGO_BATCH_SIZE).
    #[arg(long)]
    batch_size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cnv_store::init_logger();

    let args = Args::parse();
    let config = MongoConfig::from_env();
    let client = config.client().await?;

    let reader = BufReader::new(File::open(&args.input)?);
    let records = reader.lines().enumerate().filter_map(|(line_no, line)| {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("line {}: read failed: {}", line_no + 1, err);
                return None;
            }
        };
        if line.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Document>(&line) {
            Ok(document) => Some(document),
            Err(err) => {
                log::warn!("line {}: skipping malformed record: {}", line_no + 1, err);
                None
            }
        }
    });

    let database = args.database.unwrap_or_else(|| config.database.clone());
    let options = LoadOptions {
        has_cnv_type: args.cnv_type_index,
        extra_indexes: args.extra_indexes,
        batch_size: args.batch_size.unwrap_or(config.batch_size),
    };

    let loader = CollectionLoader::new(client, database);
    let inserted = loader.load(&args.collection, records, &options).await?;

    println!("Inserted {} records into '{}'", inserted, args.collection);
    Ok(())
}
