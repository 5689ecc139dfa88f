use log::info;
use mongodb::Collection;
use mongodb::bson::Document;

/// Progress is reported every this many records, by zero-based position.
const PROGRESS_INTERVAL: usize = 10_000;

/// Drain `records` into `collection`, one `insert_many` per full batch.
///
/// The final partial batch is flushed at the end; an empty producer issues no
/// insert at all. Returns the number of records consumed.
pub(super) async fn insert_in_batches<I>(
    collection: &Collection<Document>,
    records: I,
    batch_size: usize,
) -> Result<u64, mongodb::error::Error>
where
    I: IntoIterator<Item = Document>,
{
    let batch_size = batch_size.max(1);
    let mut batch = Vec::with_capacity(batch_size);
    let mut consumed: u64 = 0;

    for (position, record) in records.into_iter().enumerate() {
        batch.push(record);
        consumed += 1;

        if batch.len() >= batch_size {
            let full = std::mem::replace(&mut batch, Vec::with_capacity(batch_size));
            collection.insert_many(full).await?;
        }

        if position % PROGRESS_INTERVAL == 0 {
            info!(
                "{:<20}: Filling table {:>8} items inserted",
                collection.name(),
                position
            );
        }
    }

    if !batch.is_empty() {
        collection.insert_many(batch).await?;
    }

    Ok(consumed)
}
