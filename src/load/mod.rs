//! Destructive collection reload: drop, reindex, refill.

mod batch;
mod indexes;

use crate::error::StoreError;
use chrono::Utc;
use mongodb::Client;
use mongodb::bson::Document;

/// Records per insert call when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Options controlling a collection reload.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Build a single categorical `cnv_type` index instead of the interval indexes.
    pub has_cnv_type: bool,
    /// Extra single-field ascending indexes, created in order.
    pub extra_indexes: Vec<String>,
    /// Records per `insert_many` call.
    pub batch_size: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_cnv_type: false,
            extra_indexes: Vec::new(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Replaces a collection wholesale from a record producer.
///
/// The target collection is dropped if present, recreated with the requested
/// indexes, and refilled in batches. A run is destructive-idempotent; it is
/// not safe to run concurrently with itself or with readers that expect the
/// collection to stay present throughout.
pub struct CollectionLoader {
    client: Client,
    db_name: String,
}

impl CollectionLoader {
    pub fn new(client: Client, db_name: impl Into<String>) -> Self {
        Self {
            client,
            db_name: db_name.into(),
        }
    }

    /// Drop, reindex, and refill `collection_name` from `records`.
    ///
    /// Returns the number of records consumed from the producer. A
    /// server-selection timeout anywhere in the run surfaces as
    /// [`StoreError::Connectivity`]; every other driver failure is fatal to
    /// the call and passes through unchanged. No step is transactional, so a
    /// mid-run failure can leave the collection partially populated.
    pub async fn load<I>(
        &self,
        collection_name: &str,
        records: I,
        options: &LoadOptions,
    ) -> Result<u64, StoreError>
    where
        I: IntoIterator<Item = Document>,
    {
        self.reload(collection_name, records, options)
            .await
            .map_err(StoreError::from_driver)
    }

    async fn reload<I>(
        &self,
        collection_name: &str,
        records: I,
        options: &LoadOptions,
    ) -> Result<u64, mongodb::error::Error>
    where
        I: IntoIterator<Item = Document>,
    {
        let start_time = Utc::now();
        log::info!("Filling Mongo    : {}", start_time.to_rfc3339());

        log::info!("Fetching the client");
        let db = self.client.database(&self.db_name);

        let existing = db.list_collection_names().await?;
        if existing.iter().any(|name| name == collection_name) {
            log::info!("Deleting {} collection", collection_name);
            db.collection::<Document>(collection_name).drop().await?;
        }

        // The collection comes back into existence with the first index
        // build or write.
        let collection = db.collection::<Document>(collection_name);

        log::info!("Creating indices");
        for model in indexes::index_models(options.has_cnv_type, &options.extra_indexes) {
            collection.create_index(model).await?;
        }

        log::info!("Filling collection");
        let inserted = batch::insert_in_batches(&collection, records, options.batch_size).await?;
        log::info!("{}", inserted);

        let end_time = Utc::now();
        log::info!("Finished Mongo   : {}", end_time.to_rfc3339());
        log::info!("Time of run      : {}", end_time - start_time);

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_interval_indexes_and_batch_size_100() {
        let options = LoadOptions::default();
        assert_eq!(options.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!options.has_cnv_type);
        assert!(options.extra_indexes.is_empty());
    }
}
