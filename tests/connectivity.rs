use std::time::Duration;

use cnv_store::error::StoreError;
use cnv_store::intersect::{IntervalQuery, find_intersections};
use cnv_store::load::{CollectionLoader, LoadOptions};
use mongodb::Client;
use mongodb::bson::Document;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;

// Port 9 (discard) is essentially never bound; server selection gives up
// after the configured timeout instead of hanging.
async fn unreachable_client() -> Client {
    let mut options = ClientOptions::parse("mongodb://127.0.0.1:9/")
        .await
        .expect("parse uri");
    options.server_selection_timeout = Some(Duration::from_millis(500));
    Client::with_options(options).expect("client")
}

#[tokio::test]
async fn loader_translates_server_selection_failures() {
    let client = unreachable_client().await;
    let loader = CollectionLoader::new(client, "test_db");

    let err = loader
        .load("cnvs", Vec::<Document>::new(), &LoadOptions::default())
        .await
        .expect_err("load should fail");

    assert!(matches!(err, StoreError::Connectivity(_)));
    assert!(err.to_string().contains("database is running"));
}

#[tokio::test]
async fn finder_propagates_driver_errors_untranslated() {
    let client = unreachable_client().await;

    let err = find_intersections(
        &client,
        "test_db",
        "cnvs",
        &IntervalQuery::overlapping("chr1", 0, 10),
    )
    .await
    .expect_err("query should fail");

    assert!(matches!(*err.kind, ErrorKind::ServerSelection { .. }));
}
