use mongodb::IndexModel;
use mongodb::bson::{Document, doc};

/// Index set for a freshly recreated collection.
///
/// Interval collections carry two ascending compound indexes so both interval
/// query forms stay index-backed; categorical CNV collections get a single
/// `cnv_type` index instead.
pub(super) fn index_models(has_cnv_type: bool, extra_indexes: &[String]) -> Vec<IndexModel> {
    let mut keysets: Vec<Document> = if has_cnv_type {
        vec![doc! { "cnv_type": 1 }]
    } else {
        vec![
            doc! { "chromosome": 1, "start": 1 },
            doc! { "chromosome": 1, "end": 1 },
        ]
    };

    for field in extra_indexes {
        let mut keys = Document::new();
        keys.insert(field.as_str(), 1);
        keysets.push(keys);
    }

    keysets
        .into_iter()
        .map(|keys| IndexModel::builder().keys(keys).build())
        .collect()
}
