use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

/// A genomic interval record.
///
/// Interval-bearing collections require `chromosome`, `start`, and `end`;
/// `cnv_type` marks categorical CNV collections. Everything else a record
/// carries lands in the open `attributes` map and survives storage untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnv_type: Option<String>,
    #[serde(flatten)]
    pub attributes: Document,
}

impl IntervalRecord {
    pub fn new(chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
            cnv_type: None,
            attributes: Document::new(),
        }
    }

    /// Decode a stored document, requiring the minimal field set.
    pub fn from_document(document: Document) -> Result<Self, mongodb::bson::de::Error> {
        mongodb::bson::from_document(document)
    }
}

impl From<IntervalRecord> for Document {
    fn from(record: IntervalRecord) -> Self {
        let mut document = doc! {
            "chromosome": record.chromosome,
            "start": record.start,
            "end": record.end,
        };
        if let Some(cnv_type) = record.cnv_type {
            document.insert("cnv_type", cnv_type);
        }
        document.extend(record.attributes);
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn document_conversion_keeps_required_fields() {
        let document: Document = IntervalRecord::new("chr1", 100, 200).into();
        assert_eq!(
            document,
            doc! { "chromosome": "chr1", "start": 100_i64, "end": 200_i64 }
        );
    }

    #[test]
    fn document_conversion_carries_cnv_type_and_attributes() {
        let mut record = IntervalRecord::new("chr2", 10, 20);
        record.cnv_type = Some("gain".to_string());
        record.attributes.insert("gene", "BRCA1");
        record.attributes.insert("copies", 3_i32);

        let document: Document = record.into();
        assert_eq!(document.get_str("cnv_type").unwrap(), "gain");
        assert_eq!(document.get_str("gene").unwrap(), "BRCA1");
        assert_eq!(document.get_i32("copies").unwrap(), 3);
    }

    #[test]
    fn from_document_round_trips_extension_fields() {
        let mut record = IntervalRecord::new("chrX", 5, 6);
        record.attributes.insert("score", 0.5_f64);

        let document: Document = record.clone().into();
        let decoded = IntervalRecord::from_document(document).expect("decodes");
        assert_eq!(decoded, record);
        assert_eq!(decoded.attributes.get("score"), Some(&Bson::Double(0.5)));
    }

    #[test]
    fn from_document_rejects_missing_interval_fields() {
        let document = doc! { "chromosome": "chr1", "start": 1_i64 };
        assert!(IntervalRecord::from_document(document).is_err());
    }
}
