use futures::stream::TryStreamExt;
use mongodb::Client;
use mongodb::bson::{Bson, Document, doc};

/// Parameters for one interval lookup against an indexed collection.
#[derive(Debug, Clone)]
pub struct IntervalQuery {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
    pub inside_only: bool,
    pub attributes: Option<Vec<String>>,
}

impl IntervalQuery {
    /// Match records overlapping `[start, end]` on the given chromosome.
    pub fn overlapping(chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
            inside_only: false,
            attributes: None,
        }
    }

    /// Match only records lying completely within `[start, end]`.
    pub fn inside(chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            inside_only: true,
            ..Self::overlapping(chromosome, start, end)
        }
    }

    /// Restrict result documents to the named attributes.
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    fn filter(&self) -> Document {
        if self.inside_only {
            doc! {
                "chromosome": self.chromosome.as_str(),
                "start": { "$gte": self.start },
                "end": { "$lte": self.end },
            }
        } else {
            // record.start <= query.end and record.end >= query.start
            doc! {
                "chromosome": self.chromosome.as_str(),
                "start": { "$lte": self.end },
                "end": { "$gte": self.start },
            }
        }
    }

    fn projection(&self) -> Option<Document> {
        let attributes = self.attributes.as_deref().filter(|attrs| !attrs.is_empty())?;
        Some(
            attributes
                .iter()
                .map(|attr| (attr.clone(), Bson::Int32(1)))
                .collect(),
        )
    }
}

/// Find records in a single collection intersecting the queried interval.
///
/// Read-only. Result order follows the engine's scan order and is not part of
/// the contract; driver failures propagate untranslated.
pub async fn find_intersections(
    client: &Client,
    db_name: &str,
    collection_name: &str,
    query: &IntervalQuery,
) -> Result<Vec<Document>, mongodb::error::Error> {
    let collection = client
        .database(db_name)
        .collection::<Document>(collection_name);

    let mut find = collection.find(query.filter());
    if let Some(projection) = query.projection() {
        find = find.projection(projection);
    }

    find.await?.try_collect().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_filter_uses_cross_comparison() {
        let query = IntervalQuery::overlapping("chr1", 100, 200);
        assert_eq!(
            query.filter(),
            doc! {
                "chromosome": "chr1",
                "start": { "$lte": 200_i64 },
                "end": { "$gte": 100_i64 },
            }
        );
    }

    #[test]
    fn inside_filter_requires_containment() {
        let query = IntervalQuery::inside("chr1", 100, 200);
        assert_eq!(
            query.filter(),
            doc! {
                "chromosome": "chr1",
                "start": { "$gte": 100_i64 },
                "end": { "$lte": 200_i64 },
            }
        );
    }

    #[test]
    fn projection_lists_requested_attributes() {
        let query = IntervalQuery::overlapping("chr1", 0, 10).with_attributes(["start", "end"]);
        assert_eq!(query.projection(), Some(doc! { "start": 1, "end": 1 }));
    }

    #[test]
    fn projection_absent_without_attributes() {
        let query = IntervalQuery::overlapping("chr1", 0, 10);
        assert_eq!(query.projection(), None);

        let query = query.with_attributes(Vec::<String>::new());
        assert_eq!(query.projection(), None);
    }
}
