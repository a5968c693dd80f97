//! Roster pipeline
//!
//! Runs fetch → collection filter → identifier extraction → sort for one
//! owner. The roster is only written once every stage has succeeded, so a
//! failed fetch never produces partial output.

use crew_roster_core::{CollectionId, Identifier, DEFAULT_NAME_PREFIX};
use crew_roster_rpc::AssetSource;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::emitter;
use crate::error::ServiceResult;
use crate::extractor::IdentifierExtractor;
use crate::fetcher::{AssetFetcher, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use crate::filter::CollectionFilter;

/// The four roster stages wired together
#[derive(Clone)]
pub struct RosterPipeline {
    fetcher: AssetFetcher,
    filter: CollectionFilter,
    extractor: IdentifierExtractor,
}

impl RosterPipeline {
    /// Create a pipeline with default collection, prefix and paging
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            fetcher: AssetFetcher::new(source),
            filter: CollectionFilter::default(),
            extractor: IdentifierExtractor::default(),
        }
    }

    /// Create a builder for a customized pipeline
    pub fn builder(source: Arc<dyn AssetSource>) -> RosterPipelineBuilder {
        RosterPipelineBuilder::new(source)
    }

    /// Collection the pipeline selects
    pub fn collection(&self) -> &CollectionId {
        self.filter.collection()
    }

    /// Compute the sorted identifiers for `owner`
    #[instrument(skip(self), fields(collection = %self.filter.collection()))]
    pub async fn run(&self, owner: &str) -> ServiceResult<Vec<Identifier>> {
        let assets = self.fetcher.fetch_all(owner).await?;
        let fetched = assets.len();

        let members = self.filter.retain(assets);
        let identifiers = self.extractor.extract_all(&members);

        info!(
            fetched,
            members = members.len(),
            identifiers = identifiers.len(),
            "roster computed"
        );

        Ok(emitter::sort_identifiers(identifiers))
    }

    /// Compute the roster for `owner` and write it to `out`
    ///
    /// Returns the number of identifiers written.
    pub async fn run_and_emit<W: Write>(&self, owner: &str, out: &mut W) -> ServiceResult<usize> {
        let identifiers = self.run(owner).await?;
        emitter::emit(out, &identifiers)?;
        Ok(identifiers.len())
    }
}

/// Builder for RosterPipeline
pub struct RosterPipelineBuilder {
    source: Arc<dyn AssetSource>,
    collection: CollectionId,
    name_prefix: String,
    page_size: u32,
    max_pages: u32,
}

impl RosterPipelineBuilder {
    /// Create a new builder
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            collection: CollectionId::default(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the target collection
    pub fn collection(mut self, collection: CollectionId) -> Self {
        self.collection = collection;
        self
    }

    /// Set the display-name prefix stripped before parsing
    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Set the page size used when fetching
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page limit used when fetching
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Build the pipeline
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the paging parameters are out of range.
    pub fn build(self) -> ServiceResult<RosterPipeline> {
        let fetcher = AssetFetcher::new(self.source)
            .page_size(self.page_size)
            .max_pages(self.max_pages);
        fetcher.validate()?;

        Ok(RosterPipeline {
            fetcher,
            filter: CollectionFilter::new(self.collection),
            extractor: IdentifierExtractor::new(self.name_prefix),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{crew, numbered_crew, PagedSource, RejectingSource};
    use crew_roster_core::Asset;

    const TARGET: &str = "TARGET";

    fn pipeline(assets: Vec<Asset>) -> RosterPipeline {
        RosterPipeline::builder(Arc::new(PagedSource::new(assets)))
            .collection(CollectionId::new(TARGET).unwrap())
            .name_prefix("LABEL #")
            .build()
            .unwrap()
    }

    async fn output(pipeline: &RosterPipeline) -> ServiceResult<String> {
        let mut out = Vec::new();
        pipeline.run_and_emit("owner1", &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_mixed_collections_sorted_with_duplicates() {
        let pipeline = pipeline(vec![
            crew(TARGET, "LABEL #5"),
            crew(TARGET, "LABEL #1"),
            crew(TARGET, "LABEL #1"),
            crew("ELSEWHERE", "LABEL #9"),
        ]);

        assert_eq!(pipeline.run("owner1").await.unwrap(), vec![1, 1, 5]);
        assert_eq!(output(&pipeline).await.unwrap(), "1\n1\n5\n");
    }

    #[tokio::test]
    async fn test_only_unparseable_names_gives_empty_output() {
        let pipeline = pipeline(vec![crew(TARGET, "LABEL #abc")]);

        assert!(pipeline.run("owner1").await.unwrap().is_empty());
        assert_eq!(output(&pipeline).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_owner_without_assets_gives_empty_output() {
        let pipeline = pipeline(Vec::new());
        assert_eq!(output(&pipeline).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_remote_failure_writes_nothing() {
        let pipeline = RosterPipeline::new(Arc::new(RejectingSource));
        let mut out = Vec::new();

        let err = pipeline.run_and_emit("bad-owner", &mut out).await.unwrap_err();

        assert!(matches!(err, ServiceError::RemoteQueryFailed { .. }));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_other_collections_never_contribute() {
        let pipeline = pipeline(vec![
            crew("ELSEWHERE", "LABEL #1"),
            crew("ELSEWHERE", "2"),
            Asset::builder().name("LABEL #3").build(),
        ]);

        assert!(pipeline.run("owner1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_roster_spans_many_pages() {
        let mut assets = numbered_crew(TARGET, 45);
        assets.reverse();
        let pipeline = RosterPipeline::builder(Arc::new(PagedSource::new(assets)))
            .collection(CollectionId::new(TARGET).unwrap())
            .page_size(10)
            .build()
            .unwrap();

        let roster = pipeline.run("owner1").await.unwrap();

        assert_eq!(roster, (1..=45).collect::<Vec<Identifier>>());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let pipeline = pipeline(vec![
            crew(TARGET, "LABEL #30"),
            crew(TARGET, "LABEL #4"),
            crew(TARGET, "LABEL #200"),
        ]);

        let first = output(&pipeline).await.unwrap();
        let second = output(&pipeline).await.unwrap();

        assert_eq!(first, "4\n30\n200\n");
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder_rejects_bad_page_size() {
        let result = RosterPipeline::builder(Arc::new(PagedSource::new(Vec::new())))
            .page_size(0)
            .build();
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn test_default_pipeline_targets_crew_collection() {
        let pipeline = RosterPipeline::new(Arc::new(PagedSource::new(Vec::new())));
        assert_eq!(
            pipeline.collection().as_str(),
            crew_roster_core::DEFAULT_COLLECTION_ID
        );
    }
}
