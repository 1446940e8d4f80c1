use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::{
    error::{MatchError, Result},
    query::build_query_text,
    scoring::{rank, score_partners},
    similarity::{cosine, SparseVector, TextSimilarityModel, TfIdf},
};
use crate::models::{MatchQuery, MatchResult, PartnerRecord};
use crate::services::catalog::CatalogSource;

/// Ranked matches plus the size of the catalog they were drawn from
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_partners: usize,
}

/// Fitted text model and one feature row per partner, in catalog order
pub struct CatalogIndex<F> {
    pub model: F,
    pub rows: Vec<SparseVector>,
}

/// Partner matching service
///
/// # Lifecycle
/// 1. Catalog is pulled from the source on first use, once
/// 2. Text index is fitted over the catalog documents, once
/// 3. Each query is projected into the fitted space and ranked
///
/// Both one-time steps are guarded by `OnceCell`, so concurrent first callers
/// block until a single initialization finishes. A failed step is not cached
/// and is retried by the next caller. After that, reads take no locks.
pub struct PartnerMatcher<M: TextSimilarityModel = TfIdf> {
    source: Box<dyn CatalogSource>,
    model: M,
    catalog: OnceCell<Arc<Vec<PartnerRecord>>>,
    index: OnceCell<Arc<CatalogIndex<M::Fitted>>>,
}

impl PartnerMatcher<TfIdf> {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::with_model(source, TfIdf)
    }
}

impl<M: TextSimilarityModel> PartnerMatcher<M> {
    pub fn with_model(source: impl CatalogSource + 'static, model: M) -> Self {
        Self {
            source: Box::new(source),
            model,
            catalog: OnceCell::new(),
            index: OnceCell::new(),
        }
    }

    /// Load the catalog if it has not been loaded yet
    pub fn ensure_loaded(&self) -> Result<Arc<Vec<PartnerRecord>>> {
        let partners = self.catalog.get_or_try_init(|| {
            let partners = self.source.load_catalog()?;
            tracing::info!("Partner catalog loaded: {} partners", partners.len());
            Ok::<_, MatchError>(Arc::new(partners))
        })?;
        Ok(Arc::clone(partners))
    }

    /// Fitted index over the loaded catalog, built on first call
    pub fn index(&self) -> Result<Arc<CatalogIndex<M::Fitted>>> {
        let partners = self.ensure_loaded()?;
        let index = self.index.get_or_try_init(|| {
            let corpus: Vec<String> = partners.iter().map(PartnerRecord::document).collect();
            let model = self.model.fit(&corpus)?;
            let rows: Vec<SparseVector> = corpus
                .iter()
                .map(|doc| self.model.project(&model, doc))
                .collect();
            tracing::info!("Partner index built over {} documents", rows.len());
            Ok::<_, MatchError>(Arc::new(CatalogIndex { model, rows }))
        })?;
        Ok(Arc::clone(index))
    }

    /// Number of partners in the catalog
    pub fn total_partner_count(&self) -> Result<usize> {
        Ok(self.ensure_loaded()?.len())
    }

    /// Rank partners for a product description
    ///
    /// # Arguments
    /// * `product_description` - free text, must be non-blank
    /// * `location` - optional location appended to the query text
    /// * `capacity_hint` - optional volume, folded in as a tier label
    /// * `top_k` - maximum number of results, must be positive
    ///
    /// An empty catalog yields an empty list. If the index cannot be built,
    /// every partner is scored with zero similarity.
    pub fn find_best_partners(
        &self,
        product_description: &str,
        location: Option<&str>,
        capacity_hint: Option<u32>,
        top_k: usize,
    ) -> Result<Vec<MatchResult>> {
        let description = product_description.trim();
        if description.is_empty() {
            return Err(MatchError::InvalidQuery(
                "product description is required".to_string(),
            ));
        }
        if top_k == 0 {
            return Err(MatchError::InvalidQuery("top_k must be positive".to_string()));
        }

        let partners = self.ensure_loaded()?;
        if partners.is_empty() {
            tracing::debug!("No partners available, returning empty ranking");
            return Ok(Vec::new());
        }

        let query_text = build_query_text(description, location, capacity_hint);

        let similarities: Vec<f64> = match self.index() {
            Ok(index) => {
                let query_vec = self.model.project(&index.model, &query_text);
                index.rows.iter().map(|row| cosine(&query_vec, row)).collect()
            }
            Err(e) => {
                tracing::warn!("Partner index unavailable, scoring with zero similarity: {}", e);
                vec![0.0; partners.len()]
            }
        };

        let ranked = rank(score_partners(&partners, &similarities), top_k);

        tracing::debug!(
            "Ranked {} of {} partners for query {:?}",
            ranked.len(),
            partners.len(),
            query_text
        );

        Ok(ranked)
    }

    /// Run a `MatchQuery` and report the catalog size alongside the ranking
    pub fn find_matches(&self, query: &MatchQuery) -> Result<MatchOutcome> {
        let matches = self.find_best_partners(
            &query.product_description,
            query.location.as_deref(),
            query.capacity_hint,
            query.top_k,
        )?;
        Ok(MatchOutcome {
            matches,
            total_partners: self.total_partner_count()?,
        })
    }
}
