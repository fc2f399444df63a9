//! Ranking and the end-to-end recommendation pipeline.

use pitlane_core::{
    EnrichmentContext, LiveDataProvider, Recommendation, RecommendationReport, ReferenceData,
    TravelStyle, TripCandidate, UserPreferences,
};

use crate::{
    ConstantsError, ScoringConstants, SubScores, WeightVector, adjust_candidate, convert_budget,
    enrich_candidates, filter_by_budget, tips,
};

/// Score and rank `candidates` for `preferences`.
///
/// The budget amount is taken as already expressed in the currency of the
/// candidate costs. Candidates are neither enriched nor price-adjusted; use
/// [`Recommender::recommend`] for the full pipeline.
///
/// # Examples
/// ```
/// use pitlane_core::{UserPreferences, sample_catalog};
/// use pitlane_scorer::score;
///
/// let ranked = score(&UserPreferences::default(), &sample_catalog());
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked.windows(2).all(|w| w[0].scores.total >= w[1].scores.total));
/// ```
#[must_use]
pub fn score(preferences: &UserPreferences, candidates: &[TripCandidate]) -> Vec<Recommendation> {
    score_with(
        preferences,
        preferences.budget().amount(),
        candidates,
        ScoringConstants::default(),
    )
}

/// [`score`] with an explicit base-currency budget and tuning constants.
///
/// Candidates over `budget × budget_tolerance` are dropped; survivors are
/// sorted by descending total, ties keeping input order.
#[must_use]
pub fn score_with(
    preferences: &UserPreferences,
    budget: f64,
    candidates: &[TripCandidate],
    constants: ScoringConstants,
) -> Vec<Recommendation> {
    let weights = WeightVector::for_style(preferences.style());
    let mut ranked: Vec<Recommendation> =
        filter_by_budget(candidates.to_vec(), budget, constants.budget_tolerance)
            .into_iter()
            .map(|trip| {
                let sub_scores =
                    SubScores::for_trip(&trip, preferences.weather(), constants.value_normaliser);
                let total = round_to_cents(weights.combine(&sub_scores));
                Recommendation {
                    trip,
                    scores: sub_scores.with_total(total),
                    save_tips: tips::owned(&tips::SAVE_TIPS),
                    splurge_tips: tips::owned(&tips::SPLURGE_TIPS),
                }
            })
            .collect();
    ranked.sort_by(|a, b| b.scores.total.total_cmp(&a.scores.total));
    ranked
}

#[expect(
    clippy::float_arithmetic,
    reason = "totals are reported to two decimal places"
)]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Runs enrichment, pricing, budget conversion and ranking against a live
/// data provider.
///
/// The pipeline never fails because of the provider: every failed lookup
/// falls back and is recorded in the report's [`EnrichmentContext`].
///
/// # Examples
/// ```
/// use pitlane_core::{OfflineLiveData, UserPreferences, sample_catalog};
/// use pitlane_scorer::Recommender;
///
/// let recommender = Recommender::new(OfflineLiveData);
/// let report = recommender.recommend(&UserPreferences::default(), &sample_catalog());
///
/// assert_eq!(report.best().map(|r| r.trip.city.as_str()), Some("Barcelona"));
/// assert_eq!(report.enrichment.live_forecasts(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<P> {
    provider: P,
    reference: ReferenceData,
    constants: ScoringConstants,
}

impl<P: LiveDataProvider> Recommender<P> {
    /// Recommender with the built-in reference tables and default constants.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_reference(provider, ReferenceData::default())
    }

    /// Recommender with custom reference tables.
    #[must_use]
    pub fn with_reference(provider: P, reference: ReferenceData) -> Self {
        Self {
            provider,
            reference,
            constants: ScoringConstants::default(),
        }
    }

    /// Replace the tuning constants.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantsError`] when either constant is non-finite or not
    /// positive.
    pub fn with_constants(mut self, constants: ScoringConstants) -> Result<Self, ConstantsError> {
        self.constants = constants.validate()?;
        Ok(self)
    }

    /// Borrow the live data provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Borrow the reference tables.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Enrich `candidates` with live data and apply style and seasonal
    /// pricing.
    ///
    /// Returns the priced candidates in input order together with the
    /// enrichment provenance. The returned context carries no budget
    /// conversion.
    #[must_use]
    pub fn enrich_and_price(
        &self,
        candidates: &[TripCandidate],
        style: TravelStyle,
    ) -> (Vec<TripCandidate>, EnrichmentContext) {
        let (enriched, records) =
            enrich_candidates(&self.provider, &self.reference.cities, candidates);
        let priced = enriched
            .iter()
            .map(|trip| adjust_candidate(trip, style))
            .collect();
        let context = EnrichmentContext {
            style,
            candidates: records,
            budget: None,
        };
        log::debug!(
            "enriched {} candidates: {} live holidays, {} live forecasts",
            context.candidates.len(),
            context.live_holidays(),
            context.live_forecasts()
        );
        (priced, context)
    }

    /// Run the full pipeline for `preferences`.
    ///
    /// Budget conversion and candidate enrichment run concurrently. The
    /// priced candidates are then filtered against the converted budget and
    /// ranked.
    #[must_use]
    pub fn recommend(
        &self,
        preferences: &UserPreferences,
        candidates: &[TripCandidate],
    ) -> RecommendationReport {
        let (conversion, (priced, mut enrichment)) = rayon::join(
            || convert_budget(&self.provider, &self.reference, preferences.budget()),
            || self.enrich_and_price(candidates, preferences.style()),
        );
        let recommendations = score_with(
            preferences,
            conversion.converted_amount,
            &priced,
            self.constants,
        );
        log::info!(
            "{} of {} candidates within {:.2} {} ({} style, {} weather)",
            recommendations.len(),
            candidates.len(),
            conversion.converted_amount,
            conversion.base_currency,
            preferences.style(),
            preferences.weather()
        );
        enrichment.budget = Some(conversion);
        RecommendationReport {
            recommendations,
            enrichment,
        }
    }
}
