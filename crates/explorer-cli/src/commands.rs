//! Headless runs of the dashboard pipeline

use crate::config::AppConfig;
use anyhow::{bail, Context};
use explorer_api::{Campaign, DashboardApi, FilterOptions, FilterOptionsCache};
use explorer_core::{
    initial_breakdown, load_breakdown_options, load_filter_options, CampaignQuery,
    ComparisonHistogram, FilterSession, FilterStore,
};
use explorer_dashboards::{Breakdown, DashboardName};
use explorer_filter::{FieldEdit, FilterPair, FormId};
use std::sync::Arc;

/// Criteria for one form, as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormArgs {
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub ages: Vec<String>,
    pub professions: Vec<String>,
    pub keyword: Option<String>,
    pub exclude: Option<String>,
}

impl FormArgs {
    /// Edits for the given criteria, countries first so regions can be derived
    #[must_use]
    pub fn edits(&self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if !self.countries.is_empty() {
            edits.push(FieldEdit::Countries(self.countries.clone()));
        }
        if !self.regions.is_empty() {
            edits.push(FieldEdit::Regions(self.regions.clone()));
        }
        if !self.genders.is_empty() {
            edits.push(FieldEdit::Genders(self.genders.clone()));
        }
        if !self.ages.is_empty() {
            edits.push(FieldEdit::Ages(self.ages.clone()));
        }
        if !self.professions.is_empty() {
            edits.push(FieldEdit::Professions(self.professions.clone()));
        }
        if let Some(keyword) = &self.keyword {
            edits.push(FieldEdit::KeywordFilter(keyword.clone()));
        }
        if let Some(exclude) = &self.exclude {
            edits.push(FieldEdit::KeywordExclude(exclude.clone()));
        }
        edits
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignArgs {
    pub drill_down: FormArgs,
    pub compare_to: FormArgs,
    pub breakdown: Option<Breakdown>,
}

/// Result of a campaign run
#[derive(Debug, Clone)]
pub struct CampaignReport {
    pub dashboard: DashboardName,
    pub filters: FilterPair,
    pub campaign: Arc<Campaign>,
    pub histogram: Option<ComparisonHistogram>,
}

impl CampaignReport {
    /// Machine-readable form of the report
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "dashboard": self.dashboard,
            "filters": self.filters,
            "campaign": self.campaign.as_ref(),
            "histogram": self.histogram,
        })
    }
}

/// Fetch filter options; failures yield empty lists
pub async fn fetch_filter_options(
    api: &dyn DashboardApi,
    dashboard: DashboardName,
    config: &AppConfig,
) -> Arc<FilterOptions> {
    let cache = FilterOptionsCache::default();
    load_filter_options(api, &cache, dashboard, &config.lang, config.retry).await
}

/// Edit both forms, commit them and fetch the campaign data
///
/// # Errors
/// Fails when an edit is rejected or the campaign cannot be fetched.
pub async fn run_campaign(
    api: Arc<dyn DashboardApi>,
    dashboard: DashboardName,
    args: &CampaignArgs,
    config: &AppConfig,
) -> anyhow::Result<CampaignReport> {
    let store = FilterStore::new();
    let session = FilterSession::new(dashboard, store.clone(), config.session());
    let options = fetch_filter_options(api.as_ref(), dashboard, config).await;
    session.apply_filter_options(options);

    for (form, form_args) in [
        (FormId::Filter1, &args.drill_down),
        (FormId::Filter2, &args.compare_to),
    ] {
        for edit in form_args.edits() {
            if matches!(edit, FieldEdit::Regions(_)) {
                load_missing_regions(api.as_ref(), &session, form).await;
            }
            session
                .edit(form, edit)
                .with_context(|| format!("invalid {form} filter"))?;
        }
    }

    let seq = session.flush()?;
    tracing::debug!(seq, "filters committed for campaign run");

    let query = CampaignQuery::spawn(Arc::clone(&api), &store, config.lang.clone(), config.retry);
    let state = query.settled(1).await;
    let Some(campaign) = state.data else {
        bail!(
            "campaign data unavailable: {}",
            state.error.unwrap_or_else(|| "no response".to_string())
        );
    };

    let breakdown = match args.breakdown {
        Some(breakdown) => Some(breakdown),
        None => {
            let offered =
                load_breakdown_options(api.as_ref(), dashboard, &config.lang, config.retry).await;
            initial_breakdown(dashboard.config(), &offered)
        }
    };
    let histogram =
        breakdown.map(|b| ComparisonHistogram::build(&campaign, b, dashboard.config()));

    Ok(CampaignReport {
        dashboard,
        filters: session.forms(),
        campaign,
        histogram,
    })
}

/// Fetch regions of the form's single country when the catalog has none
async fn load_missing_regions(api: &dyn DashboardApi, session: &FilterSession, form: FormId) {
    let forms = session.forms();
    let filter = forms.get(form);
    let Some(country) = filter.countries.first().filter(|_| filter.countries.len() == 1) else {
        return;
    };
    if !session.region_options(form).is_empty() {
        return;
    }
    match api.country_regions(session.dashboard(), country).await {
        Ok(regions) => session.apply_country_regions(regions),
        Err(err) => tracing::warn!(country = %country, error = %err, "regions unavailable"),
    }
}
