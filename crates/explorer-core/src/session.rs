//! The filter session
//!
//! Owns the drill-down and compare-to forms of one mounted filters panel:
//! - validates every edit and applies dashboard locks
//! - keeps each form's region options derived from its countries
//! - coalesces edits from both forms into one commit after the quiet interval
//! - turns chart clicks into additive edits
//!
//! A commit lower-cases the keyword fields of both forms and publishes the pair to the
//! [`FilterStore`]. Nothing is committed once the session is torn down.

use crate::click::{ChartClick, ClickAction};
use crate::config::{ClickCommit, SessionConfig};
use crate::error::SessionError;
use crate::store::FilterStore;
use crate::timer::CancellableTimer;
use explorer_api::FilterOptions;
use explorer_dashboards::DashboardName;
use explorer_filter::{
    apply_region_derivation, CountryRegionCatalog, CountryRegionOption, FieldEdit, FilterError,
    FilterField, FilterPair, FormId, SelectOption,
};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct SessionState {
    dashboard: DashboardName,
    forms: FilterPair,
    region_options: [Vec<SelectOption<String>>; 2],
    options: Arc<FilterOptions>,
    catalog: CountryRegionCatalog,
    mounted: bool,
    /// Bumped on every schedule; a firing timer with an older value is stale
    generation: u64,
}

impl SessionState {
    fn for_dashboard(dashboard: DashboardName) -> Self {
        Self {
            dashboard,
            forms: FilterPair::uniform(&dashboard.config().default_filter()),
            region_options: [Vec::new(), Vec::new()],
            options: Arc::new(FilterOptions::default()),
            catalog: CountryRegionCatalog::new(),
            mounted: true,
            generation: 0,
        }
    }

    fn ensure_mounted(&self) -> Result<(), SessionError> {
        if self.mounted {
            Ok(())
        } else {
            Err(SessionError::Unmounted)
        }
    }

    /// Re-derive both forms' regions, returning whether any selection changed
    fn rederive_regions(&mut self) -> bool {
        let mut changed = false;
        for form in FormId::BOTH {
            let filter = self.forms.get_mut(form);
            let before = filter.regions.len();
            self.region_options[slot(form)] = apply_region_derivation(filter, &self.catalog);
            changed |= filter.regions.len() != before;
        }
        changed
    }

    fn commit_now(&mut self, store: &FilterStore) -> u64 {
        self.forms.normalize_keywords();
        store.commit(self.dashboard, self.forms.clone())
    }
}

fn slot(form: FormId) -> usize {
    match form {
        FormId::Filter1 => 0,
        FormId::Filter2 => 1,
    }
}

/// Filter forms of one mounted panel
#[derive(Debug)]
pub struct FilterSession {
    state: Arc<Mutex<SessionState>>,
    timer: CancellableTimer,
    store: FilterStore,
    config: SessionConfig,
}

impl FilterSession {
    /// Mount a session with the dashboard's default filters
    ///
    /// The defaults are seeded into the store unless it already holds a pair of this
    /// dashboard, so queries fetch the right campaign before the first edit.
    #[must_use]
    pub fn new(dashboard: DashboardName, store: FilterStore, config: SessionConfig) -> Self {
        let state = SessionState::for_dashboard(dashboard);
        store.seed(dashboard, state.forms.clone());
        tracing::debug!(dashboard = %dashboard, "filter session mounted");
        Self {
            state: Arc::new(Mutex::new(state)),
            timer: CancellableTimer::new(),
            store,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardName {
        self.state.lock().dashboard
    }

    /// Snapshot of both forms
    #[must_use]
    pub fn forms(&self) -> FilterPair {
        self.state.lock().forms.clone()
    }

    /// Region options currently offered to a form
    #[must_use]
    pub fn region_options(&self, form: FormId) -> Vec<SelectOption<String>> {
        self.state.lock().region_options[slot(form)].clone()
    }

    #[must_use]
    pub fn filter_options(&self) -> Arc<FilterOptions> {
        Arc::clone(&self.state.lock().options)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state.lock().mounted
    }

    /// Whether a commit is waiting for the quiet interval
    #[must_use]
    pub fn has_pending_commit(&self) -> bool {
        self.timer.is_pending()
    }

    /// Apply a widget edit to one form
    ///
    /// Returns whether the form changed. A change schedules a commit; an edit that
    /// leaves the form as it was schedules nothing.
    ///
    /// # Errors
    /// - `SessionError::Unmounted` after teardown
    /// - `SessionError::Filter` if the field is locked on this dashboard or the result
    ///   fails validation; the form is left unchanged
    pub fn edit(&self, form: FormId, edit: FieldEdit) -> Result<bool, SessionError> {
        let mut state = self.state.lock();
        state.ensure_mounted()?;

        let field = edit.field();
        if state.dashboard.config().is_locked(field) {
            return Err(FilterError::FieldLocked(field).into());
        }

        let mut candidate = state.forms.get(form).clone();
        if !candidate.apply_edit(edit) {
            return Ok(false);
        }

        let region_options = (field == FilterField::Countries)
            .then(|| apply_region_derivation(&mut candidate, &state.catalog));
        candidate.validate(&state.catalog)?;

        tracing::debug!(form = %form, field = %field, "filter edited");
        *state.forms.get_mut(form) = candidate;
        if let Some(options) = region_options {
            state.region_options[slot(form)] = options;
        }
        self.schedule_commit(&mut state);
        Ok(true)
    }

    /// Apply a chart click
    ///
    /// Returns whether the bound form changed. Clicking a category already present,
    /// a locked field, or a category the dashboard ignores is a no-op.
    ///
    /// # Errors
    /// - `SessionError::Unmounted` after teardown
    pub fn click(&self, click: &ChartClick) -> Result<bool, SessionError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.ensure_mounted()?;

        let config = state.dashboard.config();
        let Some(action) = click.resolve(config, &state.options) else {
            tracing::debug!(?click, "click ignored on this dashboard");
            return Ok(false);
        };
        if config.is_locked(action.field()) {
            return Ok(false);
        }

        let form = click.form();
        let filter = state.forms.get_mut(form);
        let changed = match action {
            ClickAction::Insert { field, value } => {
                let inserted = filter.insert_value(field, value);
                if inserted && field == FilterField::Countries {
                    state.region_options[slot(form)] =
                        apply_region_derivation(filter, &state.catalog);
                }
                inserted
            }
            ClickAction::Keyword(word) => filter.set_keyword_filter(word),
        };
        if !changed {
            return Ok(false);
        }

        tracing::debug!(form = %form, ?click, "filter narrowed by chart click");
        match self.config.click_commit {
            ClickCommit::Debounced => self.schedule_commit(state),
            ClickCommit::Immediate => {
                self.timer.cancel();
                state.generation += 1;
                state.commit_now(&self.store);
            }
        }
        Ok(true)
    }

    /// Install freshly loaded option lists
    ///
    /// Replaces the region catalog and re-derives both forms' region options. When that
    /// drops selected regions a commit is scheduled.
    pub fn apply_filter_options(&self, options: Arc<FilterOptions>) {
        let mut state = self.state.lock();
        if !state.mounted {
            return;
        }
        state.catalog = options.catalog();
        state.options = options;
        if state.rederive_regions() {
            self.schedule_commit(&mut state);
        }
    }

    /// Merge the regions of one country into the catalog
    pub fn apply_country_regions(&self, regions: CountryRegionOption) {
        let mut state = self.state.lock();
        if !state.mounted {
            return;
        }
        state
            .catalog
            .insert(regions.country_alpha2_code, regions.options);
        if state.rederive_regions() {
            self.schedule_commit(&mut state);
        }
    }

    /// Commit both forms now, cancelling any pending commit
    ///
    /// # Errors
    /// - `SessionError::Unmounted` after teardown
    pub fn flush(&self) -> Result<u64, SessionError> {
        let mut state = self.state.lock();
        state.ensure_mounted()?;
        self.timer.cancel();
        state.generation += 1;
        Ok(state.commit_now(&self.store))
    }

    /// Move to another dashboard, resetting both forms to its defaults
    ///
    /// Any pending commit is dropped and the defaults are committed at once.
    ///
    /// # Errors
    /// - `SessionError::Unmounted` after teardown
    pub fn switch_dashboard(&self, dashboard: DashboardName) -> Result<u64, SessionError> {
        let mut state = self.state.lock();
        state.ensure_mounted()?;
        self.timer.cancel();

        let generation = state.generation + 1;
        *state = SessionState::for_dashboard(dashboard);
        state.generation = generation;
        tracing::info!(dashboard = %dashboard, "switched dashboard");
        Ok(state.commit_now(&self.store))
    }

    /// Unmount; no commit happens afterwards
    pub fn teardown(&self) {
        let mut state = self.state.lock();
        if state.mounted {
            state.mounted = false;
            if self.timer.cancel() {
                tracing::debug!("pending commit dropped on teardown");
            }
        }
    }

    fn schedule_commit(&self, state: &mut SessionState) {
        state.generation += 1;
        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let store = self.store.clone();
        self.timer.schedule(self.config.debounce(), move || {
            let mut state = shared.lock();
            if !state.mounted || state.generation != generation {
                return;
            }
            state.commit_now(&store);
        });
    }
}

impl Drop for FilterSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
