//! Use case for capturing search criteria across a page navigation.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use hb_core::booking::SearchForm;
use hb_core::ports::{NavTarget, NavigationPort, SearchError};
use hb_core::EntityStore;

/// Persists the submitted search and hands off to the results view.
///
/// Validation happens before any write: a form with a missing date leaves
/// previously stored criteria untouched. On success the stored criteria
/// replace any prior value and the navigation port is signalled.
pub struct RecordSearch {
    store: EntityStore,
    navigation: Arc<dyn NavigationPort>,
}

impl RecordSearch {
    pub fn new(store: EntityStore, navigation: Arc<dyn NavigationPort>) -> Self {
        Self { store, navigation }
    }

    /// Execute the use case.
    pub async fn execute(&self, form: SearchForm) -> Result<(), SearchError> {
        let span = info_span!("usecase.record_search.execute");

        async {
            let criteria = form.into_criteria().ok_or(SearchError::MissingDates)?;

            self.store
                .set_search_criteria(&criteria)
                .await
                .map_err(|e| SearchError::Storage(e.to_string()))?;

            info!(
                check_in = %criteria.check_in,
                check_out = %criteria.check_out,
                guests = criteria.guests,
                "search criteria recorded"
            );

            self.navigation
                .navigate(NavTarget::Results)
                .await
                .map_err(|e| SearchError::Storage(e.to_string()))?;

            Ok(())
        }
        .instrument(span)
        .await
    }
}
