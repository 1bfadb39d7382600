//! Dashboard session holding the last portfolio snapshot.

use exposure_core::{DisplayMode, ExposureResult, ExposureTable, Portfolio};
use tracing::{debug, info};

use super::drilldown::{drill_down, DrillDown};
use super::view::DashboardView;
use crate::aggregation::{aggregate, Distribution};
use crate::change::has_changed;
use crate::types::{LabelTable, ViewSettings, ZoneDirectory};

/// Recomputes dashboard views as the holdings change.
///
/// The session keeps the last accepted portfolio and its distribution.
/// [`DashboardSession::update`] only re-aggregates when the new snapshot
/// differs; mode switches and drill-downs rebuild views from the retained
/// distribution.
///
/// # Example
///
/// ```rust
/// use exposure_analytics::{DashboardSession, LabelTable, ViewSettings, ZoneDirectory};
/// use exposure_core::{AssetClass, ExposureTable, FundExposure, Portfolio};
///
/// let table = ExposureTable::from_funds([FundExposure::new("A", AssetClass::Stock, 0.1)
///     .with_country("USA", 100.0)])
/// .unwrap();
/// let zones = ZoneDirectory::new();
/// let labels = LabelTable::standard();
/// let mut session = DashboardSession::new(&table, &zones, &labels, ViewSettings::default());
///
/// let portfolio = Portfolio::from_pairs([("A", 10.0)]).unwrap();
/// assert!(session.update(portfolio.clone()).unwrap());
/// assert!(!session.update(portfolio).unwrap());
/// ```
#[derive(Debug)]
pub struct DashboardSession<'a> {
    table: &'a ExposureTable,
    zones: &'a ZoneDirectory,
    labels: &'a LabelTable,
    settings: ViewSettings,
    portfolio: Option<Portfolio>,
    distribution: Distribution,
    view: Option<DashboardView>,
    drill: Option<DrillDown>,
}

impl<'a> DashboardSession<'a> {
    /// Creates a session with no portfolio.
    #[must_use]
    pub fn new(
        table: &'a ExposureTable,
        zones: &'a ZoneDirectory,
        labels: &'a LabelTable,
        settings: ViewSettings,
    ) -> Self {
        Self {
            table,
            zones,
            labels,
            settings,
            portfolio: None,
            distribution: Distribution::default(),
            view: None,
            drill: None,
        }
    }

    /// Accepts a new portfolio snapshot.
    ///
    /// Returns `false` without recomputing if the snapshot equals the last
    /// one under [`has_changed`]. An active drill-down is rebuilt for the new
    /// distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if a holding is not in the exposure table; the
    /// previous state is kept.
    pub fn update(&mut self, portfolio: Portfolio) -> ExposureResult<bool> {
        if let Some(previous) = &self.portfolio {
            if !has_changed(previous, &portfolio) {
                debug!("portfolio unchanged, skipping recompute");
                return Ok(false);
            }
        }

        let distribution = aggregate(&portfolio, self.table)?;
        info!(
            holdings = portfolio.len(),
            total = distribution.total,
            "recomputed dashboard"
        );

        self.distribution = distribution;
        self.portfolio = Some(portfolio);
        self.rebuild()?;
        Ok(true)
    }

    /// Switches amount/percent display and rebuilds the views.
    pub fn set_mode(&mut self, mode: DisplayMode) -> ExposureResult<()> {
        if self.settings.mode == mode {
            return Ok(());
        }
        self.settings.mode = mode;
        self.rebuild()
    }

    /// Focuses the country chart on one zone.
    ///
    /// # Errors
    ///
    /// Returns [`exposure_core::ExposureError::UnknownZone`] if the zone is
    /// not in the directory; the current drill-down is kept.
    pub fn drill_down(&mut self, zone: &str) -> ExposureResult<&DrillDown> {
        let drill = drill_down(
            &self.distribution,
            self.zones,
            zone,
            self.labels,
            &self.settings,
        )?;
        Ok(&*self.drill.insert(drill))
    }

    /// Returns to the full country chart.
    pub fn clear_drill_down(&mut self) {
        self.drill = None;
    }

    /// Current dashboard view, if a portfolio has been accepted.
    #[must_use]
    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Active drill-down, if any.
    #[must_use]
    pub fn drill(&self) -> Option<&DrillDown> {
        self.drill.as_ref()
    }

    /// Last accepted portfolio.
    #[must_use]
    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    /// Distribution of the last accepted portfolio.
    #[must_use]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    fn rebuild(&mut self) -> ExposureResult<()> {
        if self.portfolio.is_none() {
            return Ok(());
        }
        self.view = Some(DashboardView::build(
            &self.distribution,
            self.labels,
            &self.settings,
        ));
        if let Some(zone) = self.drill.as_ref().map(|d| d.zone.clone()) {
            self.drill = Some(drill_down(
                &self.distribution,
                self.zones,
                zone.as_str(),
                self.labels,
                &self.settings,
            )?);
        }
        Ok(())
    }
}
