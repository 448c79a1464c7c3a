//! # Active body set
//!
//! [`BodySet`] owns the catalog bodies currently shown, the category filter
//! selected by the user, and the per-category counters. Everything a frame
//! needs (positions, orbit paths) is computed from this explicit state.
//!
//! With the `parallel` feature, positions are computed with `rayon`; the
//! output order always follows the insertion order of the bodies.

use std::{collections::HashMap, fmt, str::FromStr};

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    catalog::{BodyCategory, Catalog, CatalogBody},
    constants::{Position, Year},
    orrery_errors::OrreryError,
    propagator::KeplerPropagator,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which bodies are active.
///
/// Deserialized from the same text as [`FromStr`]: `"ALL"` or a category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BodyCategory),
}

impl CategoryFilter {
    pub fn accepts(&self, category: BodyCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "ALL"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = OrreryError;

    /// `"ALL"` (any case) or a category label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = OrreryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn locate<'a>(
    propagator: &KeplerPropagator,
    body: &'a CatalogBody,
    time_delta: Year,
) -> Result<BodyPosition<'a>, OrreryError> {
    Ok(BodyPosition {
        identifier: body.identifier(),
        category: body.category,
        position: propagator.position_at_time(&body.elements, time_delta)?,
    })
}

/// Position of one active body at a given time.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPosition<'a> {
    pub identifier: &'a str,
    pub category: BodyCategory,
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySet {
    bodies: Vec<CatalogBody>,
    filter: CategoryFilter,
}

impl From<Catalog> for BodySet {
    fn from(catalog: Catalog) -> Self {
        BodySet::new(catalog.into_bodies())
    }
}

impl BodySet {
    pub fn new(bodies: Vec<CatalogBody>) -> Self {
        BodySet {
            bodies,
            filter: CategoryFilter::All,
        }
    }

    pub fn insert(&mut self, body: CatalogBody) {
        self.bodies.push(body);
    }

    /// Remove the first body with this identifier.
    pub fn remove(&mut self, identifier: &str) -> Option<CatalogBody> {
        let idx = self
            .bodies
            .iter()
            .position(|b| b.identifier() == identifier)?;
        Some(self.bodies.remove(idx))
    }

    /// Drop every body of `category`, returning how many were removed.
    pub fn remove_category(&mut self, category: BodyCategory) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.category != category);
        let removed = before - self.bodies.len();
        tracing::debug!("Removed {} bodies of category {}", removed, category);
        removed
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        tracing::debug!("Category filter set to {}", filter);
        self.filter = filter;
    }

    /// Every body, whatever the filter.
    pub fn bodies(&self) -> &[CatalogBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies accepted by the current filter, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &CatalogBody> + '_ {
        self.bodies
            .iter()
            .filter(move |b| self.filter.accepts(b.category))
    }

    /// Number of bodies per category (filter ignored). Absent categories are
    /// not listed.
    pub fn category_counts(&self) -> HashMap<BodyCategory, usize> {
        self.bodies.iter().map(|b| b.category).counts()
    }

    /// Positions of the active bodies `time_delta` years after their epoch.
    ///
    /// Errors
    /// ------
    /// * The first [`OrreryError::ConvergenceError`] met; no partial frame is
    ///   returned.
    pub fn positions_at_time(
        &self,
        propagator: &KeplerPropagator,
        time_delta: Year,
    ) -> Result<Vec<BodyPosition<'_>>, OrreryError> {
        #[cfg(feature = "parallel")]
        let positions = self
            .bodies
            .par_iter()
            .filter(|b| self.filter.accepts(b.category))
            .map(|b| locate(propagator, b, time_delta))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let positions = self
            .active()
            .map(|b| locate(propagator, b, time_delta))
            .collect();

        positions
    }

    /// Orbit polylines of the active bodies, see [`KeplerPropagator::orbit_path`].
    pub fn orbit_paths(
        &self,
        propagator: &KeplerPropagator,
        segments: usize,
    ) -> Vec<(&str, Vec<Position>)> {
        self.active()
            .map(|b| (b.identifier(), propagator.orbit_path(&b.elements, segments)))
            .collect()
    }
}
