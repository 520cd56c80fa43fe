//! Trend cache — keep the latest [`TrendResult`] per metric.
//!
//! Purpose
//! -------
//! The evolution view re-renders far more often than a metric's history
//! changes. Since [`compute_trend`] is a pure function of its inputs, its
//! result can be reused until the series changes.
//!
//! Key behaviors
//! -------------
//! - One entry per metric key, holding the [`MetricSeries::identity`], the
//!   samples, and the result of the last computation.
//! - A lookup is a hit only when both identity and samples match; anything
//!   else recomputes and replaces the entry, so a metric whose history
//!   grows commit by commit never holds more than one result.
//! - Failed computations are not cached.
//!
//! Invariants & assumptions
//! ------------------------
//! - A metric key always maps to the same [`MetricDefinition`] for the
//!   lifetime of the cache. Call [`TrendCache::clear`] after swapping the
//!   registry.
//! - Single-owner; wrap in a lock for shared use.
use std::collections::{HashMap, hash_map::Entry};

use log::trace;

use crate::trend::{
    core::{definition::MetricDefinition, series::MetricSeries},
    errors::EngineResult,
    models::engine::{TrendResult, compute_trend},
};

#[derive(Debug, Clone)]
struct CachedTrend {
    identity: u64,
    values: Vec<f64>,
    result: TrendResult,
}

/// TrendCache — memo table in front of [`compute_trend`].
#[derive(Debug, Clone, Default)]
pub struct TrendCache {
    entries: HashMap<String, CachedTrend>,
    hits: u64,
    misses: u64,
}

impl TrendCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `(definition, series)`, computing it on
    /// a miss and replacing whatever the metric held before.
    ///
    /// Errors
    /// ------
    /// - Propagates any [`TrendError`](crate::trend::TrendError) from
    ///   [`compute_trend`]; nothing is stored in that case.
    pub fn get_or_compute(
        &mut self, definition: &MetricDefinition, series: &MetricSeries,
    ) -> EngineResult<&TrendResult> {
        let identity = series.identity();
        match self.entries.entry(definition.key().to_string()) {
            Entry::Occupied(mut entry) => {
                let cached = entry.get();
                if cached.identity == identity && cached.values.as_slice() == series.values() {
                    self.hits += 1;
                    trace!("trend cache hit for {}", definition.key());
                } else {
                    self.misses += 1;
                    trace!("trend cache refresh for {}", definition.key());
                    let result = compute_trend(definition, series)?;
                    let values = series.values().to_vec();
                    entry.insert(CachedTrend { identity, values, result });
                }
                Ok(&entry.into_mut().result)
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                trace!("trend cache miss for {}", definition.key());
                let result = compute_trend(definition, series)?;
                let cached = CachedTrend { identity, values: series.values().to_vec(), result };
                Ok(&entry.insert(cached).result)
            }
        }
    }

    /// Number of metrics with a cached result.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
