//! Twiddle factor tables and a process-wide table cache.
//!
//! Tables are generated per stage. Caching them per transform length is a
//! pure optimization with no observable effect on the output.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use crate::complex::Complex;

/// One stage's twiddle factors `(cos(theta*j), sin(theta*j))`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl TwiddleTable {
    /// Materialize `len` factors at the given angle step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(theta: f64, len: usize) -> Self {
        let mut cos = Vec::with_capacity(len);
        let mut sin = Vec::with_capacity(len);
        for j in 0..len {
            let angle = theta * j as f64;
            cos.push(angle.cos());
            sin.push(angle.sin());
        }
        Self { cos, sin }
    }

    /// The `j`-th factor.
    #[must_use]
    pub fn w(&self, j: usize) -> Complex {
        Complex::new(self.cos[j], self.sin[j])
    }

    /// Number of factors in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }
}

/// Cache key: transform length plus direction.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CacheKey {
    /// Transform length `n`.
    pub len: usize,
    /// Whether the tables are for the inverse transform.
    pub inverse: bool,
}

/// Thread-safe cache of per-stage twiddle tables.
pub struct TwiddleCache {
    cache: Mutex<HashMap<CacheKey, Arc<Vec<TwiddleTable>>>>,
    max_entries: usize,
}

impl TwiddleCache {
    /// Create a cache holding at most `max_entries` table sets.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    /// Get a cached table set, if available.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Vec<TwiddleTable>>> {
        self.cache.lock().get(key).cloned()
    }

    /// Store a table set.
    pub fn put(&self, key: CacheKey, value: Arc<Vec<TwiddleTable>>) {
        let mut cache = self.cache.lock();
        if cache.len() >= self.max_entries {
            // Simple eviction: clear all
            cache.clear();
        }
        cache.insert(key, value);
    }

    /// Number of cached table sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for TwiddleCache {
    fn default() -> Self {
        Self::new(16)
    }
}

static STAGE_CACHE: LazyLock<TwiddleCache> = LazyLock::new(TwiddleCache::default);

/// Forward-stage tables for a length-`n` transform, in stage order.
///
/// Stage `s` runs from `log2(n/2)` down to `0`; its table holds
/// `(n/2) >> s` factors at angle step `PI / ((n/2) >> s)`.
#[must_use]
pub fn forward_stages(n: usize) -> Arc<Vec<TwiddleTable>> {
    let key = CacheKey {
        len: n,
        inverse: false,
    };
    if let Some(stages) = STAGE_CACHE.get(&key) {
        return stages;
    }

    let n2 = n / 2;
    let mut stages = Vec::new();
    if n2 > 0 {
        for s in (0..=n2.trailing_zeros()).rev() {
            let len = n2 >> s;
            #[allow(clippy::cast_precision_loss)]
            let theta = PI / len as f64;
            stages.push(TwiddleTable::new(theta, len));
        }
    }

    let stages = Arc::new(stages);
    STAGE_CACHE.put(key, Arc::clone(&stages));
    stages
}

/// Inverse-stage tables for a length-`n` transform, in stage order.
///
/// Stages iterate by group size `i = n/2, n/4, .., 1`; each table holds
/// `(n/2) / i` factors at angle step `-i * PI / (n/2)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn inverse_stages(n: usize) -> Arc<Vec<TwiddleTable>> {
    let key = CacheKey {
        len: n,
        inverse: true,
    };
    if let Some(stages) = STAGE_CACHE.get(&key) {
        return stages;
    }

    let n2 = n / 2;
    let mut stages = Vec::new();
    let mut i = n2;
    while i > 0 {
        let theta = -(i as f64) * PI / n2 as f64;
        stages.push(TwiddleTable::new(theta, n2 / i));
        i >>= 1;
    }

    let stages = Arc::new(stages);
    STAGE_CACHE.put(key, Arc::clone(&stages));
    stages
}
