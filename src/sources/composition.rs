use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::{linspace, SamplingError, SamplingResult, SignalSource, TimeSeries};

/// One sinusoid of a composed signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalComponent {
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
    /// Radians
    pub phase: f64,
}

impl SignalComponent {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn value_at(&self, x: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * x + self.phase).sin()
    }
}

/// Keyed collection of components summed into a mixture.
///
/// Keys come from a counter that only moves forward, so a key freed by
/// `remove` is never handed out again by `add`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedSignalStore {
    components: BTreeMap<u32, SignalComponent>,
    next_key: u32,
}

impl ComposedSignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the next free key; fails once the key space is used up
    pub fn add(&mut self, component: SignalComponent) -> SamplingResult<u32> {
        let key = self.next_key;
        let next = key.checked_add(1).ok_or(SamplingError::KeysExhausted)?;
        self.components.insert(key, component);
        self.next_key = next;
        Ok(key)
    }

    pub fn remove(&mut self, key: u32) -> Option<SignalComponent> {
        self.components.remove(&key)
    }

    pub fn contains(&self, key: u32) -> bool {
        self.components.contains_key(&key)
    }

    pub fn get(&self, key: u32) -> Option<&SignalComponent> {
        self.components.get(&key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn keys(&self) -> Vec<u32> {
        self.components.keys().copied().collect()
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.components.values().map(|c| c.frequency).collect()
    }

    /// Mixture amplitude at every point of `x_grid`; zeros when empty
    pub fn sum(&self, x_grid: &[f64]) -> Vec<f64> {
        let mut mixed = vec![0.0; x_grid.len()];
        for component in self.components.values() {
            for (out, &x) in mixed.iter_mut().zip(x_grid) {
                *out += component.value_at(x);
            }
        }
        mixed
    }

    pub fn snapshot(&self) -> BTreeMap<u32, SignalComponent> {
        self.components.clone()
    }

    /// Merge entries into the store, overwriting colliding keys.
    ///
    /// `u32::MAX` is rejected since no key could follow it.
    pub fn merge(&mut self, entries: BTreeMap<u32, SignalComponent>) -> SamplingResult<()> {
        if let Some(&max_key) = entries.keys().next_back() {
            let next = max_key.checked_add(1).ok_or_else(|| {
                SamplingError::MalformedComposition(format!("key {} is reserved", max_key))
            })?;
            self.next_key = self.next_key.max(next);
        }
        self.components.extend(entries);
        Ok(())
    }

    /// Flat JSON object of stringified keys to components
    pub fn serialize(&self) -> SamplingResult<String> {
        serde_json::to_string_pretty(&self.components)
            .map_err(|e| SamplingError::MalformedComposition(e.to_string()))
    }

    /// Parse `json` and merge it into the store; on failure nothing changes
    pub fn deserialize(&mut self, json: &str) -> SamplingResult<()> {
        let entries: BTreeMap<u32, SignalComponent> = serde_json::from_str(json)
            .map_err(|e| SamplingError::MalformedComposition(e.to_string()))?;
        self.merge(entries)
    }
}

/// Uniform synthesis grid for composed signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub span_secs: f64,
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            span_secs: 10.0,
            points: 1000,
        }
    }
}

impl GridConfig {
    pub fn grid(&self) -> Vec<f64> {
        linspace(0.0, self.span_secs, self.points)
    }
}

/// A store rendered onto a grid
pub struct ComposedSignal<'a> {
    store: &'a ComposedSignalStore,
    grid: GridConfig,
}

impl<'a> ComposedSignal<'a> {
    pub fn new(store: &'a ComposedSignalStore, grid: GridConfig) -> Self {
        Self { store, grid }
    }
}

impl SignalSource for ComposedSignal<'_> {
    fn name(&self) -> &str {
        "Composed Signal"
    }

    fn series(&self) -> SamplingResult<TimeSeries> {
        let x = self.grid.grid();
        let y = self.store.sum(&x);
        TimeSeries::new(x, y)
    }
}
