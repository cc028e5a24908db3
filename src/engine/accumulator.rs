use crate::config::MetricConfig;
use std::collections::HashMap;

/// Occurrence count plus raw samples per metric slot for one n-gram.
#[derive(Debug, Clone)]
pub struct Accumulator {
    pub count: usize,
    pub samples: Vec<Vec<f64>>,
}

impl Accumulator {
    fn new(slots: usize) -> Self {
        Self {
            count: 0,
            samples: vec![Vec::new(); slots],
        }
    }
}

/// Pass-local n-gram table. Iteration follows first-encountered order.
#[derive(Debug, Default)]
pub struct AccumulatorMap {
    index: HashMap<String, usize>,
    entries: Vec<(String, Accumulator)>,
}

impl AccumulatorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `gram` and records `values` for every enabled slot.
    pub fn observe(&mut self, gram: String, values: &[f64], config: &MetricConfig) {
        let slot = match self.index.get(&gram) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(gram.clone(), i);
                self.entries.push((gram, Accumulator::new(config.len())));
                i
            }
        };

        let acc = &mut self.entries[slot].1;
        acc.count += 1;
        for (i, _) in config.enabled() {
            if let Some(&v) = values.get(i) {
                acc.samples[i].push(v);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, gram: &str) -> Option<&Accumulator> {
        self.index.get(gram).map(|&i| &self.entries[i].1)
    }

    pub fn into_entries(self) -> Vec<(String, Accumulator)> {
        self.entries
    }
}
