/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use av_core::Dataset;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// API responses for one ticker, keyed by dataset and stored verbatim.
///
/// Keys serialise in fetch order. A dataset that could not be downloaded is
/// simply absent, and unknown top-level keys are skipped when reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawDataset(BTreeMap<Dataset, Value>);

impl<'de> Deserialize<'de> for RawDataset {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let entries = Map::<String, Value>::deserialize(deserializer)?;

    let mut raw = RawDataset::new();
    for (key, payload) in entries {
      match Dataset::ALL.into_iter().find(|d| d.key() == key) {
        Some(dataset) => raw.insert(dataset, payload),
        None => warn!("Ignoring unknown raw dataset key {:?}", key),
      }
    }
    Ok(raw)
  }
}

impl RawDataset {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, dataset: Dataset, payload: Value) {
    self.0.insert(dataset, payload);
  }

  pub fn get(&self, dataset: Dataset) -> Option<&Value> {
    self.0.get(&dataset)
  }

  pub fn contains(&self, dataset: Dataset) -> bool {
    self.0.contains_key(&dataset)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn datasets(&self) -> impl Iterator<Item = Dataset> + '_ {
    self.0.keys().copied()
  }

  /// Decode one dataset into its typed model.
  ///
  /// Never fails: a missing dataset or a payload of the wrong shape yields the
  /// model's default, whose fields all read as `"N/A"`.
  pub fn decode<T>(&self, dataset: Dataset) -> T
  where
    T: DeserializeOwned + Default,
  {
    let Some(payload) = self.get(dataset) else {
      debug!("No {} payload, using empty defaults", dataset);
      return T::default();
    };

    T::deserialize(payload).unwrap_or_else(|e| {
      warn!("Unexpected {} payload shape ({}), using empty defaults", dataset, e);
      T::default()
    })
  }
}
