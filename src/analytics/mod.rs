//! Analytic queries over a loaded Pokedex

mod report;

pub use report::{PokedexReport, ReportOptions};

use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::models::{Evolution, Pokedex, Pokemon};

/// Read-only query engine over a Pokedex.
///
/// "Find one" queries return `None` when nothing qualifies. When several
/// Pokemon tie, the one that comes first in the Pokedex wins.
pub struct PokedexAnalytics<'a> {
    pokedex: &'a Pokedex,
}

impl<'a> PokedexAnalytics<'a> {
    /// Create a new query engine
    pub fn new(pokedex: &'a Pokedex) -> Self {
        Self { pokedex }
    }

    fn pokemon(&self) -> impl Iterator<Item = &'a Pokemon> {
        self.pokedex.pokemon.iter()
    }

    /// Names of the first `n` Pokemon in file order
    pub fn first_names(&self, n: usize) -> Vec<&'a str> {
        self.pokemon().take(n).map(|p| p.name.as_str()).collect()
    }

    /// Names of the `n` Pokemon with the highest ids, highest first
    pub fn last_names(&self, n: usize) -> Vec<&'a str> {
        let mut sorted: Vec<&Pokemon> = self.pokemon().collect();
        // Stable sort keeps file order among equal ids
        sorted.sort_by(|a, b| b.id.cmp(&a.id));
        sorted.into_iter().take(n).map(|p| p.name.as_str()).collect()
    }

    /// Find a Pokemon by name, ignoring ASCII case
    pub fn find_by_name(&self, name: &str) -> Option<&'a Pokemon> {
        self.pokemon().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// First next evolution of the named Pokemon
    pub fn next_evolution_of(&self, name: &str) -> Option<&'a Evolution> {
        self.pokemon()
            .filter(|p| p.name.eq_ignore_ascii_case(name))
            .find_map(|p| p.next_evolution.as_ref().and_then(|evos| evos.first()))
    }

    /// Names of the Pokemon having the given type
    pub fn names_with_type(&self, type_name: &str) -> Vec<&'a str> {
        self.pokemon()
            .filter(|p| p.has_type(type_name))
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Names of the Pokemon weak to at least one of `weaknesses`
    pub fn names_weak_to_any<S: AsRef<str>>(&self, weaknesses: &[S]) -> Vec<&'a str> {
        self.pokemon()
            .filter(|p| weaknesses.iter().any(|w| p.has_weakness(w.as_ref())))
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Number of Pokemon with exactly `count` weaknesses
    pub fn count_with_weakness_count(&self, count: usize) -> usize {
        self.pokemon().filter(|p| p.weaknesses.len() == count).count()
    }

    /// Pokemon with the most weaknesses
    pub fn most_weaknesses(&self) -> Option<&'a Pokemon> {
        first_max_by(self.pokemon(), |p| p.weaknesses.len())
    }

    /// Among Pokemon that list next evolutions, the one with the fewest
    pub fn fewest_next_evolutions(&self) -> Option<&'a Pokemon> {
        self.pokemon()
            .filter_map(|p| p.next_evolution.as_ref().map(|evos| (evos.len(), p)))
            .min_by_key(|(len, _)| *len)
            .map(|(_, p)| p)
    }

    /// Pokemon that evolve into something which is not of `type_name`
    /// and which itself has a previous evolution
    pub fn evolving_into_non_type(&self, type_name: &str) -> Vec<&'a Pokemon> {
        let targets: HashSet<&str> = self
            .pokemon()
            .filter(|p| !p.has_type(type_name) && p.has_prev_evolution())
            .map(|p| p.num.as_str())
            .collect();

        self.pokemon()
            .filter(|p| {
                p.next_evolution
                    .as_ref()
                    .map_or(false, |evos| evos.iter().any(|e| targets.contains(e.num.as_str())))
            })
            .collect()
    }

    /// Heaviest Pokemon
    pub fn heaviest(&self) -> Result<Option<&'a Pokemon>> {
        let weights = self
            .pokemon()
            .map(|p| -> Result<(f64, &'a Pokemon)> { Ok((p.weight_value()?, p)) })
            .collect::<Result<Vec<_>>>()?;
        Ok(first_max_value(weights))
    }

    /// Tallest Pokemon
    pub fn tallest(&self) -> Result<Option<&'a Pokemon>> {
        let heights = self
            .pokemon()
            .map(|p| -> Result<(f64, &'a Pokemon)> { Ok((p.height_value()?, p)) })
            .collect::<Result<Vec<_>>>()?;
        Ok(first_max_value(heights))
    }

    /// Pokemon with the longest name, counted in characters
    pub fn longest_name(&self) -> Option<&'a Pokemon> {
        first_max_by(self.pokemon(), |p| p.name.chars().count())
    }

    /// Mean weight, 0.0 for an empty Pokedex
    pub fn average_weight(&self) -> Result<f64> {
        let weights = self
            .pokemon()
            .map(Pokemon::weight_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(mean(&weights))
    }

    /// Mean height, 0.0 for an empty Pokedex
    pub fn average_height(&self) -> Result<f64> {
        let heights = self
            .pokemon()
            .map(Pokemon::height_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(mean(&heights))
    }

    /// Mean number of next evolutions over Pokemon that list them
    pub fn average_next_evolutions(&self) -> f64 {
        let counts: Vec<f64> = self
            .pokemon()
            .filter_map(|p| p.next_evolution.as_ref().map(|evos| evos.len() as f64))
            .collect();
        mean(&counts)
    }

    /// Mean number of weaknesses over all Pokemon
    pub fn average_weaknesses(&self) -> f64 {
        let counts: Vec<f64> = self.pokemon().map(|p| p.weaknesses.len() as f64).collect();
        mean(&counts)
    }

    /// Pokemon grouped by each of their types
    pub fn group_by_type(&self) -> BTreeMap<&'a str, Vec<&'a Pokemon>> {
        let mut groups: BTreeMap<&str, Vec<&Pokemon>> = BTreeMap::new();
        for pokemon in self.pokemon() {
            let mut seen = HashSet::new();
            for type_name in &pokemon.types {
                if seen.insert(type_name.as_str()) {
                    groups.entry(type_name.as_str()).or_default().push(pokemon);
                }
            }
        }
        groups
    }

    /// Number of Pokemon per weakness
    pub fn count_by_weakness(&self) -> BTreeMap<&'a str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for weakness in self.pokemon().flat_map(|p| p.weaknesses.iter()) {
            *counts.entry(weakness.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Pokemon grouped by how many next evolutions they list (absent = 0)
    pub fn group_by_next_evolution_count(&self) -> BTreeMap<usize, Vec<&'a Pokemon>> {
        let mut groups: BTreeMap<usize, Vec<&Pokemon>> = BTreeMap::new();
        for pokemon in self.pokemon() {
            groups
                .entry(pokemon.next_evolution_count())
                .or_default()
                .push(pokemon);
        }
        groups
    }

    /// The weakness shared by the most Pokemon
    pub fn most_common_weakness(&self) -> Option<&'a str> {
        // Ties go to the weakness seen first
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for weakness in self.pokemon().flat_map(|p| p.weaknesses.iter()) {
            match counts.iter_mut().find(|(w, _)| *w == weakness.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((weakness.as_str(), 1)),
            }
        }

        counts
            .into_iter()
            .reduce(|best, item| if item.1 > best.1 { item } else { best })
            .map(|(w, _)| w)
    }
}

/// Max by key, keeping the earliest item on ties
fn first_max_by<'p, K, F>(iter: impl Iterator<Item = &'p Pokemon>, key: F) -> Option<&'p Pokemon>
where
    K: Ord,
    F: Fn(&Pokemon) -> K,
{
    iter.map(|p| (key(p), p))
        .reduce(|best, item| if item.0 > best.0 { item } else { best })
        .map(|(_, p)| p)
}

/// Max by a float value, keeping the earliest item on ties
fn first_max_value(values: Vec<(f64, &Pokemon)>) -> Option<&Pokemon> {
    values
        .into_iter()
        .reduce(|best, item| if item.0 > best.0 { item } else { best })
        .map(|(_, p)| p)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
