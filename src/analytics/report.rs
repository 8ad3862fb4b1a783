//! The full Pokedex report printed by the `report` and `run` commands

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PokedexAnalytics;
use crate::error::Result;
use crate::models::{Evolution, Pokemon};

/// Parameters of the report queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    /// How many names to list from the start of the Pokedex
    pub first_count: usize,
    /// How many names to list from the end (by id)
    pub last_count: usize,
    /// Pokemon to show in detail
    pub pokemon_name: String,
    /// Pokemon whose next evolution is shown
    pub evolution_of: String,
    /// Type used for the type filter and the evolution filter
    pub type_name: String,
    /// Weaknesses for the "weak to any" filter
    pub weak_to: Vec<String>,
    /// Exact weakness count to tally
    pub weakness_count: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            first_count: 10,
            last_count: 5,
            pokemon_name: "Pikachu".to_string(),
            evolution_of: "Charmander".to_string(),
            type_name: "Fire".to_string(),
            weak_to: vec!["Water".to_string(), "Electric".to_string()],
            weakness_count: 1,
        }
    }
}

/// Every analytic result over one Pokedex
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokedexReport {
    pub total: usize,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub pokemon: Option<Pokemon>,
    pub next_evolution: Option<Evolution>,
    pub of_type: Vec<String>,
    pub weak_to_any: Vec<String>,
    pub with_weakness_count: usize,
    pub most_weaknesses: Option<String>,
    pub fewest_next_evolutions: Option<String>,
    pub evolving_into_other_type: Vec<String>,
    pub heaviest: Option<String>,
    pub tallest: Option<String>,
    pub longest_name: Option<String>,
    pub average_weight: f64,
    pub average_height: f64,
    pub average_next_evolutions: f64,
    pub average_weaknesses: f64,
    pub most_common_weakness: Option<String>,
    /// Type -> names
    pub by_type: BTreeMap<String, Vec<String>>,
    /// Weakness -> number of Pokemon
    pub by_weakness: BTreeMap<String, usize>,
    /// Next evolution count -> names; keys are decimal strings so the
    /// report can be written as TOML
    pub by_next_evolution_count: BTreeMap<String, Vec<String>>,
}

fn name_of(pokemon: Option<&Pokemon>) -> Option<String> {
    pokemon.map(|p| p.name.clone())
}

fn names_of(pokemon: &[&Pokemon]) -> Vec<String> {
    pokemon.iter().map(|p| p.name.clone()).collect()
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(String::from).collect()
}

impl<'a> PokedexAnalytics<'a> {
    /// Run every query and collect the results
    pub fn report(&self, options: &ReportOptions) -> Result<PokedexReport> {
        Ok(PokedexReport {
            total: self.pokedex.len(),
            first_names: owned(self.first_names(options.first_count)),
            last_names: owned(self.last_names(options.last_count)),
            pokemon: self.find_by_name(&options.pokemon_name).cloned(),
            next_evolution: self.next_evolution_of(&options.evolution_of).cloned(),
            of_type: owned(self.names_with_type(&options.type_name)),
            weak_to_any: owned(self.names_weak_to_any(&options.weak_to)),
            with_weakness_count: self.count_with_weakness_count(options.weakness_count),
            most_weaknesses: name_of(self.most_weaknesses()),
            fewest_next_evolutions: name_of(self.fewest_next_evolutions()),
            evolving_into_other_type: names_of(&self.evolving_into_non_type(&options.type_name)),
            heaviest: name_of(self.heaviest()?),
            tallest: name_of(self.tallest()?),
            longest_name: name_of(self.longest_name()),
            average_weight: self.average_weight()?,
            average_height: self.average_height()?,
            average_next_evolutions: self.average_next_evolutions(),
            average_weaknesses: self.average_weaknesses(),
            most_common_weakness: self.most_common_weakness().map(String::from),
            by_type: self
                .group_by_type()
                .into_iter()
                .map(|(t, group)| (t.to_string(), names_of(&group)))
                .collect(),
            by_weakness: self
                .count_by_weakness()
                .into_iter()
                .map(|(w, n)| (w.to_string(), n))
                .collect(),
            by_next_evolution_count: self
                .group_by_next_evolution_count()
                .into_iter()
                .map(|(n, group)| (n.to_string(), names_of(&group)))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_pokedex;

    #[test]
    fn test_default_options() {
        let options = ReportOptions::default();
        assert_eq!(options.first_count, 10);
        assert_eq!(options.last_count, 5);
        assert_eq!(options.weak_to, vec!["Water", "Electric"]);
    }

    #[test]
    fn test_report_sample() {
        let pokedex = sample_pokedex();
        let report = PokedexAnalytics::new(&pokedex)
            .report(&ReportOptions::default())
            .unwrap();

        assert_eq!(report.total, 9);
        assert_eq!(report.first_names.len(), 9);
        assert_eq!(report.last_names[0], "Raichu");
        assert_eq!(report.pokemon.as_ref().map(|p| p.id), Some(25));
        assert_eq!(report.next_evolution.as_ref().map(|e| e.name.as_str()), Some("Charmeleon"));
        assert_eq!(report.with_weakness_count, 2);
        assert_eq!(report.heaviest.as_deref(), Some("Venusaur"));
        assert_eq!(report.most_common_weakness.as_deref(), Some("Ground"));
        assert_eq!(report.by_next_evolution_count["0"].len(), 3);
        assert_eq!(report.by_weakness["Ground"], 4);
    }

    #[test]
    fn test_report_serializes_to_json_and_toml() {
        let pokedex = sample_pokedex();
        let report = PokedexAnalytics::new(&pokedex)
            .report(&ReportOptions::default())
            .unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"most_common_weakness\":\"Ground\""));

        let toml = toml::to_string_pretty(&report).unwrap();
        assert!(toml.contains("most_common_weakness = \"Ground\""));
    }
}
