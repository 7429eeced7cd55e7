//! Data models for Outlay
//!
//! Both maps keep categories in insertion order. Validation reports the first
//! offending category, so iteration order is part of the contract.

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::validate::MIN_MONTHS;

/// Averaging method used to project the next month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// Unweighted mean of the last three months
    #[default]
    Simple,
    /// 20/30/50 weighting toward the most recent month
    Weighted,
}

impl ForecastMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::Simple => "simple",
            ForecastMethod::Weighted => "weighted",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ForecastMethod::Simple => "Simple Moving Average",
            ForecastMethod::Weighted => "Weighted Moving Average",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ForecastMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(ForecastMethod::Simple),
            "weighted" => Ok(ForecastMethod::Weighted),
            _ => Err(format!(
                "Unknown forecast method: {}. Available: simple, weighted",
                s
            )),
        }
    }
}

/// One category and its monthly history, oldest month first
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    name: String,
    months: Vec<f64>,
}

impl CategorySeries {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn months(&self) -> &[f64] {
        &self.months
    }
}

/// Historical monthly expenses keyed by category name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDataset {
    categories: Vec<CategorySeries>,
}

impl ExpenseDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demonstration dataset shown when no input is supplied
    pub fn sample() -> Self {
        let mut data = Self::new();
        let rows: [(&str, [f64; 5]); 4] = [
            ("Office Supplies", [120.0, 110.0, 150.0, 130.0, 140.0]),
            ("Marketing", [200.0, 240.0, 220.0, 210.0, 230.0]),
            ("Utilities", [90.0, 95.0, 100.0, 85.0, 90.0]),
            ("Rent", [1000.0, 1000.0, 1000.0, 1000.0, 1000.0]),
        ];
        for (name, months) in rows {
            data.categories.push(CategorySeries {
                name: name.to_string(),
                months: months.to_vec(),
            });
        }
        data
    }

    /// Add a category with its history.
    ///
    /// The name is stored as given. Whitespace-only names, duplicates and empty
    /// histories are rejected.
    pub fn insert(&mut self, name: impl Into<String>, months: Vec<f64>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyCategoryName);
        }
        if self.contains(&name) {
            return Err(Error::DuplicateCategory(name));
        }
        if months.is_empty() {
            return Err(Error::EmptySeries(name));
        }
        self.categories.push(CategorySeries { name, months });
        Ok(())
    }

    /// Add a category seeded with three zero months
    pub fn insert_blank(&mut self, name: impl Into<String>) -> Result<()> {
        self.insert(name, vec![0.0; MIN_MONTHS])
    }

    /// Remove a category, returning its history
    pub fn remove(&mut self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::NotFound(format!("category {}", name)))?;
        Ok(self.categories.remove(idx).months)
    }

    /// Append a month to the end (most recent position)
    pub fn push_month(&mut self, name: &str, value: f64) -> Result<()> {
        self.series_mut(name)?.months.push(value);
        Ok(())
    }

    /// Overwrite a single month
    pub fn set_month(&mut self, name: &str, index: usize, value: f64) -> Result<()> {
        let series = self.series_mut(name)?;
        let slot = series.months.get_mut(index).ok_or_else(|| {
            Error::NotFound(format!("month {} of category {}", index + 1, name))
        })?;
        *slot = value;
        Ok(())
    }

    /// Remove a single month. Refused once the category is down to the
    /// forecast window.
    pub fn remove_month(&mut self, name: &str, index: usize) -> Result<f64> {
        let series = self.series_mut(name)?;
        if series.months.len() <= MIN_MONTHS {
            return Err(Error::MinimumMonths {
                category: name.to_string(),
                minimum: MIN_MONTHS,
            });
        }
        if index >= series.months.len() {
            return Err(Error::NotFound(format!(
                "month {} of category {}",
                index + 1,
                name
            )));
        }
        Ok(series.months.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.months.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CategorySeries> {
        self.categories.iter()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    fn series_mut(&mut self, name: &str) -> Result<&mut CategorySeries> {
        self.categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::NotFound(format!("category {}", name)))
    }
}

impl Serialize for ExpenseDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for series in &self.categories {
            map.serialize_entry(&series.name, &series.months)?;
        }
        map.end()
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = ExpenseDataset;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category name to monthly amounts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut data = ExpenseDataset::new();
        while let Some((name, months)) = access.next_entry::<String, Vec<f64>>()? {
            data.insert(name, months)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for ExpenseDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

/// Next-month forecast per category, rounded to cents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResult {
    entries: Vec<(String, f64)>,
}

impl ForecastResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, category: impl Into<String>, value: f64) {
        self.entries.push((category.into(), value));
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (category, forecast) pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Sum of all category forecasts
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, value)| value).sum()
    }
}

impl Serialize for ForecastResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_method_from_str() {
        assert_eq!("simple".parse::<ForecastMethod>(), Ok(ForecastMethod::Simple));
        assert_eq!(
            " Weighted ".parse::<ForecastMethod>(),
            Ok(ForecastMethod::Weighted)
        );
        assert!("median".parse::<ForecastMethod>().is_err());
    }

    #[test]
    fn test_insert_rejects_duplicates_and_blank_names() {
        let mut data = ExpenseDataset::new();
        data.insert("Rent", vec![1000.0, 1000.0, 1000.0]).unwrap();

        assert!(matches!(
            data.insert("Rent", vec![1.0]),
            Err(Error::DuplicateCategory(name)) if name == "Rent"
        ));
        assert!(matches!(data.insert("   ", vec![1.0]), Err(Error::EmptyCategoryName)));
        assert!(matches!(data.insert("Gas", vec![]), Err(Error::EmptySeries(_))));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_insert_keeps_name_verbatim() {
        let mut data = ExpenseDataset::new();
        data.insert(" Rent ", vec![10.0]).unwrap();
        data.insert("Rent", vec![20.0]).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data.get(" Rent "), Some(&[10.0][..]));
        assert_eq!(data.get("Rent"), Some(&[20.0][..]));
        assert_eq!(data.category_names().collect::<Vec<_>>(), vec![" Rent ", "Rent"]);
    }

    #[test]
    fn test_insert_blank_seeds_three_months() {
        let mut data = ExpenseDataset::new();
        data.insert_blank("Insurance").unwrap();
        assert_eq!(data.get("Insurance"), Some(&[0.0, 0.0, 0.0][..]));
    }

    #[test]
    fn test_month_editing() {
        let mut data = ExpenseDataset::new();
        data.insert_blank("Fuel").unwrap();

        data.set_month("Fuel", 1, 45.5).unwrap();
        data.push_month("Fuel", 60.0).unwrap();
        assert_eq!(data.get("Fuel"), Some(&[0.0, 45.5, 0.0, 60.0][..]));

        assert_eq!(data.remove_month("Fuel", 0).unwrap(), 0.0);
        assert_eq!(data.get("Fuel"), Some(&[45.5, 0.0, 60.0][..]));

        // Down to three months: further removal is refused
        assert!(matches!(
            data.remove_month("Fuel", 0),
            Err(Error::MinimumMonths { minimum: 3, .. })
        ));
        assert!(data.set_month("Fuel", 7, 1.0).is_err());
        assert!(data.push_month("Missing", 1.0).is_err());
    }

    #[test]
    fn test_remove_category() {
        let mut data = ExpenseDataset::sample();
        let rent = data.remove("Rent").unwrap();
        assert_eq!(rent.len(), 5);
        assert!(!data.contains("Rent"));
        assert!(data.remove("Rent").is_err());
    }

    #[test]
    fn test_json_preserves_document_order() {
        let json = r#"{"Zebra": [1, 2, 3], "Apple": [4, 5, 6], "Mango": [7, 8, 9]}"#;
        let data: ExpenseDataset = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = data.category_names().collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);

        let round_trip = serde_json::to_string(&data).unwrap();
        assert!(round_trip.starts_with(r#"{"Zebra":"#));
    }

    #[test]
    fn test_json_rejects_duplicate_keys() {
        let json = r#"{"Rent": [1, 2, 3], "Rent": [4, 5, 6]}"#;
        let err = serde_json::from_str::<ExpenseDataset>(json).unwrap_err();
        assert!(err.to_string().contains("Category already exists: Rent"));
    }

    #[test]
    fn test_forecast_result_serializes_in_order() {
        let mut result = ForecastResult::with_capacity(2);
        result.push("Rent", 1000.0);
        result.push("Marketing", 220.0);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"Rent":1000.0,"Marketing":220.0}"#);
        assert_eq!(result.total(), 1220.0);
    }
}
