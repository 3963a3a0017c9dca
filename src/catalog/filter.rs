use crate::catalog::SYMPTOMS;

/// Case-insensitive substring view over a catalog.
///
/// Holds only the folded search text; every call to [`SymptomFilter::iter`]
/// walks the catalog again from the start.
#[derive(Debug, Clone)]
pub struct SymptomFilter<'a> {
    catalog: &'a [&'a str],
    needle: String,
}

impl<'a> SymptomFilter<'a> {
    pub fn new(catalog: &'a [&'a str], search: &str) -> Self {
        Self {
            catalog,
            needle: search.to_ascii_lowercase(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.catalog
            .iter()
            .copied()
            .filter(|entry| matches(entry, &self.needle))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

fn matches(entry: &str, needle: &str) -> bool {
    needle.is_empty() || entry.to_ascii_lowercase().contains(needle)
}

/// Filters the built-in catalog. Empty search text yields the whole catalog.
pub fn filter_symptoms(search: &str) -> Vec<&'static str> {
    SymptomFilter::new(SYMPTOMS, search).iter().collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/filter.rs"]
mod tests;
