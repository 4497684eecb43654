//! List filters
//!
//! Name search shared by the client and program lists, and the program
//! category filter. Both keep the input order.

use crate::model::{Category, Client, Program};

/// Records with a display name the search box matches against
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Client {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Program {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match on the display name.
///
/// An empty query matches every record.
pub fn matches_name<T: Named + ?Sized>(record: &T, query: &str) -> bool {
    query.is_empty() || record.name().to_lowercase().contains(&query.to_lowercase())
}

/// Keep the records whose name contains `query`, in their original order
pub fn filter_by_name<'a, T: Named>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.name().to_lowercase().contains(&needle))
        .collect()
}

/// Name search combined with an optional category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramFilter {
    /// Name search text
    pub search: String,
    /// Exact category to keep; `None` keeps every category
    pub category: Option<Category>,
}

impl ProgramFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder method: restrict to a category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Check a program against both predicates
    pub fn matches(&self, program: &Program) -> bool {
        matches_name(program, &self.search) && matches_category(program, self.category)
    }

    /// Apply to a list, preserving order
    pub fn apply<'a>(&self, programs: &'a [Program]) -> Vec<&'a Program> {
        programs.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Exact category match; no category selected keeps everything
pub fn matches_category(program: &Program, category: Option<Category>) -> bool {
    match category {
        None => true,
        Some(wanted) => program.category.as_deref() == Some(wanted.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: u64, name: &str, category: Option<&str>) -> Program {
        Program {
            id,
            name: name.to_string(),
            description: None,
            category: category.map(String::from),
        }
    }

    fn sample() -> Vec<Program> {
        vec![
            program(1, "Morning Yoga", Some("Fitness")),
            program(2, "Meal Planning", Some("Nutrition")),
            program(3, "Yoga for Stress", Some("Mental Health")),
            program(4, "Walking Club", None),
            program(5, "Power YOGA", Some("Fitness")),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let programs = sample();
        let result = filter_by_name(&programs, "");
        assert_eq!(result.len(), programs.len());
    }

    #[test]
    fn test_name_filter_is_case_insensitive_and_ordered() {
        let programs = sample();
        let ids: Vec<u64> = filter_by_name(&programs, "yOgA").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_name_filter_on_clients() {
        let clients = vec![
            Client {
                id: 1,
                name: "Jane Doe".to_string(),
                age: None,
                gender: None,
                contact: None,
            },
            Client {
                id: 2,
                name: "John Smith".to_string(),
                age: None,
                gender: None,
                contact: None,
            },
        ];

        let result = filter_by_name(&clients, "DOE");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
        assert!(filter_by_name(&clients, "zzz").is_empty());
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let programs = sample();

        let filter = ProgramFilter::new().category(Category::Fitness);
        let ids: Vec<u64> = filter.apply(&programs).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);

        let filter = ProgramFilter::new().search("yoga").category(Category::MentalHealth);
        let ids: Vec<u64> = filter.apply(&programs).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);

        let filter = ProgramFilter::new().search("walk").category(Category::Fitness);
        assert!(filter.apply(&programs).is_empty());
    }

    #[test]
    fn test_filter_output_is_subset_of_input() {
        let programs = sample();
        for query in ["", "a", "yoga", "club", "x"] {
            for category in [None, Some(Category::Fitness), Some(Category::Nutrition)] {
                let filter = ProgramFilter {
                    search: query.to_string(),
                    category,
                };
                let result = filter.apply(&programs);

                // Every kept program passes both predicates and order is preserved
                let mut last_pos = None;
                for p in &result {
                    assert!(matches_name(*p, query));
                    assert!(matches_category(p, category));
                    let pos = programs.iter().position(|q| q.id == p.id).unwrap();
                    assert!(last_pos.map_or(true, |l| pos > l));
                    last_pos = Some(pos);
                }
            }
        }
    }
}
