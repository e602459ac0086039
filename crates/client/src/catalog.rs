//! Search and category filtering over an already-fetched scenario list.

use showcase_core::category::Category;
use showcase_db::models::scenario::Scenario;

/// Category chip selection on the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether `scenario` passes this filter. The stored category must
    /// equal the chip's label exactly, so non-canonical values only show
    /// under [`CategoryFilter::All`].
    pub fn matches(self, scenario: &Scenario) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => scenario.category == category.as_str(),
        }
    }
}

/// Case-insensitive substring match over title, description, business
/// problem and solution. A blank query matches everything.
pub fn matches_query(scenario: &Scenario, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        &scenario.title,
        &scenario.description,
        &scenario.business_problem,
        &scenario.solution,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Scenarios matching both `query` and `filter`, in their original order.
pub fn filter_scenarios<'a>(
    scenarios: &'a [Scenario],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a Scenario> {
    scenarios
        .iter()
        .filter(|s| filter.matches(s) && matches_query(s, query))
        .collect()
}
