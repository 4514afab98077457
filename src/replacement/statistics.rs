use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::replacement::ReplacementReport;

/// How many times `from` was rewritten to `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementCount {
    pub from: String,
    pub to: String,
    pub count: usize,
}

/// Counts for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementStatistics {
    pub category: String,
    pub replacements: Vec<ReplacementCount>,
}

/// Aggregate reports per category, keeping first-seen order for categories
/// and for pairs.
pub fn replacement_statistics(reports: &[ReplacementReport]) -> Vec<ReplacementStatistics> {
    let mut statistics: Vec<ReplacementStatistics> = Vec::new();
    let mut category_index: HashMap<&str, usize> = HashMap::new();
    let mut pair_index: HashMap<(usize, &str, &str), usize> = HashMap::new();

    for report in reports {
        let category = *category_index
            .entry(report.category.as_str())
            .or_insert_with(|| {
                statistics.push(ReplacementStatistics {
                    category: report.category.clone(),
                    replacements: Vec::new(),
                });
                statistics.len() - 1
            });

        let counts = &mut statistics[category].replacements;
        for m in &report.matches {
            let key = (category, m.matched_text.as_str(), m.target.as_str());
            let slot = *pair_index.entry(key).or_insert_with(|| {
                counts.push(ReplacementCount {
                    from: m.matched_text.clone(),
                    to: m.target.clone(),
                    count: 0,
                });
                counts.len() - 1
            });
            counts[slot].count += 1;
        }
    }

    statistics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replacement::ReplacementMatch;

    fn report(category: &str, matches: &[(&str, &str)]) -> ReplacementReport {
        ReplacementReport {
            category: category.to_string(),
            matches: matches
                .iter()
                .map(|(matched, target)| ReplacementMatch {
                    target: target.to_string(),
                    matched_text: matched.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_counts_grouped_by_category() {
        let reports = [
            report("Speakers", &[("John", "John Smith"), ("john", "John Smith"), ("John", "John Smith")]),
            report("Names", &[("Bob", "Robert")]),
            report("Speakers", &[("Jane", "Jane Doe"), ("John", "John Smith")]),
        ];

        let stats = replacement_statistics(&reports);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, "Speakers");
        assert_eq!(
            stats[0].replacements,
            vec![
                ReplacementCount { from: "John".into(), to: "John Smith".into(), count: 3 },
                ReplacementCount { from: "john".into(), to: "John Smith".into(), count: 1 },
                ReplacementCount { from: "Jane".into(), to: "Jane Doe".into(), count: 1 },
            ]
        );
        assert_eq!(stats[1].category, "Names");
        assert_eq!(stats[1].replacements[0].count, 1);
    }

    #[test]
    fn test_no_reports() {
        assert!(replacement_statistics(&[]).is_empty());
    }
}
