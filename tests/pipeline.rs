//! End-to-end tests of the two-stage pipeline through the public API

use transcript_normalizer::correction::{CorrectorSettings, MatchType, TextCorrector};
use transcript_normalizer::phonetic::PhoneticKind;
use transcript_normalizer::pipeline::Pipeline;
use transcript_normalizer::replacement::{
    apply_replacements, replacement_statistics, ReplacementRule, ReplacementRuleSet,
};

fn spoken_french_corrector(kind: PhoneticKind) -> TextCorrector {
    TextCorrector::new(
        kind.build(),
        CorrectorSettings {
            threshold: 0.7,
            string_weight: 0.0,
            length_weight: 0.4,
        },
    )
    .unwrap()
    .with_vocabulary(["TPG+", "NextGen", "Hafas"])
}

#[test]
fn test_meeting_transcript() {
    let rule_sets = vec![
        ReplacementRuleSet::new(
            "Speakers",
            vec![ReplacementRule::new("Jean Dupont", ["Jean", "Jean Dupont"])],
        ),
        ReplacementRuleSet::new(
            "Products",
            vec![ReplacementRule::new("NOVA", ["/nova.?14/"])],
        ),
    ];
    let pipeline = Pipeline::new(
        &rule_sets,
        Some(spoken_french_corrector(PhoneticKind::French)),
    )
    .unwrap();

    let output = pipeline.run("Jean: nova 14 uses next jen and hafas");

    assert_eq!(output.text, "Jean Dupont: NOVA uses NextGen and Hafas");
    assert_eq!(output.replacements.len(), 2);
    assert_eq!(output.replacements[0].category, "Speakers");
    assert_eq!(output.replacements[1].category, "Products");

    let corrected: Vec<&str> = output
        .corrections
        .iter()
        .map(|c| c.corrected.as_str())
        .collect();
    assert_eq!(corrected, vec!["NextGen", "Hafas"]);
    assert_eq!(output.corrections[1].match_type, MatchType::Exact);
}

#[test]
fn test_pipeline_output_is_stable() {
    let pipeline = Pipeline::new(
        &[],
        Some(spoken_french_corrector(PhoneticKind::FrenchSkeleton)),
    )
    .unwrap();

    let first = pipeline.run("next jen and hafas tépéjé plusse");
    let second = pipeline.run(&first.text);

    assert_eq!(first.text, "NextGen and Hafas TPG+");
    assert_eq!(second.text, first.text);
    assert!(second.corrections.is_empty());
}

#[test]
fn test_statistics_over_pipeline_reports() {
    let rule_sets = vec![ReplacementRuleSet::new(
        "Names",
        vec![ReplacementRule::new("Robert", ["Bob", "Bobby"])],
    )];

    let outcome = apply_replacements("Bob and bob met Bobby and Bob", &rule_sets).unwrap();
    let statistics = replacement_statistics(&outcome.reports);

    assert_eq!(outcome.text, "Robert and Robert met Robert and Robert");
    assert_eq!(statistics.len(), 1);
    let counts: Vec<(&str, usize)> = statistics[0]
        .replacements
        .iter()
        .map(|c| (c.from.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("Bob", 2), ("bob", 1), ("Bobby", 1)]);
}

#[test]
fn test_failed_rule_set_keeps_earlier_output() {
    let rule_sets = vec![
        ReplacementRuleSet::new("Names", vec![ReplacementRule::new("Robert", ["Bob"])]),
        ReplacementRuleSet::new("Broken", vec![ReplacementRule::new("X", ["/[a-/"])]),
    ];

    let failure = apply_replacements("Bob", &rule_sets).unwrap_err();

    assert_eq!(failure.applied_sets, 1);
    assert_eq!(failure.partial.text, "Robert");
    assert!(failure.error.to_string().contains("Broken"));
    assert!(Pipeline::new(&rule_sets, None).is_err());
}
