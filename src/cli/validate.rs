use anyhow::{bail, Result};

use crate::cli::args::ValidateCliArgs;
use crate::replacement::{validate_rule_set, DEFAULT_CATEGORY};
use crate::sources;

pub fn handle_validate_command(args: ValidateCliArgs) -> Result<()> {
    let mut total_issues = 0;

    for path in &args.files {
        let rule_sets = sources::load_rule_sets(path)?;

        let mut file_issues = 0;
        for rule_set in &rule_sets {
            let issues = validate_rule_set(rule_set);
            if issues.is_empty() {
                continue;
            }

            let category = if rule_set.category.trim().is_empty() {
                DEFAULT_CATEGORY
            } else {
                rule_set.category.as_str()
            };
            for issue in &issues {
                println!("{}: [{}] {}", path.display(), category, issue);
            }
            file_issues += issues.len();
        }

        if file_issues == 0 {
            println!("{}: OK ({} rule set(s))", path.display(), rule_sets.len());
        }
        total_issues += file_issues;
    }

    if total_issues > 0 {
        bail!("Found {} issue(s) in rule files", total_issues);
    }
    Ok(())
}
