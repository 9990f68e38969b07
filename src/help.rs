//! Player-facing rules text, shared by the TUI panel and the `rules` command.

use strictly_scramble_rules::ScoringRules;

/// Rules as displayable lines, reflecting the scoring rules in force.
pub fn rules_text(rules: &ScoringRules) -> Vec<String> {
    let mut lines = vec![
        "Rules:".to_string(),
        "You must make new words using the letters of the root word at the top.".to_string(),
        "Each letter can be used as many times as it appears in the root word.".to_string(),
        "The root word itself doesn't count, and every word counts only once.".to_string(),
        "Each word scores one point per letter.".to_string(),
    ];
    if *rules.milestone_every() > 0 && *rules.milestone_bonus() > 0 {
        lines.push(format!(
            "Every {} words you get an extra {} points.",
            rules.milestone_every(),
            rules.milestone_bonus()
        ));
    }
    if *rules.anagram_bonus() > 0 {
        lines.push(format!(
            "If you can make a word using all the letters you get {} extra points.",
            rules.anagram_bonus()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_mention_milestone() {
        let text = rules_text(&ScoringRules::default()).join("\n");
        assert!(text.contains("Every 5 words you get an extra 5 points."));
        assert!(!text.contains("all the letters"));
    }

    #[test]
    fn test_anagram_line_when_enabled() {
        let rules = ScoringRules::default().with_anagram_bonus(2);
        let text = rules_text(&rules).join("\n");
        assert!(text.contains("using all the letters you get 2 extra points"));
    }
}
