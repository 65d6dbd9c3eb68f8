//! Discord text for collection announcements and summaries
//!
//! Message content is capped at Discord's 2000 character limit. Lengths are
//! counted in characters, not bytes, since emoji are multibyte.

use crate::collector::{CollectOptions, CollectedReaction, CollectionEnd};
use serenity::model::channel::ReactionType;
use std::collections::HashSet;
use tracing::warn;

/// Reaction count per emoji, in first-seen order
pub fn tally(collected: &[CollectedReaction]) -> Vec<(ReactionType, usize)> {
    let mut counts: Vec<(ReactionType, usize)> = Vec::new();

    for reaction in collected {
        match counts.iter_mut().find(|(emoji, _)| *emoji == reaction.emoji) {
            Some((_, count)) => *count += 1,
            None => counts.push((reaction.emoji.clone(), 1)),
        }
    }
    counts
}

/// Text posted when a collection starts
pub fn announcement(options: &CollectOptions) -> String {
    match (options.time, options.max_matches) {
        (Some(time), Some(max)) => format!(
            "Collecting reactions for {}s (up to {max}).",
            time.as_secs()
        ),
        (Some(time), None) => format!("Collecting reactions for {}s.", time.as_secs()),
        (None, Some(max)) => format!("Collecting up to {max} reactions."),
        (None, None) => "Collecting reactions.".to_string(),
    }
}

/// Text posted when a collection ends
pub fn summarize(end: &CollectionEnd) -> String {
    if end.collected.is_empty() {
        return format!("No reactions collected ({}).", end.reason);
    }

    let users: HashSet<_> = end.collected.iter().map(|r| r.user_id).collect();
    let mut lines = vec![format!(
        "Collected {} reaction(s) from {} user(s) ({}).",
        end.collected.len(),
        users.len(),
        end.reason
    )];
    lines.extend(
        tally(&end.collected)
            .into_iter()
            .map(|(emoji, count)| format!("{emoji} × {count}")),
    );

    truncate_content(&lines.join("\n"))
}

/// Truncate content to Discord's 2000 character limit
///
/// If content exceeds limit, truncates to 1997 chars and appends "..."
pub fn truncate_content(content: &str) -> String {
    const MAX_LEN: usize = 2000;

    let char_count = content.chars().count();

    if char_count > MAX_LEN {
        let truncated: String = content.chars().take(MAX_LEN - 3).collect();
        let result = format!("{}...", truncated);

        warn!(
            original_len = char_count,
            truncated_len = result.chars().count(),
            "Content exceeds 2000 chars, truncated"
        );

        result
    } else {
        content.to_string()
    }
}
