//! Builds the natural-language prompt sent to the search-augmented model.
//!
//! The search tool cannot be combined with a response schema, so the output
//! format is pinned down in the prompt itself using the delimiters decoded by
//! [`crate::parser`].

use crate::domain::search::SearchParams;
use crate::domain::types::Platform;
use crate::parser::{FIELD_DELIMITER, ITEM_DELIMITER};

/// Minimum number of offers the model is asked for.
pub const MIN_OFFERS: usize = 6;

/// Extra guidance narrowing the search to one platform.
pub fn platform_guidance(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::All => None,
        Platform::Instagram => {
            Some("Focus on finding results from Instagram mentions or aggregators.")
        }
        Platform::Yandex => Some("Focus on Yandex Maps, Yandex Market, or Russian aggregators."),
        Platform::Vk => Some("Focus on VKontakte communities and public pages."),
    }
}

/// Renders the prompt for `params`.
pub fn build_prompt(params: &SearchParams) -> String {
    let mut lines = vec![format!(
        "Find currently active discounts, bonuses, sales, or special offers for \"{}\" in the city of \"{}\".",
        params.query, params.city
    )];

    if let Some(guidance) = platform_guidance(params.platform) {
        lines.push(guidance.to_string());
    }

    lines.push(String::new());
    lines.push(format!("Please find at least {MIN_OFFERS} distinct offers."));
    lines.push(String::new());
    lines.push("CRITICAL OUTPUT FORMAT:".to_string());
    lines.push(format!(
        "You must output the data strictly as a list where each item is separated by the string \"{ITEM_DELIMITER}\"."
    ));
    lines.push(format!(
        "Inside each item, separate the fields with the string \"{FIELD_DELIMITER}\"."
    ));
    lines.push("The fields must be in this order:".to_string());
    lines.push(format!(
        "Title {d} Description (short, max 20 words) {d} Location/Store Name {d} Source Name (e.g. Instagram, Website)",
        d = FIELD_DELIMITER
    ));
    lines.push(String::new());
    lines.push(
        "Do not include any markdown formatting like **bold** or lists. Just the raw text with separators."
            .to_string(),
    );
    lines.push("Do not include an intro or outro.".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(platform: Platform) -> SearchParams {
        SearchParams::new("Москва", "суши", platform).unwrap()
    }

    #[test]
    fn prompt_embeds_query_city_and_delimiters() {
        let prompt = build_prompt(&params(Platform::All));

        assert!(prompt.contains("\"суши\""));
        assert!(prompt.contains("\"Москва\""));
        assert!(prompt.contains(ITEM_DELIMITER));
        assert!(prompt.contains(FIELD_DELIMITER));
        assert!(prompt.contains("at least 6 distinct offers"));
        assert!(prompt.contains("max 20 words"));
    }

    #[test]
    fn all_platforms_adds_no_guidance() {
        let prompt = build_prompt(&params(Platform::All));
        assert!(!prompt.contains("Focus on"));
    }

    #[test]
    fn each_platform_adds_exactly_its_own_clause() {
        for platform in [Platform::Instagram, Platform::Yandex, Platform::Vk] {
            let prompt = build_prompt(&params(platform));
            let own = platform_guidance(platform).unwrap();

            assert!(prompt.contains(own), "missing clause for {platform}");
            assert_eq!(prompt.matches("Focus on").count(), 1);
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        let first = build_prompt(&params(Platform::Yandex));
        let second = build_prompt(&params(Platform::Yandex));
        assert_eq!(first, second);
    }
}
