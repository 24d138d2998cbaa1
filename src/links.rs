//! Attaches source links and identifiers to parsed records.
//!
//! Grounding URLs are handed out round-robin by position. Nothing checks that
//! the assigned page actually describes the offer; every record only gets
//! some plausible link when at least one grounding URL exists.

use chrono::{DateTime, Utc};

use crate::domain::deal::{Deal, ParsedDeal};

/// Web search used when the answer carried no grounding URLs.
pub const FALLBACK_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Search link for `title` in `city`.
pub fn fallback_search_url(title: &str, city: &str) -> String {
    let query = format!("{title} {city}");
    // Everything outside the RFC 3986 unreserved set is escaped, `!*'()` included.
    format!("{FALLBACK_SEARCH_URL}{}", urlencoding::encode(&query))
}

/// Identifier of the record at `index` within a result set created at `created_at`.
pub fn deal_id(index: usize, created_at: DateTime<Utc>) -> String {
    format!("deal-{index}-{}", created_at.timestamp_millis())
}

/// Builds the final deals from parsed records and the grounding `links`.
pub fn assign_links(
    parsed: Vec<ParsedDeal>,
    links: &[String],
    city: &str,
    created_at: DateTime<Utc>,
) -> Vec<Deal> {
    parsed
        .into_iter()
        .enumerate()
        .map(|(index, deal)| {
            let source_url = if links.is_empty() {
                fallback_search_url(&deal.title, city)
            } else {
                links[index % links.len()].clone()
            };
            Deal::new(deal, deal_id(index, created_at), source_url)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::parser::parse_deals;

    fn created_at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    fn parsed(count: usize) -> Vec<ParsedDeal> {
        let text = (0..count)
            .map(|i| format!("Offer {i}|||desc|||shop|||Web"))
            .collect::<Vec<_>>()
            .join("%%%ITEM%%%");
        parse_deals(&text, "Москва")
    }

    #[test]
    fn links_are_assigned_round_robin() {
        let links = vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
        ];

        let deals = assign_links(parsed(5), &links, "Москва", created_at());

        let urls: Vec<_> = deals.iter().map(|d| d.source_url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://a.example",
                "https://b.example",
                "https://a.example",
                "https://b.example",
                "https://a.example",
            ]
        );
    }

    #[test]
    fn more_links_than_records_uses_prefix() {
        let links: Vec<String> = (0..4).map(|i| format!("https://{i}.example")).collect();

        let deals = assign_links(parsed(2), &links, "Москва", created_at());

        assert_eq!(deals[0].source_url, "https://0.example");
        assert_eq!(deals[1].source_url, "https://1.example");
    }

    #[test]
    fn no_links_falls_back_to_web_search() {
        let deals = assign_links(parsed(2), &[], "Москва", created_at());

        for deal in &deals {
            let expected = format!(
                "https://www.google.com/search?q={}",
                urlencoding::encode(&format!("{} Москва", deal.title))
            );
            assert_eq!(deal.source_url, expected);
        }
        assert_eq!(
            deals[0].source_url,
            "https://www.google.com/search?q=Offer%200%20%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0"
        );
    }

    #[test]
    fn fallback_escapes_punctuation() {
        assert_eq!(
            fallback_search_url("Pizza (2+1)!", "Рим"),
            "https://www.google.com/search?q=Pizza%20%282%2B1%29%21%20%D0%A0%D0%B8%D0%BC"
        );
    }

    #[test]
    fn ids_combine_position_and_timestamp() {
        let deals = assign_links(parsed(3), &[], "Москва", created_at());

        let ids: Vec<_> = deals.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "deal-0-1700000000123",
                "deal-1-1700000000123",
                "deal-2-1700000000123",
            ]
        );
    }

    #[test]
    fn mixed_answer_without_links() {
        let parsed = parse_deals(
            "Скидка 20%%%ITEM%%%Фитнес клуб|||Скидка 30%%%ITEM%%%",
            "Москва",
        );

        let deals = assign_links(parsed, &[], "Москва", created_at());

        assert_eq!(deals.len(), 2);
        assert_eq!(
            deals[0].source_url,
            fallback_search_url("Скидка 20", "Москва")
        );
        assert!(
            deals[1]
                .source_url
                .contains(&*urlencoding::encode("Фитнес клуб"))
        );
    }
}
