//! Decoder for the delimiter-separated answer format.
//!
//! The model is asked to answer with items separated by [`ITEM_DELIMITER`]
//! and fields separated by [`FIELD_DELIMITER`] in the order title,
//! description, location, source. Missing fields are defaulted so a single
//! malformed item never fails the whole answer.

use crate::domain::deal::{Category, ParsedDeal};

pub const ITEM_DELIMITER: &str = "%%%ITEM%%%";
pub const FIELD_DELIMITER: &str = "|||";

pub const DEFAULT_TITLE: &str = "Unknown Offer";
// No trailing period.
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_SOURCE: &str = "Web";

/// Splits `text` into records. `city` stands in for a missing location.
pub fn parse_deals(text: &str, city: &str) -> Vec<ParsedDeal> {
    text.split(ITEM_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| parse_segment(segment, city))
        .collect()
}

fn parse_segment(segment: &str, city: &str) -> ParsedDeal {
    let mut fields = segment.split(FIELD_DELIMITER).map(str::trim);
    let mut next_or = |default: &str| {
        fields
            .next()
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    };

    let title = next_or(DEFAULT_TITLE);
    let description = next_or(DEFAULT_DESCRIPTION);
    let location = next_or(city);
    let source = next_or(DEFAULT_SOURCE);
    let category = Category::infer(&title);

    ParsedDeal {
        title,
        description,
        location,
        source,
        category,
    }
}
