use serde::Deserialize;
use validator::Validate;

use crate::domain::search::SearchParams;
use crate::domain::types::Platform;
use crate::forms::FormError;

/// Query string submitted by the search form and the JSON API.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    /// City to search in.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub city: String,
    /// What the user is looking for.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub query: String,
    /// Platform wire value, `all` when omitted.
    #[serde(default)]
    pub platform: Option<String>,
}

impl TryFrom<SearchForm> for SearchParams {
    type Error = FormError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let platform = match form.platform.as_deref().map(str::trim) {
            None | Some("") => Platform::All,
            Some(value) => value.parse::<Platform>()?,
        };

        Ok(SearchParams::new(form.city, form.query, platform)?)
    }
}
