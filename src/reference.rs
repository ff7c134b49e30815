use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::warn;
use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config;

pub const NICHES: [&str; 10] = [
    "Hospitality",
    "Fitness",
    "Tech",
    "Finance",
    "Branding & Marketing",
    "Management",
    "Food",
    "Agriculture",
    "Fashion",
    "Trade",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub flag: String,
    pub code: String,
}

/// One row of a reference-data picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOption {
    /// Stable row identity: the country code, or the label for static lists.
    pub key: String,
    pub value: String,
    pub label: String,
    pub image: Option<String>,
}

impl PickerOption {
    pub fn plain(label: &str) -> Self {
        Self { key: label.to_string(), value: label.to_string(), label: label.to_string(), image: None }
    }
}

impl From<Country> for PickerOption {
    fn from(country: Country) -> Self {
        let image = (!country.flag.is_empty()).then_some(country.flag);
        let key = if country.code.is_empty() { country.name.clone() } else { country.code };
        Self { key, value: country.name.clone(), label: country.name, image }
    }
}

pub fn niche_options() -> Vec<PickerOption> {
    NICHES.iter().map(|n| PickerOption::plain(n)).collect()
}

/// Case-insensitive substring match of `query` against each label. A blank
/// query keeps everything.
pub fn filter_options<'a>(options: &'a [PickerOption], query: &str) -> Vec<&'a PickerOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
        .collect()
}

/// Sort key that ignores accents and case, so "Åland" files under "a".
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Reads the country endpoint's array. Entries without a common name are
/// dropped, the PNG flag is preferred over the SVG one, and the result is
/// sorted by name the way a reader expects (accents folded, raw name as
/// tie-break).
pub fn parse_countries(data: &Value) -> Vec<Country> {
    let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_string();

    let mut countries: Vec<Country> = data
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|c| {
            let flags = c.get("flags");
            let png = text(flags.and_then(|f| f.get("png")));
            Country {
                name: text(c.get("name").and_then(|n| n.get("common"))),
                flag: if png.is_empty() { text(flags.and_then(|f| f.get("svg"))) } else { png },
                code: text(c.get("cca2")),
            }
        })
        .filter(|c| !c.name.is_empty())
        .collect();
    countries.sort_by_cached_key(|c| (collation_key(&c.name), c.name.clone()));
    countries
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub trait CountrySource {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<Vec<Country>, FetchError>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCountrySource {
    url: String,
}

impl Default for HttpCountrySource {
    fn default() -> Self {
        Self { url: config::COUNTRIES_ENDPOINT.to_string() }
    }
}

impl CountrySource for HttpCountrySource {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<Vec<Country>, FetchError>> {
        Box::pin(async move {
            let response = Request::get(&self.url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            let data: Value = response.json().await.map_err(|e| FetchError::Decode(e.to_string()))?;
            Ok(parse_countries(&data))
        })
    }
}

/// One read against `source`. Failure degrades to an empty list.
pub async fn load_country_options(source: &dyn CountrySource) -> Vec<PickerOption> {
    match source.fetch().await {
        Ok(countries) => countries.into_iter().map(PickerOption::from).collect(),
        Err(e) => {
            warn!("Could not load countries: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    struct FakeSource {
        calls: Cell<usize>,
        reply: Result<Vec<Country>, FetchError>,
    }

    impl CountrySource for FakeSource {
        fn fetch(&self) -> LocalBoxFuture<'_, Result<Vec<Country>, FetchError>> {
            self.calls.set(self.calls.get() + 1);
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    fn country(name: &str, code: &str) -> Country {
        Country { name: name.into(), flag: format!("https://flags.example/{code}.png"), code: code.into() }
    }

    #[test]
    fn parses_sorts_and_drops_nameless_entries() {
        let data = json!([
            { "name": { "common": "Kenya" }, "flags": { "png": "ke.png", "svg": "ke.svg" }, "cca2": "KE" },
            { "name": { "common": "" }, "flags": { "png": "x.png" }, "cca2": "XX" },
            { "name": { "common": "Ghana" }, "flags": { "svg": "gh.svg" }, "cca2": "GH" },
            { "flags": { "png": "no-name.png" } },
            { "name": { "common": "Benin" } }
        ]);

        let countries = parse_countries(&data);

        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Benin", "Ghana", "Kenya"]);
        assert_eq!(countries[1].flag, "gh.svg");
        assert_eq!(countries[2].flag, "ke.png");
        assert_eq!(countries[2].code, "KE");
        assert_eq!(countries[0].flag, "");
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let raw = ["Zimbabwe", "Åland Islands", "Albania", "Côte d'Ivoire", "Czechia", "Cuba"];
        let data = Value::Array(raw.iter().map(|name| json!({ "name": { "common": name } })).collect());

        let names: Vec<String> = parse_countries(&data).into_iter().map(|c| c.name).collect();

        assert_eq!(
            names,
            ["Åland Islands", "Albania", "Côte d'Ivoire", "Cuba", "Czechia", "Zimbabwe"]
        );
    }

    #[test]
    fn collation_key_folds_accents_and_case() {
        assert_eq!(collation_key("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(collation_key("ÅLAND"), "aland");
        assert_eq!(collation_key("Curaçao"), "curacao");
    }

    #[test]
    fn country_rows_are_keyed_by_code() {
        let option = PickerOption::from(country("Kenya", "KE"));
        assert_eq!(option.key, "KE");
        assert_eq!(PickerOption::plain("Fashion").key, "Fashion");
    }

    #[test]
    fn non_array_body_is_empty() {
        assert!(parse_countries(&json!({ "status": 404 })).is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = niche_options();
        let labels: Vec<&str> = filter_options(&options, "MAN")
            .into_iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Management"]);

        assert_eq!(filter_options(&options, "  ").len(), NICHES.len());
        assert!(filter_options(&options, "zzz").is_empty());
    }

    #[test]
    fn filtering_loaded_countries_needs_no_second_request() {
        let source = FakeSource {
            calls: Cell::new(0),
            reply: Ok(vec![country("Nigeria", "NG"), country("Niger", "NE"), country("Kenya", "KE")]),
        };

        let options = block_on(load_country_options(&source));
        let selected = options.iter().find(|o| o.value == "Kenya").cloned();
        let narrowed: Vec<&str> = filter_options(&options, "nIGe")
            .into_iter()
            .map(|o| o.label.as_str())
            .collect();

        assert_eq!(selected.and_then(|o| o.image).as_deref(), Some("https://flags.example/KE.png"));
        assert_eq!(narrowed, vec!["Nigeria", "Niger"]);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn fetch_failure_degrades_to_empty_list() {
        let source = FakeSource { calls: Cell::new(0), reply: Err(FetchError::Network("offline".into())) };

        assert!(block_on(load_country_options(&source)).is_empty());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn country_without_flag_has_no_image() {
        let option = PickerOption::from(Country { name: "Togo".into(), flag: String::new(), code: "TG".into() });
        assert_eq!(option.value, "Togo");
        assert_eq!(option.image, None);
    }
}
