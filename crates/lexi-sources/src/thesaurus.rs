//! Merriam-Webster thesaurus client (basic and advanced tiers).

use serde_json::Value;

use crate::{
    SourceClient, SourceData, SourceKind,
    error::SourceError,
    http::{check_found, read_json},
};

#[derive(serde::Deserialize)]
struct ThesaurusEntry {
    meta: ThesaurusMeta,
}

#[derive(serde::Deserialize)]
struct ThesaurusMeta {
    #[serde(default)]
    syns: Vec<Vec<String>>,
    #[serde(default)]
    ants: Vec<Vec<String>>,
    #[serde(default)]
    offensive: Option<bool>,
}

impl SourceClient {
    /// Look `word` up in one thesaurus tier.
    ///
    /// `tier` must be [`SourceKind::ThesaurusBasic`] or
    /// [`SourceKind::ThesaurusAdvanced`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when the tier has no API key,
    /// or a transport/parse error from the request.
    pub async fn fetch_thesaurus(
        &self,
        tier: SourceKind,
        word: &str,
    ) -> Result<SourceData, SourceError> {
        let (base, key) = if tier == SourceKind::ThesaurusAdvanced {
            (&self.thesaurus.advanced_url, &self.thesaurus.advanced_key)
        } else {
            (&self.thesaurus.basic_url, &self.thesaurus.basic_key)
        };
        if key.trim().is_empty() {
            return Err(SourceError::NotConfigured(tier));
        }

        let url = format!(
            "{}/{}?key={}",
            base.trim_end_matches('/'),
            urlencoding::encode(word),
            urlencoding::encode(key)
        );
        let Some(resp) = check_found(self.http.get(&url).send().await?).await? else {
            return Ok(SourceData::default());
        };

        Ok(parse_thesaurus(read_json(resp).await?))
    }
}

/// Extract the first synonym and antonym groups.
///
/// Unknown words come back as a flat list of spelling suggestions; that and
/// any other shape without `meta` is "no data", not an error.
fn parse_thesaurus(body: Value) -> SourceData {
    let entry = body
        .as_array()
        .and_then(|entries| entries.first())
        .and_then(|first| serde_json::from_value::<ThesaurusEntry>(first.clone()).ok());
    let Some(entry) = entry else {
        return SourceData::default();
    };

    let first_group = |groups: Vec<Vec<String>>| -> Vec<String> {
        groups
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect()
    };

    SourceData {
        offensive: entry.meta.offensive,
        synonyms: first_group(entry.meta.syns),
        antonyms: first_group(entry.meta.ants),
        ..SourceData::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        {
            "meta": {
                "id": "propinquity",
                "syns": [
                    ["Closeness", "nearness", "proximity", "vicinity"],
                    ["kinship", "affinity"]
                ],
                "ants": [["distance", "Remoteness"]],
                "offensive": false
            },
            "hwi": { "hw": "pro*pin*qui*ty" },
            "fl": "noun"
        }
    ]"#;

    #[test]
    fn parse_first_groups_lowercased() {
        let data = parse_thesaurus(serde_json::from_str(FIXTURE).unwrap());
        assert_eq!(
            data.synonyms,
            vec!["closeness", "nearness", "proximity", "vicinity"]
        );
        assert_eq!(data.antonyms, vec!["distance", "remoteness"]);
        assert_eq!(data.offensive, Some(false));
        assert!(data.definitions.is_empty());
    }

    #[test]
    fn suggestion_list_is_no_data() {
        let body = serde_json::json!(["propinquities", "propensity"]);
        assert!(parse_thesaurus(body).is_empty());
    }

    #[test]
    fn missing_groups_are_empty() {
        let body = serde_json::json!([{ "meta": { "syns": [], "ants": [] } }]);
        let data = parse_thesaurus(body);
        assert!(data.synonyms.is_empty());
        assert!(data.antonyms.is_empty());
        assert_eq!(data.offensive, None);
    }

    #[test]
    fn non_array_body_is_no_data() {
        let body = serde_json::json!({ "error": "Invalid API key" });
        assert!(parse_thesaurus(body).is_empty());
    }

    #[test]
    fn offensive_flag_is_definitive() {
        let body = serde_json::json!([{ "meta": { "syns": [["slur"]], "ants": [], "offensive": true } }]);
        assert_eq!(parse_thesaurus(body).offensive, Some(true));
    }
}
