//! Loading and validating page content.
//!
//! Content files are optional overrides of [`SiteContent::default`]. Both
//! TOML (`site.toml`) and JSON (`site.json`) are accepted; the format is
//! picked from the file extension.

use std::path::Path;

use crate::error::{Result, SiteError};
use crate::types::SiteContent;

impl SiteContent {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load content from a `.toml` or `.json` file.
    ///
    /// Unlike the page defaults, a file that exists but does not parse is an
    /// error: silently publishing the default copy would hide the mistake.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(SiteError::UnsupportedFormat(path.to_path_buf())),
        };

        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = parse(&raw)?;
        tracing::debug!(
            path = %path.display(),
            ventures = content.portfolio.ventures.len(),
            "loaded site content"
        );
        Ok(content)
    }

    /// Serialize the full content tree, e.g. as a starting point for a
    /// content file.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject content that would render broken links or an empty brand.
    pub fn validate(&self) -> Result<()> {
        if self.brand.name.trim().is_empty() {
            return Err(invalid("brand name is empty"));
        }
        if self.navigation.links.is_empty() {
            return Err(invalid("navigation has no links"));
        }
        if let Some(link) = self.navigation.links.iter().find(|l| l.label.trim().is_empty()) {
            return Err(invalid(format!(
                "navigation link to {} has no label",
                link.target.href()
            )));
        }

        for (idx, venture) in self.portfolio.ventures.iter().enumerate() {
            if venture.name.trim().is_empty() {
                return Err(invalid(format!("venture #{} has no name", idx + 1)));
            }
            if !(venture.url.starts_with("https://") || venture.url.starts_with("http://")) {
                return Err(invalid(format!(
                    "venture '{}' url must start with http:// or https:// (got '{}')",
                    venture.name, venture.url
                )));
            }
        }

        let email = &self.contact.email;
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(invalid(format!("contact email '{email}' is not an address")));
        }

        let dial = &self.contact.phone.dial;
        let digits = dial.strip_prefix('+').unwrap_or(dial);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(format!(
                "phone dial string '{dial}' must be digits with an optional leading '+'"
            )));
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> SiteError {
    SiteError::InvalidContent(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Anchor, Venture};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn default_content_is_valid() {
        SiteContent::default().validate().expect("defaults validate");
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let content = SiteContent::from_toml_str(
            r#"
[contact]
region = "Kingston / Philadelphia"

[hero]
badge = "Est. 2024"
"#,
        )
        .expect("parse toml");

        assert_eq!(content.contact.region, "Kingston / Philadelphia");
        assert_eq!(content.hero.badge, "Est. 2024");
        // untouched fields keep the published copy
        assert_eq!(content.contact.email, "jamdelphiagroup@gmail.com");
        assert_eq!(content.hero.headline, "Rooted in Heritage.");
        assert_eq!(content.portfolio.ventures.len(), 1);
    }

    #[test]
    fn adding_a_venture_is_a_data_change() {
        let content = SiteContent::from_toml_str(
            r#"
[[portfolio.ventures]]
name = "Signature Seal Notary"
category = "Professional Services"
url = "https://signaturesealnotaries.com"

[[portfolio.ventures]]
name = "Yard Kitchen"
category = "Hospitality"
description = "Island cooking, city portions."
url = "https://example.com/yard-kitchen"
"#,
        )
        .expect("parse toml");

        let names: Vec<_> = content
            .portfolio
            .ventures
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["Signature Seal Notary", "Yard Kitchen"]);
        content.validate().expect("valid");
    }

    #[test]
    fn json_nav_targets_use_lowercase_anchor_names() {
        let content = SiteContent::from_json_str(
            r#"{ "navigation": { "links": [ { "label": "Reach us", "target": "contact" } ] } }"#,
        )
        .expect("parse json");
        assert_eq!(content.navigation.links.len(), 1);
        assert_eq!(content.navigation.links[0].target, Anchor::Contact);
        assert_eq!(content.navigation.cta_label, "Get in Touch");
    }

    #[test]
    fn load_from_path_picks_format_by_extension() {
        let temp = TempDir::new().expect("temp dir");

        let toml_path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&toml_path).expect("create toml");
        writeln!(file, "[brand]\nname = \"JamDelphia Holdings\"").expect("write toml");
        let content = SiteContent::load_from_path(&toml_path).expect("load toml");
        assert_eq!(content.brand.name, "JamDelphia Holdings");

        let json_path = temp.path().join("site.JSON");
        std::fs::write(&json_path, r#"{"footer":{"credit":"Est. Philadelphia"}}"#)
            .expect("write json");
        let content = SiteContent::load_from_path(&json_path).expect("load json");
        assert_eq!(content.footer.credit, "Est. Philadelphia");
    }

    #[test]
    fn load_rejects_unknown_extension_and_missing_file() {
        let temp = TempDir::new().expect("temp dir");

        let yaml = temp.path().join("site.yaml");
        std::fs::write(&yaml, "brand: {}").expect("write yaml");
        assert!(matches!(
            SiteContent::load_from_path(&yaml),
            Err(SiteError::UnsupportedFormat(_))
        ));

        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            SiteContent::load_from_path(&missing),
            Err(SiteError::Io { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = SiteContent::from_toml_str("[brand\nname = 1").unwrap_err();
        assert!(matches!(err, SiteError::Toml(_)));
    }

    #[test]
    fn validate_rejects_broken_venture_url() {
        let mut content = SiteContent::default();
        content.portfolio.ventures.push(Venture {
            name: "Half Done".into(),
            url: "signaturesealnotaries.com".into(),
            ..Default::default()
        });
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("Half Done"), "{err}");
    }

    #[test]
    fn validate_rejects_bad_contact_values() {
        let mut content = SiteContent::default();
        content.contact.email = "jamdelphiagroup.gmail.com".into();
        assert!(content.validate().is_err());

        let mut content = SiteContent::default();
        content.contact.phone.dial = "(304) 982-4165".into();
        assert!(content.validate().is_err());

        let mut content = SiteContent::default();
        content.navigation.links.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn dial_string_allows_only_a_leading_plus() {
        for bad in ["+", "+++", "3+0+4", "304+", "++13049824165"] {
            let mut content = SiteContent::default();
            content.contact.phone.dial = bad.into();
            let err = content.validate().unwrap_err();
            assert!(err.to_string().contains(bad), "{bad}: {err}");
        }

        let mut content = SiteContent::default();
        content.contact.phone.dial = "+13049824165".into();
        content.validate().expect("international dial string");
    }

    #[test]
    fn hidden_placeholder_survives_toml_dump() {
        let mut content = SiteContent::default();
        content.portfolio.show_placeholder = false;

        let dumped = content.to_toml_string().expect("serialize");
        assert!(dumped.contains("show_placeholder = false"), "{dumped}");

        let reloaded = SiteContent::from_toml_str(&dumped).expect("reparse");
        assert!(!reloaded.portfolio.show_placeholder);
        assert_eq!(reloaded, content);
    }

    #[test]
    fn placeholder_can_be_hidden_from_json() {
        let content =
            SiteContent::from_json_str(r#"{"portfolio": {"show_placeholder": false}}"#)
                .expect("parse json");
        assert!(!content.portfolio.show_placeholder);
        assert_eq!(content.portfolio.ventures.len(), 1);
    }

    #[test]
    fn toml_dump_parses_back_to_the_same_content() {
        let content = SiteContent::default();
        let dumped = content.to_toml_string().expect("serialize");
        assert!(dumped.contains("signaturesealnotaries.com"));
        assert_eq!(SiteContent::from_toml_str(&dumped).expect("reparse"), content);
    }
}
