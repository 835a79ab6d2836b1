//! Anchor checks over a rendered document.
//!
//! Every in-page link must land on exactly one element. The check runs on
//! the final HTML rather than on the content model, so it also catches ids
//! introduced by hand-edited markup.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SiteError};
use crate::types::Anchor;

static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bid="([^"]*)""#).expect("valid id regex"));

static FRAGMENT_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"\bhref="#([^"]*)""##).expect("valid href regex"));

/// Occurrence counts for one anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorUsage {
    /// Elements carrying `id="<anchor>"`
    pub targets: usize,
    /// Links carrying `href="#<anchor>"`
    pub links: usize,
}

/// Result of [`audit_anchors`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorReport {
    pub anchors: BTreeMap<&'static str, AnchorUsage>,
    /// Fragment links that point at none of the known anchors
    pub unknown_links: Vec<String>,
}

impl AnchorReport {
    /// Fail on the first anchor that does not resolve to exactly one element.
    ///
    /// Every [`Anchor`] is checked, including anchors no link points at, so a
    /// page that drops a section fails even when its nav link was removed too.
    pub fn ensure_resolved(&self) -> Result<()> {
        for (&id, usage) in &self.anchors {
            if usage.targets != 1 {
                return Err(SiteError::UnresolvedAnchor {
                    id,
                    count: usage.targets,
                });
            }
        }
        Ok(())
    }

    pub fn total_links(&self) -> usize {
        self.anchors.values().map(|u| u.links).sum()
    }
}

/// Count section ids and fragment links for every [`Anchor`].
pub fn audit_anchors(html: &str) -> AnchorReport {
    let mut anchors: BTreeMap<&'static str, AnchorUsage> = Anchor::ALL
        .iter()
        .map(|anchor| (anchor.id(), AnchorUsage::default()))
        .collect();

    for cap in ID_ATTR.captures_iter(html) {
        if let Some(usage) = anchors.get_mut(&cap[1]) {
            usage.targets += 1;
        }
    }

    let mut unknown_links = Vec::new();
    for cap in FRAGMENT_HREF.captures_iter(html) {
        match anchors.get_mut(&cap[1]) {
            Some(usage) => usage.links += 1,
            None => unknown_links.push(cap[1].to_string()),
        }
    }

    for link in &unknown_links {
        tracing::warn!(fragment = %link, "fragment link without a known target");
    }

    AnchorReport {
        anchors,
        unknown_links,
    }
}
