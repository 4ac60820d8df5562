// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine behaviour switches.

use lectern_score::{ShareTargets, SummaryOptions};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the 1-based current slide number.
pub const PROGRESS_NUM: &str = ":num";
/// Placeholder replaced by the slide count.
pub const PROGRESS_TOTAL: &str = ":total";

/// Social sharing switches on the summary slide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareConfig {
    /// Offer Facebook sharing.
    pub facebook: bool,
    /// Offer Twitter sharing.
    pub twitter: bool,
    /// Offer Google sharing.
    pub google: bool,
}

impl ShareConfig {
    /// The enabled targets as flags.
    #[must_use]
    pub fn targets(&self) -> ShareTargets {
        let mut targets = ShareTargets::empty();
        targets.set(ShareTargets::FACEBOOK, self.facebook);
        targets.set(ShareTargets::TWITTER, self.twitter);
        targets.set(ShareTargets::GOOGLE, self.google);
        targets
    }
}

/// Engine configuration.
///
/// Deserializes from the camelCase JSON the authoring tool emits; absent
/// fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Suppress screen reader announcements.
    pub disable_aria: bool,
    /// Progress template using [`PROGRESS_NUM`] and [`PROGRESS_TOTAL`].
    pub progress_text: String,
    /// Pin the keyword list open.
    pub keyword_list_always_show: bool,
    /// Close the keyword list after a keyword is chosen.
    pub keyword_list_auto_hide: bool,
    /// Do not append a summary slide.
    pub hide_summary_slide: bool,
    /// Results are reported to the host.
    pub enable_reporting: bool,
    /// Ask for confirmation before entering the summary slide.
    pub confirm_submission: bool,
    /// Authoring mode.
    pub is_editor: bool,
    /// Offer "retry" on the summary slide.
    pub enable_retry: bool,
    /// Offer "show solutions" on the summary slide.
    pub enable_solutions_button: bool,
    /// Offer print/export on the summary slide.
    pub enable_print_button: bool,
    /// Social sharing.
    pub share: ShareConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disable_aria: false,
            progress_text: String::from("Slide :num of :total"),
            keyword_list_always_show: false,
            keyword_list_auto_hide: false,
            hide_summary_slide: false,
            enable_reporting: false,
            confirm_submission: true,
            is_editor: false,
            enable_retry: true,
            enable_solutions_button: true,
            enable_print_button: false,
            share: ShareConfig::default(),
        }
    }
}

impl Config {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether entering the summary slide may need confirmation.
    #[must_use]
    pub fn confirms_submission(&self) -> bool {
        self.enable_reporting && self.confirm_submission && !self.is_editor
    }

    /// Summary affordance switches.
    #[must_use]
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            enable_solutions_button: self.enable_solutions_button,
            enable_retry: self.enable_retry,
            enable_print_button: self.enable_print_button,
            share: self.share.targets(),
        }
    }

    /// Renders the progress template for a 0-based `index` of `total` slides.
    #[must_use]
    pub fn render_progress(&self, index: usize, total: usize) -> String {
        self.progress_text
            .replace(PROGRESS_NUM, &(index + 1).to_string())
            .replace(PROGRESS_TOTAL, &total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_take_defaults() {
        let config = Config::from_json(r#"{ "enableReporting": true, "share": { "twitter": true } }"#)
            .unwrap();
        assert!(config.enable_reporting);
        assert!(config.confirm_submission);
        assert!(config.confirms_submission());
        assert_eq!(config.share.targets(), ShareTargets::TWITTER);
        assert_eq!(config.progress_text, Config::default().progress_text);
    }

    #[test]
    fn editor_never_confirms() {
        let config = Config {
            enable_reporting: true,
            is_editor: true,
            ..Config::default()
        };
        assert!(!config.confirms_submission());
    }

    #[test]
    fn progress_template() {
        let config = Config {
            progress_text: String::from(":num / :total"),
            ..Config::default()
        };
        assert_eq!(config.render_progress(0, 5), "1 / 5");
        assert_eq!(config.render_progress(4, 5), "5 / 5");
    }
}
