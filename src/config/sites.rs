//! Per-site sender details.
//!
//! An application that mails on behalf of several sites keeps one
//! [`SiteInformation`] per site. Fields a site leaves empty are taken
//! from the `default` site.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Sender details of one site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteInformation {
    /// Icon shown in the mail body
    pub icon_file: Option<String>,
    /// Site display name
    pub name: Option<String>,
    /// Site home page
    pub site_url: Option<String>,
    /// Reply-To address
    pub reply_email: Option<String>,
    /// Template used for this site's mails
    pub email_template: Option<String>,
}

impl SiteInformation {
    /// Fills every empty field from `fallback`.
    #[must_use]
    pub fn or_fallback(self, fallback: &Self) -> Self {
        fn pick(own: Option<String>, fallback: Option<&String>) -> Option<String> {
            own.filter(|v| !v.is_empty()).or_else(|| fallback.cloned())
        }

        Self {
            icon_file: pick(self.icon_file, fallback.icon_file.as_ref()),
            name: pick(self.name, fallback.name.as_ref()),
            site_url: pick(self.site_url, fallback.site_url.as_ref()),
            reply_email: pick(self.reply_email, fallback.reply_email.as_ref()),
            email_template: pick(self.email_template, fallback.email_template.as_ref()),
        }
    }
}

/// All configured sites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteDirectory {
    order_site_field: Option<String>,
    sites: HashMap<String, SiteInformation>,
}

impl SiteDirectory {
    /// Creates a directory; site names are matched case-insensitively.
    #[must_use]
    pub fn new(
        order_site_field: Option<String>,
        sites: HashMap<String, SiteInformation>,
    ) -> Self {
        let sites = sites
            .into_iter()
            .map(|(name, info)| (name.to_lowercase(), info))
            .collect();

        Self {
            order_site_field,
            sites,
        }
    }

    /// Name of the order field that holds the site id, if configured.
    ///
    /// Without it every order uses the `default` site.
    #[must_use]
    pub fn order_site_field(&self) -> Option<&str> {
        self.order_site_field.as_deref()
    }

    /// Number of configured sites, `default` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true if no site is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Returns the sender details of `site`, empty fields filled from
    /// the `default` site.
    ///
    /// `None`, or a site that is not configured, yields the default
    /// site's details.
    #[must_use]
    pub fn sender_details(&self, site: Option<&str>) -> SiteInformation {
        let fallback = self.sites.get(defaults::SITE).cloned().unwrap_or_default();

        site.map(str::to_lowercase)
            .and_then(|name| self.sites.get(&name).cloned())
            .map_or_else(|| fallback.clone(), |info| info.or_fallback(&fallback))
    }
}
