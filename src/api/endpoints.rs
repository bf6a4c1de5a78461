//! Endpoint helpers.
//!
//! Each helper marshals its arguments into [`Params`] and performs a
//! single signed call.

use crate::params::Params;
use crate::transport::HttpClient;

use super::{ApiError, ApiResponse, SailthruClient};

/// A mass-mail blast to schedule.
///
/// Fields in `options` are merged over the base fields, so they can
/// override any of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleBlast {
    /// Internal name of the blast
    pub name: String,
    /// Mailing list to send to
    pub list: String,
    /// When to send, in any format the API accepts (e.g. `2026-11-01 09:00 UTC`)
    pub schedule_time: String,
    /// Sender display name
    pub from_name: String,
    /// Sender address
    pub from_email: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub content_html: String,
    /// Plain-text body
    pub content_text: String,
    /// Extra blast fields
    pub options: Params,
}

impl ScheduleBlast {
    fn into_params(self) -> Params {
        let mut params = Params::new()
            .with("name", self.name)
            .with("list", self.list)
            .with("schedule_time", self.schedule_time)
            .with("from_name", self.from_name)
            .with("from_email", self.from_email)
            .with("subject", self.subject)
            .with("content_html", self.content_html)
            .with("content_text", self.content_text);
        params.extend(self.options);
        params
    }
}

impl<H: HttpClient> SailthruClient<H> {
    /// Sends a template to one or more addresses.
    ///
    /// Multiple addresses are joined with commas. With `schedule_time`
    /// the send is scheduled instead of delivered immediately.
    ///
    /// Recognized `options` include `replyto` (override Reply-To) and
    /// `test` (mark as a test send).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn send<E: AsRef<str>>(
        &self,
        template: &str,
        emails: &[E],
        vars: Params,
        options: Params,
        schedule_time: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let emails = emails
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");

        let mut params = Params::new()
            .with("template", template)
            .with("email", emails)
            .with("vars", vars)
            .with("options", options);

        if let Some(time) = schedule_time {
            params.insert("schedule_time", time);
        }

        self.api_post("send", params).await
    }

    /// Gets the status of a send.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_send(&self, send_id: &str) -> Result<ApiResponse, ApiError> {
        self.api_get("send", Params::new().with("send_id", send_id))
            .await
    }

    /// Cancels a send scheduled for a future time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cancel_send(&self, send_id: &str) -> Result<ApiResponse, ApiError> {
        self.api_delete("send", Params::new().with("send_id", send_id))
            .await
    }

    /// Returns replacement vars and list subscriptions of an address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_email(&self, email: &str) -> Result<ApiResponse, ApiError> {
        self.api_get("email", Params::new().with("email", email))
            .await
    }

    /// Sets replacement vars, list subscriptions and template opt-outs of
    /// an address.
    ///
    /// `lists` maps a list name to `1` (subscribe) or `0` (unsubscribe).
    /// Empty mappings are left out of the request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn set_email(
        &self,
        email: &str,
        vars: Params,
        lists: Params,
        templates: Params,
    ) -> Result<ApiResponse, ApiError> {
        let mut params = Params::new().with("email", email);

        for (key, value) in [("vars", vars), ("lists", lists), ("templates", templates)] {
            if !value.is_empty() {
                params.insert(key, value);
            }
        }

        self.api_post("email", params).await
    }

    /// Gets a previously scheduled blast.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_blast(&self, blast_id: &str) -> Result<ApiResponse, ApiError> {
        self.api_get("blast", Params::new().with("blast_id", blast_id))
            .await
    }

    /// Schedules a mass-mail blast.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn schedule_blast(&self, blast: ScheduleBlast) -> Result<ApiResponse, ApiError> {
        self.api_post("blast", blast.into_params()).await
    }

    /// Fetches the address book of a webmail account.
    ///
    /// With `include_names` the contacts' names are returned along with
    /// their addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn import_contacts(
        &self,
        email: &str,
        password: &str,
        include_names: bool,
    ) -> Result<ApiResponse, ApiError> {
        let mut params = Params::new()
            .with("email", email)
            .with("password", password);

        if include_names {
            params.insert("names", 1);
        }

        self.api_post("contacts", params).await
    }

    /// Gets a template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_template(&self, template: &str) -> Result<ApiResponse, ApiError> {
        self.api_get("template", Params::new().with("template", template))
            .await
    }

    /// Saves a template. `fields` may not rename it: `template` is always
    /// set to `template`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn save_template(
        &self,
        template: &str,
        fields: Params,
    ) -> Result<ApiResponse, ApiError> {
        let params = fields.with("template", template);
        self.api_post("template", params).await
    }

    /// Looks up the Horizon id of an address.
    ///
    /// A numeric `hid` is returned as its decimal text. Returns `None`
    /// when the response carries no `hid` or a null one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn horizon_hid(&self, email: &str) -> Result<Option<String>, ApiError> {
        let params = Params::new().with("email", email).with("hid_only", 1);
        let response = self.api_get("horizon", params).await?;

        Ok(match response.get("hid") {
            Some(serde_json::Value::String(hid)) => Some(hid.clone()),
            Some(serde_json::Value::Number(hid)) => Some(hid.to_string()),
            _ => None,
        })
    }
}
