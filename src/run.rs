//! Command execution.
//!
//! Each subcommand maps to one client call; the result is rendered as
//! text for stdout.

use http::header::InvalidHeaderValue;
use thiserror::Error;

use sailthru_client::config::{Command, PostbackKindArg, ScheduleBlastArgs, ValidatedConfig};
use sailthru_client::horizon::cookie_domain;
use sailthru_client::postback::verify_signature;
use sailthru_client::signature::signature_hash;
use sailthru_client::transport::{HttpClient, ReqwestClient};
use sailthru_client::{ApiError, Params, SailthruClient, ScheduleBlast};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A JSON argument could not be parsed.
    #[error("Invalid JSON for --{flag}: {source}")]
    InvalidJson {
        /// Name of the argument
        flag: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A JSON argument is not an object.
    #[error("--{flag} must be a JSON object")]
    NotAnObject {
        /// Name of the argument
        flag: &'static str,
    },

    /// Neither a cookie domain nor a host was given.
    ///
    /// The CLI parser already requires one of them; this covers a
    /// [`Command`] built without it.
    #[error("Either --domain or --host is required")]
    MissingDomain,

    /// The Horizon cookie cannot be sent as a header.
    #[error("Cannot build Set-Cookie header: {0}")]
    InvalidCookie(#[from] InvalidHeaderValue),

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

/// Runs one command against the configured API.
///
/// # Errors
///
/// Returns an error if an argument is invalid or the API call fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<String, RunError> {
    let client = SailthruClient::new(
        ReqwestClient::new(),
        config.credentials.clone(),
        config.api_uri.clone(),
    );

    dispatch(&client, &config, command).await
}

/// Runs one command with the given client.
async fn dispatch<H: HttpClient>(
    client: &SailthruClient<H>,
    config: &ValidatedConfig,
    command: Command,
) -> Result<String, RunError> {
    let response = match command {
        // Handled before configuration is loaded
        Command::Init { .. } => return Ok(String::new()),
        Command::Sign { params } => {
            let params = json_params("params", Some(params.as_str()))?;
            return Ok(signature_hash(&params, config.credentials.secret()));
        }
        Command::Verify { body, kind } => return verify(client, &body, kind).await,
        Command::SenderDetails { site } => {
            let details = config.sender_details(site.as_deref());
            return serde_json::to_string_pretty(&details).map_err(RunError::Render);
        }
        Command::Horizon {
            email,
            domain,
            host,
            duration,
            secure,
        } => {
            let domain = match (domain, host) {
                (Some(domain), _) => domain,
                (None, Some(host)) => cookie_domain(&host),
                (None, None) => return Err(RunError::MissingDomain),
            };
            let duration = duration.map(std::time::Duration::from_secs);

            return match client
                .horizon_cookie(&email, &domain, duration, secure)
                .await?
            {
                Some(cookie) => {
                    let header = cookie.to_header_value()?;
                    Ok(format!("Set-Cookie: {}", String::from_utf8_lossy(header.as_bytes())))
                }
                None => Ok("No Horizon id for this address".to_string()),
            };
        }
        Command::Send {
            template,
            emails,
            vars,
            options,
            schedule_time,
        } => {
            let vars = json_params("vars", vars.as_deref())?;
            let options = json_params("options", options.as_deref())?;
            client
                .send(&template, &emails, vars, options, schedule_time.as_deref())
                .await?
        }
        Command::GetSend { send_id } => client.get_send(&send_id).await?,
        Command::CancelSend { send_id } => client.cancel_send(&send_id).await?,
        Command::GetEmail { email } => client.get_email(&email).await?,
        Command::SetEmail {
            email,
            vars,
            lists,
            templates,
        } => {
            let vars = json_params("vars", vars.as_deref())?;
            let lists = json_params("lists", lists.as_deref())?;
            let templates = json_params("templates", templates.as_deref())?;
            client.set_email(&email, vars, lists, templates).await?
        }
        Command::GetBlast { blast_id } => client.get_blast(&blast_id).await?,
        Command::ScheduleBlast(args) => client.schedule_blast(blast_from_args(args)?).await?,
        Command::ImportContacts {
            email,
            password,
            names,
        } => client.import_contacts(&email, &password, names).await?,
        Command::GetTemplate { name } => client.get_template(&name).await?,
        Command::SaveTemplate { name, fields } => {
            let fields = json_params("fields", Some(fields.as_str()))?;
            client.save_template(&name, fields).await?
        }
    };

    if let Some(message) = response.error_message() {
        tracing::warn!(code = response.error_code(), "API reported an error: {message}");
    }

    Ok(response.to_string())
}

/// Checks a form-encoded postback body.
async fn verify<H: HttpClient>(
    client: &SailthruClient<H>,
    body: &str,
    kind: PostbackKindArg,
) -> Result<String, RunError> {
    let params = Params::from_form(body);

    let valid = match kind {
        PostbackKindArg::Signature => verify_signature(&params, client.credentials().secret()),
        PostbackKindArg::Optout => client.receive_optout_post(&params),
        PostbackKindArg::Verify => client.receive_verify_post(&params).await?,
    };

    Ok(if valid { "valid" } else { "invalid" }.to_string())
}

fn blast_from_args(args: ScheduleBlastArgs) -> Result<ScheduleBlast, RunError> {
    Ok(ScheduleBlast {
        options: json_params("options", args.options.as_deref())?,
        name: args.name,
        list: args.list,
        schedule_time: args.schedule_time,
        from_name: args.from_name,
        from_email: args.from_email,
        subject: args.subject,
        content_html: args.content_html,
        content_text: args.content_text,
    })
}

/// Parses an optional JSON object argument; absent means empty.
fn json_params(flag: &'static str, text: Option<&str>) -> Result<Params, RunError> {
    let Some(text) = text else {
        return Ok(Params::new());
    };

    match serde_json::from_str(text) {
        Ok(serde_json::Value::Object(map)) => Ok(Params::from(map)),
        Ok(_) => Err(RunError::NotAnObject { flag }),
        Err(source) => Err(RunError::InvalidJson { flag, source }),
    }
}
