use serde::Serialize;
use thiserror::Error;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const RELAY_TIMEOUT_MS: i32 = 15_000;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay setting {0} is not configured")]
    MissingConfig(&'static str),
    #[error("could not encode relay request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("relay transport failed: {0}")]
    Transport(String),
    #[error("relay rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("relay did not answer within {0} ms")]
    Timeout(i32),
}

/// Credentials for the email relay, supplied at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        fn required(v: Option<&str>, name: &'static str) -> Result<String, RelayError> {
            match v.map(str::trim) {
                Some(s) if !s.is_empty() => Ok(s.to_string()),
                _ => Err(RelayError::MissingConfig(name)),
            }
        }
        Ok(Self {
            service_id: required(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: required(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: required(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }

    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub message: String,
    pub reply_to: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// JSON body for one relay call.
pub fn encode_request(config: &RelayConfig, params: &TemplateParams) -> Result<String, RelayError> {
    let body = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: params,
    };
    Ok(serde_json::to_string(&body)?)
}
