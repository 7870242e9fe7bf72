//! Wire format of the SPFE: form encoded requests and XML replies.
//!
//! Every SPFE command lives at `<base>/<command>.xml`. Parameters are sent in the query string
//! for `GET` and in a form encoded body for `POST`. The reply is always an XML document carrying
//! a `result` flag and the `data` payload.

mod reply;
mod request;

pub use reply::Reply;
pub(crate) use reply::parse_reply;
pub(crate) use request::{SpfeMethod, SpfeRequest};
use tracing::{debug, instrument, warn};

use crate::{ApiError, ProtocolError, WWPassConnection, WWPassError};

impl WWPassConnection {
    #[instrument(skip_all, fields(command = request.command()))]
    pub(crate) async fn send(&self, request: SpfeRequest) -> Result<Reply, WWPassError> {
        let config = &self.configuration;
        let url = request.url(&config.base_path);

        debug!(method = ?request.method(), "Sending SPFE request");

        let builder = match request.method() {
            SpfeMethod::Get => config.client.get(url),
            SpfeMethod::Post => config
                .client
                .post(url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(request.encoded_params()),
        };

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let content = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            warn!(%status, "SPFE answered with an error status");
            return Err(ApiError::Response { status, content }.into());
        }

        parse_reply(&content).map_err(|e| {
            if let ProtocolError::Spfe(message) = &e {
                warn!(%message, "SPFE refused the request");
            }
            e.into()
        })
    }
}
