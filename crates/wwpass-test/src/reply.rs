use base64::{Engine, engine::general_purpose::STANDARD};
use wiremock::{Request, Respond, ResponseTemplate};

/// An XML reply of the fake SPFE.
#[derive(Debug, Clone)]
pub struct SpfeReply {
    result: bool,
    data: Vec<u8>,
    base64: bool,
    ttl: Option<String>,
    original_ticket: Option<String>,
}

impl SpfeReply {
    /// Successful reply carrying `data` as plain text.
    pub fn ok(data: impl AsRef<[u8]>) -> Self {
        Self {
            result: true,
            data: data.as_ref().to_vec(),
            base64: false,
            ttl: None,
            original_ticket: None,
        }
    }

    /// Failed reply with `message` as the reason.
    pub fn error(message: &str) -> Self {
        Self {
            result: false,
            ..Self::ok(message)
        }
    }

    /// Send `data` base64 encoded.
    pub fn base64(mut self) -> Self {
        self.base64 = true;
        self
    }

    #[allow(missing_docs)]
    pub fn ttl(mut self, ttl: impl ToString) -> Self {
        self.ttl = Some(ttl.to_string());
        self
    }

    #[allow(missing_docs)]
    pub fn original_ticket(mut self, ticket: &str) -> Self {
        self.original_ticket = Some(ticket.to_owned());
        self
    }

    /// The XML document as sent on the wire.
    pub fn to_xml(&self) -> String {
        let data = if self.base64 {
            format!(r#"<data encoding="base64">{}</data>"#, STANDARD.encode(&self.data))
        } else {
            format!(
                r#"<data encoding="plain">{}</data>"#,
                escape(&String::from_utf8_lossy(&self.data))
            )
        };

        let mut xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><reply><result>{}</result>{}"#,
            self.result, data
        );
        if let Some(ttl) = &self.ttl {
            xml.push_str(&format!(r#"<ttl encoding="plain">{}</ttl>"#, escape(ttl)));
        }
        if let Some(ticket) = &self.original_ticket {
            xml.push_str(&format!(
                r#"<originalTicket encoding="plain">{}</originalTicket>"#,
                escape(ticket)
            ));
        }
        xml.push_str("</reply>");
        xml
    }
}

impl Respond for SpfeReply {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(self.to_xml(), "application/xml")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
