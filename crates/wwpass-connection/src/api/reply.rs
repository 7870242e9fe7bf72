use base64::{Engine, engine::general_purpose::STANDARD};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{ProtocolError, require};

/// A successful SPFE reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Decoded payload of the `data` element.
    pub data: Vec<u8>,
    /// Lifetime in seconds of the returned ticket, when the command issues one.
    pub ttl: Option<u32>,
    /// The ticket the returned one was derived from, when the SPFE reports it.
    pub original_ticket: Option<String>,
}

impl Reply {
    /// The payload as UTF-8 text.
    pub fn into_string(self) -> Result<String, ProtocolError> {
        String::from_utf8(self.data)
            .map_err(|e| ProtocolError::Malformed(format!("data is not valid UTF-8: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Result,
    Data,
    Ttl,
    OriginalTicket,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"result" => Some(Field::Result),
            b"data" => Some(Field::Data),
            b"ttl" => Some(Field::Ttl),
            b"originalTicket" => Some(Field::OriginalTicket),
            _ => None,
        }
    }
}

/// Text of an element together with its `encoding` attribute.
#[derive(Debug, Default)]
struct EncodedValue {
    base64: bool,
    text: String,
}

impl EncodedValue {
    fn from_start(start: &BytesStart) -> Result<Self, ProtocolError> {
        let encoding = start
            .try_get_attribute("encoding")
            .map_err(malformed)?
            .map(|attr| attr.unescape_value().map(|v| v.into_owned()))
            .transpose()
            .map_err(malformed)?;

        Ok(Self {
            base64: encoding.is_some_and(|e| e.eq_ignore_ascii_case("base64")),
            text: String::new(),
        })
    }

    fn decode(self) -> Result<Vec<u8>, ProtocolError> {
        if self.base64 {
            let compact: String = self
                .text
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            STANDARD.decode(compact).map_err(malformed)
        } else {
            Ok(self.text.into_bytes())
        }
    }

    fn decode_string(self) -> Result<String, ProtocolError> {
        String::from_utf8(self.decode()?).map_err(malformed)
    }
}

#[derive(Debug, Default)]
struct ReplyFields {
    result: Option<EncodedValue>,
    data: Option<EncodedValue>,
    ttl: Option<EncodedValue>,
    original_ticket: Option<EncodedValue>,
}

impl ReplyFields {
    fn slot(&mut self, field: Field) -> &mut Option<EncodedValue> {
        match field {
            Field::Result => &mut self.result,
            Field::Data => &mut self.data,
            Field::Ttl => &mut self.ttl,
            Field::OriginalTicket => &mut self.original_ticket,
        }
    }
}

fn malformed(e: impl std::fmt::Display) -> ProtocolError {
    ProtocolError::Malformed(e.to_string())
}

/// Parse the XML reply of an SPFE command.
///
/// Only the first occurrence of each known element is used, wherever it appears in the document.
/// A reply with `result` other than `true` is turned into [ProtocolError::Spfe] carrying the
/// decoded `data` as message.
pub(crate) fn parse_reply(xml: &str) -> Result<Reply, ProtocolError> {
    let fields = collect_fields(xml)?;

    let result = require!(fields.result).decode_string()?;
    let data = require!(fields.data).decode()?;

    if !result.trim().eq_ignore_ascii_case("true") {
        return Err(ProtocolError::Spfe(
            String::from_utf8_lossy(&data).into_owned(),
        ));
    }

    let ttl = fields
        .ttl
        .map(|ttl| {
            ttl.decode_string()?
                .trim()
                .parse::<u32>()
                .map_err(|_| ProtocolError::InvalidTtl)
        })
        .transpose()?;

    let original_ticket = fields
        .original_ticket
        .map(EncodedValue::decode_string)
        .transpose()?;

    Ok(Reply {
        data,
        ttl,
        original_ticket,
    })
}

fn collect_fields(xml: &str) -> Result<ReplyFields, ProtocolError> {
    let mut reader = Reader::from_str(xml);
    let mut fields = ReplyFields::default();
    // The element being read, and how many nested elements are open inside it.
    let mut current: Option<(Field, EncodedValue, usize)> = None;
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::DocType(_) => {
                return Err(ProtocolError::Malformed(
                    "document type declarations are not allowed".to_owned(),
                ));
            }
            Event::Start(start) => {
                seen_root = true;
                match current.as_mut() {
                    Some((_, _, depth)) => *depth += 1,
                    None => {
                        if let Some(field) = Field::from_name(start.local_name().as_ref()) {
                            if fields.slot(field).is_none() {
                                current = Some((field, EncodedValue::from_start(&start)?, 0));
                            }
                        }
                    }
                }
            }
            Event::Empty(start) => {
                seen_root = true;
                if current.is_none() {
                    if let Some(field) = Field::from_name(start.local_name().as_ref()) {
                        let slot = fields.slot(field);
                        if slot.is_none() {
                            *slot = Some(EncodedValue::from_start(&start)?);
                        }
                    }
                }
            }
            Event::Text(text) => {
                if let Some((_, value, _)) = current.as_mut() {
                    value.text.push_str(&text.unescape().map_err(malformed)?);
                }
            }
            Event::CData(cdata) => {
                if let Some((_, value, _)) = current.as_mut() {
                    value
                        .text
                        .push_str(std::str::from_utf8(&cdata).map_err(malformed)?);
                }
            }
            Event::End(_) => match current.take() {
                Some((field, value, 0)) => *fields.slot(field) = Some(value),
                Some((field, value, depth)) => current = Some((field, value, depth - 1)),
                None => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(ProtocolError::Malformed("empty document".to_owned()));
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply() {
        let reply = parse_reply(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<reply><result>true</result><data encoding="plain">SP Name:ticket</data><ttl encoding="plain">600</ttl></reply>"#,
        )
        .unwrap();

        assert_eq!(reply.data, b"SP Name:ticket");
        assert_eq!(reply.ttl, Some(600));
        assert_eq!(reply.original_ticket, None);
    }

    #[test]
    fn test_base64_reply() {
        let reply = parse_reply(
            "<reply><result>TRUE</result><data encoding=\"BASE64\">0JTQsNC9\n0LjQuNC7</data>\
             <originalTicket encoding=\"plain\">SP:old</originalTicket></reply>",
        )
        .unwrap();

        assert_eq!(reply.clone().into_string().unwrap(), "Даниил");
        assert_eq!(reply.original_ticket.as_deref(), Some("SP:old"));
    }

    #[test]
    fn test_binary_base64_reply() {
        let reply =
            parse_reply(r#"<reply><result>true</result><data encoding="base64">AP8B</data></reply>"#)
                .unwrap();

        assert_eq!(reply.data, vec![0x00, 0xff, 0x01]);
        assert!(reply.into_string().is_err());
    }

    #[test]
    fn test_escaped_text_is_unescaped() {
        let reply = parse_reply(
            r#"<reply><result>true</result><data encoding="plain">a &amp; b &lt;c&gt;</data></reply>"#,
        )
        .unwrap();

        assert_eq!(reply.data, b"a & b <c>");
    }

    #[test]
    fn test_empty_data() {
        let reply =
            parse_reply(r#"<reply><result>true</result><data encoding="plain"/></reply>"#).unwrap();
        assert!(reply.data.is_empty());

        let reply =
            parse_reply(r#"<reply><result>true</result><data encoding="plain"></data></reply>"#)
                .unwrap();
        assert!(reply.data.is_empty());
    }

    #[test]
    fn test_error_reply() {
        let result = parse_reply(
            r#"<reply><result>false</result><data encoding="plain">Invalid ticket</data></reply>"#,
        );

        match result {
            Err(ProtocolError::Spfe(message)) => assert_eq!(message, "Invalid ticket"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_reply_base64() {
        let result = parse_reply(
            r#"<reply><result>false</result><data encoding="base64">Tm8gc3VjaCB0aWNrZXQ=</data></reply>"#,
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "SPFE returned error: No such ticket"
        );
    }

    #[test]
    fn test_invalid_ttl() {
        let result = parse_reply(
            r#"<reply><result>true</result><data encoding="plain">t</data><ttl encoding="plain">ten</ttl></reply>"#,
        );
        assert!(matches!(result, Err(ProtocolError::InvalidTtl)));
    }

    #[test]
    fn test_missing_fields() {
        let result = parse_reply(r#"<reply><data encoding="plain">t</data></reply>"#);
        assert!(matches!(result, Err(ProtocolError::MissingField(_))));

        let result = parse_reply(r#"<reply><result>true</result></reply>"#);
        assert!(matches!(result, Err(ProtocolError::MissingField(_))));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let reply = parse_reply(
            r#"<reply><result>true</result><data encoding="plain">first</data><data encoding="plain">second</data></reply>"#,
        )
        .unwrap();
        assert_eq!(reply.data, b"first");
    }

    #[test]
    fn test_rejects_doctype() {
        let result = parse_reply(
            r#"<?xml version="1.0"?><!DOCTYPE reply [<!ENTITY x SYSTEM "file:///etc/passwd">]><reply><result>true</result><data encoding="plain">&x;</data></reply>"#,
        );
        assert!(matches!(result, Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_reply("<html><body>Bad gateway"),
            Err(ProtocolError::MissingField(_) | ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            parse_reply(""),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            parse_reply(r#"<reply><result>true</result><data encoding="base64">!!!</data></reply>"#),
            Err(ProtocolError::Malformed(_))
        ));
    }
}
