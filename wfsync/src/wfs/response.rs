//! Transaction response and exception report parsing.
//!
//! Handles the WFS 1.0.0 `WFS_TransactionResponse`:
//!
//! ```text
//! <wfs:WFS_TransactionResponse version="1.0.0">
//!   <wfs:InsertResult><ogc:FeatureId fid="fire_hydrants.12"/></wfs:InsertResult>
//!   <wfs:TransactionResult>
//!     <wfs:Status><wfs:SUCCESS/></wfs:Status>
//!   </wfs:TransactionResult>
//! </wfs:WFS_TransactionResponse>
//! ```
//!
//! and OGC exception reports (`ServiceExceptionReport`, `ows:ExceptionReport`)
//! which the server may return for both reads and transactions.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::error::SubmitFailure;
use crate::feature::FeatureId;

/// Acknowledgement of a transaction the server reported as `SUCCESS`.
///
/// A transaction is applied as one unit: anything short of `SUCCESS` is
/// returned as a [`SubmitFailure`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerAck {
    /// Identifiers of inserted features, normalized
    pub inserted_ids: Vec<FeatureId>,
    /// Optional server message
    pub message: Option<String>,
    /// Raw response body
    pub body: String,
}

/// Parses a transaction response body.
///
/// # Errors
///
/// - [`SubmitFailure::ServiceException`] for an exception report
/// - [`SubmitFailure::TransactionFailed`] for a `FAILED` or `PARTIAL` status
/// - [`SubmitFailure::InvalidResponse`] for malformed XML or a missing status
pub fn parse_transaction_response(body: &str) -> Result<ServerAck, SubmitFailure> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut success = false;
    let mut partial = false;
    let mut failed = false;
    let mut exception = false;
    let mut in_insert_result = false;
    let mut capturing = false;
    let mut inserted_ids = Vec::new();
    let mut message = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                match local_name(e).as_str() {
                    "SUCCESS" => success = true,
                    "PARTIAL" => partial = true,
                    "FAILED" => failed = true,
                    "InsertResult" | "InsertResults" => in_insert_result = true,
                    "FeatureId" if in_insert_result => {
                        // GeoServer reports fid="none" when nothing was inserted
                        if let Some(fid) = attribute(e, "fid").filter(|fid| fid != "none") {
                            inserted_ids.push(FeatureId::from(fid).normalized());
                        }
                    }
                    "ServiceExceptionReport" | "ExceptionReport" => exception = true,
                    "Message" | "ServiceException" | "ExceptionText" => capturing = true,
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) => {
                match String::from_utf8_lossy(e.local_name().as_ref()).as_ref() {
                    "InsertResult" | "InsertResults" => in_insert_result = false,
                    "Message" | "ServiceException" | "ExceptionText" => capturing = false,
                    _ => {}
                }
            }
            Ok(Event::Text(ref t)) if capturing => {
                let text = t
                    .unescape()
                    .map_err(|e| SubmitFailure::InvalidResponse(e.to_string()))?;
                append_message(&mut message, &text);
            }
            Ok(Event::CData(ref t)) if capturing => {
                append_message(&mut message, &String::from_utf8_lossy(&**t));
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SubmitFailure::InvalidResponse(format!(
                    "malformed XML at position {}: {}",
                    reader.error_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    let message = (!message.is_empty()).then_some(message);

    if exception {
        return Err(SubmitFailure::ServiceException(
            message.unwrap_or_else(|| "unspecified service exception".to_string()),
        ));
    }
    if failed {
        return Err(SubmitFailure::TransactionFailed(
            message.unwrap_or_else(|| "server reported FAILED status".to_string()),
        ));
    }

    if partial {
        return Err(SubmitFailure::TransactionFailed(
            message.unwrap_or_else(|| "server reported PARTIAL status".to_string()),
        ));
    }
    if !success {
        return Err(SubmitFailure::InvalidResponse(
            "no transaction status in server response".to_string(),
        ));
    }

    Ok(ServerAck {
        inserted_ids,
        message,
        body: body.to_string(),
    })
}

/// Extracts the message of an OGC exception report.
///
/// Returns `None` when `body` is not an exception report.
pub fn parse_exception_report(body: &str) -> Option<String> {
    match parse_transaction_response(body) {
        Err(SubmitFailure::ServiceException(message)) => Some(message),
        _ => None,
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name.as_bytes())
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

fn append_message(message: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !message.is_empty() {
        message.push(' ');
    }
    message.push_str(text);
}
