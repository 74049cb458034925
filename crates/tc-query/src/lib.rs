//! `tc-query` — answers stat and route requests against a catalogue.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`document`] | `InputDocument`, `StatRequest` (deserialized input)         |
//! | [`response`] | `Response`, `ResponseBody`, `RouteItem` (serialized output) |
//! | [`handler`]  | `RequestHandler`                                            |
//! | [`text`]     | line-oriented `Bus …` / `Stop …` stat queries               |
//! | [`error`]    | `QueryError`, `QueryResult<T>`                              |
//!
//! # Request flow
//!
//! ```text
//! InputDocument ─▶ load_base_requests ─▶ Catalogue ─▶ TransportRouter (if routing_settings)
//!                                                 └──▶ RequestHandler ─▶ Vec<Response>
//! ```
//!
//! Load failures abort with a [`QueryError`].  Unknown names and unreachable
//! destinations are per-request `"not found"` responses, never errors.

pub mod document;
pub mod error;
pub mod handler;
pub mod response;
pub mod text;

#[cfg(test)]
mod tests;

use std::io::Read;

use log::debug;

use tc_catalogue::load_base_requests;
use tc_router::TransportRouter;

pub use document::{InputDocument, StatRequest};
pub use error::{QueryError, QueryResult};
pub use handler::RequestHandler;
pub use response::{Response, ResponseBody, RouteItem};
pub use text::process_text;

/// Load the document's catalogue, build a router if routing settings are
/// present, and answer every stat request in order.
pub fn process_document(doc: &InputDocument) -> QueryResult<Vec<Response>> {
    let catalogue = load_base_requests(&doc.base_requests)?;
    let mut handler = RequestHandler::new(&catalogue);
    if let Some(settings) = doc.routing_settings {
        handler = handler.with_router(TransportRouter::new(&catalogue, settings)?);
    }
    debug!("answering {} stat requests", doc.stat_requests.len());
    Ok(handler.handle_all(&doc.stat_requests))
}

/// Like [`process_document`] but decodes the document from JSON first.
pub fn process_json<R: Read>(reader: R) -> QueryResult<Vec<Response>> {
    let doc: InputDocument = serde_json::from_reader(reader)?;
    process_document(&doc)
}
