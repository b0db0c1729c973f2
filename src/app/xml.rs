//! Thin helpers over `sxd-document` and `sxd-xpath`. Every query returns an
//! `Option` or `Result` and leaves the fallback to the caller.

use crate::app::error::Error;
use sxd_document::dom::{ChildOfRoot, Document, Element};
use sxd_document::{parser, Package};
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};

pub fn parse(report: &str) -> Result<Package, Error> {
    parser::parse(report).map_err(|err| Error::Parse(format!("{:?}", err)))
}

pub fn root_element<'d>(document: &Document<'d>) -> Option<Element<'d>> {
    document
        .root()
        .children()
        .into_iter()
        .find_map(|child| match child {
            ChildOfRoot::Element(element) => Some(element),
            _ => None,
        })
}

/// Elements matched by `path`, evaluated relative to `node`, in document order.
pub fn select<'d>(node: Element<'d>, path: &str) -> Result<Vec<Element<'d>>, Error> {
    let query_error = |message: String| Error::Query {
        path: path.to_owned(),
        message,
    };
    let xpath = Factory::new()
        .build(path)
        .map_err(|err| query_error(format!("{:?}", err)))?
        .ok_or_else(|| query_error("empty expression".to_owned()))?;
    let context = Context::new();
    let value = xpath
        .evaluate(&context, node)
        .map_err(|err| query_error(format!("{:?}", err)))?;
    match value {
        Value::Nodeset(nodes) => Ok(nodes
            .document_order()
            .into_iter()
            .filter_map(|node| node.element())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Text content of the first element matched by `path`.
pub fn first_text(node: Element<'_>, path: &str) -> Option<String> {
    select(node, path)
        .ok()?
        .into_iter()
        .next()
        .map(|element| Node::from(element).string_value())
}
