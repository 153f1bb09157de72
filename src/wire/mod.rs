/*!
 * Wire Encoding
 * Request-field parsing and JSON projection for the two ACL endpoints
 *
 * The outer HTTP layer maps a mutation request onto `modify_ace` and a read
 * request onto `read_acl`. Everything else on the wire (authentication,
 * routing, status mapping) stays outside this crate.
 */

pub mod json;
pub mod params;

pub use json::{AceJson, AclJson};
pub use params::{ModifyAceParams, PRIVILEGE_PREFIX};

use crate::ace::{Ace, AceReader, AceWriter};
use crate::core::errors::EngineResult;
use crate::monitoring::{span_mutation, span_operation};

/// Apply one mutation request end to end: parse the fields, then apply the
/// batch to the addressed entry.
pub fn modify_ace<'a, W, I>(
    store: &W,
    resource: &str,
    principal: &str,
    fields: I,
) -> EngineResult<Ace>
where
    W: AceWriter + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let params = ModifyAceParams::parse(principal, fields)?;

    let span = span_mutation(resource, principal, params.batch.len());
    match store.apply(resource, &params.principal, &params.batch) {
        Ok(ace) => {
            span.record_result(true);
            span.record_sets(ace.granted.len(), ace.denied.len());
            Ok(ace)
        }
        Err(err) => {
            span.record_error(&err.to_string());
            Err(err.into())
        }
    }
}

/// Answer a read request with the resource's current ACL
pub fn read_acl<R: AceReader + ?Sized>(store: &R, resource: &str) -> AclJson {
    let span = span_operation("read_acl");
    span.record("resource", resource);

    let acl = AclJson::from_reader(store, resource);
    span.record_items_processed(acl.principals.len());
    span.record_result(true);
    acl
}
