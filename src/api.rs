use crate::adapter::{ReadAdapter, WriteAdapter};
use crate::error::JsonApiError;
use crate::resource::Resource;
use log::{debug, trace};

/// Builds a [`Resource`] from a domain value through its read capabilities.
///
/// With `full == false` only `id` and `type` are read, which yields a
/// resource identifier. With `full == true` the optional capabilities are
/// looked up in order (attributes, relationships, links, meta); unsupported ones
/// leave their member absent.
///
/// # Errors
///
/// Returns [`JsonApiError::MissingIdentity`] if `adapter` does not expose
/// [`IdentityRead`](crate::adapter::IdentityRead). The first error returned by
/// a capability aborts the conversion and is handed back as
/// [`JsonApiError::Adapter`]; later capabilities are not called.
pub fn to_resource<A>(adapter: &A, full: bool) -> Result<Resource, JsonApiError>
where
    A: ReadAdapter + ?Sized,
{
    let identity = adapter.as_identity().ok_or(JsonApiError::MissingIdentity)?;

    let id = identity.resource_id().map_err(abort("resource_id"))?;
    let kind = identity.resource_type().map_err(abort("resource_type"))?;
    let mut resource = Resource::identifier(id, kind);

    if !full {
        return Ok(resource);
    }

    match adapter.as_attributes() {
        Some(v) => resource.attributes = Some(v.attributes().map_err(abort("attributes"))?),
        None => skipped(&resource, "attributes"),
    }
    match adapter.as_relationships() {
        Some(v) => resource.relationships = v.relationships().map_err(abort("relationships"))?,
        None => skipped(&resource, "relationships"),
    }
    match adapter.as_links() {
        Some(v) => resource.links = v.links().map_err(abort("links"))?,
        None => skipped(&resource, "links"),
    }
    match adapter.as_meta() {
        Some(v) => resource.meta = Some(v.meta().map_err(abort("meta"))?),
        None => skipped(&resource, "meta"),
    }

    Ok(resource)
}

/// Applies a [`Resource`] onto a domain value through its write capabilities.
///
/// `set_resource_id` is skipped when `resource.id` is empty, so a resource
/// posted for creation leaves the value's identity as it was. The type is
/// always applied. With `full == true` the attributes and relationships
/// capabilities are looked up as well. Links and meta are never written back.
///
/// Related resources inside `resource.relationships` stay encoded; decode
/// and apply each one with a further call.
///
/// # Errors
///
/// Returns [`JsonApiError::MissingIdentity`] if `adapter` does not expose
/// [`IdentityWrite`](crate::adapter::IdentityWrite), otherwise the first
/// error raised by a capability, as [`JsonApiError::Adapter`].
pub fn from_resource<A>(adapter: &mut A, resource: &Resource, full: bool) -> Result<(), JsonApiError>
where
    A: WriteAdapter + ?Sized,
{
    let identity = adapter
        .as_identity_mut()
        .ok_or(JsonApiError::MissingIdentity)?;

    if resource.id.is_empty() {
        trace!("resource of type {:?} has no id, keeping current identity", resource.kind);
    } else {
        identity
            .set_resource_id(&resource.id)
            .map_err(abort("set_resource_id"))?;
    }
    identity
        .set_resource_type(&resource.kind)
        .map_err(abort("set_resource_type"))?;

    if !full {
        return Ok(());
    }

    if let Some(v) = adapter.as_attributes_mut() {
        v.set_attributes(resource.attributes.as_ref())
            .map_err(abort("set_attributes"))?;
    }
    if let Some(v) = adapter.as_relationships_mut() {
        v.set_relationships(&resource.relationships)
            .map_err(abort("set_relationships"))?;
    }

    Ok(())
}

fn abort(capability: &'static str) -> impl Fn(crate::error::AdapterError) -> JsonApiError {
    move |err| {
        debug!("{capability} failed, aborting conversion: {err}");
        JsonApiError::Adapter(err)
    }
}

fn skipped(resource: &Resource, capability: &str) {
    trace!(
        "{:?}/{:?} does not provide {capability}, skipping",
        resource.kind,
        resource.id
    );
}
