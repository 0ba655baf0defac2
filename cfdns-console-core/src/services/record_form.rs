//! 记录表单校验

use cfdns_console_provider::{DnsRecord, RecordForm, is_valid_ttl};

use crate::error::{CoreError, CoreResult};

/// Check a create/update form before it is sent.
///
/// `editing` is the record being edited, if any: a record the provider already
/// marked proxiable may keep `proxied` regardless of its type.
pub fn validate_record_form(form: &RecordForm, editing: Option<&DnsRecord>) -> CoreResult<()> {
    if !form.record_type.is_selectable() {
        return Err(invalid("Invalid DNS record type"));
    }
    if form.name.trim().is_empty() {
        return Err(invalid("Name is required"));
    }
    if form.content.trim().is_empty() {
        return Err(invalid("Content is required"));
    }
    if !is_valid_ttl(form.ttl) {
        return Err(invalid("TTL must be 1 (automatic) or between 60 and 86400"));
    }
    if form.proxied == Some(true)
        && !form.record_type.is_proxiable()
        && !editing.is_some_and(|r| r.proxiable)
    {
        return Err(invalid(format!(
            "{} records cannot be proxied",
            form.record_type
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::Validation(message.into())
}
