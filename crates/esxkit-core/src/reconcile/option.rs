use tracing::{debug, info};

use crate::coerce::{coerce, normalize_option_key};
use crate::error::CoreError;
use crate::session::HostHandle;

/// Desired value of one advanced option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Dotted or slash-delimited key.
    pub key: String,
    /// Raw value; coerced to the option's current type.
    pub value: String,
}

/// Assign an advanced option if its current value differs.
pub async fn reconcile_option(host: &HostHandle, spec: &OptionSpec) -> Result<bool, CoreError> {
    let key = normalize_option_key(&spec.key);
    let client = host.client();

    let options = match client.query_options(host.id(), &key).await {
        Err(esxkit_api::Error::Fault { ref fault, .. }) if fault == "InvalidName" => {
            return Err(CoreError::OptionNotFound { key });
        }
        other => other?,
    };
    let current = options
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::OptionNotFound { key: key.clone() })?;

    let coercion = coerce(&current, &spec.value)?;
    if !coercion.changed {
        debug!(%key, "advanced option already set");
        return Ok(false);
    }

    info!(%key, value = %spec.value, "updating advanced option");
    client
        .update_options(host.id(), std::slice::from_ref(&coercion.value))
        .await?;
    Ok(true)
}
