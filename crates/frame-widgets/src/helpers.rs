//! Small shared resolution helpers for widget constructors.

use crate::config::WidgetConfig;
use crate::state::EntityState;

/// Icon name from entity metadata, with the `mdi:` prefix convention
/// stripped.
pub(crate) fn entity_icon(entity: Option<&EntityState>) -> Option<String> {
    let icon = entity?.icon()?;
    Some(icon.strip_prefix("mdi:").unwrap_or(icon).to_string())
}

/// Label from the config override, else the entity's friendly name, else
/// the default.
pub(crate) fn resolve_label(
    config: &WidgetConfig,
    entity: Option<&EntityState>,
    default: &str,
) -> String {
    if let Some(label) = &config.label {
        return label.clone();
    }
    if let Some(entity) = entity {
        return entity.friendly_name().to_string();
    }
    default.to_string()
}

/// Numeric value from the entity state (or an attribute of it); missing
/// or non-numeric values degrade to 0.0.
pub(crate) fn extract_numeric(entity: Option<&EntityState>, attribute: Option<&str>) -> f64 {
    let Some(entity) = entity else {
        return 0.0;
    };
    match attribute {
        Some(attr) => entity.get_f64(attr).unwrap_or(0.0),
        None => entity.numeric_state().unwrap_or(0.0),
    }
}
