/**
 * Architecture Validation
 *
 * Pure checks that an architecture document is fit to be saved. No I/O and
 * no state: each function looks at one part of the document and returns the
 * first rule it finds broken.
 *
 * # Rules
 *
 * - Info: name and description are non-empty; a supplied id is a safe path
 *   segment (it names the save directory)
 * - Fog: `near >= 0`, `far >= 10` (a fixed floor, independent of `near`)
 * - Text: `scale >= 0`
 * - Component: name is non-empty; its object, if any, is a valid object
 * - Object: color is `#RRGGBB`
 * - Group: name non-empty, color valid, member names non-empty, bounding box
 *   color valid and `opacity` in `[0, 1]`
 * - Connection: source and target are non-empty
 *
 * Component types, geometries and vector lengths are closed types in the
 * document model, so a document that decoded already satisfies them.
 *
 * Member and connection names are not checked against the component list.
 *
 * # Ordering
 *
 * Checks run info, scene, components, groups, connections, in document order
 * within each list. Validation stops at the first failure; the returned error
 * is the only one reported.
 */
use crate::shared::architecture::{
    parse_hex_color, Architecture, BoundingBox, Component, Connection, Fog, Group, Info,
    Object3D, Scene, Text,
};
use crate::shared::error::SharedError;

/// Minimum allowed distance at which the fog is fully opaque
pub const MIN_FOG_FAR: f64 = 10.0;

/// Longest architecture ID accepted
pub const MAX_ID_LENGTH: usize = 128;

/// Validate a complete architecture document.
///
/// # Errors
///
/// Returns the first `SharedError::ValidationError` encountered.
///
/// # Example
///
/// ```rust
/// use ennoea::shared::validation::validate;
///
/// let arch = serde_json::from_str(r##"{
///     "info": {"name": "A", "description": "d"},
///     "scene": {
///         "camera": {"position": [0, 0, 0]},
///         "fog": {"near": 0, "far": 10},
///         "text": {"scale": 1, "rotate": false}
///     },
///     "components": [],
///     "connections": []
/// }"##).unwrap();
///
/// assert!(validate(&arch).is_ok());
/// ```
pub fn validate(arch: &Architecture) -> Result<(), SharedError> {
    validate_info(&arch.info)?;
    validate_scene(&arch.scene)?;

    for component in &arch.components {
        validate_component(component)?;
    }

    for group in &arch.groups {
        validate_group(group)?;
    }

    for connection in &arch.connections {
        validate_connection(connection)?;
    }

    Ok(())
}

pub fn validate_info(info: &Info) -> Result<(), SharedError> {
    // An empty id is fine: one is assigned on first save
    if !info.id.is_empty() && !is_valid_id(&info.id) {
        return Err(SharedError::validation(
            "info",
            format!("invalid id: {}", info.id),
        ));
    }

    if info.name.is_empty() {
        return Err(SharedError::validation("info", "name is empty"));
    }

    if info.description.is_empty() {
        return Err(SharedError::validation("info", "description is empty"));
    }

    Ok(())
}

pub fn validate_scene(scene: &Scene) -> Result<(), SharedError> {
    validate_fog(&scene.fog).map_err(|e| e.within("scene"))?;
    validate_text(&scene.text).map_err(|e| e.within("scene"))?;
    Ok(())
}

pub fn validate_fog(fog: &Fog) -> Result<(), SharedError> {
    if !(fog.near >= 0.0) {
        return Err(SharedError::validation("fog", "near is negative"));
    }

    if !(fog.far >= MIN_FOG_FAR) {
        return Err(SharedError::validation(
            "fog",
            format!("far is less than {}", MIN_FOG_FAR),
        ));
    }

    Ok(())
}

pub fn validate_text(text: &Text) -> Result<(), SharedError> {
    if !(text.scale >= 0.0) {
        return Err(SharedError::validation("text", "scale is negative"));
    }
    Ok(())
}

pub fn validate_component(component: &Component) -> Result<(), SharedError> {
    if component.name.is_empty() {
        return Err(SharedError::validation(
            "component",
            format!("{} name is empty", component.kind.as_str()),
        ));
    }

    if let Some(object) = &component.object {
        validate_object(object).map_err(|e| e.within("component"))?;
    }

    Ok(())
}

pub fn validate_object(object: &Object3D) -> Result<(), SharedError> {
    parse_hex_color(&object.color).map_err(|e| e.within("object"))?;
    Ok(())
}

pub fn validate_group(group: &Group) -> Result<(), SharedError> {
    if group.name.is_empty() {
        return Err(SharedError::validation("group", "name is empty"));
    }

    parse_hex_color(&group.color).map_err(|e| e.within("group"))?;

    if group.components.iter().any(|name| name.is_empty()) {
        return Err(SharedError::validation("group", "component name is empty"));
    }

    validate_bounding_box(&group.bounding_box).map_err(|e| e.within("group"))?;

    Ok(())
}

pub fn validate_bounding_box(bounding_box: &BoundingBox) -> Result<(), SharedError> {
    parse_hex_color(&bounding_box.color).map_err(|e| e.within("bounding box"))?;

    if !(0.0..=1.0).contains(&bounding_box.opacity) {
        return Err(SharedError::validation(
            "bounding box",
            "opacity is not between 0 and 1",
        ));
    }

    Ok(())
}

pub fn validate_connection(connection: &Connection) -> Result<(), SharedError> {
    if connection.source.is_empty() {
        return Err(SharedError::validation("connection", "source is empty"));
    }

    if connection.target.is_empty() {
        return Err(SharedError::validation("connection", "target is empty"));
    }

    Ok(())
}

/// Returns `true` if `id` can name a save directory: 1 to 128 ASCII
/// letters, digits, `-` or `_`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LENGTH
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
