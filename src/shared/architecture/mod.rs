/**
 * Architecture Document Model
 *
 * This module defines the architecture document that the viewer edits and the
 * server persists: a 3D scene description made of components, groups of
 * components, and connections between them.
 *
 * The structs mirror the JSON the viewer sends byte-for-byte (camelCase keys),
 * so a document that is decoded and encoded again keeps its shape.
 *
 * # Schema
 *
 * ```json
 * {
 *   "info": { "id": "", "name": "shop", "description": "checkout flow" },
 *   "scene": {
 *     "camera": { "position": [0, 0, 0] },
 *     "fog": { "near": 0, "far": 10 },
 *     "text": { "scale": 1, "rotate": false }
 *   },
 *   "components": [
 *     { "type": "app", "name": "web", "object": { "geometry": "box", "color": "#0287fc" } }
 *   ],
 *   "groups": [],
 *   "connections": [ { "source": "web", "target": "db" } ]
 * }
 * ```
 *
 * Vectors are `[f64; 3]`, so a position with two or four entries is rejected
 * while decoding instead of by a runtime length check.
 */
use serde::{Deserialize, Serialize};

/// Hex color parsing
pub mod color;

pub use color::{parse_hex_color, Rgb};

/// A position, rotation (degrees) or scale along the x, y and z axes
pub type Vec3 = [f64; 3];

/// Root aggregate: one saved architecture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Architecture {
    /// Identity and description of the architecture
    pub info: Info,

    /// Camera, fog and label settings of the 3D world
    pub scene: Scene,

    /// Application and server nodes, in display order
    #[serde(default)]
    pub components: Vec<Component>,

    /// Named clusters of components drawn inside a bounding box
    #[serde(default)]
    pub groups: Vec<Group>,

    /// Directed links between components, referenced by name
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Architecture {
    /// The architecture ID, empty until the document is saved for the first time
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Returns `true` if the document has never been saved
    pub fn is_new(&self) -> bool {
        self.info.id.is_empty()
    }
}

/// Higher level information about an architecture
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Info {
    /// Assigned by the server on first save, immutable afterwards
    #[serde(default)]
    pub id: String,

    /// Shown in the viewer's list of saved architectures
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// The 3D world the architecture is rendered in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub camera: Camera,
    pub fog: Fog,
    /// Settings for the labels drawn above each component
    pub text: Text,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Camera {
    pub position: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Fog {
    pub near: f64,
    pub far: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Text {
    pub scale: f64,
    /// Whether labels turn to face the camera
    pub rotate: bool,
}

/// Discriminant of a [`Component`]
///
/// Apps and servers share every field; only the tag differs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    App,
    Server,
}

impl ComponentKind {
    /// The tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Server => "server",
        }
    }
}

/// A named node in the architecture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    pub name: String,

    /// How the component is drawn. Components without one are not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Object3D>,
}

impl Component {
    pub fn app(name: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::App,
            name: name.into(),
            object: None,
        }
    }

    pub fn server(name: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Server,
            name: name.into(),
            object: None,
        }
    }

    /// Attach a 3D object descriptor
    pub fn with_object(mut self, object: Object3D) -> Self {
        self.object = Some(object);
        self
    }
}

/// A cluster of components, e.g. the servers that make up an application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Group {
    pub name: String,

    /// `#RRGGBB`
    pub color: String,

    /// Names of the member components. Not checked against `components`.
    #[serde(default)]
    pub components: Vec<String>,

    pub bounding_box: BoundingBox,
}

/// A directed link from one component to another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Connection {
    /// Name of the source component
    pub source: String,
    /// Name of the target component
    pub target: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The fixed set of primitive shapes the viewer can draw
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Geometry {
    Box,
    Capsule,
    Circle,
    Cone,
    Cylinder,
    Dodecahedron,
    Icosahedron,
    Octahedron,
    Plane,
    Ring,
    Sphere,
    Tetrahedron,
    Torus,
    TorusKnot,
}

impl Geometry {
    pub const ALL: [Geometry; 14] = [
        Geometry::Box,
        Geometry::Capsule,
        Geometry::Circle,
        Geometry::Cone,
        Geometry::Cylinder,
        Geometry::Dodecahedron,
        Geometry::Icosahedron,
        Geometry::Octahedron,
        Geometry::Plane,
        Geometry::Ring,
        Geometry::Sphere,
        Geometry::Tetrahedron,
        Geometry::Torus,
        Geometry::TorusKnot,
    ];
}

/// A 3D object in the viewer
///
/// Used to draw components. Missing transform fields fall back to the
/// identity transform and objects are visible unless told otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Object3D {
    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub position: Vec3,

    /// Degrees around the x, y and z axes
    #[serde(default)]
    pub rotation: Vec3,

    #[serde(default = "default_scale")]
    pub scale: Vec3,

    pub geometry: Geometry,

    /// `#RRGGBB`
    pub color: String,
}

impl Object3D {
    /// An untransformed, visible object
    pub fn new(geometry: Geometry, color: impl Into<String>) -> Self {
        Self {
            visible: true,
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: default_scale(),
            geometry,
            color: color.into(),
        }
    }
}

/// The box drawn around the members of a [`Group`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BoundingBox {
    #[serde(default)]
    pub position: Vec3,

    #[serde(default)]
    pub rotation: Vec3,

    #[serde(default = "default_scale")]
    pub scale: Vec3,

    pub color: String,

    #[serde(default)]
    pub wireframe: bool,

    /// Between 0 (transparent) and 1 (opaque)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

fn default_scale() -> Vec3 {
    [1.0; 3]
}

fn default_opacity() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_document() {
        let arch: Architecture = serde_json::from_value(json!({
            "info": { "name": "A", "description": "d" },
            "scene": {
                "camera": { "position": [0, 0, 0] },
                "fog": { "near": 0, "far": 10 },
                "text": { "scale": 1, "rotate": false }
            },
            "components": [],
            "connections": []
        }))
        .unwrap();

        assert!(arch.is_new());
        assert_eq!(arch.info.name, "A");
        assert!(arch.groups.is_empty());
        assert_eq!(arch.scene.fog.far, 10.0);
    }

    #[test]
    fn test_component_kind_tag() {
        let component: Component =
            serde_json::from_value(json!({ "type": "server", "name": "db-1" })).unwrap();
        assert_eq!(component, Component::server("db-1"));

        let encoded = serde_json::to_value(Component::app("web")).unwrap();
        assert_eq!(encoded, json!({ "type": "app", "name": "web" }));
    }

    #[test]
    fn test_unknown_component_kind_is_rejected() {
        let result: Result<Component, _> =
            serde_json::from_value(json!({ "type": "application", "name": "web" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<Component, _> = serde_json::from_value(json!({
            "type": "app",
            "name": "web",
            "object": { "geometry": "box", "color": "#0287fc", "colour": "red" }
        }));
        assert!(result.is_err());

        let result: Result<Info, _> =
            serde_json::from_value(json!({ "name": "A", "description": "d", "author": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_vectors_are_fixed_arity() {
        let result: Result<Camera, _> = serde_json::from_value(json!({ "position": [1, 2] }));
        assert!(result.is_err());

        let result: Result<Camera, _> =
            serde_json::from_value(json!({ "position": [1, 2, 3, 4] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_object_defaults() {
        let object: Object3D =
            serde_json::from_value(json!({ "geometry": "torusKnot", "color": "#ff0000" }))
                .unwrap();
        assert_eq!(object, Object3D::new(Geometry::TorusKnot, "#ff0000"));
    }

    #[test]
    fn test_every_geometry_name_decodes() {
        let names = [
            "box",
            "capsule",
            "circle",
            "cone",
            "cylinder",
            "dodecahedron",
            "icosahedron",
            "octahedron",
            "plane",
            "ring",
            "sphere",
            "tetrahedron",
            "torus",
            "torusKnot",
        ];
        let decoded: Vec<Geometry> = names
            .iter()
            .map(|name| serde_json::from_value(json!(name)).unwrap())
            .collect();
        assert_eq!(decoded, Geometry::ALL.to_vec());

        let result: Result<Geometry, _> = serde_json::from_value(json!("pyramid"));
        assert!(result.is_err());
    }

    #[test]
    fn test_group_uses_camel_case_bounding_box() {
        let group: Group = serde_json::from_value(json!({
            "name": "shop",
            "color": "#00ff00",
            "components": ["web", "db"],
            "boundingBox": { "color": "#00ff00", "opacity": 0.5 }
        }))
        .unwrap();

        assert_eq!(group.bounding_box.opacity, 0.5);
        assert!(group.bounding_box.visible);
        assert_eq!(group.bounding_box.scale, [1.0, 1.0, 1.0]);

        let encoded = serde_json::to_value(&group).unwrap();
        assert!(encoded.get("boundingBox").is_some());
    }
}
