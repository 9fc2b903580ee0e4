//! Test fixtures
//!
//! Builds servers over temporary directories and valid architecture
//! documents to send to them.

use std::path::{Path, PathBuf};

use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use ennoea::backend::server::create_app;
use ennoea::shared::AppConfig;

/// Contents of the viewer's landing page in test static directories
pub const INDEX_HTML: &str = "<html><body>ennoea</body></html>";

/// Contents of a viewer asset in test static directories
pub const APP_JS: &str = "console.log('ennoea');";

/// A temporary directory laid out like a deployment: `static/` with the
/// viewer files and an empty `saves/` root.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let html = dir.path().join("static").join("html");
        std::fs::create_dir_all(&html).expect("Failed to create html dir");
        std::fs::write(html.join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        std::fs::write(dir.path().join("static").join("app.js"), APP_JS)
            .expect("Failed to write app.js");

        Self { dir }
    }

    pub fn save_dir(&self) -> PathBuf {
        self.dir.path().join("saves")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.dir.path().join("static")
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::builder()
            .static_dir(self.static_dir())
            .save_dir(self.save_dir())
            .build()
            .expect("Failed to build config")
    }

    /// Start a server over this environment. Calling it again simulates a
    /// restart over the same save root.
    pub async fn server(&self) -> TestServer {
        let app = create_app(&self.config())
            .await
            .expect("Failed to create app");
        TestServer::new(app).expect("Failed to start test server")
    }

    /// Number of architecture directories under the save root
    pub fn saved_dirs(&self) -> usize {
        count_dirs(&self.save_dir())
    }
}

fn count_dirs(path: &Path) -> usize {
    std::fs::read_dir(path)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|entry| entry.path().is_dir())
                .count()
        })
        .unwrap_or(0)
}

/// A new (unsaved) architecture that passes validation
pub fn architecture(name: &str) -> Value {
    json!({
        "info": { "name": name, "description": "checkout flow" },
        "scene": {
            "camera": { "position": [0, 5, 20] },
            "fog": { "near": 1, "far": 100 },
            "text": { "scale": 1, "rotate": true }
        },
        "components": [
            {
                "type": "app",
                "name": "web",
                "object": { "geometry": "box", "color": "#0287fc" }
            },
            {
                "type": "server",
                "name": "db",
                "object": { "geometry": "cylinder", "color": "#ff0000", "position": [4, 0, 0] }
            }
        ],
        "groups": [
            {
                "name": "backend",
                "color": "#00ff00",
                "components": ["db"],
                "boundingBox": {
                    "color": "#00ff00",
                    "wireframe": true,
                    "opacity": 0.5,
                    "visible": true
                }
            }
        ],
        "connections": [ { "source": "web", "target": "db" } ]
    })
}

/// `architecture(name)` carrying an existing ID
pub fn architecture_with_id(id: &str, name: &str) -> Value {
    let mut doc = architecture(name);
    doc["info"]["id"] = json!(id);
    doc
}

/// The ID at the end of a `Location: /architectures/{id}` header
pub fn id_from_location(location: &str) -> String {
    location
        .strip_prefix("/architectures/")
        .unwrap_or_else(|| panic!("unexpected Location: {}", location))
        .to_string()
}
