//! Named starting scenes.

use anyhow::{Context, Result};

use crate::scene::SceneFile;

pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub scene: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "grid",
        description: "repeating grid, identity sizing",
        scene: r#"{ "shader": "grid" }"#,
    },
    Preset {
        name: "grid-rotated",
        description: "grid zoomed 2x and rotated 30 degrees about the centre",
        scene: r#"{ "shader": "grid", "sizing": { "scale": 2, "rotation": 30 } }"#,
    },
    Preset {
        name: "grid-corner",
        description: "grid rotated about the top-left corner",
        scene: r#"{ "shader": "grid", "sizing": { "rotation": 15, "originX": 0, "originY": 0 } }"#,
    },
    Preset {
        name: "dots-contain",
        description: "square world letterboxed on a wide surface",
        scene: r#"{
            "shader": "dots", "width": 800, "height": 400,
            "sizing": { "fit": "contain", "worldWidth": 400, "worldHeight": 400 }
        }"#,
    },
    Preset {
        name: "dots-cover",
        description: "square world cropped to cover a wide surface",
        scene: r#"{
            "shader": "dots", "width": 800, "height": 400,
            "sizing": { "fit": "cover", "worldWidth": 400, "worldHeight": 400 }
        }"#,
    },
    Preset {
        name: "dots-fill",
        description: "square world stretched over a wide surface",
        scene: r#"{
            "shader": "dots", "width": 800, "height": 400,
            "sizing": { "fit": "fill", "worldWidth": 400, "worldHeight": 400 }
        }"#,
    },
];

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn load(name: &str) -> Result<SceneFile> {
    let preset = find(name).with_context(|| {
        let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
        format!("unknown preset `{name}` (available: {})", names.join(", "))
    })?;
    SceneFile::from_json(preset.scene).with_context(|| format!("preset `{name}`"))
}
