//! Content formats the host application can import

use std::fmt;
use std::path::Path;

/// Supported content formats, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// glTF 2.0, `.gltf` or `.glb`
    Gltf,
    /// Collada, `.dae`
    Collada,
    /// FBX, `.fbx`
    Fbx,
    /// IFC through the BIM add-on, `.ifc`
    Ifc,
    Unrecognized,
}

impl ContentFormat {
    /// Detect the format of `path` from its extension, case-insensitively
    pub fn detect(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match extension.as_deref() {
            Some("gltf") | Some("glb") => ContentFormat::Gltf,
            Some("dae") => ContentFormat::Collada,
            Some("fbx") => ContentFormat::Fbx,
            Some("ifc") => ContentFormat::Ifc,
            _ => ContentFormat::Unrecognized,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ContentFormat::Unrecognized)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentFormat::Gltf => "glTF 2.0",
            ContentFormat::Collada => "Collada",
            ContentFormat::Fbx => "FBX",
            ContentFormat::Ifc => "IFC",
            ContentFormat::Unrecognized => "unknown",
        }
    }

    /// Host statement importing `path_literal`, a ready-made string literal
    ///
    /// None for an unrecognized format.
    pub fn import_statement(&self, path_literal: &str) -> Option<String> {
        match self {
            ContentFormat::Gltf => Some(format!(
                "bpy.ops.import_scene.gltf(filepath={})",
                path_literal
            )),
            ContentFormat::Collada => Some(format!(
                "bpy.ops.wm.collada_import(filepath={})",
                path_literal
            )),
            ContentFormat::Fbx => Some(format!(
                "bpy.ops.import_scene.fbx(filepath={})",
                path_literal
            )),
            ContentFormat::Ifc => Some(format!(
                concat!(
                    "import importlib.util, logging\n",
                    "if importlib.util.find_spec('blenderbim') is None:\n",
                    "    sys.exit('No Blender add-on available for BIM; refer to https://blenderbim.org/download.html')\n",
                    "import blenderbim.bim.import_ifc as import_ifc\n",
                    "settings = import_ifc.IfcImportSettings.factory(bpy.context, {path}, logging.getLogger('ImportIFC'))\n",
                    "import_ifc.IfcImporter(settings).execute()"
                ),
                path = path_literal
            )),
            ContentFormat::Unrecognized => None,
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
