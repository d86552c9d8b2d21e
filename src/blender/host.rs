//! Host application invocation
//!
//! The host receives a content-file path and a recognized format, and either
//! imports the content into a blank scene or converts it to binary glTF. Only
//! the exit status of the host process is consumed.

use crate::blender::format::ContentFormat;
use crate::error::HostError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, instrument};

/// Host application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Executable launched for every request
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Run imports without a UI (conversions always run in background)
    #[serde(default)]
    pub background: bool,
}

fn default_executable() -> String {
    "blender".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            background: false,
        }
    }
}

/// What to ask of the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    Import { content_file: PathBuf },
    Convert { content_file: PathBuf },
}

/// Conversion target: same location, `.glb` extension
pub fn convert_target(content_file: &Path) -> PathBuf {
    content_file.with_extension("glb")
}

/// Double-quoted string literal accepted by the host's script interpreter
fn string_literal(path: &Path) -> String {
    serde_json::Value::String(path.to_string_lossy().into_owned()).to_string()
}

const BLANK_STATE: &str = "\
import bpy, sys
collection = bpy.data.collections.get('Collection')
if collection is not None:
    for obj in list(collection.objects):
        bpy.data.objects.remove(obj, do_unlink=True)
    bpy.data.collections.remove(collection)
bpy.context.preferences.view.show_splash = False";

const FOCUS_VIEW: &str = "\
if bpy.context.screen is not None:
    for area in bpy.context.screen.areas:
        if area.type == 'VIEW_3D':
            with bpy.context.temp_override(area=area):
                bpy.ops.view3d.localview()";

impl HostRequest {
    pub fn content_file(&self) -> &Path {
        match self {
            HostRequest::Import { content_file } | HostRequest::Convert { content_file } => {
                content_file
            }
        }
    }

    /// Validate the request and build the host invocation
    ///
    /// Fails before anything is launched when the content file is missing or
    /// its format is not recognized.
    pub fn prepare(&self, config: &HostConfig) -> Result<HostInvocation, HostError> {
        let content_file = self.content_file();
        if !content_file.is_file() {
            return Err(HostError::ContentFileNotFound(content_file.to_path_buf()));
        }

        let format = ContentFormat::detect(content_file);
        let import = format
            .import_statement(&string_literal(content_file))
            .ok_or_else(|| HostError::UnsupportedFormat(content_file.to_path_buf()))?;

        let mut script = vec![BLANK_STATE.to_string(), import];
        let (target, background) = match self {
            HostRequest::Import { .. } => {
                script.push(FOCUS_VIEW.to_string());
                (None, config.background)
            }
            HostRequest::Convert { content_file } => {
                let target = convert_target(content_file);
                script.push(format!(
                    "bpy.ops.export_scene.gltf(filepath={}, export_format='GLB')",
                    string_literal(&target)
                ));
                (Some(target), true)
            }
        };

        let mut args = Vec::new();
        if background {
            args.push("--background".to_string());
        }
        args.push("--python-expr".to_string());
        args.push(script.join("\n"));

        debug!(format = %format, background, "Prepared host invocation");
        Ok(HostInvocation {
            executable: config.executable.clone(),
            args,
            format,
            content_file: content_file.to_path_buf(),
            target,
        })
    }
}

/// A ready-to-launch host command
#[derive(Debug, Clone)]
pub struct HostInvocation {
    executable: String,
    args: Vec<String>,
    format: ContentFormat,
    content_file: PathBuf,
    target: Option<PathBuf>,
}

impl HostInvocation {
    pub fn format(&self) -> ContentFormat {
        self.format
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Conversion output, None for imports
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Launch the host and wait for it; a non-zero exit is a failure
    #[instrument(skip(self), fields(content = %self.content_file.display(), format = %self.format))]
    pub fn launch(&self) -> Result<(), HostError> {
        info!("Requesting host to process content file");
        let status = Command::new(&self.executable)
            .args(&self.args)
            .status()
            .map_err(|source| HostError::Launch {
                executable: self.executable.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HostError::HostFailed {
                status: status.to_string(),
            })
        }
    }
}
