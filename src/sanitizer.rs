use crate::output::{CYAN, NO_COLOR};
use crate::project::Project;
use crate::result::{Result, SweepError};
use std::path::{Component, Path, PathBuf};

pub(crate) struct Sanitizer {
    targets: Vec<String>,
}

impl Sanitizer {
    pub fn new() -> Sanitizer {
        Sanitizer { targets: vec![] }
    }

    pub fn configure(&mut self, project: &Project) {
        self.targets = project.output_directories();
    }

    pub fn sanitize(&self, base_directory: &Path) -> Result<()> {
        for target in &self.targets {
            let resolved = resolve_target(base_directory, target);
            if base_directory.starts_with(&resolved) {
                return Err(SweepError::RefusedTarget(
                    resolved,
                    "it contains the base working directory",
                ));
            }
            if !resolved.exists() {
                continue;
            }
            if !resolved.is_dir() {
                return Err(SweepError::RefusedTarget(
                    resolved,
                    "it is not a directory",
                ));
            }
            std::fs::remove_dir_all(&resolved)
                .map_err(|cause| SweepError::RemovalFailed(resolved.clone(), cause))?;
            color_println!(CYAN, "[sanitizer] cleaned directory: {}", resolved.display());
        }
        Ok(())
    }
}

fn resolve_target(base_directory: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        base_directory.join(target)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            component => normalized.push(component),
        }
    }
    normalized
}
