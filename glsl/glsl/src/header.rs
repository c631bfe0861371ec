use std::path::{Path, PathBuf};

pub const GLSL_EXTENSION: &str = "h.glsl";

/// One generated include file, e.g. `ray.h.glsl`.
pub struct Header {
    pub name: &'static str,
    pub definitions: Vec<String>,
}

impl Header {
    pub const fn new(name: &'static str, definitions: Vec<String>) -> Self {
        Self { name, definitions }
    }

    pub fn contents(&self) -> String {
        let guard = format!("{}_H_GLSL", self.name.to_uppercase());
        format!(
            "// AUTO-GENERATED: do not edit\n\n#ifndef {guard}\n#define {guard}\n\n{}\n#endif // {guard}\n",
            self.definitions.join("\n")
        )
    }

    pub fn file_name(&self) -> String {
        format!("{}.{GLSL_EXTENSION}", self.name)
    }

    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.file_name())
    }
}
