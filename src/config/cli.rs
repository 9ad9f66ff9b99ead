use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    type Writer = File;

    fn create(&self, path: &str) -> Result<Self::Writer> {
        let full_path = Path::new(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(full_path)?;
        Ok(file)
    }
}
