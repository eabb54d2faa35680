//! Project showcase: category filter and detail modal

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filter key that shows every project
pub const FILTER_ALL: &str = "all";

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// Key matched by the filter buttons (e.g. "ml", "web")
    pub filter_tag: String,
    /// Badge text shown in the detail modal
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// All projects, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parse a catalog from a JSON array of projects
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(json).context("Failed to parse project catalog")?;
        Ok(Self::new(projects))
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let projects: Vec<Project> = config::load_json_file(path)?;
        Ok(Self::new(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects visible under a filter key
    pub fn filter(&self, key: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| key == FILTER_ALL || p.filter_tag == key)
            .collect()
    }

    /// Look up a project for the detail modal
    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Detail modal state; page scrolling is locked while it is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectModal {
    open: Option<u32>,
}

impl ProjectModal {
    /// Open the modal for a project; unknown ids leave it unchanged
    pub fn open<'a>(&mut self, catalog: &'a ProjectCatalog, id: u32) -> Option<&'a Project> {
        let project = catalog.get(id)?;
        self.open = Some(id);
        Some(project)
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_project(&self) -> Option<u32> {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open.is_some()
    }
}
