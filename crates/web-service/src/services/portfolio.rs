//! 作品集内容
//!
//! 内容随程序一起编译（`data/portfolio.json`），启动时解析一次。

use crate::models::portfolio::{About, Project, SkillGroups};
use serde::Deserialize;

const PORTFOLIO_JSON: &str = include_str!("../../data/portfolio.json");

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioCatalog {
    projects: Vec<Project>,
    skills: SkillGroups,
    about: About,
}

impl PortfolioCatalog {
    /// 解析内置的作品集内容
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(PORTFOLIO_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 按分类筛选作品，`None` 或者 `all` 返回全部
    pub fn projects(&self, category: Option<&str>) -> Vec<Project> {
        match category.map(str::trim).filter(|c| !c.is_empty() && *c != "all") {
            Some(category) => self.projects.iter().filter(|p| p.category == category).cloned().collect(),
            None => self.projects.clone(),
        }
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn skills(&self) -> &SkillGroups {
        &self.skills
    }

    pub fn about(&self) -> &About {
        &self.about
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let catalog = PortfolioCatalog::load().unwrap();

        assert_eq!(catalog.projects(None).len(), 3);
        assert_eq!(catalog.skills().vfx.len(), 4);
        assert!(!catalog.about().bio.is_empty());
    }

    #[test]
    fn category_filter() {
        let catalog = PortfolioCatalog::load().unwrap();

        assert_eq!(catalog.projects(Some("all")).len(), 3);
        assert_eq!(catalog.projects(Some("")).len(), 3);

        let compositing = catalog.projects(Some("compositing"));
        assert_eq!(compositing.len(), 1);
        assert_eq!(compositing[0].id, "compositing");

        assert!(catalog.projects(Some("unknown")).is_empty());
    }

    #[test]
    fn project_lookup() {
        let catalog = PortfolioCatalog::load().unwrap();

        assert_eq!(catalog.project("acm-intro").map(|p| p.year), Some(2024));
        assert!(catalog.project("missing").is_none());
    }
}
