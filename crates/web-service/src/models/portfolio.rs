//! 作品集静态内容

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = "acm-intro")]
    pub id: String,
    pub title: String,
    #[schema(example = "motion-graphics")]
    pub category: String,
    pub description: String,
    pub thumbnail: String,
    pub video_url: String,
    pub technologies: Vec<String>,
    #[schema(example = 2024)]
    pub year: u16,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct Skill {
    pub name: String,
    /// 熟练度 0~100
    pub level: u8,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct SkillGroups {
    pub vfx: Vec<Skill>,
    pub programming: Vec<Skill>,
    pub design: Vec<Skill>,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub status: String,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct Position {
    pub title: String,
    pub organization: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub instagram: String,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct Stats {
    pub projects: String,
    pub experience: String,
    pub clients: String,
}

#[derive(Deserialize, Debug, Clone, ToSchema, Serialize)]
pub struct About {
    pub name: String,
    pub title: String,
    pub education: Education,
    pub position: Position,
    pub location: String,
    pub social: SocialLinks,
    pub stats: Stats,
    pub bio: Vec<String>,
}

/// 作品列表查询参数
#[derive(Deserialize, Debug, IntoParams)]
pub struct ProjectQuery {
    /// 作品分类，为空或者 `all` 时返回全部
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectListReply {
    pub success: bool,
    pub projects: Vec<Project>,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectReply {
    pub success: bool,
    pub project: Project,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct SkillsReply {
    pub success: bool,
    pub skills: SkillGroups,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct AboutReply {
    pub success: bool,
    pub about: About,
}
