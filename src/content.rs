use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    load_content().unwrap_or_else(|e| {
        log::error!("falling back to empty site content: {e}");
        SiteContent::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    /// Section id addressed by this link ("#home" -> "home").
    pub fn section_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectIcon {
    #[default]
    Globe,
    Code,
    Terminal,
    Cpu,
    Layout,
    BookOpen,
    GraduationCap,
}

impl ProjectIcon {
    pub fn class(&self) -> &'static str {
        match self {
            ProjectIcon::Globe => "extra-globe",
            ProjectIcon::Code => "extra-code",
            ProjectIcon::Terminal => "extra-terminal",
            ProjectIcon::Cpu => "extra-cpu",
            ProjectIcon::Layout => "extra-layout",
            ProjectIcon::BookOpen => "extra-book-open",
            ProjectIcon::GraduationCap => "extra-graduation-cap",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialIcon {
    #[default]
    Github,
    Linkedin,
    Terminal,
}

impl SocialIcon {
    pub fn class(&self) -> &'static str {
        match self {
            SocialIcon::Github => "devicon-github-plain",
            SocialIcon::Linkedin => "devicon-linkedin-plain",
            SocialIcon::Terminal => "devicon-bash-plain",
        }
    }
}

// Blank titles and descriptions are allowed and render as empty strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub icon: ProjectIcon,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub skills: Vec<String>,
    pub featured_projects: Vec<Project>,
    pub school_projects: Vec<Project>,
    pub contact_email: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Site content file not found")]
    NotFound,
    #[error("Couldn't parse site content")]
    ParseError,
}

fn load_content() -> Result<SiteContent, ContentError> {
    let raw = Assets::get("site.json").ok_or(ContentError::NotFound)?;
    serde_json::from_slice(&raw.data).map_err(|_| ContentError::ParseError)
}

pub fn site_content() -> &'static SiteContent {
    &SITE_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = load_content().expect("embedded site content should parse");

        // Navigation declares the four page sections in order
        let ids: Vec<&str> = content.nav_links.iter().map(|l| l.section_id()).collect();
        assert_eq!(ids, vec!["home", "about", "projects", "contact"]);

        assert!(!content.skills.is_empty());
        assert!(!content.featured_projects.is_empty());
        assert!(!content.school_projects.is_empty());
        assert!(!content.contact_email.is_empty());
        assert_eq!(content.social_links.len(), 3);
    }

    #[test]
    fn test_section_id_strips_anchor() {
        let link = NavLink {
            name: "About".to_string(),
            href: "#about".to_string(),
        };
        assert_eq!(link.section_id(), "about");

        // Non-anchor hrefs pass through unchanged
        let link = NavLink {
            name: "Home".to_string(),
            href: "home".to_string(),
        };
        assert_eq!(link.section_id(), "home");
    }

    #[test]
    fn test_blank_project_fields_tolerated() {
        // Placeholder entries ship with empty titles and descriptions and
        // no icon at all
        let project: Project = serde_json::from_str(
            r##"{
                "title": "",
                "description": "",
                "tags": ["React", "Tailwind", "Node.js"],
                "link": "#"
            }"##,
        )
        .expect("blank fields should deserialize");

        assert!(project.title.is_empty());
        assert!(project.description.is_empty());
        assert_eq!(project.tags.len(), 3);
        assert_eq!(project.link, "#");
        assert_eq!(project.icon, ProjectIcon::Globe);
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(ProjectIcon::BookOpen.class(), "extra-book-open");
        assert_eq!(SocialIcon::Github.class(), "devicon-github-plain");
    }
}
