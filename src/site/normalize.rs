//! Maps raw portfolio data onto a [`SiteConfig`].
//!
//! [`build_site_config`] is total: every field has a fallback, so any
//! [`TemplateInput`] that deserialized produces a complete record.

use super::input::{EducationInput, ExperienceInput, ProjectInput, TemplateInput, UserInput};
use super::model::{EducationEntry, ExperienceEntry, ProjectEntry, SiteConfig, SocialLinks};
use super::text::{
    date_range, join_present, non_empty, non_empty_owned, split_bullets, split_tech_stack,
};

pub const DEFAULT_ACCENT: &str = "#1d4ed8";
pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_TITLE: &str = "Professional Title";
pub const DEFAULT_ABOUT_ME: &str = "Write a concise summary highlighting your strengths, passions, and what you bring to a team.";

pub fn build_site_config(input: &TemplateInput) -> SiteConfig {
    let user = input.user.as_ref();
    let name = full_name(user);
    let summary = non_empty(input.summary.as_deref());

    let title = non_empty(input.role_title.as_deref())
        .or_else(|| non_empty(input.portfolio.as_ref()?.title.as_deref()))
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let description = summary
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| format!("Portfolio website of {name}"));

    let skills = input
        .skills
        .iter()
        .flatten()
        .flatten()
        .filter_map(|skill| non_empty_owned(skill.name.as_deref()))
        .collect();

    SiteConfig {
        title,
        description,
        accent_color: DEFAULT_ACCENT.to_string(),
        resume_url: non_empty_owned(input.resume_url.as_deref()),
        social: social_links(user),
        about_me: summary.unwrap_or(DEFAULT_ABOUT_ME).to_string(),
        skills,
        projects: input.projects.iter().flatten().map(project_entry).collect(),
        experience: input
            .experiences
            .iter()
            .flatten()
            .map(experience_entry)
            .collect(),
        education: input
            .education
            .iter()
            .flatten()
            .map(education_entry)
            .collect(),
        name,
    }
}

fn full_name(user: Option<&UserInput>) -> String {
    let first = user.and_then(|user| user.first_name.as_deref());
    let last = user.and_then(|user| user.last_name.as_deref());

    join_present(&[first, last], " ")
        .map(|joined| joined.trim().to_string())
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

// No twitter field exists upstream, so derived configs never carry one.
fn social_links(user: Option<&UserInput>) -> SocialLinks {
    let Some(user) = user else {
        return SocialLinks::default();
    };

    SocialLinks {
        email: non_empty_owned(user.email.as_deref()),
        linkedin: non_empty_owned(user.linked_in_url.as_deref()),
        twitter: None,
        github: non_empty_owned(user.github_url.as_deref()),
    }
}

fn project_entry(project: &ProjectInput) -> ProjectEntry {
    ProjectEntry {
        name: project.name.clone(),
        description: non_empty_owned(project.description.as_deref()),
        link: non_empty_owned(project.link.as_deref()),
        skills: split_tech_stack(project.tech_stack.as_deref().unwrap_or_default()),
    }
}

fn experience_entry(experience: &ExperienceInput) -> ExperienceEntry {
    // A list of only nulls still counts as given, yielding no bullets.
    let bullets = match experience.bullets.as_ref() {
        Some(bullets) if !bullets.is_empty() => bullets.iter().flatten().cloned().collect(),
        _ => split_bullets(experience.description.as_deref().unwrap_or_default()),
    };

    ExperienceEntry {
        company: experience.company_name.clone(),
        title: experience.title.clone(),
        date_range: date_range(
            experience.start_date.as_deref(),
            experience.end_date.as_deref(),
        ),
        bullets,
    }
}

fn education_entry(education: &EducationInput) -> EducationEntry {
    EducationEntry {
        school: education.school.clone(),
        degree: join_present(
            &[education.degree.as_deref(), education.field.as_deref()],
            " • ",
        ),
        date_range: date_range(
            education.start_date.as_deref(),
            education.end_date.as_deref(),
        ),
        achievements: split_bullets(education.description.as_deref().unwrap_or_default()),
    }
}
