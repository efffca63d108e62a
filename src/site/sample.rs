//! Bundled sample site, used for local previews and whenever no remote
//! config can be loaded.

use std::sync::LazyLock;

use super::model::{EducationEntry, ExperienceEntry, ProjectEntry, SiteConfig, SocialLinks};
use super::normalize::DEFAULT_ACCENT;

static SAMPLE_SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(build_sample);

pub fn sample() -> &'static SiteConfig {
    &SAMPLE_SITE_CONFIG
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn build_sample() -> SiteConfig {
    SiteConfig {
        name: "Ryan Fitzgerald".to_string(),
        title: "Senior Software Engineer".to_string(),
        description: "Portfolio website of Ryan Fitzgerald".to_string(),
        accent_color: DEFAULT_ACCENT.to_string(),
        resume_url: None,
        social: SocialLinks {
            email: Some("your-email@example.com".to_string()),
            linkedin: Some("https://linkedin.com/in/yourprofile".to_string()),
            twitter: Some("https://x.com/rfitzio".to_string()),
            github: Some("https://github.com/RyanFitzgerald".to_string()),
        },
        about_me: "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Rem quos asperiores nihil consequatur tempore cupiditate architecto natus commodi corrupti quas quasi facere est, dignissimos odit nam veniam sapiente ut, vitae eligendi ipsum dolor, nostrum ullam impedit! Corrupti ratione mollitia temporibus necessitatibus, consectetur reiciendis recusandae id, dolorum quaerat, vero pariatur. Ratione!".to_string(),
        skills: strings(&["Javascript", "React", "Node.js", "Python", "AWS", "Docker"]),
        projects: vec![
            ProjectEntry {
                name: "AI Dev Roundup Newsletter".to_string(),
                description: Some("One concise email. Five minutes. Every Tuesday. Essential AI news & trends, production-ready libraries, powerful AI tools, and real-world code examples".to_string()),
                link: Some("https://aidevroundup.com/?ref=devportfolio".to_string()),
                skills: strings(&["React", "Node.js", "AWS"]),
            },
            ProjectEntry {
                name: "Chrome Extension Mastery: Build Full-Stack Extensions with React & Node.js".to_string(),
                description: Some("Master the art of building production-ready, full-stack Chrome Extensions using modern web technologies and best practices".to_string()),
                link: Some("https://fullstackextensions.com/?ref=devportfolio".to_string()),
                skills: strings(&["React", "Node.js", "AWS"]),
            },
            ProjectEntry {
                name: "ExtensionKit".to_string(),
                description: Some("Kit to jump-start your Chrome extension projects with a variety of battle-tested starter templates & examples".to_string()),
                link: Some("https://extensionkit.io/?ref=devportfolio".to_string()),
                skills: strings(&["React", "Node.js", "AWS"]),
            },
        ],
        experience: vec![
            ExperienceEntry {
                company: "Tech Company".to_string(),
                title: "Senior Software Engineer".to_string(),
                date_range: Some("Jan 2022 - Present".to_string()),
                bullets: strings(&[
                    "Led development of microservices architecture serving 1M+ users",
                    "Reduced API response times by 40% through optimization",
                    "Mentored team of 5 junior developers",
                ]),
            },
            ExperienceEntry {
                company: "Startup Inc".to_string(),
                title: "Full Stack Developer".to_string(),
                date_range: Some("Jun 2020 - Dec 2021".to_string()),
                bullets: strings(&[
                    "Built and launched MVP product from scratch using React and Node.js",
                    "Implemented CI/CD pipeline reducing deployment time by 60%",
                    "Collaborated with product team to define technical requirements",
                ]),
            },
            ExperienceEntry {
                company: "Digital Agency".to_string(),
                title: "Frontend Developer".to_string(),
                date_range: Some("Aug 2018 - May 2020".to_string()),
                bullets: strings(&[
                    "Developed responsive web applications for 20+ clients",
                    "Improved site performance scores by 35% on average",
                    "Introduced modern JavaScript frameworks to legacy codebases",
                ]),
            },
        ],
        education: vec![
            EducationEntry {
                school: "University Name".to_string(),
                degree: Some("Bachelor of Science in Computer Science".to_string()),
                date_range: Some("2014 - 2018".to_string()),
                achievements: strings(&[
                    "Graduated Magna Cum Laude with 3.8 GPA",
                    "Dean's List all semesters",
                    "President of Computer Science Club",
                ]),
            },
            EducationEntry {
                school: "Online Platform".to_string(),
                degree: Some("Full Stack Development Certificate".to_string()),
                date_range: Some("2019".to_string()),
                achievements: strings(&[
                    "Completed 500+ hours of coursework",
                    "Built 10+ portfolio projects",
                    "Specialized in React and Node.js",
                ]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_blank(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(str::is_empty)
    }

    #[test]
    fn sample_is_fully_populated() {
        let config = sample();

        assert_eq!(config.accent_color, DEFAULT_ACCENT);
        assert_eq!(config.skills.len(), 6);
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.experience.len(), 3);
        assert_eq!(config.education.len(), 2);
        assert!(config.social.twitter.is_some());
    }

    #[test]
    fn sample_has_no_empty_optionals() {
        let config = sample();

        assert!(!is_blank(&config.resume_url));
        assert!(!is_blank(&config.social.email));
        assert!(!is_blank(&config.social.linkedin));
        assert!(!is_blank(&config.social.github));
        for project in &config.projects {
            assert!(!is_blank(&project.description));
            assert!(!is_blank(&project.link));
        }
        for entry in &config.experience {
            assert!(!is_blank(&entry.date_range));
        }
        for entry in &config.education {
            assert!(!is_blank(&entry.degree));
            assert!(!is_blank(&entry.date_range));
        }
    }

    #[test]
    fn sample_is_shared() {
        assert!(std::ptr::eq(sample(), sample()));
    }
}
