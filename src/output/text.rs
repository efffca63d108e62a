use crate::error::AppResult;
use crate::site::SiteConfig;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn site_summary(config: &SiteConfig) -> String {
    let mut lines = vec![
        format!("{} | {}", config.name, config.title),
        format!("   {}", config.description),
    ];

    let links = [
        ("email", &config.social.email),
        ("linkedin", &config.social.linkedin),
        ("twitter", &config.social.twitter),
        ("github", &config.social.github),
        ("resume", &config.resume_url),
    ];
    for (label, value) in links {
        if let Some(value) = value {
            lines.push(format!("   {label}: {value}"));
        }
    }

    if !config.skills.is_empty() {
        lines.push(format!("   skills: {}", config.skills.join(", ")));
    }

    lines.push(format!(
        "   {} projects, {} experience, {} education",
        config.projects.len(),
        config.experience.len(),
        config.education.len()
    ));

    lines.join("\n")
}
