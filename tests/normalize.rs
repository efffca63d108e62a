use devfolio::site::{self, TemplateInput, build_site_config};

fn normalize(raw: &str) -> devfolio::SiteConfig {
    let input: TemplateInput = serde_json::from_str(raw).expect("input should parse");
    build_site_config(&input)
}

#[test]
fn normalizes_a_full_portfolio_export() {
    let config = normalize(
        r#"{
            "user": {
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "linkedInUrl": "https://linkedin.com/in/janedoe",
                "githubUrl": ""
            },
            "portfolio": {"title": "Platform Engineer"},
            "resumeUrl": "https://cv.example.com/jane.pdf",
            "skills": [{"name": "Rust"}, {"name": ""}, null, {"name": "Kubernetes"}],
            "projects": [
                {"name": "Crawler", "techStack": "Rust, Tokio|Postgres", "link": "https://github.com/jane/crawler"}
            ],
            "experiences": [
                {
                    "companyName": "Acme",
                    "title": "Engineer",
                    "startDate": "2020",
                    "endDate": null,
                    "bullets": null,
                    "description": "Led team\n• Shipped feature\n- Fixed bugs"
                }
            ],
            "education": [
                {"school": "State University", "field": "Mathematics", "endDate": "2018"}
            ]
        }"#,
    );

    assert_eq!(config.name, "Jane Doe");
    assert_eq!(config.title, "Platform Engineer");
    assert_eq!(config.description, "Portfolio website of Jane Doe");
    assert_eq!(config.accent_color, site::DEFAULT_ACCENT);
    assert_eq!(
        config.resume_url.as_deref(),
        Some("https://cv.example.com/jane.pdf")
    );
    assert_eq!(config.social.github, None);
    assert_eq!(config.social.twitter, None);
    assert_eq!(config.skills, ["Rust", "Kubernetes"]);

    assert_eq!(config.projects[0].skills, ["Rust", "Tokio", "Postgres"]);
    assert_eq!(config.projects[0].description, None);

    assert_eq!(config.experience[0].date_range.as_deref(), Some("2020"));
    assert_eq!(
        config.experience[0].bullets,
        ["Led team", "Shipped feature", "Fixed bugs"]
    );

    assert_eq!(config.education[0].degree.as_deref(), Some("Mathematics"));
    assert_eq!(config.education[0].date_range.as_deref(), Some("2018"));
    assert!(config.education[0].achievements.is_empty());
}

#[test]
fn empty_object_still_yields_every_field() {
    let config = normalize("{}");
    let value = serde_json::to_value(&config).expect("serialize");

    assert_eq!(
        value,
        serde_json::json!({
            "name": "Your Name",
            "title": "Professional Title",
            "description": "Portfolio website of Your Name",
            "accentColor": "#1d4ed8",
            "social": {},
            "aboutMe": "Write a concise summary highlighting your strengths, passions, and what you bring to a team.",
            "skills": [],
            "projects": [],
            "experience": [],
            "education": []
        })
    );
}

#[test]
fn null_lists_become_empty_lists() {
    let config = normalize(
        r#"{"skills":null,"projects":null,"experiences":null,"education":null,"user":null,"portfolio":null}"#,
    );

    assert!(config.skills.is_empty());
    assert!(config.projects.is_empty());
    assert!(config.experience.is_empty());
    assert!(config.education.is_empty());
}

#[test]
fn null_entries_inside_lists_do_not_reject_the_record() {
    let config = normalize(
        r#"{"projects":[{"name":null}],"experiences":[{"companyName":null,"bullets":["a",null]}],"education":[{"school":null}]}"#,
    );

    assert_eq!(config.projects[0].name, "");
    assert!(config.projects[0].skills.is_empty());
    assert_eq!(config.experience[0].company, "");
    assert_eq!(config.experience[0].bullets, ["a"]);
    assert_eq!(config.education[0].school, "");
    assert!(config.education[0].achievements.is_empty());
}

#[test]
fn preserves_input_ordering() {
    let config = normalize(
        r#"{
            "projects": [{"name": "Zeta"}, {"name": "Alpha"}, {"name": "Mu"}],
            "experiences": [
                {"companyName": "Later Co", "title": "Lead"},
                {"companyName": "Earlier Co", "title": "Junior"}
            ]
        }"#,
    );

    let projects = config
        .projects
        .iter()
        .map(|project| project.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(projects, ["Zeta", "Alpha", "Mu"]);
    assert_eq!(config.experience[0].company, "Later Co");
    assert_eq!(config.experience[1].company, "Earlier Co");
}

#[test]
fn serialized_output_omits_absent_optionals() {
    let config = normalize(
        r#"{"experiences":[{"companyName":"Acme","title":"Engineer"}],"education":[{"school":"MIT"}]}"#,
    );
    let value = serde_json::to_value(&config).expect("serialize");

    assert!(value.get("resumeUrl").is_none());
    assert!(value["experience"][0].get("dateRange").is_none());
    assert!(value["education"][0].get("degree").is_none());
    assert_eq!(value["experience"][0]["bullets"], serde_json::json!([]));
}

#[test]
fn normalization_is_repeatable() {
    let raw = r#"{"user":{"firstName":"Jane"},"summary":"Builder of things"}"#;
    assert_eq!(normalize(raw), normalize(raw));
}
