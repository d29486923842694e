//! Built-in profile record

use chrono::NaiveDate;

use super::{Education, Experience, Profile, Project, SkillGroup};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn group(key: &str, label: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        key: key.to_string(),
        label: Some(label.to_string()),
        items: strings(items),
    }
}

pub(super) fn profile() -> Profile {
    Profile {
        name: "Alex Rivera".to_string(),
        title: "Full-Stack & ML Engineer".to_string(),
        location: "Lisbon, Portugal".to_string(),
        email: "alex.rivera [at] example.com".to_string(),
        github: "github.com/alex-rivera".to_string(),
        linkedin: "linkedin.com/in/alex-rivera/".to_string(),
        birthdate: NaiveDate::from_ymd_opt(2001, 11, 24).unwrap_or_default(),
        shell_user: "alex".to_string(),
        host: "portfolio".to_string(),
        summary: "Full-stack & ML engineer building web products, LLM tooling and applied NLP. \
                  Hackathon winner with end-to-end delivery across edtech and legal tech."
            .to_string(),
        skills: vec![
            group(
                "languages",
                "Programming",
                &["Rust", "Python", "C/C++", "TypeScript", "SQL"],
            ),
            group("frontend", "Frontend", &["React", "Vite", "TailwindCSS"]),
            group("backend", "Backend", &["Axum", "Node.js", "Flask"]),
            group(
                "ml",
                "ML / AI",
                &["PyTorch", "scikit-learn", "RAG", "LlamaIndex", "spaCy"],
            ),
            group("data", "Data", &["Pandas", "NumPy", "Matplotlib"]),
            group(
                "databases",
                "Databases",
                &["PostgreSQL", "SQLite", "ChromaDB"],
            ),
            group("devops", "DevOps", &["Docker", "AWS", "GitHub Actions"]),
            group("tools", "Tools", &["Git", "REST APIs", "Prompt Engineering"]),
            group("soft", "Soft Skills", &["Communication", "Agile", "Teamwork"]),
        ],
        experience: vec![
            Experience {
                role: "Task Lead".to_string(),
                company: "Campus AI Innovators Hub".to_string(),
                period: "2025".to_string(),
                note: Some("Led the resume tailoring suite from prototype to launch.".to_string()),
            },
            Experience {
                role: "Club Member".to_string(),
                company: "University AI Club".to_string(),
                period: "2024".to_string(),
                note: Some(
                    "Ran ML workshops and hackathons; contributed to community projects."
                        .to_string(),
                ),
            },
        ],
        education: vec![
            Education {
                degree: "B.Sc. Computer Science".to_string(),
                school: "University of Lisbon".to_string(),
                period: "2021–2025".to_string(),
            },
            Education {
                degree: "Secondary (Science)".to_string(),
                school: "Escola Secundária".to_string(),
                period: "Up to 2021".to_string(),
            },
        ],
        projects: vec![
            Project {
                name: "Lumen".to_string(),
                desc: "Open-source music player & visualizer; hackathon prize winner.".to_string(),
                url: Some("https://github.com/alex-rivera/lumen".to_string()),
            },
            Project {
                name: "Pathwise".to_string(),
                desc: "Learning roadmaps, notes & chatbot on an LLM backend.".to_string(),
                url: Some("https://github.com/alex-rivera/pathwise".to_string()),
            },
            Project {
                name: "DepoIndex".to_string(),
                desc: "Reads deposition transcripts, detects each subject discussed and \
                       produces a table of contents."
                    .to_string(),
                url: Some("https://github.com/alex-rivera/depoindex".to_string()),
            },
            Project {
                name: "Clause Annotator".to_string(),
                desc: "Clause classification & PDF annotation with BERT-family models."
                    .to_string(),
                url: None,
            },
        ],
        certifications: strings(&[
            "DevOps, Agile & Design Thinking",
            "Networking Basics",
            "Python Fundamentals",
        ]),
        languages: strings(&["English", "Portuguese"]),
        hobbies: strings(&["Guitar", "Music Production", "Table Tennis", "Reading"]),
        key_project: "depoindex".to_string(),
    }
}
