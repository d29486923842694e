//! Resume section commands

use super::RenderContext;

pub fn about(ctx: &RenderContext<'_>) -> String {
    let p = ctx.profile;
    let pal = &ctx.palette;
    let summary = if p.summary.is_empty() {
        "\u{2014}".to_string()
    } else {
        p.summary.clone()
    };
    let languages = if p.languages.is_empty() {
        String::new()
    } else {
        format!("{}: {}", pal.label(pal.resume, "Languages"), p.languages.join(", "))
    };
    let hobbies = if p.hobbies.is_empty() {
        String::new()
    } else {
        format!("{}: {}", pal.label(pal.resume, "Hobbies"), p.hobbies.join(", "))
    };

    [
        format!("{} \u{2014} {}", pal.label(pal.resume, &p.name), p.title),
        pal.dim(&p.location),
        format!("GitHub: {}", p.github),
        format!("LinkedIn: {}", p.linkedin),
        summary,
        languages,
        hobbies,
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn summary(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    let text = if ctx.profile.summary.is_empty() {
        "No summary provided."
    } else {
        ctx.profile.summary.as_str()
    };
    format!("{}: {}", pal.label(pal.resume, "Summary"), text)
}

pub fn skills(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    ctx.profile
        .skills
        .iter()
        .filter(|group| !group.items.is_empty())
        .map(|group| {
            let bullets: Vec<String> = group.items.iter().map(|item| pal.bullet(item)).collect();
            format!(
                "{}\n  {}",
                pal.label(pal.resume, group.label()),
                bullets.join("\n  ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn experience(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    let mut lines = vec![pal.label(pal.resume, "Experience")];
    for e in &ctx.profile.experience {
        lines.push(pal.bullet(&format!(
            "{:<13} {} @ {}\n    {}",
            e.period,
            e.role,
            e.company,
            e.note.as_deref().unwrap_or("")
        )));
    }
    lines.join("\n")
}

pub fn education(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    let mut lines = vec![pal.label(pal.resume, "Education")];
    for e in &ctx.profile.education {
        lines.push(pal.bullet(&format!(
            "{} \u{2014} {} ({})",
            e.degree, e.school, e.period
        )));
    }
    lines.join("\n")
}

pub fn projects(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    let mut lines = vec![pal.label(pal.resume, "Projects")];
    for p in &ctx.profile.projects {
        let line = match &p.url {
            Some(url) => format!("{}: {} ({})", p.name, p.desc, url),
            None => format!("{}: {}", p.name, p.desc),
        };
        lines.push(pal.bullet(&line));
    }
    lines.join("\n")
}

pub fn certs(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    if ctx.profile.certifications.is_empty() {
        return "No certifications listed.".to_string();
    }
    let mut lines = vec![pal.label(pal.resume, "Certifications")];
    lines.extend(ctx.profile.certifications.iter().map(|c| pal.bullet(c)));
    lines.join("\n")
}

pub fn social(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    [
        pal.label(pal.resume, "Social"),
        format!("GitHub:   {}", ctx.profile.github),
        format!("LinkedIn: {}", ctx.profile.linkedin),
    ]
    .join("\n")
}

pub fn contact(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    [
        pal.label(pal.resume, "Contact"),
        format!("Email: {}", ctx.profile.email),
        format!("GitHub: {}", ctx.profile.github),
        format!("LinkedIn: {}", ctx.profile.linkedin),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;
    use crate::commands::tests::fixed_now;
    use crate::profile::Profile;
    use crate::theme::ThemeName;

    fn render(f: fn(&RenderContext<'_>) -> String, profile: &Profile) -> String {
        let ctx = RenderContext::new(profile, ThemeName::Dark, fixed_now());
        ansi::strip(&f(&ctx))
    }

    #[test]
    fn test_about_skips_empty_lines() {
        let mut profile = Profile::default();
        profile.hobbies.clear();
        let text = render(about, &profile);
        assert!(text.starts_with(&format!("{} \u{2014} {}", profile.name, profile.title)));
        assert!(!text.contains("Hobbies"));
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_skills_skip_empty_groups() {
        let mut profile = Profile::default();
        profile.skills[0].items.clear();
        let text = render(skills, &profile);
        assert!(!text.contains("Programming"));
        assert!(text.starts_with("Frontend\n  \u{2022} React"));
    }

    #[test]
    fn test_experience_layout() {
        let profile = Profile::default();
        let text = render(experience, &profile);
        let first = &profile.experience[0];
        assert!(text.contains(&format!(
            "{:<13} {} @ {}",
            first.period, first.role, first.company
        )));
    }

    #[test]
    fn test_certs_empty() {
        let mut profile = Profile::default();
        profile.certifications.clear();
        assert_eq!(render(certs, &profile), "No certifications listed.");
    }

    #[test]
    fn test_projects_without_url() {
        let profile = Profile::default();
        let text = render(projects, &profile);
        assert!(text.contains("Clause Annotator: Clause classification"));
        assert!(!text.contains("()"));
    }

    #[test]
    fn test_summary_uses_palette() {
        let profile = Profile::default();
        let ctx = RenderContext::new(&profile, ThemeName::Matrix, fixed_now());
        assert!(summary(&ctx).starts_with("\x1b[1;32mSummary\x1b[0m: "));
    }
}
