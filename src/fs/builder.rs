//! Builds the virtual tree from profile data

use super::Directory;
use crate::ansi;
use crate::assets::{self, DRAGON_ART};
use crate::commands::{resume, RenderContext};
use crate::profile::{slug, Profile};

/// Hidden file; `tree` never lists it
pub const KEY_FILE: &str = ".ultraviolet.key";

/// Unlock token printed by the key file
pub const KEY_MARKER: &str = "unlock-theme ultraviolet";

const KEY_STEPS: &str = "Unlock steps:\n  \
1. Run: cat .ultraviolet.key (done).\n  \
2. Run: unlock-theme ultraviolet\n";

const README_HEAD: &str = "Terminal Portfolio (virtual FS)\n\n\
Common commands:\n  \
help        - list commands\n  \
neofetch    - system / profile summary\n  \
ls [path]   - list directory\n  \
tree [path] - recursive directory tree\n  \
cat <file>  - view file\n  \
cd / cd ..  - navigate\n  \
theme list  - list themes\n  \
theme set <name> - switch theme\n\n\
Key directories:\n  \
about/ summary/ skills/ experience/ projects/ certs/ education/ social/ contact/\n\
Skill categories contain <category>.txt.\n\
Projects each have project.txt inside their directory.\n\
Experience entries have details.txt.\n\
certs/ has certs.txt.\n";

const PROCRASTINATION: &str = "You could be doing anything else, but here you are, \
exploring a fake file system. Good for you.";

/// Build the root directory (`~`) for `profile`
pub fn build(profile: &Profile) -> Directory {
    Directory::new("")
        .with_file("readme.txt", |ctx| {
            format!(
                "{}\nProfile Summary:\n{}\n",
                README_HEAD,
                ansi::strip(&resume::summary(ctx))
            )
        })
        .with_dir(
            Directory::new("misc")
                .with_file("procrastination.txt", |_| PROCRASTINATION.to_string())
                .with_file("dragon.txt", |_| assets::art(DRAGON_ART)),
        )
        .with_dir(Directory::new("about").with_file("about.txt", resume::about))
        .with_dir(Directory::new("summary").with_file("summary.txt", resume::summary))
        .with_dir(skills_dir(profile))
        .with_dir(experience_dir(profile))
        .with_dir(Directory::new("education").with_file("education.txt", resume::education))
        .with_dir(projects_dir(profile))
        .with_dir(Directory::new("certs").with_file("certs.txt", |ctx| {
            ctx.profile.certifications.join("\n")
        }))
        .with_dir(
            Directory::new("social")
                .with_file("github.txt", |ctx| ctx.profile.github.clone())
                .with_file("linkedin.txt", |ctx| ctx.profile.linkedin.clone()),
        )
        .with_dir(
            Directory::new("contact").with_file("email.txt", |ctx| ctx.profile.email.clone()),
        )
}

fn skills_dir(profile: &Profile) -> Directory {
    let mut dir = Directory::new("skills");
    for group in &profile.skills {
        let key = group.key.clone();
        let items = group.items.clone();
        let file = format!("{}.txt", key);
        dir = dir.with_dir(
            Directory::new(key.clone())
                .with_file(&file, move |_| format!("# {}\n{}", key, items.join("\n"))),
        );
    }
    dir.with_file("skills.txt", |ctx: &RenderContext<'_>| {
        ctx.profile
            .skills
            .iter()
            .map(|g| format!("{}\n{}", g.key.to_uppercase(), g.items.join(", ")))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

fn experience_dir(profile: &Profile) -> Directory {
    let mut dir = Directory::new("experience");
    for exp in &profile.experience {
        let details = format!(
            "{} @ {}\n{}\n\n{}",
            exp.role,
            exp.company,
            exp.period,
            exp.note.as_deref().unwrap_or("")
        );
        dir = dir.with_dir(
            Directory::new(slug(&exp.company)).with_file("details.txt", move |_| details.clone()),
        );
    }
    dir.with_file("experience.txt", |ctx: &RenderContext<'_>| {
        ctx.profile
            .experience
            .iter()
            .map(|e| format!("{} - {} - {}", e.period, e.company, e.role))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn projects_dir(profile: &Profile) -> Directory {
    let key_slug = profile
        .projects
        .iter()
        .map(|p| slug(&p.name))
        .find(|s| *s == profile.key_project)
        .or_else(|| profile.projects.first().map(|p| slug(&p.name)));

    let mut dir = Directory::new("projects");
    for project in &profile.projects {
        let name = slug(&project.name);
        let text = format!(
            "{}\n{}\n{}",
            project.name,
            project.desc,
            project.url.as_deref().unwrap_or("")
        );
        let mut project_dir =
            Directory::new(name.clone()).with_file("project.txt", move |_| text.clone());
        if key_slug.as_deref() == Some(name.as_str()) {
            let key_text = format!(
                "You found a luminous shard in {}.\n\n{}\nToken: {}\n",
                project.name, KEY_STEPS, KEY_MARKER
            );
            project_dir = project_dir.with_file(KEY_FILE, move |_| key_text.clone());
        }
        dir = dir.with_dir(project_dir);
    }
    dir.with_file("projects.txt", |ctx: &RenderContext<'_>| {
        ctx.profile
            .projects
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    })
}
