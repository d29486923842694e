//! `neofetch`: ASCII art beside a profile/system summary

use chrono::{Datelike, NaiveDate};

use super::RenderContext;
use crate::assets::{self, NEOFETCH_ART};

const GAP: &str = "    ";

/// Age since `birth` as `<y>y <d>d (≈<n> days)`
pub fn uptime(birth: NaiveDate, today: NaiveDate) -> String {
    let had_birthday = (today.month(), today.day()) >= (birth.month(), birth.day());
    let mut years = today.year() - birth.year();
    if !had_birthday {
        years -= 1;
    }
    let last_year = if had_birthday {
        today.year()
    } else {
        today.year() - 1
    };
    // Feb 29 birthdays roll over to Mar 1 in common years
    let last_birthday = NaiveDate::from_ymd_opt(last_year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(last_year, 3, 1))
        .unwrap_or(today);

    let since_birthday = (today - last_birthday).num_days();
    let total = (today - birth).num_days();
    format!("{}y {}d (\u{2248}{} days)", years, since_birthday, total)
}

pub fn neofetch(ctx: &RenderContext<'_>) -> String {
    let p = ctx.profile;
    let pal = &ctx.palette;
    let personal = |label: &str| pal.label(pal.personal, label);
    let system = |label: &str| pal.label(pal.system, label);

    let info = [
        format!("{}:      {}", personal("Name"), p.name),
        format!("{}:     {}", personal("Title"), p.title),
        format!("{}:  {}", personal("Location"), p.location),
        format!("{}:     {}", personal("Email"), p.email),
        format!("{}:    {}", personal("GitHub"), p.github),
        format!("{}:  {}", personal("LinkedIn"), p.linkedin),
        String::new(),
        format!("{}:        Terminal (emulated)", system("OS")),
        format!("{}:      {}", system("Host"), p.host),
        format!("{}:     bash (emulated)", system("Shell")),
        format!("{}:  termfolio", system("Terminal")),
        format!("{}:     {}", system("Theme"), ctx.theme),
        format!("{}:       Brain", system("CPU")),
        format!(
            "{}:    {}",
            system("Uptime"),
            uptime(p.birthdate, ctx.now.date_naive())
        ),
    ];

    let art = assets::art_lines(NEOFETCH_ART);
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = art.len().max(info.len());

    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let art_line = art.get(i).copied().unwrap_or("");
        match info.get(i).filter(|line| !line.is_empty()) {
            Some(line) => out.push(format!("{:<width$}{}{}", art_line, GAP, line, width = width)),
            None => out.push(art_line.to_string()),
        }
    }
    out.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;
    use crate::commands::tests::fixed_now;
    use crate::profile::Profile;
    use crate::theme::ThemeName;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_uptime_after_birthday() {
        assert_eq!(uptime(date(2000, 1, 1), date(2001, 1, 2)), "1y 1d (\u{2248}367 days)");
    }

    #[test]
    fn test_uptime_before_birthday() {
        assert_eq!(
            uptime(date(2001, 11, 24), date(2026, 10, 18)),
            format!("24y 328d (\u{2248}{} days)", (date(2026, 10, 18) - date(2001, 11, 24)).num_days())
        );
    }

    #[test]
    fn test_uptime_on_birthday() {
        assert!(uptime(date(2000, 5, 5), date(2010, 5, 5)).starts_with("10y 0d"));
    }

    #[test]
    fn test_neofetch_aligns_info_with_art() {
        let profile = Profile::default();
        let ctx = RenderContext::new(&profile, ThemeName::Solarized, fixed_now());
        let text = ansi::strip(&neofetch(&ctx));
        assert!(text.ends_with('\n'));

        let art = assets::art_lines(NEOFETCH_ART);
        let width = art.iter().map(|l| l.chars().count()).max().unwrap();
        let first = text.lines().next().unwrap();
        let name_col = first.find("Name:").unwrap();
        assert_eq!(first[..name_col].chars().count(), width + GAP.len());
        assert!(text.contains("Theme:     solarized"));
        assert!(text.contains(&format!("Host:      {}", profile.host)));
    }
}
