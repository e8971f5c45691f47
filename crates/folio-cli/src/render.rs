//! Terminal rendering of portfolio sections.
//!
//! Every function returns the finished block as a `String`; callers print it.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use folio_core::config::{Rgb, ThemeConfig};
use folio_core::list::ListController;
use folio_core::portfolio::{Certification, Education, Language, Profile, Skill, WorkExperience};
use folio_core::project::{
    EnrichedProject, ProjectCategory, empty_filter_message, project_count_label,
};
use folio_core::tunnel::{OnlineStatus, TunnelStatus};

/// Theme colours mapped onto terminal truecolor.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    primary: Rgb,
    accent: Rgb,
    muted: Rgb,
}

impl Palette {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Self {
            primary: theme.primary_rgb(),
            accent: theme.accent_rgb(),
            muted: theme.text_light_rgb(),
        }
    }

    fn paint(color: Rgb, text: &str) -> ColoredString {
        text.truecolor(color.r, color.g, color.b)
    }

    fn heading(&self, text: &str) -> ColoredString {
        Self::paint(self.primary, text).bold()
    }

    fn accent(&self, text: &str) -> ColoredString {
        Self::paint(self.accent, text)
    }

    fn muted(&self, text: &str) -> ColoredString {
        Self::paint(self.muted, text)
    }
}

/// `"Page 2 of 3  1 [2] 3"`, or `None` when the list fits on one page.
pub fn pagination<T>(list: &ListController<T>, palette: &Palette) -> Option<String> {
    if !list.show_pagination() {
        return None;
    }
    let numbers: Vec<String> = list
        .page_numbers()
        .map(|n| {
            if n == list.current_page() {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();
    let mut controls = Vec::new();
    if list.has_previous_page() {
        controls.push("< prev");
    }
    if list.has_next_page() {
        controls.push("next >");
    }
    Some(format!(
        "  {}  {}  {}",
        palette.muted(&format!(
            "Page {} of {}",
            list.current_page(),
            list.total_pages()
        )),
        numbers.join(" "),
        palette.muted(&controls.join(" "))
    ))
}

pub fn profile(profile: &Profile, palette: &Palette) -> String {
    let mut lines = vec![format!("{}", palette.heading(&profile.full_name))];
    if !profile.title.is_empty() {
        lines.push(format!("{}", palette.accent(&profile.title)));
    }
    let contact: Vec<&str> = [
        Some(profile.location.as_str()),
        Some(profile.email.as_str()),
        profile.phone.as_deref(),
        profile.website.as_deref(),
        profile.github_url.as_deref(),
        profile.linkedin_url.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|value| !value.is_empty())
    .collect();
    if !contact.is_empty() {
        lines.push(format!("{}", palette.muted(&contact.join(" | "))));
    }
    if !profile.description.is_empty() {
        lines.push(String::new());
        lines.push(profile.description.clone());
    }
    lines.join("\n") + "\n"
}

fn project(project: &EnrichedProject, phone: Option<&str>, palette: &Palette) -> Vec<String> {
    let p = &project.project;
    let mut title = format!("  {}", p.project_name.bold());
    if project.is_work_project() {
        title.push_str(&format!(" {}", "[Work]".red()));
    }
    if p.featured {
        title.push_str(&format!(" {}", palette.accent("*")));
    }

    let category = match p.category {
        ProjectCategory::Work => "work",
        ProjectCategory::Personal => "personal",
    };
    let mut badges = vec![p.project_type.as_str(), category];
    if let Some(client) = p.client_name.as_deref() {
        badges.push(client);
    }

    let mut lines = vec![
        title,
        format!("    {}", palette.muted(&badges.join(" · "))),
        format!(
            "    {}",
            p.description.as_deref().unwrap_or("No description available")
        ),
    ];
    if !p.technologies.is_empty() {
        lines.push(format!("    {}", palette.muted(&p.technologies.join(", "))));
    }

    let state = if p.is_ongoing { "Ongoing" } else { "Completed" };
    lines.push(format!("    {} ({})", palette.heading(&p.role), state));

    if project.is_tunnel_down() {
        let request = phone
            .and_then(|phone| project.tunnel_request_url(phone))
            .unwrap_or_default();
        lines.push(format!(
            "    {} {}",
            "Tunnel is down - request a start:".red(),
            request
        ));
    }
    if let Some(url) = project.web_url().filter(|_| project.is_personal_completed()) {
        lines.push(format!("    View site: {}", palette.accent(url)));
    }
    if let Some(github) = p.github_url.as_deref() {
        if project.is_work_project() {
            lines.push(format!("    Code: {} (private)", palette.muted(github)));
        } else {
            lines.push(format!("    Code: {}", github));
        }
    }
    lines
}

pub fn projects(
    list: &ListController<EnrichedProject>,
    phone: Option<&str>,
    palette: &Palette,
) -> String {
    let mut lines = vec![format!(
        "{} {}",
        palette.heading("Projects"),
        palette.muted(&format!("({})", project_count_label(list.filtered_len())))
    )];
    if list.is_filtering() {
        lines.push(format!("  filter: {}", palette.accent(list.active_filter())));
    }

    let visible = list.visible_items();
    if visible.is_empty() {
        lines.push(format!(
            "  {}",
            palette.muted(&empty_filter_message(list.active_filter()))
        ));
    }
    for item in visible {
        lines.extend(project(item, phone, palette));
        lines.push(String::new());
    }
    lines.extend(pagination(list, palette));
    lines.join("\n")
}

pub fn skills(category: &str, list: &ListController<Skill>, palette: &Palette) -> String {
    let mut lines = vec![format!("{}", palette.heading(category))];
    for skill in list.visible_items() {
        let level = skill.proficiency_level;
        let filled = usize::from(level.percent()) / 10;
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled));
        let mut line = format!(
            "  {:<20} {} {}",
            skill.skill_name,
            palette.accent(&bar),
            level.as_str()
        );
        if let Some(years) = skill.experience_label() {
            line.push_str(&format!(" {}", palette.muted(&format!("({})", years))));
        }
        lines.push(line);
    }
    lines.extend(pagination(list, palette));
    lines.join("\n") + "\n"
}

pub fn work_experiences(list: &ListController<WorkExperience>, palette: &Palette) -> String {
    let mut lines = vec![format!("{}", palette.heading("Work Experience"))];
    for work in list.visible_items() {
        lines.push(format!(
            "  {} @ {}",
            work.position.bold(),
            palette.accent(&work.company_name)
        ));
        let details: Vec<&str> = [work.employment_type.as_str(), work.location.as_str()]
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();
        lines.push(format!(
            "    {} {}",
            work.period_label(),
            palette.muted(&details.join(" · "))
        ));
        if let Some(description) = work.description.as_deref() {
            lines.push(format!("    {}", description));
        }
    }
    lines.extend(pagination(list, palette));
    lines.join("\n") + "\n"
}

pub fn educations(educations: &[Education], palette: &Palette) -> String {
    let mut lines = vec![format!("{}", palette.heading("Education"))];
    for education in educations {
        lines.push(format!(
            "  {} {}",
            education.degree.bold(),
            education.field_of_study
        ));
        lines.push(format!(
            "    {}  {} ({})",
            palette.accent(&education.institution_name),
            education.period_label(),
            education.status_label()
        ));
    }
    lines.join("\n") + "\n"
}

pub fn languages(languages: &[Language], palette: &Palette) -> String {
    let mut lines = vec![format!("{}", palette.heading("Languages"))];
    for language in languages {
        lines.push(format!(
            "  {:<20} {}",
            language.language_name,
            palette.muted(&format!("{:?}", language.proficiency_level))
        ));
    }
    lines.join("\n") + "\n"
}

pub fn certifications(certifications: &[Certification], today: NaiveDate, palette: &Palette) -> String {
    let mut lines = vec![format!("{}", palette.heading("Certifications"))];
    for cert in certifications {
        let mut line = format!(
            "  {} {} {}",
            cert.certification_name.bold(),
            palette.muted("by"),
            cert.issuing_organization
        );
        line.push_str(&format!("  {}", cert.issue_date.format("%b %Y")));
        if cert.is_expired(today) {
            line.push_str(&format!(" {}", "(expired)".red()));
        }
        lines.push(line);
        if let Some(url) = cert.credential_url.as_deref() {
            lines.push(format!("    {}", palette.muted(url)));
        }
    }
    lines.join("\n") + "\n"
}

pub fn tunnel_status(status: &TunnelStatus, palette: &Palette) -> String {
    let state = match status.online_status {
        OnlineStatus::Up => "up".green(),
        OnlineStatus::Down => "down".red(),
        OnlineStatus::Unknown => "unknown".yellow(),
    };
    let mut line = format!("{} {}", palette.heading(&status.id), state);
    if !status.web_url.is_empty() {
        line.push_str(&format!("  {}", palette.accent(&status.web_url)));
    }
    line
}
