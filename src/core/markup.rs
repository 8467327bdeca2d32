use super::content::{Content, Identity, SkillIcon};
use super::form::ContactForm;
use super::panel::{Ephemeral, PanelId};
use super::projects::categories;
use std::fmt::Write;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn panel_icon(id: PanelId) -> &'static str {
    match id {
        PanelId::About => "icon-user",
        PanelId::Projects => "icon-layers",
        PanelId::Stack => "icon-cpu",
        PanelId::Contact => "icon-send",
    }
}

/// Centre title block: one line per name word, then the role.
pub fn hero(identity: &Identity) -> String {
    let mut html = String::from("<div class='hero-glow'></div><h2 class='hero-name'>");
    for word in identity.name.split_whitespace() {
        _ = write!(html, "<span>{}</span>", escape_html(word));
    }
    _ = write!(
        html,
        "</h2><div class='hero-role'><i></i><p>{}</p><i></i></div>",
        escape_html(identity.role)
    );
    html
}

/// Collapsed face of a panel: icon plus hover label.
pub fn panel_face(id: PanelId) -> String {
    format!(
        "<div class='shard-face'><span class='icon {}'></span><span class='shard-label'>{}</span></div>",
        panel_icon(id),
        id.as_str()
    )
}

/// Expanded body of `id`, rendered from the current ephemeral state.
pub fn panel_body(id: PanelId, content: &Content, eph: &Ephemeral, current_year: i32) -> String {
    let mut html = format!(
        "<header class='panel-head'><div class='panel-title'><span class='icon {}'></span><h2>{}</h2></div>\
         <button type='button' class='panel-close' data-action='close' aria-label='Close'>&times;</button></header>\
         <div class='panel-scroll custom-scrollbar'>",
        panel_icon(id),
        id.as_str()
    );
    match id {
        PanelId::About => html.push_str(&about_body(content, current_year)),
        PanelId::Projects => html.push_str(&projects_grid(content, eph.filter.selected())),
        PanelId::Stack => html.push_str(&stack_body(content)),
        PanelId::Contact => html.push_str(&contact_body(content, eph)),
    }
    html.push_str("</div>");
    html
}

fn about_body(content: &Content, current_year: i32) -> String {
    let about = &content.about;
    let mut html = String::from("<div class='about'><div class='about-text'><p class='headline'>");
    let parts = about.headline_parts();
    for (i, part) in parts.iter().enumerate() {
        html.push_str(&escape_html(part));
        if i + 1 < parts.len() {
            html.push_str(" <span class='accent'>&amp;</span><br/>");
        }
    }
    html.push_str("</p>");
    for para in about.bio {
        _ = write!(html, "<p>{}</p>", escape_html(para));
    }
    _ = write!(
        html,
        "<div class='stats'><div><div class='stat-value'>{}</div><div class='stat-label'>Years Exp</div></div>\
         <div><div class='stat-value'>{}</div><div class='stat-label'>Projects</div></div></div></div>\
         <div class='portrait'><img src='{}' alt='Profile'/></div></div>",
        content.stats.years_experience(current_year),
        escape_html(content.stats.completed_projects),
        escape_html(about.portrait)
    );
    html
}

/// Category bar plus the cards visible under `selected`.
pub fn projects_grid(content: &Content, selected: &str) -> String {
    let mut html = String::from("<div class='projects'><div class='filter-bar'>");
    for cat in categories(content.projects) {
        let class = if cat == selected { "filter is-selected" } else { "filter" };
        let cat = escape_html(cat);
        _ = write!(
            html,
            "<button type='button' class='{}' data-action='filter' data-category='{}'>{}</button>",
            class, cat, cat
        );
    }
    html.push_str("</div><div class='project-grid'>");
    for p in super::projects::filter_projects(content.projects, selected) {
        _ = write!(
            html,
            "<a class='project-card' data-project='{}' href='{}'><span class='tag'>{}</span><h3>{}</h3><p>{}</p><div class='tech'>",
            escape_html(p.id),
            escape_html(p.link),
            escape_html(p.category),
            escape_html(p.title),
            escape_html(p.desc)
        );
        for t in p.tech {
            _ = write!(html, "<span>{}</span>", escape_html(t));
        }
        html.push_str("</div></a>");
    }
    html.push_str("</div></div>");
    html
}

fn stack_body(content: &Content) -> String {
    let mut html = String::from("<div class='stack-grid'>");
    for skill in content.stack {
        _ = write!(
            html,
            "<div class='skill'><span class='icon {}'></span><span>{}</span></div>",
            SkillIcon::for_skill(skill).css_class(),
            escape_html(skill)
        );
    }
    html.push_str("</div>");
    html
}

fn contact_body(content: &Content, eph: &Ephemeral) -> String {
    let form = &eph.form;
    let disabled = if form.inputs_enabled() { "" } else { " disabled" };
    format!(
        "<div class='contact'><div class='contact-intro'><h3>Init Signal<br/><span class='accent'>Collaborate</span></h3>\
         <p>Reach out for project inquiries or to talk about shader engineering.</p>\
         <button type='button' class='copy-email' data-action='copy-email'><span class='icon icon-mail'></span>\
         <span class='email'>{email}</span><span id='copy-state' class='icon {copy}'></span></button>\
         <nav class='socials'><a href='{github}'>GitHub</a><a href='{linkedin}'>LinkedIn</a><a href='{twitter}'>Twitter</a></nav></div>\
         <form id='contact-form' class='contact-form' novalidate>\
         <input id='contact-name' type='text' placeholder='NAME' value='{name}'{disabled}/>\
         <textarea id='contact-message' rows='4' placeholder='MESSAGE...'{disabled}>{message}</textarea>\
         <button id='contact-submit' type='submit' class='{status_class}'{disabled}>{label}</button>\
         </form></div>",
        email = escape_html(content.identity.email),
        copy = copy_icon(eph.copied.shown()),
        github = escape_html(content.identity.socials.github),
        linkedin = escape_html(content.identity.socials.linkedin),
        twitter = escape_html(content.identity.socials.twitter),
        name = escape_html(form.name()),
        message = escape_html(form.message()),
        disabled = disabled,
        status_class = form.status().css_class(),
        label = form.status().button_label(),
    )
}

pub fn copy_icon(copied: bool) -> &'static str {
    if copied {
        "icon-check"
    } else {
        "icon-copy"
    }
}

/// Submit button text and class for `form`, used when only the controls change.
pub fn submit_state(form: &ContactForm) -> (&'static str, &'static str) {
    (form.status().button_label(), form.status().css_class())
}
