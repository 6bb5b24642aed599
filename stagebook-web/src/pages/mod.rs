//! Server-rendered HTML pages
//!
//! Handlers collect plain data and hand it to the page functions here, which
//! return complete documents. Every interpolated value goes through
//! [`escape`].

pub mod artists;
pub mod errors;
pub mod home;
pub mod shows;
pub mod venues;
pub mod widgets;

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDateTime;
use stagebook_common::datetime::render_datetime;
use stagebook_common::db::Summary;
use stagebook_common::DateFormat;

use crate::flash::{Flash, PendingFlashes, CLEAR_FLASH_COOKIE};

/// Rendered page plus whether the flash cookie must be expired
#[derive(Debug)]
pub struct HtmlPage {
    status: StatusCode,
    body: String,
    clear_flash: bool,
}

impl HtmlPage {
    pub fn ok(body: String) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: String) -> Self {
        Self {
            status,
            body,
            clear_flash: false,
        }
    }

    /// Expire the flash cookie if this request carried one
    pub fn consuming(mut self, pending: &PendingFlashes) -> Self {
        self.clear_flash = pending.needs_clearing();
        self
    }
}

impl IntoResponse for HtmlPage {
    fn into_response(self) -> Response {
        let mut response = (self.status, Html(self.body)).into_response();
        if self.clear_flash {
            response
                .headers_mut()
                .insert(SET_COOKIE, HeaderValue::from_static(CLEAR_FLASH_COOKIE));
        }
        response
    }
}

/// Create or edit, with the record id when editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Escape text for HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Full document around `content`
pub fn layout(title: &str, flashes: &[Flash], content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Stagebook</title>
    <link rel="stylesheet" href="/static/stagebook.css">
</head>
<body>
    <header>
        <nav>
            <a class="brand" href="/">Stagebook</a>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
            <a href="/shows/create">Post a show</a>
            <form class="search" method="post" action="/venues/search">
                <input type="search" name="search_term" placeholder="Find a venue" aria-label="Search venues">
            </form>
            <form class="search" method="post" action="/artists/search">
                <input type="search" name="search_term" placeholder="Find an artist" aria-label="Search artists">
            </form>
        </nav>
    </header>
    <main class="container">
{flashes}{content}
    </main>
</body>
</html>
"#,
        title = escape(title),
        flashes = render_flashes(flashes),
        content = content,
    )
}

fn render_flashes(flashes: &[Flash]) -> String {
    if flashes.is_empty() {
        return String::new();
    }

    let items: String = flashes
        .iter()
        .map(|f| {
            format!(
                "        <li class=\"flash {}\">{}</li>\n",
                f.category.css_class(),
                escape(&f.message)
            )
        })
        .collect();
    format!("        <ul class=\"flashes\">\n{}        </ul>\n", items)
}

/// `<img>` tag, or a placeholder block when there is no image
pub(crate) fn image(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(src) => format!(
            r#"<img class="thumb" src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        ),
        None => r#"<div class="thumb placeholder"></div>"#.to_string(),
    }
}

/// Card linking to one side of a show, with its start time
pub(crate) fn show_card(
    href: &str,
    name: &str,
    image_link: Option<&str>,
    start_time: &NaiveDateTime,
) -> String {
    format!(
        r#"            <div class="show-card">
                {image}
                <a href="{href}">{name}</a>
                <time datetime="{iso}">{when}</time>
            </div>
"#,
        image = image(image_link, name),
        href = escape(href),
        name = escape(name),
        iso = start_time.format("%Y-%m-%dT%H:%M:%S"),
        when = escape(&render_datetime(start_time, DateFormat::Full)),
    )
}

/// Upcoming/past section of a detail page
pub(crate) fn show_section(heading: &str, count: usize, cards: &[String]) -> String {
    let body = if cards.is_empty() {
        "            <p class=\"empty\">None.</p>\n".to_string()
    } else {
        cards.concat()
    };
    format!(
        "    <section class=\"shows\">\n        <h2>{} {}</h2>\n        <div class=\"show-grid\">\n{}        </div>\n    </section>\n",
        count,
        escape(heading),
        body
    )
}

/// Genre tags
pub(crate) fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Linked list item for a venue or artist with its upcoming show count
pub(crate) fn summary_item(base_path: &str, summary: &Summary) -> String {
    format!(
        "            <li><a href=\"{}/{}\"><span class=\"name\">{}</span> <span class=\"count\">{} upcoming shows</span></a></li>\n",
        base_path,
        summary.id,
        escape(&summary.name),
        summary.num_upcoming_shows
    )
}

/// Search results page shared by venues and artists
pub fn search_results_page(
    title: &str,
    base_path: &str,
    search_term: &str,
    results: &[Summary],
    flashes: &[Flash],
) -> String {
    let items: String = results
        .iter()
        .map(|summary| summary_item(base_path, summary))
        .collect();

    let content = format!(
        r#"    <h1>{title}</h1>
    <h3 class="search-count">Number of search results for "{term}": {count}</h3>
    <ul class="items">
{items}    </ul>
"#,
        title = escape(title),
        term = escape(search_term),
        count = results.len(),
        items = items,
    );

    layout(title, flashes, &content)
}
