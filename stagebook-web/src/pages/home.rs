//! Landing page

use super::layout;
use crate::flash::Flash;

pub fn home_page(flashes: &[Flash]) -> String {
    layout(
        "Home",
        flashes,
        r#"    <section class="hero">
        <h1>Stagebook</h1>
        <p>Find venues, discover artists, and book shows.</p>
        <div class="actions">
            <a class="button" href="/venues/create">Post a venue</a>
            <a class="button" href="/artists/create">Post an artist</a>
            <a class="button" href="/shows/create">Post a show</a>
        </div>
    </section>
"#,
    )
}
