//! Restricted Markdown rendering.
//!
//! Content folders carry article text in a deliberately small Markdown
//! subset: headings with one to three `#`, unordered lists with `- `, and
//! blank-line-delimited paragraphs. Anything else is a paragraph. The
//! renderer escapes every piece of text it emits, so article sources can
//! never inject raw HTML into generated pages.
//!
//! A general-purpose Markdown engine is the wrong tool here: it would pass
//! inline HTML through verbatim and render constructs (emphasis, links,
//! code spans) that the site's prose styles don't account for. The whole
//! grammar fits in a single line-by-line pass with one piece of state, the
//! open list.

/// Escape `&`, `<`, `>` and `"` for safe embedding in HTML text content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert restricted Markdown to an HTML fragment.
///
/// Pure function: no I/O, no state between calls. Consecutive list items
/// group into one `<ul>`; a blank or non-list line closes the open list,
/// and the list is always closed before returning. Blocks are separated by
/// newlines and the result carries no trailing newline.
pub fn to_html(md: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for raw in md.lines() {
        let line = raw.trim_end();

        if line.trim().is_empty() {
            close_list(&mut html, &mut in_list);
            continue;
        }

        if let Some((level, text)) = heading(line) {
            close_list(&mut html, &mut in_list);
            html.push_str(&format!("<h{level}>{}</h{level}>\n", escape_html(text)));
            continue;
        }

        if let Some(text) = list_item(line) {
            if !in_list {
                html.push_str("<ul>\n");
                in_list = true;
            }
            html.push_str(&format!("<li>{}</li>\n", escape_html(text)));
            continue;
        }

        close_list(&mut html, &mut in_list);
        html.push_str(&format!("<p>{}</p>\n", escape_html(line)));
    }

    close_list(&mut html, &mut in_list);
    html.trim().to_string()
}

fn close_list(html: &mut String, in_list: &mut bool) {
    if *in_list {
        html.push_str("</ul>\n");
        *in_list = false;
    }
}

/// Parse a heading line: one to three `#` followed by whitespace.
///
/// Four or more hashes are not a heading and fall through to a paragraph.
fn heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    let text = rest.trim_start();
    if text.len() == rest.len() {
        // No whitespace after the hashes ("#tag" is prose, not a heading)
        return None;
    }
    Some((hashes, text))
}

/// Parse a list item line: `-` followed by whitespace.
fn list_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('-')?;
    let text = rest.trim_start();
    (text.len() < rest.len()).then_some(text)
}
