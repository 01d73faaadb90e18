//! Built-in page templates
//!
//! All pages are embedded directly in the binary and rendered by plain
//! string substitution over `{{ name }}` placeholders. Entry titles and
//! bodies are interpolated verbatim - nothing is HTML-escaped, so markup
//! in an entry ends up in the page as-is.

/// Substitute `{{ name }}` placeholders in a template.
///
/// Pairs are applied in order; callers substitute the entry body last so
/// placeholder-shaped text inside it is left alone.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{ {} }}}}", name), value);
    }
    out
}

/// A single published entry page, written under the entries directory
pub const ENTRY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="{{ language }}" data-theme="{{ theme }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="../assets/styles.css">
</head>
<body>
    <button id="theme-toggle" aria-label="Toggle theme"></button>

    <header>
        <h1>{{ site_title }}</h1>
        <nav>
            <a href="../index.html">Home</a>
            <a href="../archive.html">Archive</a>
        </nav>
    </header>

    <main>
        <article class="entry">
            <div class="entry-date">{{ date }}</div>
            <h2 class="entry-title">{{ title }}</h2>
            <div class="entry-content">{{ content }}</div>
        </article>
    </main>

    <footer>
        <p>&copy; {{ year }} {{ author }}. All rights reserved.</p>
    </footer>

    <script>
        document.getElementById('theme-toggle').addEventListener('click', () => {
            const html = document.documentElement;
            const currentTheme = html.getAttribute('data-theme');
            const newTheme = currentTheme === 'light' ? 'dark' : 'light';
            html.setAttribute('data-theme', newTheme);
            localStorage.setItem('theme', newTheme);
        });

        const savedTheme = localStorage.getItem('theme') || '{{ theme }}';
        document.documentElement.setAttribute('data-theme', savedTheme);
    </script>
</body>
</html>
"#;

/// The homepage, showing only the most recent entry
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="{{ language }}" data-theme="{{ theme }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ site_title }}</title>
    <link rel="stylesheet" href="assets/styles.css">
</head>
<body>
    <button id="theme-toggle" aria-label="Toggle theme"></button>

    <header>
        <h1>{{ site_title }}</h1>
        <nav>
            <a href="index.html">Home</a>
            <a href="archive.html">Archive</a>
        </nav>
    </header>

    <main>
        <article class="entry">
            <div class="entry-date">{{ date }}</div>
            <h2 class="entry-title">{{ title }}</h2>
            <div class="entry-content">{{ content }}</div>
        </article>
    </main>

    <footer>
        <p>&copy; {{ year }} {{ author }}. All rights reserved.</p>
    </footer>

    <script>
        document.getElementById('theme-toggle').addEventListener('click', () => {
            const html = document.documentElement;
            const currentTheme = html.getAttribute('data-theme');
            const newTheme = currentTheme === 'light' ? 'dark' : 'light';
            html.setAttribute('data-theme', newTheme);
            localStorage.setItem('theme', newTheme);
        });

        const savedTheme = localStorage.getItem('theme') || '{{ theme }}';
        document.documentElement.setAttribute('data-theme', savedTheme);
    </script>
</body>
</html>
"#;

/// The archive page, listing every entry by date and linked title
pub const ARCHIVE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="{{ language }}" data-theme="{{ theme }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Archive - {{ site_title }}</title>
    <link rel="stylesheet" href="assets/styles.css">
</head>
<body>
    <button id="theme-toggle" aria-label="Toggle theme"></button>

    <header>
        <h1>{{ site_title }}</h1>
        <nav>
            <a href="index.html">Home</a>
            <a href="archive.html">Archive</a>
        </nav>
    </header>

    <main>
        <ul class="archive-list">
{{ items }}        </ul>
    </main>

    <footer>
        <p>&copy; {{ year }} {{ author }}. All rights reserved.</p>
    </footer>

    <script>
        document.getElementById('theme-toggle').addEventListener('click', () => {
            const html = document.documentElement;
            const currentTheme = html.getAttribute('data-theme');
            const newTheme = currentTheme === 'light' ? 'dark' : 'light';
            html.setAttribute('data-theme', newTheme);
            localStorage.setItem('theme', newTheme);
        });

        const savedTheme = localStorage.getItem('theme') || '{{ theme }}';
        document.documentElement.setAttribute('data-theme', savedTheme);
    </script>
</body>
</html>
"#;

/// One list item on the archive page
pub const ARCHIVE_ITEM: &str = r#"            <li class="archive-item">
                <span class="entry-date">{{ date }}</span>
                <a href="entries/{{ slug }}.html" class="archive-title">{{ title }}</a>
            </li>
"#;

/// The shared stylesheet, written to the assets directory once
pub const STYLESHEET: &str = r#":root[data-theme="light"] {
    --background: #fafafa;
    --card-background: white;
    --text: #333;
    --text-muted: #666;
    --border: #eee;
    --border-muted: #ddd;
    --toggle-icon: "\263e";
}

:root[data-theme="dark"] {
    --background: #1a1a1a;
    --card-background: #2a2a2a;
    --text: #e0e0e0;
    --text-muted: #999;
    --border: #3a3a3a;
    --border-muted: #404040;
    --toggle-icon: "\263c";
}

body {
    font-family: "Georgia", serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
    background: var(--background);
    color: var(--text);
    transition: background-color 0.3s ease, color 0.3s ease;
}

header {
    margin-bottom: 2rem;
}

h1 {
    font-size: 2rem;
    font-weight: normal;
    margin: 0;
    margin-bottom: 1rem;
}

nav {
    margin-bottom: 2rem;
}

nav a {
    color: var(--text);
    text-decoration: none;
    margin-right: 1rem;
}

nav a:hover {
    text-decoration: underline;
}

.entry {
    margin-bottom: 3rem;
}

.entry-date {
    color: var(--text-muted);
    font-size: 0.9rem;
    margin-bottom: 0.5rem;
}

.entry-title {
    font-size: 1.5rem;
    font-weight: normal;
    margin-bottom: 1rem;
    color: var(--text);
}

.entry-content {
    margin: 0;
    line-height: 1.8;
    white-space: pre-wrap;
}

footer {
    margin-top: 3rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border-muted);
    color: var(--text-muted);
    font-size: 0.9rem;
    text-align: center;
}

#theme-toggle {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: var(--text-muted);
    cursor: pointer;
    font-size: 1.2rem;
    padding: 0.5rem;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    transition: all 0.3s ease;
    opacity: 0.7;
}

#theme-toggle:hover {
    opacity: 1;
    background: var(--border);
}

#theme-toggle::after {
    content: var(--toggle-icon);
}

.archive-list {
    list-style: none;
    padding: 0;
}

.archive-item {
    margin-bottom: 1rem;
    display: flex;
    align-items: baseline;
}

.archive-item .entry-date {
    margin-bottom: 0;
    margin-right: 1rem;
}

.archive-title {
    color: var(--text);
    text-decoration: none;
}

.archive-title:hover {
    text-decoration: underline;
}
"#;
