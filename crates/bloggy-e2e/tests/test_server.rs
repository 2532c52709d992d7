// Test Server - local stand-in for the Bloggy application
//
// Serves one single-page shell for every path. The shell renders the parts of
// Bloggy the page object talks to (header, login panel, home search, blog
// detail, admin dashboard, composer, delete dialog) with the same markup
// shape as the real MUI client, so the locator catalogs resolve unchanged.
// State (blogs, login, theme) lives in localStorage, so each browser context
// starts from the seeded corpus.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Response, StatusCode, header},
};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Credentials the stub accepts
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Title of the published blog every fresh context starts with
pub const SEEDED_TITLE: &str = "Getting Started with TypeScript";

/// Test server handle
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the test server on a random available port
    pub async fn start() -> Self {
        let app = Router::new().fallback(app_shell);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        TestServer { addr, handle }
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the test server
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

async fn app_shell() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(APP_SHELL))
        .unwrap()
}

const APP_SHELL: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Bloggy</title>
  <style>
    body.dark { background: #121212; color: #eee; }
    header { display: flex; gap: 12px; align-items: center; padding: 8px; }
    [aria-haspopup='listbox'] { display: block; min-height: 24px; min-width: 240px; border: 1px solid #999; }
    .ql-editor { min-height: 80px; border: 1px solid #999; }
    .MuiCard-root { border: 1px solid #ccc; margin: 8px; padding: 8px; }
    .MuiPopover-root ul { position: fixed; top: 160px; left: 320px; z-index: 11; background: #fff;
                          color: #000; list-style: none; margin: 0; padding: 4px; border: 1px solid #999; }
    .MuiBackdrop-root { position: fixed; inset: 0; z-index: 10; }
    div[role='dialog'] { position: fixed; top: 100px; left: 100px; z-index: 20; background: #fff;
                         color: #000; border: 1px solid #333; padding: 16px; }
  </style>
</head>
<body class="light">
  <header></header>
  <main></main>
  <script>
    const KEYS = { blogs: 'bloggy.blogs', auth: 'bloggy.auth', theme: 'bloggy.theme' };
    const CATEGORIES = ['Technology', 'Programming', 'Web Development', 'Design', 'Business', 'Lifestyle', 'Other'];
    const TAGS = ['JavaScript', 'Java', 'TypeScript', 'React', 'Node.js', 'Python', 'Tutorial', 'Guide', 'News'];

    function loadBlogs() {
      const raw = localStorage.getItem(KEYS.blogs);
      if (raw) return JSON.parse(raw);
      const seed = [{
        id: 1, title: 'Getting Started with TypeScript', excerpt: 'Type-safe JavaScript from the ground up',
        content: 'TypeScript adds static types to JavaScript.', category: 'Programming',
        tags: ['TypeScript', 'Tutorial'], status: 'published', created: 1
      }];
      saveBlogs(seed);
      return seed;
    }
    function saveBlogs(blogs) { localStorage.setItem(KEYS.blogs, JSON.stringify(blogs)); }
    function newestFirst(blogs) { return blogs.slice().sort((a, b) => b.created - a.created); }
    const loggedIn = () => localStorage.getItem(KEYS.auth) === '1';
    const isDark = () => localStorage.getItem(KEYS.theme) === 'dark';
    function esc(text) { const d = document.createElement('div'); d.textContent = text; return d.innerHTML; }
    function go(path) { location.href = path; }

    // Lists are "fetched": a progress indicator shows before they render.
    function withLoading(main, render) {
      main.innerHTML = '<div role="progressbar">Loading...</div>';
      setTimeout(() => render(main), 150);
    }

    function renderHeader() {
      const header = document.querySelector('header');
      header.innerHTML = '<a href="/">Bloggy</a>'
        + '<button id="theme-toggle" title="' + (isDark() ? 'Switch to light mode' : 'Switch to dark mode') + '">&#9680;</button>'
        + (loggedIn()
          ? '<a href="/admin">Dashboard</a><button id="logout">Logout</button>'
          : '<a href="/login">Admin Login</a>');
      document.body.className = isDark() ? 'dark' : 'light';
      header.querySelector('#theme-toggle').onclick = () => {
        localStorage.setItem(KEYS.theme, isDark() ? 'light' : 'dark');
        renderHeader();
      };
      const logout = header.querySelector('#logout');
      if (logout) logout.onclick = () => { localStorage.removeItem(KEYS.auth); go('/'); };
    }

    function renderHome(main) {
      main.innerHTML = '<input type="text" placeholder="Search blogs..."><div id="results"></div>';
      const input = main.querySelector('input');
      const draw = () => {
        const term = input.value.trim().toLowerCase();
        const hits = newestFirst(loadBlogs()).filter(b => b.status === 'published'
          && (b.title.toLowerCase().includes(term) || b.excerpt.toLowerCase().includes(term)));
        const results = main.querySelector('#results');
        results.innerHTML = hits.length
          ? hits.map(b => '<div class="MuiCard-root"><h2>' + esc(b.title) + '</h2><p>' + esc(b.excerpt)
              + '</p><button data-id="' + b.id + '">Read More</button></div>').join('')
          : '<h6>No blogs found</h6>';
        results.querySelectorAll('button[data-id]').forEach(btn => {
          btn.onclick = () => go('/blog/' + btn.dataset.id);
        });
      };
      input.addEventListener('input', draw);
      draw();
    }

    function renderDetail(main, id) {
      const blog = loadBlogs().find(b => String(b.id) === id && b.status === 'published');
      main.innerHTML = blog
        ? '<article><h1>' + esc(blog.title) + '</h1><div>' + esc(blog.content) + '</div></article>'
        : '<h1>Blog not found</h1>';
    }

    function renderLogin(main) {
      if (loggedIn()) return go('/admin');
      main.innerHTML = '<div id="auth-tabpanel-0" role="tabpanel"><div><form>'
        + '<input name="username" type="text" placeholder="Username">'
        + '<input name="password" type="password" placeholder="Password">'
        + '<button type="submit">Login</button>'
        + '</form></div><p id="auth-error"></p></div>';
      main.querySelector('form').onsubmit = (event) => {
        event.preventDefault();
        const username = main.querySelector("input[name='username']").value;
        const password = main.querySelector("input[name='password']").value;
        setTimeout(() => {
          if (username === 'admin' && password === 'admin123') {
            localStorage.setItem(KEYS.auth, '1');
            go('/admin');
          } else {
            main.querySelector('#auth-error').textContent = 'Invalid credentials';
          }
        }, 100);
      };
    }

    function renderDashboard(main) {
      if (!loggedIn()) return go('/login');
      const rows = newestFirst(loadBlogs()).map(b => '<tr><td>' + esc(b.title) + '</td><td>' + esc(b.category)
        + '</td><td><span class="MuiChip-root"><span class="MuiChip-label">' + b.status + '</span></span></td>'
        + '<td><button title="Delete" data-id="' + b.id + '">&#10005;</button></td></tr>').join('');
      main.innerHTML = '<h1>Blog Management</h1><button id="new-post">New Blog Post</button>'
        + '<table><thead><tr><th>Title</th><th>Category</th><th>Status</th><th>Actions</th></tr></thead>'
        + '<tbody>' + rows + '</tbody></table><div id="dialog-root"></div>';
      main.querySelector('#new-post').onclick = () => go('/admin/blog/new');
      main.querySelectorAll("button[title='Delete']").forEach(btn => {
        btn.onclick = () => openDeleteDialog(main, Number(btn.dataset.id));
      });
    }

    function openDeleteDialog(main, id) {
      const root = main.querySelector('#dialog-root');
      root.innerHTML = '<div role="dialog"><p>Are you sure you want to delete this blog post?</p>'
        + '<button id="cancel-delete">Cancel</button>'
        + '<button data-testid="confirm-delete-button">Delete</button></div>';
      root.querySelector('#cancel-delete').onclick = () => { root.innerHTML = ''; };
      root.querySelector("[data-testid='confirm-delete-button']").onclick = () => {
        saveBlogs(loadBlogs().filter(b => b.id !== id));
        withLoading(main, renderDashboard);
      };
    }

    function openPicker(anchor, options, multiple, selected, onChange) {
      const popover = document.createElement('div');
      popover.className = 'MuiPopover-root';
      popover.innerHTML = '<div class="MuiBackdrop-root"></div><ul role="listbox">'
        + options.map(o => '<li role="option" aria-selected="' + selected().includes(o) + '">' + esc(o) + '</li>').join('')
        + '</ul>';
      document.body.appendChild(popover);
      popover.querySelector('.MuiBackdrop-root').onclick = () => popover.remove();
      popover.querySelectorAll('li').forEach(li => {
        li.onclick = () => {
          onChange(li.textContent);
          if (multiple) {
            li.setAttribute('aria-selected', String(selected().includes(li.textContent)));
          } else {
            popover.remove();
          }
        };
      });
    }

    function renderComposer(main) {
      if (!loggedIn()) return go('/login');
      const draft = { category: '', tags: [] };
      main.innerHTML = '<h1>Create New Blog Post</h1><form>'
        + '<div class="MuiTextField-root"><label for="f-title">Title</label><input id="f-title" type="text"></div>'
        + '<div class="MuiTextField-root"><label for="f-excerpt">Excerpt</label><textarea id="f-excerpt"></textarea>'
        + '<textarea aria-hidden="true" readonly tabindex="-1" style="visibility:hidden;position:absolute;height:0"></textarea></div>'
        + '<div class="ql-container"><div class="ql-editor" contenteditable="true"></div></div>'
        + '<div class="MuiFormControl-root"><label>Category</label><div role="button" aria-haspopup="listbox" id="f-category"></div></div>'
        + '<div class="MuiFormControl-root"><label>Tags</label><div role="button" aria-haspopup="listbox" id="f-tags"></div></div>'
        + '<button type="button" id="b-cancel">Cancel</button>'
        + '<button type="button" id="b-save">Save</button>'
        + '<button type="button" id="b-publish">Publish Now</button>'
        + '</form>';

      const title = main.querySelector('#f-title');
      const excerpt = main.querySelector('#f-excerpt');
      const content = main.querySelector('.ql-editor');
      const save = main.querySelector('#b-save');
      const publish = main.querySelector('#b-publish');
      const update = () => {
        const ready = title.value && excerpt.value && content.textContent.trim() && draft.category;
        save.disabled = !ready;
        publish.disabled = !ready;
      };
      [title, excerpt, content].forEach(field => field.addEventListener('input', update));

      const category = main.querySelector('#f-category');
      category.onclick = () => openPicker(category, CATEGORIES, false, () => [draft.category], value => {
        draft.category = value;
        category.textContent = value;
        update();
      });
      const tags = main.querySelector('#f-tags');
      tags.onclick = () => openPicker(tags, TAGS, true, () => draft.tags, value => {
        draft.tags = draft.tags.includes(value) ? draft.tags.filter(t => t !== value) : draft.tags.concat([value]);
        tags.textContent = draft.tags.join(', ');
      });

      const submit = (status) => {
        const blogs = loadBlogs();
        const id = blogs.reduce((max, b) => Math.max(max, b.id), 0) + 1;
        blogs.push({
          id, title: title.value, excerpt: excerpt.value, content: content.textContent,
          category: draft.category, tags: draft.tags, status, created: Date.now()
        });
        saveBlogs(blogs);
        go('/admin');
      };
      save.onclick = () => submit('draft');
      publish.onclick = () => submit('published');
      main.querySelector('#b-cancel').onclick = () => go('/admin');
      update();
    }

    function route() {
      renderHeader();
      const main = document.querySelector('main');
      const path = location.pathname;
      if (path === '/login') return renderLogin(main);
      if (path === '/admin') return withLoading(main, renderDashboard);
      if (path === '/admin/blog/new') return renderComposer(main);
      if (path.startsWith('/blog/')) return renderDetail(main, path.slice('/blog/'.length));
      withLoading(main, renderHome);
    }

    route();
  </script>
</body>
</html>
"##;
