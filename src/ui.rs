use crate::models::{Project, ProjectUser};

pub fn render_index(projects: &[Project], users: &[ProjectUser], date_range: &str) -> String {
    INDEX_HTML
        .replace("{{PROJECT_OPTIONS}}", &project_options(projects))
        .replace("{{USER_OPTIONS}}", &user_options(users))
        .replace("{{RANGE}}", &escape_html(date_range))
}

fn project_options(projects: &[Project]) -> String {
    let mut out = String::new();
    for (index, project) in projects.iter().enumerate() {
        let selected = if index == 0 { " selected" } else { "" };
        out.push_str("<option value=\"");
        out.push_str(&escape_html(&project.id));
        out.push('"');
        out.push_str(selected);
        out.push('>');
        out.push_str(&escape_html(&project.name));
        out.push_str("</option>");
    }
    out
}

/// Server-rendered twin of the checkbox labels the page script builds
/// when the user list is refreshed; the markup must stay in step.
fn user_options(users: &[ProjectUser]) -> String {
    let mut out = String::new();
    for user in users {
        out.push_str("<label class=\"user-option\"><input type=\"checkbox\" data-type=\"user-option\" value=\"");
        out.push_str(&escape_html(&user.id));
        out.push_str("\" checked /><span>");
        out.push_str(&escape_html(&user.name));
        out.push_str("</span></label>");
    }
    out
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Project Hours</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .filters {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
      align-items: start;
    }

    .filter {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .filter .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    select,
    input[type='text'] {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--accent-2);
      background: white;
      width: 100%;
    }

    .user-list {
      display: grid;
      gap: 8px;
      max-height: 180px;
      overflow-y: auto;
    }

    .user-option {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 0.95rem;
      color: var(--accent-2);
    }

    .user-option input {
      accent-color: var(--accent);
      width: 16px;
      height: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-update {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      width: 100%;
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .chart-header .subtitle {
      margin-top: 6px;
      font-size: 0.95rem;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 16px;
    }

    #chart {
      flex: 1 1 420px;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    #legend {
      list-style: none;
      margin: 0;
      padding: 0;
      display: flex;
      flex-direction: column;
      gap: 8px;
    }

    #legend[data-layout='horizontal'] {
      flex-direction: row;
      flex-wrap: wrap;
      justify-content: center;
      width: 100%;
    }

    #legend li {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
      color: var(--accent-2);
    }

    .legend-swatch {
      width: 12px;
      height: 12px;
      border-radius: 4px;
      display: inline-block;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="info"] {
      color: #2f4858;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Project Hours</h1>
      <p class="subtitle">Weekly hours logged per user, filtered by project, date range, and team members.</p>
    </header>

    <section class="filters">
      <div class="filter">
        <span class="label">Project</span>
        <select id="project_select">{{PROJECT_OPTIONS}}</select>
      </div>
      <div class="filter">
        <span class="label">Date range</span>
        <input id="date_range" type="text" value="{{RANGE}}" />
      </div>
      <div class="filter">
        <span class="label">Users</span>
        <div id="user_list" class="user-list">{{USER_OPTIONS}}</div>
      </div>
      <form id="update-form" class="filter">
        <span class="label">Report</span>
        <button class="btn-update" type="submit">Update chart</button>
      </form>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2 id="chart-title">Project Hours By User</h2>
        <p id="chart-subtitle" class="subtitle">Per Week</p>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Project hours chart" role="img"></svg>
        <ul id="legend"></ul>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Dates use the "start - end" form. Unchecking a user removes their line on the next update.</p>
  </main>

  <script>
    const projectEl = document.getElementById('project_select');
    const rangeEl = document.getElementById('date_range');
    const userListEl = document.getElementById('user_list');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const legendEl = document.getElementById('legend');
    const chartTitleEl = document.getElementById('chart-title');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const updateForm = document.getElementById('update-form');

    let hoursSeq = 0;
    let usersSeq = 0;

    const chartView = {
      current: null,
      mount(config) {
        this.current = config;
        drawChart(config);
        drawLegend(config);
        applyLegendLayout();
      }
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const selectedUsers = () => {
      const users = [];
      userListEl.querySelectorAll('[data-type="user-option"]').forEach((box) => {
        if (box.checked) {
          users.push(box.value);
        }
      });
      return users;
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const drawChart = (config) => {
      chartTitleEl.textContent = config.title;
      chartSubtitleEl.textContent = config.subtitle;

      if (!config.categories.length || !config.series.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this selection</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 56;
      const paddingY = 34;
      const top = 24;

      const values = config.series.flatMap((series) => series.data);
      const min = 0;
      let max = Math.max(...values, 0);
      if (max === min) {
        max = 1;
      }

      const range = max - min;
      const count = config.categories.length;
      const xStep = count > 1 ? (width - paddingX * 2) / (count - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }

      const axisTitle = `<text class="chart-label" transform="rotate(-90 14 ${height / 2})" x="14" y="${height / 2}" text-anchor="middle">${config.y_axis_title}</text>`;

      const labelEvery = count > 8 ? 2 : 1;
      const xLabels = config.categories
        .map((category, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${category}</text>`;
        })
        .join('');

      const lines = config.series
        .map((series) => {
          const path = series.data
            .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(value).toFixed(2)}`)
            .join(' ');
          const points = series.data
            .map((value, index) => `<circle class="chart-point" stroke="${series.color}" cx="${x(index)}" cy="${y(value)}" r="3.5" />`)
            .join('');
          return `<path class="chart-line" stroke="${series.color}" d="${path}" />` + points;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = grid + axisTitle + lines + xLabels;
    };

    const drawLegend = (config) => {
      const items = config.series.map((series) => {
        const item = document.createElement('li');
        const swatch = document.createElement('span');
        swatch.className = 'legend-swatch';
        swatch.style.background = series.color;
        const name = document.createElement('span');
        name.textContent = series.name;
        item.append(swatch, name);
        return item;
      });
      legendEl.replaceChildren(...items);
    };

    const applyLegendLayout = () => {
      if (!chartView.current) {
        return;
      }
      const rule = chartView.current.narrow;
      const narrow = chartEl.getBoundingClientRect().width <= rule.max_width;
      const legend = narrow ? rule.legend : chartView.current.legend;
      legendEl.dataset.layout = legend.layout;
    };

    const loadHours = async () => {
      const seq = ++hoursSeq;
      const params = new URLSearchParams({
        project: projectEl.value,
        range: rangeEl.value,
        users: selectedUsers().join(',')
      });
      setStatus('Loading hours...', 'info');
      const res = await fetch('/api/project_hours?' + params.toString());
      if (seq !== hoursSeq) {
        return;
      }
      if (!res.ok) {
        throw new Error('Failed to load project hours.');
      }
      const config = await res.json();
      if (seq !== hoursSeq) {
        return;
      }
      chartView.mount(config);
      setStatus('', '');
    };

    const renderUserList = (users) => {
      const items = users.map((user) => {
        const label = document.createElement('label');
        label.className = 'user-option';
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.dataset.type = 'user-option';
        box.value = user.id;
        box.checked = true;
        const name = document.createElement('span');
        name.textContent = user.name;
        label.append(box, name);
        return label;
      });
      userListEl.replaceChildren(...items);
    };

    const refreshUsers = async () => {
      const seq = ++usersSeq;
      const params = new URLSearchParams({ project: projectEl.value });
      const res = await fetch('/api/project_users?' + params.toString());
      if (seq !== usersSeq) {
        return;
      }
      if (!res.ok) {
        throw new Error('Failed to refresh user list.');
      }
      const data = await res.json();
      if (seq !== usersSeq) {
        return;
      }
      renderUserList(data.users);
    };

    updateForm.addEventListener('submit', (event) => {
      event.preventDefault();
      loadHours().catch((err) => setStatus(err.message, 'error'));
    });

    projectEl.addEventListener('change', () => {
      refreshUsers()
        .then(loadHours)
        .catch((err) => setStatus(err.message, 'error'));
    });

    window.addEventListener('resize', applyLegendLayout);

    loadHours().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_projects_users_and_range() {
        let projects = vec![
            Project {
                id: "1".into(),
                name: "Atlas".into(),
            },
            Project {
                id: "2".into(),
                name: "Borealis".into(),
            },
        ];
        let users = vec![ProjectUser {
            id: "7".into(),
            name: "Ada Lovelace".into(),
        }];

        let page = render_index(&projects, &users, "2023-01-01 - 2023-01-07");
        assert!(page.contains("<option value=\"1\" selected>Atlas</option>"));
        assert!(page.contains("<option value=\"2\">Borealis</option>"));
        assert!(page.contains("data-type=\"user-option\" value=\"7\" checked"));
        assert!(page.contains("Ada Lovelace"));
        assert!(page.contains("value=\"2023-01-01 - 2023-01-07\""));
    }

    #[test]
    fn backend_names_are_escaped() {
        let projects = vec![Project {
            id: "1".into(),
            name: "<script>alert(1)</script>".into(),
        }];
        let page = render_index(&projects, &[], "");
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn empty_lists_render_empty_controls() {
        let page = render_index(&[], &[], "2023-01-01 - 2023-01-07");
        assert!(page.contains("<select id=\"project_select\"></select>"));
        assert!(page.contains("<div id=\"user_list\" class=\"user-list\"></div>"));
    }
}
