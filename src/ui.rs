use crate::models::{DayColor, HeatmapCell, RecordSummary, TodaySnapshot, TodayStatus};
use chrono::Datelike;

pub fn render_index(today: &TodaySnapshot, summary: &RecordSummary, cells: &[HeatmapCell]) -> String {
    let status_class = match today.status {
        TodayStatus::NotRecorded => "pending",
        TodayStatus::CheckedIn => "good",
        TodayStatus::BadHabit { .. } => "bad",
    };

    INDEX_HTML
        .replace("{{DATE}}", &today.date.to_string())
        .replace("{{SCORE}}", &today.score.to_string())
        .replace("{{STREAK}}", &today.streak.to_string())
        .replace("{{STATUS}}", &today.label)
        .replace("{{STATUS_CLASS}}", status_class)
        .replace("{{TOTAL}}", &summary.total_days.to_string())
        .replace("{{SUCCESS}}", &summary.success_days.to_string())
        .replace("{{FAILURE}}", &summary.failure_days.to_string())
        .replace("{{HEATMAP}}", &render_heatmap(cells))
}

fn render_heatmap(cells: &[HeatmapCell]) -> String {
    if cells.is_empty() {
        return r#"<p class="empty">No records yet</p>"#.to_string();
    }

    let mut html = String::from(r#"<div class="grid">"#);
    for cell in cells {
        let (class, title) = match cell.color {
            DayColor::Success => ("good", format!("{}: checked in", cell.date)),
            DayColor::Failure => ("bad", format!("{}: bad habit × {}", cell.date, cell.count)),
        };
        html.push_str(&format!(
            r#"<span class="cell {class}" title="{title}">{}/{}</span>"#,
            cell.date.month(),
            cell.date.day()
        ));
    }
    html.push_str("</div>");
    html
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #26323a;
      --good: #2e9d57;
      --bad: #c8413a;
      --muted: #8a8f93;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 48px rgba(38, 50, 58, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #e6efe9 70%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: center;
      padding: 28px 16px 40px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0 0 4px;
      font-size: 1.8rem;
    }

    header p {
      margin: 0;
      color: var(--muted);
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
    }

    .metric {
      background: #fff;
      border-radius: 16px;
      padding: 16px;
      text-align: center;
    }

    .metric span {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .metric strong {
      font-size: 1.6rem;
    }

    .good {
      color: var(--good);
    }

    .bad {
      color: var(--bad);
    }

    .pending {
      color: var(--muted);
    }

    .actions {
      display: flex;
      gap: 12px;
    }

    .actions form {
      flex: 1;
    }

    button {
      width: 100%;
      border: none;
      border-radius: 999px;
      padding: 14px 18px;
      font-size: 1rem;
      cursor: pointer;
      color: #fff;
      background: var(--ink);
    }

    button.bad {
      background: var(--bad);
      color: #fff;
    }

    button.muted {
      background: var(--muted);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .cell {
      text-align: center;
      font-size: 0.75rem;
      padding: 8px 0;
      border-radius: 6px;
      background: #fff;
    }

    .empty {
      color: var(--muted);
      text-align: center;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p>{{DATE}}</p>
    </header>

    <section class="metrics">
      <div class="metric"><span>Score</span><strong>{{SCORE}}</strong></div>
      <div class="metric"><span>Streak</span><strong>{{STREAK}}</strong></div>
      <div class="metric"><span>Today</span><strong class="{{STATUS_CLASS}}">{{STATUS}}</strong></div>
    </section>

    <section class="actions">
      <form method="post" action="/bad-habit">
        <button class="bad" type="submit">Record bad habit</button>
      </form>
      <form method="post" action="/undo">
        <button class="muted" type="submit">Undo today</button>
      </form>
    </section>

    <section>
      <p>Total {{TOTAL}} days · checked in {{SUCCESS}} · bad habit {{FAILURE}}</p>
      {{HEATMAP}}
    </section>
  </main>
</body>
</html>
"#;
