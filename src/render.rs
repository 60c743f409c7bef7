//! HTML rendering for a [`DisplayModel`].
//!
//! The stylesheet is static and reads outcome colors from CSS custom
//! properties, so only the `:root` block changes between outcomes. Every
//! interpolated value is escaped as text.

use crate::models::{DisplayModel, Section, Theme};

pub const BRAND: &str = "🤖 JenkInsAI";
pub const SUBTITLE: &str = "Intelligent CI/CD Pipeline Dashboard";
pub const PROMPT: &str = "jenkins@pipeline:~$";

const STYLESHEET: &str = r"
      * { margin: 0; padding: 0; box-sizing: border-box; }

      body {
        font-family: 'SF Mono', 'Monaco', 'Inconsolata', 'Roboto Mono', monospace;
        background: linear-gradient(135deg, #0a0a0a 0%, #1a1a1a 50%, var(--tint) 100%);
        color: var(--status);
        min-height: 100vh;
        overflow-x: hidden;
        position: relative;
      }

      body::before {
        content: '';
        position: fixed;
        inset: 0;
        background:
          radial-gradient(circle at 20% 80%, rgba(var(--glow), 0.1) 0%, transparent 50%),
          radial-gradient(circle at 80% 20%, rgba(0, 123, 255, 0.1) 0%, transparent 50%),
          radial-gradient(circle at 40% 40%, rgba(255, 0, 150, 0.05) 0%, transparent 50%);
        pointer-events: none;
        z-index: -1;
      }

      .container { max-width: 1200px; margin: 0 auto; padding: 2rem; position: relative; z-index: 1; }

      .header {
        text-align: center;
        margin-bottom: 3rem;
        padding: 2rem;
        border: 2px solid var(--status);
        border-radius: 12px;
        background: rgba(var(--glow), 0.05);
        backdrop-filter: blur(10px);
        box-shadow: 0 8px 32px rgba(var(--glow), 0.2);
        position: relative;
        overflow: hidden;
      }

      .header::before {
        content: '';
        position: absolute;
        top: -50%;
        left: -50%;
        width: 200%;
        height: 200%;
        background: linear-gradient(45deg, transparent, rgba(var(--glow), 0.1), transparent);
        animation: var(--header-animation) 3s linear infinite;
      }

      @keyframes scan {
        0% { transform: translateX(-100%) translateY(-100%) rotate(45deg); }
        100% { transform: translateX(100%) translateY(100%) rotate(45deg); }
      }

      @keyframes error-pulse {
        0%, 100% { opacity: 0.3; }
        50% { opacity: 0.8; }
      }

      .logo {
        font-size: 3rem;
        font-weight: bold;
        margin-bottom: 0.5rem;
        text-shadow: 0 0 20px var(--status);
        position: relative;
        z-index: 2;
      }

      .subtitle { color: #888; font-size: 1.2rem; position: relative; z-index: 2; }

      .status-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
        margin-bottom: 3rem;
      }

      .status-card {
        background: rgba(20, 20, 20, 0.8);
        border: 1px solid #333;
        border-radius: 12px;
        padding: 2rem;
        backdrop-filter: blur(10px);
        transition: all 0.3s ease;
        position: relative;
        overflow: hidden;
      }

      .status-card:hover {
        border-color: var(--status);
        box-shadow: 0 8px 32px rgba(var(--glow), 0.3);
        transform: translateY(-5px);
      }

      .card-title {
        font-size: 1.4rem;
        margin-bottom: 1rem;
        color: var(--status);
        display: flex;
        align-items: center;
        gap: 0.5rem;
      }

      .card-content { color: #ccc; line-height: 1.6; }

      .timestamp {
        background: rgba(var(--glow), 0.1);
        border: 1px solid var(--status);
        border-radius: 8px;
        padding: 1rem;
        margin-bottom: 2rem;
        text-align: center;
        font-size: 1.1rem;
        box-shadow: 0 4px 16px rgba(var(--glow), 0.2);
        animation: var(--banner-animation) 2s infinite;
      }

      .metrics {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1rem;
        margin-top: 2rem;
      }

      .metric {
        background: rgba(30, 30, 30, 0.6);
        border: 1px solid #444;
        border-radius: 8px;
        padding: 1rem;
        text-align: center;
        transition: all 0.3s ease;
      }

      .metric-value { font-size: 2rem; font-weight: bold; color: var(--metric); margin-bottom: 0.5rem; }
      .metric-label { color: #888; font-size: 0.9rem; }

      .terminal {
        background: #0a0a0a;
        border: 1px solid #333;
        border-radius: 8px;
        padding: 1.5rem;
        margin-top: 2rem;
        position: relative;
      }

      .terminal::before {
        content: '● ● ●';
        position: absolute;
        top: 0.5rem;
        left: 1rem;
        color: #666;
        font-size: 0.8rem;
      }

      .terminal-header {
        color: #666;
        margin-bottom: 1rem;
        padding-top: 1rem;
        border-bottom: 1px solid #333;
        padding-bottom: 0.5rem;
      }

      .terminal-content { color: var(--status); line-height: 1.4; }

      .pulse { animation: pulse 2s infinite; }

      @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.7; }
      }

      @keyframes error-blink {
        0%, 50% { color: #ff0055; }
        51%, 100% { color: #ff6666; }
      }

      .icon { font-size: 1.5rem; margin-right: 0.5rem; }

      @media (max-width: 768px) {
        .container { padding: 1rem; }
        .logo { font-size: 2rem; }
        .status-grid { grid-template-columns: 1fr; }
      }
";

/// Escape text for use in element content or a quoted attribute.
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

fn theme_vars(theme: &Theme) -> String {
    format!(
        "      :root {{\n        --status: {};\n        --glow: {};\n        --tint: {};\n        --metric: {};\n        --header-animation: {};\n        --banner-animation: {};\n      }}\n",
        escape(theme.status_color()),
        escape(theme.glow_rgb()),
        escape(theme.backdrop_tint()),
        escape(theme.metric_color()),
        escape(theme.header_animation()),
        escape(theme.banner_animation()),
    )
}

fn status_card(model: &DisplayModel, section: Section) -> String {
    format!(
        r#"        <div class="status-card">
          <div class="card-title">
            <span class="icon">{icon}</span>
            {title}
          </div>
          <div class="card-content">{text}</div>
        </div>
"#,
        icon = escape(model.icon(section)),
        title = escape(&section.to_string()),
        text = escape(model.narrative(section)),
    )
}

fn metrics_grid(model: &DisplayModel) -> String {
    model
        .metrics()
        .iter()
        .map(|metric| {
            format!(
                r#"        <div class="metric">
          <div class="metric-value">{}</div>
          <div class="metric-label">{}</div>
        </div>
"#,
                escape(&metric.display_value()),
                escape(&metric.label()),
            )
        })
        .collect()
}

fn transcript(model: &DisplayModel) -> String {
    model
        .transcript_lines()
        .iter()
        .map(|line| format!("{}<br>\n", escape(line)))
        .collect()
}

/// Render the complete, self-contained dashboard document.
pub fn render(model: &DisplayModel) -> String {
    let cards: String = Section::ALL
        .iter()
        .map(|&section| status_card(model, section))
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{brand} | Build Dashboard</title>
    <style>
{vars}{stylesheet}    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <div class="logo">{brand}</div>
        <div class="subtitle">{subtitle}</div>
      </div>

      <div class="timestamp">
        <strong>{status}</strong> • {timestamp}
      </div>

      <div class="status-grid">
{cards}      </div>

      <div class="metrics">
{metrics}      </div>

      <div class="terminal">
        <div class="terminal-header">{prompt}</div>
        <div class="terminal-content">
{transcript}<span class="pulse">█</span>
        </div>
      </div>
    </div>
  </body>
</html>
"#,
        brand = escape(BRAND),
        vars = theme_vars(model.theme()),
        stylesheet = STYLESHEET,
        subtitle = escape(SUBTITLE),
        status = escape(model.status_text()),
        timestamp = escape(&model.timestamp().to_string()),
        cards = cards,
        metrics = metrics_grid(model),
        prompt = escape(PROMPT),
        transcript = transcript(model),
    )
}
