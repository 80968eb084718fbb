//! Server-rendered pages for the login and predictor screens.
//!
//! The pages carry just enough inline script to drive the JSON API:
//! submit handling, in-flight disabling, and the history re-push that
//! keeps the back button from leaving the predictor.

use minegrid_core::{PredictorState, TOTAL_CELLS};
use std::fmt::Write;

const STYLE: &str = r#"
    body { margin: 0; min-height: 100vh; display: flex; align-items: center;
           justify-content: center; background: #152744; color: #f8f9fa;
           font-family: -apple-system, "Segoe UI", Roboto, Arial, sans-serif; }
    .card { background: #213744; border-radius: 16px; padding: 32px;
            box-shadow: 0 8px 32px rgba(0, 20, 40, 0.6); width: 100%; max-width: 420px; }
    .wide { max-width: 900px; display: flex; gap: 24px; flex-wrap: wrap; }
    h2 { margin: 0 0 8px; }
    .subtitle { color: #94a3b8; margin: 0 0 24px; }
    label { display: block; margin: 12px 0 6px; font-size: 14px; }
    input, select { width: 100%; padding: 10px 12px; border-radius: 8px;
            border: 1px solid #334155; background: #0f212f; color: #fff;
            box-sizing: border-box; }
    input.invalid { border-color: #ef4444; }
    button { width: 100%; margin-top: 16px; padding: 12px; border: none;
             border-radius: 8px; background: #10b981; color: #fff;
             font-weight: 600; cursor: pointer; }
    button:disabled { background: #1e2a3a; color: #475569; cursor: not-allowed; }
    .message { margin-top: 16px; font-size: 14px; color: #ff6b6b; min-height: 1em; }
    .badge { display: inline-block; background: #f8f9fa; color: #28a745;
             border-radius: 999px; padding: 4px 12px; font-weight: 600; }
    .grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 8px;
            background: #212b36; padding: 12px; border-radius: 6px; flex: 1;
            min-width: 300px; align-self: start; }
    .cell { aspect-ratio: 1; border-radius: 8px; background: #374151; }
    .cell.selected { background: #10b981; }
    .controls { width: 280px; }
    .note { color: #94a3b8; font-size: 12px; margin-top: 24px; }
"#;

/// The login screen: a one-time-code form.
pub fn login_page() -> String {
    let mut page = String::new();
    page.push_str("<!doctype html><html><head><meta charset=\"utf-8\">");
    page.push_str("<title>Minegrid - Login</title><style>");
    page.push_str(STYLE);
    page.push_str("</style></head><body><div class=\"card\">");
    page.push_str("<h2>Welcome Back</h2>");
    page.push_str("<p class=\"subtitle\">Enter your code to continue</p>");
    page.push_str("<input id=\"code\" type=\"text\" placeholder=\"Enter code\" autocomplete=\"off\">");
    page.push_str("<button id=\"submit\" disabled>Login</button>");
    page.push_str("<div id=\"message\" class=\"message\"></div>");
    page.push_str(
        r#"<script>
    const code = document.getElementById('code');
    const submit = document.getElementById('submit');
    const message = document.getElementById('message');
    let loading = false;

    function refresh() {
      submit.disabled = loading || !code.value.trim();
      submit.textContent = loading ? 'Logging in...' : 'Login';
    }
    code.addEventListener('input', refresh);
    code.addEventListener('keypress', (e) => {
      if (e.key === 'Enter' && !loading) login();
    });
    submit.addEventListener('click', login);

    async function login() {
      if (loading || !code.value.trim()) return;
      loading = true;
      message.textContent = '';
      refresh();
      try {
        const res = await fetch('/api/login', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ code: code.value }),
        });
        if (res.ok) {
          window.location.replace('/home');
          return;
        }
        const body = await res.json().catch(() => ({}));
        message.textContent = body.message || 'Login failed.';
      } catch {
        message.textContent = 'Login failed.';
      } finally {
        loading = false;
        refresh();
      }
    }
    </script>"#,
    );
    page.push_str("</body></html>");
    page
}

/// The predictor screen, rendered from the current view state.
pub fn home_page(predictor: &PredictorState) -> String {
    let mut page = String::new();
    page.push_str("<!doctype html><html><head><meta charset=\"utf-8\">");
    page.push_str("<title>Minegrid</title><style>");
    page.push_str(STYLE);
    page.push_str("</style></head><body><div class=\"card wide\">");

    page.push_str("<div class=\"controls\">");
    let _ = write!(
        page,
        "<div>Bets Made <span id=\"bets\" class=\"badge\">{}</span></div>",
        predictor.bets_made()
    );
    page.push_str("<label for=\"seed\">Server Seed</label>");
    page.push_str("<input id=\"seed\" type=\"text\" placeholder=\"Paste your server seed\" autocomplete=\"off\">");
    page.push_str("<label for=\"amount\">Bet Amount</label>");
    page.push_str("<input id=\"amount\" type=\"number\" placeholder=\"0.00\">");
    page.push_str("<label for=\"mines\">Mines</label><select id=\"mines\">");
    for mines in 1..=8 {
        let _ = write!(page, "<option value=\"{mines}\">{mines}</option>");
    }
    page.push_str("</select>");
    page.push_str("<button id=\"predict\">Predict</button>");
    page.push_str("<div id=\"message\" class=\"message\"></div>");
    page.push_str(
        "<p class=\"note\">NOTE: Predictions are not guaranteed. Outcomes may vary; \
         play responsibly and be aware that all forms of gambling carry risk.</p>",
    );
    page.push_str("</div>");

    page.push_str("<div id=\"grid\" class=\"grid\">");
    for index in 0..TOTAL_CELLS {
        let class = if predictor.selected().contains(&(index as u8)) {
            "cell selected"
        } else {
            "cell"
        };
        let _ = write!(page, "<div class=\"{class}\" data-index=\"{index}\"></div>");
    }
    page.push_str("</div>");

    page.push_str(
        r#"<script>
    // Re-pin this location so the back button cannot surface a stale view.
    history.pushState(null, '', window.location.href);
    window.addEventListener('popstate', () => {
      if (window.location.pathname === '/home') {
        history.pushState(null, '', window.location.href);
      }
    });

    const seed = document.getElementById('seed');
    const amount = document.getElementById('amount');
    const mines = document.getElementById('mines');
    const predictBtn = document.getElementById('predict');
    const message = document.getElementById('message');
    let loading = false;

    predictBtn.addEventListener('click', async () => {
      if (loading) return;
      loading = true;
      predictBtn.disabled = true;
      try {
        const res = await fetch('/api/predict', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({
            server_seed: seed.value,
            bet_amount: amount.value || null,
            mines: Number(mines.value),
          }),
        });
        const body = await res.json().catch(() => ({}));
        if (!res.ok) {
          seed.classList.add('invalid');
          message.textContent = body.message || 'Prediction failed.';
          return;
        }
        seed.classList.remove('invalid');
        message.textContent = '';
        document.getElementById('bets').textContent = body.bets_made;
        document.querySelectorAll('#grid .cell').forEach((cell, i) => {
          cell.classList.toggle('selected', body.cells.includes(i));
        });
      } finally {
        loading = false;
        predictBtn.disabled = false;
      }
    });
    </script>"#,
    );
    page.push_str("</div></body></html>");
    page
}
