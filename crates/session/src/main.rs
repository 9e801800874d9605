//! `quotedesk`: drive a browsing session over JSON lines.
//!
//! Each stdin line is one [`SessionAction`]; each stdout line is the reply
//! with the resulting snapshot. Logs go to stderr.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use serde_json::json;

use quotedesk_session::{DispatchOutcome, Session, SessionAction, SessionConfig};

fn main() -> anyhow::Result<()> {
    quotedesk_observability::init();

    let config = SessionConfig::from_env();
    let catalog = config.load_catalog().context("failed to load catalog")?;
    tracing::info!(products = catalog.len(), page_size = config.default_page_size.as_u32(), "catalog ready");

    let mut session = Session::new(catalog, &config);
    let mut out = io::stdout().lock();

    writeln!(out, "{}", json!({ "ok": true, "view": session.snapshot() }))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<SessionAction>(&line) {
            Err(e) => {
                tracing::warn!(error = %e, "unreadable action");
                json!({ "ok": false, "error": format!("invalid action: {e}") })
            }
            Ok(action) => match session.dispatch(action) {
                Err(e) => json!({ "ok": false, "error": e.to_string(), "view": session.snapshot() }),
                Ok(DispatchOutcome::Exported(artifact)) => json!({
                    "ok": true,
                    "outcome": "exported",
                    "file_name": artifact.file_name,
                    "bytes": artifact.bytes.len(),
                    "view": session.snapshot(),
                }),
                Ok(outcome) => json!({
                    "ok": true,
                    "outcome": if outcome == DispatchOutcome::Applied { "applied" } else { "ignored" },
                    "view": session.snapshot(),
                }),
            },
        };

        writeln!(out, "{reply}")?;
        out.flush()?;
    }

    Ok(())
}
