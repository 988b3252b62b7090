//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Charts are drawn by Vega-Embed, loaded from a CDN at startup. Every
//! render, clear and label update is chained onto one promise
//! (`window.__ufoRenderQueue`), so each task starts only after the previous
//! one has settled and the page sees them in submission order.
//!
//! Tasks are grouped into passes by [`begin_pass`]. The first task that
//! fails marks its pass as failed and the rest of that pass is skipped,
//! never retried. The next pass starts clean.

use wasm_bindgen::JsValue;

/// Vega, Vega-Lite and Vega-Embed, loaded in this order.
const VEGA_SCRIPTS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/vega@5",
    "https://cdn.jsdelivr.net/npm/vega-lite@5",
    "https://cdn.jsdelivr.net/npm/vega-embed@6",
];

/// Render queue and readiness helpers. Safe to evaluate more than once.
const QUEUE_JS: &str = r#"
(function() {
    if (window.__ufoEnqueue) return;
    window.__ufoRenderQueue = Promise.resolve();
    window.__ufoPass = 0;
    window.__ufoFailedPass = -1;
    window.__ufoWhenReady = function(id, needsVega) {
        return new Promise(function(resolve, reject) {
            var tries = 0;
            var poll = setInterval(function() {
                var vegaOk = !needsVega || typeof window.vegaEmbed !== 'undefined';
                if (vegaOk && document.getElementById(id)) {
                    clearInterval(poll);
                    resolve(document.getElementById(id));
                } else if (++tries > 600) {
                    clearInterval(poll);
                    reject(new Error('timed out waiting for #' + id));
                }
            }, 100);
        });
    };
    window.__ufoBeginPass = function() {
        return ++window.__ufoPass;
    };
    window.__ufoEnqueue = function(label, task) {
        var pass = window.__ufoPass;
        window.__ufoRenderQueue = window.__ufoRenderQueue.then(function() {
            if (window.__ufoFailedPass === pass) {
                console.warn('[UFO] ' + label + ' skipped: pass ' + pass + ' already failed');
                return;
            }
            return Promise.resolve().then(task).catch(function(e) {
                window.__ufoFailedPass = pass;
                console.error('[UFO] ' + label + ' failed, abandoning pass ' + pass + ':', e);
            });
        });
        return window.__ufoRenderQueue;
    };
    console.log('[UFO] render queue initialized');
})();
"#;

/// Execute JS. Errors are logged to the console and returned.
pub fn call_js(code: &str) -> anyhow::Result<()> {
    js_sys::eval(code).map(|_| ()).map_err(|e| {
        web_sys::console::warn_2(&JsValue::from_str("[UFO] JS call failed:"), &e);
        anyhow::anyhow!("JS call failed: {:?}", e)
    })
}

/// Quote `s` as a JS string literal.
pub fn js_string(s: &str) -> anyhow::Result<String> {
    // JSON strings are JS string literals, except for the two line separators
    Ok(serde_json::to_string(s)?
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Script that appends the Vega `<script>` tags in order, unless Vega-Embed
/// is already on the page.
pub fn loader_js() -> anyhow::Result<String> {
    let urls = serde_json::to_string(&VEGA_SCRIPTS)?;
    Ok(format!(
        r#"
        (function() {{
            if (typeof window.vegaEmbed !== 'undefined' || window.__ufoVegaLoading) return;
            window.__ufoVegaLoading = true;
            var urls = {urls};
            (function next(i) {{
                if (i >= urls.length) {{ console.log('[UFO] vega-embed loaded'); return; }}
                var s = document.createElement('script');
                s.src = urls[i];
                s.onload = function() {{ next(i + 1); }};
                s.onerror = function() {{ console.error('[UFO] failed to load', urls[i]); }};
                document.head.appendChild(s);
            }})(0);
        }})();
        "#
    ))
}

/// Queued task drawing `spec_json` into `container_id`.
pub fn render_task(container_id: &str, spec_json: &str) -> anyhow::Result<String> {
    let id = js_string(container_id)?;
    Ok(format!(
        r#"window.__ufoEnqueue('render ' + {id}, function() {{
            return window.__ufoWhenReady({id}, true).then(function(el) {{
                return window.vegaEmbed(el, {spec_json}, {{ actions: false }});
            }});
        }});"#
    ))
}

/// Queued task emptying `container_id`.
pub fn clear_task(container_id: &str) -> anyhow::Result<String> {
    let id = js_string(container_id)?;
    Ok(format!(
        r#"window.__ufoEnqueue('clear ' + {id}, function() {{
            return window.__ufoWhenReady({id}, false).then(function(el) {{
                el.innerHTML = '';
            }});
        }});"#
    ))
}

/// Queued task setting the text content of `element_id`.
pub fn text_task(element_id: &str, text: &str) -> anyhow::Result<String> {
    let id = js_string(element_id)?;
    let text = js_string(text)?;
    Ok(format!(
        r#"window.__ufoEnqueue('label ' + {id}, function() {{
            return window.__ufoWhenReady({id}, false).then(function(el) {{
                el.textContent = {text};
            }});
        }});"#
    ))
}

/// Load Vega-Embed and set up the render queue. Call once at app startup.
pub fn init_charts() -> anyhow::Result<()> {
    call_js(&loader_js()?)?;
    call_js(QUEUE_JS)
}

/// Start a new render pass. Tasks queued after this belong to it.
pub fn begin_pass() -> anyhow::Result<()> {
    call_js("window.__ufoBeginPass && window.__ufoBeginPass();")
}

pub fn render_vega_lite(container_id: &str, spec_json: &str) -> anyhow::Result<()> {
    call_js(&render_task(container_id, spec_json)?)
}

pub fn clear_container(container_id: &str) -> anyhow::Result<()> {
    call_js(&clear_task(container_id)?)
}

pub fn set_text(element_id: &str, text: &str) -> anyhow::Result<()> {
    call_js(&text_task(element_id, text)?)
}
