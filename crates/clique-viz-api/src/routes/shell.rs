//! HTML shell for the WASM front end.

use axum::response::Html;

/// Page skeleton. `clique-viz-web` fills `#uploadPane` and drives the rest.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>k-clique SAT</title>
    <style>
        body { margin: 0; padding: 24px; background: #f5f7fa; color: #1f2933; font-family: system-ui, sans-serif; }
        .hidden { display: none; }
        #box { display: flex; gap: 12px; align-items: center; }
        #hint { color: #616e7c; }
        #answer { font-size: 20px; font-weight: 600; }
        #viz { width: 800px; height: 480px; background: #fff; border: 1px solid #cbd2d9; }
        #viz line { stroke: #9aa4b1; stroke-width: 2; }
        #viz circle { fill: #1f2933; stroke: #52606d; stroke-width: 2; }
        #viz circle.clique { fill: #f0b429; stroke: #cb6e17; }
        #viz text { fill: #f5f7fa; font: bold 13px sans-serif; text-anchor: middle; dominant-baseline: central; pointer-events: none; }
    </style>
</head>
<body>
    <div id="uploadPane"></div>
    <div id="resultPane" class="hidden">
        <p id="answer"></p>
        <svg id="viz" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 480"></svg>
        <p><button id="again">try another graph</button></p>
    </div>
    <script type="module">
        import init from './pkg/clique_viz_web.js';
        await init('./pkg/clique_viz_web_bg.wasm');
    </script>
</body>
</html>"#;

/// Handler for GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
