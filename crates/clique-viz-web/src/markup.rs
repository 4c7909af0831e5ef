//! Static markup and element ids shared with the HTML shell.

/// Panel holding the upload form.
pub const UPLOAD_PANE_ID: &str = "uploadPane";
/// Panel holding the answer and the drawing.
pub const RESULT_PANE_ID: &str = "resultPane";
/// Answer line inside the result panel.
pub const ANSWER_ID: &str = "answer";
/// The `<svg>` canvas.
pub const CANVAS_ID: &str = "viz";
/// "Try another graph" control.
pub const RESET_ID: &str = "again";
/// File picker, created by [`UPLOAD_PANE_HTML`].
pub const FILE_INPUT_ID: &str = "file";
/// Upload trigger, created by [`UPLOAD_PANE_HTML`].
pub const TRIGGER_ID: &str = "go";

/// Class toggled on a panel to hide it.
pub const HIDDEN_CLASS: &str = "hidden";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Contents of the upload panel.
pub const UPLOAD_PANE_HTML: &str = r#"<div id="box">
 <input type="file" id="file" name="graph" accept=".txt" required>
 <button id="go">upload</button>
</div>
<p id="hint">it takes a graph header &lt;n&gt; &lt;m&gt; &lt;k&gt; followed by m edge lines,<br>runs the SAT solver and shows a clique or UNSAT</p>"#;
