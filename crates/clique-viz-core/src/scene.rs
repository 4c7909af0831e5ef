//! Drawing primitives for a result and their SVG serialization.
//!
//! A [`Scene`] is what the renderer puts on the canvas: one [`EdgeLine`] per
//! edge followed by one [`VertexGlyph`] (circle + label) per vertex. The web
//! front end turns it into DOM nodes, the CLI into a standalone SVG file.

use std::collections::HashSet;
use std::fmt::Write;

use tracing::{debug, warn};

use crate::error::VizResult;
use crate::layout::{CircularLayout, LayoutParams, Point};
use crate::payload::{Edge, ResultPayload, VertexId};

/// CSS class carried by clique members.
pub const CLIQUE_CLASS: &str = "clique";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const STYLE: &str = "line{stroke:#9aa4b1;stroke-width:2}\
circle{fill:#1f2933;stroke:#52606d;stroke-width:2}\
circle.clique{fill:#f0b429;stroke:#cb6e17}\
text{fill:#f5f7fa;font:bold 13px sans-serif;text-anchor:middle;dominant-baseline:central}\
text.answer{fill:#1f2933;font-size:16px;text-anchor:start}";

/// A line between the positions of two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub from: VertexId,
    pub to: VertexId,
    pub start: Point,
    pub end: Point,
}

/// A labeled circle for one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGlyph {
    pub id: VertexId,
    pub center: Point,
    pub radius: f64,
    pub in_clique: bool,
}

impl VertexGlyph {
    /// CSS class for the circle, if any.
    pub fn class(&self) -> Option<&'static str> {
        self.in_clique.then_some(CLIQUE_CLASS)
    }

    /// Text drawn on top of the circle.
    pub fn label(&self) -> String {
        self.id.to_string()
    }
}

/// Everything drawn for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub params: LayoutParams,
    pub lines: Vec<EdgeLine>,
    pub vertices: Vec<VertexGlyph>,
}

impl Scene {
    /// Build the scene for `edges`, marking every vertex listed in `clique`.
    pub fn build(edges: &[Edge], clique: &[VertexId]) -> VizResult<Self> {
        Self::build_with_params(edges, clique, LayoutParams::default())
    }

    pub fn build_with_params(
        edges: &[Edge],
        clique: &[VertexId],
        params: LayoutParams,
    ) -> VizResult<Self> {
        if edges.is_empty() {
            return Ok(Self {
                params,
                lines: Vec::new(),
                vertices: Vec::new(),
            });
        }

        let layout = CircularLayout::with_params(edges, params)?;
        let members: HashSet<VertexId> = clique.iter().copied().collect();

        let lines = edges
            .iter()
            .filter_map(|&(u, v)| match (layout.position(u), layout.position(v)) {
                (Some(start), Some(end)) => Some(EdgeLine {
                    from: u,
                    to: v,
                    start,
                    end,
                }),
                _ => {
                    warn!(from = u, to = v, "edge references a vertex outside the layout");
                    None
                }
            })
            .collect();

        let vertices: Vec<VertexGlyph> = layout
            .iter()
            .map(|(id, center)| VertexGlyph {
                id,
                center,
                radius: params.vertex_radius,
                in_clique: members.contains(&id),
            })
            .collect();

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            clique = members.len(),
            "scene_built"
        );

        Ok(Self {
            params,
            lines,
            vertices,
        })
    }

    /// Build the scene for a solver result.
    pub fn from_payload(payload: &ResultPayload) -> VizResult<Self> {
        Self::build(&payload.edges, &payload.clique)
    }

    /// Nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.vertices.is_empty()
    }

    /// Ids of the highlighted vertices, in id order.
    pub fn clique_members(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|v| v.in_clique)
            .map(|v| v.id)
            .collect()
    }

    /// Standalone SVG document for the scene.
    pub fn to_svg(&self) -> String {
        self.svg_document(None)
    }

    /// SVG document with `answer` in the top left corner.
    pub fn to_svg_with_answer(&self, answer: &str) -> String {
        self.svg_document(Some(answer))
    }

    fn svg_document(&self, answer: Option<&str>) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.params.width,
            h = self.params.height,
        );
        let _ = writeln!(out, "<style>{STYLE}</style>");
        if let Some(answer) = answer {
            let _ = writeln!(out, r#"<text class="answer" x="16" y="24">{answer}</text>"#);
        }
        self.write_body(&mut out);
        out.push_str("</svg>\n");
        out
    }

    fn write_body(&self, out: &mut String) {
        for line in &self.lines {
            let _ = writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                line.start.x, line.start.y, line.end.x, line.end.y
            );
        }
        for vertex in &self.vertices {
            let class = vertex
                .class()
                .map(|c| format!(r#" class="{c}""#))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                r#"<g><circle cx="{x:.2}" cy="{y:.2}" r="{r}"{class}/><text x="{x:.2}" y="{y:.2}">{label}</text></g>"#,
                x = vertex.center.x,
                y = vertex.center.y,
                r = vertex.radius,
                label = vertex.label(),
            );
        }
    }
}

/// Render a solver result, answer line included, as an SVG document.
pub fn render_svg(payload: &ResultPayload) -> VizResult<String> {
    Ok(Scene::from_payload(payload)?.to_svg_with_answer(&payload.answer_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ResultPayload {
        ResultPayload {
            sat: true,
            edges: vec![(1, 2), (2, 3), (1, 3)],
            clique: vec![1, 2, 3],
            ..Default::default()
        }
    }

    #[test]
    fn triangle_scene_marks_every_member() {
        let scene = Scene::from_payload(&triangle()).unwrap();

        assert_eq!(scene.lines.len(), 3);
        assert_eq!(scene.vertices.len(), 3);
        assert_eq!(scene.clique_members(), vec![1, 2, 3]);
        assert!(scene.vertices.iter().all(|v| v.radius == 16.0));
    }

    #[test]
    fn unsat_scene_marks_nothing() {
        let payload = ResultPayload {
            sat: false,
            edges: vec![(1, 2)],
            clique: vec![],
            ..Default::default()
        };
        let scene = Scene::from_payload(&payload).unwrap();

        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.vertices.len(), 2);
        assert!(scene.clique_members().is_empty());
        assert!(scene.vertices.iter().all(|v| v.class().is_none()));
    }

    #[test]
    fn only_clique_vertices_are_marked() {
        let edges = vec![(1, 2), (2, 3), (3, 4), (4, 5), (2, 4)];
        let scene = Scene::build(&edges, &[2, 3, 4]).unwrap();

        assert_eq!(scene.vertices.len(), 5);
        for v in &scene.vertices {
            assert_eq!(v.in_clique, [2, 3, 4].contains(&v.id), "vertex {}", v.id);
        }
    }

    #[test]
    fn glyph_count_follows_max_id_not_distinct_ids() {
        let scene = Scene::build(&[(2, 7)], &[]).unwrap();
        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.vertices.len(), 7);
        let ids: Vec<_> = scene.vertices.iter().map(|v| v.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn empty_edges_draw_nothing() {
        let scene = Scene::build(&[], &[1, 2]).unwrap();
        assert!(scene.is_empty());

        let svg = scene.to_svg();
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn edge_touching_vertex_zero_is_skipped() {
        let scene = Scene::build(&[(0, 2), (1, 2)], &[]).unwrap();
        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.lines[0].from, 1);
        assert_eq!(scene.vertices.len(), 2);
    }

    #[test]
    fn lines_follow_vertex_positions() {
        let scene = Scene::build(&[(1, 3)], &[]).unwrap();
        let line = &scene.lines[0];
        assert_eq!(line.start, scene.vertices[0].center);
        assert_eq!(line.end, scene.vertices[2].center);
    }

    #[test]
    fn svg_counts_match_scene() {
        let svg = render_svg(&triangle()).unwrap();

        assert_eq!(svg.matches("<line ").count(), 3);
        assert_eq!(svg.matches("<circle ").count(), 3);
        assert_eq!(svg.matches(r#"class="clique""#).count(), 3);
        assert_eq!(svg.matches("<g>").count(), 3);
        assert!(svg.contains(">Clique: 1 2 3</text>"));
        assert!(svg.contains(r#"<text x="620.00" y="240.00">3</text>"#));
    }

    #[test]
    fn unsat_svg_has_answer_and_no_marks() {
        let payload = ResultPayload {
            sat: false,
            edges: vec![(1, 2)],
            ..Default::default()
        };
        let svg = render_svg(&payload).unwrap();

        assert!(svg.contains(">UNSAT</text>"));
        assert!(!svg.contains(r#"class="clique""#));
        assert_eq!(svg.matches("<circle ").count(), 2);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let payload = triangle();
        assert_eq!(
            Scene::from_payload(&payload).unwrap(),
            Scene::from_payload(&payload).unwrap()
        );
        assert_eq!(render_svg(&payload).unwrap(), render_svg(&payload).unwrap());
    }

    #[test]
    fn oversized_graph_is_an_error_not_a_crash() {
        let payload = ResultPayload {
            sat: false,
            edges: vec![(1, 3_000_000_000)],
            ..Default::default()
        };
        assert!(Scene::from_payload(&payload).is_err());
        assert!(render_svg(&payload).is_err());
    }
}
