//! SVG serialisation of a [`ChartSpec`]

use crate::chart::to_point;
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;

impl ChartSpec {
    /// Render the primitive list as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        ));
        out.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            self.background_color.to_css_string()
        ));
        for shape in &self.shapes {
            out.push_str("  ");
            out.push_str(&shape_to_svg(shape));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn shape_to_svg(shape: &Shape) -> String {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}{}/>",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius),
            fill_attr(*fill),
            stroke_attr(stroke.as_ref())
        ),
        Shape::Wedge {
            center,
            radius_inner,
            radius_outer,
            start_angle,
            end_angle,
            fill,
            stroke,
        } => format!(
            "<path d=\"{}\" {}{}/>",
            wedge_path(*center, *radius_inner, *radius_outer, *start_angle, *end_angle),
            fill_attr(Some(*fill)),
            stroke_attr(stroke.as_ref())
        ),
        Shape::Line { from, to, stroke } => line(*from, *to, &stroke.color, stroke.width, ""),
        Shape::AspectLine {
            from,
            to,
            aspect,
            color,
            width,
        } => line(
            *from,
            *to,
            color,
            *width,
            &format!(" class=\"aspect {}\"", aspect.name()),
        ),
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
        } => text(*position, content, *size, color, *anchor, ""),
        Shape::BodyGlyph {
            center,
            body,
            symbol,
            size,
            color,
            ..
        } => text(
            *center,
            symbol,
            *size,
            color,
            TextAnchor::Middle,
            &format!(
                " data-body=\"{}\" data-layer=\"{:?}\"",
                escape(&body.name),
                body.layer
            ),
        ),
    }
}

/// Outer arc from start to end, inner arc back.
fn wedge_path(center: Point, r_in: f64, r_out: f64, start: f64, end: f64) -> String {
    let start_out = to_point(start, r_out, center);
    let end_out = to_point(end, r_out, center);
    let end_in = to_point(end, r_in, center);
    let start_in = to_point(start, r_in, center);

    // Positive screen angles run clockwise in a y-down frame
    let sweep_out = if end > start { 1 } else { 0 };
    let sweep_in = 1 - sweep_out;
    let large = if (end - start).abs() > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} A {r_out} {r_out} 0 {large} {sweep_out} {} {} L {} {} A {r_in} {r_in} 0 {large} {sweep_in} {} {} Z",
        fmt_num(start_out.x),
        fmt_num(start_out.y),
        fmt_num(end_out.x),
        fmt_num(end_out.y),
        fmt_num(end_in.x),
        fmt_num(end_in.y),
        fmt_num(start_in.x),
        fmt_num(start_in.y),
        r_out = fmt_num(r_out),
        r_in = fmt_num(r_in),
    )
}

fn line(from: Point, to: Point, color: &Color, width: f64, extra: &str) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(to.x),
        fmt_num(to.y),
        color.to_css_string(),
        fmt_num(width),
        extra
    )
}

fn text(
    position: Point,
    content: &str,
    size: f64,
    color: &Color,
    anchor: TextAnchor,
    extra: &str,
) -> String {
    let anchor = match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"central\"{}>{}</text>",
        fmt_num(position.x),
        fmt_num(position.y),
        fmt_num(size),
        color.to_css_string(),
        anchor,
        extra,
        escape(content)
    )
}

fn fill_attr(fill: Option<Color>) -> String {
    match fill {
        Some(color) => format!("fill=\"{}\" ", color.to_css_string()),
        None => "fill=\"none\" ".to_string(),
    }
}

fn stroke_attr(stroke: Option<&Stroke>) -> String {
    match stroke {
        Some(s) => format!(
            "stroke=\"{}\" stroke-width=\"{}\" ",
            s.color.to_css_string(),
            fmt_num(s.width)
        ),
        None => String::new(),
    }
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(2.346), "2.35");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_wedge_path_closes() {
        let path = wedge_path(Point::new(0.0, 0.0), 50.0, 100.0, 180.0, 150.0);
        assert!(path.starts_with("M 100 0 A 100 100 0 0 0"));
        assert!(path.ends_with('Z'));
    }
}
