//! Sanitization of inline SVG icons delivered by the currency API.

/// Clean inline SVG markup before it is injected into the page.
///
/// Rules:
/// - Only basic SVG shape/gradient tags survive
/// - `<script>`, `<foreignObject>` and HTML tags are dropped
/// - `on*` attributes and `style` are dropped
/// - `href` / `xlink:href` are not allowed at all
pub fn sanitize_svg(markup: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "svg", "g", "path", "circle", "rect", "ellipse", "line", "polygon", "polyline",
            "defs", "linearGradient", "radialGradient", "stop", "clipPath", "mask", "title",
        ])
        .generic_attributes(maplit::hashset![
            "id", "class", "viewBox", "width", "height", "x", "y", "x1", "y1", "x2", "y2",
            "cx", "cy", "r", "rx", "ry", "d", "points", "transform", "fill", "fill-rule",
            "clip-rule", "clip-path", "mask", "stroke", "stroke-width", "stroke-linecap",
            "stroke-linejoin", "opacity", "fill-opacity", "stop-color", "stop-opacity",
            "offset", "gradientUnits", "gradientTransform",
        ])
        .clean(markup)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_shapes() {
        let clean = sanitize_svg(
            r##"<svg viewBox="0 0 20 20"><circle cx="10" cy="10" r="10" fill="#039"></circle><path d="M0 0h20"></path></svg>"##,
        );
        assert!(clean.contains("<svg"));
        assert!(clean.contains("<circle"));
        assert!(clean.contains("<path"));
        assert!(clean.contains("M0 0h20"));
    }

    #[test]
    fn test_drops_scripts_and_handlers() {
        let clean = sanitize_svg(
            r#"<svg onload="alert(1)"><script>alert(2)</script><path d="M0 0" onclick="steal()"></path></svg>"#,
        );
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
        assert!(!clean.contains("onload"));
        assert!(!clean.contains("onclick"));
        assert!(clean.contains("<path"));
    }

    #[test]
    fn test_drops_foreign_html() {
        let clean = sanitize_svg(r#"<img src="x" onerror="alert(1)"><b>bold</b>"#);
        assert!(!clean.contains("<img"));
        assert!(!clean.contains("<b>"));
        assert!(!clean.contains("onerror"));
    }
}
