use anyhow::Result;

use geom::{Angle, Bounds, Pt2D};
use road_diagram::{
    draw_network, find_violation, render, Drawing, LayoutConfig, LineStyle, Network, Violation,
};

fn draw_xml(raw: &str) -> Result<(Drawing, Bounds)> {
    draw_xml_with(raw, &LayoutConfig::default())
}

fn draw_xml_with(raw: &str, cfg: &LayoutConfig) -> Result<(Drawing, Bounds)> {
    abstutil::logger::setup_for_tests();
    let network = Network::load_from_str(raw)?;
    draw_network(&network, cfg)
}

fn assert_everything_visible(drawing: &Drawing, bounds: &Bounds) {
    let (dx, dy) = bounds.translation_to_origin();
    for pt in drawing.line_endpoints() {
        assert!(bounds.contains(pt), "{} is outside {:?}", pt, bounds);
        let moved = pt.offset(dx, dy);
        assert!(moved.x() >= 0.0 && moved.y() >= 0.0, "{} moved to {}", pt, moved);
    }
}

#[test]
fn one_street() {
    let (drawing, bounds) = draw_xml("<intersection><street/></intersection>").unwrap();

    assert_eq!(drawing.circles().count(), 1);
    let lines: Vec<_> = drawing.lines().collect();
    assert_eq!(lines.len(), 2);
    let mut ys = Vec::new();
    for (line, style) in lines {
        assert_eq!(style, LineStyle::Solid);
        assert_eq!(line.pt1().x(), 50.0);
        assert_eq!(line.pt2().x(), 250.0);
        assert_eq!(line.pt1().y(), line.pt2().y());
        ys.push(line.pt1().y());
    }
    assert_eq!(ys, vec![-16.0, 16.0]);

    // The lines run from the rim at x=50 out to x=250, but the root's circle reaches back to
    // x=-50, so the canvas is wider than the lines alone.
    assert_eq!(bounds.min_x, -50.0);
    assert_eq!(bounds.max_x, 250.0);
    assert_everything_visible(&drawing, &bounds);
}

#[test]
fn four_roads() {
    let (drawing, bounds) =
        draw_xml("<intersection><road/><road/><road/><road/></intersection>").unwrap();

    assert_eq!(drawing.lines().count(), 12);
    assert_eq!(drawing.num_dashed_lines(), 4);

    // The dashed centerlines point east, south, west, and north
    let centerlines: Vec<Angle> = drawing
        .lines()
        .filter(|(_, style)| *style == LineStyle::Dashed)
        .map(|(line, _)| line.angle())
        .collect();
    for (angle, degrees) in centerlines.into_iter().zip([0.0, 90.0, 180.0, 270.0]) {
        assert!(angle.approx_eq(Angle::new_degs(degrees), 0.001), "{}", angle);
    }

    assert_eq!(bounds.width(), 500.0);
    assert_eq!(bounds.height(), 500.0);
    assert_everything_visible(&drawing, &bounds);
}

#[test]
fn road_to_two_avenues() {
    let (drawing, bounds) = draw_xml(
        r#"<intersection>
             <road>
               <intersection>
                 <avenue/>
                 <avenue/>
               </intersection>
             </road>
           </intersection>"#,
    )
    .unwrap();

    let centers: Vec<Pt2D> = drawing.circles().map(|c| c.center).collect();
    assert_eq!(centers, vec![Pt2D::zero(), Pt2D::new(250.0, 0.0)]);
    assert_eq!(drawing.lines().count(), 3 + 2 * 5);

    // The first avenue continues east from the far circle's rim; the second heads back west.
    assert_eq!(bounds.max_x, 500.0);
    assert_eq!(bounds.min_x, -50.0);
    assert_eq!(bounds.min_y, -50.0);
    assert_eq!(bounds.max_y, 50.0);
    assert_everything_visible(&drawing, &bounds);
}

#[test]
fn intersection_without_segments() {
    let err = draw_xml("<intersection/>").unwrap_err();
    assert_eq!(find_violation(&err), Some(&Violation::EmptyIntersection));
}

#[test]
fn dead_ends_when_allowed() {
    let cfg = LayoutConfig {
        allow_dead_ends: true,
        ..Default::default()
    };
    let raw = "<intersection><road><intersection/></road><street/></intersection>";

    let err = draw_xml(raw).unwrap_err();
    assert_eq!(find_violation(&err), Some(&Violation::EmptyIntersection));

    let (drawing, bounds) = draw_xml_with(raw, &cfg).unwrap();
    let centers: Vec<Pt2D> = drawing.circles().map(|c| c.center).collect();
    assert_eq!(centers, vec![Pt2D::zero(), Pt2D::new(250.0, 0.0)]);
    assert_eq!(drawing.lines().count(), 3 + 2);
    assert_eq!(bounds.max_x, 300.0);
    assert_everything_visible(&drawing, &bounds);

    // The root still needs at least one segment
    let err = draw_xml_with("<intersection/>", &cfg).unwrap_err();
    assert_eq!(find_violation(&err), Some(&Violation::EmptyIntersection));
}

#[test]
fn zero_length_segment() {
    let (drawing, bounds) = draw_xml(
        r#"<intersection><road length="0"><intersection><street/></intersection></road></intersection>"#,
    )
    .unwrap();

    // The road collapses to points on the rim, and the far end sits right there
    for (line, _) in drawing.lines().take(3) {
        assert_eq!(line.pt1(), line.pt2());
        assert_eq!(line.pt1().x(), 50.0);
    }
    let centers: Vec<Pt2D> = drawing.circles().map(|c| c.center).collect();
    assert_eq!(centers, vec![Pt2D::zero(), Pt2D::new(50.0, 0.0)]);
    assert_eq!(bounds.max_x, 300.0);
    assert_everything_visible(&drawing, &bounds);

    let svg = render::to_svg(&drawing, &bounds);
    assert!(svg.contains(r#"<line x1="100" y1="30" x2="100" y2="30" />"#), "{}", svg);
}

#[test]
fn huge_lengths_are_rejected() {
    for raw in [
        r#"<intersection><road length="1e305"/></intersection>"#,
        r#"<intersection intersection_radius="1e305"><road/></intersection>"#,
    ] {
        assert!(draw_xml(raw).is_err(), "{}", raw);
    }
}

#[test]
fn intersection_inside_intersection() {
    let err = draw_xml("<intersection><intersection><road/></intersection></intersection>")
        .unwrap_err();
    assert_eq!(find_violation(&err), Some(&Violation::NestedIntersection));
}

#[test]
fn per_intersection_offsets() {
    // The root's offsets don't leak into the far end, which has its own.
    let (drawing, _) = draw_xml(
        r#"<intersection intersection_offset="90">
             <street>
               <intersection intersection_offset="180" intersection_radius="10">
                 <street length="100"/>
               </intersection>
             </street>
           </intersection>"#,
    )
    .unwrap();

    let centers: Vec<Pt2D> = drawing.circles().map(|c| c.center).collect();
    assert_eq!(centers, vec![Pt2D::zero(), Pt2D::new(0.0, 250.0)]);

    let far_street: Vec<_> = drawing.lines().skip(2).collect();
    for (line, _) in far_street {
        assert!(line.angle().approx_eq(Angle::new_degs(180.0), 0.001));
        assert_eq!(line.pt1().x(), -10.0);
        assert_eq!(line.pt2().x(), -110.0);
    }
}

#[test]
fn rendered_page() {
    let (drawing, bounds) =
        draw_xml("<intersection><road/><road/><road/><road/></intersection>").unwrap();
    let html = render::to_html_page(&drawing, &bounds, "four roads");
    assert!(html.contains(r#"width="500" height="500""#));
    assert!(html.contains("transform: translate(250px, 250px)"));
    assert_eq!(html.matches("<line").count(), 12);
    assert_eq!(html.matches("stroke-dasharray").count(), 4);
    assert_eq!(html.matches("<circle").count(), 1);
}
