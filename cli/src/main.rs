//! Draws a network of streets, roads, and avenues described in XML as a diagram. The result is a
//! minimal HTML page embedding an SVG, or just the SVG.

#[macro_use]
extern crate log;

use std::path::Path;

use anyhow::{bail, Result};
use structopt::StructOpt;

use abstutil::prettyprint_usize;
use geom::Distance;
use road_diagram::{render, LayoutConfig, Network};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "draw_roads",
    about = "Draws a network of streets, roads, and avenues as a diagram"
)]
struct Args {
    /// The XML file describing the network. The top-level element must be an <intersection>.
    #[structopt(short = "f", long = "file", alias = "xml")]
    input: String,
    /// Where to write the diagram
    #[structopt(short = "o", long = "output", alias = "html", default_value = "output.html")]
    output: String,
    /// Write a bare SVG document instead of an HTML page
    #[structopt(long)]
    svg_only: bool,
    /// Also write every draw command and the canvas size as JSON to this path
    #[structopt(long)]
    dump_json: Option<String>,
    /// A JSON file with layout settings. Flags below override it.
    #[structopt(long)]
    config: Option<String>,
    #[structopt(flatten)]
    overrides: ConfigOverrides,
}

#[derive(StructOpt, Debug)]
struct ConfigOverrides {
    /// The width of one lane
    #[structopt(long)]
    lane_width: Option<f64>,
    /// The length of segments that don't specify one
    #[structopt(long)]
    default_length: Option<f64>,
    /// The radius of intersections that don't specify one
    #[structopt(long)]
    default_radius: Option<f64>,
    /// Fail if the network nests more intersections deep than this
    #[structopt(long)]
    max_depth: Option<usize>,
    /// Draw intersections without any segments as dead ends, instead of failing
    #[structopt(long)]
    allow_dead_ends: bool,
}

impl ConfigOverrides {
    fn apply(&self, cfg: &mut LayoutConfig) -> Result<()> {
        for (flag, value, field) in [
            ("--lane-width", self.lane_width, &mut cfg.lane_width),
            (
                "--default-length",
                self.default_length,
                &mut cfg.default_segment_length,
            ),
            (
                "--default-radius",
                self.default_radius,
                &mut cfg.default_intersection_radius,
            ),
        ] {
            if let Some(value) = value {
                if !value.is_finite() {
                    bail!("{} must be a finite number, not {}", flag, value);
                }
                *field = Distance::meters(value);
            }
        }
        if let Some(max_depth) = self.max_depth {
            cfg.max_depth = max_depth;
        }
        if self.allow_dead_ends {
            cfg.allow_dead_ends = true;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::from_args();
    abstutil::logger::setup();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut cfg = match args.config {
        Some(ref path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    args.overrides.apply(&mut cfg)?;
    cfg.validate()?;

    let network = Network::load(&args.input)?;
    info!(
        "Read {} intersections and {} segments from {}",
        prettyprint_usize(network.num_intersections()),
        prettyprint_usize(network.num_segments()),
        args.input
    );

    // Nothing gets written unless layout succeeds
    let (drawing, bounds) = road_diagram::draw_network(&network, &cfg)?;
    let contents = if args.svg_only {
        render::to_svg(&drawing, &bounds)
    } else {
        render::to_html_page(&drawing, &bounds, &page_title(&args.input))
    };

    if let Some(ref path) = args.dump_json {
        fs_err::write(path, render::to_json(&drawing, &bounds)?)?;
        info!("Wrote {}", path);
    }
    fs_err::write(&args.output, contents)?;
    info!("Wrote {}", args.output);
    Ok(())
}

fn page_title(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| input.to_string())
}
