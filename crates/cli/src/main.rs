use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use walkpoly::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use walkpoly::{EdgeScan, GeomCfg, Vec2};

mod input;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "walkpoly-cli")]
#[command(about = "Walk-area polygon queries")]
struct Cmd {
    /// Coordinate matching tolerance for vertex lookups (0 = exact)
    #[arg(long, default_value_t = 0.0)]
    cfg_eps: f64,

    /// Line of sight checks vertex pairs instead of boundary edges
    #[arg(long)]
    legacy_edge_scan: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull vertices (CCW)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Vertices not on the convex hull
    Concave {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Point containment
    Inside {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Closest boundary point
    Closest {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Line of sight between two points
    Sight {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        ax: f64,
        #[arg(long, allow_hyphen_values = true)]
        ay: f64,
        #[arg(long, allow_hyphen_values = true)]
        bx: f64,
        #[arg(long, allow_hyphen_values = true)]
        by: f64,
    },
    /// Delaunay triangles of the vertex set
    Triangles {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random star-shaped polygon as JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct PointsOut {
    count: usize,
    points: Vec<[f64; 2]>,
}

impl PointsOut {
    fn new(points: &[Vec2]) -> Self {
        Self {
            count: points.len(),
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg {
        match_eps: cmd.cfg_eps.max(0.0),
        edge_scan: if cmd.legacy_edge_scan {
            EdgeScan::Legacy
        } else {
            EdgeScan::Boundary
        },
    };
    match cmd.action {
        Action::Hull { input, out } => hull(&input, out.as_deref(), cfg),
        Action::Concave { input, out } => concave(&input, out.as_deref(), cfg),
        Action::Inside { input, x, y } => inside(&input, Vec2::new(x, y), cfg),
        Action::Closest { input, x, y } => closest(&input, Vec2::new(x, y), cfg),
        Action::Sight {
            input,
            ax,
            ay,
            bx,
            by,
        } => sight(&input, Vec2::new(ax, ay), Vec2::new(bx, by), cfg),
        Action::Triangles { input, out } => triangles(&input, out.as_deref(), cfg),
        Action::Sample {
            seed,
            index,
            vertices,
            out,
        } => sample(seed, index, vertices, &out),
        Action::Report => report(),
    }
}

fn hull(input: &Path, out: Option<&Path>, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), "hull");
    let poly = input::load_polygon(input, cfg)?;
    let hull = poly.convex_hull();
    if !hull.is_proper() {
        tracing::warn!(len = hull.len(), "hull is degenerate (collinear input)");
    }
    emit("hull", input, out, &PointsOut::new(hull.points()))
}

fn concave(input: &Path, out: Option<&Path>, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), "concave");
    let poly = input::load_polygon(input, cfg)?;
    emit("concave", input, out, &PointsOut::new(&poly.concave_vertices()))
}

fn inside(input: &Path, p: Vec2, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), x = p.x, y = p.y, "inside");
    let poly = input::load_polygon(input, cfg)?;
    let obj = json!({ "point": [p.x, p.y], "inside": poly.is_point_inside(p) });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn closest(input: &Path, p: Vec2, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), x = p.x, y = p.y, "closest");
    let poly = input::load_polygon(input, cfg)?;
    let c = poly.closest_point_to(p);
    let obj = json!({
        "point": [p.x, p.y],
        "closest": [c.x, c.y],
        "distance": (c - p).norm(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn sight(input: &Path, a: Vec2, b: Vec2, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), edge_scan = ?cfg.edge_scan, "sight");
    let poly = input::load_polygon(input, cfg)?;
    let obj = json!({
        "a": [a.x, a.y],
        "b": [b.x, b.y],
        "edge_scan": format!("{:?}", cfg.edge_scan),
        "visible": poly.points_can_see_each_other(a, b),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn triangles(input: &Path, out: Option<&Path>, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), "triangles");
    let poly = input::load_polygon(input, cfg)?;
    let tris = poly.triangles();
    let obj = json!({ "count": tris.len(), "triangles": tris });
    emit("triangles", input, out, &obj)
}

fn sample(seed: u64, index: u64, vertices: usize, out: &Path) -> Result<()> {
    tracing::info!(seed, index, vertices, out = %out.display(), "sample");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(cfg, ReplayToken { seed, index })?;
    write_json(out, &poly.raw_vertices())?;
    let payload = Payload::new(
        "sample",
        json!({ "seed": seed, "index": index, "vertices": vertices }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "walkpoly_version": walkpoly::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Print `value`; with `out`, also write it there plus a provenance sidecar.
fn emit<T: Serialize>(command: &str, input: &Path, out: Option<&Path>, value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    if let Some(out) = out {
        write_json(out, value)?;
        let payload = Payload::new(command, json!({ "input": input.to_string_lossy() }));
        write_sidecar(out, payload)?;
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
